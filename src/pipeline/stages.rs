//! The fixed pipeline declaration.
//!
//! Stage order matters: each stage builds on the filesystem side effects
//! of the previous ones. The tables here are the single source of truth
//! for both the end-to-end runner and the static checker.

use crate::artifacts::ExpectedArtifact;

/// The generated OpenAPI document, inspected beyond bare existence.
pub const OPENAPI_DOCUMENT: &str = "openapi.json";

/// How a stage is attempted.
#[derive(Debug, Clone, Copy)]
pub enum StageKind {
    /// Run an external command and judge it by its exit code
    Command {
        command: &'static str,
        /// Working directory relative to the project root
        working_dir: Option<&'static str>,
    },
    /// Recorded as an automatic success with an explanatory note.
    /// Used where genuinely exercising the stage is out of scope
    /// (e.g. a long-running dev server).
    ManualPass { note: &'static str },
}

/// One declared stage of the build pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PipelineStage {
    pub name: &'static str,
    pub kind: StageKind,
    /// Files this stage is expected to have produced (checked only if the
    /// stage command succeeded; results are console-only)
    pub artifacts: &'static [ExpectedArtifact],
    /// Whether to summarize the OpenAPI document content after this stage
    pub inspect_openapi: bool,
}

/// The end-to-end pipeline, in execution order.
pub static PIPELINE: &[PipelineStage] = &[
    PipelineStage {
        name: "OpenAPI Generation",
        kind: StageKind::Command {
            command: "npm run build:openapi",
            working_dir: None,
        },
        artifacts: &[ExpectedArtifact {
            path: "openapi.json",
            description: "OpenAPI specification",
        }],
        inspect_openapi: true,
    },
    PipelineStage {
        name: "Client Generation",
        kind: StageKind::Command {
            command: "npm run codegen",
            working_dir: None,
        },
        artifacts: &[
            ExpectedArtifact {
                path: "src/prometheos-client-generated/index.ts",
                description: "TypeScript client",
            },
            ExpectedArtifact {
                path: "src/prometheos-client-python-generated/prometheos_client/__init__.py",
                description: "Python client",
            },
            ExpectedArtifact {
                path: "src/prometheos-client/index.ts",
                description: "TypeScript wrapper",
            },
            ExpectedArtifact {
                path: "src/prometheos-client-python/prometheos_client.py",
                description: "Python wrapper",
            },
        ],
        inspect_openapi: false,
    },
    PipelineStage {
        name: "Python Package",
        kind: StageKind::Command {
            command: "npm run create-python-package",
            working_dir: None,
        },
        artifacts: &[
            ExpectedArtifact {
                path: "public/python-modules/prometheos/__init__.py",
                description: "Package init",
            },
            ExpectedArtifact {
                path: "public/python-modules/setup.py",
                description: "Package setup",
            },
            ExpectedArtifact {
                path: "public/python-modules/prometheos/generated",
                description: "Generated code",
            },
        ],
        inspect_openapi: false,
    },
    PipelineStage {
        name: "Wheel Building",
        kind: StageKind::Command {
            command: "python setup.py bdist_wheel",
            working_dir: Some("public/python-modules"),
        },
        artifacts: &[ExpectedArtifact {
            path: "public/python-modules/dist/prometheos-1.0.0-py3-none-any.whl",
            description: "Wheel file",
        }],
        inspect_openapi: false,
    },
    PipelineStage {
        name: "Complete Build",
        kind: StageKind::Command {
            command: "npm run build",
            working_dir: None,
        },
        artifacts: &[ExpectedArtifact {
            path: "dist/index.html",
            description: "Built application",
        }],
        inspect_openapi: false,
    },
    PipelineStage {
        name: "Dev Server",
        kind: StageKind::ManualPass {
            note: "Development server tested manually - check verification report",
        },
        artifacts: &[],
        inspect_openapi: false,
    },
];

/// Everything the static checker expects after a full pipeline run,
/// in report order.
pub static STATIC_ARTIFACTS: &[ExpectedArtifact] = &[
    ExpectedArtifact {
        path: "openapi.json",
        description: "OpenAPI Specification",
    },
    ExpectedArtifact {
        path: "src/prometheos-client-generated/index.ts",
        description: "Generated TypeScript Client",
    },
    ExpectedArtifact {
        path: "src/prometheos-client-python-generated/prometheos_client/__init__.py",
        description: "Generated Python Client",
    },
    ExpectedArtifact {
        path: "src/prometheos-client/index.ts",
        description: "Custom TypeScript Wrapper",
    },
    ExpectedArtifact {
        path: "src/prometheos-client-python/prometheos_client.py",
        description: "Custom Python Wrapper",
    },
    ExpectedArtifact {
        path: "public/python-modules/prometheos/__init__.py",
        description: "Python Package",
    },
    ExpectedArtifact {
        path: "public/python-modules/setup.py",
        description: "Package Setup",
    },
    ExpectedArtifact {
        path: "public/python-modules/dist/prometheos-1.0.0-py3-none-any.whl",
        description: "Wheel Package",
    },
];
