//! Static artifact checks against a project root.
//!
//! Every check here is read-only: presence tests never create, modify, or
//! remove files, so the checker can run any number of times against the
//! same tree and report the same result.

use colored::Colorize;
use std::path::Path;

/// File whose presence confirms we are looking at the project root.
pub const ROOT_MARKER: &str = "package.json";

/// A file the pipeline is expected to have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedArtifact {
    /// Path relative to the project root
    pub path: &'static str,
    /// Human-readable description for the transcript
    pub description: &'static str,
}

/// Check that `root` actually is a project root.
///
/// Gates all subsequent checks: running against the wrong directory would
/// report every artifact as missing, which is worse than no report.
pub fn verify_project_root(root: &Path) -> bool {
    if root.join(ROOT_MARKER).exists() {
        true
    } else {
        println!(
            "{} Not in project root ({} not found in {})",
            "✗".red(),
            ROOT_MARKER,
            root.display()
        );
        false
    }
}

/// Test each expected artifact for existence under `root`.
///
/// Returns the overall result (AND across all entries) plus a per-artifact
/// presence flag in declaration order. Never fails: a missing file is a
/// `false` entry, not an error.
pub fn check_artifacts<'a>(
    root: &Path,
    artifacts: &'a [ExpectedArtifact],
) -> (bool, Vec<(&'a ExpectedArtifact, bool)>) {
    let mut all_present = true;
    let mut results = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let present = root.join(artifact.path).exists();
        all_present &= present;
        results.push((artifact, present));
    }

    (all_present, results)
}

/// Print one transcript line for an artifact presence result.
pub fn print_artifact_line(artifact: &ExpectedArtifact, present: bool) {
    if present {
        println!("{} {}: {}", "✓".green(), artifact.description, artifact.path);
    } else {
        println!(
            "{} Missing {}: {}",
            "✗".red(),
            artifact.description,
            artifact.path
        );
    }
}
