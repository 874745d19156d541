//! Opaque external command execution.
//!
//! Build stages are external tools we know nothing about beyond their exit
//! code and output streams. The [`CommandExecutor`] trait keeps that
//! boundary injectable so the runner can be tested against scripted
//! outcomes without spawning processes.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;
use wait_timeout::ChildExt;

/// Default timeout for pipeline stage commands (5 minutes)
pub const DEFAULT_STAGE_TIMEOUT: Duration = Duration::from_secs(300);

/// Timeout for collecting output from child process pipes
const OUTPUT_COLLECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum captured output per stream (10MB)
const MAX_OUTPUT_SIZE: usize = 10 * 1024 * 1024;

/// What to execute: a shell command line, where, and for how long at most.
#[derive(Debug, Clone)]
pub struct ExecutionSpec {
    pub command: String,
    /// Directory to run in; the caller's current directory if `None`
    pub working_dir: Option<PathBuf>,
    pub timeout: Duration,
}

/// Everything that crosses the external-command boundary back to us.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Exit code; `None` if the process was killed (timeout)
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Whether the command was terminated due to timeout
    pub timed_out: bool,
    pub duration: Duration,
}

impl ExecutionResult {
    /// A command succeeded iff it ran to completion with exit code 0.
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Boundary for running one external command to completion.
pub trait CommandExecutor {
    fn execute(&self, spec: &ExecutionSpec) -> Result<ExecutionResult>;
}

/// Executes commands through the system shell.
///
/// Uses `sh -c` on Unix and `cmd /C` on Windows. The command string is
/// passed as a single argument to avoid improper argument splitting.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, spec: &ExecutionSpec) -> Result<ExecutionResult> {
        let start = Instant::now();
        debug!(command = %spec.command, timeout_secs = spec.timeout.as_secs(), "spawning stage command");

        let mut child = spawn_shell_command(spec)?;

        // IMPORTANT: Start reading output BEFORE waiting for exit.
        // If we wait first, the child may block on write() when the pipe
        // buffer fills up (~64KB on Linux), causing a deadlock. The pipes
        // must be drained concurrently with waiting for the exit.
        let stdout_handle = child.stdout.take();
        let stderr_handle = child.stderr.take();

        let (stdout_tx, stdout_rx) = mpsc::channel();
        let (stderr_tx, stderr_rx) = mpsc::channel();

        if let Some(stdout) = stdout_handle {
            thread::spawn(move || {
                let _ = stdout_tx.send(read_stream_to_string(stdout));
            });
        } else {
            let _ = stdout_tx.send(String::new());
        }

        if let Some(stderr) = stderr_handle {
            thread::spawn(move || {
                let _ = stderr_tx.send(read_stream_to_string(stderr));
            });
        } else {
            let _ = stderr_tx.send(String::new());
        }

        let wait_result = child
            .wait_timeout(spec.timeout)
            .with_context(|| format!("Failed to wait for command: {}", spec.command))?;

        let duration = start.elapsed();

        // Reader threads should finish quickly once the process exits
        let stdout = stdout_rx
            .recv_timeout(OUTPUT_COLLECTION_TIMEOUT)
            .unwrap_or_else(|_| "[output collection timed out]".to_string());
        let stderr = stderr_rx
            .recv_timeout(OUTPUT_COLLECTION_TIMEOUT)
            .unwrap_or_else(|_| "[output collection timed out]".to_string());

        match wait_result {
            Some(status) => {
                debug!(exit_code = ?status.code(), elapsed_ms = duration.as_millis() as u64, "stage command exited");
                Ok(ExecutionResult {
                    exit_code: status.code(),
                    stdout,
                    stderr,
                    timed_out: false,
                    duration,
                })
            }
            None => {
                debug!(timeout_secs = spec.timeout.as_secs(), "stage command timed out, killing");
                kill_child_process(&mut child);
                Ok(ExecutionResult {
                    exit_code: None,
                    stdout,
                    stderr: format!(
                        "{}\n[Process killed after {}s timeout]",
                        stderr,
                        spec.timeout.as_secs()
                    ),
                    timed_out: true,
                    duration,
                })
            }
        }
    }
}

fn spawn_shell_command(spec: &ExecutionSpec) -> Result<Child> {
    let mut cmd = if cfg!(target_family = "unix") {
        let mut c = Command::new("sh");
        c.arg("-c").arg(&spec.command);
        c
    } else {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(&spec.command);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = &spec.working_dir {
        cmd.current_dir(dir);
    }

    cmd.spawn()
        .with_context(|| format!("Failed to spawn command: {}", spec.command))
}

/// Read a stream to string, capping total size.
///
/// If output exceeds MAX_OUTPUT_SIZE the remaining data is discarded (the
/// stream is still drained to prevent broken pipe errors) and a truncation
/// note is appended.
fn read_stream_to_string<R: Read>(mut stream: R) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break, // EOF
            Ok(n) => {
                let remaining = MAX_OUTPUT_SIZE.saturating_sub(buf.len());
                let to_copy = n.min(remaining);
                buf.extend_from_slice(&chunk[..to_copy]);
                if to_copy < n {
                    let mut discard = [0u8; 8192];
                    while stream.read(&mut discard).unwrap_or(0) > 0 {}
                    buf.extend_from_slice(b"\n[output truncated at 10MB]");
                    break;
                }
            }
            Err(_) => {
                if buf.is_empty() {
                    return "[error reading output]".to_string();
                }
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

/// Terminate a child process and reap it.
fn kill_child_process(child: &mut Child) {
    // The process may have already exited, so kill errors are ignored
    let _ = child.kill();
    let _ = child.wait();
}
