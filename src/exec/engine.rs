//! Deadline-bounded command execution.
//!
//! One external program per call: argv[0] is resolved on the search path,
//! remaining tokens are passed verbatim as arguments. No shell is involved,
//! so there is no metacharacter expansion and no injection surface from the
//! command string.

use crate::exec::result::ExecutionResult;
use crate::types::ExecutionConfig;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Exit code recorded when the program cannot be spawned at all
/// (search-path resolution failure convention).
const SPAWN_FAILURE_CODE: i32 = 127;

/// Split a whitespace-delimited command string into argv tokens.
///
/// Arguments containing embedded whitespace cannot be expressed this way;
/// callers that need them must pass discrete tokens to
/// [`ExecutionEngine::run`] directly.
pub fn split_command_line(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Runs one external command under a deadline and classifies the outcome.
///
/// `run` never returns an error: spawn failures, non-zero exits, and
/// deadline expiries are all captured into the returned [`ExecutionResult`].
#[derive(Debug, Clone)]
pub struct ExecutionEngine {
    default_timeout: Duration,
}

impl ExecutionEngine {
    pub fn new(config: &ExecutionConfig) -> Self {
        Self {
            default_timeout: config.default_timeout,
        }
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Run with the engine's configured deadline.
    pub async fn run(&self, argv: &[String]) -> ExecutionResult {
        self.run_with_timeout(argv, self.default_timeout).await
    }

    /// Run with an explicit deadline.
    pub async fn run_with_timeout(&self, argv: &[String], limit: Duration) -> ExecutionResult {
        let Some((program, args)) = argv.split_first() else {
            return ExecutionResult::failed(SPAWN_FAILURE_CODE, "empty command line".to_string());
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(program = %program, "spawn failed: {}", e);
                return ExecutionResult::failed(
                    SPAWN_FAILURE_CODE,
                    format!("failed to spawn {}: {}", program, e),
                );
            }
        };

        // Drain both pipes concurrently while waiting, so a chatty child
        // cannot fill a pipe buffer and deadlock against its own exit.
        let stdout_task = tokio::spawn(drain(child.stdout.take()));
        let stderr_task = tokio::spawn(drain(child.stderr.take()));

        match tokio::time::timeout(limit, child.wait()).await {
            Err(_elapsed) => {
                // SIGKILL and reap; kill_on_drop backstops the error path.
                if let Err(e) = child.kill().await {
                    tracing::warn!(program = %program, "kill after timeout failed: {}", e);
                }
                stdout_task.abort();
                stderr_task.abort();
                tracing::warn!(program = %program, timeout = ?limit, "command timed out");
                ExecutionResult::timeout()
            }
            Ok(Err(e)) => {
                stdout_task.abort();
                stderr_task.abort();
                ExecutionResult::failed(-1, format!("failed to wait for {}: {}", program, e))
            }
            Ok(Ok(status)) => {
                let stdout = stdout_task.await.unwrap_or_default();
                let stderr = stderr_task.await.unwrap_or_default();
                classify(status, stdout, stderr)
            }
        }
    }
}

/// Read a pipe to completion, lossy on invalid UTF-8.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let Some(mut reader) = pipe else {
        return String::new();
    };
    let mut buf = Vec::new();
    if let Err(e) = reader.read_to_end(&mut buf).await {
        tracing::debug!("pipe read error: {}", e);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Reduce an exited process to an `ExecutionResult`.
///
/// Output stream preference: on failure stderr wins when non-empty; on
/// success stdout wins unless it is empty and stderr is not — some legacy
/// tools print their help text to stderr even when exiting zero, and that
/// diagnostic text must not be lost.
fn classify(status: std::process::ExitStatus, stdout: String, stderr: String) -> ExecutionResult {
    if status.success() {
        let output = if stdout.is_empty() && !stderr.is_empty() {
            stderr
        } else {
            stdout
        };
        ExecutionResult::success(output)
    } else {
        let code = status.code().unwrap_or(-1);
        let output = if !stderr.is_empty() { stderr } else { stdout };
        ExecutionResult::failed(code, output)
    }
}
