//! Manual builder — sequential survey of tool help invocations.
//!
//! One attempt per name, input order, no retries: the target use is a
//! one-shot manual snapshot, not a live health check. A failure or timeout
//! on one name is recorded and the batch continues.

use crate::exec::ExecutionEngine;
use crate::manual::store::ManualStore;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Flag appended to every surveyed name.
const HELP_FLAG: &str = "-h";

/// Drives the execution engine across an ordered list of tool names.
#[derive(Debug)]
pub struct ManualBuilder {
    engine: ExecutionEngine,
    command_timeout: Duration,
}

impl ManualBuilder {
    pub fn new(engine: ExecutionEngine, command_timeout: Duration) -> Self {
        Self {
            engine,
            command_timeout,
        }
    }

    /// Survey every name in order. Never aborts early on a bad tool.
    pub async fn build(&self, names: &[String]) -> ManualStore {
        self.build_with_cancel(names, &CancellationToken::new())
            .await
    }

    /// Survey with external cancellation. Cancelling stops the remaining
    /// queue; entries already recorded are kept and remain valid to persist.
    pub async fn build_with_cancel(
        &self,
        names: &[String],
        cancel: &CancellationToken,
    ) -> ManualStore {
        let mut store = ManualStore::new();

        for (i, name) in names.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::warn!(
                    recorded = store.len(),
                    total = names.len(),
                    "manual build cancelled; keeping partial results"
                );
                break;
            }

            let command = format!("{} {}", name, HELP_FLAG);
            let argv = vec![name.clone(), HELP_FLAG.to_string()];
            tracing::info!(command = %command, "executing {}/{}", i + 1, names.len());

            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    // The dropped run future kills its child on the way out.
                    tracing::warn!(command = %command, "cancelled mid-command; keeping partial results");
                    break;
                }
                result = self.engine.run_with_timeout(&argv, self.command_timeout) => result,
            };

            tracing::info!(
                command = %command,
                status = ?result.status,
                rc = %result.returncode,
                "recorded"
            );
            store.insert(command, result);
        }

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{ExecStatus, ReturnCode};
    use crate::types::ExecutionConfig;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    fn builder(timeout: Duration) -> ManualBuilder {
        let engine = ExecutionEngine::new(&ExecutionConfig {
            default_timeout: timeout,
        });
        ManualBuilder::new(engine, timeout)
    }

    /// Script that ignores its arguments and sleeps well past any test
    /// deadline. Returns the script's absolute path, usable as a "name".
    fn hang_script(dir: &tempfile::TempDir) -> String {
        let path = dir.path().join("hangtool");
        std::fs::write(&path, "#!/bin/sh\nsleep 30\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_middle_timeout_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let hang = hang_script(&dir);
        let names = vec!["echo".to_string(), hang.clone(), "false".to_string()];

        let store = builder(Duration::from_millis(200)).build(&names).await;

        assert_eq!(store.len(), 3);
        assert_eq!(
            store.commands(),
            vec![
                "echo -h".to_string(),
                format!("{} -h", hang),
                "false -h".to_string()
            ]
        );
        assert_eq!(store.get("echo -h").unwrap().status, ExecStatus::Success);
        let timed_out = store.get(&format!("{} -h", hang)).unwrap();
        assert_eq!(timed_out.status, ExecStatus::Timeout);
        assert_eq!(timed_out.returncode, ReturnCode::Incomplete);
        assert_eq!(timed_out.output, "TIMEOUT");
        assert_eq!(store.get("false -h").unwrap().status, ExecStatus::Failed);
    }

    #[tokio::test]
    async fn test_keys_are_literal_command_strings() {
        let store = builder(Duration::from_secs(5))
            .build(&["echo".to_string()])
            .await;
        assert_eq!(store.commands(), vec!["echo -h"]);
    }

    #[tokio::test]
    async fn test_missing_tool_recorded_not_fatal() {
        let names = vec![
            "no-such-binary-xyzzy".to_string(),
            "echo".to_string(),
        ];
        let store = builder(Duration::from_secs(5)).build(&names).await;
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get("no-such-binary-xyzzy -h").unwrap().status,
            ExecStatus::Failed
        );
        assert_eq!(store.get("echo -h").unwrap().status, ExecStatus::Success);
    }

    #[tokio::test]
    async fn test_precancelled_token_yields_empty_store() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let store = builder(Duration::from_secs(5))
            .build_with_cancel(&["echo".to_string()], &cancel)
            .await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_mid_batch_keeps_recorded_entries() {
        let dir = tempfile::tempdir().unwrap();
        let hang = hang_script(&dir);
        let names = vec!["echo".to_string(), hang, "echo".to_string()];

        let cancel = CancellationToken::new();
        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(150)).await;
            canceller.cancel();
        });

        // Generous per-command timeout: cancellation, not the deadline,
        // must cut the hanging middle entry short.
        let store = builder(Duration::from_secs(30))
            .build_with_cancel(&names, &cancel)
            .await;

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("echo -h").unwrap().status, ExecStatus::Success);
    }
}
