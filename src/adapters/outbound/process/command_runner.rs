use crate::ports::outbound::CommandRunner;
use crate::scan_pipeline::domain::CommandInvocation;
use crate::shared::error::ImagePushError;
use crate::shared::Result;
use async_trait::async_trait;
use tokio::process::Command;

/// ProcessCommandRunner adapter for running programs as child processes
///
/// stdout and stderr are inherited, so `docker` progress output appears in
/// the terminal next to the log lines.
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, command: &CommandInvocation) -> Result<()> {
        tracing::debug!(command = %command, "running external command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| ImagePushError::SpawnFailed {
                command: command.to_string(),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(ImagePushError::NonZeroExit {
                command: command.to_string(),
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_command() {
        let runner = ProcessCommandRunner::new();
        let result = runner.run(&CommandInvocation::new("true", Vec::<String>::new())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_zero_exit() {
        let runner = ProcessCommandRunner::new();
        let err = runner
            .run(&CommandInvocation::new("sh", ["-c", "exit 3"]))
            .await
            .unwrap_err();

        match err.downcast_ref::<ImagePushError>() {
            Some(ImagePushError::NonZeroExit { code, .. }) => assert_eq!(*code, Some(3)),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program() {
        let runner = ProcessCommandRunner::new();
        let err = runner
            .run(&CommandInvocation::new(
                "xray-load-no-such-program",
                ["pull", "alpine:3.9"],
            ))
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ImagePushError>(),
            Some(ImagePushError::SpawnFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_error_message_masks_password() {
        let runner = ProcessCommandRunner::new();
        let err = runner
            .run(&CommandInvocation::new("sh", ["-c", "exit 1", "-p", "s3cret"]))
            .await
            .unwrap_err();
        assert!(!err.to_string().contains("s3cret"));
    }
}
