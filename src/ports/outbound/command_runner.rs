use crate::scan_pipeline::domain::CommandInvocation;
use crate::shared::Result;
use async_trait::async_trait;

/// CommandRunner port for running external programs to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command and waits for it to exit
    ///
    /// # Errors
    /// Returns an error if the program cannot be started or exits with a
    /// non-zero status.
    async fn run(&self, command: &CommandInvocation) -> Result<()>;
}
