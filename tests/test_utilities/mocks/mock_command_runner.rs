use std::sync::{Arc, Mutex};
use xray_load::prelude::*;
use xray_load::shared::error::ImagePushError;

/// Mock CommandRunner that records commands and fails on a chosen subcommand
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    fail_on: Option<String>,
    commands: Arc<Mutex<Vec<CommandInvocation>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command whose first argument is `subcommand` exits with status 1
    pub fn failing_on(subcommand: &str) -> Self {
        Self {
            fail_on: Some(subcommand.to_string()),
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn commands(&self) -> Vec<CommandInvocation> {
        self.commands.lock().unwrap().clone()
    }

    pub fn subcommands(&self) -> Vec<String> {
        self.commands()
            .iter()
            .filter_map(|c| c.subcommand().map(str::to_string))
            .collect()
    }
}

#[async_trait::async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, command: &CommandInvocation) -> Result<()> {
        self.commands.lock().unwrap().push(command.clone());

        if command.subcommand() == self.fail_on.as_deref() {
            return Err(ImagePushError::NonZeroExit {
                command: command.to_string(),
                code: Some(1),
            }
            .into());
        }
        Ok(())
    }
}
