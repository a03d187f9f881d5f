use super::credentials::Credentials;
use super::target::TargetCoordinates;
use crate::shared::security::redact_command_line;
use std::fmt;

/// Container CLI used for the push
pub const DOCKER_PROGRAM: &str = "docker";

/// One external program call
#[derive(Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// First argument, e.g. `pull` for `docker pull ...`
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

/// Displays the command line with secrets masked
impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact_command_line(&self.program, &self.args))
    }
}

impl fmt::Debug for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandInvocation({})", self)
    }
}

/// The four `docker` calls that copy the public image into the platform registry:
/// pull, login, tag, push. They run in this order and stop at the first failure.
pub fn image_push_commands(
    target: &TargetCoordinates,
    credentials: &Credentials,
) -> Vec<CommandInvocation> {
    let source = target.source_image();
    let destination = target.target_image();

    vec![
        CommandInvocation::new(DOCKER_PROGRAM, ["pull".to_string(), source.clone()]),
        CommandInvocation::new(
            DOCKER_PROGRAM,
            [
                "login".to_string(),
                target.registry_host(),
                "-u".to_string(),
                credentials.username().to_string(),
                "-p".to_string(),
                credentials.password().to_string(),
            ],
        ),
        CommandInvocation::new(
            DOCKER_PROGRAM,
            ["tag".to_string(), source, destination.clone()],
        ),
        CommandInvocation::new(DOCKER_PROGRAM, ["push".to_string(), destination]),
    ]
}
