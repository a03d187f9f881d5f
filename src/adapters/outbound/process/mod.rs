/// Process adapters for external command-line tools
mod command_runner;

pub use command_runner::ProcessCommandRunner;
