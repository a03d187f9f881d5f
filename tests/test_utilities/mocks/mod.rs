/// Mock implementations for testing
mod mock_command_runner;
mod mock_progress_reporter;
mod mock_xray_platform;

pub use mock_command_runner::MockCommandRunner;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_xray_platform::MockXrayPlatform;
