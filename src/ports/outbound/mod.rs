/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (platform API, processes, console, output).
pub mod command_runner;
pub mod formatter;
pub mod output_presenter;
pub mod platform_api;
pub mod progress_reporter;

pub use command_runner::CommandRunner;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use platform_api::XrayPlatform;
pub use progress_reporter::{ProgressReporter, ProgressSnapshot};
