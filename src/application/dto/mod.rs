/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod load_test_request;
mod load_test_response;
mod output_format;

pub use load_test_request::LoadTestRequest;
pub use load_test_response::{LoadTestResponse, StopReason};
pub use output_format::OutputFormat;
