use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI jobs to tell a clean load run from one
/// that recorded request failures or could not run at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run finished (failures are only reported, not fatal)
    Success = 0,
    /// Request failures were recorded and `--fail-on-error` was set
    FailuresRecorded = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, report output, runtime setup)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FailuresRecorded => write!(f, "Failures Recorded (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// User-facing errors raised outside the scenario itself.
///
/// Failures inside a pipeline iteration never surface here; they end up in
/// the request statistics or the log.
#[derive(Debug, Error)]
pub enum LoadTestError {
    #[error("Invalid load profile: {field}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidLoadProfile {
        field: String,
        reason: String,
        hint: String,
    },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to build HTTP client for {base_url}\nDetails: {details}")]
    ClientSetupError { base_url: String, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Failure while pushing the container image with the `docker` CLI.
///
/// Both variants are handled as one class by the pipeline: logged, never
/// counted as a request failure.
#[derive(Debug, Error)]
pub enum ImagePushError {
    #[error("command `{command}` could not be started: {details}")]
    SpawnFailed { command: String, details: String },

    #[error("command `{command}` exited with {}", exit_code_label(.code))]
    NonZeroExit { command: String, code: Option<i32> },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::FailuresRecorded.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::FailuresRecorded),
            "Failures Recorded (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_load_profile_display() {
        let error = LoadTestError::InvalidLoadProfile {
            field: "users".to_string(),
            reason: "must be at least 1".to_string(),
            hint: "Pass --users 1 or more".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid load profile: users"));
        assert!(display.contains("must be at least 1"));
        assert!(display.contains("💡 Hint: Pass --users 1 or more"));
    }

    #[test]
    fn test_config_parse_error_display() {
        let error = LoadTestError::ConfigParseError {
            path: PathBuf::from("/tmp/xray-load.config.yml"),
            details: "mapping values are not allowed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse config file"));
        assert!(display.contains("/tmp/xray-load.config.yml"));
        assert!(display.contains("valid YAML"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = LoadTestError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_image_push_error_non_zero_exit() {
        let error = ImagePushError::NonZeroExit {
            command: "docker pull alpine:3.9".to_string(),
            code: Some(1),
        };
        assert_eq!(
            error.to_string(),
            "command `docker pull alpine:3.9` exited with status 1"
        );
    }

    #[test]
    fn test_image_push_error_signal() {
        let error = ImagePushError::NonZeroExit {
            command: "docker push x".to_string(),
            code: None,
        };
        assert!(error.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_image_push_error_spawn_failed() {
        let error = ImagePushError::SpawnFailed {
            command: "docker pull alpine:3.9".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("could not be started"));
        assert!(display.contains("No such file or directory"));
    }
}
