/// End-to-end tests for the CLI
///
/// Runs are pointed at a closed local port and a PATH without `docker`, so
/// every request fails fast with a transport error and the image push fails
/// to start. Nothing leaves the machine.
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Nothing listens on the discard port
const CLOSED_HOST: &str = "http://127.0.0.1:9";

/// Command with a clean environment and the required account flags
fn xray_load(sandbox: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("xray-load");
    cmd.env_clear()
        .env("PATH", sandbox.path())
        .current_dir(sandbox.path())
        .args([
            "--username",
            "user",
            "--password",
            "s3cret",
            "--platform-id",
            "acme",
        ]);
    cmd
}

/// One user, one iteration, no pause
fn single_iteration(sandbox: &TempDir) -> Command {
    let mut cmd = xray_load(sandbox);
    cmd.args([
        "--host",
        CLOSED_HOST,
        "--iterations",
        "1",
        "--wait-min",
        "0",
        "--wait-max",
        "0",
    ]);
    cmd
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("xray-load")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("--spawn-rate"))
            .stdout(predicate::str::contains("JFROG_PLATFORM_ID"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("xray-load")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        let sandbox = TempDir::new().unwrap();
        xray_load(&sandbox)
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Required account settings missing
    #[test]
    fn test_exit_code_missing_credentials() {
        cargo_bin_cmd!("xray-load")
            .env_clear()
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--username"));
    }

    /// Account settings are read from the environment
    #[test]
    fn test_credentials_from_environment() {
        let sandbox = TempDir::new().unwrap();
        cargo_bin_cmd!("xray-load")
            .env_clear()
            .env("PATH", sandbox.path())
            .env("JFROG_USERNAME", "user")
            .env("JFROG_PASSWORD", "s3cret")
            .env("JFROG_PLATFORM_ID", "acme")
            .current_dir(sandbox.path())
            .args(["--host", CLOSED_HOST, "-n", "1", "--wait-min", "0", "--wait-max", "0"])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        let sandbox = TempDir::new().unwrap();
        xray_load(&sandbox)
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Load profile rejected after merging
    #[test]
    fn test_exit_code_invalid_profile() {
        let sandbox = TempDir::new().unwrap();
        xray_load(&sandbox)
            .args(["--users", "0"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid load profile: users"));
    }

    /// Exit code 2: wait_min above wait_max
    #[test]
    fn test_exit_code_inverted_wait_range() {
        let sandbox = TempDir::new().unwrap();
        xray_load(&sandbox)
            .args(["--wait-min", "5", "--wait-max", "1"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("wait_max"));
    }

    /// Exit code 2: values too large to schedule are rejected up front
    #[test]
    fn test_exit_code_out_of_range_profile() {
        let cases: [(&[&str], &str); 3] = [
            (&["--spawn-rate", "1e10"], "spawn_rate"),
            (&["--wait-max", "1e20"], "wait_max"),
            (&["--run-time", "18446744073709551615"], "run_time"),
        ];
        for (args, field) in cases {
            let sandbox = TempDir::new().unwrap();
            xray_load(&sandbox)
                .args(args)
                .assert()
                .code(2)
                .stderr(predicate::str::contains(field))
                .stderr(predicate::str::contains("panicked").not());
        }
    }

    /// Exit code 3: Application error - host without scheme
    #[test]
    fn test_exit_code_application_error_bad_host() {
        let sandbox = TempDir::new().unwrap();
        xray_load(&sandbox)
            .args(["--host", "acme.jfrog.io", "-n", "1"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to build HTTP client"));
    }

    /// Exit code 0: failures are reported but not fatal by default
    #[test]
    fn test_exit_code_failures_without_flag() {
        let sandbox = TempDir::new().unwrap();
        single_iteration(&sandbox).assert().code(0);
    }

    /// Exit code 1: failures recorded with --fail-on-error
    #[test]
    fn test_exit_code_failures_with_flag() {
        let sandbox = TempDir::new().unwrap();
        single_iteration(&sandbox)
            .arg("--fail-on-error")
            .assert()
            .code(1);
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn test_markdown_report_on_stdout() {
        let sandbox = TempDir::new().unwrap();
        single_iteration(&sandbox)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# Load Test Report"))
            .stdout(predicate::str::contains("| PUT | Create Repository | 1 | 1 |"))
            .stdout(predicate::str::contains("| POST | Get Violations | 1 | 1 |"))
            .stdout(predicate::str::contains("**Aggregated** | 6 | 6 |"))
            .stdout(predicate::str::contains("## Failures"));
    }

    #[test]
    fn test_json_report_to_file() {
        let sandbox = TempDir::new().unwrap();
        let output = sandbox.path().join("report.json");

        single_iteration(&sandbox)
            .args(["--format", "json", "--output"])
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(report["metadata"]["tool_name"], "xray-load");
        assert_eq!(report["metadata"]["users"], 1);
        assert_eq!(report["metadata"]["iterations"], 1);
        assert_eq!(report["metadata"]["stop_reason"], "iterations_completed");
        assert_eq!(report["requests"].as_array().unwrap().len(), 6);
        assert_eq!(report["aggregated"]["failures"], 6);
    }

    #[test]
    fn test_push_failure_logged_without_password() {
        let sandbox = TempDir::new().unwrap();
        single_iteration(&sandbox)
            .assert()
            .success()
            .stderr(predicate::str::contains("Docker push failed"))
            .stderr(predicate::str::contains("docker pull alpine:3.9"))
            .stderr(predicate::str::contains("s3cret").not());
    }

    #[test]
    fn test_output_into_missing_directory_fails() {
        let sandbox = TempDir::new().unwrap();
        single_iteration(&sandbox)
            .args(["--output", "missing/report.md"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}
