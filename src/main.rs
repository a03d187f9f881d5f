mod cli;
mod logging;

use cli::Args;
use std::path::Path;
use std::process;
use std::sync::Arc;
use xray_load::adapters::outbound::console::StderrProgressReporter;
use xray_load::adapters::outbound::network::XrayClient;
use xray_load::adapters::outbound::process::ProcessCommandRunner;
use xray_load::application::dto::LoadTestRequest;
use xray_load::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use xray_load::application::read_models::LoadTestReportBuilder;
use xray_load::application::use_cases::LoadTestUseCase;
use xray_load::config::{self, ConfigFile};
use xray_load::shared::error::{ExitCode, LoadTestError};
use xray_load::shared::Result;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }
            eprintln!();

            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with status 2 on bad input)
    let args = Args::parse_args();
    logging::init(args.verbose);

    // Merge CLI values over the config file
    let config_file = load_config(args.config.as_deref())?;
    let settings = config::resolve_settings(args.load_overrides(), config_file)?;

    let request = LoadTestRequest::new(
        args.target(),
        args.credentials(),
        settings.profile,
        settings.host,
    );

    // Create adapters (Dependency Injection)
    let platform = Arc::new(XrayClient::new(&request.base_url)?);
    let command_runner = Arc::new(ProcessCommandRunner::new());
    let progress_reporter = StderrProgressReporter::new();

    // Execute use case
    let use_case = LoadTestUseCase::new(platform, command_runner, progress_reporter);
    let response = use_case.execute(request).await?;

    // Build, format and present the report
    let report = LoadTestReportBuilder::build(
        &response,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&formatted_output)?;

    if args.fail_on_error && response.has_failures() {
        return Ok(ExitCode::FailuresRecorded);
    }
    Ok(ExitCode::Success)
}

/// Explicit `--config` must exist; otherwise look for the default file in the working directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

/// Invalid load profiles are argument errors; everything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<LoadTestError>() {
        Some(LoadTestError::InvalidLoadProfile { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
