use clap::Parser;
use std::path::PathBuf;
use xray_load::application::dto::OutputFormat;
use xray_load::config::LoadOverrides;
use xray_load::scan_pipeline::domain::{
    Credentials, TargetCoordinates, DEFAULT_IMAGE_NAME, DEFAULT_IMAGE_TAG, DEFAULT_REPO_NAME,
};

/// Drive JFrog Xray scan traffic with simulated users
#[derive(Parser, Debug)]
#[command(name = "xray-load")]
#[command(version)]
#[command(
    about = "Load-test the JFrog Artifactory/Xray scan workflow with simulated users",
    long_about = "Each simulated user repeatedly creates a Docker repository, pushes an image \
                  with the docker CLI, creates a security policy and a watch, applies the watch, \
                  checks the scan status and fetches violations. A statistics report is printed \
                  when the run ends."
)]
pub struct Args {
    /// Platform account user name
    #[arg(long, env = "JFROG_USERNAME")]
    pub username: String,

    /// Platform account password or API token
    #[arg(long, env = "JFROG_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Platform identifier, the `<id>` in `<id>.jfrog.io`
    #[arg(long, env = "JFROG_PLATFORM_ID")]
    pub platform_id: String,

    /// Docker repository to create and push into
    #[arg(long, env = "JFROG_REPO_NAME", default_value = DEFAULT_REPO_NAME)]
    pub repo_name: String,

    /// Public image to pull and re-push
    #[arg(long, env = "DOCKER_IMAGE_NAME", default_value = DEFAULT_IMAGE_NAME)]
    pub image_name: String,

    /// Tag of the image
    #[arg(long, env = "DOCKER_IMAGE_TAG", default_value = DEFAULT_IMAGE_TAG)]
    pub image_tag: String,

    /// Number of simulated users [default: 1]
    #[arg(short, long)]
    pub users: Option<usize>,

    /// Users started per second [default: 1]
    #[arg(short = 'r', long)]
    pub spawn_rate: Option<f64>,

    /// Stop after this many seconds
    #[arg(short = 't', long, value_name = "SECONDS")]
    pub run_time: Option<u64>,

    /// Stop each user after this many iterations
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// Shortest pause between two iterations, in seconds [default: 1]
    #[arg(long, value_name = "SECONDS")]
    pub wait_min: Option<f64>,

    /// Longest pause between two iterations, in seconds [default: 3]
    #[arg(long, value_name = "SECONDS")]
    pub wait_max: Option<f64>,

    /// Base URL override, e.g. http://127.0.0.1:8081 [default: https://<platform id>.jfrog.io]
    #[arg(long)]
    pub host: Option<String>,

    /// Report format: json or markdown [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./xray-load.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when any request failed
    #[arg(long)]
    pub fail_on_error: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn target(&self) -> TargetCoordinates {
        TargetCoordinates::new(
            self.platform_id.clone(),
            self.repo_name.clone(),
            self.image_name.clone(),
            self.image_tag.clone(),
        )
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Load options given on the command line, for merging with the config file
    pub fn load_overrides(&self) -> LoadOverrides {
        LoadOverrides {
            users: self.users,
            spawn_rate: self.spawn_rate,
            run_time: self.run_time,
            iterations: self.iterations,
            wait_min: self.wait_min,
            wait_max: self.wait_max,
            host: self.host.clone(),
            format: self.format,
        }
    }
}
