use crate::ports::outbound::{ProgressReporter, ProgressSnapshot};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// Uses an indicatif spinner that is redrawn on every tick.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner_option = self.spinner.borrow_mut();
        if let Some(spinner) = spinner_option.as_ref() {
            spinner.clone()
        } else {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .template("   {spinner:.green} [{elapsed_precise}] {msg}")
            {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(120));
            *spinner_option = Some(spinner.clone());
            spinner
        }
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    /// One-line rendering of a snapshot, shared by the spinner and tests
    pub fn describe(snapshot: &ProgressSnapshot) -> String {
        format!(
            "users {}/{} | requests {} | failures {}",
            snapshot.active_users, snapshot.target_users, snapshot.requests, snapshot.failures
        )
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_tick(&self, snapshot: &ProgressSnapshot) {
        let spinner = self.get_or_create_spinner();
        let line = Self::describe(snapshot);
        if snapshot.failures > 0 {
            spinner.set_message(line.yellow().to_string());
        } else {
            spinner.set_message(line);
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!();
        eprintln!("{}", message.green());
    }
}
