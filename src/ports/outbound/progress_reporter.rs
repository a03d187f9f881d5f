use std::time::Duration;

/// Point-in-time view of a running load test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub elapsed: Duration,
    pub active_users: usize,
    pub target_users: usize,
    pub requests: u64,
    pub failures: u64,
}

/// ProgressReporter port for reporting progress during a load test
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so the report written to stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports the periodic state of the run
    ///
    /// # Arguments
    /// * `snapshot` - Current counters of the run
    fn report_tick(&self, snapshot: &ProgressSnapshot);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
