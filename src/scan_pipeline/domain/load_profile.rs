use crate::shared::error::LoadTestError;
use crate::shared::Result;
use rand::Rng;
use std::time::Duration;

pub const DEFAULT_USERS: usize = 1;
pub const DEFAULT_SPAWN_RATE: f64 = 1.0;
pub const DEFAULT_WAIT_MIN_SECS: f64 = 1.0;
pub const DEFAULT_WAIT_MAX_SECS: f64 = 3.0;

/// One user per microsecond
pub const MAX_SPAWN_RATE: f64 = 1_000_000.0;
/// One day
pub const MAX_WAIT_SECS: f64 = 86_400.0;
/// One year
pub const MAX_RUN_TIME: Duration = Duration::from_secs(365 * 86_400);

/// Uniformly random pause between two iterations of the same user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitTime {
    min_secs: f64,
    max_secs: f64,
}

impl WaitTime {
    pub fn between(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }

    pub fn min_secs(&self) -> f64 {
        self.min_secs
    }

    pub fn max_secs(&self) -> f64 {
        self.max_secs
    }

    /// Draws a pause in `[min, max]`, capped at [`MAX_WAIT_SECS`]
    pub fn sample(&self) -> Duration {
        let secs = if self.max_secs <= self.min_secs {
            self.min_secs
        } else {
            rand::rng().random_range(self.min_secs..=self.max_secs)
        };
        Duration::try_from_secs_f64(secs.clamp(0.0, MAX_WAIT_SECS)).unwrap_or_default()
    }
}

impl Default for WaitTime {
    fn default() -> Self {
        Self::between(DEFAULT_WAIT_MIN_SECS, DEFAULT_WAIT_MAX_SECS)
    }
}

/// How many users run, how fast they start and when they stop
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProfile {
    pub users: usize,
    /// Users started per second
    pub spawn_rate: f64,
    /// Wall-clock bound for the whole run
    pub run_time: Option<Duration>,
    /// Iterations per user before it stops on its own
    pub iterations: Option<u64>,
    pub wait: WaitTime,
}

impl Default for LoadProfile {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            spawn_rate: DEFAULT_SPAWN_RATE,
            run_time: None,
            iterations: None,
            wait: WaitTime::default(),
        }
    }
}

impl LoadProfile {
    /// Delay between two user starts, never shorter than one microsecond
    pub fn spawn_interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.spawn_rate)
            .unwrap_or_default()
            .max(Duration::from_micros(1))
    }

    /// Whether a user that has completed `completed` iterations should stop
    pub fn iterations_exhausted(&self, completed: u64) -> bool {
        self.iterations.is_some_and(|max| completed >= max)
    }

    pub fn validate(&self) -> Result<()> {
        if self.users == 0 {
            return Err(invalid("users", "must be at least 1", "Pass --users 1 or more").into());
        }
        if !(self.spawn_rate.is_finite() && self.spawn_rate > 0.0) {
            return Err(invalid(
                "spawn_rate",
                "must be a positive number",
                "Pass --spawn-rate 1 to start one user per second",
            )
            .into());
        }
        if self.spawn_rate > MAX_SPAWN_RATE {
            return Err(invalid(
                "spawn_rate",
                &format!("must not exceed {} users per second", MAX_SPAWN_RATE),
                "Lower --spawn-rate",
            )
            .into());
        }
        if let Some(run_time) = self.run_time {
            if run_time.is_zero() {
                return Err(invalid(
                    "run_time",
                    "must be at least 1 second",
                    "Omit --run-time to run until Ctrl+C",
                )
                .into());
            }
            if run_time > MAX_RUN_TIME {
                return Err(invalid(
                    "run_time",
                    &format!("must not exceed {} seconds", MAX_RUN_TIME.as_secs()),
                    "Omit --run-time to run until Ctrl+C",
                )
                .into());
            }
        }
        if self.iterations == Some(0) {
            return Err(invalid(
                "iterations",
                "must be at least 1",
                "Omit --iterations to loop until stopped",
            )
            .into());
        }
        let wait = self.wait;
        if !(wait.min_secs.is_finite() && wait.max_secs.is_finite()) || wait.min_secs < 0.0 {
            return Err(invalid(
                "wait_min",
                "must be a non-negative number of seconds",
                "Use values such as --wait-min 1 --wait-max 3",
            )
            .into());
        }
        if wait.max_secs > MAX_WAIT_SECS {
            return Err(invalid(
                "wait_max",
                &format!("must not exceed {} seconds", MAX_WAIT_SECS),
                "Use values such as --wait-min 1 --wait-max 3",
            )
            .into());
        }
        if wait.min_secs > wait.max_secs {
            return Err(invalid(
                "wait_max",
                &format!(
                    "must not be smaller than wait_min ({} > {})",
                    wait.min_secs, wait.max_secs
                ),
                "Swap the values or raise --wait-max",
            )
            .into());
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str, hint: &str) -> LoadTestError {
    LoadTestError::InvalidLoadProfile {
        field: field.to_string(),
        reason: reason.to_string(),
        hint: hint.to_string(),
    }
}
