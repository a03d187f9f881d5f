use crate::scan_pipeline::domain::{HttpMethod, RequestOutcome};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Key of one statistics row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct EndpointKey {
    name: String,
    method: HttpMethod,
}

/// Key of one failure table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FailureKey {
    name: String,
    method: HttpMethod,
    message: String,
}

/// Aggregated numbers for one request name.
///
/// Latencies are kept as counts per rounded bucket, so memory depends on the
/// spread of response times and not on how many requests were made.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointStats {
    pub name: String,
    /// `None` for rows merged from several methods
    pub method: Option<HttpMethod>,
    pub num_requests: u64,
    pub num_failures: u64,
    /// Rounded milliseconds to number of requests
    buckets: BTreeMap<u64, u64>,
    total_ms: f64,
    min_ms: Option<f64>,
    max_ms: f64,
}

/// Bucket of a latency: exact below 100 ms, then 10 ms steps below 1 s,
/// then 100 ms steps.
fn bucket_of(latency_ms: f64) -> u64 {
    let rounded = latency_ms.max(0.0).round() as u64;
    match rounded {
        0..=99 => rounded,
        100..=999 => (rounded + 5) / 10 * 10,
        _ => (rounded + 50) / 100 * 100,
    }
}

impl EndpointStats {
    fn new(name: String, method: Option<HttpMethod>) -> Self {
        Self {
            name,
            method,
            num_requests: 0,
            num_failures: 0,
            buckets: BTreeMap::new(),
            total_ms: 0.0,
            min_ms: None,
            max_ms: 0.0,
        }
    }

    fn record(&mut self, latency_ms: f64, failed: bool) {
        self.num_requests += 1;
        if failed {
            self.num_failures += 1;
        }
        *self.buckets.entry(bucket_of(latency_ms)).or_insert(0) += 1;
        self.total_ms += latency_ms;
        self.min_ms = Some(self.min_ms.map_or(latency_ms, |min| min.min(latency_ms)));
        self.max_ms = self.max_ms.max(latency_ms);
    }

    /// Merges several rows into one, e.g. for the aggregated line
    pub fn aggregate<'a>(name: &str, rows: impl IntoIterator<Item = &'a EndpointStats>) -> Self {
        let mut total = Self::new(name.to_string(), None);
        for row in rows {
            total.num_requests += row.num_requests;
            total.num_failures += row.num_failures;
            for (bucket, count) in &row.buckets {
                *total.buckets.entry(*bucket).or_insert(0) += count;
            }
            total.total_ms += row.total_ms;
            total.min_ms = match (total.min_ms, row.min_ms) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
            total.max_ms = total.max_ms.max(row.max_ms);
        }
        total
    }

    pub fn min_ms(&self) -> f64 {
        self.min_ms.unwrap_or(0.0)
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    pub fn avg_ms(&self) -> f64 {
        let samples: u64 = self.buckets.values().sum();
        if samples == 0 {
            return 0.0;
        }
        self.total_ms / samples as f64
    }

    /// Nearest-rank percentile over the buckets, `quantile` in `[0, 1]`.
    ///
    /// The result is clamped to the observed min and max.
    pub fn percentile_ms(&self, quantile: f64) -> f64 {
        let samples: u64 = self.buckets.values().sum();
        if samples == 0 {
            return 0.0;
        }
        let quantile = quantile.clamp(0.0, 1.0);
        let rank = ((quantile * samples as f64).ceil() as u64).max(1);

        let mut seen = 0u64;
        let mut value = self.max_ms;
        for (bucket, count) in &self.buckets {
            seen += count;
            if seen >= rank {
                value = *bucket as f64;
                break;
            }
        }
        value.clamp(self.min_ms(), self.max_ms)
    }

    pub fn median_ms(&self) -> f64 {
        self.percentile_ms(0.50)
    }

    /// Number of distinct latency buckets held for this row
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn failure_ratio(&self) -> f64 {
        if self.num_requests == 0 {
            0.0
        } else {
            self.num_failures as f64 / self.num_requests as f64
        }
    }
}

/// One row of the failure table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub name: String,
    pub method: HttpMethod,
    pub message: String,
    pub occurrences: u64,
}

/// RequestStatsCollector - thread-safe request accounting shared by all users
///
/// Cloning is cheap and every clone writes to the same tables.
#[derive(Clone, Default)]
pub struct RequestStatsCollector {
    endpoints: Arc<DashMap<EndpointKey, EndpointStats>>,
    failures: Arc<DashMap<FailureKey, u64>>,
}

impl RequestStatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished request
    pub fn record(
        &self,
        name: &str,
        method: HttpMethod,
        elapsed: Duration,
        outcome: &RequestOutcome,
    ) {
        let key = EndpointKey {
            name: name.to_string(),
            method,
        };
        let latency_ms = elapsed.as_micros() as f64 / 1000.0;

        self.endpoints
            .entry(key)
            .or_insert_with(|| EndpointStats::new(name.to_string(), Some(method)))
            .record(latency_ms, !outcome.is_success());

        if let Some(message) = outcome.failure_message() {
            let failure = FailureKey {
                name: name.to_string(),
                method,
                message: message.to_string(),
            };
            *self.failures.entry(failure).or_insert(0) += 1;
        }
    }

    /// Rows ordered by name, then method
    pub fn snapshot(&self) -> Vec<EndpointStats> {
        let mut rows: Vec<(EndpointKey, EndpointStats)> = self
            .endpoints
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows.into_iter().map(|(_, stats)| stats).collect()
    }

    /// Failure table ordered by occurrences, most frequent first
    pub fn failures(&self) -> Vec<FailureRecord> {
        let mut rows: Vec<FailureRecord> = self
            .failures
            .iter()
            .map(|entry| FailureRecord {
                name: entry.key().name.clone(),
                method: entry.key().method,
                message: entry.key().message.clone(),
                occurrences: *entry.value(),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.message.cmp(&b.message))
        });
        rows
    }

    pub fn total_requests(&self) -> u64 {
        self.endpoints.iter().map(|e| e.value().num_requests).sum()
    }

    pub fn total_failures(&self) -> u64 {
        self.endpoints.iter().map(|e| e.value().num_failures).sum()
    }
}
