mod request_stats;

pub use request_stats::{EndpointStats, FailureRecord, RequestStatsCollector};
