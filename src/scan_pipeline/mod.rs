//! Scan pipeline domain: what the scenario sends and how responses are judged.
//!
//! Nothing here performs I/O; adapters and use cases do.
pub mod domain;
pub mod policies;
pub mod services;
