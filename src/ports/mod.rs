/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports exist: the CLI calls the use cases directly.
pub mod outbound;
