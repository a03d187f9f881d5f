/// Crate-wide Result alias backed by `anyhow::Error`.
///
/// Typed errors (`LoadTestError`, `ImagePushError`) are converted into it at
/// layer boundaries so callers can attach context with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
