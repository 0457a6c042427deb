use thiserror::Error;

/// Warmup subsystem errors
///
/// Warmup attempts themselves never fail with an `Err`; their outcomes are
/// reported as [`crate::WarmupResult`] values. This type covers problems
/// discovered while assembling the subsystem from configuration.
#[derive(Debug, Error)]
pub enum WarmupError {
    /// Configuration error
    #[error("warmup configuration error: {0}")]
    Config(String),
}
