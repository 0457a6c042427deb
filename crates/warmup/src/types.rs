use serde::Serialize;

use crate::provider::Provider;

/// Outcome of a single provider warmup attempt
///
/// The provider is carried as a string so that an unrecognized name from
/// the HTTP surface can still be echoed back in a structured result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupResult {
    pub provider: String,
    pub success: bool,
    /// Wall-clock time of the attempt; absent when no request was made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WarmupResult {
    pub fn ok(provider: Provider, elapsed_ms: u64) -> Self {
        Self {
            provider: provider.to_string(),
            success: true,
            elapsed_ms: Some(elapsed_ms),
            error: None,
        }
    }

    pub fn failed(provider: Provider, elapsed_ms: u64, error: impl Into<String>) -> Self {
        Self {
            provider: provider.to_string(),
            success: false,
            elapsed_ms: Some(elapsed_ms),
            error: Some(error.into()),
        }
    }

    /// A provider that was never attempted, e.g. missing credentials
    pub fn skipped(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            success: false,
            elapsed_ms: None,
            error: Some(error.into()),
        }
    }
}

/// Aggregate outcome of warming every provider
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupReport {
    pub results: Vec<WarmupResult>,
    /// Wall-clock time of the whole concurrent batch
    pub total_time_ms: u64,
}
