#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod credentials;
mod error;
mod provider;
mod registry;
mod types;
mod warmer;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};

pub use error::WarmupError;
pub use provider::{Provider, ProviderSpec};
pub use registry::Registry;
pub use types::{WarmupReport, WarmupResult};
pub use warmer::Warmer;

/// Build the warmer from configuration
pub fn build_warmer(config: &voicerace_config::Config) -> anyhow::Result<Arc<Warmer>> {
    let warmer = Arc::new(
        Warmer::from_config(config).map_err(|e| anyhow::anyhow!("Failed to initialize warmup subsystem: {e}"))?,
    );
    Ok(warmer)
}

/// Create the endpoint router for connection warmup
pub fn endpoint_router() -> Router<Arc<Warmer>> {
    Router::new()
        .route("/api/warmup", post(warmup_all))
        .route("/api/warmup/{provider}", post(warmup_one))
}

/// Warm every provider's connection and report the batch outcome
async fn warmup_all(State(warmer): State<Arc<Warmer>>) -> Json<WarmupReport> {
    tracing::debug!("warmup requested for all providers");

    Json(warmer.warmup_all().await)
}

/// Warm a single provider's connection
///
/// Unknown names answer 200 with a structured failure; warmup outcomes
/// are data, not HTTP errors.
async fn warmup_one(State(warmer): State<Arc<Warmer>>, Path(provider): Path<String>) -> Json<WarmupResult> {
    tracing::debug!("warmup requested for provider: {provider}");

    Json(warmer.warmup_named(&provider).await)
}
