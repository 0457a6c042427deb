use std::collections::HashMap;
use std::time::{Duration, Instant};

use futures::future::join_all;

use crate::{
    credentials,
    error::WarmupError,
    provider::Provider,
    registry::Registry,
    types::{WarmupReport, WarmupResult},
};

/// Issues minimal disposable requests to every provider so the TCP+TLS
/// sessions are established before real synthesis traffic arrives
#[derive(Debug)]
pub struct Warmer {
    registry: Registry,
    request_timeout: Duration,
    base_urls: HashMap<Provider, String>,
}

impl Warmer {
    /// Build the warmer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a provider override names an unknown provider
    pub fn from_config(config: &voicerace_config::Config) -> Result<Self, WarmupError> {
        let mut base_urls = HashMap::new();

        for (name, overrides) in &config.warmup.providers {
            let provider = Provider::parse(name)
                .ok_or_else(|| WarmupError::Config(format!("unknown provider in overrides: '{name}'")))?;

            if let Some(ref url) = overrides.base_url {
                base_urls.insert(provider, url.as_str().trim_end_matches('/').to_string());
            }
        }

        Ok(Self {
            registry: Registry::new(&config.warmup.pool),
            request_timeout: Duration::from_secs(config.warmup.request_timeout_seconds),
            base_urls,
        })
    }

    /// The client pool, shared with whatever issues real TTS requests
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Warm up a single provider's connection
    ///
    /// Any HTTP status counts as success: a 4xx/5xx answer to an
    /// empty-text request still proves the connection is established.
    /// Failures are reported in the result, never propagated.
    pub async fn warmup_one(&self, provider: Provider) -> WarmupResult {
        let Some(api_key) = credentials::api_key(provider) else {
            tracing::debug!(%provider, "warmup skipped, no API key configured");
            return WarmupResult::skipped(provider.as_str(), "No valid API key configured");
        };

        let spec = provider.spec();
        let url = format!("{}{}", self.base_url(provider), spec.warmup_path);

        let mut request = self
            .registry
            .get(provider)
            .request(spec.warmup_method.clone(), &url)
            .timeout(self.request_timeout);

        for (name, value) in provider.auth_headers(&api_key) {
            request = request.header(name, value);
        }

        if let Some(body) = provider.warmup_body() {
            request = request.json(&body);
        }

        let started = Instant::now();

        match request.send().await {
            Ok(response) => {
                let elapsed_ms = elapsed_ms(started);
                tracing::info!(%provider, status = %response.status(), elapsed_ms, "connection warmed up");
                WarmupResult::ok(provider, elapsed_ms)
            }
            Err(e) => {
                let elapsed_ms = elapsed_ms(started);
                tracing::warn!(%provider, elapsed_ms, error = %e, "warmup failed");
                WarmupResult::failed(provider, elapsed_ms, e.to_string())
            }
        }
    }

    /// String-keyed warmup for the HTTP surface
    ///
    /// An unrecognized name yields a structured failure result rather
    /// than an error.
    pub async fn warmup_named(&self, name: &str) -> WarmupResult {
        match Provider::parse(name) {
            Some(provider) => self.warmup_one(provider).await,
            None => WarmupResult::skipped(name, format!("unknown provider: '{name}'")),
        }
    }

    /// Warm up every provider concurrently
    ///
    /// All requests are issued at once and awaited until every one has
    /// settled; a failing provider never hides another's result.
    pub async fn warmup_all(&self) -> WarmupReport {
        let started = Instant::now();

        let results = join_all(Provider::ALL.into_iter().map(|p| self.warmup_one(p))).await;

        let total_time_ms = elapsed_ms(started);
        let warmed = results.iter().filter(|r| r.success).count();
        tracing::info!(warmed, total = results.len(), total_time_ms, "provider warmup finished");

        WarmupReport { results, total_time_ms }
    }

    /// Tear down all pooled connections, used on shutdown
    pub fn shutdown(&self) {
        self.registry.destroy_all();
    }

    fn base_url(&self, provider: Provider) -> &str {
        self.base_urls
            .get(&provider)
            .map_or(provider.spec().base_url, String::as_str)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
