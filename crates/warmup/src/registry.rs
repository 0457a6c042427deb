use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use reqwest::Client;
use voicerace_config::PoolConfig;

use crate::provider::Provider;

/// Keyed pool of keep-alive HTTP clients, one per provider
///
/// A reqwest [`Client`] is itself a connection pool; the registry hands out
/// clones, so every caller for a provider shares the same TCP/TLS sessions.
/// Slots are created lazily on first lookup. The create-if-absent path goes
/// through the map's entry API, so concurrent first lookups construct
/// exactly one client.
#[derive(Debug)]
pub struct Registry {
    clients: DashMap<Provider, Client>,
    idle_timeout: Duration,
    max_idle_per_host: usize,
    tcp_keepalive: Duration,
    request_timeout: Duration,
    created: AtomicUsize,
}

impl Registry {
    pub fn new(pool: &PoolConfig) -> Self {
        Self {
            clients: DashMap::new(),
            idle_timeout: Duration::from_secs(pool.idle_timeout_seconds),
            max_idle_per_host: pool.max_idle_per_host,
            tcp_keepalive: Duration::from_secs(pool.tcp_keepalive_seconds),
            request_timeout: Duration::from_secs(pool.request_timeout_seconds),
            created: AtomicUsize::new(0),
        }
    }

    /// Pooled client for a provider, created on first use
    pub fn get(&self, provider: Provider) -> Client {
        self.clients
            .entry(provider)
            .or_insert_with(|| self.build_client(provider))
            .clone()
    }

    /// Drop a provider's pooled client
    ///
    /// Idle connections close once the last clone is dropped. The next
    /// lookup recreates the slot. Destroying an absent slot is a no-op.
    pub fn destroy(&self, provider: Provider) {
        if self.clients.remove(&provider).is_some() {
            tracing::info!(%provider, "pooled client destroyed");
        }
    }

    /// Tear down every provider's pooled client, used on shutdown
    pub fn destroy_all(&self) {
        for provider in Provider::ALL {
            self.destroy(provider);
        }
        tracing::info!("all pooled clients destroyed");
    }

    /// Whether a provider currently has a live pooled client
    pub fn contains(&self, provider: Provider) -> bool {
        self.clients.contains_key(&provider)
    }

    /// Number of live pooled clients, never more than the provider count
    pub fn active(&self) -> usize {
        self.clients.len()
    }

    fn build_client(&self, provider: Provider) -> Client {
        let mut headers = http::HeaderMap::new();
        headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

        let client = Client::builder()
            .timeout(self.request_timeout)
            .pool_idle_timeout(Some(self.idle_timeout))
            .pool_max_idle_per_host(self.max_idle_per_host)
            .tcp_nodelay(true)
            .tcp_keepalive(Some(self.tcp_keepalive))
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| panic!("failed to build HTTP client for {provider}: {e}"));

        let nth = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(%provider, total_created = nth, "created keep-alive client");
        client
    }
}
