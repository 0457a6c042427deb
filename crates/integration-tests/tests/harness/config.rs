//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use voicerace_config::{Config, HealthConfig, ProviderOverrides, ServerConfig, WarmupConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                warmup: WarmupConfig::default(),
            },
        }
    }

    /// Point a provider at a mock backend
    pub fn with_provider_base_url(mut self, name: &str, base_url: &str) -> Self {
        self.config.warmup.providers.insert(
            name.to_owned(),
            ProviderOverrides {
                base_url: Some(base_url.parse().expect("valid URL")),
            },
        );
        self
    }

    /// Set the per-provider warmup timeout
    pub fn with_warmup_timeout(mut self, seconds: u64) -> Self {
        self.config.warmup.request_timeout_seconds = seconds;
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
