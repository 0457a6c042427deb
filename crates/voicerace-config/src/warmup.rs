use indexmap::IndexMap;
use serde::Deserialize;
use url::Url;

/// Connection warmup and pooling configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WarmupConfig {
    /// Timeout for a single warmup request in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Pooled client tuning
    #[serde(default)]
    pub pool: PoolConfig,
    /// Per-provider overrides keyed by provider name
    #[serde(default)]
    pub providers: IndexMap<String, ProviderOverrides>,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self {
            request_timeout_seconds: default_request_timeout(),
            pool: PoolConfig::default(),
            providers: IndexMap::new(),
        }
    }
}

/// Keep-alive pool tuning for the per-provider HTTP clients
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    /// How long idle connections are retained, in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// Maximum idle connections kept per host
    #[serde(default = "default_max_idle_per_host")]
    pub max_idle_per_host: usize,
    /// TCP keepalive probe interval in seconds
    #[serde(default = "default_tcp_keepalive")]
    pub tcp_keepalive_seconds: u64,
    /// Overall request timeout for pooled clients, in seconds
    #[serde(default = "default_pool_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            idle_timeout_seconds: default_idle_timeout(),
            max_idle_per_host: default_max_idle_per_host(),
            tcp_keepalive_seconds: default_tcp_keepalive(),
            request_timeout_seconds: default_pool_request_timeout(),
        }
    }
}

/// Per-provider configuration overrides
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderOverrides {
    /// Base URL override, used for regional endpoints and test harnesses
    #[serde(default)]
    pub base_url: Option<Url>,
}

const fn default_request_timeout() -> u64 {
    5
}

const fn default_idle_timeout() -> u64 {
    30
}

const fn default_max_idle_per_host() -> usize {
    5
}

const fn default_tcp_keepalive() -> u64 {
    60
}

const fn default_pool_request_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config: WarmupConfig = toml::from_str("").unwrap();
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.pool.idle_timeout_seconds, 30);
        assert_eq!(config.pool.max_idle_per_host, 5);
        assert_eq!(config.pool.tcp_keepalive_seconds, 60);
        assert_eq!(config.pool.request_timeout_seconds, 60);
        assert!(config.providers.is_empty());
    }

    #[test]
    fn pool_overrides() {
        let toml = r#"
            request_timeout_seconds = 3

            [pool]
            idle_timeout_seconds = 10
            max_idle_per_host = 2
        "#;

        let config: WarmupConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.request_timeout_seconds, 3);
        assert_eq!(config.pool.idle_timeout_seconds, 10);
        assert_eq!(config.pool.max_idle_per_host, 2);
        assert_eq!(config.pool.tcp_keepalive_seconds, 60);
    }

    #[test]
    fn provider_base_url_override() {
        let toml = r#"
            [providers.elevenlabs]
            base_url = "http://127.0.0.1:9999"
        "#;

        let config: WarmupConfig = toml::from_str(toml).unwrap();
        let overrides = config.providers.get("elevenlabs").unwrap();
        assert_eq!(overrides.base_url.as_ref().unwrap().as_str(), "http://127.0.0.1:9999/");
    }

    #[test]
    fn invalid_base_url_rejected() {
        let toml = r#"
            [providers.hume]
            base_url = "not a url"
        "#;

        assert!(toml::from_str::<WarmupConfig>(toml).is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<WarmupConfig>("retries = 3").is_err());
    }
}
