#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod warmup;

use serde::Deserialize;

pub use health::*;
pub use server::*;
pub use warmup::*;

/// Top-level Voicerace configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Connection warmup and pooling configuration
    #[serde(default)]
    pub warmup: WarmupConfig,
}
