use std::path::PathBuf;

use clap::Parser;

/// Voicerace TTS comparison server
#[derive(Debug, Parser)]
#[command(name = "voicerace", about = "Side-by-side TTS provider comparison with connection warmup")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "voicerace.toml", env = "VOICERACE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VOICERACE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Skip the connection warmup pass at startup
    #[arg(long)]
    pub no_warmup: bool,
}
