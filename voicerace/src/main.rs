#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use voicerace_config::Config;
use voicerace_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;
    if args.listen.is_some() {
        config.server.listen_address = args.listen;
    }

    // Initialize logging
    init_tracing("info");

    tracing::info!(
        config_path = %args.config.display(),
        "starting voicerace"
    );

    // Build server
    let server = Server::new(&config)?;

    // Pre-establish provider connections; outcomes are logged and never
    // block serving
    if !args.no_warmup {
        let warmer = server.warmer();
        tokio::spawn(async move {
            let report = warmer.warmup_all().await;
            let warmed = report.results.iter().filter(|r| r.success).count();
            tracing::info!(
                warmed,
                total = report.results.len(),
                total_time_ms = report.total_time_ms,
                "startup warmup complete"
            );
        });
    }

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // Run server
    server.serve(shutdown).await?;

    tracing::info!("voicerace stopped");
    Ok(())
}

/// Set up the `tracing-subscriber` fmt pipeline
///
/// `RUST_LOG` takes precedence over the default filter.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
