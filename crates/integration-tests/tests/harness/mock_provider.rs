//! Mock TTS provider backend for integration tests
//!
//! Answers any request with a configurable status and latency while
//! counting how many requests actually arrived.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tokio_util::sync::CancellationToken;

/// Mock provider backend with predictable behavior
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockProviderState>,
}

struct MockProviderState {
    hits: AtomicU32,
    status: u16,
    delay: Duration,
}

impl MockProvider {
    /// Start a mock that answers 200 immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(200, Duration::ZERO).await
    }

    /// Start a mock that answers every request with the given status
    pub async fn start_with_status(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(status, Duration::ZERO).await
    }

    /// Start a mock that sleeps before answering
    pub async fn start_with_delay(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(200, delay).await
    }

    async fn start_inner(status: u16, delay: Duration) -> anyhow::Result<Self> {
        let state = Arc::new(MockProviderState {
            hits: AtomicU32::new(0),
            status,
            delay,
        });

        // Warmup paths differ per vendor, so catch everything
        let app = Router::new().fallback(handle_any).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL of the mock backend
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests that reached the mock
    pub fn hits(&self) -> u32 {
        self.state.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_any(State(state): State<Arc<MockProviderState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    StatusCode::from_u16(state.status).unwrap_or(StatusCode::OK)
}
