use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use status_check_api::config::AppConfig;
use status_check_api::database::MemoryStatusStore;
use status_check_api::telemetry;

pub const ALLOWED_ORIGINS: &str = "http://localhost:3000,https://trapped-egypt.vercel.app";

pub struct TestServer {
    pub base_url: String,
    pub store: Arc<MemoryStatusStore>,
}

/// Start the app on a free port with a fresh in-memory store. Each test gets
/// its own server so stored records never leak between tests.
pub async fn spawn_server() -> Result<TestServer> {
    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_tracing("debug");
    }

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let config = AppConfig::from_lookup(|key| match key {
        "CORS_ORIGINS" => Some(ALLOWED_ORIGINS.to_string()),
        "STORAGE_BACKEND" => Some("memory".to_string()),
        _ => None,
    })?;

    let store = Arc::new(MemoryStatusStore::new());
    let app = status_check_api::app(store.clone(), &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let server = TestServer {
        base_url: format!("http://{}", addr),
        store,
    };
    server.wait_ready(Duration::from_secs(5)).await?;
    Ok(server)
}

impl TestServer {
    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(format!("{}/health", self.base_url)).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
