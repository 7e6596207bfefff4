//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `snaptext-server`
//! integration tests. `TestApp` spawns a real server on a random port,
//! configured so that every upstream service (text extraction, chat
//! completion, workflow webhook) points at a single `httpmock::MockServer`
//! instance.

// Allow unused code because this is a test utility module, and not all
// items might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use snaptext_server::{config, router, state::build_app_state};
use std::{fs, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the mock vision upstream is mounted on.
pub const MOCK_VISION_PATH: &str = "/v1beta/models/mock-vision-model:generateContent";

/// The path the mock chat-completion upstream is mounted on.
pub const MOCK_CHAT_PATH: &str = "/api/v1/chat/completions";

/// The path the mock workflow webhook is mounted on.
pub const MOCK_WEBHOOK_PATH: &str = "/webhook/calendar-event";

/// A harness for end-to-end testing of the Axum server.
///
/// This struct spawns the server on a random available port and writes a
/// temporary `config.yml` whose upstream URLs all target the embedded mock
/// server, so no test ever touches the network.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
app_title: "snaptext-tests"
ocr:
  api_url: "{}"
  api_key: "mock-gemini-key"
  model_name: "mock-vision-model"
summarize:
  api_url: "{}"
  api_key: "mock-openrouter-key"
webhook:
  url: "{}"
"#,
            mock_server.url(MOCK_VISION_PATH),
            mock_server.url(MOCK_CHAT_PATH),
            mock_server.url(MOCK_WEBHOOK_PATH),
        );
        fs::write(&config_path, config_content)?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        // Give the server a moment to start.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
