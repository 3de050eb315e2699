pub mod rest;

use std::time::Duration;

use anyhow::{Result, anyhow};
use snipbox_server::config::{Parser, ServerConfig};
use tempfile::TempDir;
use tokio::sync::oneshot;
use tracing::{error, info};

fn random_port() -> Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

/// Keeps test data directory alive and stops server when dropped
pub struct ConfigGuard {
    #[allow(dead_code)]
    data_dir: TempDir,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.send(()).ok();
        }
    }
}

pub fn test_config(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let tmp_data_dir = TempDir::with_prefix(format!("{}_", test_name))?;
    let data_dir = tmp_data_dir.path().to_string_lossy().to_string();
    let port = random_port()?.to_string();
    let base_url = format!("http://127.0.0.1:{}", port);
    let args = &[
        "snipbox-e2e-tests",
        "--data-dir",
        &data_dir,
        "--port",
        &port,
        "--base-url",
        &base_url,
    ];
    let config = ServerConfig::try_parse_from(args)?;
    Ok((
        config,
        ConfigGuard {
            data_dir: tmp_data_dir,
            shutdown: None,
        },
    ))
}

pub async fn prepare_env(test_name: &str) -> Result<(ServerConfig, ConfigGuard)> {
    let (args, guard) = test_config(test_name)?;
    info!("Test {test_name} uses database {}", args.database_url());
    Ok((args, guard))
}

/// Starts server in background task and waits until it answers health check
pub async fn spawn_server(args: ServerConfig, guard: &mut ConfigGuard) -> Result<()> {
    let health_url = args.base_url.join("health")?;
    let state = snipbox_server::run::build_state(&args).await?;
    let (sender, receiver) = oneshot::channel::<()>();
    guard.shutdown = Some(sender);
    tokio::spawn(async move {
        let shutdown = async move {
            receiver.await.ok();
        };
        if let Err(e) = snipbox_server::run::run_graceful_with_state(args, state, shutdown).await
        {
            error!("Server failed: {e}");
        }
    });

    let client = reqwest::Client::new();
    for _ in 0..50 {
        if let Ok(response) = client.get(health_url.clone()).send().await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    Err(anyhow!("Server did not start"))
}

/// Prepared and running server, returns client and server base url
pub async fn launch_env(test_name: &str) -> Result<(reqwest::Client, reqwest::Url, ConfigGuard)> {
    let (args, mut guard) = prepare_env(test_name).await?;
    let base_url = args.base_url.clone();
    spawn_server(args, &mut guard).await?;
    Ok((reqwest::Client::new(), base_url, guard))
}

pub fn extend_url(url: &reqwest::Url, segment: impl ToString) -> reqwest::Url {
    let mut url = url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(&segment.to_string());
    }
    url
}
