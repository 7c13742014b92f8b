mod app;
mod config;
mod ui;
mod wallet;

use anyhow::Context;
use app::{EventLog, WalletApp};
use config::Config;
use std::{fs::File, path::PathBuf, sync::Arc, sync::Mutex};
use tracing_subscriber::EnvFilter;
use wallet::{KeypairWallet, RpcManager};

const LOG_FILE: &str = "passkey-wallet.log";

/// The terminal belongs to the UI, so diagnostics go to a file.
fn init_tracing() -> anyhow::Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("passkey-wallet");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("Failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = init_tracing()?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            return Err(err.into());
        }
    };

    tracing::info!(
        rpc = %config.rpc_url,
        paymaster = %config.paymaster_url,
        portal = %config.portal_url,
        log = %log_path.display(),
        "starting passkey wallet"
    );

    let rpc = Arc::new(RpcManager::new(config.rpc_url.clone()));
    let wallet = Arc::new(KeypairWallet::new(
        Arc::clone(&rpc),
        config.keypair_path.clone(),
        config.portal_url.clone(),
        config.paymaster_url.clone(),
    ));

    let log = match config.activity_log_limit {
        Some(limit) => EventLog::with_limit(limit),
        None => EventLog::new(),
    };

    let app = WalletApp::new(rpc.network().clone(), wallet, rpc, log);
    ui::runtime::run(app).await
}
