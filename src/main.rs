//! Payroll ledger HTTP server.

use std::env;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::auth::SecurityPolicy;
use payroll_ledger::config::ConfigLoader;
use payroll_ledger::service::PayrollService;
use payroll_ledger::storage::JsonFileStore;

const DEFAULT_CONFIG_PATH: &str = "./config/payroll.yaml";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll_ledger=info")),
        )
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "Server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?.into_config();
    info!(path = %config_path, "Configuration loaded");

    let store = JsonFileStore::open(&config.storage.data_dir)?;
    info!(data_dir = %store.data_dir().display(), "Data directory ready");

    let security = SecurityPolicy::from_config(&config.security)?;
    let service = PayrollService::new(Arc::new(store), security);
    let app = create_router(AppState::new(service));

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}
