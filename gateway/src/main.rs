// CBDC Gateway binary - serves the analytics engines over HTTP

use anyhow::Result;
use cbdc_gateway::{app, AppState, GatewayConfig};
use risk_engine::RiskConfig;
use simulation_engine::CbdcParameters;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env();
    let risk_config = RiskConfig::from_env()?;
    let params = CbdcParameters::from_env()?;

    let listen_addr = config.listen_addr.clone();
    let state = Arc::new(AppState::new(config, risk_config, params));

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    info!(%listen_addr, "cbdc-gateway listening");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
