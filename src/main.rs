//! HTTP server for the logistics toolkit.
//!
//! Reads configuration from `TOOLKIT_CONFIG_DIR` (default `./config/default`)
//! and listens on `TOOLKIT_BIND_ADDR` (default `0.0.0.0:8080`). Log levels
//! follow `RUST_LOG`.

use std::env;
use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logistics_toolkit::api::{AppState, create_router};
use logistics_toolkit::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        env::var("TOOLKIT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("TOOLKIT_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        default_tax_percentage = %config.calculator().default_tax_percentage,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "Logistics toolkit listening");

    axum::serve(listener, router).await?;
    Ok(())
}
