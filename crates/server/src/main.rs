//! Film Aura suggestion server.
//!
//! Loads the catalog before binding the listener: a missing shelf file
//! aborts startup with every absent file named, and no request is served.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use server::create_app;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = PathBuf::from(
        std::env::var("FILM_AURA_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    );
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    info!("loading catalog from {}", data_dir.display());
    let catalog = Arc::new(
        Catalog::load_from_dir(&data_dir).context("failed to load the movie catalog")?,
    );

    let app = create_app(catalog);
    let listener = TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    let addr = listener.local_addr()?;

    info!("Film Aura server listening on {}", addr);
    info!("Session endpoint: POST http://{}/sessions", addr);
    info!(
        "Suggest endpoint: POST http://{}/sessions/{{session_id}}/suggest",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
