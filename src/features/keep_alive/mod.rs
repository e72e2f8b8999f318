//! # Keep-Alive Endpoint
//!
//! Minimal HTTP surface so uptime monitors (and free hosting platforms that
//! sleep idle processes) can see the bot is running.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use log::info;

async fn home() -> &'static str {
    "Bot is alive!"
}

/// Serve `GET /` on `addr` until the process exits.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let app = Router::new().route("/", get(home));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding keep-alive listener on {addr}"))?;
    info!("Keep-alive endpoint listening on {addr}");
    axum::serve(listener, app)
        .await
        .context("keep-alive server exited")?;
    Ok(())
}
