//! Environment-backed configuration
//!
//! All settings come from environment variables (a `.env` file is loaded by
//! the binary before this runs). Required: `DISCORD_TOKEN`,
//! `DISCORD_GUILD_ID`, `ANNOUNCE_CHANNEL_ID`. Everything else has defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration for the bot
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// The single guild commands are registered for
    pub guild_id: u64,
    /// Locked announcement channel: the scheduler posts here and commands
    /// only answer here
    pub announce_channel_id: u64,
    /// Directory holding `events.json` and `announced.json`
    pub data_dir: PathBuf,
    /// Bind address for the keep-alive HTTP endpoint
    pub keep_alive_addr: SocketAddr,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let discord_token =
            std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;

        let guild_id = std::env::var("DISCORD_GUILD_ID")
            .context("DISCORD_GUILD_ID must be set")?
            .parse::<u64>()
            .context("DISCORD_GUILD_ID must be a numeric guild id")?;

        let announce_channel_id = std::env::var("ANNOUNCE_CHANNEL_ID")
            .context("ANNOUNCE_CHANNEL_ID must be set")?
            .parse::<u64>()
            .context("ANNOUNCE_CHANNEL_ID must be a numeric channel id")?;

        let data_dir = std::env::var("HERALD_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let keep_alive_addr = std::env::var("KEEP_ALIVE_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .context("KEEP_ALIVE_ADDR must be a host:port address")?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            discord_token,
            guild_id,
            announce_channel_id,
            data_dir,
            keep_alive_addr,
            log_level,
        })
    }
}
