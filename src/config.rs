use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub upstream: UpstreamConfig,
}

/// Settings for the outbound Zomato client, fixed at startup.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub user_key: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let listen_addr: SocketAddr = env::var("MENUGATE_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("invalid MENUGATE_ADDR")?;

        let base_url = env::var("ZOMATO_BASE_URL")
            .unwrap_or_else(|_| "https://developers.zomato.com/api/v2.1".to_string());

        // No default: the key is a secret and must be injected.
        let user_key = env::var("ZOMATO_USER_KEY").context("ZOMATO_USER_KEY must be set")?;

        let timeout = parse_duration("MENUGATE_UPSTREAM_TIMEOUT", 30)?;

        Ok(Self {
            listen_addr,
            upstream: UpstreamConfig {
                base_url,
                user_key,
                timeout,
            },
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }
}

fn parse_duration(env_key: &str, default_secs: u64) -> Result<Duration> {
    let raw = env::var(env_key).unwrap_or_else(|_| default_secs.to_string());
    let secs: u64 = raw
        .parse()
        .with_context(|| format!("{env_key} must be an integer number of seconds"))?;

    Ok(Duration::from_secs(secs))
}
