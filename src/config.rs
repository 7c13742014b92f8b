//! Startup configuration.
//!
//! The three endpoint URLs are required. A missing or malformed value stops
//! the process before the terminal UI is drawn.

use std::{env, path::PathBuf};
use thiserror::Error;

pub const RPC_URL_VAR: &str = "LAZORKIT_RPC_URL";
pub const PAYMASTER_URL_VAR: &str = "LAZORKIT_PAYMASTER_URL";
pub const PORTAL_URL_VAR: &str = "LAZORKIT_PORTAL_URL";
pub const KEYPAIR_VAR: &str = "WALLET_KEYPAIR";
pub const LOG_LIMIT_VAR: &str = "ACTIVITY_LOG_LIMIT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rpc_url: String,
    pub paymaster_url: String,
    pub portal_url: String,
    /// Solana CLI keypair backing the local wallet session
    pub keypair_path: Option<PathBuf>,
    /// Retention limit for the activity console, unbounded when unset
    pub activity_log_limit: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            let found = value(name);
            if found.is_none() {
                missing.push(name);
            }
            found
        };

        let rpc_url = required(RPC_URL_VAR);
        let paymaster_url = required(PAYMASTER_URL_VAR);
        let portal_url = required(PORTAL_URL_VAR);

        let (Some(rpc_url), Some(paymaster_url), Some(portal_url)) = (rpc_url, paymaster_url, portal_url) else {
            return Err(ConfigError::Missing(missing));
        };

        for (name, url) in [
            (RPC_URL_VAR, &rpc_url),
            (PAYMASTER_URL_VAR, &paymaster_url),
            (PORTAL_URL_VAR, &portal_url),
        ] {
            check_http_url(name, url)?;
        }

        let activity_log_limit = value(LOG_LIMIT_VAR)
            .map(|raw| match raw.parse::<usize>() {
                Ok(limit) if limit > 0 => Ok(limit),
                _ => Err(ConfigError::Invalid {
                    name: LOG_LIMIT_VAR,
                    reason: format!("expected a positive integer, got {:?}", raw),
                }),
            })
            .transpose()?;

        Ok(Self {
            rpc_url,
            paymaster_url,
            portal_url,
            keypair_path: value(KEYPAIR_VAR).map(PathBuf::from),
            activity_log_limit,
        })
    }
}

fn check_http_url(name: &'static str, url: &str) -> Result<(), ConfigError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("expected an http(s) URL, got {:?}", url),
        }),
    }
}
