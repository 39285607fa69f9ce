//! Server configuration.

use std::{fmt, net::SocketAddr, path::PathBuf, str::FromStr};

use lineup_auth::config::AuthConfig;

use crate::prelude::*;

pub const ADDR_VAR: &str = "LINEUP_ADDR";
pub const STORE_VAR: &str = "LINEUP_STORE";
pub const ASSETS_VAR: &str = "LINEUP_ASSETS_DIR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:5555";

/// Which backend serves the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// PostgreSQL at `DATABASE_URL`.
    #[default]
    Postgres,
    /// Process-local, lost on exit.
    Memory,
}

impl FromStr for StoreKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(Error::InvalidVar(STORE_VAR, String::from(other))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

pub struct ServiceConfig {
    pub addr: SocketAddr,
    pub store: StoreKind,
    pub assets_dir: Option<PathBuf>,
    pub auth: AuthConfig,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Fails when the signing secret is missing, before anything is served.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| String::from(DEFAULT_ADDR));
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| Error::InvalidVar(ADDR_VAR, addr.clone()))?;

        let store = match lookup(STORE_VAR) {
            Some(value) => value.parse()?,
            None => StoreKind::default(),
        };

        Ok(Self {
            addr,
            store,
            assets_dir: lookup(ASSETS_VAR).map(PathBuf::from),
            auth: AuthConfig::from_lookup(&lookup)?,
        })
    }
}

impl fmt::Display for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "addr={} store={} {}", self.addr, self.store, self.auth)
    }
}
