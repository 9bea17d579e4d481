use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl Config {
    /// Reads `PORT` and `PUBLIC_DIR`, also from a `.env` file if there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        // blank counts as unset
        if let Some(port) = var("PORT").filter(|port| !port.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?;
        }
        if let Some(public_dir) = var("PUBLIC_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.public_dir = PathBuf::from(public_dir);
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
