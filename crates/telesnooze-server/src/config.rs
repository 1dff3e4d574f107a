use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use telesnooze_crypto::PasswordScheme;

const DEFAULT_DB_PATH: &str = "telesnooze.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8123;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub password_scheme: PasswordScheme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = get("TELESNOOZE_DB_PATH")
            .unwrap_or_else(|| DEFAULT_DB_PATH.into())
            .into();
        let host = get("TELESNOOZE_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match get("TELESNOOZE_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("TELESNOOZE_PORT is not a valid port: {}", raw))?,
            None => DEFAULT_PORT,
        };
        let password_scheme = match get("TELESNOOZE_PASSWORD_SCHEME") {
            Some(raw) => raw.parse()?,
            None => PasswordScheme::default(),
        };

        Ok(Self {
            db_path,
            host,
            port,
            password_scheme,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}
