//! Service configuration from environment variables
//!
//! | Variable               | Default              |
//! |------------------------|----------------------|
//! | `RASPBERRY_HOST`       | `0.0.0.0`            |
//! | `RASPBERRY_PORT`       | `3000`               |
//! | `RASPBERRY_CSV_PATH`   | `data/movielist.csv` |
//! | `RASPBERRY_DATABASE`   | `:memory:`           |
//! | `RASPBERRY_LOG_FORMAT` | `pretty` (or `json`) |

use anyhow::{bail, Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CSV_PATH: &str = "data/movielist.csv";
const DEFAULT_DATABASE: &str = ":memory:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Nominee list loaded at startup
    pub csv_path: String,
    /// SQLite path, or `:memory:`
    pub database: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; unset or blank values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match value("RASPBERRY_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("RASPBERRY_PORT must be a port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let log_format = match value("RASPBERRY_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("RASPBERRY_LOG_FORMAT must be 'pretty' or 'json', got '{other}'"),
        };

        Ok(Self {
            host: value("RASPBERRY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            csv_path: value("RASPBERRY_CSV_PATH").unwrap_or_else(|| DEFAULT_CSV_PATH.to_string()),
            database: value("RASPBERRY_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
