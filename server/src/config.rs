//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5050;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_REPORT_CAPACITY: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Centroid model file. Analysis answers 503 when absent or unloadable.
    pub model_path: Option<PathBuf>,
    /// Directory for persisted uploads. Uploads are kept in memory only when unset.
    pub upload_dir: Option<PathBuf>,
    pub report_capacity: usize,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// - `HOST`: default `127.0.0.1`
    /// - `PORT`: default 5050
    /// - `MODEL_PATH`: optional
    /// - `UPLOAD_DIR`: optional
    /// - `REPORT_CAPACITY`: default 256, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `REPORT_CAPACITY` do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let report_capacity = match non_empty(lookup("REPORT_CAPACITY")) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { var: "REPORT_CAPACITY", value: raw }),
            },
            None => DEFAULT_REPORT_CAPACITY,
        };

        Ok(Self {
            host,
            port,
            model_path: non_empty(lookup("MODEL_PATH")).map(PathBuf::from),
            upload_dir: non_empty(lookup("UPLOAD_DIR")).map(PathBuf::from),
            report_capacity,
        })
    }

    /// Address to bind, `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
