use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    /// Pre-rendered pages served for non-API paths. Unset means API only.
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = env_or("VOLTSENSE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid VOLTSENSE_HOST: {e}"))?;

        let port: u16 = env_or("VOLTSENSE_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid VOLTSENSE_PORT: {e}"))?;

        let max_body_size: usize = env_or("VOLTSENSE_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid VOLTSENSE_MAX_BODY_SIZE: {e}"))?;

        let static_dir = lookup("VOLTSENSE_STATIC_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env_or("VOLTSENSE_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            max_body_size,
            static_dir,
            log_level,
        })
    }
}
