use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::database::{seed, ActivityStore};
use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_path: None,
        }
    }
}

impl Config {
    /// Reads HOST, PORT, STATIC_DIR and ACTIVITIES_SEED_PATH.
    /// Call `dotenvy::dotenv()` first if a `.env` file should count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            seed_path: non_empty("ACTIVITIES_SEED_PATH").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(format!("{}:{}", self.host, self.port.saturating_add(1)).parse()?)
    }

    /// Builds the store from the seed file when one is configured.
    pub fn build_store(&self) -> Result<ActivityStore, ConfigError> {
        match &self.seed_path {
            Some(path) => Ok(ActivityStore::new(seed::load_activities_file(path)?)),
            None => Ok(ActivityStore::seeded()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9001"),
            ("STATIC_DIR", "public"),
            ("ACTIVITIES_SEED_PATH", "seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:9001");
        assert_eq!(config.fallback_addr().unwrap().port(), 9002);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("HOST", " "), ("PORT", "")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[tokio::test]
    async fn store_uses_builtin_seed_without_path() {
        let store = Config::default().build_store().unwrap();
        assert_eq!(store.len().await, 9);
    }
}
