//! Runtime configuration, loaded from the environment with logged defaults.

use log::info;
use std::env;
use std::path::PathBuf;

const DEFAULT_API_BASE_URL: &str = "https://pontuei-back-end.vercel.app";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the storefront REST backend
    pub api_base_url: String,
    /// Directory holding the persisted session entries
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let api_base_url = env::var("PONTUEI_API_URL").unwrap_or_else(|_| {
            info!("PONTUEI_API_URL not set, using default: {}", DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        });
        let data_dir = env::var("PONTUEI_DATA_DIR").map(PathBuf::from).unwrap_or_else(|_| {
            let dir = env::temp_dir().join("pontuei");
            info!("PONTUEI_DATA_DIR not set, using default: {:?}", dir);
            dir
        });
        Self { api_base_url, data_dir }
    }

    /// Configuration rooted at an explicit data directory, with the
    /// default backend URL. Used by tests and embedders.
    pub fn with_data_dir<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: data_dir.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_dir() {
        let config = Config::with_data_dir("/tmp/pontuei-test");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/pontuei-test"));
    }
}
