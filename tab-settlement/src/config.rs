//! Configuration for settlement engine

use serde::{Deserialize, Serialize};

/// Settlement engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Prefix for generated participant names
    pub name_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "tab-settlement".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            name_prefix: "User".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load defaults with environment variable overrides
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("TABTRACK_NAME_PREFIX") {
            config.name_prefix = prefix;
        }

        if let Ok(name) = std::env::var("TABTRACK_SERVICE_NAME") {
            config.service_name = name;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "tab-settlement");
        assert_eq!(config.name_prefix, "User");
    }

    #[test]
    fn test_from_file_round_trip() {
        let config = Config {
            service_name: "tab-test".to_string(),
            service_version: "0.0.1".to_string(),
            name_prefix: "Guest".to_string(),
        };

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let serialized = toml::to_string(&config).unwrap();
        file.write_all(serialized.as_bytes()).unwrap();

        let loaded = Config::from_file(file.path()).unwrap();
        assert_eq!(loaded.service_name, "tab-test");
        assert_eq!(loaded.name_prefix, "Guest");
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not = [valid").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }
}
