//! # CLI Configuration
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. An optional YAML file passed with `--config`.
//! 2. Environment variables:
//!    - `RFL_BAG_COUNT` (default: 8000)
//!    - `RFL_CHAIN_ID` (default: 1)
//!    - `RFL_OUTPUT_DIR` (default: `.`)
//! 3. Subcommand flags, applied by each subcommand.
//!
//! ```yaml
//! bag_count: 8000
//! chain_id: 4
//! output_dir: dist
//! cache_limit: 10000
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use rfl_catalog::DEFAULT_BAG_COUNT;
use rfl_core::ChainId;

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Bags `1..=bag_count` make up the catalog.
    pub bag_count: u32,
    /// Chain used for contract addresses.
    pub chain_id: ChainId,
    /// Where generated files are written.
    pub output_dir: PathBuf,
    /// Upper bound on memoized ring derivations; unbounded when absent.
    pub cache_limit: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bag_count: DEFAULT_BAG_COUNT,
            chain_id: ChainId::MAINNET,
            output_dir: PathBuf::from("."),
            cache_limit: None,
        }
    }
}

impl CliConfig {
    /// Load the YAML file at `path` (if any), then apply process environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env(|var| std::env::var(var).ok())
    }

    /// Parse a YAML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    /// Parse a YAML config document.
    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid, all-default config.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply overrides read through `lookup`, which maps a variable name to
    /// its value.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup("RFL_BAG_COUNT") {
            self.bag_count = parse_env("RFL_BAG_COUNT", &raw)?;
        }
        if let Some(raw) = lookup("RFL_CHAIN_ID") {
            self.chain_id = ChainId(parse_env("RFL_CHAIN_ID", &raw)?);
        }
        if let Some(raw) = lookup("RFL_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(raw);
        }
        if self.bag_count == 0 {
            return Err(ConfigError::Invalid("bag_count must be positive".to_string()));
        }
        tracing::debug!(config = ?self, "resolved configuration");
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: raw.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::default().with_env(env(&[])).unwrap();
        assert_eq!(config.bag_count, 8000);
        assert_eq!(config.chain_id, ChainId::MAINNET);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.cache_limit, None);
    }

    #[test]
    fn test_yaml_partial() {
        let config = CliConfig::from_yaml("chain_id: 4\ncache_limit: 100\n").unwrap();
        assert_eq!(config.chain_id, ChainId::RINKEBY);
        assert_eq!(config.cache_limit, Some(100));
        assert_eq!(config.bag_count, 8000);
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        assert!(matches!(
            CliConfig::from_yaml("bags: 10\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = CliConfig::from_yaml("bag_count: 100\noutput_dir: out\n").unwrap();
        let config = file
            .with_env(env(&[("RFL_BAG_COUNT", "400"), ("RFL_CHAIN_ID", "4")]))
            .unwrap();
        assert_eq!(config.bag_count, 400);
        assert_eq!(config.chain_id, ChainId(4));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_env_rejects_garbage() {
        let err = CliConfig::default()
            .with_env(env(&[("RFL_BAG_COUNT", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: "RFL_BAG_COUNT", .. }));
        assert!(CliConfig::default()
            .with_env(env(&[("RFL_BAG_COUNT", "0")]))
            .is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rfl.yaml");
        std::fs::write(&path, "bag_count: 50\n").unwrap();
        assert_eq!(CliConfig::from_file(&path).unwrap().bag_count, 50);
        assert!(matches!(
            CliConfig::from_file(&dir.path().join("missing.yaml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
