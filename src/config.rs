//! Configuration - backend endpoints per network and front-end defaults
//!
//! Loaded once at startup from `~/.tokenbank/config.yaml`. A missing file
//! means "use the defaults"; a present but broken one is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COOLDOWN_HOURS, DEFAULT_DEVNET_URL, DEFAULT_MAX_CLAIM, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_TESTNET_URL, DEFAULT_TOKEN_SYMBOL,
};
use crate::error::ConfigError;
use crate::models::Network;

const CONFIG_DIR: &str = ".tokenbank";
const CONFIG_FILE: &str = "config.yaml";

/// Static mapping from network to faucet backend base URL
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    backends: BTreeMap<Network, String>,
}

impl NetworkConfig {
    pub fn new(backends: BTreeMap<Network, String>) -> Self {
        let backends = backends
            .into_iter()
            .map(|(network, url)| (network, url.trim().trim_end_matches('/').to_string()))
            .collect();
        NetworkConfig { backends }
    }

    /// Backend base URL for `network`
    pub fn resolve(&self, network: Network) -> Result<&str, ConfigError> {
        self.backends
            .get(&network)
            .map(String::as_str)
            .ok_or(ConfigError::UnknownNetwork(network))
    }

    /// Configured networks in selector order
    pub fn networks(&self) -> Vec<Network> {
        Network::ALL
            .into_iter()
            .filter(|n| self.backends.contains_key(n))
            .collect()
    }

    pub fn contains(&self, network: Network) -> bool {
        self.backends.contains_key(&network)
    }

    /// Network after `current` in the configured set, wrapping around
    pub fn next(&self, current: Network) -> Network {
        self.step(current, true)
    }

    /// Network before `current` in the configured set, wrapping around
    pub fn prev(&self, current: Network) -> Network {
        self.step(current, false)
    }

    fn step(&self, current: Network, forward: bool) -> Network {
        let networks = self.networks();
        if networks.is_empty() {
            return current;
        }
        let len = networks.len();
        match networks.iter().position(|n| *n == current) {
            Some(i) if forward => networks[(i + 1) % len],
            Some(i) => networks[(i + len - 1) % len],
            None => networks[0],
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.backends.is_empty() {
            return Err(ConfigError::NoNetworks);
        }
        for (network, url) in &self.backends {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBackendUrl {
                    network: *network,
                    url: url.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(default_backends())
    }
}

fn default_backends() -> BTreeMap<Network, String> {
    BTreeMap::from([
        (Network::Testnet, DEFAULT_TESTNET_URL.to_string()),
        (Network::Devnet, DEFAULT_DEVNET_URL.to_string()),
    ])
}

/// On-disk configuration file
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_network: Network,
    /// Account exposed by the configured wallet provider
    pub wallet_address: Option<String>,
    pub token_symbol: String,
    pub request_timeout_secs: u64,
    pub cooldown_hours: u32,
    pub max_claim: u32,
    pub networks: BTreeMap<Network, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_network: Network::Testnet,
            wallet_address: None,
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            cooldown_hours: DEFAULT_COOLDOWN_HOURS,
            max_claim: DEFAULT_MAX_CLAIM,
            networks: default_backends(),
        }
    }
}

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load and validate a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        tracing::info!(path = %path.display(), networks = config.networks.len(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let networks = self.network_config();
        networks.validate()?;
        networks.resolve(self.default_network)?;
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig::new(self.networks.clone())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_every_configured_network_resolves() {
        let config = NetworkConfig::default();
        for network in config.networks() {
            let url = config.resolve(network).unwrap();
            assert!(!url.is_empty());
        }
        assert_eq!(config.networks(), vec![Network::Testnet, Network::Devnet]);
    }

    #[test]
    fn test_unconfigured_network_fails() {
        let config = NetworkConfig::default();
        assert_eq!(
            config.resolve(Network::Mainnet),
            Err(ConfigError::UnknownNetwork(Network::Mainnet))
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = NetworkConfig::new(BTreeMap::from([(
            Network::Devnet,
            "http://localhost:8080/api/".to_string(),
        )]));
        assert_eq!(config.resolve(Network::Devnet).unwrap(), "http://localhost:8080/api");
    }

    #[test]
    fn test_cycle_wraps_within_configured_set() {
        let config = NetworkConfig::default();
        assert_eq!(config.next(Network::Testnet), Network::Devnet);
        assert_eq!(config.next(Network::Devnet), Network::Testnet);
        assert_eq!(config.prev(Network::Testnet), Network::Devnet);
        // Unconfigured current falls back to the first configured network
        assert_eq!(config.next(Network::Mainnet), Network::Testnet);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config.default_network, Network::Testnet);
        assert_eq!(config.token_symbol, "SUI");
        assert_eq!(config.networks.len(), 2);
    }

    #[test]
    fn test_load_overrides() {
        let file = write_config(
            r#"
default_network: mainnet
wallet_address: "0x1111111111111111111111111111111111111111"
request_timeout_secs: 10
networks:
  mainnet: https://faucet.example.com/api
  devnet: http://localhost:3000
"#,
        );
        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.default_network, Network::Mainnet);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_claim, DEFAULT_MAX_CLAIM);

        let networks = config.network_config();
        assert_eq!(networks.networks(), vec![Network::Devnet, Network::Mainnet]);
        assert!(networks.resolve(Network::Testnet).is_err());
    }

    #[test]
    fn test_default_network_must_be_configured() {
        let file = write_config(
            r#"
default_network: testnet
networks:
  devnet: http://localhost:3000
"#,
        );
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_rejects_bad_url_and_unknown_network() {
        let file = write_config("networks:\n  testnet: ftp://nope\n");
        assert!(AppConfig::load_from(file.path()).is_err());

        let file = write_config("networks:\n  localnet: http://localhost\n");
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_empty_networks_rejected() {
        let config = AppConfig {
            networks: BTreeMap::new(),
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoNetworks));
    }
}
