//! Deal policy defaults and the optional settings profile.

use crate::error::Result;
use config::{Config, Environment, File, FileFormat};
use ethers::types::U256;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `DEALMAKER_RPC_ENDPOINT`.
pub const ENV_PREFIX: &str = "DEALMAKER";

/// Fixed terms applied to every proposal. Pricing is left to the
/// contract and the storage market, so everything here defaults to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealDefaults {
    pub storage_price_per_epoch: U256,
    pub provider_collateral: U256,
    pub client_collateral: U256,
    pub skip_ipni_announce: bool,
    pub remove_unsealed_copy: bool,
}

impl Default for DealDefaults {
    fn default() -> Self {
        DealDefaults {
            storage_price_per_epoch: U256::zero(),
            provider_collateral: U256::zero(),
            client_collateral: U256::zero(),
            skip_ipni_announce: false,
            remove_unsealed_copy: false,
        }
    }
}

/// Network values that may be omitted on the command line.
///
/// Loaded from an optional TOML file, then `DEALMAKER_*` environment
/// variables. Command-line flags always win over both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rpc_endpoint: Option<String>,
    pub contract: Option<String>,
    pub chain_id: Option<i64>,
}

impl Settings {
    /// Load settings. A path that was given explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            log::debug!("Loading settings profile from {}", path.display());
            builder = builder.add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(true),
            );
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_deal_defaults_are_zero_priced() {
        let defaults = DealDefaults::default();
        assert!(defaults.storage_price_per_epoch.is_zero());
        assert!(defaults.provider_collateral.is_zero());
        assert!(defaults.client_collateral.is_zero());
        assert!(!defaults.skip_ipni_announce);
        assert!(!defaults.remove_unsealed_copy);
    }

    #[test]
    fn test_load_profile_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "rpc_endpoint = \"https://api.calibration.node.glif.io/rpc/v1\"\nchain_id = 314159"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(
            settings.rpc_endpoint.as_deref(),
            Some("https://api.calibration.node.glif.io/rpc/v1")
        );
        assert_eq!(settings.chain_id, Some(314159));
        assert_eq!(settings.contract, None);
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }
}
