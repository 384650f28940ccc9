//! # Configuration
//!
//! Settings the hosting application loads once at startup: the rate table,
//! where the truss catalog lives, and how quotes are rounded. Stored as
//! human-readable JSON.
//!
//! ## Example
//!
//! ```json
//! {
//!   "price_list": {
//!     "light_steel_czk_per_kg": 150.0,
//!     "heavy_steel_czk_per_kg": 120.0,
//!     "assembly_czk_per_kg": 15.0
//!   },
//!   "catalog_path": "assets/truss_materials.csv",
//!   "rounding_step_czk": 100.0
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PricingError, PricingResult};
use crate::materials::TrussCatalog;
use crate::price_list::PriceList;

/// Default location of the truss catalog, relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "assets/truss_materials.csv";

/// Default quote rounding, CZK
pub const DEFAULT_ROUNDING_STEP_CZK: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Rate table every order is priced with, replacing any rates the
    /// order document carries
    pub price_list: PriceList,

    /// Truss catalog CSV
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Quoted items are rounded up to a multiple of this
    #[serde(default = "default_rounding_step")]
    pub rounding_step_czk: f64,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

fn default_rounding_step() -> f64 {
    DEFAULT_ROUNDING_STEP_CZK
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            price_list: PriceList::default(),
            catalog_path: default_catalog_path(),
            rounding_step_czk: DEFAULT_ROUNDING_STEP_CZK,
        }
    }
}

impl PricingConfig {
    /// Load the catalog this configuration points to.
    ///
    /// A relative `catalog_path` is resolved against `base_dir` when given.
    pub fn load_catalog(&self, base_dir: Option<&Path>) -> PricingResult<TrussCatalog> {
        let path = match base_dir {
            Some(dir) if self.catalog_path.is_relative() => dir.join(&self.catalog_path),
            _ => self.catalog_path.clone(),
        };
        TrussCatalog::load_from_csv(path)
    }
}

/// Load a configuration file.
pub fn load_config(path: &Path) -> PricingResult<PricingConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| PricingError::file_error("read", path.display().to_string(), e.to_string()))?;

    let config: PricingConfig = serde_json::from_str(&content).map_err(|e| PricingError::SerializationError {
        reason: format!("{}: {}", path.display(), e),
    })?;
    if config.rounding_step_czk.is_nan() || config.rounding_step_czk < 0.0 {
        return Err(PricingError::invalid_input(
            "rounding_step_czk",
            config.rounding_step_czk.to_string(),
            "Rounding step cannot be negative",
        ));
    }

    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Save a configuration file as pretty-printed JSON.
pub fn save_config(config: &PricingConfig, path: &Path) -> PricingResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| PricingError::SerializationError {
        reason: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| PricingError::file_error("write", path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("pricing_config_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.price_list, PriceList::new(150.0, 120.0, 15.0).unwrap());
        assert_eq!(config.catalog_path, PathBuf::from("assets/truss_materials.csv"));
        assert_eq!(config.rounding_step_czk, 100.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");
        let config = PricingConfig {
            price_list: PriceList::new(160.0, 130.0, 18.0).unwrap(),
            catalog_path: PathBuf::from("/data/truss.csv"),
            rounding_step_czk: 10.0,
        };
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_optional_fields_default() {
        let path = temp_config_path("defaults");
        fs::write(
            &path,
            r#"{"price_list":{"light_steel_czk_per_kg":150,"heavy_steel_czk_per_kg":120,"assembly_czk_per_kg":15}}"#,
        )
        .unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(loaded.rounding_step_czk, DEFAULT_ROUNDING_STEP_CZK);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_files() {
        let missing = load_config(Path::new("/nonexistent/pricing.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let path = temp_config_path("invalid");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        fs::write(
            &path,
            r#"{"price_list":{"light_steel_czk_per_kg":150,"heavy_steel_czk_per_kg":120,"assembly_czk_per_kg":15},"rounding_step_czk":-1}"#,
        )
        .unwrap();
        assert_eq!(load_config(&path).unwrap_err().error_code(), "INVALID_INPUT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_catalog_resolved_against_base_dir() {
        let config = PricingConfig::default();
        let catalog = config.load_catalog(Some(Path::new(env!("CARGO_MANIFEST_DIR")))).unwrap();
        assert!(!catalog.is_empty());
    }
}
