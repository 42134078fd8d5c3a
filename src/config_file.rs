//! Configuration file handling for plan catalogs.
//!
//! A config file swaps the built-in plans for a custom list and can point
//! the icon loader at an assets directory. Selections are never written
//! here; only the catalog and display defaults are.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, Offering};
use crate::error::QuoteError;
use crate::types::ProviderArrangement;

/// Catalog configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Plans offered on the form, in display order
    pub offerings: Vec<Offering>,
    /// Directory icon handles are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    /// Arrangement pre-selected when the form opens
    #[serde(default)]
    pub default_arrangement: ProviderArrangement,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            offerings: Catalog::builtin().offerings().to_vec(),
            assets_dir: None,
            default_arrangement: ProviderArrangement::default(),
        }
    }
}

impl QuoteConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.offerings.is_empty() {
            return Err(QuoteError::config("At least one offering must be configured"));
        }

        let mut seen = HashSet::new();
        for offering in &self.offerings {
            let name = offering.name.trim();
            if name.is_empty() {
                return Err(QuoteError::config("Offering names must not be blank"));
            }
            if name != offering.name {
                return Err(QuoteError::config(format!(
                    "Offering name {:?} has surrounding whitespace",
                    offering.name
                )));
            }
            if !seen.insert(name) {
                return Err(QuoteError::config(format!("Duplicate offering name: {}", name)));
            }
            if offering.icon.trim().is_empty() {
                return Err(QuoteError::config(format!("Offering {} has no icon", name)));
            }
        }

        if let Some(dir) = &self.assets_dir {
            if dir.as_os_str().is_empty() {
                return Err(QuoteError::config("Assets directory must not be empty when set"));
            }
        }

        Ok(())
    }

    /// Build the catalog described by this configuration
    pub fn to_catalog(&self) -> Result<Catalog> {
        self.validate()?;
        Catalog::new(self.offerings.clone()).context("Failed to build catalog")
    }
}
