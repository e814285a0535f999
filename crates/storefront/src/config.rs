//! Storefront configuration.
//!
//! Every knob has a default matching the shipped storefront; environment
//! variables override them:
//!
//! | variable | field |
//! |---|---|
//! | `STOCKROOM_LOW_STOCK_THRESHOLD` | `low_stock_threshold` |
//! | `STOCKROOM_RESTOCK_INCREMENT` | `restock_increment` |
//! | `STOCKROOM_RESTOCK_TARGET` | `restock_target` |
//! | `STOCKROOM_SEED_FILE` | `seed` (JSON array of `{ "name", "stock" }`) |

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{SeedProduct, default_seed};

pub const THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const INCREMENT_VAR: &str = "STOCKROOM_RESTOCK_INCREMENT";
pub const TARGET_VAR: &str = "STOCKROOM_RESTOCK_TARGET";
pub const SEED_FILE_VAR: &str = "STOCKROOM_SEED_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Stock at or below this (and above zero) is flagged "Low".
    pub low_stock_threshold: i64,
    /// Units added by the browse view's manual restock action.
    pub restock_increment: u32,
    /// Level the report view's restock action brings an item up to.
    pub restock_target: i64,
    pub seed: Vec<SeedProduct>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 5,
            restock_increment: 5,
            restock_target: 10,
            seed: default_seed(),
        }
    }
}

impl StorefrontConfig {
    /// Load from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let config = Self {
            low_stock_threshold: parse_var(&lookup, THRESHOLD_VAR, defaults.low_stock_threshold)?,
            restock_increment: parse_var(&lookup, INCREMENT_VAR, defaults.restock_increment)?,
            restock_target: parse_var(&lookup, TARGET_VAR, defaults.restock_target)?,
            seed: match lookup(SEED_FILE_VAR) {
                Some(path) => load_seed(Path::new(&path))?,
                None => {
                    tracing::debug!("{SEED_FILE_VAR} not set; using built-in catalog");
                    defaults.seed
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.low_stock_threshold < 0 {
            return Err(DomainError::validation(format!(
                "low stock threshold cannot be negative (got {})",
                self.low_stock_threshold
            )));
        }
        if self.restock_increment == 0 {
            return Err(DomainError::validation("restock increment must be at least 1"));
        }
        if self.restock_target < 1 {
            return Err(DomainError::validation(format!(
                "restock target must be at least 1 (got {})",
                self.restock_target
            )));
        }
        Ok(())
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T>
where
    T: FromStr + core::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a whole number, got {raw:?}")),
        None => {
            tracing::debug!(key, %default, "using default");
            Ok(default)
        }
    }
}

/// Read a JSON seed catalog from disk.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<SeedProduct>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let seed: Vec<SeedProduct> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;

    if seed.is_empty() {
        tracing::warn!(path = %path.display(), "seed file contains no products");
    }
    Ok(seed)
}
