//! Catalog files.
//!
//! A catalog is a RON document holding plants, the companion matrix and hardiness zones. A
//! default catalog is compiled into the binary; `--catalog` or the config file can point at
//! another one.
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sow::prelude::*;
use tracing::debug;

/// Catalog shipped with the binary.
pub const DEFAULT_CATALOG: &str = include_str!("../data/catalog.ron");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub plants: BTreeMap<KindId, PlantSpec>,
    #[serde(default)]
    pub companions: CompanionMatrix,
    #[serde(default)]
    pub zones: BTreeMap<String, HardinessZone>,
}

impl CatalogFile {
    pub fn into_catalog(self) -> sow::error::Result<Catalog> {
        Catalog::try_new(self.plants, self.companions, self.zones)
    }
}

/// Parse and validate catalog text.
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile = ron::from_str(content).context("Failed to parse catalog")?;
    let catalog = file.into_catalog()?;
    debug!(
        "Catalog loaded | plants: {} | zones: {}.",
        catalog.len(),
        catalog.zones().count()
    );
    Ok(catalog)
}

/// Load the catalog at `path`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            parse_catalog(&content).with_context(|| format!("Invalid catalog {}", path.display()))
        }
        None => parse_catalog(DEFAULT_CATALOG),
    }
}
