//! CLI configuration and the YAML files it points at.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `METASHOP_SHOPS_FILE` - Shop definitions (default: `shops.yml`)
//! - `METASHOP_LANGUAGE_FILE` - Message overrides (default: built-in messages)
//!
//! Command-line flags take precedence over the environment. A `.env` file in
//! the working directory is read first.
//!
//! # Shop File Format
//!
//! ```yaml
//! weapons:
//!   name: "<red>Weapons"
//!   size: 27
//!   items:
//!     0:
//!       material: DIAMOND_SWORD
//!       display-name: "<aqua>Sharp Sword"
//!       price: 150
//!     4:
//!       material: ARROW
//!       amount: 16
//!       price: 2.5
//! ```

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use metashop_core::{ItemError, ItemStack, Messages, Price, Shop, ShopItem, ShopRegistry};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_SHOPS_FILE: &str = "shops.yml";
const SHOPS_FILE_VAR: &str = "METASHOP_SHOPS_FILE";
const LANGUAGE_FILE_VAR: &str = "METASHOP_LANGUAGE_FILE";

/// Slots per chest row; shop sizes must be whole rows.
const ROW_SIZE: usize = 9;
/// Largest menu the client can show.
const MAX_SIZE: usize = 54;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid shop {shop}: {reason}")]
    InvalidShop { shop: String, reason: String },
    #[error("Invalid item in shop {shop} slot {index}: {source}")]
    InvalidItem {
        shop: String,
        index: usize,
        source: ItemError,
    },
}

/// Where the CLI reads its data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub shops_file: PathBuf,
    pub language_file: Option<PathBuf>,
}

impl CliConfig {
    /// Resolve file locations from flags, then the environment, then defaults.
    #[must_use]
    pub fn resolve(shops_file: Option<PathBuf>, language_file: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();
        Self::resolve_with(shops_file, language_file, |k: &str| std::env::var_os(k))
    }

    /// Like [`resolve`](Self::resolve), reading variables through `var`.
    #[must_use]
    pub fn resolve_with(
        shops_file: Option<PathBuf>,
        language_file: Option<PathBuf>,
        var: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        let shops_file = shops_file
            .or_else(|| var(SHOPS_FILE_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SHOPS_FILE));
        let language_file = language_file.or_else(|| var(LANGUAGE_FILE_VAR).map(PathBuf::from));

        Self {
            shops_file,
            language_file,
        }
    }
}

/// One slot in the shop file.
#[derive(Debug, Deserialize)]
pub struct SlotDefinition {
    #[serde(flatten)]
    pub item: ItemStack,
    pub price: Price,
}

/// One shop in the shop file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ShopDefinition {
    /// Display name; the id is used when absent.
    pub name: Option<String>,
    pub size: Option<usize>,
    #[serde(default)]
    pub items: BTreeMap<usize, SlotDefinition>,
}

/// Full shop file structure, keyed by shop id.
pub type ShopsFile = BTreeMap<String, ShopDefinition>;

/// Turn parsed shop definitions into a registry.
///
/// Ids that differ only by case collapse into one shop; the one that sorts
/// last wins and a warning is logged.
///
/// # Errors
///
/// Returns an error for a size that is not a whole number of rows up to 54,
/// an item placed past the shop's size, or an invalid item.
pub fn build_registry(file: ShopsFile) -> Result<ShopRegistry, ConfigError> {
    let mut shops = ShopRegistry::new();
    for (id, definition) in file {
        let shop = build_shop(&id, definition)?;
        if shops.has(&id) {
            warn!(shop = %id, "Shop id repeats with different case, replacing earlier definition");
        }
        shops.add(shop);
    }
    Ok(shops)
}

fn build_shop(id: &str, definition: ShopDefinition) -> Result<Shop, ConfigError> {
    let size = definition.size.unwrap_or(Shop::DEFAULT_SIZE);
    if size == 0 || size > MAX_SIZE || !size.is_multiple_of(ROW_SIZE) {
        return Err(ConfigError::InvalidShop {
            shop: id.to_owned(),
            reason: format!(
                "size {size} must be a multiple of {ROW_SIZE} between {ROW_SIZE} and {MAX_SIZE}"
            ),
        });
    }

    let name = definition.name.unwrap_or_else(|| id.to_owned());
    let mut shop = Shop::new(id, name).with_size(size);
    for (index, slot) in definition.items {
        if !shop.contains_slot(index) {
            return Err(ConfigError::InvalidShop {
                shop: id.to_owned(),
                reason: format!("slot {index} is outside {size} slots"),
            });
        }
        slot.item.validate().map_err(|source| ConfigError::InvalidItem {
            shop: id.to_owned(),
            index,
            source,
        })?;
        shop.set_item(index, Some(ShopItem::new(slot.item, slot.price)));
    }
    Ok(shop)
}

/// Read and build the shop registry from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub async fn load_shops(path: &Path) -> Result<ShopRegistry, ConfigError> {
    info!(path = %path.display(), "Loading shops");
    let content = read(path).await?;
    let file: ShopsFile = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_owned(),
        source,
    })?;
    let shops = build_registry(file)?;
    info!(shops = shops.len(), "Shops loaded");
    Ok(shops)
}

/// Read message overrides from `path`, or use the built-in messages.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_messages(path: Option<&Path>) -> Result<Messages, ConfigError> {
    let Some(path) = path else {
        return Ok(Messages::default());
    };
    info!(path = %path.display(), "Loading language file");
    let content = read(path).await?;
    if content.trim().is_empty() {
        return Ok(Messages::default());
    }
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_owned(),
        source,
    })
}

async fn read(path: &Path) -> Result<String, ConfigError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })
}
