//! Site configuration: `menu-press.toml` loading with stock defaults.
//!
//! Everything environment-specific lives here — the public origin for
//! published URLs, the currency label, the blob store's public base path,
//! the placeholder graphic, and where the JSON row store sits on disk. All
//! keys are optional; missing keys fall back to the stock defaults below,
//! and a missing config file (when no explicit path was given) just means
//! "all defaults".
//!
//! ```toml
//! # menu-press.toml — all keys optional, defaults shown
//! origin = "http://localhost:8080"
//! currency = "IQD"
//! storage_base_url = "https://storage.example.com/object/public/images"
//! placeholder_image = "/placeholder.svg"
//! store_path = "menu-data.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "menu-press.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin used when printing public menu URLs.
    pub origin: String,
    /// Currency label appended to every rendered price.
    pub currency: String,
    /// Public base path of the blob store; storage keys are joined onto it.
    pub storage_base_url: String,
    /// Graphic swapped in when an item image fails to load.
    pub placeholder_image: String,
    /// Path of the JSON row store document.
    pub store_path: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            origin: "http://localhost:8080".to_string(),
            currency: "IQD".to_string(),
            storage_base_url: "https://storage.example.com/object/public/images".to_string(),
            placeholder_image: "/placeholder.svg".to_string(),
            store_path: PathBuf::from("menu-data.json"),
        }
    }
}

impl SiteConfig {
    /// Load configuration.
    ///
    /// With an explicit path, the file must exist and parse. With `None`,
    /// `menu-press.toml` is read if present, else stock defaults apply.
    pub fn load(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(SiteConfig::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<SiteConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// A fully documented stock config, for `menu-press gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = SiteConfig::default();
    format!(
        "\
# menu-press configuration. All keys are optional — defaults shown.

# Origin used when printing public menu URLs.
origin = {origin:?}

# Currency label appended to every rendered price.
currency = {currency:?}

# Public base path of the blob store. Item image references that are not
# absolute URLs are treated as storage keys and joined onto this.
storage_base_url = {storage:?}

# Graphic swapped in when an item image fails to load in the browser.
placeholder_image = {placeholder:?}

# Path of the JSON row store document.
store_path = {store:?}
",
        origin = defaults.origin,
        currency = defaults.currency,
        storage = defaults.storage_base_url,
        placeholder = defaults.placeholder_image,
        store = defaults.store_path.display().to_string(),
    )
}
