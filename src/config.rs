//! TOML catalog configuration.
//!
//! ```toml
//! [[product]]
//! id = 1
//! name = "Coke"
//! price = 1.5
//! ```

use crate::builder::VendingMachineBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid catalog configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, rename = "product")]
    pub products: Vec<ProductEntry>,
}

impl CatalogConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Builder preloaded with the configured products, in file order.
    pub fn into_builder(self) -> VendingMachineBuilder {
        self.products
            .into_iter()
            .fold(VendingMachineBuilder::new(), |builder, entry| {
                builder.product(entry.id, entry.name, entry.price)
            })
    }
}
