//! Declarative connector configuration
//!
//! A connector can be declared entirely as data: a name, a base URL, a
//! paging convention and a list of entity descriptors. This is what keeps
//! per-vendor connectors thin — configuration over reimplementation.
//!
//! # Example
//!
//! ```yaml
//! name: storefront
//! base_url: https://api.storefront.example/v3
//! paging:
//!   mode: page_per_page
//! entities:
//!   - entity: products
//!     endpoint: products
//!   - entity: productVariations
//!     endpoint: products/{productId}/variations
//!     root_path: variations
//!     required_filters: [productId]
//! ```

use crate::core::error::VendoResult;
use crate::engine::descriptor::{EntityDescriptor, EntityMap};
use crate::engine::paging::PagingStrategy;
use serde::{Deserialize, Serialize};

/// One entity declaration in a connector config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityEntry {
    /// Logical entity name
    pub entity: String,

    /// Endpoint path template
    pub endpoint: String,

    /// Dot-separated response root path (empty = whole body)
    #[serde(default)]
    pub root_path: String,

    /// Filter keys that must be present before dispatch
    #[serde(default)]
    pub required_filters: Vec<String>,
}

/// Complete declarative configuration for one connector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Connector name (used in log fields)
    pub name: String,

    /// Base URL for the default transport; optional because callers may
    /// supply their own transport
    #[serde(default)]
    pub base_url: Option<String>,

    /// Vendor paging convention (default: client-slicing)
    #[serde(default)]
    pub paging: PagingStrategy,

    /// Entity declarations
    pub entities: Vec<EntityEntry>,
}

impl ConnectorConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> VendoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> VendoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Build the descriptor registry declared by this config
    pub fn entity_map(&self) -> EntityMap {
        let mut map = EntityMap::new();
        for entry in &self.entities {
            let mut descriptor = EntityDescriptor::new(&entry.entity, &entry.endpoint)
                .root(&entry.root_path);
            for key in &entry.required_filters {
                descriptor = descriptor.require(key);
            }
            map.register(descriptor);
        }
        map
    }
}
