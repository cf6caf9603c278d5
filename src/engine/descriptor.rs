//! Entity descriptors and the per-connector descriptor registry

use crate::core::error::{VendoError, VendoResult};
use indexmap::IndexMap;

/// Immutable binding of a logical entity name to a vendor endpoint
///
/// Each connector declares one descriptor per logical entity it exposes.
/// The endpoint is a path template that may embed `{token}` placeholders
/// resolved from filter values; the root path addresses the payload inside
/// the vendor's JSON envelope (empty means the whole body is the payload).
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    /// Logical entity name (registry key, matched case-insensitively)
    pub entity: String,

    /// Endpoint path template, e.g. `products/{productId}/variations`
    pub endpoint: String,

    /// Dot-separated path into the response JSON, e.g. `meta.items`
    pub root_path: String,

    /// Filter keys that must be present and non-blank before dispatch
    pub required_filters: Vec<String>,
}

impl EntityDescriptor {
    /// Create a descriptor with no root path and no required filters
    pub fn new(entity: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            endpoint: endpoint.into(),
            root_path: String::new(),
            required_filters: Vec::new(),
        }
    }

    /// Set the response root path
    pub fn root(mut self, root_path: impl Into<String>) -> Self {
        self.root_path = root_path.into();
        self
    }

    /// Add a required filter key
    pub fn require(mut self, key: impl Into<String>) -> Self {
        self.required_filters.push(key.into());
        self
    }
}

/// Registry of all entity descriptors for one connector
///
/// The registry is populated once at connector construction and never
/// mutated afterwards, so concurrent lookups are safe without locking.
/// Lookup is a case-insensitive exact match on the entity name.
#[derive(Debug, Clone, Default)]
pub struct EntityMap {
    descriptors: IndexMap<String, EntityDescriptor>,
}

impl EntityMap {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register a descriptor, keyed by its lowercased entity name
    ///
    /// Registering the same name twice replaces the earlier descriptor.
    pub fn register(&mut self, descriptor: EntityDescriptor) {
        self.descriptors
            .insert(descriptor.entity.to_lowercase(), descriptor);
    }

    /// Builder-style registration
    pub fn with(mut self, descriptor: EntityDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Look up a descriptor by entity name, case-insensitively
    pub fn lookup(&self, entity: &str) -> VendoResult<&EntityDescriptor> {
        self.descriptors
            .get(&entity.to_lowercase())
            .ok_or_else(|| VendoError::UnknownEntity {
                entity: entity.to_string(),
            })
    }

    /// All registered entity names, in registration order
    pub fn entity_names(&self) -> Vec<&str> {
        self.descriptors.values().map(|d| d.entity.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
