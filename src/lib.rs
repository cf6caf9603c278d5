//! # Vendo
//!
//! A declarative entity-mapping and pagination-normalization engine for
//! building vendor REST API connectors in Rust.
//!
//! ## Features
//!
//! - **Descriptor-Driven**: bind logical entity names to endpoint templates,
//!   response root paths and required filter keys — connectors are
//!   configuration, not reimplementation
//! - **Filter Translation**: generic (field, operator, value) filters become
//!   flat query maps
//! - **Safe Endpoint Resolution**: `{token}` placeholders are validated and
//!   percent-encoded; a partially resolved path never reaches the wire
//! - **Envelope Unwrapping**: dot-path navigation with fallback container
//!   keys reconciles heterogeneous vendor JSON into uniform record lists
//! - **Pagination Normalization**: offset/limit, page/per_page and
//!   no-paging vendors all produce one uniform paged-result contract
//! - **Async First**: the whole chain is async; a blocking adapter exists
//!   only at the outermost boundary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vendo::prelude::*;
//!
//! let transport = Arc::new(RestTransport::new(
//!     RestTransportConfig::new("https://api.storefront.example/v3").bearer("token"),
//! )?);
//!
//! let connector = Connector::builder("storefront")
//!     .entity(EntityDescriptor::new("products", "products"))
//!     .entity(
//!         EntityDescriptor::new("productVariations", "products/{productId}/variations")
//!             .root("variations")
//!             .require("productId"),
//!     )
//!     .paging(PagingStrategy::page_per_page())
//!     .transport(transport)
//!     .build()?;
//!
//! let page = connector
//!     .get_entity_paged("products", &[Filter::new("status", "active")], 1, 20)
//!     .await?;
//! println!("{} of {} records", page.data.len(), page.total_records);
//! ```

pub mod catalog;
pub mod config;
pub mod connector;
pub mod core;
pub mod engine;
pub mod transport;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{VendoError, VendoResult},
        filter::{Filter, translate},
        query::{PagedResult, QueryMap, Record},
    };

    // === Engine ===
    pub use crate::engine::{
        descriptor::{EntityDescriptor, EntityMap},
        endpoint::{ResolvedEndpoint, resolve},
        paging::PagingStrategy,
    };

    // === Connector ===
    pub use crate::connector::{BlockingConnector, Connector, ConnectorBuilder};

    // === Transport ===
    pub use crate::transport::{HttpResponse, HttpTransport};
    #[cfg(feature = "reqwest-transport")]
    pub use crate::transport::{RestTransport, RestTransportConfig};

    // === Config ===
    pub use crate::config::{ConnectorConfig, EntityEntry};
    pub use crate::catalog::VendorProfile;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
