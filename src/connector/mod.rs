//! The orchestrator: a vendor connector as descriptor table + transport
//!
//! Each call runs the same five stages: registry lookup, filter translation,
//! endpoint resolution, HTTP dispatch, envelope unwrap, with an optional
//! pagination normalization at the end. Validation errors fire before any
//! network I/O. The engine holds no per-call mutable state; the descriptor
//! registry is read-only after construction, so any number of calls may run
//! concurrently over one connector.

pub mod blocking;

pub use blocking::BlockingConnector;

use crate::core::error::{VendoError, VendoResult};
use crate::core::filter::{Filter, translate};
use crate::core::query::{PagedResult, QueryMap, Record};
use crate::engine::descriptor::{EntityDescriptor, EntityMap};
use crate::engine::endpoint::resolve;
use crate::engine::paging::{PagingStrategy, normalize_passthrough, normalize_sliced};
use crate::engine::unwrap;
use crate::transport::HttpTransport;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A generic vendor connector
///
/// Built once per configured data source and safe to share; cloning is cheap
/// (the transport is behind an `Arc`, the descriptor table is immutable).
///
/// # Example
/// ```rust,ignore
/// let connector = Connector::builder("storefront")
///     .entity(EntityDescriptor::new("products", "products"))
///     .entity(
///         EntityDescriptor::new("productVariations", "products/{productId}/variations")
///             .root("variations")
///             .require("productId"),
///     )
///     .paging(PagingStrategy::page_per_page())
///     .transport(transport)
///     .build()?;
///
/// let records = connector
///     .get_entity("products", &[Filter::new("status", "active")])
///     .await?;
/// ```
#[derive(Clone)]
pub struct Connector {
    name: String,
    entities: EntityMap,
    paging: PagingStrategy,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("name", &self.name)
            .field("entities", &self.entities)
            .field("paging", &self.paging)
            .finish_non_exhaustive()
    }
}

impl Connector {
    /// Start building a connector
    pub fn builder(name: impl Into<String>) -> ConnectorBuilder {
        ConnectorBuilder {
            name: name.into(),
            entities: EntityMap::new(),
            paging: PagingStrategy::default(),
            transport: None,
        }
    }

    /// The connector name, used in log fields
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor registry
    pub fn entities(&self) -> &EntityMap {
        &self.entities
    }

    /// The vendor's paging convention
    pub fn paging(&self) -> &PagingStrategy {
        &self.paging
    }

    /// Fetch all records for an entity
    ///
    /// Runs lookup → translate → resolve → GET → unwrap and returns the flat
    /// record list. Never returns a "null" result: a response whose shape
    /// does not match the descriptor degrades to an empty list.
    pub async fn get_entity(&self, entity: &str, filters: &[Filter]) -> VendoResult<Vec<Record>> {
        let descriptor = self.entities.lookup(entity)?;
        let query = translate(filters);
        let (document, _headers) = self.dispatch(descriptor, query).await?;
        let records = unwrap::unwrap(&document, &descriptor.root_path);

        debug!(
            connector = %self.name,
            entity = %descriptor.entity,
            records = records.len(),
            "fetched entity"
        );
        Ok(records)
    }

    /// Fetch one page of records for an entity
    ///
    /// With a server-side [`PagingStrategy`] the vendor's native paging
    /// parameters are injected and the returned page is normalized
    /// (passthrough mode); without one the full result set is fetched and
    /// sliced in memory (client-slicing mode, exact totals).
    pub async fn get_entity_paged(
        &self,
        entity: &str,
        filters: &[Filter],
        page_number: usize,
        page_size: usize,
    ) -> VendoResult<PagedResult> {
        let descriptor = self.entities.lookup(entity)?;
        let query = translate(filters);
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);

        let result = if self.paging.is_server_side() {
            let mut query = query;
            self.paging.apply(page_number, page_size, &mut query);
            let (document, headers) = self.dispatch(descriptor, query).await?;
            let items = unwrap::unwrap(&document, &descriptor.root_path);
            normalize_passthrough(page_number, page_size, items, &document, &headers)
        } else {
            let (document, _headers) = self.dispatch(descriptor, query).await?;
            let all = unwrap::unwrap(&document, &descriptor.root_path);
            normalize_sliced(page_number, page_size, all)
        };

        debug!(
            connector = %self.name,
            entity = %descriptor.entity,
            page = result.page_number,
            records = result.data.len(),
            total = result.total_records,
            exact = result.total_is_exact,
            "fetched entity page"
        );
        Ok(result)
    }

    /// Resolve the endpoint, dispatch the GET and parse the body
    ///
    /// Shared by the plain and paged paths so their behavior cannot diverge.
    async fn dispatch(
        &self,
        descriptor: &EntityDescriptor,
        query: QueryMap,
    ) -> VendoResult<(Value, HashMap<String, String>)> {
        let resolved = resolve(descriptor, &query)?;

        debug!(
            connector = %self.name,
            entity = %descriptor.entity,
            path = %resolved.path,
            "dispatching request"
        );
        let response = self.transport.get(&resolved.path, &resolved.query).await?;

        if !response.is_success() {
            return Err(VendoError::HttpFailure {
                status: response.status,
                body: response.body,
            });
        }

        let document = unwrap::parse(&response.body)?;
        Ok((document, response.headers))
    }
}

/// Builder for [`Connector`]
pub struct ConnectorBuilder {
    name: String,
    entities: EntityMap,
    paging: PagingStrategy,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ConnectorBuilder {
    /// Register an entity descriptor
    pub fn entity(mut self, descriptor: EntityDescriptor) -> Self {
        self.entities.register(descriptor);
        self
    }

    /// Use a prebuilt descriptor table
    pub fn entities(mut self, entities: EntityMap) -> Self {
        self.entities = entities;
        self
    }

    /// Set the vendor's paging convention (default: client-slicing)
    pub fn paging(mut self, paging: PagingStrategy) -> Self {
        self.paging = paging;
        self
    }

    /// Set the transport collaborator
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the connector
    ///
    /// # Errors
    ///
    /// Returns [`VendoError::Config`] when no transport was provided or the
    /// descriptor table is empty.
    pub fn build(self) -> VendoResult<Connector> {
        if self.entities.is_empty() {
            return Err(VendoError::Config {
                message: format!("connector '{}' has no entity descriptors", self.name),
            });
        }
        let transport = self.transport.ok_or_else(|| VendoError::Config {
            message: format!("connector '{}' has no transport", self.name),
        })?;
        Ok(Connector {
            name: self.name,
            entities: self.entities,
            paging: self.paging,
            transport,
        })
    }
}
