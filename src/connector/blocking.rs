//! Blocking adapter for synchronous callers
//!
//! The engine is async end-to-end; this adapter is the ONLY place where a
//! thread blocks on that chain. It owns a dedicated current-thread runtime
//! and lives at the outermost boundary: never call it from inside an async
//! context (that would block the executor thread it runs on).

use crate::connector::Connector;
use crate::core::error::{VendoError, VendoResult};
use crate::core::filter::Filter;
use crate::core::query::{PagedResult, Record};
use tokio::runtime::{Builder, Runtime};

/// Synchronous facade over [`Connector`]
///
/// Every call delegates to the async path, so the two entry points cannot
/// diverge behaviorally.
pub struct BlockingConnector {
    inner: Connector,
    runtime: Runtime,
}

impl BlockingConnector {
    /// Wrap a connector with a private current-thread runtime
    ///
    /// # Errors
    ///
    /// Returns [`VendoError::Transport`] if the runtime cannot be created.
    pub fn new(inner: Connector) -> VendoResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| VendoError::Transport {
                message: format!("blocking runtime: {}", e),
            })?;
        Ok(Self { inner, runtime })
    }

    /// Blocking variant of [`Connector::get_entity`]
    pub fn get_entity(&self, entity: &str, filters: &[Filter]) -> VendoResult<Vec<Record>> {
        self.runtime.block_on(self.inner.get_entity(entity, filters))
    }

    /// Blocking variant of [`Connector::get_entity_paged`]
    pub fn get_entity_paged(
        &self,
        entity: &str,
        filters: &[Filter],
        page_number: usize,
        page_size: usize,
    ) -> VendoResult<PagedResult> {
        self.runtime.block_on(
            self.inner
                .get_entity_paged(entity, filters, page_number, page_size),
        )
    }

    /// Access the wrapped async connector
    pub fn inner(&self) -> &Connector {
        &self.inner
    }
}
