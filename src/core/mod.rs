//! Core data types shared across the engine

pub mod error;
pub mod filter;
pub mod query;

pub use error::{VendoError, VendoResult};
pub use filter::Filter;
pub use query::{PagedResult, QueryMap, Record};
