//! The generic connector engine
//!
//! Descriptor registry, endpoint resolution, envelope unwrapping and
//! pagination normalization. Everything here is pure and synchronous; the
//! network boundary lives in [`crate::transport`] and sequencing in
//! [`crate::connector`].

pub mod descriptor;
pub mod endpoint;
pub mod paging;
pub mod unwrap;

pub use descriptor::{EntityDescriptor, EntityMap};
pub use endpoint::{ResolvedEndpoint, resolve};
pub use paging::PagingStrategy;
