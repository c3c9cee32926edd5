//! Capability catalog wiring.
//!
//! Five fixed tables (transports, stream multiplexers, connection encryption,
//! peer discovery, protocols) describe every component the generator knows how
//! to wire. Types here describe a single row; callers use [`CATALOG`] for
//! lookups by category and value.

pub mod identity;
pub mod model;
pub mod repository;
pub mod tables;

pub use identity::{Category, UnknownCategory};
pub use model::CapabilityOption;
pub use repository::{CATALOG, Catalog, CategoryListing};
