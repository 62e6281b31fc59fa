//! Domain primitives shared by every Apexverse backend crate.
//!
//! Nothing in here performs I/O: the error taxonomy, identifier and
//! timestamp types, per-entity input schemas, the social platform enum,
//! and image upload validation all live here so the storage, extraction
//! and HTTP layers agree on them.

pub mod error;
pub mod platform;
pub mod schema;
pub mod types;
pub mod upload;
