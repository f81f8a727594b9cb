//! Core domain types and the store abstraction for the Rolo contact book.
//!
//! Storage backends (e.g. `rolo-store-mysql`) implement
//! [`store::ContactStore`]; higher layers (`rolo-api`, `rolo-server`) depend
//! on this abstraction, not on any concrete backend.

pub mod contact;
pub mod error;
pub mod group;
pub mod store;

pub use error::{Error, Result};
