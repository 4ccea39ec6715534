//! Shared types for the catalog harvester
//!
//! Holds the record and collection shapes that both the core loop and the
//! storage/HTTP adapters agree on, plus the logging bootstrap.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
