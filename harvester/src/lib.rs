//! Catalog harvester library
//!
//! Samples random people and planets from a SWAPI-style catalog and
//! accumulates unique `{name, height}` records into a YAML collection until
//! each category reaches its cap.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use crate::core::CycleDriver;
pub use error::{HarvesterError, HarvesterResult};
pub use services::*;
pub use traits::*;
pub use types::*;
