//! Catalog and storage implementations

pub mod catalog_client;
pub mod collection_store;

#[cfg(test)]
pub mod tests;

pub use catalog_client::*;
pub use collection_store::*;
