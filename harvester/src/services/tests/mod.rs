//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.

#[cfg(test)]
mod catalog_client;
