//! Common test utilities for harvester integration tests

pub mod fixtures;

pub use fixtures::*;
