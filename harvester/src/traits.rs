//! Trait seams for dependency injection
//!
//! The driver only talks to the catalog and to storage through these traits,
//! so tests can swap in mocks or in-memory fakes.

use async_trait::async_trait;
use shared::{Category, Collection, RawEntity};

use crate::error::HarvesterResult;

/// Remote catalog abstraction
#[mockall::automock]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch a single entity of `category` by numeric id.
    ///
    /// Non-success responses are returned as `UpstreamFetchError`.
    async fn fetch(&self, category: Category, id: u32) -> HarvesterResult<RawEntity>;
}

/// Durable storage of the two-category collection
#[mockall::automock]
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Load the persisted collection; `None` when nothing has been saved yet
    async fn load(&self) -> HarvesterResult<Option<Collection>>;

    /// Replace the persisted collection
    async fn save(&self, collection: &Collection) -> HarvesterResult<()>;

    /// Human-readable location, used in log lines
    fn location(&self) -> String;
}
