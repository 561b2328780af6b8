//! Collection API trait for reading and writing remote collections

#[cfg(test)]
use mockall::automock;

use crate::collection::error::ApiError;
use crate::collection::types::{CollectionContent, CollectionSummary};

/// Trait for the four collection operations the versioning run needs
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CollectionApi: Send + Sync {
    /// Lists every collection visible to the API key, in server order
    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, ApiError>;

    /// Fetches the full content of one collection
    async fn get_collection(&self, uid: &str) -> Result<CollectionContent, ApiError>;

    /// Creates a collection; the server assigns its uid
    ///
    /// # Arguments
    /// * `content` - Collection body without `uid`/`id`
    async fn create_collection(
        &self,
        content: CollectionContent,
    ) -> Result<CollectionSummary, ApiError>;

    /// Replaces the content of an existing collection
    async fn update_collection(
        &self,
        uid: &str,
        content: CollectionContent,
    ) -> Result<CollectionSummary, ApiError>;
}
