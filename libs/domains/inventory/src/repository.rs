use async_trait::async_trait;
use domain_vector::VectorSearchQuery;
use mongodb::bson::oid::ObjectId;

use crate::error::InventoryResult;
use crate::models::{InventoryItem, SearchHit};

/// Repository trait for inventory persistence
///
/// This trait defines the data access interface for the inventory collection.
/// Implementations can use different storage backends as long as they offer a
/// vector search operator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Drop all existing records and insert `items`; returns the number inserted
    async fn replace_all(&self, items: Vec<InventoryItem>) -> InventoryResult<u64>;

    /// Every record in the collection
    async fn list_all(&self) -> InventoryResult<Vec<InventoryItem>>;

    /// Store `embedding` on record `id`; returns false when no record matched
    async fn set_embedding(
        &self,
        id: ObjectId,
        embedding: Vec<f32>,
        model_key: String,
    ) -> InventoryResult<bool>;

    /// Nearest-neighbour search over the stored embeddings
    async fn vector_search(&self, query: VectorSearchQuery) -> InventoryResult<Vec<SearchHit>>;

    /// Number of records
    async fn count(&self) -> InventoryResult<u64>;

    /// Number of records carrying an embedding
    async fn count_embedded(&self) -> InventoryResult<u64>;

    /// Distinct model keys recorded next to stored embeddings
    async fn embedding_models(&self) -> InventoryResult<Vec<String>>;
}
