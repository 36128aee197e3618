use async_trait::async_trait;

use crate::error::VectorResult;
use crate::models::EmbeddingModel;

/// Trait for embedding generation providers
///
/// A provider is bound to one pretrained model for its whole lifetime, so every
/// vector it returns has `model().dimension()` components.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// The model this provider runs
    fn model(&self) -> EmbeddingModel;

    /// Generate embedding for a single text
    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>>;

    /// Generate embeddings for multiple texts, one per input and in input order
    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>>;
}
