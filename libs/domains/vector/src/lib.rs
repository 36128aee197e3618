//! Vector Domain Library
//!
//! Everything about turning text into vectors and describing vector searches,
//! independent of where the vectors are stored.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌─────────────────────────┐
//! │ EmbeddingProvider│      │ VectorIndexDefinition   │  ← index JSON for the store
//! │     (trait)      │      │ VectorSearchQuery       │  ← $vectorSearch parameters
//! └────────┬─────────┘      └─────────────────────────┘
//!          │
//! ┌────────▼─────────┐
//! │ FastEmbedProvider│  ← local ONNX sentence-embedding models
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_vector::{
//!     DistanceMetric, EmbeddingModel, EmbeddingProvider, FastEmbedConfig, FastEmbedProvider,
//!     VectorIndexDefinition,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = FastEmbedProvider::load(EmbeddingModel::MiniLm, &FastEmbedConfig::from_env()?).await?;
//! let vector = provider.embed("stainless steel garden shovel").await?;
//! assert_eq!(vector.len(), 384);
//!
//! let index = VectorIndexDefinition::for_model(provider.model(), "embeddings", DistanceMetric::Cosine);
//! println!("{}", index.to_pretty_json()?);
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod error;
pub mod models;

// Re-export commonly used types
#[cfg(any(test, feature = "mocks"))]
pub use embedding::MockEmbeddingProvider;
pub use embedding::{EmbeddingProvider, FastEmbedConfig, FastEmbedProvider};
pub use error::{VectorError, VectorResult};
pub use models::{
    DEFAULT_INDEX_NAME, DEFAULT_LIMIT, DEFAULT_NUM_CANDIDATES, DEFAULT_VECTOR_PATH,
    DistanceMetric, EmbeddingModel, SearchOptions, VectorIndexDefinition, VectorIndexField,
    VectorSearchQuery, check_dimension,
};
