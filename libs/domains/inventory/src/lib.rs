//! Inventory Domain
//!
//! Seed catalog, embedding generation and semantic search over the
//! `inventory` collection in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      ┌───────────────────┐
//! │   Service   │─────▶│ EmbeddingProvider │  ← domain_vector
//! └──────┬──────┘      └───────────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← InventoryItem, seed catalog, reports
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{InventoryService, MongoInventoryRepository};
//! use domain_vector::{DistanceMetric, EmbeddingModel, FastEmbedConfig, FastEmbedProvider, SearchOptions};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let service = InventoryService::new(MongoInventoryRepository::new(client.database("homedepot")));
//!
//! service.load_catalog().await?;
//!
//! let provider = FastEmbedProvider::load(EmbeddingModel::MiniLm, &FastEmbedConfig::default()).await?;
//! service.generate_embeddings(&provider, DistanceMetric::Cosine).await?;
//!
//! for hit in service.search(&provider, "garden tools", &SearchOptions::default()).await? {
//!     println!("{} ({:.3})", hit.description, hit.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use catalog::seed_catalog;
pub use error::{InventoryError, InventoryResult};
pub use models::{
    CatalogStatus, Category, EmbeddedItem, GenerateReport, InventoryItem, LoadReport, SearchHit,
};
pub use mongodb::{DEFAULT_COLLECTION, MongoInventoryRepository};
pub use repository::InventoryRepository;
pub use service::InventoryService;
