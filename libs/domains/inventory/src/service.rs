//! Inventory Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use domain_vector::{
    DistanceMetric, EmbeddingProvider, SearchOptions, VectorIndexDefinition, VectorSearchQuery,
    check_dimension,
};

use crate::catalog::seed_catalog;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{CatalogStatus, EmbeddedItem, GenerateReport, LoadReport, SearchHit};
use crate::repository::InventoryRepository;

/// Inventory service orchestrating the catalog, the embedding provider and
/// the repository.
pub struct InventoryService<R: InventoryRepository> {
    repository: Arc<R>,
}

impl<R: InventoryRepository> InventoryService<R> {
    /// Create a new InventoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Replace the collection contents with the seed catalog
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) -> InventoryResult<LoadReport> {
        let inserted = self.repository.replace_all(seed_catalog()).await?;
        Ok(LoadReport { inserted })
    }

    /// Embed every stored description and write the vectors back
    #[instrument(skip(self, provider), fields(model = %provider.model()))]
    pub async fn generate_embeddings(
        &self,
        provider: &dyn EmbeddingProvider,
        similarity: DistanceMetric,
    ) -> InventoryResult<GenerateReport> {
        let model = provider.model();
        let index_definition =
            VectorIndexDefinition::for_model(model, domain_vector::DEFAULT_VECTOR_PATH, similarity);

        let items = self.repository.list_all().await?;
        if items.is_empty() {
            tracing::warn!("Inventory collection is empty, nothing to embed");
            return Ok(GenerateReport {
                model: model.to_string(),
                embedded: Vec::new(),
                skipped: Vec::new(),
                index_definition,
            });
        }

        let descriptions: Vec<String> = items.iter().map(|i| i.description.clone()).collect();
        let vectors = provider.embed_batch(&descriptions).await?;
        if vectors.len() != items.len() {
            return Err(InventoryError::Internal(format!(
                "Provider returned {} embeddings for {} items",
                vectors.len(),
                items.len()
            )));
        }

        // Nothing is written unless every vector fits the model
        vectors
            .iter()
            .try_for_each(|vector| check_dimension(model, vector))?;

        let mut embedded = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();

        for (item, vector) in items.into_iter().zip(vectors) {
            let Some(id) = item.id else {
                skipped.push(item.item_id);
                continue;
            };

            let dimension = vector.len();
            if self
                .repository
                .set_embedding(id, vector, model.to_string())
                .await?
            {
                embedded.push(EmbeddedItem {
                    id,
                    item_id: item.item_id,
                    dimension,
                });
            } else {
                tracing::warn!(item_id = item.item_id, "Item vanished before its embedding was stored");
                skipped.push(item.item_id);
            }
        }

        tracing::info!(
            embedded = embedded.len(),
            skipped = skipped.len(),
            "Embedding run complete"
        );

        Ok(GenerateReport {
            model: model.to_string(),
            embedded,
            skipped,
            index_definition,
        })
    }

    /// Embed `text` and return the nearest catalog descriptions
    #[instrument(skip(self, provider, options), fields(model = %provider.model()))]
    pub async fn search(
        &self,
        provider: &dyn EmbeddingProvider,
        text: &str,
        options: &SearchOptions,
    ) -> InventoryResult<Vec<SearchHit>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InventoryError::Validation(
                "Search query must not be empty".to_string(),
            ));
        }

        let model = provider.model();
        let vector = provider.embed(text).await?;
        check_dimension(model, &vector)?;

        let query = VectorSearchQuery::new(vector, options);
        query.check()?;

        let stored = self.repository.embedding_models().await?;
        let key = model.to_string();
        if !stored.is_empty() && !stored.contains(&key) {
            tracing::warn!(
                query_model = %key,
                stored_models = ?stored,
                "Query model differs from the model used for stored embeddings"
            );
        }

        self.repository.vector_search(query).await
    }

    /// Record count and embedding coverage of the collection
    #[instrument(skip(self))]
    pub async fn status(&self) -> InventoryResult<CatalogStatus> {
        Ok(CatalogStatus {
            total: self.repository.count().await?,
            embedded: self.repository.count_embedded().await?,
            embedding_models: self.repository.embedding_models().await?,
        })
    }
}

impl<R: InventoryRepository> Clone for InventoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
