//! MongoDB implementation of InventoryRepository

use async_trait::async_trait;
use domain_vector::VectorSearchQuery;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{self, Bson, Document, doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::InventoryResult;
use crate::models::{InventoryItem, SearchHit};
use crate::repository::InventoryRepository;

pub const DEFAULT_COLLECTION: &str = "inventory";

/// MongoDB implementation of the InventoryRepository
pub struct MongoInventoryRepository {
    db: Database,
    collection: Collection<InventoryItem>,
}

impl MongoInventoryRepository {
    /// Create a repository over the `inventory` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoInventoryRepository::new(client.database("homedepot"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a new MongoInventoryRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<InventoryItem>(collection_name);
        Self { db, collection }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// `$vectorSearch` followed by a projection down to description + score
    fn build_search_pipeline(query: &VectorSearchQuery) -> Vec<Document> {
        vec![
            doc! {
                "$vectorSearch": {
                    "index": &query.index,
                    "path": &query.path,
                    "queryVector": to_bson_vector(&query.query_vector),
                    "numCandidates": i64::from(query.num_candidates),
                    "limit": i64::from(query.limit),
                }
            },
            doc! {
                "$project": {
                    "_id": 0,
                    "description": 1,
                    "score": { "$meta": "vectorSearchScore" },
                }
            },
        ]
    }
}

fn to_bson_vector(values: &[f32]) -> Bson {
    Bson::Array(values.iter().map(|v| Bson::Double(f64::from(*v))).collect())
}

#[async_trait]
impl InventoryRepository for MongoInventoryRepository {
    #[instrument(skip(self, items), fields(collection = %self.collection_name(), count = items.len()))]
    async fn replace_all(&self, items: Vec<InventoryItem>) -> InventoryResult<u64> {
        // Dropping through the database handle also removes indexes created on the old data
        self.db
            .collection::<Document>(self.collection_name())
            .drop()
            .await?;

        if items.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(&items).await?;
        let inserted = result.inserted_ids.len() as u64;

        tracing::info!(inserted, "Inventory collection reseeded");
        Ok(inserted)
    }

    #[instrument(skip(self), fields(collection = %self.collection_name()))]
    async fn list_all(&self) -> InventoryResult<Vec<InventoryItem>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "item_id": 1 })
            .await?;
        let items: Vec<InventoryItem> = cursor.try_collect().await?;
        Ok(items)
    }

    #[instrument(skip(self, embedding), fields(dimension = embedding.len()))]
    async fn set_embedding(
        &self,
        id: ObjectId,
        embedding: Vec<f32>,
        model_key: String,
    ) -> InventoryResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "embeddings": to_bson_vector(&embedding),
                        "embedding_model": model_key,
                    }
                },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    #[instrument(skip(self, query), fields(index = %query.index, limit = query.limit))]
    async fn vector_search(&self, query: VectorSearchQuery) -> InventoryResult<Vec<SearchHit>> {
        let pipeline = Self::build_search_pipeline(&query);
        let cursor = self.collection.aggregate(pipeline).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        let hits = documents
            .into_iter()
            .map(bson::from_document::<SearchHit>)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(hits = hits.len(), "Vector search complete");
        Ok(hits)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> InventoryResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    #[instrument(skip(self))]
    async fn count_embedded(&self) -> InventoryResult<u64> {
        let filter = doc! { "embeddings": { "$exists": true } };
        Ok(self.collection.count_documents(filter).await?)
    }

    #[instrument(skip(self))]
    async fn embedding_models(&self) -> InventoryResult<Vec<String>> {
        let values = self
            .collection
            .distinct("embedding_model", doc! { "embeddings": { "$exists": true } })
            .await?;

        let mut models: Vec<String> = values
            .into_iter()
            .filter_map(|value| match value {
                Bson::String(key) => Some(key),
                _ => None,
            })
            .collect();
        models.sort();
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_vector::SearchOptions;

    #[test]
    fn test_search_pipeline_stages() {
        let query = VectorSearchQuery::new(vec![0.5, -0.25], &SearchOptions::default());
        let pipeline = MongoInventoryRepository::build_search_pipeline(&query);

        assert_eq!(pipeline.len(), 2);
        assert!(pipeline[0].contains_key("$vectorSearch"));
        assert!(pipeline[1].contains_key("$project"));
    }

    #[test]
    fn test_search_pipeline_vector_stage() {
        let options = SearchOptions {
            index: "catalog_index".to_string(),
            num_candidates: 100,
            limit: 5,
            ..Default::default()
        };
        let query = VectorSearchQuery::new(vec![0.5, -0.25], &options);
        let pipeline = MongoInventoryRepository::build_search_pipeline(&query);
        let stage = pipeline[0].get_document("$vectorSearch").unwrap();

        assert_eq!(stage.get_str("index").unwrap(), "catalog_index");
        assert_eq!(stage.get_str("path").unwrap(), "embeddings");
        assert_eq!(stage.get_i64("numCandidates").unwrap(), 100);
        assert_eq!(stage.get_i64("limit").unwrap(), 5);
        assert_eq!(
            stage.get_array("queryVector").unwrap(),
            &vec![Bson::Double(0.5), Bson::Double(-0.25)]
        );
    }

    #[test]
    fn test_search_pipeline_projection() {
        let query = VectorSearchQuery::new(vec![1.0], &SearchOptions::default());
        let pipeline = MongoInventoryRepository::build_search_pipeline(&query);
        let projection = pipeline[1].get_document("$project").unwrap();

        assert_eq!(projection.get_i32("_id").unwrap(), 0);
        assert_eq!(projection.get_i32("description").unwrap(), 1);
        assert_eq!(
            projection.get_document("score").unwrap(),
            &doc! { "$meta": "vectorSearchScore" }
        );
    }

    #[test]
    fn test_to_bson_vector_widens_to_double() {
        assert_eq!(
            to_bson_vector(&[0.125, 2.0]),
            Bson::Array(vec![Bson::Double(0.125), Bson::Double(2.0)])
        );
    }
}
