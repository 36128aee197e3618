use domain_vector::VectorIndexDefinition;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Catalog department
///
/// Rows written by other tools may carry departments outside the seed catalog;
/// those round-trip unchanged through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Category {
    Tools,
    Paint,
    Gardening,
    Lighting,
    Flooring,
    Furniture,
    Electronics,
    #[serde(rename = "Home Decor")]
    #[strum(serialize = "Home Decor")]
    HomeDecor,
    Bedding,
    Appliances,
    Beauty,
    Kitchen,
    Garden,
    Outdoors,
    Fitness,
    #[serde(untagged)]
    #[strum(default)]
    Other(String),
}

/// Inventory record as stored in the `inventory` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Store-assigned document id (absent until inserted)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Catalog identifier
    pub item_id: i32,
    pub description: String,
    pub category: Category,
    pub price: f64,
    /// Sentence embedding of `description`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeddings: Option<Vec<f32>>,
    /// Key of the model that produced `embeddings`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
}

impl InventoryItem {
    pub fn new(item_id: i32, description: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id: None,
            item_id,
            description: description.into(),
            category,
            price,
            embeddings: None,
            embedding_model: None,
        }
    }

    pub fn has_embedding(&self) -> bool {
        self.embeddings.is_some()
    }
}

/// One `$vectorSearch` result after projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub description: String,
    pub score: f64,
}

/// Outcome of reseeding the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub inserted: u64,
}

/// An item whose embedding was written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedItem {
    pub id: ObjectId,
    pub item_id: i32,
    pub dimension: usize,
}

/// Outcome of an embedding run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateReport {
    pub model: String,
    pub embedded: Vec<EmbeddedItem>,
    /// Items whose document disappeared between listing and update
    pub skipped: Vec<i32>,
    /// Index definition matching the vectors just written
    pub index_definition: VectorIndexDefinition,
}

/// Embedding coverage of the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStatus {
    pub total: u64,
    pub embedded: u64,
    pub embedding_models: Vec<String>,
}
