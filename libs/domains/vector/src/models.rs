use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use validator::Validate;

use crate::error::{VectorError, VectorResult};

/// Document field holding the embedding vector
pub const DEFAULT_VECTOR_PATH: &str = "embeddings";
/// Name of the Atlas Vector Search index queried by `$vectorSearch`
pub const DEFAULT_INDEX_NAME: &str = "vector_index";
pub const DEFAULT_NUM_CANDIDATES: u32 = 50;
pub const DEFAULT_LIMIT: u32 = 3;

/// Pretrained sentence-embedding models selectable at run time
///
/// The string form (`minilm`, `mpnet`, ...) is the CLI key and is also what gets
/// stored next to each vector as `embedding_model`. The older keys
/// `distilbert`, `roberta` and `msmarco` parse to the model of the same
/// dimensionality.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EmbeddingModel {
    /// all-MiniLM-L6-v2 (384 dimensions)
    #[default]
    #[serde(rename = "minilm")]
    #[strum(to_string = "minilm")]
    #[cfg_attr(feature = "clap", value(name = "minilm"))]
    MiniLm,
    /// paraphrase-multilingual-mpnet-base-v2 (768 dimensions)
    #[serde(rename = "mpnet", alias = "distilbert")]
    #[strum(to_string = "mpnet", serialize = "distilbert")]
    #[cfg_attr(feature = "clap", value(name = "mpnet", alias = "distilbert"))]
    Mpnet,
    /// bge-large-en-v1.5 (1024 dimensions)
    #[serde(rename = "bge-large", alias = "roberta")]
    #[strum(to_string = "bge-large", serialize = "roberta")]
    #[cfg_attr(feature = "clap", value(name = "bge-large", alias = "roberta"))]
    BgeLarge,
    /// bge-base-en-v1.5 (768 dimensions)
    #[serde(rename = "bge-base", alias = "msmarco")]
    #[strum(to_string = "bge-base", serialize = "msmarco")]
    #[cfg_attr(feature = "clap", value(name = "bge-base", alias = "msmarco"))]
    BgeBase,
}

impl EmbeddingModel {
    /// Output vector length
    pub fn dimension(&self) -> u32 {
        match self {
            EmbeddingModel::MiniLm => 384,
            EmbeddingModel::Mpnet => 768,
            EmbeddingModel::BgeLarge => 1024,
            EmbeddingModel::BgeBase => 768,
        }
    }

    /// Hugging Face identifier of the pretrained weights
    pub fn model_name(&self) -> &'static str {
        match self {
            EmbeddingModel::MiniLm => "sentence-transformers/all-MiniLM-L6-v2",
            EmbeddingModel::Mpnet => "sentence-transformers/paraphrase-multilingual-mpnet-base-v2",
            EmbeddingModel::BgeLarge => "BAAI/bge-large-en-v1.5",
            EmbeddingModel::BgeBase => "BAAI/bge-base-en-v1.5",
        }
    }

    /// All selectable models, in declaration order
    pub fn all() -> Vec<EmbeddingModel> {
        EmbeddingModel::iter().collect()
    }
}

/// Similarity function of the vector index, spelled the way Atlas expects it
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DistanceMetric {
    #[default]
    Cosine,
    Euclidean,
    #[cfg_attr(feature = "clap", value(name = "dot-product", alias = "dotProduct"))]
    DotProduct,
}

/// One vector field of an Atlas Vector Search index definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorIndexField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub path: String,
    pub num_dimensions: u32,
    pub similarity: DistanceMetric,
}

/// JSON body used to create the vector search index on the collection
///
/// ```json
/// { "fields": [ { "type": "vector", "path": "embeddings", "numDimensions": 384, "similarity": "cosine" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorIndexDefinition {
    pub fields: Vec<VectorIndexField>,
}

impl VectorIndexDefinition {
    /// Index over `path` sized for `model`
    pub fn for_model(model: EmbeddingModel, path: &str, similarity: DistanceMetric) -> Self {
        Self {
            fields: vec![VectorIndexField {
                field_type: "vector".to_string(),
                path: path.to_string(),
                num_dimensions: model.dimension(),
                similarity,
            }],
        }
    }

    pub fn to_pretty_json(&self) -> VectorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tunables of a vector search, independent of the query vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub index: String,
    pub path: String,
    pub num_candidates: u32,
    pub limit: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX_NAME.to_string(),
            path: DEFAULT_VECTOR_PATH.to_string(),
            num_candidates: DEFAULT_NUM_CANDIDATES,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Parameters of a `$vectorSearch` stage
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VectorSearchQuery {
    #[validate(length(min = 1))]
    pub index: String,
    #[validate(length(min = 1))]
    pub path: String,
    #[validate(length(min = 1))]
    pub query_vector: Vec<f32>,
    #[validate(range(min = 1, max = 10000))]
    pub num_candidates: u32,
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

impl VectorSearchQuery {
    pub fn new(query_vector: Vec<f32>, options: &SearchOptions) -> Self {
        Self {
            index: options.index.clone(),
            path: options.path.clone(),
            query_vector,
            num_candidates: options.num_candidates,
            limit: options.limit,
        }
    }

    /// Field-level validation plus `num_candidates >= limit`
    pub fn check(&self) -> VectorResult<()> {
        self.validate()?;
        if self.num_candidates < self.limit {
            return Err(VectorError::Validation(format!(
                "num_candidates ({}) must be at least limit ({})",
                self.num_candidates, self.limit
            )));
        }
        Ok(())
    }
}

/// Fail unless `vector` has exactly the length `model` declares
pub fn check_dimension(model: EmbeddingModel, vector: &[f32]) -> VectorResult<()> {
    let expected = model.dimension();
    if vector.len() != expected as usize {
        return Err(VectorError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}
