use async_trait::async_trait;
use core_config::{env_or_default, env_parse};
use fastembed::{InitOptions, TextEmbedding};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::EmbeddingProvider;
use crate::error::{VectorError, VectorResult};
use crate::models::EmbeddingModel;

/// Local ONNX embedding configuration
#[derive(Debug, Clone)]
pub struct FastEmbedConfig {
    /// Where downloaded model files are cached (fastembed's default when `None`)
    pub cache_dir: Option<PathBuf>,
    /// Render a progress bar while model files download
    pub show_download_progress: bool,
}

impl Default for FastEmbedConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            show_download_progress: true,
        }
    }
}

impl FastEmbedConfig {
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(cache_dir.into());
        self
    }

    pub fn with_download_progress(mut self, show: bool) -> Self {
        self.show_download_progress = show;
        self
    }

    pub fn from_env() -> VectorResult<Self> {
        let cache_dir = env_or_default("EMBEDDING_CACHE_DIR", "");

        Ok(Self {
            cache_dir: (!cache_dir.is_empty()).then(|| PathBuf::from(cache_dir)),
            show_download_progress: env_parse("EMBEDDING_SHOW_PROGRESS", true)?,
        })
    }

    fn init_options(&self, model: EmbeddingModel) -> InitOptions {
        let options = InitOptions::new(fastembed_model(model))
            .with_show_download_progress(self.show_download_progress);
        match &self.cache_dir {
            Some(dir) => options.with_cache_dir(dir.clone()),
            None => options,
        }
    }
}

fn fastembed_model(model: EmbeddingModel) -> fastembed::EmbeddingModel {
    match model {
        EmbeddingModel::MiniLm => fastembed::EmbeddingModel::AllMiniLML6V2,
        EmbeddingModel::Mpnet => fastembed::EmbeddingModel::ParaphraseMLMpnetBaseV2,
        EmbeddingModel::BgeLarge => fastembed::EmbeddingModel::BGELargeENV15,
        EmbeddingModel::BgeBase => fastembed::EmbeddingModel::BGEBaseENV15,
    }
}

/// Sentence embeddings computed in-process with fastembed (ONNX runtime)
///
/// Model download, session creation and inference are all CPU/IO bound and run
/// on tokio's blocking pool.
pub struct FastEmbedProvider {
    model: EmbeddingModel,
    engine: Arc<TextEmbedding>,
}

impl FastEmbedProvider {
    /// Download (first run) and initialise `model`
    #[instrument(skip(config), fields(model = %model, weights = model.model_name()))]
    pub async fn load(model: EmbeddingModel, config: &FastEmbedConfig) -> VectorResult<Self> {
        let options = config.init_options(model);

        let engine = tokio::task::spawn_blocking(move || TextEmbedding::try_new(options))
            .await?
            .map_err(|e| {
                VectorError::Embedding(format!("Failed to load {}: {}", model.model_name(), e))
            })?;

        info!(dimension = model.dimension(), "Embedding model ready");
        Ok(Self {
            model,
            engine: Arc::new(engine),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    fn model(&self) -> EmbeddingModel {
        self.model
    }

    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>> {
        let results = self.embed_batch(&[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| VectorError::Embedding("No embedding returned".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let engine = Arc::clone(&self.engine);
        let inputs = texts.to_vec();
        debug!(count = inputs.len(), model = %self.model, "Embedding texts");

        let embeddings = tokio::task::spawn_blocking(move || engine.embed(inputs, None))
            .await?
            .map_err(|e| VectorError::Embedding(e.to_string()))?;

        if embeddings.len() != texts.len() {
            return Err(VectorError::Embedding(format!(
                "Expected {} embeddings, model returned {}",
                texts.len(),
                embeddings.len()
            )));
        }

        Ok(embeddings)
    }
}
