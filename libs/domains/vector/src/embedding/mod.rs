mod onnx;
mod provider;

pub use onnx::{FastEmbedConfig, FastEmbedProvider};
#[cfg(any(test, feature = "mocks"))]
pub use provider::MockEmbeddingProvider;
pub use provider::EmbeddingProvider;
