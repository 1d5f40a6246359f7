//! Configuration type definitions
//!
//! Each type is self-contained with validation and sensible defaults.

pub mod chunking;
pub mod language;
pub mod model;

pub use chunking::{ChunkerConfig, ChunkingType, MaxTokens};
pub use language::CodeLanguage;
pub use model::ModelConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration: the model used to measure chunks plus how to
/// split content with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// String-form model (tokenizer model name, inline tokenizer JSON, or a
    /// `.json` tokenizer path)
    #[serde(default)]
    pub model: ModelConfig,

    /// Splitter selection and sizing
    #[serde(default)]
    pub chunker: ChunkerConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.model.validate()?;
        self.chunker.validate()?;
        Ok(())
    }
}
