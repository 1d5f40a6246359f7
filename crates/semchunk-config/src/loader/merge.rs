//! Configuration merging logic
//!
//! Every source (file, environment, explicit) is read into a
//! [`ConfigOverlay`] whose fields are `Some` only when that source set
//! them. Layering applies overlays in order, so a later source can set a
//! field back to its default value.

use crate::{types::*, Config};
use serde::Deserialize;

/// Fields of a [`Config`] that one source explicitly set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverlay {
    #[serde(default)]
    pub model: ModelOverlay,

    #[serde(default)]
    pub chunker: ChunkerOverlay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelOverlay {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChunkerOverlay {
    #[serde(rename = "type")]
    pub chunking_type: Option<ChunkingType>,
    pub language: Option<CodeLanguage>,
    pub max_tokens: Option<MaxTokens>,
    pub overlap: Option<usize>,
    pub trim: Option<bool>,
}

/// A complete config sets every field
impl From<Config> for ConfigOverlay {
    fn from(config: Config) -> Self {
        ConfigOverlay {
            model: ModelOverlay {
                name: Some(config.model.name),
            },
            chunker: ChunkerOverlay {
                chunking_type: Some(config.chunker.chunking_type),
                language: config.chunker.language,
                max_tokens: Some(config.chunker.max_tokens),
                overlap: Some(config.chunker.overlap),
                trim: Some(config.chunker.trim),
            },
        }
    }
}

/// Apply `overlay` on top of `base`; every field the overlay set wins
pub fn merge(base: Config, overlay: ConfigOverlay) -> Config {
    Config {
        model: merge_model(base.model, overlay.model),
        chunker: merge_chunker(base.chunker, overlay.chunker),
    }
}

fn merge_model(base: ModelConfig, overlay: ModelOverlay) -> ModelConfig {
    ModelConfig {
        name: overlay.name.unwrap_or(base.name),
    }
}

fn merge_chunker(base: ChunkerConfig, overlay: ChunkerOverlay) -> ChunkerConfig {
    ChunkerConfig {
        chunking_type: overlay.chunking_type.unwrap_or(base.chunking_type),
        language: overlay.language.or(base.language),
        max_tokens: overlay.max_tokens.unwrap_or(base.max_tokens),
        overlap: overlay.overlap.unwrap_or(base.overlap),
        trim: overlay.trim.unwrap_or(base.trim),
    }
}
