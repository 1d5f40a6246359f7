//! Error types for chunker resolution

use crate::grammar::GrammarError;
use text_splitter::{ChunkCapacityError, ChunkConfigError, CodeSplitterError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors raised while resolving a chunker.
///
/// `InvalidConfiguration` and `MissingDependency` originate here. Every
/// other variant is a failure of the tokenizer, grammar or splitting
/// engine, forwarded unchanged.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// The caller supplied an inconsistent combination of settings
    #[error("Invalid chunker configuration: {message}")]
    InvalidConfiguration { message: String },

    /// An optional collaborator required for the requested feature is absent
    #[error("Missing dependency: {dependency} is not available\n  Hint: {hint}")]
    MissingDependency { dependency: String, hint: String },

    /// Loading a HuggingFace tokenizer from JSON or a file failed
    #[error(transparent)]
    Tokenizer(tokenizers::Error),

    /// The named model is unknown to tiktoken
    #[error(transparent)]
    Tiktoken(anyhow::Error),

    /// The grammar registry has no binding for the language
    #[error(transparent)]
    Grammar(GrammarError),

    #[error(transparent)]
    Capacity(#[from] ChunkCapacityError),

    #[error(transparent)]
    Overlap(#[from] ChunkConfigError),

    #[error(transparent)]
    CodeSplitter(#[from] CodeSplitterError),
}

impl ChunkerError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

impl From<GrammarError> for ChunkerError {
    fn from(err: GrammarError) -> Self {
        match err {
            GrammarError::Unavailable { dependency } => Self::MissingDependency {
                hint: format!(
                    "enable the `{}` feature of semchunk-core to use code chunking",
                    dependency
                ),
                dependency,
            },
            other => Self::Grammar(other),
        }
    }
}
