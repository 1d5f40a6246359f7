//! Chunk sizers: how many tokens a candidate chunk costs.

use crate::error::{ChunkerError, Result};
use crate::model::{InitStrategy, ModelSpec, TokenCounter};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use text_splitter::ChunkSizer;
use tiktoken_rs::CoreBPE;
use tokenizers::Tokenizer;

/// Measures chunks with whichever tokenizer the model resolved to
pub enum TokenSizer {
    HuggingFace(Box<Tokenizer>),
    Tiktoken(CoreBPE),
    Callback(TokenCounter),
}

impl TokenSizer {
    /// Build the sizer for `model`, following [`ModelSpec::strategy`].
    ///
    /// Loading failures from `tokenizers` or `tiktoken-rs` are returned
    /// as-is.
    pub fn from_model(model: ModelSpec) -> Result<Self> {
        let strategy = model.strategy();
        match (strategy, model) {
            (_, ModelSpec::Tokenizer(tokenizer)) => Ok(TokenSizer::HuggingFace(tokenizer)),
            (_, ModelSpec::Callback(counter)) => Ok(TokenSizer::Callback(counter)),
            (_, ModelSpec::Path(path)) => Self::from_tokenizer_file(&path),
            (InitStrategy::InlineJson, ModelSpec::Name(json)) => Self::from_tokenizer_json(&json),
            (InitStrategy::TokenizerFile, ModelSpec::Name(path)) => {
                Self::from_tokenizer_file(Path::new(&path))
            }
            (_, ModelSpec::Name(name)) => Self::from_tiktoken_model(&name),
        }
    }

    pub fn from_tokenizer_json(json: &str) -> Result<Self> {
        let tokenizer = Tokenizer::from_str(json).map_err(ChunkerError::Tokenizer)?;
        Ok(TokenSizer::HuggingFace(Box::new(tokenizer)))
    }

    pub fn from_tokenizer_file(path: &Path) -> Result<Self> {
        let tokenizer = Tokenizer::from_file(path).map_err(ChunkerError::Tokenizer)?;
        Ok(TokenSizer::HuggingFace(Box::new(tokenizer)))
    }

    pub fn from_tiktoken_model(model: &str) -> Result<Self> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(ChunkerError::Tiktoken)?;
        Ok(TokenSizer::Tiktoken(bpe))
    }
}

/// Tokenizer sizing goes through text-splitter's own implementations, which
/// leave out padding and count tokens lost to truncation.
impl ChunkSizer for TokenSizer {
    fn size(&self, chunk: &str) -> usize {
        match self {
            TokenSizer::HuggingFace(tokenizer) => {
                <Tokenizer as ChunkSizer>::size(tokenizer, chunk)
            }
            TokenSizer::Tiktoken(bpe) => <CoreBPE as ChunkSizer>::size(bpe, chunk),
            TokenSizer::Callback(counter) => counter(chunk),
        }
    }
}

impl fmt::Debug for TokenSizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TokenSizer::HuggingFace(_) => "HuggingFace",
            TokenSizer::Tiktoken(_) => "Tiktoken",
            TokenSizer::Callback(_) => "Callback",
        };
        write!(f, "TokenSizer::{}", kind)
    }
}
