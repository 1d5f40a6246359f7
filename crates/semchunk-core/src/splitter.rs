//! The three splitter families and how each is constructed.

use crate::error::Result;
use crate::sizer::TokenSizer;
use semchunk_config::{ChunkingType, MaxTokens};
use std::fmt;
use text_splitter::{
    ChunkCapacity, ChunkConfig, CodeSplitter, MarkdownSplitter, TextSplitter,
};
use tree_sitter_language::LanguageFn;

/// Splitter family selected by the chunking type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitterFamily {
    Text,
    Markdown,
    Code,
}

impl From<ChunkingType> for SplitterFamily {
    fn from(chunking_type: ChunkingType) -> Self {
        match chunking_type {
            ChunkingType::Text => SplitterFamily::Text,
            ChunkingType::Markdown => SplitterFamily::Markdown,
            ChunkingType::Code => SplitterFamily::Code,
        }
    }
}

impl fmt::Display for SplitterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SplitterFamily::Text => "text",
            SplitterFamily::Markdown => "markdown",
            SplitterFamily::Code => "code",
        };
        f.write_str(name)
    }
}

/// Sizing knobs shared by every family
#[derive(Debug, Clone, Copy)]
pub struct SplitterOptions {
    pub max_tokens: MaxTokens,
    pub overlap: usize,
    pub trim: bool,
}

/// Convert a token budget to the engine's capacity.
///
/// A range becomes a desired size with a hard maximum.
pub fn capacity(max_tokens: MaxTokens) -> Result<ChunkCapacity> {
    let capacity = match max_tokens {
        MaxTokens::Tokens(max) => ChunkCapacity::new(max),
        MaxTokens::Range(min, max) => ChunkCapacity::new(min).with_max(max)?,
    };
    Ok(capacity)
}

/// A configured splitter from one of the three families
pub enum Splitter {
    Text(TextSplitter<TokenSizer>),
    Markdown(MarkdownSplitter<TokenSizer>),
    Code(CodeSplitter<TokenSizer>),
}

impl Splitter {
    /// Build a splitter. `grammar` is only consulted for the code family.
    ///
    /// Capacity, overlap and grammar errors come straight from the engine.
    pub fn build(
        family: SplitterFamily,
        sizer: TokenSizer,
        options: SplitterOptions,
        grammar: Option<LanguageFn>,
    ) -> Result<Self> {
        let config = ChunkConfig::new(capacity(options.max_tokens)?)
            .with_sizer(sizer)
            .with_overlap(options.overlap)?
            .with_trim(options.trim);

        let splitter = match (family, grammar) {
            (SplitterFamily::Text, _) => Splitter::Text(TextSplitter::new(config)),
            (SplitterFamily::Markdown, _) => Splitter::Markdown(MarkdownSplitter::new(config)),
            (SplitterFamily::Code, Some(grammar)) => {
                Splitter::Code(CodeSplitter::new(grammar, config)?)
            }
            (SplitterFamily::Code, None) => {
                return Err(crate::ChunkerError::invalid_configuration(
                    "a grammar binding is required for code chunking",
                ))
            }
        };
        Ok(splitter)
    }

    pub fn family(&self) -> SplitterFamily {
        match self {
            Splitter::Text(_) => SplitterFamily::Text,
            Splitter::Markdown(_) => SplitterFamily::Markdown,
            Splitter::Code(_) => SplitterFamily::Code,
        }
    }

    pub fn chunks<'text>(&self, text: &'text str) -> Vec<&'text str> {
        match self {
            Splitter::Text(splitter) => splitter.chunks(text).collect(),
            Splitter::Markdown(splitter) => splitter.chunks(text).collect(),
            Splitter::Code(splitter) => splitter.chunks(text).collect(),
        }
    }

    /// Chunks with their starting byte offset in `text`
    pub fn chunk_indices<'text>(&self, text: &'text str) -> Vec<(usize, &'text str)> {
        match self {
            Splitter::Text(splitter) => splitter.chunk_indices(text).collect(),
            Splitter::Markdown(splitter) => splitter.chunk_indices(text).collect(),
            Splitter::Code(splitter) => splitter.chunk_indices(text).collect(),
        }
    }
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Splitter").field(&self.family()).finish()
    }
}
