//! Chunker configuration

use super::language::CodeLanguage;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content being chunked, which selects the splitter family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkingType {
    /// Plain prose
    #[default]
    Text,
    /// Markdown, split along headings, blocks and inline structure
    Markdown,
    /// Source code, split along syntax tree boundaries
    Code,
}

impl ChunkingType {
    pub const ALL: [ChunkingType; 3] = [ChunkingType::Text, ChunkingType::Markdown, ChunkingType::Code];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkingType::Text => "text",
            ChunkingType::Markdown => "markdown",
            ChunkingType::Code => "code",
        }
    }
}

impl fmt::Display for ChunkingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkingType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ChunkingType::Text),
            "markdown" => Ok(ChunkingType::Markdown),
            "code" => Ok(ChunkingType::Code),
            _ => Err(ConfigError::invalid_enum(
                "chunker.type",
                s,
                &["text", "markdown", "code"],
            )),
        }
    }
}

/// Token budget for a single chunk.
///
/// A range is a soft/hard bound: chunks grow until they reach `min` and
/// never exceed `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxTokens {
    Tokens(usize),
    Range(usize, usize),
}

impl MaxTokens {
    /// Upper bound a chunk must never exceed
    pub fn max(&self) -> usize {
        match *self {
            MaxTokens::Tokens(n) => n,
            MaxTokens::Range(_, max) => max,
        }
    }
}

impl Default for MaxTokens {
    fn default() -> Self {
        MaxTokens::Tokens(512)
    }
}

impl From<usize> for MaxTokens {
    fn from(n: usize) -> Self {
        MaxTokens::Tokens(n)
    }
}

impl From<(usize, usize)> for MaxTokens {
    fn from((min, max): (usize, usize)) -> Self {
        MaxTokens::Range(min, max)
    }
}

impl fmt::Display for MaxTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxTokens::Tokens(n) => write!(f, "{}", n),
            MaxTokens::Range(min, max) => write!(f, "{}..{}", min, max),
        }
    }
}

/// Parses `512` or `256..512`
impl FromStr for MaxTokens {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::ValidationError {
            field: "chunker.max_tokens".to_string(),
            message: format!("expected an integer or a `min..max` range, got '{}'", s),
        };
        let s = s.trim();

        match s.split_once("..") {
            Some((min, max)) => {
                let min = min.trim().parse().map_err(|_| invalid())?;
                let max = max.trim().parse().map_err(|_| invalid())?;
                Ok(MaxTokens::Range(min, max))
            }
            None => s.parse().map(MaxTokens::Tokens).map_err(|_| invalid()),
        }
    }
}

/// How to split content: splitter family, language, and sizing knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Splitter family
    #[serde(default, rename = "type")]
    pub chunking_type: ChunkingType,

    /// Source language, required when `type = "code"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeLanguage>,

    /// Maximum tokens per chunk, or a `[min, max]` pair
    #[serde(default)]
    pub max_tokens: MaxTokens,

    /// Tokens shared between neighbouring chunks
    #[serde(default)]
    pub overlap: usize,

    /// Strip leading and trailing whitespace from every chunk
    #[serde(default = "default_trim")]
    pub trim: bool,
}

impl ChunkerConfig {
    pub fn new(chunking_type: ChunkingType, max_tokens: impl Into<MaxTokens>) -> Self {
        Self {
            chunking_type,
            language: None,
            max_tokens: max_tokens.into(),
            overlap: 0,
            trim: default_trim(),
        }
    }

    pub fn text(max_tokens: impl Into<MaxTokens>) -> Self {
        Self::new(ChunkingType::Text, max_tokens)
    }

    pub fn markdown(max_tokens: impl Into<MaxTokens>) -> Self {
        Self::new(ChunkingType::Markdown, max_tokens)
    }

    pub fn code(language: CodeLanguage, max_tokens: impl Into<MaxTokens>) -> Self {
        Self::new(ChunkingType::Code, max_tokens).with_language(language)
    }

    pub fn with_language(mut self, language: CodeLanguage) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::text(MaxTokens::default())
    }
}

impl crate::validation::Validate for ChunkerConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{validate_ordered, validate_positive};

        match self.max_tokens {
            MaxTokens::Tokens(n) => validate_positive("chunker.max_tokens", n, 0)?,
            MaxTokens::Range(min, max) => {
                validate_positive("chunker.max_tokens", min, 0)?;
                validate_ordered("chunker.max_tokens", min, max)?;
            }
        }

        if self.chunking_type == ChunkingType::Code && self.language.is_none() {
            return Err(ConfigError::ValidationError {
                field: "chunker.language".to_string(),
                message: "language must be provided for code chunking".to_string(),
            });
        }

        Ok(())
    }
}

fn default_trim() -> bool {
    true
}
