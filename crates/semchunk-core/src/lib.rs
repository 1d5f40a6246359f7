//! Resolve a ready-to-use chunker from a model and a chunking configuration.
//!
//! The model can be a pre-built HuggingFace tokenizer, a token-counting
//! callback, inline tokenizer JSON, a tokenizer file, or a named tiktoken
//! model. The configuration picks the splitter family (plain text, markdown,
//! or code) and its token budget.
//!
//! ```no_run
//! use semchunk_core::{get_chunker, ChunkerConfig, SemanticChunker};
//!
//! let chunker = get_chunker("gpt-3.5-turbo", &ChunkerConfig::text(128).with_overlap(8))?;
//! for chunk in chunker.chunks("Some long document...") {
//!     println!("{chunk}");
//! }
//! # Ok::<(), semchunk_core::ChunkerError>(())
//! ```

pub mod chunker;
pub mod error;
pub mod grammar;
pub mod model;
pub mod resolver;
pub mod sizer;
pub mod splitter;

pub use chunker::{Chunker, SemanticChunker};
pub use error::{ChunkerError, Result};
pub use grammar::{default_registry, GrammarError, GrammarRegistry};
pub use model::{InitStrategy, ModelSpec, TokenCounter};
pub use resolver::{get_chunker, ChunkerResolver};
pub use splitter::SplitterFamily;

pub use semchunk_config::{ChunkerConfig, ChunkingType, CodeLanguage, Config, MaxTokens};
