//! Configuration management for semchunk
//!
//! Describes *how* a chunker should be resolved: which splitter family,
//! which source language for code, the token budget, overlap and trimming,
//! plus the string-form model used to measure chunks.
//!
//! - Multiple formats (YAML, TOML, JSON)
//! - Validation with helpful error messages
//! - Layered loading (defaults < file < environment < explicit)
//!
//! # Example
//!
//! ```no_run
//! use semchunk_config::{ChunkerConfig, CodeLanguage, Config};
//!
//! // Load from default location (.semchunk.{toml,yml,yaml,json})
//! let config = Config::load()?;
//! let budget = config.chunker.max_tokens;
//!
//! // Or describe a chunker in code
//! let code = ChunkerConfig::code(CodeLanguage::Rust, 256).with_overlap(16);
//! # Ok::<(), semchunk_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loader::{ChunkerOverlay, ConfigBuilder, ConfigOverlay, ModelOverlay};
pub use types::*;

pub use validation::Validate;
