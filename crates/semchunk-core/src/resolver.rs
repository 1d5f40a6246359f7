//! Chunker resolution: pick a splitter family, a grammar and a sizer, then
//! build the splitter.

use crate::chunker::Chunker;
use crate::error::{ChunkerError, Result};
use crate::grammar::{default_registry, GrammarRegistry, LanguageFn};
use crate::model::ModelSpec;
use crate::sizer::TokenSizer;
use crate::splitter::{Splitter, SplitterFamily, SplitterOptions};
use semchunk_config::{ChunkerConfig, CodeLanguage, Config};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Resolves `(model, config)` pairs into ready-to-use chunkers
#[derive(Clone)]
pub struct ChunkerResolver {
    registry: Arc<dyn GrammarRegistry>,
}

impl ChunkerResolver {
    /// Resolver backed by this build's default grammar registry
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    pub fn with_registry(registry: Arc<dyn GrammarRegistry>) -> Self {
        Self { registry }
    }

    /// Build a chunker for `model` according to `config`.
    ///
    /// Fails with [`ChunkerError::InvalidConfiguration`] when code chunking
    /// is requested without a language, and with
    /// [`ChunkerError::MissingDependency`] when no grammar registry is
    /// available. Nothing is loaded before those checks pass.
    pub fn resolve(&self, model: impl Into<ModelSpec>, config: &ChunkerConfig) -> Result<Chunker> {
        let family = SplitterFamily::from(config.chunking_type);

        let grammar = match family {
            SplitterFamily::Code => Some(self.grammar_for(config.language)?),
            SplitterFamily::Text | SplitterFamily::Markdown => None,
        };

        let model = model.into();
        let strategy = model.strategy();
        debug!(
            %family,
            %strategy,
            max_tokens = %config.max_tokens,
            overlap = config.overlap,
            trim = config.trim,
            "resolving chunker"
        );
        let sizer = TokenSizer::from_model(model)?;

        let options = SplitterOptions {
            max_tokens: config.max_tokens,
            overlap: config.overlap,
            trim: config.trim,
        };
        let splitter = Splitter::build(family, sizer, options, grammar)?;

        Ok(Chunker::new(splitter, strategy))
    }

    /// Resolve using the configured model name and chunker settings
    pub fn resolve_config(&self, config: &Config) -> Result<Chunker> {
        self.resolve(config.model.name.as_str(), &config.chunker)
    }

    fn grammar_for(&self, language: Option<CodeLanguage>) -> Result<LanguageFn> {
        let language = language.ok_or_else(|| {
            ChunkerError::invalid_configuration("language must be provided for code chunking")
        })?;
        let binding = self.registry.binding(language)?;
        debug!(%language, "resolved grammar binding");
        Ok(binding)
    }
}

impl Default for ChunkerResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChunkerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkerResolver")
            .field("grammars_available", &self.registry.is_available())
            .finish()
    }
}

/// Resolve a chunker with the default resolver
pub fn get_chunker(model: impl Into<ModelSpec>, config: &ChunkerConfig) -> Result<Chunker> {
    ChunkerResolver::new().resolve(model, config)
}
