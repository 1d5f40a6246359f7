//! Grammar registry: resolves a source language to a tree-sitter binding.
//!
//! Which registry backs [`default_registry`] is decided once per process
//! from the compiled features. With the `grammars` feature the bundled
//! tree-sitter grammars are used; without it every lookup fails with
//! [`GrammarError::Unavailable`], which the resolver reports as a missing
//! dependency.

#[cfg(feature = "grammars")]
mod bundled;
mod table;

#[cfg(feature = "grammars")]
pub use bundled::BundledGrammars;
pub use table::GrammarTable;

use once_cell::sync::Lazy;
use semchunk_config::CodeLanguage;
use std::sync::Arc;
use thiserror::Error;
pub use tree_sitter_language::LanguageFn;

/// Name of the cargo feature that ships the bundled grammars
pub const GRAMMARS_FEATURE: &str = "grammars";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// No grammar registry is installed in this build
    #[error("grammar registry '{dependency}' is not installed")]
    Unavailable { dependency: String },

    /// The registry does not carry a grammar for this language
    #[error("no grammar registered for language '{language}'")]
    Unsupported { language: CodeLanguage },
}

/// Resolves a language identifier to a grammar binding usable by the code
/// splitter.
pub trait GrammarRegistry: Send + Sync {
    fn binding(&self, language: CodeLanguage) -> Result<LanguageFn, GrammarError>;

    /// Whether this registry can serve any binding at all
    fn is_available(&self) -> bool {
        true
    }
}

/// Stand-in registry for builds without grammars
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableGrammars;

impl GrammarRegistry for UnavailableGrammars {
    fn binding(&self, _language: CodeLanguage) -> Result<LanguageFn, GrammarError> {
        Err(GrammarError::Unavailable {
            dependency: GRAMMARS_FEATURE.to_string(),
        })
    }

    fn is_available(&self) -> bool {
        false
    }
}

static DEFAULT_REGISTRY: Lazy<Arc<dyn GrammarRegistry>> = Lazy::new(select_registry);

#[cfg(feature = "grammars")]
fn select_registry() -> Arc<dyn GrammarRegistry> {
    Arc::new(BundledGrammars)
}

#[cfg(not(feature = "grammars"))]
fn select_registry() -> Arc<dyn GrammarRegistry> {
    tracing::debug!("built without bundled grammars; code chunking is unavailable");
    Arc::new(UnavailableGrammars)
}

/// The process-wide registry matching this build's features
pub fn default_registry() -> Arc<dyn GrammarRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}
