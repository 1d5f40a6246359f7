use super::{GrammarError, GrammarRegistry, LanguageFn};
use semchunk_config::CodeLanguage;
use std::collections::HashMap;

/// A registry assembled by the caller from explicit bindings.
///
/// Useful to restrict code chunking to a known set of languages or to
/// plug in grammars from crates this one does not bundle.
#[derive(Default, Clone)]
pub struct GrammarTable {
    bindings: HashMap<CodeLanguage, LanguageFn>,
}

impl GrammarTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, language: CodeLanguage, binding: LanguageFn) -> Self {
        self.bindings.insert(language, binding);
        self
    }

    pub fn languages(&self) -> impl Iterator<Item = CodeLanguage> + '_ {
        self.bindings.keys().copied()
    }
}

impl std::fmt::Debug for GrammarTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarTable")
            .field("languages", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl GrammarRegistry for GrammarTable {
    fn binding(&self, language: CodeLanguage) -> Result<LanguageFn, GrammarError> {
        self.bindings
            .get(&language)
            .copied()
            .ok_or(GrammarError::Unsupported { language })
    }
}
