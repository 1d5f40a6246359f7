use super::{GrammarError, GrammarRegistry, LanguageFn};
use semchunk_config::CodeLanguage;

/// Grammars compiled into this crate, one per [`CodeLanguage`]
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledGrammars;

impl GrammarRegistry for BundledGrammars {
    fn binding(&self, language: CodeLanguage) -> Result<LanguageFn, GrammarError> {
        let binding = match language {
            CodeLanguage::Python => tree_sitter_python::LANGUAGE,
            CodeLanguage::Rust => tree_sitter_rust::LANGUAGE,
            CodeLanguage::Go => tree_sitter_go::LANGUAGE,
            CodeLanguage::JavaScript => tree_sitter_javascript::LANGUAGE,
            CodeLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT,
            CodeLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX,
            CodeLanguage::Java => tree_sitter_java::LANGUAGE,
            CodeLanguage::Kotlin => tree_sitter_kotlin_ng::LANGUAGE,
            CodeLanguage::Scala => tree_sitter_scala::LANGUAGE,
            CodeLanguage::Swift => tree_sitter_swift::LANGUAGE,
            CodeLanguage::C => tree_sitter_c::LANGUAGE,
            CodeLanguage::Cpp => tree_sitter_cpp::LANGUAGE,
            CodeLanguage::CSharp => tree_sitter_c_sharp::LANGUAGE,
            CodeLanguage::Ruby => tree_sitter_ruby::LANGUAGE,
            CodeLanguage::Php => tree_sitter_php::LANGUAGE_PHP,
            CodeLanguage::Lua => tree_sitter_lua::LANGUAGE,
            CodeLanguage::Bash => tree_sitter_bash::LANGUAGE,
            CodeLanguage::Haskell => tree_sitter_haskell::LANGUAGE,
            CodeLanguage::OCaml => tree_sitter_ocaml::LANGUAGE_OCAML,
            CodeLanguage::Elixir => tree_sitter_elixir::LANGUAGE,
            CodeLanguage::Julia => tree_sitter_julia::LANGUAGE,
            CodeLanguage::Html => tree_sitter_html::LANGUAGE,
            CodeLanguage::Css => tree_sitter_css::LANGUAGE,
            CodeLanguage::Json => tree_sitter_json::LANGUAGE,
            CodeLanguage::Yaml => tree_sitter_yaml::LANGUAGE,
            CodeLanguage::Toml => tree_sitter_toml_ng::LANGUAGE,
        };
        Ok(binding)
    }
}
