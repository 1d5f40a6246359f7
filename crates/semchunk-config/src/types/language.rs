//! Source languages understood by code chunking

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source languages with a grammar binding available for code chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Python,
    Rust,
    Go,
    JavaScript,
    TypeScript,
    Tsx,
    Java,
    Kotlin,
    Scala,
    Swift,
    C,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Lua,
    Bash,
    Haskell,
    OCaml,
    Elixir,
    Julia,
    Html,
    Css,
    Json,
    Yaml,
    Toml,
}

impl CodeLanguage {
    pub const ALL: [CodeLanguage; 26] = [
        CodeLanguage::Python,
        CodeLanguage::Rust,
        CodeLanguage::Go,
        CodeLanguage::JavaScript,
        CodeLanguage::TypeScript,
        CodeLanguage::Tsx,
        CodeLanguage::Java,
        CodeLanguage::Kotlin,
        CodeLanguage::Scala,
        CodeLanguage::Swift,
        CodeLanguage::C,
        CodeLanguage::Cpp,
        CodeLanguage::CSharp,
        CodeLanguage::Ruby,
        CodeLanguage::Php,
        CodeLanguage::Lua,
        CodeLanguage::Bash,
        CodeLanguage::Haskell,
        CodeLanguage::OCaml,
        CodeLanguage::Elixir,
        CodeLanguage::Julia,
        CodeLanguage::Html,
        CodeLanguage::Css,
        CodeLanguage::Json,
        CodeLanguage::Yaml,
        CodeLanguage::Toml,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeLanguage::Python => "python",
            CodeLanguage::Rust => "rust",
            CodeLanguage::Go => "go",
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::TypeScript => "typescript",
            CodeLanguage::Tsx => "tsx",
            CodeLanguage::Java => "java",
            CodeLanguage::Kotlin => "kotlin",
            CodeLanguage::Scala => "scala",
            CodeLanguage::Swift => "swift",
            CodeLanguage::C => "c",
            CodeLanguage::Cpp => "cpp",
            CodeLanguage::CSharp => "csharp",
            CodeLanguage::Ruby => "ruby",
            CodeLanguage::Php => "php",
            CodeLanguage::Lua => "lua",
            CodeLanguage::Bash => "bash",
            CodeLanguage::Haskell => "haskell",
            CodeLanguage::OCaml => "ocaml",
            CodeLanguage::Elixir => "elixir",
            CodeLanguage::Julia => "julia",
            CodeLanguage::Html => "html",
            CodeLanguage::Css => "css",
            CodeLanguage::Json => "json",
            CodeLanguage::Yaml => "yaml",
            CodeLanguage::Toml => "toml",
        }
    }
}

impl fmt::Display for CodeLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        CodeLanguage::ALL
            .into_iter()
            .find(|lang| lang.as_str() == lowered)
            .ok_or_else(|| {
                let options: Vec<&str> = CodeLanguage::ALL.iter().map(|l| l.as_str()).collect();
                ConfigError::invalid_enum("chunker.language", s, &options)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for lang in CodeLanguage::ALL {
            assert_eq!(lang.as_str().parse::<CodeLanguage>().unwrap(), lang);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Python".parse::<CodeLanguage>().unwrap(), CodeLanguage::Python);
    }

    #[test]
    fn test_kotlin_is_known() {
        assert_eq!("kotlin".parse::<CodeLanguage>().unwrap(), CodeLanguage::Kotlin);
        let lang: CodeLanguage = serde_json::from_str("\"ocaml\"").unwrap();
        assert_eq!(lang, CodeLanguage::OCaml);
    }

    #[test]
    fn test_unknown_language_suggests() {
        let err = "pyhton".parse::<CodeLanguage>().unwrap_err();
        assert!(err.to_string().contains("Did you mean 'python'?"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&CodeLanguage::CSharp).unwrap(),
            "\"csharp\""
        );
        let lang: CodeLanguage = serde_json::from_str("\"javascript\"").unwrap();
        assert_eq!(lang, CodeLanguage::JavaScript);
    }
}
