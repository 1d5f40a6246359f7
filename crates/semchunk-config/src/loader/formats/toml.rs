//! TOML format parser

use crate::{error::ConfigError, Config, Result};
use serde::de::DeserializeOwned;

pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse with the file path included in error messages
pub fn parse_with_path<T: DeserializeOwned>(content: &str, path: Option<&str>) -> Result<T> {
    ::toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MaxTokens;

    #[test]
    fn test_parse_minimal_toml() {
        let toml = r#"
[chunker]
type = "text"
max_tokens = [16, 32]
overlap = 4
"#;
        let config = parse(toml).unwrap();
        assert_eq!(config.chunker.max_tokens, MaxTokens::Range(16, 32));
        assert_eq!(config.chunker.overlap, 4);
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
    }
}
