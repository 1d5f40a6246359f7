//! YAML format parser

use crate::{error::ConfigError, Config, Result};
use serde::de::DeserializeOwned;

pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse with the file path included in error messages
pub fn parse_with_path<T: DeserializeOwned>(content: &str, path: Option<&str>) -> Result<T> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml_error(e, content, path))
}
