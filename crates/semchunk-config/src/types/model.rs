//! Model configuration

use serde::{Deserialize, Serialize};

/// The string form of the model used to size chunks.
///
/// The value is interpreted at resolution time: inline tokenizer JSON,
/// then a path ending in `.json`, then a named tokenizer model such as
/// `gpt-3.5-turbo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
        }
    }
}

impl crate::validation::Validate for ModelConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::error::ConfigError::ValidationError {
                field: "model.name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn default_model_name() -> String {
    "gpt-3.5-turbo".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(ModelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = ModelConfig {
            name: "   ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
