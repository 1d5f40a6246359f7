//! Environment variable configuration overlay
//!
//! Variables take the form `SEMCHUNK_<section>_<field>=value`:
//! - `SEMCHUNK_MODEL_NAME=gpt-4`
//! - `SEMCHUNK_CHUNKER_TYPE=code`
//! - `SEMCHUNK_CHUNKER_LANGUAGE=rust`
//! - `SEMCHUNK_CHUNKER_MAX_TOKENS=512` or `256..512`
//! - `SEMCHUNK_CHUNKER_OVERLAP=32`
//! - `SEMCHUNK_CHUNKER_TRIM=false`

use super::merge::{ChunkerOverlay, ConfigOverlay, ModelOverlay};
use crate::{error::ConfigError, Result};
use std::env;
use tracing::warn;

const PREFIX: &str = "SEMCHUNK_";

/// Collect the fields set by `SEMCHUNK_*` variables, or `None` if none are set.
///
/// Variables that fail to parse are skipped with a warning.
pub fn from_env() -> Option<ConfigOverlay> {
    let env_vars: Vec<(String, String)> = env::vars()
        .filter(|(k, _)| k.starts_with(PREFIX))
        .collect();

    if env_vars.is_empty() {
        return None;
    }

    let mut overlay = ConfigOverlay::default();
    for (key, value) in env_vars {
        if let Err(e) = apply_env_var(&mut overlay, &key, &value) {
            warn!(var = %key, error = %e, "ignoring environment variable");
        }
    }

    Some(overlay)
}

fn apply_env_var(overlay: &mut ConfigOverlay, var: &str, value: &str) -> Result<()> {
    let key = var.strip_prefix(PREFIX).unwrap_or(var);

    let (section, field) = key.split_once('_').ok_or_else(|| ConfigError::EnvVarError {
        var: format!("{}{}", PREFIX, key),
        message: "Expected format: SEMCHUNK_<section>_<field>".to_string(),
    })?;

    match section.to_lowercase().as_str() {
        "model" => apply_model_var(&mut overlay.model, &field.to_lowercase(), value),
        "chunker" => apply_chunker_var(&mut overlay.chunker, var, &field.to_lowercase(), value),
        other => Err(ConfigError::EnvVarError {
            var: format!("{}{}", PREFIX, key),
            message: format!("Unknown section: {}", other),
        }),
    }
}

fn apply_model_var(overlay: &mut ModelOverlay, field: &str, value: &str) -> Result<()> {
    match field {
        "name" => overlay.name = Some(value.to_string()),
        _ => return Err(unknown_field("MODEL", field)),
    }
    Ok(())
}

fn apply_chunker_var(
    overlay: &mut ChunkerOverlay,
    var: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    match field {
        "type" => overlay.chunking_type = Some(value.parse()?),
        "language" => overlay.language = Some(value.parse()?),
        "max_tokens" => overlay.max_tokens = Some(value.parse()?),
        "overlap" => {
            let overlap = value.parse().map_err(|_| ConfigError::EnvVarError {
                var: var.to_string(),
                message: format!("Invalid integer: {}", value),
            })?;
            overlay.overlap = Some(overlap);
        }
        "trim" => overlay.trim = Some(parse_bool(var, value)?),
        _ => return Err(unknown_field("CHUNKER", field)),
    }
    Ok(())
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: format!("{}{}_{}", PREFIX, section, field.to_uppercase()),
        message: format!("Unknown field: {}", field),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: var.to_string(),
            message: format!(
                "Invalid boolean: {} (use true/false, 1/0, yes/no, on/off)",
                value
            ),
        }),
    }
}
