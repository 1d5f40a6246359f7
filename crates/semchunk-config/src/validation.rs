//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type that needs checks beyond what serde
/// enforces at the type level.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed and why.
    fn validate(&self) -> Result<()>;
}

/// Helper function to validate integer is above minimum
pub fn validate_positive(field: impl Into<String>, value: usize, min: usize) -> Result<()> {
    if value <= min {
        return Err(ConfigError::InvalidInteger {
            field: field.into(),
            value,
            min,
        });
    }
    Ok(())
}

/// Helper function to validate that `low <= high`
pub fn validate_ordered(field: impl Into<String>, low: usize, high: usize) -> Result<()> {
    if low > high {
        return Err(ConfigError::ValidationError {
            field: field.into(),
            message: format!("lower bound ({}) must be <= upper bound ({})", low, high),
        });
    }
    Ok(())
}
