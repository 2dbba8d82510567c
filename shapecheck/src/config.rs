//! Configuration module for validation passes.
//!
//! This module provides the [`ValidationConfig`] struct for customizing how
//! composite schemas report failures and treat unknown object keys.
//!
//! # Example
//! ```rust
//! use shapecheck::{UnknownKeys, ValidationConfig};
//!
//! let config = ValidationConfig::new()
//!     .with_abort_early(true)
//!     .with_unknown_keys(UnknownKeys::Strict)
//!     .with_max_issues(10);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// max_issues must be greater than 0
    #[error("max_issues must be greater than 0")]
    InvalidMaxIssues,
}

/// How object schemas treat keys that are not part of their shape.
///
/// # Variants
///
/// * `Strip` - Drop unknown keys from the output.
///
/// * `Passthrough` - Copy unknown keys into the output unchanged.
///
/// * `Strict` - Fail with `invalid_object_shape`, listing the unknown keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeys {
    /// Drop unknown keys from the output.
    #[default]
    Strip,
    /// Copy unknown keys into the output unchanged.
    Passthrough,
    /// Reject objects with unknown keys.
    Strict,
}

/// Settings for a validation pass.
///
/// # Fields
///
/// * `abort_early` - Stop a composite schema at its first failing child
///   instead of collecting every child failure. Per-child attribution is
///   kept either way. Default: false.
///
/// * `unknown_keys` - Default policy for keys outside an object's shape.
///   Object schemas may override it. Default: `Strip`.
///
/// * `max_issues` - Maximum number of child errors kept on one composite
///   error. Extra issues are counted in the `truncated` param; the failure
///   itself is always reported. Default: 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Stop at the first failing child (default: false)
    pub abort_early: bool,
    /// Policy for unknown object keys (default: Strip)
    pub unknown_keys: UnknownKeys,
    /// Child errors kept per composite error (default: 100)
    pub max_issues: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            abort_early: false,
            unknown_keys: UnknownKeys::default(),
            max_issues: 100,
        }
    }
}

impl ValidationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return an error if invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_issues` is 0.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_issues == 0 {
            warn!("Rejecting validation config with max_issues = 0");
            return Err(ConfigValidationError::InvalidMaxIssues);
        }
        Ok(())
    }

    /// Stop composite schemas at their first failing child.
    pub fn with_abort_early(mut self, enabled: bool) -> Self {
        self.abort_early = enabled;
        self
    }

    /// Set the default policy for unknown object keys.
    pub fn with_unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Set the number of child errors kept per composite error.
    pub fn with_max_issues(mut self, max: usize) -> Self {
        self.max_issues = max;
        self
    }
}
