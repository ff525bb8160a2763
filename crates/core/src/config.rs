//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the loaders. Nothing
//! in this crate reads process-wide environment variables while building or querying an
//! ontology; callers read [`COHORT_SIZE_ENV_VAR`] themselves and hand the raw value to
//! [`cohort_size_from_env_value`].

use crate::constants::{COHORT_SIZE_ENV_VAR, DEFAULT_COHORT_SIZE};
use crate::{ConfigError, ConfigResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    cohort_size: u32,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInput`] if `cohort_size` is zero.
    pub fn new(cohort_size: u32) -> ConfigResult<Self> {
        if cohort_size == 0 {
            return Err(ConfigError::InvalidInput(
                "cohort_size must be greater than zero".into(),
            ));
        }

        Ok(Self { cohort_size })
    }

    pub fn cohort_size(&self) -> u32 {
        self.cohort_size
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            cohort_size: DEFAULT_COHORT_SIZE,
        }
    }
}

/// Parse the cohort size from an optional environment value.
///
/// Blank or missing values fall back to [`DEFAULT_COHORT_SIZE`].
pub fn cohort_size_from_env_value(value: Option<String>) -> ConfigResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_COHORT_SIZE);
    };

    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => {
            tracing::warn!(
                variable = COHORT_SIZE_ENV_VAR,
                value = %value,
                "rejected cohort size override"
            );
            Err(ConfigError::InvalidInput(format!(
                "{COHORT_SIZE_ENV_VAR} must be a positive integer, got '{value}'"
            )))
        }
    }
}
