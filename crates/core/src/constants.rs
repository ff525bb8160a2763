//! Constants used throughout the hpotk core crate.

/// Cohort size assumed for annotations that carry no explicit frequency.
///
/// Negated annotations are stored as `0 / DEFAULT_COHORT_SIZE` and unqualified positive
/// annotations as `DEFAULT_COHORT_SIZE / DEFAULT_COHORT_SIZE`.
pub const DEFAULT_COHORT_SIZE: u32 = 50;

/// Environment variable an application may read at startup to override the cohort size.
pub const COHORT_SIZE_ENV_VAR: &str = "HPOTK_COHORT_SIZE";
