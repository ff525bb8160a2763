//! Well-known HPO term identifiers.
//!
//! Each submodule exposes one `pub const` per term plus a `TABLE` of
//! `(symbol, curie)` pairs and a `lookup` by symbol:
//!
//! ```
//! use hpotk_core::hpo::{base, severity};
//!
//! assert_eq!(base::PHENOTYPIC_ABNORMALITY, "HP:0000118");
//! let severe = severity::lookup("SEVERE").unwrap();
//! assert_eq!(severe.value(), "HP:0012828");
//! ```

pub mod base;
pub mod frequency;
pub mod inheritance;
pub mod onset;
pub mod organ_system;
pub mod severity;

use hpotk_term_id::TermId;

/// `(symbol, curie)` pair.
pub type Entry = (&'static str, &'static str);

fn lookup_in(table: &[Entry], symbol: &str) -> Option<TermId> {
    table
        .iter()
        .find(|(name, _)| *name == symbol)
        .and_then(|(_, curie)| TermId::parse(curie).ok())
}
