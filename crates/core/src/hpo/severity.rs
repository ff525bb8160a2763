//! Severity modifiers, all below [`super::base::CLINICAL_MODIFIER`].

use super::{lookup_in, Entry};
use hpotk_term_id::TermId;

pub const BORDERLINE: &str = "HP:0012827";
pub const MILD: &str = "HP:0012825";
pub const MODERATE: &str = "HP:0012826";
pub const SEVERE: &str = "HP:0012828";
pub const PROFOUND: &str = "HP:0012829";

/// Least to most severe.
pub const TABLE: &[Entry] = &[
    ("BORDERLINE", BORDERLINE),
    ("MILD", MILD),
    ("MODERATE", MODERATE),
    ("SEVERE", SEVERE),
    ("PROFOUND", PROFOUND),
];

pub fn lookup(symbol: &str) -> Option<TermId> {
    lookup_in(TABLE, symbol)
}
