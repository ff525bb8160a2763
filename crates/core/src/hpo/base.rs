//! Top-level HPO terms.

use super::{lookup_in, Entry};
use hpotk_term_id::TermId;

/// Root of the ontology.
pub const ALL: &str = "HP:0000001";

pub const PHENOTYPIC_ABNORMALITY: &str = "HP:0000118";

/// Parent of severity, laterality, progression and similar qualifiers.
pub const CLINICAL_MODIFIER: &str = "HP:0012823";

pub const MODE_OF_INHERITANCE: &str = "HP:0000005";

pub const FREQUENCY: &str = "HP:0040279";

/// Parent of the onset terms.
pub const CLINICAL_COURSE: &str = "HP:0031797";

pub const PAST_MEDICAL_HISTORY: &str = "HP:0032443";

pub const BLOOD_GROUP: &str = "HP:0032223";

pub const TABLE: &[Entry] = &[
    ("ALL", ALL),
    ("PHENOTYPIC_ABNORMALITY", PHENOTYPIC_ABNORMALITY),
    ("CLINICAL_MODIFIER", CLINICAL_MODIFIER),
    ("MODE_OF_INHERITANCE", MODE_OF_INHERITANCE),
    ("FREQUENCY", FREQUENCY),
    ("CLINICAL_COURSE", CLINICAL_COURSE),
    ("PAST_MEDICAL_HISTORY", PAST_MEDICAL_HISTORY),
    ("BLOOD_GROUP", BLOOD_GROUP),
];

pub fn lookup(symbol: &str) -> Option<TermId> {
    lookup_in(TABLE, symbol)
}
