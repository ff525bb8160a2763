//! Organ system abnormalities: the direct children of
//! [`super::base::PHENOTYPIC_ABNORMALITY`].

use super::{lookup_in, Entry};
use hpotk_term_id::TermId;

pub const BLOOD: &str = "HP:0001871";
pub const CARDIOVASCULAR: &str = "HP:0001626";
pub const CONNECTIVE_TISSUE: &str = "HP:0003549";
pub const DIGESTIVE: &str = "HP:0025031";
pub const EAR: &str = "HP:0000598";
pub const EYE: &str = "HP:0000478";
pub const GENITOURINARY: &str = "HP:0000119";
pub const HEAD_NECK: &str = "HP:0000152";
pub const IMMUNE: &str = "HP:0002715";
pub const INTEGUMENT: &str = "HP:0001574";
pub const LIMBS: &str = "HP:0040064";
pub const METABOLISM: &str = "HP:0001939";
pub const MUSCULATURE: &str = "HP:0003011";
pub const NERVOUS_SYSTEM: &str = "HP:0000707";
pub const PRENATAL: &str = "HP:0001197";
pub const RESPIRATORY: &str = "HP:0002086";
pub const SKELETAL: &str = "HP:0000924";
pub const ENDOCRINE: &str = "HP:0000818";
pub const BREAST: &str = "HP:0000769";
pub const CELLULAR: &str = "HP:0025354";
pub const THORACIC_CAVITY: &str = "HP:0045027";
pub const CONSTITUTIONAL: &str = "HP:0025142";
pub const GROWTH: &str = "HP:0001507";
pub const NEOPLASM: &str = "HP:0002664";
pub const VOICE: &str = "HP:0001608";

pub const TABLE: &[Entry] = &[
    ("BLOOD", BLOOD),
    ("CARDIOVASCULAR", CARDIOVASCULAR),
    ("CONNECTIVE_TISSUE", CONNECTIVE_TISSUE),
    ("DIGESTIVE", DIGESTIVE),
    ("EAR", EAR),
    ("EYE", EYE),
    ("GENITOURINARY", GENITOURINARY),
    ("HEAD_NECK", HEAD_NECK),
    ("IMMUNE", IMMUNE),
    ("INTEGUMENT", INTEGUMENT),
    ("LIMBS", LIMBS),
    ("METABOLISM", METABOLISM),
    ("MUSCULATURE", MUSCULATURE),
    ("NERVOUS_SYSTEM", NERVOUS_SYSTEM),
    ("PRENATAL", PRENATAL),
    ("RESPIRATORY", RESPIRATORY),
    ("SKELETAL", SKELETAL),
    ("ENDOCRINE", ENDOCRINE),
    ("BREAST", BREAST),
    ("CELLULAR", CELLULAR),
    ("THORACIC_CAVITY", THORACIC_CAVITY),
    ("CONSTITUTIONAL", CONSTITUTIONAL),
    ("GROWTH", GROWTH),
    ("NEOPLASM", NEOPLASM),
    ("VOICE", VOICE),
];

pub fn lookup(symbol: &str) -> Option<TermId> {
    lookup_in(TABLE, symbol)
}
