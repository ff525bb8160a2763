//! Age of onset terms.
//!
//! Antenatal onset splits into embryonal and fetal; the remaining terms are postnatal and
//! listed from earliest to latest.

use super::{lookup_in, Entry};
use hpotk_term_id::TermId;

pub const ANTENATAL: &str = "HP:0030674";
pub const EMBRYONAL: &str = "HP:0011460";
pub const FETAL: &str = "HP:0011461";
/// Present at birth.
pub const CONGENITAL: &str = "HP:0003577";
/// First 28 days of life.
pub const NEONATAL: &str = "HP:0003623";
pub const PEDIATRIC: &str = "HP:0410280";
pub const INFANTILE: &str = "HP:0003593";
pub const CHILDHOOD: &str = "HP:0011463";
pub const JUVENILE: &str = "HP:0003621";
pub const ADULT: &str = "HP:0003581";
pub const YOUNG_ADULT: &str = "HP:0011462";
pub const MIDDLE_AGE: &str = "HP:0003596";
pub const LATE: &str = "HP:0003584";

pub const TABLE: &[Entry] = &[
    ("ANTENATAL", ANTENATAL),
    ("EMBRYONAL", EMBRYONAL),
    ("FETAL", FETAL),
    ("CONGENITAL", CONGENITAL),
    ("NEONATAL", NEONATAL),
    ("PEDIATRIC", PEDIATRIC),
    ("INFANTILE", INFANTILE),
    ("CHILDHOOD", CHILDHOOD),
    ("JUVENILE", JUVENILE),
    ("ADULT", ADULT),
    ("YOUNG_ADULT", YOUNG_ADULT),
    ("MIDDLE_AGE", MIDDLE_AGE),
    ("LATE", LATE),
];

pub fn lookup(symbol: &str) -> Option<TermId> {
    lookup_in(TABLE, symbol)
}
