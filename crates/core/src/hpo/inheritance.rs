//! Modes of inheritance, all below [`super::base::MODE_OF_INHERITANCE`].

use super::{lookup_in, Entry};
use hpotk_term_id::TermId;

pub const AUTOSOMAL_DOMINANT: &str = "HP:0000006";
pub const AUTOSOMAL_RECESSIVE: &str = "HP:0000007";
pub const X_LINKED: &str = "HP:0001417";
pub const X_LINKED_DOMINANT: &str = "HP:0001423";
pub const X_LINKED_RECESSIVE: &str = "HP:0001419";
pub const MITOCHONDRIAL: &str = "HP:0001427";
pub const Y_LINKED: &str = "HP:0001450";

pub const TABLE: &[Entry] = &[
    ("AUTOSOMAL_DOMINANT", AUTOSOMAL_DOMINANT),
    ("AUTOSOMAL_RECESSIVE", AUTOSOMAL_RECESSIVE),
    ("X_LINKED", X_LINKED),
    ("X_LINKED_DOMINANT", X_LINKED_DOMINANT),
    ("X_LINKED_RECESSIVE", X_LINKED_RECESSIVE),
    ("MITOCHONDRIAL", MITOCHONDRIAL),
    ("Y_LINKED", Y_LINKED),
];

pub fn lookup(symbol: &str) -> Option<TermId> {
    lookup_in(TABLE, symbol)
}
