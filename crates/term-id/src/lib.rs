//! Compact ontology term identifiers.
//!
//! Every concept in an ontology, and every disease record that points into one, is addressed by a
//! compact identifier (CURIE) made of two parts separated by a single colon:
//! `<prefix>:<local id>`, for example `HP:0001167` or `OMIM:987654`.
//!
//! This crate provides a small wrapper type ([`TermId`]) that *guarantees* the compact form once
//! constructed. Parse an externally supplied string with [`TermId::parse`] and from then on the
//! identifier can be compared, hashed and sorted without re-validation.
//!
//! ## Accepted form
//! - Exactly one `:` separator
//! - Non-empty prefix and non-empty local id
//! - No whitespace anywhere
//!
//! Notes:
//! - Both parts are case-sensitive: `HP:0001167` and `hp:0001167` are different identifiers.
//! - Surrounding whitespace is rejected rather than trimmed; readers must hand over clean tokens.
//! - Ordering is lexicographic on `(prefix, local id)`, which gives deterministic output ordering
//!   wherever identifiers are collected into sorted containers.

mod term_id;

pub use term_id::TermId;

/// Error type for identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TermIdError {
    /// The input does not have the `<prefix>:<local id>` shape.
    #[error("malformed term identifier '{input}': {reason}")]
    MalformedIdentifier { input: String, reason: &'static str },
}

/// Result type for identifier operations.
pub type TermIdResult<T> = Result<T, TermIdError>;
