//! Internal implementation of the compact identifier type.

use crate::{TermIdError, TermIdResult};
use std::cmp::Ordering;
use std::{fmt, str::FromStr};

const SEPARATOR: char = ':';

/// A validated compact identifier (`<prefix>:<local id>`).
///
/// Once constructed, the contained value is guaranteed to have exactly one separator, a non-empty
/// prefix, a non-empty local id and no whitespace.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Accepting an identifier string from a file reader or a caller, or
/// - Keying term metadata, graph nodes or disease records.
///
/// # Construction
/// - [`TermId::parse`] validates an externally supplied identifier.
/// - [`TermId::from_parts`] validates and joins a prefix and a local id.
///
/// # Errors
/// Both constructors return [`TermIdError::MalformedIdentifier`] for invalid input.
///
/// # Display format
/// `TermId` always displays as `PREFIX:ID`, exactly as it was parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TermId {
    value: String,
    separator_at: usize,
}

impl TermId {
    /// Validates and parses a compact identifier such as `HP:0001167`.
    ///
    /// # Arguments
    ///
    /// * `input` - Candidate identifier. Must already be a clean token (no padding).
    ///
    /// # Errors
    ///
    /// Returns [`TermIdError::MalformedIdentifier`] describing the first rule the input breaks.
    pub fn parse(input: &str) -> TermIdResult<Self> {
        let separator_at = Self::check(input).map_err(|reason| TermIdError::MalformedIdentifier {
            input: input.to_string(),
            reason,
        })?;

        Ok(Self {
            value: input.to_string(),
            separator_at,
        })
    }

    /// Builds an identifier from its two components.
    ///
    /// # Errors
    ///
    /// Returns [`TermIdError::MalformedIdentifier`] if the joined value is not well formed, for
    /// example when `prefix` itself contains a separator.
    pub fn from_parts(prefix: &str, id: &str) -> TermIdResult<Self> {
        Self::parse(&format!("{prefix}{SEPARATOR}{id}"))
    }

    /// Returns true if `input` would be accepted by [`TermId::parse`].
    ///
    /// This is a purely syntactic check and allocates nothing.
    pub fn is_well_formed(input: &str) -> bool {
        Self::check(input).is_ok()
    }

    /// The part before the separator, e.g. `HP`.
    pub fn prefix(&self) -> &str {
        &self.value[..self.separator_at]
    }

    /// The part after the separator, e.g. `0001167`.
    pub fn id(&self) -> &str {
        &self.value[self.separator_at + SEPARATOR.len_utf8()..]
    }

    /// The full compact form, e.g. `HP:0001167`.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn check(input: &str) -> Result<usize, &'static str> {
        if input.is_empty() {
            return Err("identifier is empty");
        }
        if input.chars().any(char::is_whitespace) {
            return Err("identifier contains whitespace");
        }

        let separator_at = input
            .find(SEPARATOR)
            .ok_or("identifier has no ':' separator")?;
        let rest = &input[separator_at + SEPARATOR.len_utf8()..];

        if rest.contains(SEPARATOR) {
            return Err("identifier has more than one ':' separator");
        }
        if separator_at == 0 {
            return Err("identifier prefix is empty");
        }
        if rest.is_empty() {
            return Err("identifier local id is empty");
        }

        Ok(separator_at)
    }
}

impl Ord for TermId {
    // Component-wise: comparing the joined strings would put `A1:x` before `A:x`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.prefix()
            .cmp(other.prefix())
            .then_with(|| self.id().cmp(other.id()))
    }
}

impl PartialOrd for TermId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for TermId {
    type Err = TermIdError;

    /// Equivalent to [`TermId::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TermId::parse(s)
    }
}

impl TryFrom<&str> for TermId {
    type Error = TermIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TermId::parse(value)
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TermId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TermId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TermId::parse(&s).map_err(serde::de::Error::custom)
    }
}
