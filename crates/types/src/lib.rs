//! # Nutriverse Types
//!
//! Small validated text types shared across the Nutriverse crates.
//!
//! These newtypes guarantee their invariants at construction time so that
//! downstream code (the record store, the API layer) never has to re-check
//! them during request handling.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text contained characters outside the allowed set
    #[error("Text contains invalid characters: {0}")]
    InvalidCharacters(String),
}

/// A URL-safe record identifier.
///
/// Slugs are the public lookup key for food records: unique within a store and
/// safe to embed in a URL path segment without escaping. Allowed characters
/// are lowercase ASCII alphanumerics and hyphens, with no leading or trailing
/// hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Creates a new `Slug` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` for empty input, or
    /// `TextError::InvalidCharacters` when the input contains anything other
    /// than lowercase ASCII alphanumerics and interior hyphens.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let value = input.as_ref();
        if value.is_empty() {
            return Err(TextError::Empty);
        }

        let ok = value
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'-'));
        if !ok || value.starts_with('-') || value.ends_with('-') {
            return Err(TextError::InvalidCharacters(value.to_owned()));
        }

        Ok(Self(value.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::new(&s).map_err(serde::de::Error::custom)
    }
}
