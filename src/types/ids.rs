use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types.
///
/// Notion ids are treated as opaque: they are never normalized, only checked
/// to be safe for interpolation into API paths.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionMarker;

/// A blog post (Notion page).
pub type DocumentId = Id<DocumentMarker>;
/// The database holding the posts.
pub type CollectionId = Id<CollectionMarker>;

impl<T> Id<T> {
    /// Parses an opaque id, rejecting anything that is not `[A-Za-z0-9-]+`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("id"));
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
        {
            return Err(ValidationError::InvalidId(format!(
                "unexpected character '{}' in '{}'",
                bad, trimmed
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
            _phantom: PhantomData,
        })
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Manual impl: derive(Clone) would require `T: Clone` on the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> std::str::FromStr for Id<T> {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
