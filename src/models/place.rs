//! Place identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named location in the village.
///
/// Places are opaque identifiers: equality and ordering are all the
/// simulation ever needs from them. Two places are the same location
/// exactly when their names are equal.
///
/// # Examples
///
/// ```
/// use meadowfield::models::Place;
///
/// let post_office = Place::new("Post Office");
/// assert_eq!(post_office.as_str(), "Post Office");
/// assert_eq!(post_office, Place::new("Post Office"));
/// assert_ne!(post_office, Place::new("Farm"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Place(String);

impl Place {
    /// Creates a place from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The place's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Place {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Place {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_equality() {
        assert_eq!(Place::new("Shop"), Place::from("Shop"));
        assert_ne!(Place::new("Shop"), Place::new("Farm"));
    }

    #[test]
    fn test_place_display() {
        let p = Place::new("Alice's House");
        assert_eq!(p.to_string(), "Alice's House");
        assert_eq!(p.as_str(), "Alice's House");
    }

    #[test]
    fn test_place_ordering_is_lexicographic() {
        assert!(Place::new("Cabin") < Place::new("Farm"));
    }
}
