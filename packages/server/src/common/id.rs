//! Typed string identifiers for compile-time type safety.
//!
//! Survey ids are supplied by the caller and approval request ids are minted
//! by the tracker, so both are opaque strings rather than UUIDs. `Id<T>` wraps
//! the string with a marker type so a `SurveyId` can never be passed where an
//! `ApprovalRequestId` was expected.
//!
//! ```rust
//! use pulse_core::common::Id;
//!
//! pub struct Survey;
//! pub struct ApprovalRequest;
//!
//! pub type SurveyId = Id<Survey>;
//! pub type ApprovalRequestId = Id<ApprovalRequest>;
//!
//! let survey_id = SurveyId::new("s1");
//! assert_eq!(survey_id.as_str(), "s1");
//!
//! // This would be a compile error:
//! // let wrong: ApprovalRequestId = survey_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A typed wrapper around `String`.
///
/// The type parameter `T` names the entity this id belongs to. Ids with
/// different `T` are incompatible at compile time.
#[repr(transparent)]
pub struct Id<T>(String, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Wraps a raw identifier.
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into(), PhantomData)
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialEq<str> for Id<T> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<T> PartialEq<&str> for Id<T> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// Hash/Eq/Ord all delegate to the inner string, so map lookups by &str are sound.
impl<T> Borrow<str> for Id<T> {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<T> AsRef<str> for Id<T> {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<T> From<String> for Id<T> {
    #[inline]
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for Id<T> {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for String {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

// ============================================================================
// Serde support
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    struct User;

    type UserId = Id<User>;

    #[test]
    fn test_display_matches_raw_value() {
        let id = UserId::new("user-7");
        assert_eq!(id.to_string(), "user-7");
        assert_eq!(id, "user-7");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = UserId::new("u1");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("u1"));

        let parsed: UserId = serde_json::from_str("\"u1\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut map: HashMap<UserId, &str> = HashMap::new();
        map.insert(UserId::new("a"), "first");
        assert_eq!(map.get("a"), Some(&"first"));

        let mut ordered: BTreeMap<UserId, u8> = BTreeMap::new();
        ordered.insert(UserId::new("b"), 2);
        ordered.insert(UserId::new("a"), 1);
        assert_eq!(ordered.get("b"), Some(&2));
        assert_eq!(ordered.keys().next().unwrap().as_str(), "a");
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = UserId::new("x");
        let debug = format!("{:?}", id);
        assert!(debug.contains("User"));
    }
}
