//! # Publisher identity.
//!
//! [`Publisher`] is a value type wrapping a name. It is used only as a filter key:
//! a registration made "from" a publisher receives only the messages published
//! by an equal publisher (plus, like every registration, nothing else).
//!
//! ## Rules
//! - Equality and hashing go through the identity string `publisher:<name>`.
//! - A publisher compares equal to a raw string equal to its name.
//! - A publisher never carries a message payload; messages travel only through
//!   the call-scoped [`Envelope`](crate::Envelope).
//!
//! ## Example
//! ```rust
//! use eventcast::Publisher;
//!
//! let a = Publisher::new("webhook");
//! let b = Publisher::from(&a);
//! assert_eq!(a, b);
//! assert_eq!(a, "webhook");
//! assert_eq!(a.id(), "publisher:webhook");
//! ```

use std::any::{type_name, Any};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::EventError;

/// Named publisher identity compared by value.
#[derive(Clone)]
pub struct Publisher {
    name: Arc<str>,
    id: Arc<str>,
}

impl Publisher {
    /// Type tag used as the identity prefix.
    pub const TAG: &'static str = "publisher";

    /// Creates a publisher with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let id = format!("{}:{}", Self::TAG, name).into();
        Self { name, id }
    }

    /// Builds a publisher from a dynamically typed value.
    ///
    /// Accepts `String`, `&'static str`, `Arc<str>` and `Publisher` (copied by name).
    ///
    /// # Errors
    /// [`EventError::Naming`] for any other type.
    ///
    /// # Example
    /// ```
    /// use eventcast::{EventError, Publisher};
    ///
    /// assert_eq!(Publisher::try_from_any(&"p").unwrap(), "p");
    /// assert_eq!(
    ///     Publisher::try_from_any(&7u32).unwrap_err(),
    ///     EventError::Naming { got: "u32" },
    /// );
    /// ```
    pub fn try_from_any<T: Any>(value: &T) -> Result<Self, EventError> {
        let any = value as &dyn Any;
        if let Some(publisher) = any.downcast_ref::<Publisher>() {
            return Ok(Self::from(publisher));
        }
        if let Some(name) = any.downcast_ref::<String>() {
            return Ok(Self::new(name.as_str()));
        }
        if let Some(name) = any.downcast_ref::<&'static str>() {
            return Ok(Self::new(*name));
        }
        if let Some(name) = any.downcast_ref::<Arc<str>>() {
            return Ok(Self::new(Arc::clone(name)));
        }
        Err(EventError::Naming {
            got: type_name::<T>(),
        })
    }

    /// Returns the publisher name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identity string (`publisher:<name>`) used for equality.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl From<&Publisher> for Publisher {
    /// Copy-constructs by name; the result is equal but owns fresh storage.
    fn from(other: &Publisher) -> Self {
        Self::new(other.name())
    }
}

impl From<&str> for Publisher {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Publisher {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Arc<str>> for Publisher {
    fn from(name: Arc<str>) -> Self {
        Self::new(name)
    }
}

impl PartialEq for Publisher {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Publisher {}

impl Hash for Publisher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<str> for Publisher {
    fn eq(&self, other: &str) -> bool {
        &*self.name == other
    }
}

impl PartialEq<&str> for Publisher {
    fn eq(&self, other: &&str) -> bool {
        &*self.name == *other
    }
}

impl PartialEq<String> for Publisher {
    fn eq(&self, other: &String) -> bool {
        *self.name == **other
    }
}

impl PartialEq<Publisher> for &str {
    fn eq(&self, other: &Publisher) -> bool {
        other == self
    }
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Publisher").field(&self.name).finish()
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identification() {
        let p = Publisher::new("some name");
        assert_eq!(p.id(), "publisher:some name");
        assert_eq!(p.name(), "some name");
    }

    #[test]
    fn test_comparison_difference() {
        assert_ne!(Publisher::new("first"), Publisher::new("second"));
        assert_ne!(Publisher::new("first"), "second");
    }

    #[test]
    fn test_equal_but_distinct_instances() {
        let a = Publisher::new("one another");
        let b = Publisher::new("one another");
        assert_eq!(a, b);
        assert_eq!(a, "one another");
        assert_eq!("one another", a);
        assert_eq!(a, String::from("one another"));
        assert!(!std::ptr::eq(&a, &b));
        assert!(!Arc::ptr_eq(&a.name, &b.name));
    }

    #[test]
    fn test_copy_construct_round_trip() {
        let p = Publisher::new("p");
        assert_eq!(Publisher::from(&Publisher::from(&p)), Publisher::new("p"));
        assert_eq!(Publisher::try_from_any(&p).unwrap(), p);
    }

    #[test]
    fn test_try_from_any_accepts_strings() {
        assert_eq!(Publisher::try_from_any(&String::from("a")).unwrap(), "a");
        assert_eq!(Publisher::try_from_any(&"b").unwrap(), "b");
        let arc: Arc<str> = Arc::from("c");
        assert_eq!(Publisher::try_from_any(&arc).unwrap(), "c");
    }

    #[test]
    fn test_try_from_any_rejects_other_types() {
        let err = Publisher::try_from_any(&vec![1u8]).unwrap_err();
        assert!(matches!(err, EventError::Naming { .. }));
        assert_eq!(err.as_label(), "event_naming");
    }

    #[test]
    fn test_hash_follows_equality() {
        let set: HashSet<Publisher> = ["x", "x", "y"].into_iter().map(Publisher::from).collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Publisher::new("x")));
    }
}
