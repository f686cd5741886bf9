//! Component identifiers.
//!
//! Components are identified by name. [`ComponentId`] wraps that name so lane
//! and arrow endpoints cannot be confused with display text, and orders
//! case-sensitively by the underlying bytes.

use std::{borrow::Borrow, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Identifier of a component (and of the lane that represents it).
///
/// Cloning is cheap; the name is shared.
///
/// # Examples
///
/// ```
/// use tracelane_core::identifier::ComponentId;
///
/// let intake = ComponentId::new("hl7-intake");
/// assert_eq!(intake, "hl7-intake");
/// assert!(ComponentId::new("B") < ComponentId::new("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(Arc<str>);

impl ComponentId {
    /// Creates a `ComponentId` from a component name.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the component name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ComponentId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ComponentId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
