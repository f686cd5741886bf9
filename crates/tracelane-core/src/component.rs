//! Component kinds and their column ordering.
//!
//! Every component taking part in a trace is one of three kinds. The kind
//! decides which block of columns its lane lands in: intake services first,
//! then transformation processes, then outbound operations.

use std::{fmt, str};

use log::debug;
use serde::{Deserialize, Serialize};

/// The role a component plays in a message pipeline.
///
/// Deserialization is lenient: kind names are matched ignoring ASCII case and
/// unrecognized names become [`ComponentKind::Process`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ComponentKind {
    Service,
    #[default]
    Process,
    Operation,
}

impl ComponentKind {
    /// Returns the primary column sort key for this kind.
    pub fn rank(self) -> u8 {
        match self {
            Self::Service => 0,
            Self::Process => 1,
            Self::Operation => 2,
        }
    }

    /// Resolves a kind name, falling back to [`ComponentKind::Process`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tracelane_core::component::ComponentKind;
    /// assert_eq!(ComponentKind::from_name("Service"), ComponentKind::Service);
    /// assert_eq!(ComponentKind::from_name("router"), ComponentKind::Process);
    /// ```
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            debug!(kind = name; "Unknown component kind, ranking as process");
            Self::Process
        })
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Process => "process",
            Self::Operation => "operation",
        }
    }
}

impl str::FromStr for ComponentKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("service") {
            Ok(Self::Service)
        } else if s.eq_ignore_ascii_case("process") {
            Ok(Self::Process)
        } else if s.eq_ignore_ascii_case("operation") {
            Ok(Self::Operation)
        } else {
            Err("Invalid component kind")
        }
    }
}

impl From<String> for ComponentKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
