//! Canonical hop status and status-token normalization.
//!
//! Source systems report hop outcomes with free-text tokens ("DONE",
//! "queued", "Failed", ...). [`StatusVocabulary`] folds those tokens, together
//! with the hop's error flag, into the closed [`CanonicalStatus`] enumeration
//! so that everything downstream of ingestion matches on three variants.
//!
//! # Example
//!
//! ```
//! # use tracelane_core::status::{CanonicalStatus, StatusVocabulary};
//! let vocabulary = StatusVocabulary::default();
//!
//! assert_eq!(vocabulary.classify("Queued", false), CanonicalStatus::Pending);
//! assert_eq!(vocabulary.classify("FAILED", false), CanonicalStatus::Error);
//! assert_eq!(vocabulary.classify("queued", true), CanonicalStatus::Error);
//! assert_eq!(vocabulary.classify("delivered", false), CanonicalStatus::Success);
//! ```

use std::{fmt, str};

use serde::{Deserialize, Serialize};

/// The three-state outcome of a hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalStatus {
    Success,
    Error,
    Pending,
}

impl CanonicalStatus {
    /// Returns the lowercase name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for CanonicalStatus {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "pending" => Ok(Self::Pending),
            _ => Err("Invalid canonical status"),
        }
    }
}

/// Token lists used to classify raw status strings.
///
/// Tokens are compared after trimming surrounding whitespace and ignoring
/// ASCII case. A token present in both lists classifies as
/// [`CanonicalStatus::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusVocabulary {
    #[serde(default = "default_error_tokens")]
    error_tokens: Vec<String>,

    #[serde(default = "default_pending_tokens")]
    pending_tokens: Vec<String>,
}

fn default_error_tokens() -> Vec<String> {
    ["error", "failed", "failure", "rejected"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_pending_tokens() -> Vec<String> {
    [
        "created",
        "queued",
        "pending",
        "processing",
        "in_progress",
        "retrying",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self {
            error_tokens: default_error_tokens(),
            pending_tokens: default_pending_tokens(),
        }
    }
}

impl StatusVocabulary {
    /// Creates a vocabulary from explicit token lists.
    pub fn new(
        error_tokens: impl IntoIterator<Item = impl Into<String>>,
        pending_tokens: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            error_tokens: error_tokens.into_iter().map(Into::into).collect(),
            pending_tokens: pending_tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokens that classify as [`CanonicalStatus::Error`].
    pub fn error_tokens(&self) -> &[String] {
        &self.error_tokens
    }

    /// Tokens that classify as [`CanonicalStatus::Pending`].
    pub fn pending_tokens(&self) -> &[String] {
        &self.pending_tokens
    }

    /// Classifies a raw status token.
    ///
    /// The error flag wins over any token. Tokens in neither list are
    /// treated as [`CanonicalStatus::Success`].
    pub fn classify(&self, raw_status: &str, is_error_flag: bool) -> CanonicalStatus {
        if is_error_flag {
            return CanonicalStatus::Error;
        }

        let token = raw_status.trim();
        if Self::contains(&self.error_tokens, token) {
            CanonicalStatus::Error
        } else if Self::contains(&self.pending_tokens, token) {
            CanonicalStatus::Pending
        } else {
            CanonicalStatus::Success
        }
    }

    fn contains(tokens: &[String], token: &str) -> bool {
        tokens
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(token))
    }
}
