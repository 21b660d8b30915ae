//! Core types for committed recipients

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed recipient entry
///
/// Created when the user commits non-empty, non-duplicate text. Never
/// mutated afterwards; removed only by index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Email-like text as committed (trimmed)
    pub value: String,

    /// Whether the value matches email syntax
    pub valid: bool,
}

impl Tag {
    /// Build a tag from already-trimmed text, classifying its syntax
    #[must_use]
    pub fn classify(value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = is_valid_email(&value);
        Self { value, valid }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Non-whitespace local part, an "@", and a domain containing a "."
static EMAIL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check whether text looks like a plausible email address
///
/// Invalid syntax is never rejected at commit time, only flagged, so this
/// is deliberately loose compared to full RFC 5322 parsing.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}
