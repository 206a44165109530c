//! Mnemonic (team placeholder) model.
//!
//! A mnemonic stands in for a real team inside a fixture template. Teams
//! are resolved from mnemonics outside this crate, so a mnemonic carries
//! no meaning beyond its exact, case-sensitive text.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Symbolic schedule slot, e.g. `"1"` .. `"n"`.
///
/// Ordering is byte-wise lexicographic on the label, so `"10"` sorts
/// before `"2"`. The venue-sharing analyzer relies on this order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mnemonic(String);

impl Mnemonic {
    /// Creates a mnemonic from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is empty (never valid as a fixture participant).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Mnemonic {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Mnemonic {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Mnemonic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Mnemonic {
    fn borrow(&self) -> &str {
        &self.0
    }
}
