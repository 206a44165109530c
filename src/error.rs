//! Error types for fixture-template operations.
//!
//! Every failure here is a deterministic caller error (bad index, malformed
//! input). Nothing performs I/O, so nothing is retryable.

use std::fmt;

use crate::models::Mnemonic;

/// Result alias for fixture-template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Collection addressed by an index-based operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Fixtures of one date.
    Fixtures,
    /// Dates of one division.
    Dates,
    /// Divisions of a template.
    Divisions,
    /// Shared-address groups of a division or template.
    AddressGroups,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fixtures => "fixture",
            Self::Dates => "date",
            Self::Divisions => "division",
            Self::AddressGroups => "address group",
        };
        f.write_str(name)
    }
}

/// Errors raised by model construction, mutation and composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// Fixture with an empty home, an empty away, or home == away.
    #[error("invalid fixture: home '{home}', away '{}'", .away.as_deref().unwrap_or("<bye>"))]
    InvalidFixture {
        home: String,
        away: Option<String>,
    },

    /// A mnemonic appears more than once in a single week.
    #[error("mnemonic '{mnemonic}' plays more than once in the same week")]
    DuplicateMnemonicInWeek { mnemonic: Mnemonic },

    /// Index does not address an existing element.
    #[error("{collection} index {index} out of range (len {len})")]
    IndexOutOfRange {
        collection: Collection,
        index: usize,
        len: usize,
    },

    /// Declared group shares a mnemonic with an existing group.
    #[error("mnemonic '{mnemonic}' already belongs to another address group")]
    OverlappingAddressGroup { mnemonic: Mnemonic },
}

impl TemplateError {
    pub(crate) fn out_of_range(collection: Collection, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            collection,
            index,
            len,
        }
    }

    /// Always `false`: failures are caller logic errors and reproduce exactly.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = TemplateError::InvalidFixture {
            home: "1".into(),
            away: None,
        };
        assert_eq!(e.to_string(), "invalid fixture: home '1', away '<bye>'");

        let e = TemplateError::out_of_range(Collection::Dates, 4, 2);
        assert_eq!(e.to_string(), "date index 4 out of range (len 2)");

        let e = TemplateError::DuplicateMnemonicInWeek {
            mnemonic: Mnemonic::new("A"),
        };
        assert!(e.to_string().contains("'A'"));
        assert!(!e.is_retryable());
    }
}
