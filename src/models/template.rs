//! Fixture template model.
//!
//! A template is the whole season layout: divisions in order plus
//! template-wide venue-sharing groups. Template-level groups apply across
//! every division and are reported ahead of division-level groups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Division, Mnemonic, SharedAddress};
use crate::error::{Collection, Result, TemplateError};

/// A season fixture template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Venue-sharing groups spanning all divisions.
    #[serde(default)]
    pub shared_addresses: Vec<SharedAddress>,
    /// Divisions in display order.
    #[serde(default)]
    pub divisions: Vec<Division>,
}

impl Template {
    /// Creates an empty template (no divisions, no shared addresses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a division.
    pub fn with_division(mut self, division: Division) -> Self {
        self.divisions.push(division);
        self
    }

    /// Appends a template-wide venue-sharing group.
    pub fn with_shared_address(mut self, group: SharedAddress) -> Self {
        self.shared_addresses.push(group);
        self
    }

    /// Division at `index`.
    pub fn division(&self, index: usize) -> Result<&Division> {
        let len = self.divisions.len();
        self.divisions
            .get(index)
            .ok_or_else(|| TemplateError::out_of_range(Collection::Divisions, index, len))
    }

    /// Mnemonics appearing in any division, ascending.
    pub fn mnemonics(&self) -> BTreeSet<Mnemonic> {
        self.divisions.iter().flat_map(Division::mnemonics).collect()
    }

    /// Number of divisions.
    #[inline]
    pub fn division_count(&self) -> usize {
        self.divisions.len()
    }
}
