//! Division model.
//!
//! A division owns an ordered sequence of weeks and its own venue-sharing
//! groups. Groups are mutually exclusive within a division.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{FixtureDate, Mnemonic, SharedAddress};

/// One division of a fixture template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    /// Declared venue-sharing groups.
    #[serde(default)]
    pub shared_addresses: Vec<SharedAddress>,
    /// Weeks in schedule order.
    #[serde(default)]
    pub dates: Vec<FixtureDate>,
}

impl Division {
    /// Creates an empty division.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a week.
    pub fn with_date(mut self, date: FixtureDate) -> Self {
        self.dates.push(date);
        self
    }

    /// Appends a declared venue-sharing group.
    pub fn with_shared_address(mut self, group: SharedAddress) -> Self {
        self.shared_addresses.push(group);
        self
    }

    /// Number of weeks.
    #[inline]
    pub fn week_count(&self) -> usize {
        self.dates.len()
    }

    /// Every mnemonic appearing anywhere in the schedule, ascending.
    pub fn mnemonics(&self) -> BTreeSet<Mnemonic> {
        self.dates
            .iter()
            .flat_map(FixtureDate::mnemonics)
            .cloned()
            .collect()
    }

    /// Index of the declared group containing `mnemonic`.
    pub fn group_of(&self, mnemonic: &str) -> Option<usize> {
        self.shared_addresses
            .iter()
            .position(|g| g.contains(mnemonic))
    }
}
