//! Shared-address (venue-sharing) group.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Mnemonic;

/// A set of mnemonics that use the same physical venue.
///
/// Valid only if no two members are ever home in the same week. Groups of
/// size 0 or 1 are allowed and mean "not yet grouped" / "solo".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedAddress(BTreeSet<Mnemonic>);

impl SharedAddress {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member.
    pub fn with_member(mut self, mnemonic: impl Into<Mnemonic>) -> Self {
        self.0.insert(mnemonic.into());
        self
    }

    /// Whether `mnemonic` is a member.
    #[inline]
    pub fn contains(&self, mnemonic: &str) -> bool {
        self.0.contains(mnemonic)
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the group has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Mnemonic> {
        self.0.iter()
    }

    /// Whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &SharedAddress) -> bool {
        self.0.is_subset(&other.0)
    }

    /// First member that also belongs to `other`.
    pub fn first_shared<'a>(&'a self, other: &'a SharedAddress) -> Option<&'a Mnemonic> {
        self.0.intersection(&other.0).next()
    }

    /// Underlying member set.
    #[inline]
    pub fn members(&self) -> &BTreeSet<Mnemonic> {
        &self.0
    }

    pub(crate) fn insert(&mut self, mnemonic: Mnemonic) -> bool {
        self.0.insert(mnemonic)
    }
}

impl<M: Into<Mnemonic>> FromIterator<M> for SharedAddress {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a SharedAddress {
    type Item = &'a Mnemonic;
    type IntoIter = std::collections::btree_set::Iter<'a, Mnemonic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
