//! Fixture date (one scheduling week).
//!
//! # Invariant
//! A mnemonic plays at most once per week: as home, as away, or as the
//! home of a bye. Fixture order is authoring order and is preserved for
//! display continuity; it carries no scheduling meaning.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Fixture, Mnemonic};
use crate::error::{Result, TemplateError};

/// Ordered fixtures for one week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFixtureDate")]
pub struct FixtureDate {
    fixtures: Vec<Fixture>,
}

#[derive(Deserialize)]
struct RawFixtureDate {
    #[serde(default)]
    fixtures: Vec<Fixture>,
}

impl TryFrom<RawFixtureDate> for FixtureDate {
    type Error = TemplateError;

    fn try_from(raw: RawFixtureDate) -> Result<Self> {
        Self::new(raw.fixtures)
    }
}

impl FixtureDate {
    /// Creates a week from fixtures, enforcing one appearance per mnemonic.
    pub fn new(fixtures: Vec<Fixture>) -> Result<Self> {
        check_week(&fixtures)?;
        Ok(Self { fixtures })
    }

    /// An empty week.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fixtures in authoring order.
    #[inline]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Number of fixtures.
    #[inline]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the week has no fixtures.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Mnemonics that are home this week, byes included.
    pub fn home_mnemonics(&self) -> impl Iterator<Item = &Mnemonic> {
        self.fixtures.iter().map(Fixture::home)
    }

    /// Mnemonics hosting a match this week.
    ///
    /// With `include_byes == false`, the home side of a bye is left out.
    pub fn hosts(&self, include_byes: bool) -> impl Iterator<Item = &Mnemonic> {
        self.fixtures
            .iter()
            .filter(move |f| include_byes || !f.is_bye())
            .map(Fixture::home)
    }

    /// Every mnemonic playing this week.
    pub fn mnemonics(&self) -> impl Iterator<Item = &Mnemonic> {
        self.fixtures.iter().flat_map(Fixture::mnemonics)
    }

    /// The fixture `mnemonic` plays in this week, if any.
    pub fn fixture_for(&self, mnemonic: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.involves(mnemonic))
    }

    /// Consumes the week, returning its fixtures.
    pub fn into_fixtures(self) -> Vec<Fixture> {
        self.fixtures
    }
}

/// Checks the one-appearance-per-week rule.
fn check_week(fixtures: &[Fixture]) -> Result<()> {
    let mut seen: HashSet<&Mnemonic> = HashSet::new();
    for m in fixtures.iter().flat_map(Fixture::mnemonics) {
        if !seen.insert(m) {
            return Err(TemplateError::DuplicateMnemonicInWeek {
                mnemonic: m.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(home: &str, away: &str) -> Fixture {
        Fixture::new(home, away).unwrap()
    }

    #[test]
    fn test_date_new() {
        let d = FixtureDate::new(vec![fx("1", "8"), fx("2", "7")]).unwrap();
        assert_eq!(d.len(), 2);
        let homes: Vec<&str> = d.home_mnemonics().map(Mnemonic::as_str).collect();
        assert_eq!(homes, vec!["1", "2"]);
        assert_eq!(d.mnemonics().count(), 4);
        assert_eq!(d.fixture_for("7").unwrap().home().as_str(), "2");
        assert!(d.fixture_for("3").is_none());
    }

    #[test]
    fn test_date_duplicate_home() {
        let err = FixtureDate::new(vec![fx("1", "2"), fx("1", "3")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::DuplicateMnemonicInWeek {
                mnemonic: Mnemonic::new("1")
            }
        );
    }

    #[test]
    fn test_date_duplicate_away() {
        assert!(FixtureDate::new(vec![fx("1", "3"), fx("2", "3")]).is_err());
    }

    #[test]
    fn test_date_home_and_away_same_week() {
        assert!(FixtureDate::new(vec![fx("1", "2"), fx("2", "3")]).is_err());
    }

    #[test]
    fn test_date_with_bye() {
        let d = FixtureDate::new(vec![Fixture::bye("A").unwrap(), fx("B", "C")]).unwrap();
        assert_eq!(d.hosts(true).count(), 2);
        let hosts: Vec<&str> = d.hosts(false).map(Mnemonic::as_str).collect();
        assert_eq!(hosts, vec!["B"]);
    }

    #[test]
    fn test_date_bye_clashes_with_other_fixture() {
        assert!(FixtureDate::new(vec![Fixture::bye("A").unwrap(), fx("B", "A")]).is_err());
    }

    #[test]
    fn test_date_deserialize_validates() {
        let ok: FixtureDate =
            serde_json::from_str(r#"{"fixtures":[{"home":"1","away":"2"},{"home":"3"}]}"#)
                .unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<FixtureDate>(
            r#"{"fixtures":[{"home":"1","away":"2"},{"home":"2","away":"3"}]}"#,
        );
        assert!(bad.is_err());

        let empty: FixtureDate = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
