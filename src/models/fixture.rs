//! Fixture model.
//!
//! A fixture pairs a home mnemonic with an optional away mnemonic. A
//! fixture without an away side is a bye: the home mnemonic has no
//! opponent that week.

use serde::{Deserialize, Serialize};

use super::Mnemonic;
use crate::error::{Result, TemplateError};

/// One scheduled pairing within a week.
///
/// # Invariants
/// - `home` is non-empty.
/// - `away`, when present, is non-empty and differs from `home`.
///
/// Both the constructors and deserialization enforce these, so every
/// `Fixture` value is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFixture")]
pub struct Fixture {
    home: Mnemonic,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    away: Option<Mnemonic>,
}

#[derive(Deserialize)]
struct RawFixture {
    home: Mnemonic,
    #[serde(default)]
    away: Option<Mnemonic>,
}

impl TryFrom<RawFixture> for Fixture {
    type Error = TemplateError;

    fn try_from(raw: RawFixture) -> Result<Self> {
        Self::from_parts(raw.home, raw.away)
    }
}

impl Fixture {
    /// Creates a home-vs-away fixture.
    pub fn new(home: impl Into<Mnemonic>, away: impl Into<Mnemonic>) -> Result<Self> {
        Self::from_parts(home.into(), Some(away.into()))
    }

    /// Creates a bye for `home`.
    pub fn bye(home: impl Into<Mnemonic>) -> Result<Self> {
        Self::from_parts(home.into(), None)
    }

    /// Creates a fixture from its parts, validating the invariants.
    pub fn from_parts(home: Mnemonic, away: Option<Mnemonic>) -> Result<Self> {
        let malformed = home.is_empty()
            || away
                .as_ref()
                .is_some_and(|a| a.is_empty() || *a == home);
        if malformed {
            return Err(TemplateError::InvalidFixture {
                home: home.as_str().to_owned(),
                away: away.map(|a| a.as_str().to_owned()),
            });
        }
        Ok(Self { home, away })
    }

    /// Home mnemonic (the hosting side).
    #[inline]
    pub fn home(&self) -> &Mnemonic {
        &self.home
    }

    /// Away mnemonic, `None` for a bye.
    #[inline]
    pub fn away(&self) -> Option<&Mnemonic> {
        self.away.as_ref()
    }

    /// Whether this fixture is a bye.
    #[inline]
    pub fn is_bye(&self) -> bool {
        self.away.is_none()
    }

    /// Participating mnemonics: home first, then away if present.
    pub fn mnemonics(&self) -> impl Iterator<Item = &Mnemonic> {
        std::iter::once(&self.home).chain(self.away.iter())
    }

    /// Whether `mnemonic` takes part in this fixture.
    pub fn involves(&self, mnemonic: &str) -> bool {
        self.mnemonics().any(|m| m.as_str() == mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_new() {
        let f = Fixture::new("1", "8").unwrap();
        assert_eq!(f.home().as_str(), "1");
        assert_eq!(f.away().map(Mnemonic::as_str), Some("8"));
        assert!(!f.is_bye());
        assert!(f.involves("8"));
        assert!(!f.involves("2"));
    }

    #[test]
    fn test_fixture_bye() {
        let f = Fixture::bye("A").unwrap();
        assert!(f.is_bye());
        assert_eq!(f.mnemonics().count(), 1);
    }

    #[test]
    fn test_fixture_rejects_malformed() {
        assert!(matches!(
            Fixture::new("1", "1"),
            Err(TemplateError::InvalidFixture { .. })
        ));
        assert!(matches!(
            Fixture::bye(""),
            Err(TemplateError::InvalidFixture { .. })
        ));
        assert!(matches!(
            Fixture::new("1", ""),
            Err(TemplateError::InvalidFixture { .. })
        ));
    }

    #[test]
    fn test_fixture_serde() {
        let f = Fixture::new("1", "2").unwrap();
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#"{"home":"1","away":"2"}"#);

        let bye: Fixture = serde_json::from_str(r#"{"home":"A"}"#).unwrap();
        assert!(bye.is_bye());
        assert_eq!(serde_json::to_string(&bye).unwrap(), r#"{"home":"A"}"#);
    }

    #[test]
    fn test_fixture_deserialize_validates() {
        let err = serde_json::from_str::<Fixture>(r#"{"home":"3","away":"3"}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<Fixture>(r#"{"home":""}"#);
        assert!(err.is_err());
    }
}
