//! Fixture-template domain models.
//!
//! Value types for a mnemonic-based season schedule. Every type is a plain
//! owned value: mutation goes through [`crate::mutator`] and
//! [`crate::composer`], which return new values and leave their inputs
//! untouched.
//!
//! # Structure
//!
//! | Type | Owns | Meaning |
//! |------|------|---------|
//! | Template | Divisions, SharedAddress | Season layout |
//! | Division | FixtureDates, SharedAddress | One league tier |
//! | FixtureDate | Fixtures | One week |
//! | Fixture | Mnemonics | Home vs away (or bye) |

mod address;
mod date;
mod division;
mod fixture;
mod mnemonic;
mod template;

pub use address::SharedAddress;
pub use date::FixtureDate;
pub use division::Division;
pub use fixture::Fixture;
pub use mnemonic::Mnemonic;
pub use template::Template;
