//! Season fixture templates for league scheduling.
//!
//! A fixture template describes a season with symbolic team placeholders
//! (mnemonics `"1"..="n"`) instead of real teams, organised into divisions
//! and weekly dates. On top of that schedule this crate computes which
//! mnemonics may share one physical venue: two teams at the same address
//! can never both be home in the same week.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Mnemonic`, `Fixture`, `FixtureDate`,
//!   `Division`, `Template`, `SharedAddress`
//! - **`mutator`**: Pure add/remove/reorder of fixtures, weeks and divisions
//! - **`analysis`**: Conflict graph and deterministic venue-sharing partition
//! - **`registry`**: Reconciles declared shared addresses with the analysis
//! - **`composer`**: Division copying, round-robin generation, display dates
//! - **`validation`**: Whole-template integrity checks for loaded data
//! - **`store`**: Data contract of the external template service
//!
//! # Value semantics
//!
//! Every operation takes its input by reference and returns a new value.
//! Nothing is mutated in place and nothing performs I/O, so an editor can
//! keep prior snapshots for undo and comparison. Callers re-run the
//! analysis after each schedule edit before showing reconciliation.
//!
//! # Example
//!
//! ```
//! use u_fixture::analysis::analyze_division;
//! use u_fixture::composer::round_robin;
//!
//! let division = round_robin(8).unwrap();
//! let sharing = analyze_division(&division);
//! assert_eq!(sharing.groups().len(), 4);
//! assert!(sharing.compatible("1", "5"));
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), greedy graph colouring for timetabling
//! - de Werra (1981), "Scheduling in sports"

pub mod analysis;
pub mod composer;
pub mod error;
pub mod models;
pub mod mutator;
pub mod registry;
pub mod store;
pub mod validation;

pub use error::{Result, TemplateError};

#[cfg(test)]
pub(crate) mod test_support;
