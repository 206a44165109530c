//! Venue-sharing analysis.
//!
//! Computes which mnemonics of a division can share one physical venue:
//! two mnemonics that are both home in the same week cannot. The result is
//! a deterministic partition of the division's mnemonics into
//! conflict-free groups, offered to the address registry as suggestions.
//!
//! # Algorithm
//!
//! 1. Collect every mnemonic of the division (home, away, byes).
//! 2. Build the conflict graph: an edge per pair of same-week hosts
//!    ([`ConflictGraph`]).
//! 3. Greedy first-fit in ascending mnemonic order ([`greedy_partition`]).
//!
//! The analysis is total: an empty division yields an empty partition.
//! Suggestions are a separate read-only value; they never overwrite a
//! division's declared shared addresses.

mod conflict;
mod partition;

pub use conflict::ConflictGraph;
pub use partition::greedy_partition;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Division, SharedAddress, Template};

/// Analysis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerOptions {
    /// Whether the home side of a bye counts as hosting that week
    /// (default: `true`).
    pub byes_occupy_venue: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            byes_occupy_venue: true,
        }
    }
}

impl AnalyzerOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether byes occupy the home venue.
    pub fn with_byes_occupy_venue(mut self, occupy: bool) -> Self {
        self.byes_occupy_venue = occupy;
        self
    }
}

/// Result of analysing one schedule: conflict graph plus suggested groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueSharing {
    graph: ConflictGraph,
    groups: Vec<SharedAddress>,
}

impl VenueSharing {
    /// Partitions `graph` and bundles it with the suggested groups.
    pub fn from_graph(graph: ConflictGraph) -> Self {
        let groups = greedy_partition(&graph);
        Self { graph, groups }
    }

    /// Suggested groups in opening order.
    #[inline]
    pub fn groups(&self) -> &[SharedAddress] {
        &self.groups
    }

    /// Conflict graph the groups were derived from.
    #[inline]
    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    /// Whether `a` and `b` may share a venue.
    pub fn compatible(&self, a: &str, b: &str) -> bool {
        !self.graph.conflicts(a, b)
    }

    /// Index of the suggested group containing `mnemonic`.
    pub fn group_of(&self, mnemonic: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(mnemonic))
    }

    /// Consumes the analysis, returning the suggested groups.
    pub fn into_groups(self) -> Vec<SharedAddress> {
        self.groups
    }
}

/// Runs venue-sharing analysis over divisions and templates.
#[derive(Debug, Clone, Default)]
pub struct VenueSharingAnalyzer {
    options: AnalyzerOptions,
}

impl VenueSharingAnalyzer {
    /// Creates an analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets analysis options.
    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    /// Active options.
    #[inline]
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Analyses one division.
    pub fn analyze(&self, division: &Division) -> VenueSharing {
        let graph = ConflictGraph::from_division(division, &self.options);
        let sharing = VenueSharing::from_graph(graph);
        debug!(
            weeks = division.week_count(),
            mnemonics = sharing.graph.mnemonics().len(),
            conflicts = sharing.graph.edge_count(),
            groups = sharing.groups.len(),
            "venue sharing analysed"
        );
        sharing
    }

    /// Analyses every division of `template`, in order.
    pub fn analyze_template(&self, template: &Template) -> Vec<VenueSharing> {
        template
            .divisions
            .iter()
            .map(|division| self.analyze(division))
            .collect()
    }

    /// Union of the conflict graphs of all divisions.
    ///
    /// A template-wide shared address must be conflict-free in every
    /// division it touches, so it is checked against this graph.
    pub fn template_graph(&self, template: &Template) -> ConflictGraph {
        let mut graph = ConflictGraph::new();
        for division in &template.divisions {
            graph.merge(&ConflictGraph::from_division(division, &self.options));
        }
        graph
    }
}

/// Analyses `division` with default options.
pub fn analyze_division(division: &Division) -> VenueSharing {
    VenueSharingAnalyzer::new().analyze(division)
}
