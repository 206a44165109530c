//! Home-week conflict graph.
//!
//! Vertices are every mnemonic in a schedule. An undirected edge joins two
//! mnemonics that are both home in some common week: they cannot share a
//! venue. Playing away together is never a conflict.

use std::collections::{BTreeMap, BTreeSet};

use super::AnalyzerOptions;
use crate::models::{Division, FixtureDate, Mnemonic, SharedAddress};

/// Undirected conflict graph over mnemonics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictGraph {
    vertices: BTreeSet<Mnemonic>,
    adjacency: BTreeMap<Mnemonic, BTreeSet<Mnemonic>>,
}

impl ConflictGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph for one division's weeks.
    pub fn from_division(division: &Division, options: &AnalyzerOptions) -> Self {
        Self::from_dates(&division.dates, options)
    }

    /// Builds the graph for a sequence of weeks.
    ///
    /// # Complexity
    /// O(w * h²) where w = weeks and h = hosts per week.
    pub fn from_dates(dates: &[FixtureDate], options: &AnalyzerOptions) -> Self {
        let mut graph = Self::new();
        for date in dates {
            graph.vertices.extend(date.mnemonics().cloned());
            let hosts: Vec<&Mnemonic> = date.hosts(options.byes_occupy_venue).collect();
            for (i, a) in hosts.iter().enumerate() {
                for b in &hosts[i + 1..] {
                    graph.add_edge(a, b);
                }
            }
        }
        graph
    }

    fn add_edge(&mut self, a: &Mnemonic, b: &Mnemonic) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone());
        self.adjacency
            .entry(b.clone())
            .or_default()
            .insert(a.clone());
    }

    /// Adds every vertex and edge of `other` (union of graphs).
    pub fn merge(&mut self, other: &ConflictGraph) {
        self.vertices.extend(other.vertices.iter().cloned());
        for (m, neighbors) in &other.adjacency {
            self.adjacency
                .entry(m.clone())
                .or_default()
                .extend(neighbors.iter().cloned());
        }
    }

    /// All mnemonics, ascending.
    #[inline]
    pub fn mnemonics(&self) -> &BTreeSet<Mnemonic> {
        &self.vertices
    }

    /// Whether `a` and `b` are ever home in the same week.
    pub fn conflicts(&self, a: &str, b: &str) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(b))
    }

    /// Mnemonics that conflict with `mnemonic`, ascending.
    pub fn neighbors(&self, mnemonic: &str) -> impl Iterator<Item = &Mnemonic> {
        self.adjacency.get(mnemonic).into_iter().flatten()
    }

    /// Each edge once, as `(smaller, larger)`.
    pub fn edges(&self) -> impl Iterator<Item = (&Mnemonic, &Mnemonic)> {
        self.adjacency
            .iter()
            .flat_map(|(a, ns)| ns.iter().filter(move |b| a < *b).map(move |b| (a, b)))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Every conflicting pair inside `group`, in ascending order.
    ///
    /// All pairs are checked, not only neighbors of a seed member.
    pub fn conflicting_pairs(&self, group: &SharedAddress) -> Vec<(Mnemonic, Mnemonic)> {
        let members: Vec<&Mnemonic> = group.iter().collect();
        let mut pairs = Vec::new();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                if self.conflicts(a.as_str(), b.as_str()) {
                    pairs.push(((*a).clone(), (*b).clone()));
                }
            }
        }
        pairs
    }
}
