//! Greedy first-fit venue-sharing partition.
//!
//! # Algorithm
//!
//! 1. Visit mnemonics in ascending lexicographic order.
//! 2. Put each mnemonic into the first group none of whose members it
//!    conflicts with (every member is checked).
//! 3. If no group qualifies, open a new group.
//!
//! Each group is an independent set of the conflict graph. Many valid
//! partitions exist for an under-constrained schedule; visiting order and
//! first-fit placement pin down exactly one, so repeated runs and
//! independent implementations agree. No attempt is made to minimise the
//! number of groups.
//!
//! # Complexity
//! O(n²) conflict lookups in the worst case, each O(log n).
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use tracing::trace;

use super::ConflictGraph;
use crate::models::{Mnemonic, SharedAddress};

/// Partitions every vertex of `graph` into conflict-free groups.
///
/// Groups are returned in the order they were opened; together they cover
/// the graph's mnemonics exactly once.
pub fn greedy_partition(graph: &ConflictGraph) -> Vec<SharedAddress> {
    let mut groups: Vec<SharedAddress> = Vec::new();

    for mnemonic in graph.mnemonics() {
        let slot = groups
            .iter_mut()
            .enumerate()
            .find(|(_, group)| fits(graph, group, mnemonic));

        match slot {
            Some((index, group)) => {
                trace!(%mnemonic, group = index, "joined group");
                group.insert(mnemonic.clone());
            }
            None => {
                trace!(%mnemonic, group = groups.len(), "opened group");
                groups.push(SharedAddress::new().with_member(mnemonic.clone()));
            }
        }
    }

    groups
}

fn fits(graph: &ConflictGraph, group: &SharedAddress, candidate: &Mnemonic) -> bool {
    group
        .iter()
        .all(|member| !graph.conflicts(member.as_str(), candidate.as_str()))
}
