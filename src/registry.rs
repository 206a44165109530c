//! Shared-address registry.
//!
//! Reconciles user-declared venue-sharing groups with venue-sharing
//! analysis. Declared groups are never altered here: a group whose members
//! host in the same week is reported as [`GroupStatus::Conflicting`] for
//! the editor to surface.
//!
//! # Scopes
//!
//! - Division groups are checked against that division's conflict graph.
//! - Template groups are checked against the union of every division's
//!   conflict graph, and are reported first.

use tracing::debug;

use crate::analysis::{ConflictGraph, VenueSharing, VenueSharingAnalyzer};
use crate::error::{Collection, Result, TemplateError};
use crate::models::{Division, Mnemonic, SharedAddress, Template};

/// Outcome of checking one declared group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    /// No two members are ever home in the same week.
    Consistent,
    /// Members that host in a common week, as ascending pairs.
    Conflicting { pairs: Vec<(Mnemonic, Mnemonic)> },
}

/// Finding for one declared group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFinding {
    /// Index of the group in its declaring collection.
    pub index: usize,
    /// The declared group, as checked.
    pub group: SharedAddress,
    /// Check outcome.
    pub status: GroupStatus,
}

impl GroupFinding {
    /// Whether the group conflicts.
    #[inline]
    pub fn is_conflicting(&self) -> bool {
        matches!(self.status, GroupStatus::Conflicting { .. })
    }
}

/// Where a declared group lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Template-wide group.
    Template,
    /// Group of the division at this index.
    Division(usize),
}

/// Reconciliation of every declared group of a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateReport {
    /// Template-wide groups.
    pub template: Vec<GroupFinding>,
    /// Division groups, one list per division.
    pub divisions: Vec<Vec<GroupFinding>>,
}

impl TemplateReport {
    /// Conflicting findings, template scope first, then divisions in order.
    pub fn conflicts(&self) -> impl Iterator<Item = (Scope, &GroupFinding)> {
        let template = self.template.iter().map(|f| (Scope::Template, f));
        let divisions = self
            .divisions
            .iter()
            .enumerate()
            .flat_map(|(i, findings)| findings.iter().map(move |f| (Scope::Division(i), f)));
        template
            .chain(divisions)
            .filter(|(_, finding)| finding.is_conflicting())
    }

    /// Whether no declared group conflicts.
    pub fn is_consistent(&self) -> bool {
        self.conflicts().next().is_none()
    }
}

/// Checks each declared group against the analysed conflict graph.
pub fn reconcile(declared: &[SharedAddress], analysis: &VenueSharing) -> Vec<GroupFinding> {
    check_groups(declared, analysis.graph())
}

/// Checks each declared group against `graph`.
pub fn check_groups(declared: &[SharedAddress], graph: &ConflictGraph) -> Vec<GroupFinding> {
    declared
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let pairs = graph.conflicting_pairs(group);
            let status = if pairs.is_empty() {
                GroupStatus::Consistent
            } else {
                debug!(index, conflicts = pairs.len(), "declared group conflicts");
                GroupStatus::Conflicting { pairs }
            };
            GroupFinding {
                index,
                group: group.clone(),
                status,
            }
        })
        .collect()
}

/// Reconciles template-wide and per-division groups.
pub fn reconcile_template(template: &Template, analyzer: &VenueSharingAnalyzer) -> TemplateReport {
    let template_graph = analyzer.template_graph(template);
    let divisions = template
        .divisions
        .iter()
        .map(|division| reconcile(&division.shared_addresses, &analyzer.analyze(division)))
        .collect();

    TemplateReport {
        template: check_groups(&template.shared_addresses, &template_graph),
        divisions,
    }
}

/// First suggested group not contained in any single declared group.
///
/// Singleton suggestions count: a solo venue is a declaration too. Returns
/// `None` when every suggestion is already reflected.
pub fn suggest_next_group(
    declared: &[SharedAddress],
    suggested: &[SharedAddress],
) -> Option<SharedAddress> {
    suggested
        .iter()
        .find(|s| !is_covered(declared, s))
        .cloned()
}

fn is_covered(declared: &[SharedAddress], group: &SharedAddress) -> bool {
    declared.iter().any(|d| group.is_subset(d))
}

/// Adds a declared group to a division.
///
/// # Errors
/// `OverlappingAddressGroup` if a member already belongs to a group.
pub fn declare_group(division: &Division, group: SharedAddress) -> Result<Division> {
    let mut next = division.clone();
    push_exclusive(&mut next.shared_addresses, group)?;
    Ok(next)
}

/// Adds a template-wide declared group.
pub fn declare_template_group(template: &Template, group: SharedAddress) -> Result<Template> {
    let mut next = template.clone();
    push_exclusive(&mut next.shared_addresses, group)?;
    Ok(next)
}

/// Removes the declared group at `index` from a division.
pub fn remove_group(division: &Division, index: usize) -> Result<Division> {
    let mut next = division.clone();
    remove_exclusive(&mut next.shared_addresses, index)?;
    Ok(next)
}

/// Removes the template-wide group at `index`.
pub fn remove_template_group(template: &Template, index: usize) -> Result<Template> {
    let mut next = template.clone();
    remove_exclusive(&mut next.shared_addresses, index)?;
    Ok(next)
}

/// Declares the next suggestion for `division` that can be declared as is.
///
/// Suggestions overlapping a declared group they are not contained in are
/// skipped; they need a manual edit first. `Ok(None)` when no suggestion is
/// left to declare.
pub fn accept_suggestion(division: &Division, analysis: &VenueSharing) -> Result<Option<Division>> {
    let declared = &division.shared_addresses;
    let next = analysis.groups().iter().find(|s| {
        !is_covered(declared, s) && declared.iter().all(|d| d.first_shared(s).is_none())
    });
    match next {
        Some(group) => {
            debug!(members = group.len(), "suggestion accepted");
            declare_group(division, group.clone()).map(Some)
        }
        None => Ok(None),
    }
}

fn push_exclusive(groups: &mut Vec<SharedAddress>, group: SharedAddress) -> Result<()> {
    if let Some(mnemonic) = groups.iter().find_map(|g| g.first_shared(&group)) {
        return Err(TemplateError::OverlappingAddressGroup {
            mnemonic: mnemonic.clone(),
        });
    }
    groups.push(group);
    Ok(())
}

fn remove_exclusive(groups: &mut Vec<SharedAddress>, index: usize) -> Result<()> {
    if index >= groups.len() {
        return Err(TemplateError::out_of_range(
            Collection::AddressGroups,
            index,
            groups.len(),
        ));
    }
    groups.remove(index);
    Ok(())
}
