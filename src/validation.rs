//! Structural validation for fixture templates.
//!
//! Fixtures and weeks validate themselves on construction and
//! deserialization. This module checks the cross-cutting rules of a whole
//! template, typically one just loaded from storage. Detects:
//! - Mnemonics declared in more than one shared-address group of a scope
//! - Group members that never appear in the schedule the group applies to
//! - Divisions whose week counts differ
//!
//! All problems are collected, not just the first. Uneven week counts are
//! warnings: divisions of different sizes are legitimate, so they never
//! fail validation on their own.

use std::collections::{BTreeSet, HashSet};

use crate::models::{Mnemonic, SharedAddress, Template};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A mnemonic belongs to two groups of the same division (or two
    /// template-wide groups).
    OverlappingGroup,
    /// A group names a mnemonic absent from the schedule it applies to.
    UnknownGroupMember,
    /// Divisions do not all have the same number of weeks (warning).
    UnevenWeekCount,
}

impl ValidationErrorKind {
    /// Whether this kind is reported without failing validation.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::UnevenWeekCount)
    }
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this is a warning rather than a structural error.
    #[inline]
    pub fn is_warning(&self) -> bool {
        self.kind.is_warning()
    }
}

/// Validates a template, failing only on structural errors.
///
/// # Returns
/// `Ok(())` if no error-level problem is found (warnings are dropped),
/// `Err(errors)` with every error-level issue otherwise.
pub fn validate_template(template: &Template) -> ValidationResult {
    let errors: Vec<ValidationError> = check_template(template)
        .into_iter()
        .filter(|e| !e.is_warning())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Every problem found in a template, warnings included.
///
/// Checks:
/// 1. Division groups are mutually exclusive within each division
/// 2. Template-wide groups are mutually exclusive
/// 3. Division group members appear in that division's weeks
/// 4. Template group members appear in at least one division
/// 5. Every division has as many weeks as the first (warning)
pub fn check_template(template: &Template) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (d, division) in template.divisions.iter().enumerate() {
        let scope = format!("division {d}");
        check_exclusive(&division.shared_addresses, &scope, &mut errors);
        check_known(&division.shared_addresses, &division.mnemonics(), &scope, &mut errors);
    }

    check_exclusive(&template.shared_addresses, "template", &mut errors);
    check_known(
        &template.shared_addresses,
        &template.mnemonics(),
        "template",
        &mut errors,
    );

    if let Some(first) = template.divisions.first() {
        let expected = first.week_count();
        for (d, division) in template.divisions.iter().enumerate().skip(1) {
            if division.week_count() != expected {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnevenWeekCount,
                    format!(
                        "Division {d} has {} weeks, division 0 has {expected}",
                        division.week_count()
                    ),
                ));
            }
        }
    }

    errors
}

fn check_exclusive(groups: &[SharedAddress], scope: &str, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&Mnemonic> = HashSet::new();
    for group in groups {
        for m in group {
            if !seen.insert(m) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingGroup,
                    format!("Mnemonic '{m}' is in more than one {scope} group"),
                ));
            }
        }
    }
}

fn check_known(
    groups: &[SharedAddress],
    known: &BTreeSet<Mnemonic>,
    scope: &str,
    errors: &mut Vec<ValidationError>,
) {
    for m in groups.iter().flatten() {
        if !known.contains(m) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownGroupMember,
                format!("{scope} group references unknown mnemonic '{m}'"),
            ));
        }
    }
}
