//! Template composition.
//!
//! Whole-template operations layered on the mutator: copying a division's
//! week structure into another division, replicating divisions, generating
//! round-robin schedules, and labelling weeks with calendar dates.
//!
//! # Round-robin generation
//!
//! [`round_robin`] builds a single round robin with Berger tables: the
//! last team stays fixed while the others rotate by `n/2` positions each
//! round, and the fixed team alternates between home and away. With an odd
//! number of teams a phantom team completes the table and its opponent
//! gets a bye.
//!
//! # Reference
//! Berger (1899), "Schach-Jahrbuch für 1899/1900", round-robin pairing tables

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::{Collection, Result, TemplateError};
use crate::models::{Division, Fixture, FixtureDate, Mnemonic, Template};

/// Replaces the weeks of division `dest` with a deep copy of the weeks of
/// division `source`.
///
/// The destination's shared addresses are left untouched: structure is
/// copied, venue assignment is not.
///
/// # Errors
/// `IndexOutOfRange` if either index is invalid or the two are equal.
pub fn copy_division_structure(template: &Template, source: usize, dest: usize) -> Result<Template> {
    let len = template.divisions.len();
    if source >= len {
        return Err(TemplateError::out_of_range(Collection::Divisions, source, len));
    }
    if dest >= len || dest == source {
        return Err(TemplateError::out_of_range(Collection::Divisions, dest, len));
    }

    let mut next = template.clone();
    next.divisions[dest].dates = template.divisions[source].dates.clone();
    debug!(source, dest, weeks = next.divisions[dest].week_count(), "division structure copied");
    Ok(next)
}

/// Appends a deep copy of the division at `index` (weeks and groups).
pub fn replicate_division(template: &Template, index: usize) -> Result<Template> {
    let division = template.division(index)?.clone();
    let mut next = template.clone();
    next.divisions.push(division);
    Ok(next)
}

/// Calendar date shown for week `week_index` (0-based) of a schedule
/// starting on `base`.
///
/// `None` only if the result falls outside the supported calendar range.
pub fn render_display_date(base: NaiveDate, week_index: usize) -> Option<NaiveDate> {
    let days = u64::try_from(week_index).ok()?.checked_mul(7)?;
    base.checked_add_days(Days::new(days))
}

/// Display dates for every week of `division`, in schedule order.
pub fn division_display_dates(division: &Division, base: NaiveDate) -> Vec<NaiveDate> {
    (0..division.week_count())
        .map_while(|week| render_display_date(base, week))
        .collect()
}

/// Single round robin for mnemonics `"1"..="n"`.
///
/// Produces `n - 1` weeks for even `n` and `n` weeks for odd `n` (one bye
/// per week). `n == 0` yields an empty division.
pub fn round_robin(n: usize) -> Result<Division> {
    let mut division = Division::new();
    if n == 0 {
        return Ok(division);
    }

    // `rotating` is always odd; a phantom makes the table even for odd `n`.
    let phantom = n % 2 == 1;
    let rotating = if phantom { n } else { n - 1 };
    let half = rotating / 2 + 1;
    let label = |team: usize| Mnemonic::new(team.to_string());

    let mut start = 0;
    for round in 0..rotating {
        let team_at = |slot: usize| add_mod(start, slot, rotating) + 1;

        let mut fixtures = Vec::with_capacity(half);
        let head = label(team_at(0));
        let fixed = if !phantom {
            let tail = label(n);
            if round % 2 == 0 {
                Fixture::new(head, tail)?
            } else {
                Fixture::new(tail, head)?
            }
        } else {
            Fixture::bye(head)?
        };
        fixtures.push(fixed);

        for slot in 1..half {
            fixtures.push(Fixture::new(
                label(team_at(slot)),
                label(team_at(rotating - slot)),
            )?);
        }
        division.dates.push(FixtureDate::new(fixtures)?);
        start = add_mod(start, half % rotating, rotating);
    }

    debug!(teams = n, weeks = division.week_count(), "round robin generated");
    Ok(division)
}

/// `(a + b) % m` for `a, b < m`, without overflow.
fn add_mod(a: usize, b: usize, m: usize) -> usize {
    if a >= m - b {
        a - (m - b)
    } else {
        a + b
    }
}
