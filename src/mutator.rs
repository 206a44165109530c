//! Schedule mutation.
//!
//! Pure edit operations over fixture-template values. Every function takes
//! its input by reference and returns a new value; the input is never
//! modified, so an editor can keep the previous schedule for undo and
//! comparison.
//!
//! # Operations
//!
//! | Level | Add | Remove | Reorder | Edit |
//! |-------|-----|--------|---------|------|
//! | Fixture (in a week) | `add_fixture` | `remove_fixture` | `move_fixture` | `replace_fixture` |
//! | Week (in a division) | `add_date` | `remove_date` | `move_date` | |
//! | Division (in a template) | `add_division` | `remove_division` | `move_division` | |
//!
//! Moves swap an element with its neighbor. Moving the first element
//! earlier or the last element later is a no-op; use [`can_move`] to
//! disable those actions up front.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Collection, Result, TemplateError};
use crate::models::{Division, Fixture, FixtureDate, Template};

/// Direction of a reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards index 0.
    Earlier,
    /// Towards the end.
    Later,
}

/// Whether the element at `index` of a `len`-long sequence can move.
///
/// `false` at the boundaries and for indices past the end.
pub fn can_move(len: usize, index: usize, direction: Direction) -> bool {
    match direction {
        Direction::Earlier => index > 0 && index < len,
        Direction::Later => index + 1 < len,
    }
}

/// Appends `fixture` to a copy of `date`.
///
/// # Errors
/// `DuplicateMnemonicInWeek` if a participant already plays that week.
pub fn add_fixture(date: &FixtureDate, fixture: Fixture) -> Result<FixtureDate> {
    let mut fixtures = date.fixtures().to_vec();
    fixtures.push(fixture);
    FixtureDate::new(fixtures)
}

/// Removes the fixture at `index`.
pub fn remove_fixture(date: &FixtureDate, index: usize) -> Result<FixtureDate> {
    let fixtures = remove_at(date.fixtures(), index, Collection::Fixtures)?;
    FixtureDate::new(fixtures)
}

/// Replaces the fixture at `index`, re-checking the week.
pub fn replace_fixture(date: &FixtureDate, index: usize, fixture: Fixture) -> Result<FixtureDate> {
    let mut fixtures = date.fixtures().to_vec();
    let len = fixtures.len();
    let slot = fixtures
        .get_mut(index)
        .ok_or_else(|| TemplateError::out_of_range(Collection::Fixtures, index, len))?;
    *slot = fixture;
    FixtureDate::new(fixtures)
}

/// Swaps the fixture at `index` with its neighbor.
pub fn move_fixture(date: &FixtureDate, index: usize, direction: Direction) -> Result<FixtureDate> {
    let fixtures = swap_neighbor(date.fixtures(), index, direction, Collection::Fixtures)?;
    FixtureDate::new(fixtures)
}

/// Appends an empty week.
pub fn add_date(division: &Division) -> Division {
    let mut next = division.clone();
    next.dates.push(FixtureDate::empty());
    next
}

/// Removes the week at `index`.
pub fn remove_date(division: &Division, index: usize) -> Result<Division> {
    Ok(Division {
        shared_addresses: division.shared_addresses.clone(),
        dates: remove_at(&division.dates, index, Collection::Dates)?,
    })
}

/// Swaps the week at `index` with its neighbor.
pub fn move_date(division: &Division, index: usize, direction: Direction) -> Result<Division> {
    Ok(Division {
        shared_addresses: division.shared_addresses.clone(),
        dates: swap_neighbor(&division.dates, index, direction, Collection::Dates)?,
    })
}

/// Appends an empty division.
pub fn add_division(template: &Template) -> Template {
    let mut next = template.clone();
    next.divisions.push(Division::new());
    next
}

/// Removes the division at `index`.
pub fn remove_division(template: &Template, index: usize) -> Result<Template> {
    Ok(Template {
        shared_addresses: template.shared_addresses.clone(),
        divisions: remove_at(&template.divisions, index, Collection::Divisions)?,
    })
}

/// Swaps the division at `index` with its neighbor.
pub fn move_division(template: &Template, index: usize, direction: Direction) -> Result<Template> {
    Ok(Template {
        shared_addresses: template.shared_addresses.clone(),
        divisions: swap_neighbor(&template.divisions, index, direction, Collection::Divisions)?,
    })
}

fn remove_at<T: Clone>(items: &[T], index: usize, collection: Collection) -> Result<Vec<T>> {
    if index >= items.len() {
        return Err(TemplateError::out_of_range(collection, index, items.len()));
    }
    let mut out = items.to_vec();
    out.remove(index);
    debug!(%collection, index, remaining = out.len(), "removed element");
    Ok(out)
}

fn swap_neighbor<T: Clone>(
    items: &[T],
    index: usize,
    direction: Direction,
    collection: Collection,
) -> Result<Vec<T>> {
    if index >= items.len() {
        return Err(TemplateError::out_of_range(collection, index, items.len()));
    }
    let mut out = items.to_vec();
    if !can_move(items.len(), index, direction) {
        debug!(%collection, index, ?direction, "move at boundary ignored");
        return Ok(out);
    }
    let neighbor = match direction {
        Direction::Earlier => index - 1,
        Direction::Later => index + 1,
    };
    out.swap(index, neighbor);
    Ok(out)
}
