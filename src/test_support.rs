//! Shared builders for unit tests.
//!
//! Weeks are written as comma-separated fixtures, `"1v8"` for a pairing
//! and a lone mnemonic (`"A"`) for a bye.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Division, Fixture, FixtureDate};

/// Eight mnemonics, seven weeks: a complete single round robin.
pub(crate) const ROUND_ROBIN_8: [&str; 7] = [
    "1v8,2v7,3v6,4v5",
    "8v5,6v4,7v3,1v2",
    "2v8,3v1,4v7,5v6",
    "8v6,7v5,1v4,2v3",
    "3v8,4v2,5v1,6v7",
    "8v7,1v6,2v5,3v4",
    "4v8,5v3,6v2,7v1",
];

pub(crate) fn week(spec: &str) -> FixtureDate {
    let fixtures = spec
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.split_once('v') {
            Some((home, away)) => Fixture::new(home.trim(), away.trim()).unwrap(),
            None => Fixture::bye(s).unwrap(),
        })
        .collect();
    FixtureDate::new(fixtures).unwrap()
}

pub(crate) fn division(weeks: &[&str]) -> Division {
    weeks
        .iter()
        .fold(Division::new(), |div, spec| div.with_date(week(spec)))
}

/// Random well-formed division: each week pairs a shuffled roster, leaving
/// an odd one out on a bye and skipping some fixtures.
pub(crate) fn random_division<R: Rng>(rng: &mut R, teams: usize, weeks: usize) -> Division {
    let roster: Vec<String> = (1..=teams).map(|i| i.to_string()).collect();
    let mut div = Division::new();
    for _ in 0..weeks {
        let mut order = roster.clone();
        order.shuffle(rng);
        let mut fixtures = Vec::new();
        for pair in order.chunks(2) {
            if rng.random_bool(0.2) {
                continue;
            }
            let fixture = match pair {
                [home, away] => Fixture::new(home.as_str(), away.as_str()).unwrap(),
                [home] => Fixture::bye(home.as_str()).unwrap(),
                _ => unreachable!(),
            };
            fixtures.push(fixture);
        }
        div = div.with_date(FixtureDate::new(fixtures).unwrap());
    }
    div
}
