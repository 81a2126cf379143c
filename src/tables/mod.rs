//! Record types and pure generators for the four bronze tables.
//!
//! Every generator is a pure function of the random stream and, for the
//! dependent tables, a non-empty parent slice. Field order on the record
//! structs defines the CSV column order.

pub mod rentals;
pub mod repairs;
pub mod staff;
pub mod tools;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Branch locations shared by the tool catalog and the attendance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Prague,
    Brno,
    Ostrava,
}

pub(crate) const LOCATIONS: [Location; 3] = [Location::Prague, Location::Brno, Location::Ostrava];

/// Uniform draw from a fixed, non-empty choice list.
pub(crate) fn pick<T: Copy>(rng: &mut impl Rng, choices: &[T]) -> T {
    choices[rng.random_range(0..choices.len())]
}
