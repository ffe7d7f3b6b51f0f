//! Cities, tours, and tour cost evaluation.
//!
//! A tour is a permutation of city indices representing a closed route:
//! after the last city the path returns to the first. Cost evaluation
//! is pure; every algorithmic decision lives in [`crate::sa`].

mod cost;
mod types;

pub use cost::{distance, tour_cost};
pub use types::{identity_tour, is_permutation, random_tour, City, Tour};
