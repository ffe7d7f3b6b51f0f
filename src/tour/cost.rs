//! Euclidean distance and cyclic tour cost.

use super::types::City;
use crate::error::Error;

/// Straight-line Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Total length of `tour` over `cities`, including the closing edge
/// from the last city back to the first.
///
/// A length-1 tour costs exactly `0.0`. Fails with
/// [`Error::InvalidInput`] on an empty tour, a tour/city-list length
/// mismatch, or an out-of-range index.
pub fn tour_cost(tour: &[usize], cities: &[City]) -> Result<f64, Error> {
    if tour.is_empty() {
        return Err(Error::InvalidInput("tour is empty".into()));
    }
    if tour.len() != cities.len() {
        return Err(Error::InvalidInput(format!(
            "tour length {} does not match city count {}",
            tour.len(),
            cities.len()
        )));
    }
    if let Some(&bad) = tour.iter().find(|&&idx| idx >= cities.len()) {
        return Err(Error::InvalidInput(format!(
            "tour index {bad} out of range for {} cities",
            cities.len()
        )));
    }

    let mut total = 0.0;
    for pair in tour.windows(2) {
        total += distance(&cities[pair[0]], &cities[pair[1]]);
    }
    total += distance(&cities[tour[tour.len() - 1]], &cities[tour[0]]);
    Ok(total)
}
