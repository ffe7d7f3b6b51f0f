//! City and tour representations.

use rand::seq::SliceRandom;
use rand::Rng;

/// A city on the integer plane.
///
/// Cities are immutable once loaded and are identified by their
/// position in the city list, not by any field of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: i32,
    pub y: i32,
}

/// A closed visiting order: a permutation of city indices `0..n`.
pub type Tour = Vec<usize>;

/// The tour `[0, 1, .., n-1]`.
pub fn identity_tour(n: usize) -> Tour {
    (0..n).collect()
}

/// A uniformly shuffled tour over `n` cities.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour = identity_tour(n);
    tour.shuffle(rng);
    tour
}

/// Whether `tour` is a permutation of `0..tour.len()`.
///
/// Every index must appear exactly once; this is the invariant the
/// annealing loop preserves move by move.
pub fn is_permutation(tour: &[usize]) -> bool {
    let mut seen = vec![false; tour.len()];
    for &idx in tour {
        if idx >= tour.len() || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity_tour() {
        assert_eq!(identity_tour(4), vec![0, 1, 2, 3]);
        assert!(identity_tour(0).is_empty());
    }

    #[test]
    fn test_is_permutation_accepts_valid() {
        assert!(is_permutation(&[0]));
        assert!(is_permutation(&[2, 0, 1, 3]));
    }

    #[test]
    fn test_is_permutation_rejects_duplicate() {
        assert!(!is_permutation(&[0, 1, 1, 3]));
    }

    #[test]
    fn test_is_permutation_rejects_out_of_range() {
        assert!(!is_permutation(&[0, 1, 4]));
    }

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in 1..20 {
            assert!(is_permutation(&random_tour(n, &mut rng)));
        }
    }

    #[test]
    fn test_random_tour_deterministic_under_seed() {
        let a = random_tour(10, &mut SmallRng::seed_from_u64(7));
        let b = random_tour(10, &mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
