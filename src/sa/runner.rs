//! Annealing execution loop.

use super::config::AnnealConfig;
use crate::error::Error;
use crate::tour::{is_permutation, tour_cost, City, Tour};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The returned tour: the incumbent best, or the last accepted
    /// tour when [`AnnealConfig::return_best`] is `false`.
    pub tour: Tour,

    /// Cost of the returned tour.
    pub cost: f64,

    /// Number of iterations actually run.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the annealing search.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search from `initial` over `cities`.
    ///
    /// `initial` must be a permutation of `0..cities.len()` and there
    /// must be at least two cities; neighbor generation is a
    /// transposition and needs two distinct positions to swap.
    pub fn run(
        cities: &[City],
        initial: Tour,
        config: &AnnealConfig,
    ) -> Result<AnnealResult, Error> {
        Self::run_with_cancel(cities, initial, config, None)
    }

    /// Runs the search with an optional cancellation token, checked
    /// once per iteration. Cancellation never alters the acceptance
    /// math of iterations already run.
    pub fn run_with_cancel(
        cities: &[City],
        initial: Tour,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult, Error> {
        config.validate().map_err(Error::InvalidInput)?;
        if cities.len() < 2 {
            return Err(Error::InvalidInput(format!(
                "annealing needs at least 2 cities, got {}",
                cities.len()
            )));
        }
        if !is_permutation(&initial) {
            return Err(Error::InvalidInput(
                "initial tour is not a permutation of the city indices".into(),
            ));
        }

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        // tour_cost re-checks the length match against the city list.
        let mut current = initial;
        let mut current_cost = tour_cost(&current, cities)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let n = current.len();

        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // One transposition: i uniform, j uniform among the rest.
            let mut candidate = current.clone();
            let i = rng.random_range(0..n);
            let j = (i + 1 + rng.random_range(0..n - 1)) % n;
            candidate.swap(i, j);
            debug_assert!(is_permutation(&candidate));

            let candidate_cost = tour_cost(&candidate, cities)?;
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < (-delta / temperature).exp()
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            temperature *= config.cooling_rate;
            iterations += 1;
        }

        log::debug!(
            "annealing stopped after {iterations} iterations: \
             {accepted_moves} accepted ({improving_moves} improving), \
             best cost {best_cost:.3}, final temperature {temperature:.6}"
        );

        let (tour, cost) = if config.return_best {
            (best, best_cost)
        } else {
            (current, current_cost)
        };

        Ok(AnnealResult {
            tour,
            cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
        })
    }
}
