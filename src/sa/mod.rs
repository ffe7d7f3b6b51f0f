//! Simulated Annealing search over tours.
//!
//! A single-solution trajectory metaheuristic: each iteration perturbs
//! the current tour by one random transposition and accepts the result
//! per the Metropolis criterion under a geometrically decaying
//! temperature. Worsening moves are accepted with probability
//! `exp(-delta / T)`, letting the walk escape local minima early on.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{AnnealConfig, COOLING_RATE, INITIAL_TEMPERATURE, MAX_ITERATIONS};
pub use runner::{AnnealResult, AnnealRunner};
