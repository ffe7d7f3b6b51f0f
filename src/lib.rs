//! Euclidean TSP approximation via simulated annealing.
//!
//! Given a list of 2-D integer-coordinate cities, find a closed
//! visiting order of low total travel distance with a fixed-budget
//! simulated-annealing walk over single-transposition neighbors.
//!
//! - [`tour`]: city and tour types plus pure cost evaluation.
//! - [`sa`]: the annealing search (configuration, runner, result).
//! - [`tsplib`]: loader for the TSPLIB node-coordinate subset.
//!
//! # Examples
//!
//! ```
//! use tsp_anneal::sa::{AnnealConfig, AnnealRunner};
//! use tsp_anneal::tour::{identity_tour, City};
//!
//! let cities = vec![
//!     City { x: 0, y: 0 },
//!     City { x: 0, y: 10 },
//!     City { x: 10, y: 10 },
//!     City { x: 10, y: 0 },
//! ];
//! let config = AnnealConfig::default().with_seed(42);
//! let result = AnnealRunner::run(&cities, identity_tour(cities.len()), &config)?;
//! assert!(result.cost >= 0.0);
//! # Ok::<(), tsp_anneal::Error>(())
//! ```

pub mod error;
pub mod sa;
pub mod tour;
pub mod tsplib;

pub use error::Error;
