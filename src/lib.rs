//! Evolutionary tour-ordering optimizer.
//!
//! Finds a short closed loop through a fixed set of 2D points using a
//! population-based search:
//!
//! - **Fitness**: `location_range² / tour_length`, higher is better
//! - **Selection**: stable truncation to the best fraction
//! - **Crossover**: single-gene substitution into a copy of the better parent
//! - **Mutation**: random two-position swap
//!
//! All randomness flows through an explicitly passed RNG; see
//! [`random::create_rng`] for reproducible runs.
//!
//! # Example
//!
//! ```
//! use u_tour::tour::{TourConfig, TourRunner};
//!
//! let config = TourConfig::fast()
//!     .with_population_size(50)
//!     .with_generation_count(10)
//!     .with_seed(42);
//! let result = TourRunner::run(&config).unwrap();
//! assert!(result.best.is_permutation_of(config.dna_size));
//! ```

pub mod error;
pub mod random;
pub mod tour;

pub use error::{Result, TourError};
