//! Evolutionary optimizer for closed-tour orderings.
//!
//! Given a fixed set of points, searches for the visiting order with the
//! shortest closed loop. Each generation runs a fixed pipeline:
//!
//! 1. **Selection**: rank by fitness, keep the top fraction
//! 2. **Crossover**: pair best with worst survivors, append one child each
//! 3. **Mutation**: swap two genes in randomly chosen chromosomes
//!
//! # Key Types
//!
//! - [`Gene`]: A fixed point with a stable id
//! - [`Chromosome`]: A tour over the genes plus its cached fitness
//! - [`TourConfig`]: Tunables (population size, rates, seed)
//! - [`TourRunner`]: Drives the pipeline across generations
//! - [`TourResult`]: Best tour found and per-generation history
//!
//! # Submodules
//!
//! - [`fitness`]: Distance and inverse-length fitness
//! - [`init`]: Gene layout and population seeding
//! - [`selection`]: Truncation selection
//! - [`operators`]: Substitution crossover and swap mutation

mod config;
pub mod fitness;
pub mod init;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::TourConfig;
pub use runner::{evolve_generation, TourResult, TourRunner};
pub use types::{report, Chromosome, Gene, Population};
