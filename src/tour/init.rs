//! Population initialization.
//!
//! One gene set is drawn per run, and every initial chromosome starts from
//! that same tour. Diversity comes later from mutation and crossover.

use super::types::{Chromosome, Gene, Population};
use crate::error::{Result, TourError};
use log::debug;
use rand::Rng;
use std::sync::Arc;

/// Draws `count` genes with ids `0..count` and coordinates uniform in
/// `[0, location_range)`.
pub fn random_genes<R: Rng>(count: usize, location_range: f64, rng: &mut R) -> Vec<Gene> {
    (0..count)
        .map(|id| {
            let x = rng.random::<f64>() * location_range;
            let y = rng.random::<f64>() * location_range;
            Gene::new(id, x, y)
        })
        .collect()
}

/// Builds `population_size` chromosomes over a caller-supplied gene set.
///
/// All chromosomes share one gene allocation. Fitness is evaluated once and
/// copied, since every member has the same order.
///
/// # Errors
/// Propagates fitness errors for degenerate gene sets.
pub fn seed_population(
    genes: Vec<Gene>,
    population_size: usize,
    location_range: f64,
) -> Result<Population> {
    let founder = Chromosome::from_shared(Arc::new(genes), location_range)?;
    debug!(
        "seeded population: size={}, genes={}, fitness={:.6}",
        population_size,
        founder.len(),
        founder.fitness()
    );
    Ok(vec![founder; population_size])
}

/// Generates a random gene set and seeds a population over it.
///
/// # Errors
/// - [`TourError::InvalidConfiguration`] if `population_size` is zero,
///   `genes_count` is below two, or `location_range` is not a positive
///   finite number.
/// - Fitness errors if every drawn gene lands on the same point.
pub fn init_population<R: Rng>(
    population_size: usize,
    genes_count: usize,
    location_range: f64,
    rng: &mut R,
) -> Result<Population> {
    if population_size == 0 {
        return Err(TourError::InvalidConfiguration(
            "population_size must be at least 1".into(),
        ));
    }
    if genes_count < 2 {
        return Err(TourError::InvalidConfiguration(
            "dna_size must be at least 2".into(),
        ));
    }
    if !(location_range.is_finite() && location_range > 0.0) {
        return Err(TourError::InvalidConfiguration(
            "location_range must be positive and finite".into(),
        ));
    }

    let genes = random_genes(genes_count, location_range, rng);
    seed_population(genes, population_size, location_range)
}
