//! Crossover and mutation operators over tour chromosomes.
//!
//! # Crossover
//!
//! - [`crossover`]: pairs the i-th best survivor with the i-th worst and
//!   appends one child per pair
//! - [`breed_child`]: copies parent1 and substitutes at most one gene from
//!   parent2 into the last slot
//!
//! Children are not validated as permutations. When parent1 already holds
//! every id found in parent2 the child is an exact copy of parent1.
//!
//! # Mutation
//!
//! - [`mutate`]: per-chromosome coin flip, then one [`swap_genes`]
//! - [`swap_genes`]: exchange two uniformly drawn positions (with replacement)
//!
//! Mutation never recomputes fitness. The cached value stays stale until
//! the next evaluation.

use super::types::{Chromosome, Population};
use crate::error::Result;
use log::trace;
use rand::Rng;
use std::collections::HashSet;

// ============================================================================
// Crossover
// ============================================================================

/// Appends one child for each of the `floor(M / 2)` parent pairs.
///
/// `population` is expected to be ranked best-first (see
/// [`select`](super::selection::select)). For `i in 0..M/2` the child is bred
/// from `population[i]` and `population[M - 1 - i]`, where `M` is the length
/// before any child is appended. Existing members are never removed or
/// replaced, so the population grows to `M + floor(M / 2)`.
///
/// Returns the number of children appended.
///
/// # Errors
/// Propagates fitness errors from evaluating a child. Children appended
/// before the failing pair stay in the population.
pub fn crossover(population: &mut Population, location_range: f64) -> Result<usize> {
    let m = population.len();
    let pairs = m / 2;
    population.reserve(pairs);

    for i in 0..pairs {
        let child = breed_child(&population[i], &population[m - 1 - i], location_range)?;
        population.push(child);
    }

    trace!("crossover: {m} parents -> {pairs} children");
    Ok(pairs)
}

/// Builds a single child from two parents.
///
/// 1. Copy parent1's gene sequence into a new allocation
/// 2. Find the first gene of parent2 whose id is absent from the copy
/// 3. If found, overwrite the copy's last position with it (one substitution)
/// 4. Evaluate fitness for the result
///
/// # Errors
/// Propagates fitness errors for degenerate sequences.
pub fn breed_child(
    parent1: &Chromosome,
    parent2: &Chromosome,
    location_range: f64,
) -> Result<Chromosome> {
    let mut genes = parent1.genes().to_vec();
    let present: HashSet<usize> = genes.iter().map(|g| g.id).collect();

    if let Some(donor) = parent2.genes().iter().find(|g| !present.contains(&g.id)) {
        if let Some(last) = genes.last_mut() {
            *last = *donor;
        }
    }

    Chromosome::new(genes, location_range)
}

// ============================================================================
// Mutation
// ============================================================================

/// Applies [`swap_genes`] to each chromosome with probability
/// `mutation_chance`.
///
/// A chance of `0.0` never mutates and `1.0` always does. Returns the number
/// of chromosomes that were selected for mutation.
pub fn mutate<R: Rng>(population: &mut [Chromosome], mutation_chance: f64, rng: &mut R) -> usize {
    let mut events = 0;
    for chromosome in population.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_chance {
            swap_genes(chromosome, rng);
            events += 1;
        }
    }
    trace!("mutation: {events}/{} chromosomes", population.len());
    events
}

/// Swaps the genes at two independently drawn positions.
///
/// The positions may coincide, in which case nothing changes. Sequences
/// shorter than two genes are left untouched. Fitness is not updated.
pub fn swap_genes<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let n = chromosome.len();
    if n < 2 {
        return;
    }
    let j = rng.random_range(0..n);
    let k = rng.random_range(0..n);
    if j != k {
        chromosome.genes_mut().swap(j, k);
    }
}

// ============================================================================
// Tests
// ============================================================================
