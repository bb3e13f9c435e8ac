//! Generation driver.
//!
//! [`evolve_generation`] runs one generation body:
//! selection → crossover → mutation.
//!
//! [`TourRunner`] seeds a population and repeats that body for
//! `generation_count` generations, re-evaluating fitness after each one so
//! values left stale by mutation are refreshed before the next selection.

use super::config::TourConfig;
use super::init::{init_population, seed_population};
use super::operators::{crossover, mutate};
use super::selection::select;
use super::types::{Chromosome, Gene, Population};
use crate::error::{Result, TourError};
use crate::random::rng_from_seed;
use log::{debug, info, trace, warn};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a tour optimization run.
#[derive(Debug, Clone)]
pub struct TourResult {
    /// The best chromosome seen during the entire run.
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped because selection left no survivors.
    pub exhausted: bool,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,

    /// The final population, with fresh fitness values.
    pub population: Population,
}

/// Runs one generation body on `population`.
///
/// The population is ranked and truncated, children are appended, and
/// mutation is applied to survivors and children alike. Fitness of mutated
/// chromosomes is left stale.
///
/// # Errors
/// Propagates fitness errors from evaluating crossover children.
pub fn evolve_generation<R: Rng>(
    population: Population,
    config: &TourConfig,
    rng: &mut R,
) -> Result<Population> {
    let mut population = select(population, config.selection_size);
    let selected = population.len();
    let bred = crossover(&mut population, config.location_range)?;
    let mutated = mutate(&mut population, config.mutation_chance, rng);
    trace!("generation: selected={selected}, bred={bred}, mutated={mutated}");
    Ok(population)
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tour::tour::{TourConfig, TourRunner};
///
/// let config = TourConfig::fast()
///     .with_population_size(30)
///     .with_generation_count(5)
///     .with_seed(42);
/// let result = TourRunner::run(&config).unwrap();
/// assert!(result.best_fitness > 0.0);
/// ```
pub struct TourRunner;

impl TourRunner {
    /// Runs the optimizer over a randomly drawn layout of `dna_size` genes.
    ///
    /// # Errors
    /// Returns [`TourError::InvalidConfiguration`] for a bad configuration,
    /// or a fitness error for a degenerate layout.
    pub fn run(config: &TourConfig) -> Result<TourResult> {
        Self::run_with_cancel(config, None)
    }

    /// Runs the optimizer with an optional cancellation flag.
    ///
    /// When the flag is set, the run stops before the next generation and
    /// returns the best solution found so far.
    ///
    /// # Errors
    /// See [`run`](Self::run).
    pub fn run_with_cancel(
        config: &TourConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TourResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let population = init_population(
            config.population_size,
            config.dna_size,
            config.location_range,
            &mut rng,
        )?;
        drive(population, config, &mut rng, cancel)
    }

    /// Runs the optimizer over a fixed, caller-supplied layout.
    ///
    /// `config.dna_size` is ignored in favour of `genes.len()`.
    ///
    /// # Errors
    /// See [`run`](Self::run).
    pub fn run_with_genes(genes: Vec<Gene>, config: &TourConfig) -> Result<TourResult> {
        let config = config.clone().with_dna_size(genes.len());
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let population = seed_population(genes, config.population_size, config.location_range)?;
        drive(population, &config, &mut rng, None)
    }
}

fn drive<R: Rng>(
    mut population: Population,
    config: &TourConfig,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<TourResult> {
    let mut best = find_best(&population)
        .cloned()
        .ok_or_else(|| TourError::InvalidConfiguration("initial population is empty".into()))?;
    let mut fitness_history = Vec::with_capacity(config.generation_count + 1);
    fitness_history.push(best.fitness());

    let mut generations = 0usize;
    let mut cancelled = false;
    let mut exhausted = false;

    for gen in 0..config.generation_count {
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
        }

        population = evolve_generation(population, config, rng)?;
        if population.is_empty() {
            warn!("generation {}: selection left no survivors", gen + 1);
            exhausted = true;
            break;
        }
        evaluate_population(&mut population, config.location_range, config.parallel)?;

        if let Some(gen_best) = find_best(&population) {
            if gen_best.fitness() > best.fitness() {
                best = gen_best.clone();
            }
        }
        fitness_history.push(best.fitness());
        generations = gen + 1;

        debug!(
            "generation {}: population={}, best_fitness={:.6}",
            generations,
            population.len(),
            best.fitness()
        );
    }

    if cancelled {
        info!("run cancelled after {generations} generations, best_fitness={:.6}", best.fitness());
    } else {
        info!("run finished after {generations} generations, best_fitness={:.6}", best.fitness());
    }

    Ok(TourResult {
        best_fitness: best.fitness(),
        best,
        generations,
        cancelled,
        exhausted,
        fitness_history,
        population,
    })
}

/// Recomputes fitness for every chromosome.
#[cfg(feature = "parallel")]
fn evaluate_population(
    population: &mut [Chromosome],
    location_range: f64,
    parallel: bool,
) -> Result<()> {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter_mut()
            .try_for_each(|c| c.refresh_fitness(location_range).map(|_| ()))
    } else {
        evaluate_sequential(population, location_range)
    }
}

/// Recomputes fitness for every chromosome.
#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    population: &mut [Chromosome],
    location_range: f64,
    _parallel: bool,
) -> Result<()> {
    evaluate_sequential(population, location_range)
}

fn evaluate_sequential(population: &mut [Chromosome], location_range: f64) -> Result<()> {
    for c in population.iter_mut() {
        c.refresh_fitness(location_range)?;
    }
    Ok(())
}

/// Find the chromosome with the best (highest) fitness.
///
/// Ties resolve to the earliest chromosome.
fn find_best(population: &[Chromosome]) -> Option<&Chromosome> {
    population
        .iter()
        .reduce(|best, c| if c.fitness() > best.fitness() { c } else { best })
}

// ============================================================================
// Tests
// ============================================================================
