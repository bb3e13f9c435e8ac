//! Tour optimizer configuration.
//!
//! [`TourConfig`] holds every tunable recognized by the pipeline.

use crate::error::{Result, TourError};

/// Configuration for the tour optimizer.
///
/// # Defaults
///
/// ```
/// use u_tour::tour::TourConfig;
///
/// let config = TourConfig::default();
/// assert_eq!(config.population_size, 10_000);
/// assert_eq!(config.dna_size, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::tour::TourConfig;
///
/// let config = TourConfig::default()
///     .with_population_size(200)
///     .with_dna_size(30)
///     .with_mutation_chance(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourConfig {
    /// Exclusive upper bound for gene coordinates on both axes.
    ///
    /// Also the fitness scale: `fitness = location_range² / tour_length`.
    pub location_range: f64,

    /// Number of chromosomes created by the initializer.
    pub population_size: usize,

    /// Number of genes in the layout (and in every chromosome).
    pub dna_size: usize,

    /// Number of generations the runner drives. Zero only initializes.
    pub generation_count: usize,

    /// Per-chromosome probability of one swap mutation (0.0–1.0).
    pub mutation_chance: f64,

    /// Fraction of the population kept by selection (0.0–1.0).
    ///
    /// The survivor count is `floor(len * selection_size)`.
    pub selection_size: f64,

    /// Crossover split fraction (0.0–1.0).
    ///
    /// Recognized and validated, but the single-substitution crossover does
    /// not consult it.
    pub crossover_point: f64,

    /// Re-evaluate fitness in parallel with rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            location_range: 10_000.0,
            population_size: 10_000,
            dna_size: 200,
            generation_count: 10_000,
            mutation_chance: 0.01,
            selection_size: 0.666667,
            crossover_point: 0.5,
            parallel: false,
            seed: None,
        }
    }
}

impl TourConfig {
    /// Sets the coordinate range.
    pub fn with_location_range(mut self, range: f64) -> Self {
        self.location_range = range;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of genes.
    pub fn with_dna_size(mut self, n: usize) -> Self {
        self.dna_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the mutation chance.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection fraction.
    pub fn with_selection_size(mut self, ratio: f64) -> Self {
        self.selection_size = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover point.
    pub fn with_crossover_point(mut self, point: f64) -> Self {
        self.crossover_point = point.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs on small layouts.
    ///
    /// - Population: 100, Genes: 20, Generations: 100
    pub fn fast() -> Self {
        Self {
            population_size: 100,
            dna_size: 20,
            generation_count: 100,
            ..Self::default()
        }
    }

    /// Preset with moderate population and generation count.
    ///
    /// - Population: 1000, Genes: 50, Generations: 1000
    pub fn balanced() -> Self {
        Self {
            population_size: 1_000,
            dna_size: 50,
            generation_count: 1_000,
            ..Self::default()
        }
    }

    /// The full-size reference parameters. Same as [`Default`].
    pub fn quality() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`TourError::InvalidConfiguration`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.dna_size < 2 {
            return Err(invalid("dna_size must be at least 2"));
        }
        if !(self.location_range.is_finite() && self.location_range > 0.0) {
            return Err(invalid("location_range must be positive and finite"));
        }
        check_unit("mutation_chance", self.mutation_chance)?;
        check_unit("selection_size", self.selection_size)?;
        check_unit("crossover_point", self.crossover_point)?;
        Ok(())
    }
}

fn invalid(msg: &str) -> TourError {
    TourError::InvalidConfiguration(msg.to_string())
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TourError::InvalidConfiguration(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TourConfig::default();
        assert!((config.location_range - 10_000.0).abs() < 1e-10);
        assert_eq!(config.population_size, 10_000);
        assert_eq!(config.dna_size, 200);
        assert_eq!(config.generation_count, 10_000);
        assert!((config.mutation_chance - 0.01).abs() < 1e-10);
        assert!((config.selection_size - 0.666667).abs() < 1e-10);
        assert!((config.crossover_point - 0.5).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TourConfig::default()
            .with_location_range(100.0)
            .with_population_size(50)
            .with_dna_size(8)
            .with_generation_count(10)
            .with_mutation_chance(0.2)
            .with_selection_size(0.5)
            .with_crossover_point(0.25)
            .with_parallel(true)
            .with_seed(42);

        assert!((config.location_range - 100.0).abs() < 1e-10);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.dna_size, 8);
        assert_eq!(config.generation_count, 10);
        assert!((config.mutation_chance - 0.2).abs() < 1e-10);
        assert!((config.selection_size - 0.5).abs() < 1e-10);
        assert!((config.crossover_point - 0.25).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_ratios() {
        let config = TourConfig::default()
            .with_mutation_chance(1.5)
            .with_selection_size(-0.5)
            .with_crossover_point(2.0);

        assert!((config.mutation_chance - 1.0).abs() < 1e-10);
        assert!((config.selection_size - 0.0).abs() < 1e-10);
        assert!((config.crossover_point - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(TourConfig::default().validate().is_ok());
        assert!(TourConfig::fast().validate().is_ok());
        assert!(TourConfig::balanced().validate().is_ok());
        assert!(TourConfig::quality().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = TourConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(TourError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_dna_too_small() {
        assert!(TourConfig::default().with_dna_size(0).validate().is_err());
        assert!(TourConfig::default().with_dna_size(1).validate().is_err());
        assert!(TourConfig::default().with_dna_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_location_range() {
        assert!(TourConfig::default()
            .with_location_range(0.0)
            .validate()
            .is_err());
        assert!(TourConfig::default()
            .with_location_range(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_ratio_fields_directly_set() {
        let mut config = TourConfig::default();
        config.mutation_chance = 1.1;
        assert!(config.validate().is_err());

        let mut config = TourConfig::default();
        config.selection_size = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = TourConfig::default();
        config.crossover_point = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        let config = TourConfig::fast().with_generation_count(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = TourConfig::fast().with_population_size(75).with_seed(42);
        assert_eq!(config.population_size, 75);
        assert_eq!(config.dna_size, 20);
        assert_eq!(config.seed, Some(42));
    }
}
