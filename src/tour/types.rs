//! Core data types: [`Gene`], [`Chromosome`] and [`Population`].

use super::fitness;
use crate::error::Result;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A fixed point in the layout.
///
/// Genes are plain `Copy` values and never change after creation.
/// Equality and hashing use `id` only: two genes with the same id are the
/// same gene regardless of their coordinates.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Identity, unique within a gene set.
    pub id: usize,
    /// Horizontal coordinate in `[0, location_range)`.
    pub x: f64,
    /// Vertical coordinate in `[0, location_range)`.
    pub y: f64,
}

impl Gene {
    /// Creates a gene.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

impl PartialEq for Gene {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Gene {}

impl Hash for Gene {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({:.3}, {:.3})", self.id, self.x, self.y)
    }
}

/// A candidate tour: an ordered gene sequence plus its cached fitness.
///
/// The gene sequence lives behind an [`Arc`] so that a freshly seeded
/// population can share one allocation. All writes go through
/// [`genes_mut`](Self::genes_mut), which copies on write, so a change to
/// one chromosome is never visible through another.
///
/// The cached fitness is only updated by [`refresh_fitness`](Self::refresh_fitness)
/// or by constructing a new chromosome. In-place gene edits leave it stale.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Arc<Vec<Gene>>,
    fitness: f64,
}

/// The working set of chromosomes at one pipeline stage.
pub type Population = Vec<Chromosome>;

impl Chromosome {
    /// Builds a chromosome that owns `genes` and evaluates its fitness.
    ///
    /// # Errors
    /// Propagates [`fitness::fitness`] errors for degenerate tours.
    pub fn new(genes: Vec<Gene>, location_range: f64) -> Result<Self> {
        Self::from_shared(Arc::new(genes), location_range)
    }

    /// Builds a chromosome over an existing, possibly shared, gene sequence.
    ///
    /// # Errors
    /// Propagates [`fitness::fitness`] errors for degenerate tours.
    pub fn from_shared(genes: Arc<Vec<Gene>>, location_range: f64) -> Result<Self> {
        let fitness = fitness::fitness(&genes, location_range)?;
        Ok(Self { genes, fitness })
    }

    /// Builds a chromosome with a caller-provided fitness, skipping evaluation.
    pub fn with_fitness(genes: Vec<Gene>, fitness: f64) -> Self {
        Self {
            genes: Arc::new(genes),
            fitness,
        }
    }

    /// The gene sequence in tour order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Mutable access to the gene sequence.
    ///
    /// If the sequence is still shared with other chromosomes it is cloned
    /// first. The cached fitness is not touched.
    pub fn genes_mut(&mut self) -> &mut Vec<Gene> {
        Arc::make_mut(&mut self.genes)
    }

    /// The cached fitness. Higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Recomputes and stores fitness for the current gene order.
    ///
    /// # Errors
    /// Propagates [`fitness::fitness`] errors for degenerate tours.
    pub fn refresh_fitness(&mut self, location_range: f64) -> Result<f64> {
        self.fitness = fitness::fitness(&self.genes, location_range)?;
        Ok(self.fitness)
    }

    /// Closed-loop length of the current gene order.
    pub fn tour_length(&self) -> f64 {
        fitness::tour_length(&self.genes)
    }

    /// Number of genes in the sequence.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the sequence holds no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene ids in tour order.
    pub fn ids(&self) -> Vec<usize> {
        self.genes.iter().map(|g| g.id).collect()
    }

    /// Returns `true` if `id` occurs anywhere in the sequence.
    pub fn contains_id(&self, id: usize) -> bool {
        self.genes.iter().any(|g| g.id == id)
    }

    /// Returns `true` if the ids are exactly `0..n`, each once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.genes.len() != n {
            return false;
        }
        let ids: HashSet<usize> = self.genes.iter().map(|g| g.id).collect();
        ids.len() == n && ids.iter().all(|&id| id < n)
    }

    /// Returns `true` if both chromosomes point at the same gene allocation.
    pub fn shares_genes_with(&self, other: &Chromosome) -> bool {
        Arc::ptr_eq(&self.genes, &other.genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fitness={:.6} tour=[", self.fitness)?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", gene.id)?;
        }
        f.write_str("]")
    }
}

/// Renders one line per chromosome, in population order.
pub fn report(population: &[Chromosome]) -> String {
    population
        .iter()
        .map(Chromosome::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
