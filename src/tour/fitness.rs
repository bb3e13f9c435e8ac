//! Tour fitness evaluation.
//!
//! Fitness is the inverse-scaled length of the closed loop through the
//! genes in sequence order:
//!
//! ```text
//! fitness = location_range² / (Σ d(gᵢ, gᵢ₊₁) + d(gₙ₋₁, g₀))
//! ```
//!
//! Higher fitness means a shorter tour. Because the loop is closed and
//! Euclidean distance is symmetric, fitness is invariant under rotation and
//! reversal of the sequence.

use super::types::Gene;
use crate::error::{Result, TourError};

/// Euclidean distance between two genes.
#[inline]
pub fn distance(a: &Gene, b: &Gene) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Length of the closed loop through `genes`, including the edge from the
/// last gene back to the first.
///
/// Returns `0.0` for fewer than two genes.
pub fn tour_length(genes: &[Gene]) -> f64 {
    if genes.len() < 2 {
        return 0.0;
    }
    let open: f64 = genes.windows(2).map(|w| distance(&w[0], &w[1])).sum();
    open + distance(&genes[genes.len() - 1], &genes[0])
}

/// Computes `location_range² / tour_length(genes)`.
///
/// # Errors
/// - [`TourError::DegenerateTour`] if `genes` has fewer than two entries.
/// - [`TourError::ZeroLengthTour`] if every gene sits on the same point.
pub fn fitness(genes: &[Gene], location_range: f64) -> Result<f64> {
    if genes.len() < 2 {
        return Err(TourError::DegenerateTour { genes: genes.len() });
    }
    let length = tour_length(genes);
    if length <= 0.0 {
        return Err(TourError::ZeroLengthTour);
    }
    Ok(location_range * location_range / length)
}
