//! Error types for the tour optimizer.
//!
//! All conditions here are caller-input errors detected at pipeline entry
//! or by the fitness evaluator. None of them are transient.

/// Errors produced by configuration validation and tour evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TourError {
    /// A tunable parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The gene sequence is too short to form a closed tour.
    #[error("degenerate tour: {genes} gene(s), at least 2 required")]
    DegenerateTour {
        /// Number of genes in the rejected sequence.
        genes: usize,
    },

    /// Every gene sits on the same point, so the tour length is zero.
    #[error("tour length is zero: all genes coincide")]
    ZeroLengthTour,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;
