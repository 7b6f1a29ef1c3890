//! Error types for Voronoi computation.

use std::fmt;

/// Errors that can occur during Voronoi computation.
///
/// Geometric degeneracies (colinear triples, sites sharing an x-coordinate)
/// are never errors; they show up in [`crate::VoronoiDiagnostics`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// A site has a NaN or infinite coordinate.
    NonFiniteSite { index: usize },

    /// Internal computation failure.
    /// This should not happen with valid input and indicates a bug.
    ComputationFailed(String),
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::NonFiniteSite { index } => {
                write!(f, "site {} has a non-finite coordinate", index)
            }
            VoronoiError::ComputationFailed(msg) => {
                write!(f, "computation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for VoronoiError {}
