use thiserror::Error;

/// Top-level error type for the sectilis cross-section kernel.
#[derive(Debug, Error)]
pub enum SectilisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Decompose(#[from] DecomposeError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Outright failures of an underlying geometry operation.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("geometry operation failed: {0}")]
    Failed(String),
}

/// Fatal ambiguities raised while decomposing a cross-section.
///
/// Every kernel construction step must produce exactly one result; each
/// variant records the iteration at which the run died and the number of
/// results the kernel actually produced. Zero results are just as fatal
/// as several.
#[derive(Debug, Error)]
pub enum DecomposeError {
    #[error("offset at iteration {iteration} produced {count} curves, expected exactly 1")]
    AmbiguousOffset { iteration: usize, count: usize },

    #[error("join at iteration {iteration} produced {count} loops, expected exactly 1")]
    AmbiguousJoin { iteration: usize, count: usize },

    #[error("cap at iteration {iteration} produced {count} regions, expected exactly 1")]
    AmbiguousCap { iteration: usize, count: usize },
}

impl DecomposeError {
    /// Returns the iteration at which the decomposition failed.
    #[must_use]
    pub fn iteration(&self) -> usize {
        match self {
            Self::AmbiguousOffset { iteration, .. }
            | Self::AmbiguousJoin { iteration, .. }
            | Self::AmbiguousCap { iteration, .. } => *iteration,
        }
    }
}

/// Convenience type alias for results using [`SectilisError`].
pub type Result<T> = std::result::Result<T, SectilisError>;
