//! Shared error types for the fusion engine

use thiserror::Error;

/// Main error type for fusion operations
///
/// Every variant is raised before fusion or reconstruction produces any
/// output, so a caller never observes a partial consensus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FusionError {
    /// Malformed partition: duplicate identifier, identifier outside
    /// `1..=N`, empty tie group, incomplete coverage, or an ordering that
    /// cannot be laid out without a cycle
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The two orders declare universes of different size
    #[error("Dimension mismatch: left order has {left} elements, right order has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// The order declares no elements at all
    #[error("Empty input: a weak order must declare at least one element")]
    EmptyInput,
}

impl FusionError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Process exit code for this error
    ///
    /// All engine failures map to `1`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }

    /// Short machine-friendly category name
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::EmptyInput => "empty_input",
        }
    }
}

/// Result type alias using the fusion error type
pub type Result<T> = std::result::Result<T, FusionError>;
