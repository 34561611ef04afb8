//! Error types for split-testing
//!
//! Store failures pass through unchanged; only malformed definitions and
//! inconsistent stored state are raised by the engine itself.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an experiment definition is rejected before any store access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The experiment name is empty
    #[error("experiment name must not be empty")]
    EmptyExperimentName,

    /// The variant list is empty
    #[error("experiment must define at least one variant")]
    NoVariants,

    /// A variant has an empty name
    #[error("variant at index {index} has an empty name")]
    UnnamedVariant {
        /// Position of the offending variant in the definition
        index: usize,
    },

    /// No store was supplied and this target has no default store
    #[error("no key/value store configured\nPass one with `ExperimentOptions::store`")]
    NoStore,
}

/// split-testing error types
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed experiment definition
    #[error("invalid experiment definition: {0}")]
    Validation(#[from] ValidationError),

    /// The stored variant name is not part of the current definition
    #[error("experiment '{experiment}' has stored variant '{variant}' which is not defined anymore\nClear the stored assignment to pick again")]
    InconsistentState {
        /// Experiment name
        experiment: String,
        /// Variant name found in the store
        variant: String,
    },

    /// Store backend failure
    #[error("Store error: {0}")]
    Store(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error was raised while validating the definition.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
