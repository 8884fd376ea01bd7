/*!
 * Error types for the reflow-mobile crate.
 *
 * Each reflow stage reports its own error type; the orchestrator composes
 * them into a single `ReflowError` and turns that into a fail-soft outcome
 * at the public entry points. Application-level failures (files, config)
 * surface as `AppError`.
 */

use thiserror::Error;

/// Errors in engine configuration (thresholds or the break-token table)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold is out of range or inconsistent with another one
    #[error("Invalid threshold `{name}`: {reason}")]
    InvalidThreshold {
        /// Name of the offending setting
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The break-token table has no entries
    #[error("Break-token table is empty")]
    EmptyTokenTable,

    /// A break token is the empty string
    #[error("Break token at position {0} is empty")]
    EmptyToken(usize),

    /// The marker inserted into output file names is blank
    #[error("Output suffix must not be empty")]
    EmptyOutputSuffix,
}

/// Errors raised while cutting a line into segments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A cut step consumed nothing from the remaining text
    #[error("Segmentation stalled with {remaining} characters left")]
    Stalled {
        /// Characters still waiting to be cut
        remaining: usize,
    },

    /// Rejoined segments do not match the source line
    #[error("Segments do not reconstruct the source line (expected {expected} visible chars, got {actual})")]
    ReconstructionMismatch {
        /// Visible characters in the source line
        expected: usize,
        /// Visible characters across all segments
        actual: usize,
    },
}

/// Errors raised while building markup nodes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Two line breaks would be emitted back to back
    #[error("Consecutive line breaks at line {0}")]
    ConsecutiveLineBreaks(usize),
}

/// Errors from a full reflow run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflowError {
    /// The engine was built with an invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A line could not be segmented
    #[error("Segmentation error on line {line}: {source}")]
    Segment {
        /// 1-based line number in the raw input
        line: usize,
        /// Underlying segmentation error
        source: SegmentError,
    },

    /// Markup rendering failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the loaded configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the reflow engine
    #[error("Reflow error: {0}")]
    Reflow(#[from] ReflowError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
