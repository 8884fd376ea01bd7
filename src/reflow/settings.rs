/*!
 * Length thresholds for the reflow pipeline.
 *
 * The values were tuned by hand against real generated articles read on a
 * phone. Changing any of them changes where lines are cut.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Lines at or below this length are never segmented
pub const MIN_REFLOW_LENGTH: usize = 30;

/// Sentence clauses at or below this length are kept whole
pub const CLAUSE_MAX_LENGTH: usize = 28;

/// Target length handed to the natural-break segmenter
pub const NATURAL_BREAK_TARGET: usize = 25;

/// Slack above the target before a span must be cut again
pub const SEGMENT_TOLERANCE: usize = 3;

/// Break window starts this many characters before the target...
pub const WINDOW_LEAD: usize = 5;

/// ...but never earlier than this
pub const WINDOW_FLOOR: usize = 15;

/// Break window ends this many characters after the target
pub const WINDOW_TRAIL: usize = 8;

/// Whitespace fallback looks this far past the target
pub const FALLBACK_SPAN: usize = 5;

/// Tunable thresholds, all measured in characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowSettings {
    /// Lines longer than this are candidates for segmentation
    pub min_reflow_length: usize,

    /// Maximum clause length kept by the sentence segmenter
    pub clause_max_length: usize,

    /// Target segment length for natural breaks
    pub target_length: usize,

    /// Accepted overshoot above the target
    pub tolerance: usize,

    /// Window start offset below the target
    pub window_lead: usize,

    /// Lower bound for the window start
    pub window_floor: usize,

    /// Window end offset above the target
    pub window_trail: usize,

    /// Whitespace fallback span above the target
    pub fallback_span: usize,

    /// Keep `## `/`### ` heading lines whole regardless of length
    pub preserve_long_headings: bool,
}

impl Default for ReflowSettings {
    fn default() -> Self {
        Self {
            min_reflow_length: MIN_REFLOW_LENGTH,
            clause_max_length: CLAUSE_MAX_LENGTH,
            target_length: NATURAL_BREAK_TARGET,
            tolerance: SEGMENT_TOLERANCE,
            window_lead: WINDOW_LEAD,
            window_floor: WINDOW_FLOOR,
            window_trail: WINDOW_TRAIL,
            fallback_span: FALLBACK_SPAN,
            preserve_long_headings: false,
        }
    }
}

impl ReflowSettings {
    /// Longest segment the natural-break segmenter may emit
    pub fn max_segment_length(&self) -> usize {
        self.target_length.saturating_add(self.tolerance)
    }

    /// Character range searched for break tokens in a span of `len` characters
    pub fn break_window(&self, target: usize, len: usize) -> (usize, usize) {
        let start = target.saturating_sub(self.window_lead).max(self.window_floor);
        let end = target.saturating_add(self.window_trail).min(len);
        (start, end)
    }

    /// Validate that the thresholds describe a terminating segmentation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_length == 0 {
            return Err(ConfigError::InvalidThreshold {
                name: "target_length",
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.clause_max_length < self.target_length {
            return Err(ConfigError::InvalidThreshold {
                name: "clause_max_length",
                reason: format!(
                    "must not be below target_length ({})",
                    self.target_length
                ),
            });
        }

        if self.min_reflow_length < self.clause_max_length {
            return Err(ConfigError::InvalidThreshold {
                name: "min_reflow_length",
                reason: format!(
                    "must not be below clause_max_length ({})",
                    self.clause_max_length
                ),
            });
        }

        Ok(())
    }
}
