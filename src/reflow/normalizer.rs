/*!
 * Line model and blank-line normalization.
 */

use serde::{Deserialize, Serialize};

/// A line of the working document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowLine {
    /// Explicit blank marker
    Blank,
    /// Trimmed, non-empty text
    Text(String),
}

impl FlowLine {
    /// Build from a raw line; whitespace-only lines become `Blank`
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            FlowLine::Blank
        } else {
            FlowLine::Text(trimmed.to_string())
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, FlowLine::Blank)
    }

    pub fn text(&self) -> &str {
        match self {
            FlowLine::Blank => "",
            FlowLine::Text(text) => text,
        }
    }
}

/// Collapse each run of blank lines into a single blank line.
pub fn collapse_blank_lines(lines: Vec<FlowLine>) -> Vec<FlowLine> {
    let mut result = Vec::with_capacity(lines.len());
    let mut previous_was_blank = false;

    for line in lines {
        let is_blank = line.is_blank();
        if is_blank && previous_was_blank {
            continue;
        }
        previous_was_blank = is_blank;
        result.push(line);
    }

    result
}
