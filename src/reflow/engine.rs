/*!
 * Reflow orchestration.
 *
 * The engine runs the stages in order over a whole document:
 * 1. Split the raw text into lines; blank lines become explicit markers
 * 2. Keep short and structured lines, segment everything else
 * 3. Collapse runs of blank lines
 * 4. Render markup nodes
 *
 * Each stage returns its own error; `try_reflow` composes them. The public
 * `reflow`/`restore` entry points are fail-soft: on any error they log it
 * and hand back the input unchanged.
 */

use log::{debug, warn};

use crate::errors::ReflowError;

use super::break_tokens::BreakTokenTable;
use super::classifier::{self, ContentKind};
use super::markup::{self, MarkupDocument};
use super::normalizer::{self, FlowLine};
use super::segmenter::{Segmenter, char_len};
use super::settings::ReflowSettings;

/// Result of a fail-soft reflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflowOutcome {
    /// Markup on success, the untouched input on failure
    pub output: String,

    /// The error that forced the fallback, if any
    pub degraded: Option<ReflowError>,
}

impl ReflowOutcome {
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}

/// Immutable reflow pipeline configuration.
///
/// Holds no per-call state, so one engine can serve any number of callers
/// and threads.
#[derive(Debug, Clone)]
pub struct ReflowEngine {
    settings: ReflowSettings,
    tokens: BreakTokenTable,
}

impl ReflowEngine {
    /// Create an engine with the default thresholds and Korean break tokens
    pub fn new() -> Self {
        Self {
            settings: ReflowSettings::default(),
            tokens: BreakTokenTable::korean(),
        }
    }

    /// Create an engine with custom settings and break tokens
    pub fn with_config(settings: ReflowSettings, tokens: BreakTokenTable) -> Result<Self, ReflowError> {
        settings.validate()?;
        Ok(Self { settings, tokens })
    }

    pub fn settings(&self) -> &ReflowSettings {
        &self.settings
    }

    pub fn tokens(&self) -> &BreakTokenTable {
        &self.tokens
    }

    /// Run the full pipeline and return the rendered document
    pub fn try_reflow(&self, raw: &str) -> Result<MarkupDocument, ReflowError> {
        let lines = self.reflow_lines(raw)?;
        let document = markup::render_lines(&lines)?;

        debug!("Rendered {} markup nodes", document.len());

        Ok(document)
    }

    /// Stages 1-3: split, segment and normalize, without rendering
    pub fn reflow_lines(&self, raw: &str) -> Result<Vec<FlowLine>, ReflowError> {
        let segmenter = Segmenter::new(&self.settings, &self.tokens);
        let mut lines = Vec::new();
        let mut segmented = 0;

        for (index, raw_line) in raw.split('\n').enumerate() {
            let line = FlowLine::from_raw(raw_line);
            let FlowLine::Text(text) = line else {
                lines.push(FlowLine::Blank);
                continue;
            };

            if !self.needs_segmenting(&text) {
                lines.push(FlowLine::Text(text));
                continue;
            }

            let segments = segmenter
                .segment_line(&text)
                .map_err(|source| ReflowError::Segment {
                    line: index + 1,
                    source,
                })?;

            segmented += 1;
            lines.extend(segments.into_iter().map(FlowLine::Text));
        }

        let before = lines.len();
        let lines = normalizer::collapse_blank_lines(lines);

        debug!(
            "Reflowed {} lines ({} segmented, {} blank lines collapsed)",
            lines.len(),
            segmented,
            before - lines.len()
        );

        Ok(lines)
    }

    /// Fail-soft reflow: markup on success, the raw input on any error
    pub fn reflow(&self, raw: &str) -> String {
        self.reflow_outcome(raw).output
    }

    /// Fail-soft reflow that also reports why it fell back
    pub fn reflow_outcome(&self, raw: &str) -> ReflowOutcome {
        match self.try_reflow(raw) {
            Ok(document) => ReflowOutcome {
                output: document.to_markup(),
                degraded: None,
            },
            Err(e) => {
                warn!("Reflow failed, returning original text: {}", e);
                ReflowOutcome {
                    output: raw.to_string(),
                    degraded: Some(e),
                }
            }
        }
    }

    /// Regenerate markup from a pristine copy of the source, discarding edits.
    ///
    /// This is a fresh reflow of `pristine`; nothing from earlier calls is
    /// reused.
    pub fn restore(&self, pristine: &str) -> String {
        debug!("Restoring from pristine source ({} chars)", char_len(pristine));
        self.reflow(pristine)
    }

    /// Whether a trimmed, non-blank line goes through the segmenter
    fn needs_segmenting(&self, line: &str) -> bool {
        if char_len(line) <= self.settings.min_reflow_length {
            return false;
        }

        if self.settings.preserve_long_headings && markup::is_heading(line) {
            return false;
        }

        classifier::classify(line) == ContentKind::Prose
    }
}

impl Default for ReflowEngine {
    fn default() -> Self {
        Self::new()
    }
}
