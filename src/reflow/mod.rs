/*!
 * Mobile text reflow engine.
 *
 * Rewrites long generated articles into short segments that read well on a
 * phone, while leaving lists, steps and table-like lines intact and turning
 * heading/emphasis markers into style tiers.
 *
 * - `break_tokens`: ordered break-token table (Korean default)
 * - `classifier`: structured-content detection
 * - `segmenter`: sentence and natural-break segmentation
 * - `normalizer`: line model and blank-line collapsing
 * - `markup`: style tiers, markup nodes and serialization
 * - `counter`: visible/total character counts
 * - `engine`: the orchestrator and its fail-soft entry points
 * - `settings`: length thresholds
 */

use once_cell::sync::Lazy;

pub mod break_tokens;
pub mod classifier;
pub mod counter;
pub mod engine;
pub mod markup;
pub mod normalizer;
pub mod segmenter;
pub mod settings;

pub use break_tokens::{BreakToken, BreakTokenTable};
pub use classifier::{ContentKind, classify, is_structured};
pub use counter::{CharacterCount, count_characters};
pub use engine::{ReflowEngine, ReflowOutcome};
pub use markup::{InlineSpan, MarkupDocument, MarkupNode, StyleTier};
pub use normalizer::FlowLine;
pub use settings::ReflowSettings;

/// Shared engine with the default configuration
static DEFAULT_ENGINE: Lazy<ReflowEngine> = Lazy::new(ReflowEngine::new);

/// Reflow `raw` with the default engine; returns `raw` unchanged on failure
pub fn reflow(raw: &str) -> String {
    DEFAULT_ENGINE.reflow(raw)
}

/// Regenerate markup from a pristine source with the default engine
pub fn restore(pristine: &str) -> String {
    DEFAULT_ENGINE.restore(pristine)
}
