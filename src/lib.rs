/*!
 * # reflow-mobile - Mobile text reflow for generated articles
 *
 * A Rust library that rewrites long-form generated articles into short,
 * phone-friendly segments and renders them as tiered style markup.
 *
 * ## Features
 *
 * - Sentence-first segmentation with priority-ordered break tokens
 * - Lists, step markers and table-like lines pass through untouched
 * - `##`/`###` headings and `**emphasis**` mapped to style tiers
 * - Fail-soft: a fault returns the original text instead of broken markup
 * - Visible/total character counts for editing surfaces
 * - Configurable thresholds and break-token tables (Korean by default)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `reflow`: the engine:
 *   - `reflow::classifier`: Structured-content detection
 *   - `reflow::segmenter`: Sentence and natural-break segmentation
 *   - `reflow::normalizer`: Blank-line collapsing
 *   - `reflow::markup`: Style tiers and markup rendering
 *   - `reflow::counter`: Character counting
 *   - `reflow::engine`: Pipeline orchestration
 * - `draft`: Pristine source plus user edits, with restore
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod draft;
pub mod errors;
pub mod file_utils;
pub mod reflow;

// Re-export main types for easier usage
pub use app_config::Config;
pub use draft::{ArticleDraft, DraftRecord};
pub use errors::{AppError, ConfigError, ReflowError, RenderError, SegmentError};
pub use reflow::{
    CharacterCount, MarkupDocument, MarkupNode, ReflowEngine, StyleTier, count_characters, reflow,
    restore,
};
