/*!
 * Editable article draft.
 *
 * Keeps the pristine generated article next to the text the user is
 * editing. Restoring always regenerates from the pristine copy, never from
 * an intermediate edit.
 */

use serde::{Deserialize, Serialize};

use crate::reflow::{CharacterCount, ReflowEngine, count_characters};

/// What a persistence layer stores for a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    /// Current text as edited by the user
    pub text: String,

    /// Whether the text diverges from the reflowed original
    pub is_modified: bool,
}

/// A reflowed article and its user edits
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    original: String,
    reflowed: String,
    current: String,
}

impl ArticleDraft {
    /// Reflow `original` with the default engine and start editing from it
    pub fn new(original: &str) -> Self {
        Self::with_engine(original, &ReflowEngine::new())
    }

    /// Reflow `original` with a specific engine
    pub fn with_engine(original: &str, engine: &ReflowEngine) -> Self {
        let reflowed = engine.reflow(original);
        Self {
            original: original.to_string(),
            current: reflowed.clone(),
            reflowed,
        }
    }

    /// Replace the edited text
    pub fn edit(&mut self, text: &str) {
        self.current = text.to_string();
    }

    /// Throw away edits and regenerate from the pristine source
    pub fn restore(&mut self, engine: &ReflowEngine) {
        self.reflowed = engine.restore(&self.original);
        self.current = self.reflowed.clone();
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn text(&self) -> &str {
        &self.current
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.reflowed
    }

    /// Character counts of the current text
    pub fn counts(&self) -> CharacterCount {
        count_characters(&self.current)
    }

    pub fn to_record(&self) -> DraftRecord {
        DraftRecord {
            text: self.current.clone(),
            is_modified: self.is_modified(),
        }
    }
}
