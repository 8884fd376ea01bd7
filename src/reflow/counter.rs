/*!
 * Character counting for the editing surface.
 */

use serde::{Deserialize, Serialize};

/// Visible and total character counts of a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCount {
    /// Characters that are not whitespace (spaces, tabs, newlines, ...)
    pub visible: usize,
    /// All characters
    pub total: usize,
}

impl std::fmt::Display for CharacterCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} visible / {} total", self.visible, self.total)
    }
}

/// Count characters of `text`
pub fn count_characters(text: &str) -> CharacterCount {
    text.chars().fold(CharacterCount::default(), |mut count, c| {
        count.total += 1;
        if !c.is_whitespace() {
            count.visible += 1;
        }
        count
    })
}
