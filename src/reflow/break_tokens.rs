/*!
 * Break-token table for the natural-break segmenter.
 *
 * A break token is a literal substring after which a line may be cut. The
 * table is ordered by priority rank (lower ranks are tried first) and is the
 * only language-specific input to the segmentation algorithm.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A candidate cut point with its priority rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakToken {
    /// Literal text; the cut lands right after it
    pub token: String,

    /// Priority rank, lower is tried first
    pub priority: u32,
}

impl BreakToken {
    pub fn new(token: &str, priority: u32) -> Self {
        Self {
            token: token.to_string(),
            priority,
        }
    }
}

/// Korean tokens grouped by rank: comma, topic/object/subject particles,
/// locative/directional particles, conjunctive particles, polite endings,
/// connective adverbs, generic list separators.
const KOREAN_TOKEN_GROUPS: &[(u32, &[&str])] = &[
    (0, &[", "]),
    (1, &["은 ", "는 ", "이 ", "가 ", "을 ", "를 "]),
    (2, &["에서 ", "에게 ", "에는 ", "으로 ", "로 ", "에 "]),
    (3, &["와 ", "과 ", "하고 ", "며 ", "고 "]),
    (4, &["습니다 ", "니다 ", "어요 ", "아요 ", "해요 "]),
    (5, &["그리고 ", "하지만 ", "그러나 ", "또한 ", "그래서 ", "따라서 "]),
    (6, &["및 ", "등 ", "또는 ", "/ "]),
];

/// Ordered set of break tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTokenTable {
    tokens: Vec<BreakToken>,
}

impl BreakTokenTable {
    /// Build a table from arbitrary tokens.
    ///
    /// Tokens are sorted by priority; tokens sharing a rank keep the order in
    /// which they were supplied.
    pub fn new(mut tokens: Vec<BreakToken>) -> Result<Self, ConfigError> {
        if tokens.is_empty() {
            return Err(ConfigError::EmptyTokenTable);
        }

        if let Some(position) = tokens.iter().position(|t| t.token.is_empty()) {
            return Err(ConfigError::EmptyToken(position));
        }

        // sort_by_key is stable
        tokens.sort_by_key(|t| t.priority);

        Ok(Self { tokens })
    }

    /// The built-in Korean table
    pub fn korean() -> Self {
        let tokens = KOREAN_TOKEN_GROUPS
            .iter()
            .flat_map(|(rank, group)| group.iter().map(move |t| BreakToken::new(t, *rank)))
            .collect();

        Self { tokens }
    }

    /// Tokens in the order they should be tried
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.token.as_str())
    }

    pub fn tokens(&self) -> &[BreakToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for BreakTokenTable {
    fn default() -> Self {
        Self::korean()
    }
}
