/*!
 * Sentence and natural-break segmentation.
 *
 * A long prose line is first split at sentence terminators. Any clause that
 * is still too long is cut greedily near a target length, preferring break
 * tokens, then whitespace, then a hard cut. Every decision is final; the
 * segmenter never backtracks.
 *
 * All lengths are character counts, not byte counts. Cuts ignore inline
 * markers, so a cut inside a `**...**` run leaves a literal `**` on each side.
 */

use log::trace;

use crate::errors::SegmentError;

use super::break_tokens::BreakTokenTable;
use super::settings::ReflowSettings;

/// Sentence terminators in the order they are tried
const SENTENCE_TERMINATORS: &[&str] = &[". ", "! ", "? ", ".", "!", "?"];

/// Number of characters in a string
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the `char_index`-th character, or the string length
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(i, _)| i)
}

/// Characters of a string with all whitespace removed
fn visible_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| !c.is_whitespace())
}

/// Byte offset where the last word of `prefix` begins, if it has at least two words
fn last_word_start(prefix: &str) -> Option<usize> {
    let mut previous_was_space = false;
    let mut last = None;

    for (i, c) in prefix.char_indices() {
        if c.is_whitespace() {
            previous_was_space = true;
        } else {
            if previous_was_space {
                last = Some(i);
            }
            previous_was_space = false;
        }
    }

    last
}

/// Split `line` on every `terminator`, keeping the trimmed terminator on the
/// clause before it. A clause that would hold only the terminator is folded
/// into the previous one (`"와!!"` stays together).
fn split_clauses(line: &str, terminator: &str) -> Vec<String> {
    let mark = terminator.trim_end();
    let pieces: Vec<&str> = line.split(terminator).collect();
    let last = pieces.len().saturating_sub(1);
    let mut clauses: Vec<String> = Vec::with_capacity(pieces.len());

    for (i, piece) in pieces.iter().enumerate() {
        let piece = piece.trim();
        let has_mark = i < last;

        if piece.is_empty() {
            if has_mark {
                match clauses.last_mut() {
                    Some(previous) => previous.push_str(mark),
                    None => clauses.push(mark.to_string()),
                }
            }
            continue;
        }

        let mut clause = piece.to_string();
        if has_mark {
            clause.push_str(mark);
        }
        clauses.push(clause);
    }

    clauses
}

/// Cuts lines into short segments. Borrowed configuration only; holds no state.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    settings: &'a ReflowSettings,
    tokens: &'a BreakTokenTable,
}

impl<'a> Segmenter<'a> {
    pub fn new(settings: &'a ReflowSettings, tokens: &'a BreakTokenTable) -> Self {
        Self { settings, tokens }
    }

    /// Segment a prose line and check that no text was lost.
    pub fn segment_line(&self, line: &str) -> Result<Vec<String>, SegmentError> {
        let segments = self.split_sentences(line)?;
        verify_reconstruction(line, &segments)?;
        Ok(segments)
    }

    /// Split at sentence terminators, handing over-long clauses to
    /// [`Segmenter::split_natural`].
    pub fn split_sentences(&self, line: &str) -> Result<Vec<String>, SegmentError> {
        let line = line.trim();
        let target = self.settings.target_length;

        for terminator in SENTENCE_TERMINATORS {
            if !line.contains(terminator) {
                continue;
            }

            let clauses = split_clauses(line, terminator);
            if clauses.len() < 2 {
                continue;
            }

            trace!("Split on {:?} into {} clauses", terminator, clauses.len());

            let mut segments = Vec::with_capacity(clauses.len());
            for clause in clauses {
                if char_len(&clause) <= self.settings.clause_max_length {
                    segments.push(clause);
                } else {
                    segments.extend(self.split_natural(&clause, target)?);
                }
            }
            return Ok(segments);
        }

        self.split_natural(line, target)
    }

    /// Greedy cut of `span` into pieces near `target` characters.
    pub fn split_natural(&self, span: &str, target: usize) -> Result<Vec<String>, SegmentError> {
        let limit = target.saturating_add(self.settings.tolerance);
        let mut segments = Vec::new();
        let mut remaining = span.trim();

        while char_len(remaining) > limit {
            let (head, tail) = self.next_cut(remaining, target)?;
            segments.push(head.to_string());
            remaining = tail;
        }

        if !remaining.is_empty() {
            segments.push(remaining.to_string());
        }

        Ok(segments)
    }

    /// One cut step: break token, then whitespace, then a hard cut at `target`.
    fn next_cut<'s>(&self, text: &'s str, target: usize) -> Result<(&'s str, &'s str), SegmentError> {
        let cut = if let Some(cut) = self.token_cut(text, target) {
            cut
        } else if let Some(cut) = self.whitespace_cut(text, target) {
            trace!("No break token in window, cutting at whitespace");
            cut
        } else {
            trace!("No whitespace in range, forcing cut at {} chars", target);
            byte_index(text, target)
        };

        let head = text[..cut].trim_end();
        let tail = text[cut..].trim_start();

        if head.is_empty() || tail.len() == text.len() {
            return Err(SegmentError::Stalled {
                remaining: char_len(text),
            });
        }

        Ok((head, tail))
    }

    /// Byte offset right after the highest-priority break token in the window
    fn token_cut(&self, text: &str, target: usize) -> Option<usize> {
        let (start, end) = self.settings.break_window(target, char_len(text));
        if start >= end {
            return None;
        }

        let window_start = byte_index(text, start);
        let window = &text[window_start..byte_index(text, end)];
        let limit = target.saturating_add(self.settings.tolerance);

        self.tokens.iter().find_map(|token| {
            let offset = window.find(token)?;
            let cut = window_start + offset + token.len();
            let head = text[..cut].trim_end();

            if !head.is_empty() && char_len(head) <= limit {
                trace!("Break token {:?} at byte {}", token, cut);
                Some(cut)
            } else {
                None
            }
        })
    }

    /// Byte offset of the last word starting within the fallback span
    fn whitespace_cut(&self, text: &str, target: usize) -> Option<usize> {
        let span_end = byte_index(text, target.saturating_add(self.settings.fallback_span));
        last_word_start(&text[..span_end])
    }
}

/// Check that `segments` hold exactly the visible characters of `line`, in order.
pub fn verify_reconstruction(line: &str, segments: &[String]) -> Result<(), SegmentError> {
    let expected = visible_chars(line);
    let actual = segments.iter().flat_map(|s| visible_chars(s));

    if expected.eq(actual) {
        Ok(())
    } else {
        Err(SegmentError::ReconstructionMismatch {
            expected: visible_chars(line).count(),
            actual: segments.iter().map(|s| visible_chars(s).count()).sum(),
        })
    }
}
