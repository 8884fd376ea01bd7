/*!
 * Tiered-style markup rendering.
 *
 * Normalized lines become markup nodes: `## ` and `### ` lines turn into
 * headings, `**...**` runs into emphasis spans, everything else into body
 * text. Markers are stripped; every other character is kept as-is.
 *
 * A rendered document can be written out in three forms:
 * - `to_markup()`: one tagged node per line (`<mega>`, `<large>`,
 *   `<normal>` with nested `<super_normal>`, `<br/>`)
 * - `to_plain_text()`: visible text only
 * - JSON through serde
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::RenderError;

use super::normalizer::FlowLine;

/// `**emphasis**` runs
static EMPHASIS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid emphasis regex"));

const HEADING2_MARKER: &str = "## ";
const HEADING3_MARKER: &str = "### ";

/// Named size category attached to rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTier {
    #[serde(rename = "mega")]
    Heading2,
    #[serde(rename = "large")]
    Heading3,
    #[serde(rename = "super_normal")]
    Emphasis,
    #[serde(rename = "normal")]
    Body,
}

impl StyleTier {
    /// Tag name used in the markup output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heading2 => "mega",
            Self::Heading3 => "large",
            Self::Emphasis => "super_normal",
            Self::Body => "normal",
        }
    }

    /// Opaque size class handed to the display surface
    pub fn size_class(&self) -> u8 {
        match self {
            Self::Heading2 => 18,
            Self::Heading3 => 16,
            Self::Emphasis => 14,
            Self::Body => 12,
        }
    }
}

impl std::fmt::Display for StyleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A run of paragraph text in one tier (`Body` or `Emphasis`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub tier: StyleTier,
    pub text: String,
}

impl InlineSpan {
    pub fn body(text: &str) -> Self {
        Self {
            tier: StyleTier::Body,
            text: text.to_string(),
        }
    }

    pub fn emphasis(text: &str) -> Self {
        Self {
            tier: StyleTier::Emphasis,
            text: text.to_string(),
        }
    }
}

/// One rendered node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarkupNode {
    Heading { tier: StyleTier, text: String },
    Paragraph { spans: Vec<InlineSpan> },
    LineBreak,
}

impl MarkupNode {
    /// Visible text of the node, without markers
    pub fn plain_text(&self) -> String {
        match self {
            MarkupNode::Heading { text, .. } => text.clone(),
            MarkupNode::Paragraph { spans } => spans.iter().map(|s| s.text.as_str()).collect(),
            MarkupNode::LineBreak => String::new(),
        }
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            MarkupNode::Heading { tier, text } => push_tagged(out, *tier, text),
            MarkupNode::Paragraph { spans } => {
                let body = StyleTier::Body.label();
                out.push('<');
                out.push_str(body);
                out.push('>');
                for span in spans {
                    match span.tier {
                        StyleTier::Body => push_escaped(out, &span.text),
                        tier => push_tagged(out, tier, &span.text),
                    }
                }
                out.push_str("</");
                out.push_str(body);
                out.push('>');
            }
            MarkupNode::LineBreak => out.push_str("<br/>"),
        }
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_tagged(out: &mut String, tier: StyleTier, text: &str) {
    out.push('<');
    out.push_str(tier.label());
    out.push('>');
    push_escaped(out, text);
    out.push_str("</");
    out.push_str(tier.label());
    out.push('>');
}

/// Ordered sequence of rendered nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupDocument {
    pub nodes: Vec<MarkupNode>,
}

impl MarkupDocument {
    /// Tagged markup, one node per line
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            node.write_markup(&mut out);
        }
        out
    }

    /// Visible text, one node per line; line breaks become empty lines
    pub fn to_plain_text(&self) -> String {
        self.nodes
            .iter()
            .map(MarkupNode::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Split a paragraph line into body and emphasis spans
pub fn parse_inline(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS_REGEX.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if whole.start() > last {
            spans.push(InlineSpan::body(&line[last..whole.start()]));
        }
        spans.push(InlineSpan::emphasis(inner.as_str()));
        last = whole.end();
    }

    if last < line.len() {
        spans.push(InlineSpan::body(&line[last..]));
    }

    spans
}

/// Render one text line
pub fn render_line(line: &str) -> MarkupNode {
    if let Some(rest) = line.strip_prefix(HEADING2_MARKER) {
        MarkupNode::Heading {
            tier: StyleTier::Heading2,
            text: rest.to_string(),
        }
    } else if let Some(rest) = line.strip_prefix(HEADING3_MARKER) {
        MarkupNode::Heading {
            tier: StyleTier::Heading3,
            text: rest.to_string(),
        }
    } else {
        MarkupNode::Paragraph {
            spans: parse_inline(line),
        }
    }
}

/// Render normalized lines, in order.
///
/// Fails if two blank lines arrive back to back; the normalizer is expected
/// to have collapsed them.
pub fn render_lines(lines: &[FlowLine]) -> Result<MarkupDocument, RenderError> {
    let mut nodes = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        match line {
            FlowLine::Blank => {
                if matches!(nodes.last(), Some(MarkupNode::LineBreak)) {
                    return Err(RenderError::ConsecutiveLineBreaks(i + 1));
                }
                nodes.push(MarkupNode::LineBreak);
            }
            FlowLine::Text(text) => nodes.push(render_line(text)),
        }
    }

    Ok(MarkupDocument { nodes })
}

/// Whether a line carries a heading marker
pub fn is_heading(line: &str) -> bool {
    line.starts_with(HEADING2_MARKER) || line.starts_with(HEADING3_MARKER)
}
