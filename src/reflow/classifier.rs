/*!
 * Structured-content classification.
 *
 * Lists, step markers and table-like lines keep their layout on a phone
 * screen only if they are passed through untouched, so the orchestrator asks
 * this module before segmenting a line.
 */

/// Leading glyphs that mark a bullet or checklist line
const BULLET_GLYPHS: &[char] = &[
    // checkmarks
    '✓', '✔', '✅', '☑', '☐',
    // dashes
    '-', '–', '—',
    // bullets
    '•', '·', '●', '○', '■', '□', '▪', '◆', '◇',
    // arrows
    '→', '▶', '►', '➤', '⇒',
    // stars and pins
    '★', '☆', '※', '📌', '📍',
];

/// Korean enumerators used like `가.` / `ㄱ)` in lettered lists
const KOREAN_ENUMERATORS: &[char] = &[
    '가', '나', '다', '라', '마', '바', '사', '아', '자', '차', '카', '타', '파', '하',
    'ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Step markers produced by the article generator
const STEP_MARKERS: &[&str] = &["단계:", "**단계"];

/// How many leading characters may hold a numbered-list delimiter
const NUMBERED_PREFIX_CHARS: usize = 5;

/// Which structure rule matched a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Starts with a bullet, check, arrow or pin glyph
    Bullet,
    /// `1. item`, `12) item`
    NumberedList,
    /// `a. item`, `가) item`
    LetteredList,
    /// Contains a step marker
    StepMarker,
    /// Two or more colons (key/value or table row)
    Tabular,
    /// Plain running text, free to reflow
    Prose,
}

impl ContentKind {
    pub fn is_structured(&self) -> bool {
        !matches!(self, ContentKind::Prose)
    }
}

/// Classify a single line. Surrounding whitespace is ignored.
pub fn classify(line: &str) -> ContentKind {
    let line = line.trim();
    let mut chars = line.chars();

    let Some(first) = chars.next() else {
        return ContentKind::Prose;
    };
    let second = chars.next();

    if BULLET_GLYPHS.contains(&first) {
        return ContentKind::Bullet;
    }

    if first.is_ascii_digit() {
        let prefix: String = line.chars().take(NUMBERED_PREFIX_CHARS).collect();
        if prefix.contains(". ") || prefix.contains(") ") {
            return ContentKind::NumberedList;
        }
    }

    if line.chars().count() >= 3
        && matches!(second, Some('.') | Some(')'))
        && (first.is_ascii_alphabetic() || KOREAN_ENUMERATORS.contains(&first))
    {
        return ContentKind::LetteredList;
    }

    if STEP_MARKERS.iter().any(|marker| line.contains(marker)) {
        return ContentKind::StepMarker;
    }

    if line.matches(':').count() >= 2 {
        return ContentKind::Tabular;
    }

    ContentKind::Prose
}

/// Whether a line must bypass reflow
pub fn is_structured(line: &str) -> bool {
    classify(line).is_structured()
}
