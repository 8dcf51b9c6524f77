//! Dominant heading style detection.
//!
//! Samples the opening lines of a document and weighs which numbering
//! convention its headings use. The result is diagnostic: no downstream
//! component gates on it.

use crate::config::STYLE_SAMPLE_LINES;
use crate::hierarchy::heading::match_style;
use crate::types::HeadingStyle;

/// Accumulation order. Doubles as the tie-break: when two styles reach the
/// same weight, the one listed first here wins.
const STYLE_ORDER: [HeadingStyle; 6] = [
    HeadingStyle::Part,
    HeadingStyle::ChineseNumeral,
    HeadingStyle::ArabicDot,
    HeadingStyle::CircledNumeral,
    HeadingStyle::Subsection,
    HeadingStyle::Subsubsection,
];

/// Weight a single heading match contributes to its style.
///
/// Part/chapter/article markers are the strongest signal; top-level bullets
/// are moderate; subsection forms are weak (they appear under any style).
fn weight(style: HeadingStyle) -> u32 {
    match style {
        HeadingStyle::Part => 5,
        HeadingStyle::ChineseNumeral | HeadingStyle::ArabicDot => 3,
        _ => 1,
    }
}

fn style_index(style: HeadingStyle) -> Option<usize> {
    STYLE_ORDER.iter().position(|s| *s == style)
}

/// Detect the dominant heading style of a document.
///
/// Inspects the first [`STYLE_SAMPLE_LINES`] non-empty lines; each line's
/// first-matching pattern class contributes its weight. Returns
/// [`HeadingStyle::Unknown`] when nothing in the sample matched.
#[must_use]
pub fn detect_style(text: &str) -> HeadingStyle {
    let mut counts = [0u32; STYLE_ORDER.len()];

    for line in text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(STYLE_SAMPLE_LINES)
    {
        if let Some((style, _)) = match_style(line) {
            if let Some(idx) = style_index(style) {
                counts[idx] += weight(style);
            }
        }
    }

    let mut best: Option<(usize, u32)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        if count > 0 && best.is_none_or(|(_, c)| count > c) {
            best = Some((idx, count));
        }
    }

    match best {
        Some((idx, _)) => STYLE_ORDER[idx],
        None => HeadingStyle::Unknown,
    }
}
