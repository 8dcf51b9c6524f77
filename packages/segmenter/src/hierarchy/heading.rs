//! Per-line heading detection and level assignment.
//!
//! Dispatch is an explicit priority-ordered rule table; the first matching
//! class wins and no further classes are tried. The `regex` crate has no
//! lookahead, so the checks that would otherwise be negative lookaheads
//! (`1.` must not be followed by another digit, `1.1` must not continue
//! into `1.1.1`) are expressed as guard functions applied at the match end.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::ARABIC_TOP_LEVEL_MAX;
use crate::types::HeadingStyle;

/// Result of matching a line against the heading rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Nesting level, 1 through 3.
    pub level: u8,

    /// Full heading label: the trimmed line with leading markdown hashes
    /// stripped.
    pub label: String,

    /// Which pattern class matched.
    pub style: HeadingStyle,
}

/// Markdown-prefixed part marker: ## 第一部分 / ## 第三条.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MD_PART_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+\s*第[一二三四五六七八九十百千万0-9]+(?:部分|章|节|条)").expect("valid regex")
});

/// Bare part marker at line start: 第一部分 / 第二章 / 第三节 / 第四条.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PART_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^第[一二三四五六七八九十百千万0-9]+(?:部分|章|节|条)").expect("valid regex")
});

/// Chinese-numeral bullet: 一、二、三、
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHINESE_NUMERAL_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[一二三四五六七八九十]+、").expect("valid regex"));

/// Arabic dotted number: 1. 2. 3. (guarded against 1.1 forms).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARABIC_DOT_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.").expect("valid regex"));

/// Circled-digit bullet: ①②③.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CIRCLED_DIGIT_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[①②③④⑤⑥⑦⑧⑨⑩]+").expect("valid regex"));

/// Two-level Arabic subsection: 1.1 (guarded against 1.1.1 forms).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("valid regex"));

/// Three-level Arabic subsection: 1.1.1.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBSUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+").expect("valid regex"));

/// Guard: the character at `end` must not be an ASCII digit.
fn no_digit_after(line: &str, end: usize) -> bool {
    !line[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Guard: the character at `end` must not be an ASCII digit or a dot.
///
/// Keeps `1.1.1` flowing past the two-level subsection class to the
/// three-level one.
fn no_digit_or_dot_after(line: &str, end: usize) -> bool {
    !line[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

/// One entry of the heading rule table.
struct HeadingRule {
    style: HeadingStyle,
    pattern: &'static LazyLock<Regex>,
    guard: Option<fn(&str, usize) -> bool>,
}

/// The heading rule table, in dispatch priority order.
static HEADING_RULES: [HeadingRule; 7] = [
    HeadingRule {
        style: HeadingStyle::Part,
        pattern: &MD_PART_MARKER,
        guard: None,
    },
    HeadingRule {
        style: HeadingStyle::Part,
        pattern: &PART_MARKER,
        guard: None,
    },
    HeadingRule {
        style: HeadingStyle::ChineseNumeral,
        pattern: &CHINESE_NUMERAL_BULLET,
        guard: None,
    },
    HeadingRule {
        style: HeadingStyle::ArabicDot,
        pattern: &ARABIC_DOT_BULLET,
        guard: Some(no_digit_after),
    },
    HeadingRule {
        style: HeadingStyle::CircledNumeral,
        pattern: &CIRCLED_DIGIT_BULLET,
        guard: None,
    },
    HeadingRule {
        style: HeadingStyle::Subsection,
        pattern: &SUBSECTION,
        guard: Some(no_digit_or_dot_after),
    },
    HeadingRule {
        style: HeadingStyle::Subsubsection,
        pattern: &SUBSUBSECTION,
        guard: Some(no_digit_after),
    },
];

/// Match a trimmed line against the rule table.
///
/// Returns the matched style and the marker text. Used directly by the
/// style detector, which only cares which class fired.
pub(crate) fn match_style<'a>(line: &'a str) -> Option<(HeadingStyle, &'a str)> {
    for rule in &HEADING_RULES {
        if let Some(m) = rule.pattern.find(line) {
            if let Some(guard) = rule.guard {
                if !guard(line, m.end()) {
                    continue;
                }
            }
            return Some((rule.style, m.as_str()));
        }
    }
    None
}

/// Classify a trimmed line as a heading, assigning its nesting level.
///
/// Level rules:
/// - part marker: 部分/条 are level 1, 章 is level 2, 节 is level 3
/// - Chinese-numeral bullet: level 2
/// - Arabic dotted number: level 2 up to value 10, level 3 beyond
/// - two-level subsection: level 2; three-level subsection and circled
///   digits: level 3
#[must_use]
pub fn classify(line: &str) -> Option<HeadingMatch> {
    let (style, marker) = match_style(line)?;
    let level = heading_level(style, marker)?;
    Some(HeadingMatch {
        level,
        label: heading_label(line),
        style,
    })
}

/// Assign the nesting level for a matched marker.
fn heading_level(style: HeadingStyle, marker: &str) -> Option<u8> {
    match style {
        HeadingStyle::Part => {
            if marker.ends_with("部分") || marker.ends_with('条') {
                Some(1)
            } else if marker.ends_with('章') {
                Some(2)
            } else if marker.ends_with('节') {
                Some(3)
            } else {
                None
            }
        }
        HeadingStyle::ChineseNumeral => Some(2),
        HeadingStyle::ArabicDot => {
            // Values that do not fit u64 are not plausible enumeration
            let value: u64 = marker.trim_end_matches('.').parse().ok()?;
            if value <= ARABIC_TOP_LEVEL_MAX {
                Some(2)
            } else {
                Some(3)
            }
        }
        HeadingStyle::Subsection => Some(2),
        HeadingStyle::Subsubsection | HeadingStyle::CircledNumeral => Some(3),
        HeadingStyle::Unknown => None,
    }
}

/// Build the heading label: strip leading markdown hashes and whitespace.
fn heading_label(line: &str) -> String {
    line.trim_start_matches('#').trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level_of(line: &str) -> Option<u8> {
        classify(line).map(|m| m.level)
    }

    #[test]
    fn test_part_marker_levels() {
        assert_eq!(level_of("第一部分 总则"), Some(1));
        assert_eq!(level_of("第三条 合同期限"), Some(1));
        assert_eq!(level_of("第二章 权利义务"), Some(2));
        assert_eq!(level_of("第一节 一般规定"), Some(3));
    }

    #[test]
    fn test_markdown_prefixed_part_marker() {
        let m = classify("## 第一部分 总则").unwrap();
        assert_eq!(m.level, 1);
        assert_eq!(m.label, "第一部分 总则");
        assert_eq!(m.style, HeadingStyle::Part);
    }

    #[test]
    fn test_arabic_part_number() {
        assert_eq!(level_of("第1条 定义"), Some(1));
        assert_eq!(level_of("第12章 附则"), Some(2));
    }

    #[test]
    fn test_chinese_numeral_bullet() {
        let m = classify("一、合作范围").unwrap();
        assert_eq!(m.level, 2);
        assert_eq!(m.label, "一、合作范围");
        assert_eq!(m.style, HeadingStyle::ChineseNumeral);
    }

    #[test]
    fn test_arabic_dot_threshold() {
        assert_eq!(level_of("1. 总则"), Some(2));
        assert_eq!(level_of("10. 争议解决"), Some(2));
        assert_eq!(level_of("11. 其他"), Some(3));
    }

    #[test]
    fn test_subsection_levels() {
        let m = classify("1.1 定义").unwrap();
        assert_eq!(m.level, 2);
        assert_eq!(m.style, HeadingStyle::Subsection);

        let m = classify("1.1.1 术语").unwrap();
        assert_eq!(m.level, 3);
        assert_eq!(m.style, HeadingStyle::Subsubsection);
    }

    #[test]
    fn test_circled_digit() {
        assert_eq!(level_of("① 供方责任"), Some(3));
    }

    #[test]
    fn test_non_headings() {
        assert_eq!(classify("本合同自双方签字之日起生效。"), None);
        assert_eq!(classify("3,000元"), None);
    }

    #[test]
    fn test_four_level_number_is_deep_enumeration() {
        // Anything deeper than three levels is still treated as level 3
        assert_eq!(level_of("1.1.1.1 deep"), Some(3));
    }

    #[test]
    fn test_arabic_dot_not_followed_by_digit() {
        // "1.5折" style decimals must not classify as arabic-dot headings
        assert!(classify("1.5 优惠方案").is_some_and(|m| m.style == HeadingStyle::Subsection));
        assert_eq!(match_style("1.5 优惠方案").map(|(s, _)| s), Some(HeadingStyle::Subsection));
    }

    #[test]
    fn test_label_keeps_trailing_title() {
        let m = classify("2. 范围").unwrap();
        assert_eq!(m.label, "2. 范围");
    }
}
