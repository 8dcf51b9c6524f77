//! Fallback classifier for documents without any detected boundary.
//!
//! When the scanner finds nothing, the whole document is classified as a
//! single module (or dropped as noise). Rules run in fixed priority order;
//! the first match wins.

use crate::config::{FALLBACK_ATTACHMENT_WINDOW, FALLBACK_BODY_MIN_LINES, FALLBACK_PREAMBLE_WINDOW};
use crate::patterns::{
    ATTACHMENT_MARKER, AUTHORIZED_REP, CHAPTER_MARKER, COVER_KEYWORDS, FALLBACK_PREAMBLE_START,
    PREAMBLE_START, SIGNATURE_PAGE, SIGNATURE_PARTY_CN, SIGNATURE_PARTY_EN, TOC_ROW,
};
use crate::types::{Module, ModuleKind};

/// Signature patterns accepted by the fallback (broader than the scanner:
/// also authorized-representative lines).
fn is_fallback_signature(line: &str) -> bool {
    SIGNATURE_PARTY_CN.is_match(line)
        || SIGNATURE_PARTY_EN.is_match(line)
        || SIGNATURE_PAGE.is_match(line)
        || AUTHORIZED_REP.is_match(line)
}

/// Recital openers accepted by the fallback (also 背景/前言).
fn is_fallback_preamble(line: &str) -> bool {
    PREAMBLE_START.is_match(line) || FALLBACK_PREAMBLE_START.is_match(line)
}

/// Classify unmarked content into a module type.
///
/// `start_line` is the position of the content within the document; the
/// cover rule only applies to content starting at line 0.
pub(crate) fn classify_content(lines: &[&str], start_line: usize) -> Option<ModuleKind> {
    let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();
    if non_blank == 0 {
        return None;
    }

    if lines.iter().any(|l| TOC_ROW.is_match(l.trim())) {
        return Some(ModuleKind::Toc);
    }

    if lines
        .iter()
        .take(FALLBACK_PREAMBLE_WINDOW)
        .any(|l| is_fallback_preamble(l.trim()))
    {
        return Some(ModuleKind::Preamble);
    }

    if lines.iter().any(|l| is_fallback_signature(l.trim())) {
        return Some(ModuleKind::Signature);
    }

    if lines
        .iter()
        .take(FALLBACK_ATTACHMENT_WINDOW)
        .any(|l| ATTACHMENT_MARKER.is_match(l.trim()))
    {
        return Some(ModuleKind::Attachment);
    }

    let has_chapters = lines.iter().any(|l| CHAPTER_MARKER.is_match(l.trim()));
    if has_chapters && non_blank >= FALLBACK_BODY_MIN_LINES {
        return Some(ModuleKind::Body);
    }

    if start_line == 0 {
        if let Some(first) = lines.first() {
            if COVER_KEYWORDS.iter().any(|kw| first.contains(kw)) {
                return Some(ModuleKind::Cover);
            }
        }
    }

    // Unmarked content is noise, not a module
    None
}

/// Classify a whole boundary-less document as a single module.
///
/// Returns `None` (no module at all) when the content is empty or too
/// short and unmarked to classify.
#[must_use]
pub fn classify_document(lines: &[&str]) -> Option<Module> {
    let joined = lines.join("\n");
    let content = joined.trim();
    if content.is_empty() {
        return None;
    }

    let content_lines: Vec<&str> = content.split('\n').collect();
    let kind = classify_content(&content_lines, 0)?;
    tracing::debug!(kind = kind.as_str(), "fallback classified whole document");

    Some(Module::new(
        kind,
        content,
        0,
        lines.len().saturating_sub(1),
    ))
}
