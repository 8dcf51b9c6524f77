//! Boundary scanner: locates candidate start lines of semantic modules.
//!
//! Each classification rule is an independent pure predicate over a trimmed
//! line plus (for the body rule) a bounded lookahead window, so exclusion
//! logic stays unit-testable in isolation from the full-document scan.

use crate::config::BODY_TOC_LOOKAHEAD;
use crate::patterns::{
    ATTACHMENT_MARKER, CHAPTER_MARKER, DOTTED_LEADER, DOTTED_LEADER_END, PREAMBLE_START,
    SIGNATURE_PAGE, SIGNATURE_PARTY_CN, SIGNATURE_PARTY_EN, TOC_HEADING, TOC_ROW,
};
use crate::types::{BoundaryMarker, ModuleKind};

/// Exact table-of-contents heading line.
pub(crate) fn is_toc_heading(line: &str) -> bool {
    TOC_HEADING.is_match(line)
}

/// Recital opener starting a preamble.
pub(crate) fn is_preamble_start(line: &str) -> bool {
    PREAMBLE_START.is_match(line)
}

/// Raw chapter/article marker, before TOC-row exclusion.
pub(crate) fn is_chapter_heading(line: &str) -> bool {
    CHAPTER_MARKER.is_match(line)
}

/// Chapter marker that qualifies as a body start.
///
/// Excluded when the line itself ends in a dotted leader plus page number,
/// or when any line of the lookahead window contains that pattern: a real
/// chapter heading is assumed not to be immediately followed by more TOC
/// rows.
pub(crate) fn is_body_start(line: &str, lookahead: &[&str]) -> bool {
    if !is_chapter_heading(line) {
        return false;
    }
    if DOTTED_LEADER_END.is_match(line) {
        return false;
    }
    !lookahead.iter().any(|next| DOTTED_LEADER.is_match(next))
}

/// Explicit party-signature or signature-page line.
pub(crate) fn is_signature_line(line: &str) -> bool {
    SIGNATURE_PARTY_CN.is_match(line)
        || SIGNATURE_PARTY_EN.is_match(line)
        || SIGNATURE_PAGE.is_match(line)
}

/// Attachment/annex/appendix marker, excluding TOC rows.
pub(crate) fn is_attachment_start(line: &str) -> bool {
    if TOC_ROW.is_match(line) {
        return false;
    }
    ATTACHMENT_MARKER.is_match(line)
}

/// Classify one line, first match in fixed order wins.
fn classify_line(line: &str, lookahead: &[&str]) -> Option<ModuleKind> {
    if is_toc_heading(line) {
        Some(ModuleKind::Toc)
    } else if is_preamble_start(line) {
        Some(ModuleKind::Preamble)
    } else if is_chapter_heading(line) {
        // Chapter markers that fail the TOC exclusion are consumed here so
        // they cannot fall through to weaker rules
        if is_body_start(line, lookahead) {
            Some(ModuleKind::Body)
        } else {
            tracing::debug!(line = %line, "chapter marker rejected as TOC row");
            None
        }
    } else if is_signature_line(line) {
        Some(ModuleKind::Signature)
    } else if is_attachment_start(line) {
        Some(ModuleKind::Attachment)
    } else {
        None
    }
}

/// Scan all lines and produce the ordered boundary list.
///
/// toc/preamble/body/signature record only their first occurrence;
/// attachments record every qualifying line.
#[must_use]
pub fn scan_boundaries(lines: &[&str]) -> Vec<BoundaryMarker> {
    let mut markers = Vec::new();
    let mut seen_toc = false;
    let mut seen_preamble = false;
    let mut seen_body = false;
    let mut seen_signature = false;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let window_end = (i + 1 + BODY_TOC_LOOKAHEAD).min(lines.len());
        let lookahead = &lines[(i + 1).min(lines.len())..window_end];

        let Some(kind) = classify_line(line, lookahead) else {
            continue;
        };

        let seen = match kind {
            ModuleKind::Toc => &mut seen_toc,
            ModuleKind::Preamble => &mut seen_preamble,
            ModuleKind::Body => &mut seen_body,
            ModuleKind::Signature => &mut seen_signature,
            ModuleKind::Attachment => {
                markers.push(BoundaryMarker { line: i, kind });
                continue;
            }
            ModuleKind::Cover => continue,
        };
        if !*seen {
            *seen = true;
            markers.push(BoundaryMarker { line: i, kind });
        }
    }

    markers
}
