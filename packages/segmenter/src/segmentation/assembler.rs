//! Module assembler: converts boundary markers into non-overlapping,
//! ordered module spans.
//!
//! The partition runs in a fixed order (cover, toc, preamble, body,
//! signature, attachments) with an advancing cursor, so the emitted
//! sequence is in document order by construction.

use crate::patterns::{SEAL_LITERALS, SIGNATURE_HINTS, SIGNATURE_PAGE, SIGNATURE_PARTY_CN};
use crate::types::{BoundaryMarker, Module, ModuleKind};

/// Key marker positions distilled from the boundary list.
#[derive(Debug, Default)]
struct Markers {
    toc: Option<usize>,
    preamble: Option<usize>,
    body: Option<usize>,
    signature: Option<usize>,
    attachments: Vec<usize>,
}

impl Markers {
    fn from_boundaries(boundaries: &[BoundaryMarker]) -> Self {
        let mut markers = Self::default();
        for b in boundaries {
            match b.kind {
                ModuleKind::Toc => markers.toc.get_or_insert(b.line),
                ModuleKind::Preamble => markers.preamble.get_or_insert(b.line),
                ModuleKind::Body => markers.body.get_or_insert(b.line),
                ModuleKind::Signature => markers.signature.get_or_insert(b.line),
                ModuleKind::Attachment => {
                    markers.attachments.push(b.line);
                    continue;
                }
                ModuleKind::Cover => continue,
            };
        }
        markers
    }

    fn first_attachment(&self) -> Option<usize> {
        self.attachments.first().copied()
    }
}

/// Strict signature cut: the in-body line where signature content begins.
///
/// Deliberately narrower than the scanner's signature rule: only the Chinese
/// party/seal forms and a dedicated signature page cut the body. Western
/// `Party A Signature:` lines stay inside the body span.
pub(crate) fn is_body_cut(line: &str) -> bool {
    SIGNATURE_PARTY_CN.is_match(line)
        || SIGNATURE_PAGE.is_match(line)
        || SEAL_LITERALS.iter().any(|lit| line.contains(lit))
}

/// Broad signature indicator used when deciding whether a trailing span is
/// a signature block at all.
pub(crate) fn is_signature_indicator(line: &str) -> bool {
    is_body_cut(line) || SIGNATURE_HINTS.iter().any(|hint| line.contains(hint))
}

/// Nearest marker strictly after `after` among the candidates, else `total`.
fn next_marker(candidates: &[Option<usize>], after: usize, total: usize) -> usize {
    candidates
        .iter()
        .flatten()
        .copied()
        .filter(|&pos| pos > after)
        .min()
        .unwrap_or(total)
}

/// Build a module from a half-open line span, dropping empty content.
fn make_module(kind: ModuleKind, lines: &[&str], start: usize, end: usize) -> Option<Module> {
    if start >= end {
        return None;
    }
    let text = lines[start..end].join("\n");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Module::new(kind, text, start, end - 1))
}

/// Partition the document into modules according to the boundary list.
#[must_use]
pub fn assemble(lines: &[&str], boundaries: &[BoundaryMarker]) -> Vec<Module> {
    let markers = Markers::from_boundaries(boundaries);
    let total = lines.len();
    let mut modules = Vec::new();
    let mut cursor = 0usize;

    // Cover: everything before the first toc/preamble/body marker
    let first_marker = [markers.toc, markers.preamble, markers.body]
        .iter()
        .flatten()
        .copied()
        .min();
    if let Some(first) = first_marker {
        if first > 0 {
            modules.extend(make_module(ModuleKind::Cover, lines, 0, first));
            cursor = first;
        }
    }

    // Table of contents
    if let Some(toc) = markers.toc {
        if toc >= cursor {
            let end = next_marker(
                &[
                    markers.preamble,
                    markers.body,
                    markers.signature,
                    markers.first_attachment(),
                ],
                toc,
                total,
            );
            modules.extend(make_module(ModuleKind::Toc, lines, toc, end));
            cursor = end;
        }
    }

    // Preamble
    if let Some(preamble) = markers.preamble {
        if preamble >= cursor {
            let end = next_marker(
                &[
                    markers.body,
                    markers.signature,
                    markers.first_attachment(),
                ],
                preamble,
                total,
            );
            modules.extend(make_module(ModuleKind::Preamble, lines, preamble, end));
            cursor = end;
        }
    }

    // Body, ended early by an explicit in-body signature cut
    if let Some(body) = markers.body {
        if body >= cursor {
            let limit = markers
                .first_attachment()
                .filter(|&a| a > body)
                .unwrap_or(total);
            let body_end = (body..limit)
                .find(|&i| is_body_cut(lines[i].trim()))
                .unwrap_or(limit);
            modules.extend(make_module(ModuleKind::Body, lines, body, body_end));
            cursor = body_end;
        }
    }

    // Signature: the span between body and attachments, only when it
    // actually contains a signature indicator
    let sig_end = markers.first_attachment().unwrap_or(total);
    if sig_end > cursor {
        let found = (cursor..sig_end).any(|i| is_signature_indicator(lines[i].trim()));
        if found {
            modules.extend(make_module(ModuleKind::Signature, lines, cursor, sig_end));
            cursor = sig_end;
        }
    }

    // Attachments: each marker up to the next marker or end of document
    for (idx, &start) in markers.attachments.iter().enumerate() {
        if start < cursor {
            continue;
        }
        let end = markers
            .attachments
            .get(idx + 1)
            .copied()
            .unwrap_or(total);
        modules.extend(make_module(ModuleKind::Attachment, lines, start, end));
        cursor = end;
    }

    modules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::boundary::scan_boundaries;
    use pretty_assertions::assert_eq;

    fn run(lines: &[&str]) -> Vec<Module> {
        assemble(lines, &scan_boundaries(lines))
    }

    fn kinds(modules: &[Module]) -> Vec<ModuleKind> {
        modules.iter().map(|m| m.kind).collect()
    }

    #[test]
    fn test_five_module_contract() {
        let lines = vec![
            "合同编号：ABC-001",
            "服务合同",
            "目录",
            "第一条 定义.......... 2",
            "第一条 定义",
            "本合同所称服务是指……",
            "甲方（盖章）：____",
            "乙方（盖章）：____",
            "附件1 保密协议",
            "保密条款内容",
        ];
        let modules = run(&lines);
        assert_eq!(
            kinds(&modules),
            vec![
                ModuleKind::Cover,
                ModuleKind::Toc,
                ModuleKind::Body,
                ModuleKind::Signature,
                ModuleKind::Attachment,
            ]
        );
        assert!(modules[0].text.contains("合同编号：ABC-001"));
        assert!(modules[2].text.starts_with("第一条 定义"));
        assert!(modules[3].text.contains("甲方（盖章）"));
        assert!(modules[4].text.starts_with("附件1 保密协议"));
    }

    #[test]
    fn test_modules_are_non_overlapping_and_ordered() {
        let lines = vec![
            "购销合同",
            "鉴于双方达成如下协议",
            "第一条 标的",
            "货物明细",
            "甲方（盖章）签字：",
            "附件1 验收单",
        ];
        let modules = run(&lines);
        for pair in modules.windows(2) {
            assert!(
                pair[0].end_line < pair[1].start_line,
                "{:?} overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_no_signature_module_without_indicator() {
        let lines = vec![
            "第一条 标的",
            "货物明细",
            "交付方式",
            "附件1 验收单",
            "验收标准",
        ];
        let modules = run(&lines);
        assert_eq!(
            kinds(&modules),
            vec![ModuleKind::Body, ModuleKind::Attachment]
        );
        // Body runs straight to the attachment
        assert_eq!(modules[0].end_line, 2);
        assert_eq!(modules[1].start_line, 3);
    }

    #[test]
    fn test_western_party_lines_do_not_cut_body() {
        // Only the Chinese party/seal forms cut the body; with no broad
        // indicator either, the trailing span yields no signature module
        let lines = vec![
            "Article 1 Definitions",
            "Scope of services.",
            "Party A Signature: ________",
            "Party B Signature: ________",
            "ANNEX 1",
            "Terms.",
        ];
        let modules = run(&lines);
        assert_eq!(
            kinds(&modules),
            vec![ModuleKind::Body, ModuleKind::Attachment]
        );
        assert!(modules[0].text.contains("Party B Signature"));
        assert_eq!(modules[0].end_line, 3);
        assert_eq!(modules[1].start_line, 4);
    }

    #[test]
    fn test_body_cut_by_seal_literal() {
        let lines = vec![
            "第一条 标的",
            "货物明细",
            "甲方（盖章）：",
            "乙方（盖章）：",
        ];
        let modules = run(&lines);
        assert_eq!(
            kinds(&modules),
            vec![ModuleKind::Body, ModuleKind::Signature]
        );
        assert_eq!(modules[0].end_line, 1);
        assert_eq!(modules[1].start_line, 2);
    }

    #[test]
    fn test_body_extends_to_end_without_signature() {
        let lines = vec!["第一条 标的", "货物明细", "质量标准"];
        let modules = run(&lines);
        assert_eq!(kinds(&modules), vec![ModuleKind::Body]);
        assert_eq!(modules[0].start_line, 0);
        assert_eq!(modules[0].end_line, 2);
    }

    #[test]
    fn test_multiple_attachments_split_at_markers() {
        let lines = vec![
            "第一条 标的",
            "内容",
            "附件1 保密协议",
            "保密内容",
            "附件2 价格表",
            "价格内容",
        ];
        let modules = run(&lines);
        assert_eq!(
            kinds(&modules),
            vec![
                ModuleKind::Body,
                ModuleKind::Attachment,
                ModuleKind::Attachment
            ]
        );
        assert_eq!(modules[1].text, "附件1 保密协议\n保密内容");
        assert_eq!(modules[2].text, "附件2 价格表\n价格内容");
    }

    #[test]
    fn test_preamble_before_body() {
        let lines = vec![
            "鉴于甲方需要咨询服务",
            "鉴于乙方具备相应资质",
            "第一条 服务内容",
            "咨询范围如下",
        ];
        let modules = run(&lines);
        assert_eq!(
            kinds(&modules),
            vec![ModuleKind::Preamble, ModuleKind::Body]
        );
        assert_eq!(modules[0].text, "鉴于甲方需要咨询服务\n鉴于乙方具备相应资质");
    }

    #[test]
    fn test_module_text_trimmed_of_blank_lines() {
        let lines = vec!["封面标题", "", "第一条 标的", "内容"];
        let modules = run(&lines);
        assert_eq!(modules[0].kind, ModuleKind::Cover);
        assert_eq!(modules[0].text, "封面标题");
    }

    #[test]
    fn test_cover_absent_when_document_opens_with_marker() {
        let lines = vec!["第一条 标的", "内容"];
        let modules = run(&lines);
        assert_eq!(kinds(&modules), vec![ModuleKind::Body]);
    }
}
