//! Clause path builder: the single pass that turns heading matches into
//! `ClauseRecord`s.
//!
//! The builder owns a heading-path stack and a line buffer. Each heading
//! flushes the buffer against the path as it stood *before* the heading,
//! then adjusts the stack so its length equals the heading's level.

use crate::config::{PATH_SEPARATOR, ROOT_MARKER};
use crate::hierarchy::heading::classify;
use crate::types::ClauseRecord;

/// Per-parse session state for the clause hierarchy pipeline.
///
/// Construct fresh for each document; nothing is shared across calls.
pub struct ClausePathBuilder {
    path: Vec<String>,
    buffer: Vec<String>,
    records: Vec<ClauseRecord>,
}

impl ClausePathBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            buffer: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Feed one raw document line.
    ///
    /// Blank lines are inert. Non-heading lines that arrive before the
    /// first detected heading are discarded (front-matter loss, by design).
    pub fn push_line(&mut self, raw_line: &str) {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some(heading) = classify(trimmed) {
            self.flush();

            let level = heading.level as usize;
            // A same-or-shallower heading retires deeper nesting
            if self.path.len() >= level {
                self.path.truncate(level - 1);
            }
            self.path.push(heading.label);

            self.buffer.push(raw_line.to_string());
        } else if !self.path.is_empty() {
            self.buffer.push(raw_line.to_string());
        }
    }

    /// Flush the remaining buffer and return all emitted records.
    #[must_use]
    pub fn finish(mut self) -> Vec<ClauseRecord> {
        self.flush();
        self.records
    }

    /// Current path depth, exposed for invariant checks in tests.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Emit a record for the buffered lines, if they hold any text.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let joined = self.buffer.join("\n");
        let clause = joined.trim().trim_start_matches('#').trim_start();

        if !clause.is_empty() {
            let path = std::iter::once(ROOT_MARKER)
                .chain(self.path.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(PATH_SEPARATOR);
            self.records.push(ClauseRecord {
                path,
                clause: clause.to_string(),
            });
        }

        self.buffer.clear();
    }
}

impl Default for ClausePathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a document into clause hierarchy records.
#[must_use]
pub fn parse_clauses(text: &str) -> Vec<ClauseRecord> {
    let mut builder = ClausePathBuilder::new();
    for line in text.split('\n') {
        builder.push_line(line);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_part_headings() {
        let text = "## 第一部分 总则\n内容A\n## 第二部分 定义\n内容B";
        let records = parse_clauses(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, "~/第一部分 总则");
        assert_eq!(records[0].clause, "第一部分 总则\n内容A");
        assert_eq!(records[1].path, "~/第二部分 定义");
        assert_eq!(records[1].clause, "第二部分 定义\n内容B");
    }

    #[test]
    fn test_nested_chapter_and_section() {
        let text = "第一章 总则\n第一节 一般规定\n条文内容\n第二章 义务";
        let records = parse_clauses(text);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].path, "~/第一章 总则");
        assert_eq!(records[1].path, "~/第一章 总则/第一节 一般规定");
        assert_eq!(records[1].clause, "第一节 一般规定\n条文内容");
        // The level-2 chapter retires the level-3 section; with no level-1
        // part above it, the first chapter stays as the level-1 slot.
        assert_eq!(records[2].path, "~/第一章 总则/第二章 义务");
    }

    #[test]
    fn test_subsection_replaces_same_level() {
        // Both "1." and "1.1" are level 2, so "1.1" replaces "1. 总则"
        // on the stack rather than nesting beneath it. Designed behavior.
        let text = "1. 总则\n1.1 定义\n2. 范围";
        let records = parse_clauses(text);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].path, "~/1. 总则");
        assert_eq!(records[1].path, "~/1.1 定义");
        assert_eq!(records[2].path, "~/2. 范围");
    }

    #[test]
    fn test_front_matter_is_discarded() {
        let text = "落款日期：2024年1月\n未编号前言\n一、范围\n内容";
        let records = parse_clauses(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "~/一、范围");
        assert_eq!(records[0].clause, "一、范围\n内容");
    }

    #[test]
    fn test_blank_lines_are_inert() {
        let text = "一、范围\n\n内容\n\n\n二、期限";
        let records = parse_clauses(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].clause, "一、范围\n内容");
    }

    #[test]
    fn test_no_headings_yields_no_records() {
        let records = parse_clauses("纯文本内容\n没有任何标题");
        assert!(records.is_empty());
    }

    #[test]
    fn test_final_buffer_is_flushed() {
        let text = "一、范围\n最后的内容";
        let records = parse_clauses(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].clause, "一、范围\n最后的内容");
    }

    #[test]
    fn test_path_depth_tracks_heading_level() {
        let mut builder = ClausePathBuilder::new();
        builder.push_line("第一部分 总则");
        assert_eq!(builder.depth(), 1);
        builder.push_line("第一章 通用条款");
        assert_eq!(builder.depth(), 2);
        builder.push_line("第一节 定义");
        assert_eq!(builder.depth(), 3);
        builder.push_line("第二章 特别条款");
        assert_eq!(builder.depth(), 2);
        builder.push_line("第二部分 附则");
        assert_eq!(builder.depth(), 1);
    }

    #[test]
    fn test_heading_only_clause_uses_pre_update_path() {
        // The record flushed by the second heading carries the path as it
        // stood while the first clause accumulated.
        let text = "一、范围\n内容\n二、期限";
        let records = parse_clauses(text);
        assert_eq!(records[0].path, "~/一、范围");
    }
}
