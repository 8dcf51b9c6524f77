//! Core data types for the segmenter.
//!
//! These types carry the two output views of a contract: the clause
//! hierarchy (Pipeline A) and the semantic module sequence (Pipeline B).
//! Everything here is transient per parse call; nothing is shared across
//! documents.

use serde::Serialize;

/// The semantic module types a contract decomposes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Title page: contract name, number, parties.
    Cover,

    /// Table of contents.
    Toc,

    /// Recitals ("whereas" clauses, 鉴于/根据 openings).
    Preamble,

    /// The operative clauses, from the first chapter or article heading.
    Body,

    /// Signature and seal block.
    Signature,

    /// Annex / appendix (one module per attachment).
    Attachment,
}

impl ModuleKind {
    /// Get the string value used in JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Toc => "toc",
            Self::Preamble => "preamble",
            Self::Body => "body",
            Self::Signature => "signature",
            Self::Attachment => "attachment",
        }
    }
}

/// The dominant heading numbering convention observed in a document.
///
/// Diagnostic output of the style detector; no downstream component gates
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    /// 第N部分 / 第N章 / 第N节 / 第N条 markers.
    #[serde(rename = "part")]
    Part,

    /// Chinese-numeral bullets: 一、二、三、
    #[serde(rename = "chinese_num")]
    ChineseNumeral,

    /// Arabic dotted numbers: 1. 2. 3.
    ArabicDot,

    /// Circled-digit bullets: ①②③
    #[serde(rename = "circled_num")]
    CircledNumeral,

    /// Two-level Arabic subsections: 1.1
    Subsection,

    /// Three-level Arabic subsections: 1.1.1
    Subsubsection,

    /// No heading pattern matched in the sample.
    Unknown,
}

impl HeadingStyle {
    /// Get the style id used in diagnostic output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::ChineseNumeral => "chinese_num",
            Self::ArabicDot => "arabic_dot",
            Self::CircledNumeral => "circled_num",
            Self::Subsection => "subsection",
            Self::Subsubsection => "subsubsection",
            Self::Unknown => "unknown",
        }
    }
}

/// One clause from the heading hierarchy.
///
/// `path` is the root marker joined with the heading labels leading to this
/// clause; `clause` is the text from the triggering heading (inclusive) up to
/// the next heading (exclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseRecord {
    /// Slash-joined heading path, e.g. `~/第一章 总则/第一条 定义`.
    pub path: String,

    /// Clause text, trimmed and stripped of leading markdown hashes.
    pub clause: String,
}

/// A line index tagged with the module type it is believed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryMarker {
    /// 0-based line index.
    pub line: usize,

    /// Module type this line starts.
    pub kind: ModuleKind,
}

/// A semantic module of the document.
///
/// Line fields are kept for span bookkeeping and invariant checks; JSON
/// output carries only `type` and `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Module type.
    #[serde(rename = "type")]
    pub kind: ModuleKind,

    /// Module text, trimmed of leading/trailing blank lines.
    pub text: String,

    /// 0-based index of the first line in the span.
    #[serde(skip)]
    pub start_line: usize,

    /// 0-based index of the last line in the span (inclusive).
    #[serde(skip)]
    pub end_line: usize,
}

impl Module {
    /// Create a module from an already-trimmed text and its line span.
    #[must_use]
    pub fn new(kind: ModuleKind, text: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start_line,
            end_line,
        }
    }
}

/// Combined result of running both pipelines plus the style diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedContract {
    /// Detected dominant heading style.
    pub style: HeadingStyle,

    /// Clause hierarchy records (Pipeline A).
    pub clauses: Vec<ClauseRecord>,

    /// Semantic modules (Pipeline B).
    pub modules: Vec<Module>,
}
