//! Contract Segmenter - structural segmentation of plain-text contracts.
//!
//! Contracts arrive as plain text with mixed numbering conventions (Chinese
//! numerals, Arabic numerals, circled digits, Chapter/Article markers) and
//! no markup. This crate infers structure heuristically and produces two
//! complementary views:
//!
//! - a clause hierarchy keyed by heading path (Pipeline A)
//! - a flat sequence of semantic modules: cover, table of contents,
//!   preamble, body, signature block, attachments (Pipeline B)
//!
//! # Example
//!
//! ```
//! use contract_segmenter::{parse_clauses, segment_modules};
//!
//! let text = "第一条 定义\n本合同所称服务是指咨询服务。";
//! let clauses = parse_clauses(text);
//! assert_eq!(clauses[0].path, "~/第一条 定义");
//!
//! let modules = segment_modules("第一条 定义\n本合同所称服务是指咨询服务。\n费用按月结算。");
//! assert_eq!(modules[0].kind.as_str(), "body");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: heuristic constants (sample sizes, windows, thresholds)
//! - [`types`]: core data types (`ClauseRecord`, `Module`, markers)
//! - [`error`]: error types and Result alias
//! - [`patterns`]: shared boundary pattern tables
//! - [`hierarchy`]: Pipeline A (style detection, heading classification,
//!   clause path building)
//! - [`segmentation`]: Pipeline B (boundary scan, module assembly,
//!   fallback classification)
//! - [`output`]: JSON output generation
//! - [`cli`]: command-line interface
//!
//! Both pipelines are pure and deterministic: parsing never fails, and a
//! document without recognizable structure yields empty output rather than
//! an error.

pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod output;
mod patterns;
pub mod segmentation;
pub mod types;

pub use error::{Result, SegmenterError};
pub use hierarchy::{detect_style, parse_clauses, ClausePathBuilder};
pub use segmentation::segment_modules;
pub use types::{BoundaryMarker, ClauseRecord, HeadingStyle, Module, ModuleKind, ParsedContract};

/// Run both pipelines plus the style diagnostic over one document.
#[must_use]
pub fn parse(text: &str) -> ParsedContract {
    ParsedContract {
        style: detect_style(text),
        clauses: parse_clauses(text),
        modules: segment_modules(text),
    }
}
