//! Pipeline B: semantic module segmentation.
//!
//! - [`boundary`]: per-line candidate detection for the six module types
//! - [`assembler`]: turns the boundary list into ordered, non-overlapping
//!   module spans
//! - [`fallback`]: whole-document classification when no boundary exists

pub mod assembler;
pub mod boundary;
pub mod fallback;

pub use assembler::assemble;
pub use boundary::scan_boundaries;
pub use fallback::classify_document;

use crate::types::Module;

/// Segment a document into semantic modules.
///
/// Runs the boundary scan; when it comes back empty the whole document is
/// handed to the fallback classifier, which may still decide the content
/// is noise and emit nothing.
#[must_use]
pub fn segment_modules(text: &str) -> Vec<Module> {
    let lines: Vec<&str> = text.split('\n').collect();
    let boundaries = scan_boundaries(&lines);

    if boundaries.is_empty() {
        tracing::debug!("no boundaries detected, classifying whole document");
        return classify_document(&lines).into_iter().collect();
    }

    assemble(&lines, &boundaries)
}
