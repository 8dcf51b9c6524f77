//! Pipeline A: clause hierarchy extraction.
//!
//! Three stages share one pass over the document lines:
//!
//! - [`style`]: samples the opening lines to name the dominant heading
//!   convention (diagnostic only)
//! - [`heading`]: per-line heading detection and level assignment
//! - [`builder`]: the path-stack walk that emits [`crate::types::ClauseRecord`]s

pub mod builder;
pub mod heading;
pub mod style;

pub use builder::{parse_clauses, ClausePathBuilder};
pub use heading::{classify, HeadingMatch};
pub use style::detect_style;
