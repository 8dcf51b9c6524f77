//! Configuration constants for the segmenter heuristics.

/// Root marker prepended to every clause path.
pub const ROOT_MARKER: &str = "~";

/// Separator joining heading labels into a clause path.
pub const PATH_SEPARATOR: &str = "/";

/// Number of non-empty lines sampled by the style detector.
pub const STYLE_SAMPLE_LINES: usize = 100;

/// Lookahead window (in lines) used to reject chapter headings that are
/// actually table-of-contents rows.
///
/// A real chapter heading is assumed not to be immediately followed by rows
/// ending in a dotted leader and page number.
pub const BODY_TOC_LOOKAHEAD: usize = 5;

/// Largest Arabic bullet value still treated as top-level enumeration.
///
/// `1.` through `10.` become level-2 headings; larger values are assumed to
/// be deep enumeration in long documents and get level 3.
pub const ARABIC_TOP_LEVEL_MAX: u64 = 10;

/// How many leading lines the fallback classifier inspects for recital
/// markers.
pub const FALLBACK_PREAMBLE_WINDOW: usize = 5;

/// How many leading lines the fallback classifier inspects for attachment
/// markers.
pub const FALLBACK_ATTACHMENT_WINDOW: usize = 3;

/// Minimum non-blank line count for the fallback body rule; content shorter
/// than this is dropped as noise even when it carries a chapter marker.
pub const FALLBACK_BODY_MIN_LINES: usize = 3;
