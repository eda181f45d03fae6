//! Line-only path filtering.
//!
//! Rulings are straight, so only paths built purely from moves, lines and
//! closes can yield them. Rounded rectangles and other curved decorations
//! would otherwise be misread as grid lines.
//!
//! Whether the path is stroked or filled is not considered: many tables are
//! drawn as thin filled rectangles rather than stroked lines.

use crate::extractors::paths::PathSegment;

/// Check whether a path consists solely of straight-line segments.
///
/// The path must start with a move; every later segment must be a move, a
/// line or a close. An empty path does not qualify.
///
/// # Examples
///
/// ```
/// use pdf_rulings::extractors::{is_line_only, PathSegment};
/// use pdf_rulings::geometry::Point;
///
/// let p = Point::new(0.0, 0.0);
/// assert!(is_line_only(&[PathSegment::MoveTo(p), PathSegment::LineTo(p)]));
/// assert!(!is_line_only(&[PathSegment::LineTo(p)]));
/// assert!(!is_line_only(&[PathSegment::MoveTo(p), PathSegment::CurveTo(p, p, p)]));
/// ```
pub fn is_line_only(segments: &[PathSegment]) -> bool {
    match segments.split_first() {
        Some((PathSegment::MoveTo(_), rest)) => rest
            .iter()
            .all(|s| !matches!(s, PathSegment::CurveTo(..))),
        _ => false,
    }
}
