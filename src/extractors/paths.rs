//! Current-path accumulation.
//!
//! This module provides the `PathBuilder` type that collects path construction
//! operators between two path terminations.
//!
//! # PDF Path Operations
//!
//! PDF paths are constructed using a sequence of operators:
//! - `m` (MoveTo): Begin a new subpath
//! - `l` (LineTo): Add a line segment
//! - `c`, `v`, `y` (CurveTo variants): Add Bezier curve segments
//! - `re` (Rectangle): Add a rectangle as a complete subpath
//! - `h` (ClosePath): Close the current subpath
//!
//! The accumulated path is consumed and reset by the painting operators
//! (`S`, `f`, `B`, ...) and by `n`.
//!
//! # Example
//!
//! ```
//! use pdf_rulings::extractors::{PathBuilder, PathState};
//! use pdf_rulings::geometry::Point;
//!
//! let mut path = PathBuilder::new();
//! path.move_to(Point::new(100.0, 100.0));
//! path.line_to(Point::new(200.0, 100.0));
//! path.close_path();
//! assert_eq!(path.state(), PathState::Accumulating);
//! assert_eq!(path.len(), 3);
//!
//! path.reset();
//! assert_eq!(path.state(), PathState::Empty);
//! ```

use crate::content::page::PageTransform;
use crate::geometry::{Point, Rect};

/// One segment of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new subpath at the point
    MoveTo(Point),
    /// Straight line to the point
    LineTo(Point),
    /// Cubic Bézier curve: two control points and the end point
    CurveTo(Point, Point, Point),
    /// Close the subpath back to its starting point
    ClosePath,
}

impl PathSegment {
    /// The point this segment ends at. `None` for `ClosePath`.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
            PathSegment::CurveTo(_, _, p) => Some(*p),
            PathSegment::ClosePath => None,
        }
    }

    /// Map every point of the segment through the page transform.
    pub fn transform(&self, transform: &PageTransform) -> PathSegment {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(transform.apply(*p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(transform.apply(*p)),
            PathSegment::CurveTo(c1, c2, p) => PathSegment::CurveTo(
                transform.apply(*c1),
                transform.apply(*c2),
                transform.apply(*p),
            ),
            PathSegment::ClosePath => PathSegment::ClosePath,
        }
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        let points: [Option<Point>; 3] = match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => [Some(p), None, None],
            PathSegment::CurveTo(c1, c2, p) => [Some(c1), Some(c2), Some(p)],
            PathSegment::ClosePath => [None, None, None],
        };
        points.into_iter().flatten()
    }
}

/// Lifecycle state of the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    /// No segments since the last reset
    Empty,
    /// At least one segment appended
    Accumulating,
}

/// The single mutable current path of a page.
///
/// Appends move the builder to `Accumulating`; `reset` returns it to `Empty`.
/// No validation happens here: a path starting with a line or containing
/// curves is stored as given and judged when it is painted.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
    state: PathState,
}

impl PathBuilder {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            state: PathState::Empty,
        }
    }

    // === Path Construction Operators ===

    /// Move to a point (m operator).
    ///
    /// A move directly after another move replaces it.
    pub fn move_to(&mut self, p: Point) {
        if let Some(PathSegment::MoveTo(last)) = self.segments.last_mut() {
            *last = p;
            return;
        }
        self.push(PathSegment::MoveTo(p));
    }

    /// Line to a point (l operator).
    pub fn line_to(&mut self, p: Point) {
        self.push(PathSegment::LineTo(p));
    }

    /// Cubic Bezier curve (c operator).
    pub fn curve_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.push(PathSegment::CurveTo(c1, c2, p));
    }

    /// Close the current subpath (h operator).
    ///
    /// Closing an already closed subpath has no effect.
    pub fn close_path(&mut self) {
        if matches!(self.segments.last(), Some(PathSegment::ClosePath)) {
            return;
        }
        self.push(PathSegment::ClosePath);
    }

    /// Rectangle (re operator) from its four corners.
    ///
    /// Expands to a move, three lines and a close.
    pub fn append_rectangle(&mut self, p0: Point, p1: Point, p2: Point, p3: Point) {
        self.move_to(p0);
        self.line_to(p1);
        self.line_to(p2);
        self.line_to(p3);
        self.close_path();
    }

    /// Discard every segment.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.state = PathState::Empty;
    }

    fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
        self.state = PathState::Accumulating;
    }

    // === Queries ===

    /// Current lifecycle state.
    pub fn state(&self) -> PathState {
        self.state
    }

    /// Segments accumulated since the last reset.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Segments mapped into page space.
    pub fn transformed<'a>(
        &'a self,
        transform: &'a PageTransform,
    ) -> impl Iterator<Item = PathSegment> + 'a {
        self.segments.iter().map(move |s| s.transform(transform))
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if no segment has been appended since the last reset.
    pub fn is_empty(&self) -> bool {
        self.state == PathState::Empty
    }

    /// The point the next segment would start from.
    ///
    /// After a close this is the start of the closed subpath. `None` for an
    /// empty path.
    pub fn current_point(&self) -> Option<Point> {
        match self.segments.last()? {
            PathSegment::ClosePath => self.segments.iter().rev().find_map(|s| match s {
                PathSegment::MoveTo(p) => Some(*p),
                _ => None,
            }),
            segment => segment.end_point(),
        }
    }

    /// Bounding box of all points, curve control points included.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.segments.iter().flat_map(|s| s.points()))
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
