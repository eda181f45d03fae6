//! Geometric primitives for ruling extraction.
//!
//! This module provides the point and rectangle types shared by the page
//! transform, the clip tracker and the ruling extractor, together with the
//! rounded point ordering used to canonicalize segment endpoints.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::utils::safe_float_cmp;

/// Decimal places used when rounding coordinates for comparison.
pub const COMPARISON_PLACES: i32 = 2;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates rounded half away from zero to `places` decimals.
    pub fn rounded(&self, places: i32) -> Point {
        Point::new(round_to(self.x, places), round_to(self.y, places))
    }

    /// True when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle.
///
/// `(x, y)` is the corner with the smallest coordinates; in page space that is
/// the top-left corner, in device space the bottom-left one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the minimum corner
    pub x: f32,
    /// Y coordinate of the minimum corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    ///
    /// The corners may be given in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::geometry::Rect;
    ///
    /// let rect = Rect::from_points(110.0, 70.0, 10.0, 20.0);
    /// assert_eq!(rect.x, 10.0);
    /// assert_eq!(rect.y, 20.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Smallest rectangle containing every point, or `None` for no points.
    pub fn bounding<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect::from_points(min_x, min_y, max_x, max_y))
    }

    /// An empty rectangle at the origin.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The four corners, starting at the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }

    /// A rectangle with no area encloses nothing, not even its own edges.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Overlap of two rectangles. Disjoint rectangles give an empty rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let r2 = Rect::new(50.0, 25.0, 100.0, 100.0);
    /// assert_eq!(r1.intersection(&r2), Rect::new(50.0, 25.0, 50.0, 75.0));
    /// assert!(r1.intersection(&Rect::new(300.0, 0.0, 1.0, 1.0)).is_empty());
    /// ```
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.left().max(other.left());
        let y0 = self.top().max(other.top());
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 < x0 || y1 < y0 {
            return Rect::empty();
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Clip the segment `p1`-`p2` to this rectangle (Cohen-Sutherland).
    ///
    /// Edges count as inside; an empty rectangle clips everything away.
    /// Returns the part of the segment inside the rectangle, keeping the
    /// segment's direction, or `None` when the segment misses the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::geometry::{Point, Rect};
    ///
    /// let clip = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let (a, b) = clip
    ///     .clip_segment(Point::new(-50.0, 10.0), Point::new(50.0, 10.0))
    ///     .unwrap();
    /// assert_eq!(a, Point::new(0.0, 10.0));
    /// assert_eq!(b, Point::new(50.0, 10.0));
    /// ```
    pub fn clip_segment(&self, p1: Point, p2: Point) -> Option<(Point, Point)> {
        if self.is_empty() || !p1.is_finite() || !p2.is_finite() {
            return None;
        }

        let x_min = self.left() as f64;
        let x_max = self.right() as f64;
        let y_min = self.top() as f64;
        let y_max = self.bottom() as f64;
        let outcode = |x: f64, y: f64| -> u8 {
            let mut code = INSIDE;
            if x < x_min {
                code |= LEFT;
            } else if x > x_max {
                code |= RIGHT;
            }
            if y < y_min {
                code |= TOP;
            } else if y > y_max {
                code |= BOTTOM;
            }
            code
        };

        let (mut x0, mut y0) = (p1.x as f64, p1.y as f64);
        let (mut x1, mut y1) = (p2.x as f64, p2.y as f64);
        let mut code0 = outcode(x0, y0);
        let mut code1 = outcode(x1, y1);

        loop {
            if code0 | code1 == INSIDE {
                return Some((
                    Point::new(x0 as f32, y0 as f32),
                    Point::new(x1 as f32, y1 as f32),
                ));
            }
            if code0 & code1 != INSIDE {
                return None;
            }

            let out = if code0 != INSIDE { code0 } else { code1 };
            // The divisions are safe: an endpoint outside on an axis means the
            // segment spans that axis whenever the trivial reject above failed.
            let (x, y) = if out & BOTTOM != 0 {
                (x0 + (x1 - x0) * (y_max - y0) / (y1 - y0), y_max)
            } else if out & TOP != 0 {
                (x0 + (x1 - x0) * (y_min - y0) / (y1 - y0), y_min)
            } else if out & RIGHT != 0 {
                (x_max, y0 + (y1 - y0) * (x_max - x0) / (x1 - x0))
            } else {
                (x_min, y0 + (y1 - y0) * (x_min - x0) / (x1 - x0))
            };

            if out == code0 {
                x0 = x;
                y0 = y;
                code0 = outcode(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                code1 = outcode(x1, y1);
            }
        }
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Round half away from zero to `places` decimal places.
///
/// # Examples
///
/// ```
/// use pdf_rulings::geometry::round_to;
///
/// assert_eq!(round_to(1.234, 2), 1.23);
/// assert_eq!(round_to(1.235, 2), 1.24);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f64.powi(places);
    ((value as f64 * factor).round() / factor) as f32
}

/// Compare two points after rounding both to two decimals.
///
/// Orders by y ascending, then x ascending. Points equal after rounding compare
/// equal. This is a total order, so `(p1, p2)` picked with it is the same for a
/// segment whichever end it was drawn from.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use pdf_rulings::geometry::{compare_points, Point};
///
/// let a = Point::new(50.0, 10.0);
/// let b = Point::new(10.0, 20.0);
/// assert_eq!(compare_points(&a, &b), Ordering::Less);
/// assert_eq!(compare_points(&Point::new(1.001, 2.0), &Point::new(1.0, 2.0)), Ordering::Equal);
/// ```
pub fn compare_points(a: &Point, b: &Point) -> Ordering {
    let a = a.rounded(COMPARISON_PLACES);
    let b = b.rounded(COMPARISON_PLACES);
    safe_float_cmp(a.y, b.y).then_with(|| safe_float_cmp(a.x, b.x))
}

/// Order a segment's endpoints with [`compare_points`].
///
/// The first endpoint is kept first unless it is strictly greater.
pub fn ordered_endpoints(a: Point, b: Point) -> (Point, Point) {
    if compare_points(&a, &b) == Ordering::Less {
        (a, b)
    } else {
        (b, a)
    }
}

/// Compute the Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use pdf_rulings::geometry::{Point, euclidean_distance};
///
/// let p1 = Point::new(0.0, 0.0);
/// let p2 = Point::new(3.0, 4.0);
///
/// assert_eq!(euclidean_distance(&p1, &p2), 5.0);
/// ```
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f32 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}
