//! Ruling line element type.
//!
//! A ruling is an undirected straight segment in page space that may be part
//! of a table grid. Rulings are immutable once created.

use serde::{Deserialize, Serialize};

use crate::geometry::{euclidean_distance, Point, Rect};

/// Segments within this many degrees of an axis are snapped onto it.
const AXIS_SNAP_DEGREES: f64 = 1.0;

/// Tolerance for coordinate equality in orientation checks.
const ORIENTATION_EPSILON: f32 = 0.01;

/// A straight line segment in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ruling {
    p1: Point,
    p2: Point,
}

impl Ruling {
    /// Create a ruling between two points.
    ///
    /// A segment within one degree of horizontal or vertical is made exactly
    /// axis-aligned by moving `p2` onto the axis through `p1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::elements::Ruling;
    /// use pdf_rulings::geometry::Point;
    ///
    /// let r = Ruling::new(Point::new(0.0, 10.0), Point::new(100.0, 10.5));
    /// assert_eq!(r.end(), Point::new(100.0, 10.0));
    /// assert!(r.is_horizontal());
    /// ```
    pub fn new(p1: Point, p2: Point) -> Self {
        let angle = angle_degrees(p1, p2);
        let p2 = if near(angle, 0.0) || near(angle, 180.0) || near(angle, 360.0) {
            Point::new(p2.x, p1.y)
        } else if near(angle, 90.0) || near(angle, 270.0) {
            Point::new(p1.x, p2.y)
        } else {
            p2
        };
        Self { p1, p2 }
    }

    /// First endpoint.
    pub fn start(&self) -> Point {
        self.p1
    }

    /// Second endpoint.
    pub fn end(&self) -> Point {
        self.p2
    }

    /// Length of the segment.
    pub fn length(&self) -> f32 {
        euclidean_distance(&self.p1, &self.p2)
    }

    /// Direction of `p1 -> p2` in degrees, in `[0, 360)`.
    pub fn angle(&self) -> f64 {
        angle_degrees(self.p1, self.p2)
    }

    /// Check if both endpoints share a y coordinate.
    pub fn is_horizontal(&self) -> bool {
        (self.p1.y - self.p2.y).abs() < ORIENTATION_EPSILON
    }

    /// Check if both endpoints share an x coordinate.
    pub fn is_vertical(&self) -> bool {
        (self.p1.x - self.p2.x).abs() < ORIENTATION_EPSILON
    }

    /// Check if the ruling is neither horizontal nor vertical.
    pub fn is_oblique(&self) -> bool {
        !(self.is_horizontal() || self.is_vertical())
    }

    /// The constant coordinate of an axis-aligned ruling: y for horizontal,
    /// x for vertical. `None` for oblique rulings.
    pub fn position(&self) -> Option<f32> {
        if self.is_oblique() {
            None
        } else if self.is_vertical() {
            Some(self.p1.x)
        } else {
            Some(self.p1.y)
        }
    }

    /// Bounding box of the segment.
    pub fn bbox(&self) -> Rect {
        Rect::from_points(self.p1.x, self.p1.y, self.p2.x, self.p2.y)
    }

    /// The part of this ruling inside `clip`, or `None` if it misses `clip`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::elements::Ruling;
    /// use pdf_rulings::geometry::{Point, Rect};
    ///
    /// let r = Ruling::new(Point::new(-10.0, 5.0), Point::new(50.0, 5.0));
    /// let clipped = r.intersect(&Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
    /// assert_eq!(clipped.start(), Point::new(0.0, 5.0));
    /// assert_eq!(clipped.end(), Point::new(20.0, 5.0));
    /// ```
    pub fn intersect(&self, clip: &Rect) -> Option<Ruling> {
        clip.clip_segment(self.p1, self.p2)
            .map(|(p1, p2)| Ruling::new(p1, p2))
    }
}

fn angle_degrees(p1: Point, p2: Point) -> f64 {
    let dy = (p2.y - p1.y) as f64;
    let dx = (p2.x - p1.x) as f64;
    let angle = dy.atan2(dx).to_degrees();
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

fn near(angle: f64, axis: f64) -> bool {
    (angle - axis).abs() < AXIS_SNAP_DEGREES
}
