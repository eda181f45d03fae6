//! Affine transformation matrices.

use crate::geometry::{Point, Rect};

/// A 2D affine transformation matrix.
///
/// PDF uses matrices of the form:
/// ```text
/// [ a  b  0 ]
/// [ c  d  0 ]
/// [ e  f  1 ]
/// ```
///
/// Where (a,b,c,d) define scaling/rotation/skewing and (e,f) define translation.
/// A point maps to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Horizontal scaling component
    pub a: f32,
    /// Rotation/skew component
    pub b: f32,
    /// Rotation/skew component
    pub c: f32,
    /// Vertical scaling component
    pub d: f32,
    /// Horizontal translation
    pub e: f32,
    /// Vertical translation
    pub f: f32,
}

impl Matrix {
    /// Create an identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::content::Matrix;
    ///
    /// let m = Matrix::identity();
    /// assert_eq!(m.a, 1.0);
    /// assert_eq!(m.d, 1.0);
    /// assert_eq!(m.e, 0.0);
    /// assert_eq!(m.f, 0.0);
    /// ```
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::content::Matrix;
    ///
    /// let m = Matrix::translation(10.0, 20.0);
    /// assert_eq!(m.e, 10.0);
    /// assert_eq!(m.f, 20.0);
    /// ```
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::identity()
        }
    }

    /// Create a scaling matrix.
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Create a rotation about the origin, counter-clockwise in a y-up frame.
    ///
    /// Quarter turns use exact sine and cosine values so that axis-aligned
    /// geometry stays axis-aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::content::Matrix;
    ///
    /// let m = Matrix::rotation_degrees(90);
    /// let p = m.transform_point(10.0, 0.0);
    /// assert_eq!(p.x, 0.0);
    /// assert_eq!(p.y, 10.0);
    /// ```
    pub fn rotation_degrees(degrees: i32) -> Self {
        let (sin, cos) = match degrees.rem_euclid(360) {
            0 => (0.0, 1.0),
            90 => (1.0, 0.0),
            180 => (0.0, -1.0),
            270 => (-1.0, 0.0),
            _ => {
                let radians = degrees as f64 * (std::f64::consts::PI / 180.0);
                (radians.sin(), radians.cos())
            },
        };
        Self {
            a: cos as f32,
            b: sin as f32,
            c: -sin as f32,
            d: cos as f32,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Concatenate two matrices.
    ///
    /// Matrix multiplication is not commutative: A * B ≠ B * A.
    /// The result applies `self` first, then `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::content::Matrix;
    ///
    /// let m = Matrix::translation(10.0, 20.0).multiply(&Matrix::scaling(2.0, 2.0));
    /// let p = m.transform_point(5.0, 5.0);
    /// assert_eq!((p.x, p.y), (30.0, 50.0));
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Transform a point using this matrix.
    pub fn transform_point(&self, x: f32, y: f32) -> Point {
        // Accumulate in f64 so page-sized translations do not lose the low bits.
        let (x, y) = (x as f64, y as f64);
        Point {
            x: (self.a as f64 * x + self.c as f64 * y + self.e as f64) as f32,
            y: (self.b as f64 * x + self.d as f64 * y + self.f as f64) as f32,
        }
    }

    /// Transform a point value.
    pub fn apply(&self, p: Point) -> Point {
        self.transform_point(p.x, p.y)
    }

    /// Transform a rectangle and return the bounding box of the result.
    ///
    /// Note that the result is not a rotated rectangle, but an axis-aligned
    /// rectangle that tightly fits the transformed corners.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        Rect::bounding(rect.corners().iter().map(|p| self.apply(*p))).unwrap_or_else(Rect::empty)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}
