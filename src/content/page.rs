//! Page geometry and the device-to-page-space transform.
//!
//! Page space has its origin at the top-left corner of the crop box, x to the
//! right and y downward, independent of how the page is stored.

use crate::content::matrix::Matrix;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

/// Crop box and rotation of a page, fixed for the page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Crop box in device space (lower-left corner at `x`, `y`)
    pub crop_box: Rect,
    /// Page rotation in degrees, as stored in the page dictionary
    pub rotation: i32,
}

impl PageGeometry {
    /// Create page geometry from a crop box and rotation.
    pub fn new(crop_box: Rect, rotation: i32) -> Self {
        Self { crop_box, rotation }
    }

    /// Create page geometry, rejecting a crop box with non-finite values.
    pub fn try_new(crop_box: Rect, rotation: i32) -> Result<Self> {
        let values = [
            ("x", crop_box.x),
            ("y", crop_box.y),
            ("width", crop_box.width),
            ("height", crop_box.height),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidGeometry(format!("crop box {} is {}", name, value)));
        }
        Ok(Self::new(crop_box, rotation))
    }

    /// True for a quarter-turn rotation (±90 or ±270 degrees).
    pub fn is_quarter_turn(&self) -> bool {
        matches!(self.rotation.abs(), 90 | 270)
    }
}

/// Mapping from device space into normalised page space.
///
/// Computed once per page and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    matrix: Matrix,
}

impl PageTransform {
    /// Build the transform for a page.
    ///
    /// Quarter-turn pages get a pure rotation about the origin. Every other
    /// rotation value, including unexpected ones, falls back to shifting the
    /// crop box to the origin and flipping y so it grows downward.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_rulings::content::{PageGeometry, PageTransform};
    /// use pdf_rulings::geometry::Rect;
    ///
    /// let page = PageGeometry::new(Rect::new(0.0, 0.0, 612.0, 792.0), 0);
    /// let transform = PageTransform::new(&page);
    /// let p = transform.transform_point(72.0, 720.0);
    /// assert_eq!((p.x, p.y), (72.0, 72.0));
    /// ```
    pub fn new(page: &PageGeometry) -> Self {
        let matrix = if page.is_quarter_turn() {
            Matrix::rotation_degrees(page.rotation)
        } else {
            if page.rotation != 0 && page.rotation.abs() != 180 {
                log::debug!(
                    "Unexpected page rotation {}, using unrotated page transform",
                    page.rotation
                );
            }
            let crop = page.crop_box;
            Matrix::translation(-crop.x, -crop.y)
                .multiply(&Matrix::scaling(1.0, -1.0))
                .multiply(&Matrix::translation(0.0, crop.height))
        };
        Self { matrix }
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Map a device-space point into page space.
    pub fn transform_point(&self, x: f32, y: f32) -> Point {
        self.matrix.transform_point(x, y)
    }

    /// Map a device-space point value into page space.
    pub fn apply(&self, p: Point) -> Point {
        self.matrix.apply(p)
    }

    /// Bounding box in page space of a device-space rectangle.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        self.matrix.transform_rect(rect)
    }
}
