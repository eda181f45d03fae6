// Curve callbacks take six coordinates
#![allow(clippy::too_many_arguments)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Rulings
//!
//! Extracts straight-line "rulings" (table gridlines) from the vector drawing
//! operators of a single PDF page, ready for downstream table-structure detection.
//!
//! ## Core Features
//!
//! - **Page Normalisation**: rotation- and crop-box-aware transform into page
//!   space (origin top-left, y downward)
//! - **Path Accumulation**: move/line/curve/close/rectangle operators collected
//!   into one current path, reset after every paint or path end
//! - **Line-Only Filtering**: any path containing a Bézier curve is discarded
//! - **Deferred Clipping**: `W`/`W*` take effect at the next path end, as in the
//!   PDF drawing model
//! - **Ruling Emission**: segments canonicalised, clipped to the active clip
//!   region and kept when longer than a minimum length
//!
//! ## Architecture
//!
//! The content-stream interpreter (not part of this crate) decodes the page and
//! calls [`GraphicsStreamHandler`] methods in stream order. [`RulingExtractor`]
//! implements the handler and owns the page's ruling collection.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_rulings::{GraphicsStreamHandler, PageGeometry, RulingConfig, RulingExtractor};
//! use pdf_rulings::geometry::{Point, Rect};
//!
//! let page = PageGeometry::new(Rect::new(0.0, 0.0, 612.0, 792.0), 0);
//! let mut extractor = RulingExtractor::new(page, RulingConfig::default());
//!
//! extractor.append_rectangle(
//!     Point::new(100.0, 600.0),
//!     Point::new(300.0, 600.0),
//!     Point::new(300.0, 700.0),
//!     Point::new(100.0, 700.0),
//! );
//! extractor.stroke_path();
//!
//! let rulings = extractor.finish();
//! assert_eq!(rulings.len(), 4);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry
pub mod geometry;

// Content stream state: transforms, clipping, operators
pub mod content;

// Path accumulation and ruling extraction
pub mod extractors;

/// Extracted page elements
pub mod elements;

// Re-exports
pub use config::RulingConfig;
pub use content::{ClipRegionTracker, Matrix, Operator, PageGeometry, PageTransform, WindingRule};
pub use elements::Ruling;
pub use error::{Error, Result};
pub use extractors::{GraphicsStreamHandler, PathBuilder, PathSegment, RulingExtractor};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Compare two floats with a total order.
    ///
    /// NaN sorts after every number and equal to itself.
    /// This keeps point ordering total even for malformed coordinates.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f32::NAN, f32::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f32::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f32::NAN), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
