//! Ruling extraction from page drawing operators.
//!
//! Paths are accumulated by [`PathBuilder`], filtered by [`is_line_only`] and
//! turned into rulings by [`RulingExtractor`].

pub mod classifier;
pub mod paths;
pub mod rulings;

pub use classifier::is_line_only;
pub use paths::{PathBuilder, PathSegment, PathState};
pub use rulings::{GraphicsStreamHandler, RulingExtractor};
