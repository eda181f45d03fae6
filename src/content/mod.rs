//! Content stream state seen by the ruling extractor.
//!
//! This module covers the page transform, the clip region with its
//! save/restore stack, and the operators an interpreter replays into the
//! extractor.

pub mod graphics_state;
pub mod matrix;
pub mod operators;
pub mod page;

pub use graphics_state::{ClipRegionTracker, WindingRule};
pub use matrix::Matrix;
pub use operators::Operator;
pub use page::{PageGeometry, PageTransform};
