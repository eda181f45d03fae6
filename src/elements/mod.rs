//! Page elements produced by extraction.
//!
//! Only rulings live here: undirected straight segments in page space,
//! consumed by downstream table detection.

mod ruling;

pub use ruling::Ruling;
