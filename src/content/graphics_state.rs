//! Clip region tracking for content stream execution.
//!
//! The clip region is the part of the graphics state this crate needs. It is
//! tracked as a device-space rectangle: the bounding box of the intersection of
//! every clipping path applied so far on the page.
//!
//! Clipping in PDF is deferred. `W` and `W*` only mark the current path; the
//! clip changes when the path is ended by the next path-termination operator,
//! using the path as it stands at that moment.

use crate::content::page::PageTransform;
use crate::extractors::paths::PathBuilder;
use crate::geometry::Rect;

/// Rule deciding the interior of a path used for filling or clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingRule {
    /// Non-zero winding number rule (W, f, B operators)
    NonZero,
    /// Even-odd rule (W*, f*, B* operators)
    EvenOdd,
}

/// Active clip region with a save/restore stack and a pending clip declaration.
///
/// # Examples
///
/// ```
/// use pdf_rulings::content::{ClipRegionTracker, WindingRule};
/// use pdf_rulings::extractors::PathBuilder;
/// use pdf_rulings::geometry::{Point, Rect};
///
/// let mut clip = ClipRegionTracker::new(Rect::new(0.0, 0.0, 612.0, 792.0));
/// let mut path = PathBuilder::new();
///
/// path.append_rectangle(
///     Point::new(50.0, 50.0),
///     Point::new(150.0, 50.0),
///     Point::new(150.0, 100.0),
///     Point::new(50.0, 100.0),
/// );
/// clip.set_pending_clip(WindingRule::NonZero);
/// assert_eq!(clip.clip(), Rect::new(0.0, 0.0, 612.0, 792.0));
///
/// clip.on_path_termination(&mut path);
/// assert_eq!(clip.clip(), Rect::new(50.0, 50.0, 100.0, 50.0));
/// assert!(path.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ClipRegionTracker {
    stack: Vec<Rect>,
    pending: Option<WindingRule>,
}

impl ClipRegionTracker {
    /// Create a tracker whose clip starts as `initial` (device space).
    pub fn new(initial: Rect) -> Self {
        Self {
            stack: vec![initial],
            pending: None,
        }
    }

    /// Current clip rectangle in device space.
    pub fn clip(&self) -> Rect {
        self.stack.last().copied().unwrap_or_else(Rect::empty)
    }

    /// Current clip rectangle's bounding box in page space.
    pub fn page_bounds(&self, transform: &PageTransform) -> Rect {
        let clip = self.clip();
        if clip.is_empty() {
            return Rect::empty();
        }
        transform.transform_rect(&clip)
    }

    /// Replace the current clip, e.g. with one inherited from the interpreter.
    pub fn set_clip(&mut self, clip: Rect) {
        if let Some(top) = self.stack.last_mut() {
            *top = clip;
        }
    }

    /// Record that the next path termination must clip with `rule`.
    pub fn set_pending_clip(&mut self, rule: WindingRule) {
        self.pending = Some(rule);
    }

    /// Winding rule of a clip declared but not yet applied.
    pub fn pending_clip(&self) -> Option<WindingRule> {
        self.pending
    }

    /// End the current path.
    ///
    /// Applies a pending clip using the path accumulated up to now, then
    /// clears the pending flag. The path is reset in every case.
    pub fn on_path_termination(&mut self, path: &mut PathBuilder) {
        if let Some(rule) = self.pending.take() {
            self.intersect_path(path, rule);
        }
        path.reset();
    }

    /// Narrow the current clip by a path's region.
    ///
    /// The region is approximated by the bounding box of the path's points,
    /// which encloses the fill region under either winding rule. A path with
    /// no area clips everything away.
    pub fn intersect_path(&mut self, path: &PathBuilder, rule: WindingRule) {
        let current = self.clip();
        let narrowed = match path.bounds() {
            Some(bounds) if !bounds.is_empty() => current.intersection(&bounds),
            _ => Rect::empty(),
        };
        log::debug!(
            "Clip ({:?}) narrowed from {:?} to {:?}",
            rule,
            current,
            narrowed
        );
        self.set_clip(narrowed);
    }

    /// Save the current clip (q operator).
    pub fn save(&mut self) {
        let clip = self.clip();
        self.stack.push(clip);
    }

    /// Restore the previously saved clip (Q operator).
    ///
    /// If only the initial clip remains, this operation has no effect.
    pub fn restore(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Get the current stack depth.
    ///
    /// The depth is always at least 1 (the initial clip).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
