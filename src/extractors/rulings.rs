//! Ruling extraction from painted paths.
//!
//! This module provides the [`GraphicsStreamHandler`] callback interface a
//! content-stream interpreter drives in stream order, and [`RulingExtractor`],
//! the handler that turns painted line-only paths into [`Ruling`] records.
//!
//! # Example
//!
//! ```
//! use pdf_rulings::{Operator, PageGeometry, RulingConfig, RulingExtractor};
//! use pdf_rulings::geometry::Rect;
//!
//! let page = PageGeometry::new(Rect::new(0.0, 0.0, 612.0, 792.0), 0);
//! let mut extractor = RulingExtractor::new(page, RulingConfig::default());
//!
//! let ops = [
//!     Operator::from_raw("m", &[72.0, 700.0]).unwrap(),
//!     Operator::from_raw("l", &[540.0, 700.0]).unwrap(),
//!     Operator::from_raw("S", &[]).unwrap(),
//! ];
//! extractor.replay(&ops);
//!
//! let rulings = extractor.rulings();
//! assert_eq!(rulings.len(), 1);
//! assert_eq!(rulings[0].start().y, 92.0);
//! ```

use crate::config::RulingConfig;
use crate::content::graphics_state::{ClipRegionTracker, WindingRule};
use crate::content::operators::Operator;
use crate::content::page::{PageGeometry, PageTransform};
use crate::elements::Ruling;
use crate::error::Result;
use crate::extractors::classifier::is_line_only;
use crate::extractors::paths::{PathBuilder, PathSegment};
use crate::geometry::{ordered_endpoints, Point, Rect, COMPARISON_PLACES};

/// Callbacks a content-stream interpreter invokes, strictly in stream order.
///
/// Coordinates are in device space. Image and shading operators are accepted
/// so that interpreters can forward everything; the defaults ignore them.
pub trait GraphicsStreamHandler {
    /// Append a rectangle given by its four corners (re).
    fn append_rectangle(&mut self, p0: Point, p1: Point, p2: Point, p3: Point);

    /// Declare a clip with the given winding rule (W, W*).
    fn clip(&mut self, rule: WindingRule);

    /// Close the current subpath (h).
    fn close_path(&mut self);

    /// Append a cubic Bézier curve (c, and v/y once resolved).
    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32);

    /// End the path without painting it (n).
    fn end_path(&mut self);

    /// Stroke the current path (S).
    fn stroke_path(&mut self);

    /// Fill the current path (f, F, f*).
    fn fill_path(&mut self, rule: WindingRule);

    /// Fill and stroke the current path (B, B*).
    fn fill_and_stroke_path(&mut self, rule: WindingRule);

    /// Append a straight line (l).
    fn line_to(&mut self, x: f32, y: f32);

    /// Begin a new subpath (m).
    fn move_to(&mut self, x: f32, y: f32);

    /// The current point of the path under construction.
    fn current_point(&self) -> Option<Point>;

    /// Paint an image.
    fn draw_image(&mut self) {}

    /// Paint a shading.
    fn shading_fill(&mut self) {}

    /// Save the graphics state (q).
    fn save_graphics_state(&mut self) {}

    /// Restore the graphics state (Q).
    fn restore_graphics_state(&mut self) {}

    /// Dispatch one operator to the matching callback.
    ///
    /// `v` and `y` are resolved against the current point; without one they
    /// start a new subpath at their end point.
    fn handle_operator(&mut self, op: &Operator) {
        match *op {
            Operator::MoveTo { x, y } => self.move_to(x, y),
            Operator::LineTo { x, y } => self.line_to(x, y),
            Operator::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x3,
                y3,
            } => self.curve_to(x1, y1, x2, y2, x3, y3),
            Operator::CurveToV { x2, y2, x3, y3 } => match self.current_point() {
                Some(c1) => self.curve_to(c1.x, c1.y, x2, y2, x3, y3),
                None => {
                    log::warn!("curveTo (v) without initial moveTo, moving to ({}, {})", x3, y3);
                    self.move_to(x3, y3);
                },
            },
            Operator::CurveToY { x1, y1, x3, y3 } => {
                if self.current_point().is_none() {
                    log::warn!("curveTo (y) without initial moveTo, moving to ({}, {})", x3, y3);
                    self.move_to(x3, y3);
                } else {
                    self.curve_to(x1, y1, x3, y3, x3, y3);
                }
            },
            Operator::ClosePath => self.close_path(),
            Operator::Rectangle { corners } => {
                self.append_rectangle(corners[0], corners[1], corners[2], corners[3])
            },
            Operator::Stroke => self.stroke_path(),
            Operator::CloseStroke => {
                self.close_path();
                self.stroke_path();
            },
            Operator::Fill(rule) => self.fill_path(rule),
            Operator::FillStroke(rule) => self.fill_and_stroke_path(rule),
            Operator::CloseFillStroke(rule) => {
                self.close_path();
                self.fill_and_stroke_path(rule);
            },
            Operator::EndPath => self.end_path(),
            Operator::Clip(rule) => self.clip(rule),
            Operator::SaveState => self.save_graphics_state(),
            Operator::RestoreState => self.restore_graphics_state(),
            Operator::DrawImage => self.draw_image(),
            Operator::ShadingFill => self.shading_fill(),
        }
    }
}

/// Extracts rulings from one page's drawing operators.
///
/// Holds the page's single current path, its clip region and the ordered
/// ruling collection. One instance per page; instances share nothing, so
/// pages can be processed in parallel.
#[derive(Debug, Clone)]
pub struct RulingExtractor {
    config: RulingConfig,
    transform: PageTransform,
    path: PathBuilder,
    clip: ClipRegionTracker,
    rulings: Vec<Ruling>,
}

impl RulingExtractor {
    /// Create an extractor whose clip region starts as the page's crop box.
    pub fn new(page: PageGeometry, config: RulingConfig) -> Self {
        Self::with_clip(page, config, page.crop_box)
    }

    /// Create an extractor with a clip region inherited from the interpreter
    /// (device space).
    pub fn with_clip(page: PageGeometry, config: RulingConfig, clip: Rect) -> Self {
        Self {
            config,
            transform: PageTransform::new(&page),
            path: PathBuilder::new(),
            clip: ClipRegionTracker::new(clip),
            rulings: Vec::new(),
        }
    }

    /// Create an extractor after validating the configuration.
    pub fn try_new(page: PageGeometry, config: RulingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(page, config))
    }

    /// Feed a sequence of operators through the handler callbacks in order.
    pub fn replay<'a, I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = &'a Operator>,
    {
        for op in ops {
            self.handle_operator(op);
        }
    }

    /// The page transform, for mapping further geometry into page space.
    pub fn page_transform(&self) -> &PageTransform {
        &self.transform
    }

    /// The configuration this extractor runs with.
    pub fn config(&self) -> &RulingConfig {
        &self.config
    }

    /// The current path.
    pub fn path(&self) -> &PathBuilder {
        &self.path
    }

    /// The clip region tracker.
    pub fn clip_region(&self) -> &ClipRegionTracker {
        &self.clip
    }

    /// Replace the active clip region (device space).
    pub fn set_clip(&mut self, clip: Rect) {
        self.clip.set_clip(clip);
    }

    /// Rulings emitted so far, in emission order.
    pub fn rulings(&self) -> &[Ruling] {
        &self.rulings
    }

    /// Get the number of rulings emitted so far.
    pub fn ruling_count(&self) -> usize {
        self.rulings.len()
    }

    /// Finish extraction and return all rulings.
    pub fn finish(self) -> Vec<Ruling> {
        self.rulings
    }

    fn stroke_or_fill_path(&mut self, is_stroke: bool, is_fill: bool) {
        if !self.config.extract_rulings {
            self.path.reset();
            return;
        }

        if !is_line_only(self.path.segments()) {
            log::debug!(
                "Discarding path of {} segments (stroke={}, fill={}): not line-only",
                self.path.len(),
                is_stroke,
                is_fill
            );
            self.path.reset();
            return;
        }

        let clip = self.clip.page_bounds(&self.transform);
        for (a, b) in self.candidate_segments() {
            self.add_ruling(a, b, &clip);
        }
        self.path.reset();
    }

    /// Walk the current path in page space and collect candidate segments.
    ///
    /// The first segment only seeds the start point (rounded). Lines connect
    /// the previous end point to their own; closes connect the previous end
    /// point back to the last move. Segments with unusable coordinates are
    /// skipped without ending the walk.
    fn candidate_segments(&self) -> Vec<(Point, Point)> {
        let mut segments = self.path.transformed(&self.transform);
        let mut candidates = Vec::new();

        let mut start_point = segments
            .next()
            .and_then(|s| s.end_point())
            .filter(Point::is_finite)
            .map(|p| p.rounded(COMPARISON_PLACES));
        let mut last_move = start_point;
        let mut end_point: Option<Point> = None;

        for segment in segments {
            match segment {
                PathSegment::LineTo(p) => {
                    if !p.is_finite() {
                        log::debug!("Skipping line segment with malformed coordinates {:?}", p);
                        continue;
                    }
                    end_point = Some(p);
                    if let (Some(start), Some(end)) = (start_point, end_point) {
                        candidates.push((start, end));
                    }
                },
                PathSegment::MoveTo(p) => {
                    if !p.is_finite() {
                        log::debug!("Skipping move segment with malformed coordinates {:?}", p);
                        continue;
                    }
                    last_move = Some(p);
                    end_point = last_move;
                },
                PathSegment::ClosePath => {
                    if let (Some(_), Some(end), Some(back_to)) = (start_point, end_point, last_move)
                    {
                        candidates.push((end, back_to));
                    }
                },
                // Rejected before the walk
                PathSegment::CurveTo(..) => {},
            }
            start_point = end_point;
        }
        candidates
    }

    /// Canonicalise, snap, clip and keep a candidate segment if it is long enough.
    ///
    /// Snapping happens before clipping so a gridline keeps the position of its
    /// canonical start point whatever clip edge cuts it.
    fn add_ruling(&mut self, a: Point, b: Point, clip: &Rect) {
        let (p1, p2) = ordered_endpoints(a, b);
        let Some(ruling) = Ruling::new(p1, p2).intersect(clip) else {
            log::trace!("Dropping segment {:?}-{:?} outside clip {:?}", p1, p2, clip);
            return;
        };

        if ruling.length() > self.config.min_ruling_length {
            log::trace!("Ruling {:?}-{:?}", ruling.start(), ruling.end());
            self.rulings.push(ruling);
        }
    }
}

impl GraphicsStreamHandler for RulingExtractor {
    fn append_rectangle(&mut self, p0: Point, p1: Point, p2: Point, p3: Point) {
        self.path.append_rectangle(p0, p1, p2, p3);
    }

    fn clip(&mut self, rule: WindingRule) {
        // Applied by the next end_path, not by painting operators.
        self.clip.set_pending_clip(rule);
    }

    fn close_path(&mut self) {
        self.path.close_path();
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.path
            .curve_to(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3));
    }

    fn end_path(&mut self) {
        self.clip.on_path_termination(&mut self.path);
    }

    fn stroke_path(&mut self) {
        self.stroke_or_fill_path(true, false);
    }

    fn fill_path(&mut self, _rule: WindingRule) {
        self.stroke_or_fill_path(false, true);
    }

    fn fill_and_stroke_path(&mut self, _rule: WindingRule) {
        self.stroke_or_fill_path(true, true);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(Point::new(x, y));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(Point::new(x, y));
    }

    fn current_point(&self) -> Option<Point> {
        self.path.current_point()
    }

    fn draw_image(&mut self) {
        log::trace!("Ignoring image: images never yield rulings");
    }

    fn shading_fill(&mut self) {
        log::trace!("Ignoring shading fill: shadings never yield rulings");
    }

    fn save_graphics_state(&mut self) {
        self.clip.save();
    }

    fn restore_graphics_state(&mut self) {
        self.clip.restore();
    }
}
