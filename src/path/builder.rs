//! Curve through the card centers.
//!
//! Consecutive centers are joined by one cubic bezier each. Pairs on the
//! same row (two-column layouts) get a downward arc; everything else gets
//! an S-curve whose sweep alternates direction from segment to segment.

use serde::{Deserialize, Serialize};

use crate::layout::Position;

/// A point in path space: `x` in percent, `y` in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Percent of container width.
    pub x: f64,
    /// Pixels from the top of the container.
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Shape parameters for [`build_path_with`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// How far (pixels) a same-row arc dips below its endpoints.
    pub arc_dip: f64,

    /// Horizontal overshoot (percent) of S-curve control points.
    pub swoop_x: f64,

    /// Vertical distance (pixels) under which two centers count as one row.
    pub same_row_threshold: f64,
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            arc_dip: 80.0,
            swoop_x: 10.0,
            same_row_threshold: 10.0,
        }
    }
}

impl PathParams {
    /// Set the arc dip.
    #[must_use]
    pub fn with_arc_dip(mut self, dip: f64) -> Self {
        self.arc_dip = dip;
        self
    }

    /// Set the S-curve overshoot.
    #[must_use]
    pub fn with_swoop_x(mut self, swoop: f64) -> Self {
        self.swoop_x = swoop;
        self
    }

    /// Set the same-row threshold.
    #[must_use]
    pub fn with_same_row_threshold(mut self, threshold: f64) -> Self {
        self.same_row_threshold = threshold;
        self
    }
}

/// How a segment was shaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Same-row pair: both control points dip below the start.
    Arc,
    /// Row change: control points swing out sideways.
    SCurve,
}

/// One cubic bezier segment. Its start is the previous segment's end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Arc or S-curve.
    pub kind: SegmentKind,
    /// First bezier control point.
    pub control1: Point,
    /// Second bezier control point.
    pub control2: Point,
    /// Next card center.
    pub end: Point,
}

/// A move-to followed by cubic segments.
///
/// Empty for no cards, a lone start point for one card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    /// First card center, `None` without cards.
    pub start: Option<Point>,
    /// One segment per consecutive pair of centers.
    pub segments: Vec<Segment>,
}

impl CurvePath {
    /// No points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Number of bezier segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

/// Card centers from positions: `(x, y + card_height / 2)`.
#[must_use]
pub fn card_centers(positions: &[Position], card_height: f64) -> Vec<Point> {
    positions
        .iter()
        .map(|p| Point::new(p.x, p.y + card_height / 2.0))
        .collect()
}

/// Build the path with default [`PathParams`].
///
/// ```
/// use flipcard_gallery::path::{build_path, Point, SegmentKind};
///
/// let path = build_path(&[
///     Point::new(30.0, 300.0),
///     Point::new(70.0, 300.0),
///     Point::new(40.0, 770.0),
/// ]);
///
/// assert_eq!(path.segment_count(), 2);
/// assert_eq!(path.segments[0].kind, SegmentKind::Arc);
/// assert_eq!(path.segments[1].kind, SegmentKind::SCurve);
/// ```
#[must_use]
pub fn build_path(centers: &[Point]) -> CurvePath {
    build_path_with(centers, &PathParams::default())
}

/// Build the path through `centers`.
///
/// For each pair `(prev, curr)` with `dy = curr.y - prev.y`:
/// - `|dy| < same_row_threshold`: arc with both control points at
///   `prev.y + arc_dip`, at 25% and 75% of the way from `prev.x` to `curr.x`.
/// - otherwise: S-curve with control points at
///   `(prev.x + swoop·dir, prev.y + 0.4·dy)` and `(curr.x - swoop·dir, prev.y + 0.6·dy)`,
///   where `dir` is +1 on even segment indices and -1 on odd ones.
#[must_use]
pub fn build_path_with(centers: &[Point], params: &PathParams) -> CurvePath {
    let Some(&start) = centers.first() else {
        return CurvePath::default();
    };

    let segments = centers
        .windows(2)
        .enumerate()
        .map(|(index, pair)| segment_between(pair[0], pair[1], index, params))
        .collect();

    CurvePath {
        start: Some(start),
        segments,
    }
}

fn segment_between(prev: Point, curr: Point, index: usize, params: &PathParams) -> Segment {
    let dy = curr.y - prev.y;

    if dy.abs() < params.same_row_threshold {
        let dx = curr.x - prev.x;
        let dip_y = prev.y + params.arc_dip;
        return Segment {
            kind: SegmentKind::Arc,
            control1: Point::new(prev.x + dx * 0.25, dip_y),
            control2: Point::new(prev.x + dx * 0.75, dip_y),
            end: curr,
        };
    }

    let dir = if index % 2 == 0 { 1.0 } else { -1.0 };
    Segment {
        kind: SegmentKind::SCurve,
        control1: Point::new(prev.x + params.swoop_x * dir, prev.y + dy * 0.4),
        control2: Point::new(curr.x - params.swoop_x * dir, prev.y + dy * 0.6),
        end: curr,
    }
}
