//! SVG path data for a [`CurvePath`].
//!
//! The path lives in a viewBox whose x axis runs 0-100 (matching the
//! percentage positions) and whose y axis is the container height in pixels.
//! Stroke, gradient and dash styling belong to the presentation layer.

use std::fmt::Write;

use super::builder::CurvePath;

impl CurvePath {
    /// SVG `d` attribute: `M x y C c1x c1y, c2x c2y, ex ey ...`.
    ///
    /// ```
    /// use flipcard_gallery::path::{build_path, Point};
    ///
    /// let path = build_path(&[Point::new(50.0, 300.0)]);
    /// assert_eq!(path.to_svg_d(), "M 50 300");
    /// assert_eq!(build_path(&[]).to_svg_d(), "");
    /// ```
    #[must_use]
    pub fn to_svg_d(&self) -> String {
        let Some(start) = self.start else {
            return String::new();
        };

        let mut d = format!("M {} {}", start.x, start.y);
        for seg in &self.segments {
            // Writing to a String cannot fail.
            let _ = write!(
                d,
                " C {} {}, {} {}, {} {}",
                seg.control1.x, seg.control1.y, seg.control2.x, seg.control2.y, seg.end.x, seg.end.y
            );
        }
        d
    }
}

/// viewBox for a container of the given height.
#[must_use]
pub fn view_box(container_height: f64) -> String {
    format!("0 0 100 {container_height}")
}
