//! Decorative path through the card centers.

pub mod builder;
pub mod svg;

pub use builder::{build_path, build_path_with, card_centers, CurvePath, PathParams, Point, Segment, SegmentKind};
pub use svg::view_box;
