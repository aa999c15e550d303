//! Layout configuration and column zones.
//!
//! A [`LayoutConfig`] is one row of the breakpoint table: card size,
//! vertical spacing, the horizontal band cards may occupy (in percent of
//! the container width), and whether cards pair up into two columns.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::GalleryError;

/// Pixels reserved above the first row for the header.
pub const TOP_OFFSET: f64 = 140.0;

/// Gap (percent) taken out on each side of the band midpoint in two-column layouts.
pub const COLUMN_GAP: f64 = 15.0;

/// Cards are 3:4 (width:height), matching the source photos.
pub const CARD_ASPECT: f64 = 4.0 / 3.0;

/// Number of card columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnLayout {
    /// One card per row.
    #[default]
    Single,
    /// Cards pair up: 0 & 1 share row 0, 2 & 3 share row 1, ...
    Double,
}

impl ColumnLayout {
    /// Column count as a number.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }

    /// Column of card `index`.
    #[must_use]
    pub const fn column_of(self, index: usize) -> usize {
        index % self.count()
    }

    /// Row of card `index`.
    #[must_use]
    pub const fn row_of(self, index: usize) -> usize {
        index / self.count()
    }
}

impl TryFrom<u8> for ColumnLayout {
    type Error = GalleryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            other => Err(GalleryError::InvalidColumns(other)),
        }
    }
}

impl From<ColumnLayout> for u8 {
    fn from(value: ColumnLayout) -> Self {
        value.count() as u8
    }
}

/// Discrete layout parameters for one viewport width range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Card width in pixels.
    pub card_width: f64,

    /// Card height in pixels (3:4 with the width).
    pub card_height: f64,

    /// Pixels between consecutive rows.
    pub vertical_spacing: f64,

    /// Left edge of the card band, percent of container width.
    pub x_min: f64,

    /// Right edge of the card band, percent of container width.
    pub x_max: f64,

    /// One or two columns.
    pub columns: ColumnLayout,
}

impl LayoutConfig {
    /// Create a config, deriving the card height from the 3:4 aspect.
    ///
    /// ```
    /// use flipcard_gallery::layout::{ColumnLayout, LayoutConfig};
    ///
    /// let config = LayoutConfig::new(200.0, 397.0, 22.0, 78.0, ColumnLayout::Single);
    /// assert_eq!(config.card_height, 267.0);
    /// ```
    #[must_use]
    pub fn new(
        card_width: f64,
        vertical_spacing: f64,
        x_min: f64,
        x_max: f64,
        columns: ColumnLayout,
    ) -> Self {
        Self {
            card_width,
            card_height: (card_width * CARD_ASPECT).round(),
            vertical_spacing,
            x_min,
            x_max,
            columns,
        }
    }

    /// Override the card height.
    #[must_use]
    pub fn with_card_height(mut self, card_height: f64) -> Self {
        self.card_height = card_height;
        self
    }

    /// Does this config satisfy `x_min < x_max` and positive sizes?
    ///
    /// Malformed configs are still usable; they just produce degenerate layouts.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.x_min < self.x_max
            && self.card_width > 0.0
            && self.card_height > 0.0
            && self.vertical_spacing > 0.0
    }

    /// Field-by-field bitwise equality.
    ///
    /// Unlike `==`, a config with a NaN field matches itself.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        let bits = |c: &Self| {
            [
                c.card_width.to_bits(),
                c.card_height.to_bits(),
                c.vertical_spacing.to_bits(),
                c.x_min.to_bits(),
                c.x_max.to_bits(),
            ]
        };
        self.columns == other.columns && bits(self) == bits(other)
    }

    /// Top edge (pixels) of row `row`.
    #[must_use]
    pub fn row_top(&self, row: usize) -> f64 {
        row as f64 * self.vertical_spacing + TOP_OFFSET
    }

    /// Column zones for this config.
    #[must_use]
    pub fn zones(&self) -> SmallVec<[ColumnZone; 2]> {
        column_zones(self.x_min, self.x_max, self.columns)
    }

    /// Zone for card `index`.
    #[must_use]
    pub fn zone_for(&self, index: usize) -> ColumnZone {
        self.zones()[self.columns.column_of(index)]
    }
}

impl Default for LayoutConfig {
    /// The tablet row of the default breakpoint table.
    fn default() -> Self {
        Self::new(250.0, 483.0, 15.0, 85.0, ColumnLayout::Single)
    }
}

/// Horizontal percentage range one column's cards are scattered within.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnZone {
    /// Left bound, percent of container width.
    pub min: f64,
    /// Right bound, percent of container width.
    pub max: f64,
}

impl ColumnZone {
    /// Create a zone. A reversed range collapses to its midpoint.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min > max {
            let mid = (min + max) / 2.0;
            return Self { min: mid, max: mid };
        }
        Self { min, max }
    }

    /// Width of the zone.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Is `x` inside the zone (inclusive)?
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Fraction of the way across the zone, clamped to `[0, 1]`.
    ///
    /// A zero-width zone uses a span of 1.
    #[must_use]
    pub fn normalize(&self, x: f64) -> f64 {
        let span = self.span();
        let span = if span == 0.0 || span.is_nan() { 1.0 } else { span };
        ((x - self.min) / span).clamp(0.0, 1.0)
    }

    /// Point at fraction `t` across the zone.
    #[must_use]
    pub fn lerp(&self, t: f64) -> f64 {
        t * self.span() + self.min
    }
}

/// Split the band `[x_min, x_max]` into column zones.
///
/// One column gets the whole band. Two columns split at the midpoint with
/// [`COLUMN_GAP`] taken out on either side.
///
/// ```
/// use flipcard_gallery::layout::{column_zones, ColumnLayout, ColumnZone};
///
/// let zones = column_zones(20.0, 80.0, ColumnLayout::Double);
/// assert_eq!(zones[0], ColumnZone::new(20.0, 35.0));
/// assert_eq!(zones[1], ColumnZone::new(65.0, 80.0));
/// ```
#[must_use]
pub fn column_zones(x_min: f64, x_max: f64, columns: ColumnLayout) -> SmallVec<[ColumnZone; 2]> {
    match columns {
        ColumnLayout::Single => smallvec![ColumnZone::new(x_min, x_max)],
        ColumnLayout::Double => {
            let mid = (x_min + x_max) / 2.0;
            smallvec![
                ColumnZone::new(x_min, mid - COLUMN_GAP),
                ColumnZone::new(mid + COLUMN_GAP, x_max),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_heights_match_table() {
        for (width, height) in [(180.0, 240.0), (220.0, 293.0), (250.0, 333.0), (340.0, 453.0)] {
            let config = LayoutConfig::new(width, 400.0, 20.0, 80.0, ColumnLayout::Single);
            assert_eq!(config.card_height, height);
        }
    }

    #[test]
    fn test_rows_and_columns() {
        assert_eq!(ColumnLayout::Single.row_of(3), 3);
        assert_eq!(ColumnLayout::Single.column_of(3), 0);
        assert_eq!(ColumnLayout::Double.row_of(3), 1);
        assert_eq!(ColumnLayout::Double.column_of(3), 1);
        assert_eq!(ColumnLayout::Double.column_of(4), 0);
    }

    #[test]
    fn test_columns_serde() {
        assert_eq!(serde_json::to_string(&ColumnLayout::Double).unwrap(), "2");
        let single: ColumnLayout = serde_json::from_str("1").unwrap();
        assert_eq!(single, ColumnLayout::Single);
        assert!(serde_json::from_str::<ColumnLayout>("3").is_err());
    }

    #[test]
    fn test_single_zone_is_whole_band() {
        let zones = column_zones(15.0, 85.0, ColumnLayout::Single);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0], ColumnZone::new(15.0, 85.0));
    }

    #[test]
    fn test_narrow_band_collapses_zones() {
        // Band narrower than two gaps: each zone collapses to a point.
        let zones = column_zones(40.0, 60.0, ColumnLayout::Double);
        assert_eq!(zones[0].span(), 0.0);
        assert_eq!(zones[1].span(), 0.0);
        assert_eq!(zones[0].min, 37.5);
        assert_eq!(zones[1].min, 62.5);
    }

    #[test]
    fn test_normalize_and_lerp() {
        let zone = ColumnZone::new(20.0, 80.0);
        assert_eq!(zone.normalize(50.0), 0.5);
        assert_eq!(zone.normalize(0.0), 0.0);
        assert_eq!(zone.normalize(100.0), 1.0);
        assert_eq!(zone.lerp(0.5), 50.0);
    }

    #[test]
    fn test_normalize_zero_span() {
        let zone = ColumnZone::new(30.0, 30.0);
        assert_eq!(zone.normalize(30.5), 0.5);
        assert_eq!(zone.normalize(29.0), 0.0);
    }

    #[test]
    fn test_well_formed() {
        assert!(LayoutConfig::default().is_well_formed());

        let reversed = LayoutConfig::new(250.0, 483.0, 85.0, 15.0, ColumnLayout::Single);
        assert!(!reversed.is_well_formed());

        let flat = LayoutConfig::new(250.0, 0.0, 15.0, 85.0, ColumnLayout::Single);
        assert!(!flat.is_well_formed());
    }

    #[test]
    fn test_same_as_handles_nan() {
        let nan = LayoutConfig::new(250.0, f64::NAN, 15.0, 85.0, ColumnLayout::Single);
        assert_ne!(nan, nan);
        assert!(nan.same_as(&nan));
        assert!(!nan.same_as(&LayoutConfig::default()));
        assert!(LayoutConfig::default().same_as(&LayoutConfig::default()));
        assert!(!LayoutConfig::default().same_as(&LayoutConfig::default().with_card_height(300.0)));
    }

    #[test]
    fn test_row_top_and_zone_for() {
        let config = LayoutConfig::new(300.0, 470.0, 20.0, 80.0, ColumnLayout::Double);
        assert_eq!(config.row_top(0), TOP_OFFSET);
        assert_eq!(config.row_top(2), 2.0 * 470.0 + TOP_OFFSET);
        assert_eq!(config.zone_for(1), ColumnZone::new(65.0, 80.0));
    }

    #[test]
    fn test_config_json() {
        let config = LayoutConfig::new(300.0, 470.0, 20.0, 80.0, ColumnLayout::Double);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"columns\":2"));
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
