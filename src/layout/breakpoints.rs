//! Viewport width to layout configuration.
//!
//! The breakpoint table is plain ordered data: each row applies to widths
//! below its threshold, and the last row is open-ended. Adding a breakpoint
//! is a data change.
//!
//! [`ResponsiveLayout`] wraps a table with the currently active config and
//! only reports a change when a resize actually lands on a different row.

use serde::{Deserialize, Serialize};

use crate::core::{GalleryError, Result};

use super::config::{ColumnLayout, LayoutConfig};

/// One row of the breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Applies to widths strictly below this threshold. `None` = open-ended.
    pub below: Option<f64>,

    /// Configuration for this width range.
    pub config: LayoutConfig,
}

impl Breakpoint {
    /// A row covering widths below `threshold`.
    #[must_use]
    pub fn below(threshold: f64, config: LayoutConfig) -> Self {
        Self {
            below: Some(threshold),
            config,
        }
    }

    /// The open-ended last row.
    #[must_use]
    pub fn open(config: LayoutConfig) -> Self {
        Self {
            below: None,
            config,
        }
    }

    fn covers(&self, width: f64) -> bool {
        match self.below {
            Some(threshold) => width < threshold,
            None => true,
        }
    }
}

/// JSON shape of a breakpoint row. `card_height` is derived when omitted.
#[derive(Debug, Deserialize)]
struct BreakpointRow {
    below: Option<f64>,
    card_width: f64,
    #[serde(default)]
    card_height: Option<f64>,
    vertical_spacing: f64,
    x_min: f64,
    x_max: f64,
    columns: ColumnLayout,
}

impl From<BreakpointRow> for Breakpoint {
    fn from(row: BreakpointRow) -> Self {
        let mut config = LayoutConfig::new(
            row.card_width,
            row.vertical_spacing,
            row.x_min,
            row.x_max,
            row.columns,
        );
        if let Some(height) = row.card_height {
            config.card_height = height;
        }
        Self {
            below: row.below,
            config,
        }
    }
}

/// Ordered, total breakpoint table.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointTable {
    rows: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Build a table from rows in ascending threshold order.
    ///
    /// The table must cover `[0, ∞)`: thresholds strictly ascending and
    /// exactly the last row open-ended. Rows with malformed numbers are
    /// accepted with a warning; they lay out degenerately rather than fail.
    ///
    /// # Errors
    ///
    /// Empty table, unsorted thresholds, or a misplaced/missing open-ended row.
    pub fn new(rows: Vec<Breakpoint>) -> Result<Self> {
        if rows.is_empty() {
            return Err(GalleryError::EmptyBreakpointTable);
        }

        let last = rows.len() - 1;
        let mut previous: Option<f64> = None;
        for (index, row) in rows.iter().enumerate() {
            match row.below {
                None if index != last => return Err(GalleryError::OpenEndedNotLast { index }),
                None => {}
                Some(_) if index == last => return Err(GalleryError::MissingOpenEnded),
                Some(threshold) => {
                    if let Some(prev) = previous {
                        if threshold.is_nan() || threshold <= prev {
                            return Err(GalleryError::UnsortedBreakpoints {
                                index,
                                threshold,
                                previous: prev,
                            });
                        }
                    }
                    previous = Some(threshold);
                }
            }

            if !row.config.is_well_formed() {
                tracing::warn!(index, config = ?row.config, "malformed breakpoint row");
            }
        }

        Ok(Self { rows })
    }

    /// Parse a table from a JSON array of rows.
    ///
    /// # Errors
    ///
    /// Malformed JSON, or any error from [`BreakpointTable::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<BreakpointRow> = serde_json::from_str(json)?;
        Self::new(rows.into_iter().map(Breakpoint::from).collect())
    }

    /// Configuration for a viewport width.
    ///
    /// Widths that match no bounded row (including NaN) get the open-ended row.
    #[must_use]
    pub fn config_for(&self, viewport_width: f64) -> LayoutConfig {
        self.rows
            .iter()
            .find(|row| row.covers(viewport_width))
            .or_else(|| self.rows.last())
            .map(|row| row.config)
            .unwrap_or_default()
    }

    /// Rows in ascending order.
    #[must_use]
    pub fn rows(&self) -> &[Breakpoint] {
        &self.rows
    }
}

impl Default for BreakpointTable {
    /// Phone, tablet and desktop rows; all cards 3:4.
    fn default() -> Self {
        use ColumnLayout::{Double, Single};

        Self {
            rows: vec![
                Breakpoint::below(480.0, LayoutConfig::new(180.0, 360.0, 25.0, 75.0, Single)),
                Breakpoint::below(640.0, LayoutConfig::new(200.0, 397.0, 22.0, 78.0, Single)),
                Breakpoint::below(768.0, LayoutConfig::new(220.0, 423.0, 20.0, 80.0, Single)),
                Breakpoint::below(1024.0, LayoutConfig::new(250.0, 483.0, 15.0, 85.0, Single)),
                Breakpoint::below(1440.0, LayoutConfig::new(300.0, 470.0, 20.0, 80.0, Double)),
                Breakpoint::open(LayoutConfig::new(340.0, 523.0, 18.0, 82.0, Double)),
            ],
        }
    }
}

/// Tracks the active layout config across resizes.
///
/// ```
/// use flipcard_gallery::layout::{BreakpointTable, ResponsiveLayout};
///
/// let mut layout = ResponsiveLayout::new(BreakpointTable::default(), 800.0);
/// assert_eq!(layout.current().card_width, 250.0);
///
/// // Same breakpoint row: nothing to do downstream
/// assert!(layout.observe(900.0).is_none());
///
/// // Crossing 1024 switches to the desktop row
/// let next = layout.observe(1200.0).unwrap();
/// assert_eq!(next.card_width, 300.0);
/// ```
#[derive(Clone, Debug)]
pub struct ResponsiveLayout {
    table: BreakpointTable,
    current: LayoutConfig,
}

impl ResponsiveLayout {
    /// Start at the config for `viewport_width`.
    #[must_use]
    pub fn new(table: BreakpointTable, viewport_width: f64) -> Self {
        let current = table.config_for(viewport_width);
        Self { table, current }
    }

    /// The active config.
    #[must_use]
    pub fn current(&self) -> LayoutConfig {
        self.current
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Re-evaluate for a new viewport width.
    ///
    /// Returns the new config only if some field differs from the active one.
    pub fn observe(&mut self, viewport_width: f64) -> Option<LayoutConfig> {
        let next = self.table.config_for(viewport_width);
        if next.same_as(&self.current) {
            return None;
        }
        tracing::debug!(
            viewport_width,
            card_width = next.card_width,
            columns = next.columns.count(),
            "layout breakpoint crossed"
        );
        self.current = next;
        Some(next)
    }
}
