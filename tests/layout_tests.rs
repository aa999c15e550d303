//! Layout integration tests.
//!
//! These tests drive the breakpoint table, position generator and remapper
//! together, the way a resize does.

use flipcard_gallery::core::{LayoutRng, ScriptedRng};
use flipcard_gallery::layout::{
    generate_positions, remap_positions, BreakpointTable, ColumnLayout, LayoutConfig, Position,
    ResponsiveLayout, TOP_OFFSET,
};

// =============================================================================
// Generation Tests
// =============================================================================

/// Every generated x lies in its card's column zone.
#[test]
fn test_generated_x_in_zone_for_every_breakpoint() {
    let table = BreakpointTable::default();
    let mut rng = LayoutRng::new(42);

    for row in table.rows() {
        let config = row.config;
        let positions = generate_positions(9, &config, &mut rng);
        assert_eq!(positions.len(), 9);

        for (i, pos) in positions.iter().enumerate() {
            let zone = config.zone_for(i);
            assert!(zone.contains(pos.x), "card {i}: {} not in {:?}", pos.x, zone);
        }
    }
}

/// y strictly increases down each column.
#[test]
fn test_y_increases_within_column() {
    let config = BreakpointTable::default().config_for(1600.0);
    let positions = generate_positions(8, &config, &mut LayoutRng::new(3));

    for col in 0..2 {
        let ys: Vec<_> = positions.iter().skip(col).step_by(2).map(|p| p.y).collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]), "column {col}: {ys:?}");
    }
}

/// Seeded generation is reproducible.
#[test]
fn test_seeded_generation_reproducible() {
    let config = LayoutConfig::default();
    let a = generate_positions(5, &config, &mut LayoutRng::new(7));
    let b = generate_positions(5, &config, &mut LayoutRng::new(7));
    assert_eq!(a, b);
}

// =============================================================================
// Remap Tests
// =============================================================================

/// Resizing within the single-column range keeps left/right placement.
#[test]
fn test_phone_to_tablet_keeps_relative_placement() {
    let table = BreakpointTable::default();
    let phone = table.config_for(375.0);
    let tablet = table.config_for(800.0);

    let existing = vec![
        Position::new(25.0, 0.0), // left edge of 25-75
        Position::new(62.5, 0.0), // three quarters across
    ];
    let remapped = remap_positions(&existing, &phone, &tablet, &mut LayoutRng::new(0));

    // Tablet band is 15-85
    assert_eq!(remapped[0].x, 15.0);
    assert!((remapped[1].x - 67.5).abs() < 1e-9);
    assert_eq!(remapped[1].y, 483.0 + TOP_OFFSET);
}

/// Remapping to the same config changes nothing.
#[test]
fn test_remap_to_same_config_is_identity() {
    let config = BreakpointTable::default().config_for(1200.0);
    let existing = generate_positions(7, &config, &mut LayoutRng::new(5));
    let remapped = remap_positions(&existing, &config, &config, &mut LayoutRng::new(6));

    for (before, after) in existing.iter().zip(&remapped) {
        assert_eq!(before.y, after.y);
        assert!((before.x - after.x).abs() < 1e-9);
    }
}

/// Crossing from one to two columns scatters afresh in the new zones.
#[test]
fn test_column_change_regenerates() {
    let table = BreakpointTable::default();
    let tablet = table.config_for(800.0);
    let desktop = table.config_for(1200.0);
    assert_eq!(desktop.columns, ColumnLayout::Double);

    // Every card hard left in the single band
    let existing = vec![Position::new(15.0, 0.0); 4];
    let mut rng = ScriptedRng::constant(0.5);
    let remapped = remap_positions(&existing, &tablet, &desktop, &mut rng);

    assert_eq!(rng.draws(), 4);
    // Desktop zones are [20, 35] and [65, 80]
    assert_eq!(remapped[0].x, 27.5);
    assert_eq!(remapped[1].x, 72.5);
    assert_eq!(remapped[0].y, remapped[1].y);
}

/// Malformed configs degrade without panicking.
#[test]
fn test_malformed_configs_do_not_panic() {
    let reversed = LayoutConfig::new(250.0, -10.0, 90.0, 10.0, ColumnLayout::Double);
    let point = LayoutConfig::new(250.0, 0.0, 50.0, 50.0, ColumnLayout::Double);
    let mut rng = LayoutRng::new(1);

    let positions = generate_positions(4, &reversed, &mut rng);
    assert_eq!(positions.len(), 4);
    assert!(positions.iter().all(|p| p.x.is_finite()));

    let remapped = remap_positions(&positions, &reversed, &point, &mut rng);
    assert_eq!(remapped.len(), 4);
    assert!(remapped.iter().all(|p| p.x.is_finite()));
}

// =============================================================================
// Responsive Tests
// =============================================================================

/// A sweep of resizes only emits at breakpoint crossings.
#[test]
fn test_resize_sweep_emits_at_thresholds() {
    let mut layout = ResponsiveLayout::new(BreakpointTable::default(), 320.0);

    let changes: Vec<_> = (320..=1600)
        .step_by(8)
        .filter_map(|w| layout.observe(f64::from(w)).map(|c| (w, c.card_width)))
        .collect();

    assert_eq!(
        changes,
        vec![(480, 200.0), (640, 220.0), (768, 250.0), (1024, 300.0), (1440, 340.0)]
    );
}
