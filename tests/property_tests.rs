//! Property tests for the layout engine and path builder.

use proptest::prelude::*;

use flipcard_gallery::core::LayoutRng;
use flipcard_gallery::layout::{generate_positions, remap_positions, ColumnLayout, LayoutConfig};
use flipcard_gallery::particles::{particle_count_range, spawn_particles};
use flipcard_gallery::path::{build_path, Point, SegmentKind};

fn columns() -> impl Strategy<Value = ColumnLayout> {
    prop_oneof![Just(ColumnLayout::Single), Just(ColumnLayout::Double)]
}

/// Well-formed configs with a band wide enough for two zones.
fn config() -> impl Strategy<Value = LayoutConfig> {
    (120.0..400.0f64, 200.0..700.0f64, 0.0..30.0f64, 70.0..100.0f64, columns())
        .prop_map(|(w, spacing, lo, hi, cols)| LayoutConfig::new(w, spacing, lo, hi, cols))
}

proptest! {
    #[test]
    fn generate_length_matches_count(count in 0usize..64, cfg in config(), seed: u64) {
        let positions = generate_positions(count, &cfg, &mut LayoutRng::new(seed));
        prop_assert_eq!(positions.len(), count);
    }

    #[test]
    fn generated_positions_in_zone_and_rows_descend(count in 0usize..40, cfg in config(), seed: u64) {
        let positions = generate_positions(count, &cfg, &mut LayoutRng::new(seed));
        let cols = cfg.columns.count();

        for (i, pos) in positions.iter().enumerate() {
            prop_assert!(cfg.zone_for(i).contains(pos.x));
            if i >= cols {
                prop_assert!(pos.y > positions[i - cols].y);
            }
        }
    }

    #[test]
    fn remap_preserves_length(count in 0usize..40, old in config(), new in config(), seed: u64) {
        let mut rng = LayoutRng::new(seed);
        let existing = generate_positions(count, &old, &mut rng);
        prop_assert_eq!(remap_positions(&existing, &old, &new, &mut rng).len(), count);
    }

    #[test]
    fn remap_to_same_config_is_identity(count in 0usize..40, cfg in config(), seed: u64) {
        let mut rng = LayoutRng::new(seed);
        let existing = generate_positions(count, &cfg, &mut rng);
        let remapped = remap_positions(&existing, &cfg, &cfg, &mut rng);

        for (a, b) in existing.iter().zip(&remapped) {
            prop_assert_eq!(a.y, b.y);
            prop_assert!((a.x - b.x).abs() < 1e-9);
        }
    }

    #[test]
    fn remapped_x_lands_in_new_zone(count in 0usize..40, old in config(), new in config(), seed: u64) {
        let mut rng = LayoutRng::new(seed);
        let existing = generate_positions(count, &old, &mut rng);
        let remapped = remap_positions(&existing, &old, &new, &mut rng);

        for (i, pos) in remapped.iter().enumerate() {
            let zone = new.zone_for(i);
            prop_assert!(pos.x >= zone.min - 1e-9 && pos.x <= zone.max + 1e-9);
        }
    }

    #[test]
    fn path_has_one_segment_per_gap(ys in prop::collection::vec(0.0..5000.0f64, 0..30)) {
        let centers: Vec<_> = ys.iter().map(|&y| Point::new(50.0, y)).collect();
        let path = build_path(&centers);
        prop_assert_eq!(path.segment_count(), centers.len().saturating_sub(1));
        prop_assert_eq!(path.is_empty(), centers.is_empty());
    }

    #[test]
    fn segment_kind_follows_vertical_delta(
        x0 in 0.0..100.0f64, y0 in 0.0..5000.0f64,
        x1 in 0.0..100.0f64, dy in -50.0..50.0f64,
    ) {
        let y1 = y0 + dy;
        let path = build_path(&[Point::new(x0, y0), Point::new(x1, y1)]);
        let seg = path.segments[0];
        if (y1 - y0).abs() < 10.0 {
            prop_assert_eq!(seg.kind, SegmentKind::Arc);
            prop_assert!(seg.control1.y > y0 && seg.control2.y > y0);
        } else {
            prop_assert_eq!(seg.kind, SegmentKind::SCurve);
        }
    }

    #[test]
    fn particle_count_within_scaled_bounds(width in 50.0..5000.0f64, seed: u64) {
        let (min, max) = particle_count_range(width);
        let n = spawn_particles("💖", width, width * 4.0 / 3.0, &mut LayoutRng::new(seed)).len();
        prop_assert!(n >= min && n <= max);
        prop_assert!(max <= 104);
    }
}
