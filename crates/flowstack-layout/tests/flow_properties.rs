//! Property tests for the wrap algorithm.

use flowstack_core::{Rect, Size};
use flowstack_layout::{measure_sizes, wrap_placements};
use proptest::prelude::*;

fn arb_size() -> impl Strategy<Value = Size> {
    // Positive heights keep every wrap a strict downward step.
    (0.0f64..200.0, 0.1f64..100.0).prop_map(|(w, h)| Size::new(w, h))
}

fn arb_sizes() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(arb_size(), 0..64)
}

proptest! {
    #[test]
    fn one_placement_per_child_with_exact_size(
        sizes in arb_sizes(),
        width in 1.0f64..500.0,
    ) {
        let placements = wrap_placements(Rect::new(0.0, 0.0, width, 10_000.0), &sizes);

        prop_assert_eq!(placements.len(), sizes.len());
        for (placement, size) in placements.iter().zip(&sizes) {
            // Children are never stretched or clipped.
            prop_assert_eq!(placement.size, *size);
        }
    }

    #[test]
    fn placements_flow_left_to_right_top_to_bottom(
        sizes in arb_sizes(),
        width in 1.0f64..500.0,
    ) {
        let placements = wrap_placements(Rect::new(0.0, 0.0, width, 10_000.0), &sizes);

        for pair in placements.windows(2) {
            // Rows only ever move downward.
            prop_assert!(pair[1].origin.y >= pair[0].origin.y - 1e-9);
            // Within one row the offset only ever moves rightward.
            if (pair[1].origin.y - pair[0].origin.y).abs() < 1e-9 {
                prop_assert!(pair[1].origin.x >= pair[0].origin.x - 1e-9);
            }
        }
    }

    #[test]
    fn unconstrained_width_never_wraps(sizes in arb_sizes()) {
        let measured = measure_sizes(None, &sizes);

        let total_width: f64 = sizes.iter().map(|s| s.width).sum();
        let tallest = sizes.iter().map(|s| s.height).fold(0.0f64, f64::max);

        prop_assert!((measured.width - total_width).abs() < 1e-6);
        prop_assert!((measured.height - tallest).abs() < 1e-6);
    }

    #[test]
    fn single_row_measure_and_place_agree(sizes in prop::collection::vec(arb_size(), 1..32)) {
        // A boundary wider than the content keeps everything on one row in
        // both passes.
        let total_width: f64 = sizes.iter().map(|s| s.width).sum();
        let boundary = total_width + 1.0;

        let measured = measure_sizes(Some(boundary), &sizes);
        prop_assert!((measured.width - total_width).abs() < 1e-6);

        let placements = wrap_placements(Rect::new(0.0, 0.0, boundary, 10_000.0), &sizes);
        for placement in &placements {
            prop_assert!(placement.origin.y.abs() < 1e-9);
        }

        let last = placements.last().unwrap();
        prop_assert!((last.origin.x + last.size.width - total_width).abs() < 1e-6);
    }
}
