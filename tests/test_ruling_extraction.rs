//! Integration tests for ruling extraction from drawing operators.

use pdf_rulings::geometry::{compare_points, ordered_endpoints, Point, Rect};
use pdf_rulings::{
    GraphicsStreamHandler, Operator, PageGeometry, Ruling, RulingConfig, RulingExtractor,
    WindingRule,
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn letter() -> PageGeometry {
    PageGeometry::new(Rect::new(0.0, 0.0, 612.0, 792.0), 0)
}

fn ops(raw: &[(&str, &[f32])]) -> Vec<Operator> {
    raw.iter()
        .map(|(name, operands)| Operator::from_raw(name, operands).unwrap())
        .collect()
}

fn extract(raw: &[(&str, &[f32])]) -> Vec<Ruling> {
    let mut extractor = RulingExtractor::new(letter(), RulingConfig::default());
    extractor.replay(&ops(raw));
    extractor.finish()
}

// ============================================================================
// Table grids
// ============================================================================

mod grid_tests {
    use super::*;

    #[test]
    fn test_two_by_two_grid() {
        init_logging();
        let rulings = extract(&[
            // Horizontal lines
            ("m", &[100.0, 700.0]),
            ("l", &[300.0, 700.0]),
            ("m", &[100.0, 650.0]),
            ("l", &[300.0, 650.0]),
            ("m", &[100.0, 600.0]),
            ("l", &[300.0, 600.0]),
            ("S", &[]),
            // Vertical lines
            ("m", &[100.0, 700.0]),
            ("l", &[100.0, 600.0]),
            ("m", &[200.0, 700.0]),
            ("l", &[200.0, 600.0]),
            ("m", &[300.0, 700.0]),
            ("l", &[300.0, 600.0]),
            ("S", &[]),
        ]);

        assert_eq!(rulings.len(), 6);
        let horizontal: Vec<f32> = rulings
            .iter()
            .filter(|r| r.is_horizontal())
            .filter_map(|r| r.position())
            .collect();
        let vertical: Vec<f32> = rulings
            .iter()
            .filter(|r| r.is_vertical())
            .filter_map(|r| r.position())
            .collect();
        assert_eq!(horizontal, vec![92.0, 142.0, 192.0]);
        assert_eq!(vertical, vec![100.0, 200.0, 300.0]);
        assert!(rulings.iter().all(|r| r.length() == 100.0 || r.length() == 200.0));
    }

    #[test]
    fn test_filled_hairline_rectangles() {
        init_logging();
        let rulings = extract(&[
            ("re", &[72.0, 500.0, 400.0, 0.5]),
            ("f", &[]),
            ("re", &[72.0, 400.0, 400.0, 0.5]),
            ("f*", &[]),
        ]);
        // Every side of each thin rectangle becomes a ruling
        assert_eq!(rulings.len(), 8);
        assert_eq!(rulings.iter().filter(|r| r.length() == 400.0).count(), 4);
    }

    #[test]
    fn test_close_stroke_adds_closing_side() {
        let rulings = extract(&[
            ("m", &[100.0, 700.0]),
            ("l", &[200.0, 700.0]),
            ("l", &[200.0, 600.0]),
            ("s", &[]),
        ]);
        assert_eq!(rulings.len(), 3);
        let closing = rulings[2];
        assert!(closing.is_oblique());
        assert_eq!(closing.start(), Point::new(100.0, 92.0));
        assert_eq!(closing.end(), Point::new(200.0, 192.0));
    }

    #[test]
    fn test_close_fill_stroke() {
        let rulings = extract(&[
            ("m", &[100.0, 700.0]),
            ("l", &[200.0, 700.0]),
            ("l", &[200.0, 600.0]),
            ("l", &[100.0, 600.0]),
            ("b*", &[]),
        ]);
        assert_eq!(rulings.len(), 4);
    }
}

// ============================================================================
// Path filtering
// ============================================================================

mod filtering_tests {
    use super::*;

    #[test]
    fn test_rounded_rectangle_discarded() {
        init_logging();
        let rulings = extract(&[
            ("m", &[110.0, 600.0]),
            ("l", &[290.0, 600.0]),
            ("c", &[295.0, 600.0, 300.0, 605.0, 300.0, 610.0]),
            ("l", &[300.0, 690.0]),
            ("v", &[300.0, 700.0, 290.0, 700.0]),
            ("l", &[110.0, 700.0]),
            ("y", &[100.0, 700.0, 100.0, 690.0]),
            ("h", &[]),
            ("B", &[]),
        ]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_path_starting_with_line_discarded() {
        let rulings = extract(&[("l", &[100.0, 700.0]), ("l", &[200.0, 700.0]), ("S", &[])]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_curve_does_not_leak_into_next_path() {
        let rulings = extract(&[
            ("m", &[0.0, 0.0]),
            ("c", &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
            ("S", &[]),
            ("m", &[100.0, 700.0]),
            ("l", &[200.0, 700.0]),
            ("S", &[]),
        ]);
        assert_eq!(rulings.len(), 1);
    }

    #[test]
    fn test_unpainted_path_emits_nothing() {
        let rulings = extract(&[("m", &[100.0, 700.0]), ("l", &[200.0, 700.0]), ("n", &[])]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_images_and_shadings_produce_nothing() {
        let rulings = extract(&[("EI", &[]), ("sh", &[]), ("q", &[]), ("Q", &[])]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_extraction_disabled() {
        let config = RulingConfig::new().with_extract_rulings(false);
        let mut extractor = RulingExtractor::new(letter(), config);
        extractor.replay(&ops(&[("re", &[72.0, 500.0, 400.0, 100.0]), ("S", &[])]));
        assert_eq!(extractor.ruling_count(), 0);
        assert!(extractor.path().is_empty());
    }
}

// ============================================================================
// Length threshold
// ============================================================================

mod threshold_tests {
    use super::*;

    #[test]
    fn test_clipped_stub_below_threshold_dropped() {
        // Drawn from outside the page so only 0.005 survives clipping
        let rulings = extract(&[("m", &[620.0, 400.0]), ("l", &[611.995, 400.0]), ("S", &[])]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_clipped_stub_above_threshold_kept() {
        let rulings = extract(&[("m", &[620.0, 400.0]), ("l", &[611.98, 400.0]), ("S", &[])]);
        assert_eq!(rulings.len(), 1);
        assert_eq!(rulings[0].end(), Point::new(612.0, 392.0));
        assert!((rulings[0].length() - 0.02).abs() < 1e-3);
    }

    #[test]
    fn test_zero_length_segment_dropped() {
        let rulings = extract(&[("m", &[100.0, 400.0]), ("l", &[100.0, 400.0]), ("S", &[])]);
        assert!(rulings.is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let config = RulingConfig::new().with_min_ruling_length(50.0);
        let mut extractor = RulingExtractor::new(letter(), config);
        extractor.replay(&ops(&[
            ("m", &[100.0, 400.0]),
            ("l", &[140.0, 400.0]),
            ("m", &[100.0, 300.0]),
            ("l", &[160.0, 300.0]),
            ("S", &[]),
        ]));
        assert_eq!(extractor.ruling_count(), 1);
        assert_eq!(extractor.rulings()[0].length(), 60.0);
    }
}

// ============================================================================
// Ordering and determinism
// ============================================================================

mod ordering_tests {
    use super::*;

    #[test]
    fn test_drawing_direction_does_not_matter() {
        let forward = extract(&[("m", &[100.0, 700.0]), ("l", &[300.0, 650.0]), ("S", &[])]);
        let backward = extract(&[("m", &[300.0, 650.0]), ("l", &[100.0, 700.0]), ("S", &[])]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_same_input_same_output() {
        let raw: &[(&str, &[f32])] = &[
            ("re", &[50.0, 50.0, 500.0, 700.0]),
            ("S", &[]),
            ("m", &[50.0, 400.0]),
            ("l", &[550.0, 400.0]),
            ("S", &[]),
        ];
        assert_eq!(extract(raw), extract(raw));
    }

    #[test]
    fn test_emission_order_follows_stream() {
        let rulings = extract(&[
            ("m", &[100.0, 100.0]),
            ("l", &[200.0, 100.0]),
            ("S", &[]),
            ("m", &[100.0, 700.0]),
            ("l", &[200.0, 700.0]),
            ("S", &[]),
        ]);
        assert_eq!(rulings[0].position(), Some(692.0));
        assert_eq!(rulings[1].position(), Some(92.0));
    }

    #[test]
    fn test_callbacks_match_replay() {
        let mut by_callbacks = RulingExtractor::new(letter(), RulingConfig::default());
        by_callbacks.move_to(100.0, 700.0);
        by_callbacks.line_to(200.0, 700.0);
        by_callbacks.line_to(200.0, 600.0);
        by_callbacks.close_path();
        by_callbacks.fill_and_stroke_path(WindingRule::NonZero);

        let by_replay = extract(&[
            ("m", &[100.0, 700.0]),
            ("l", &[200.0, 700.0]),
            ("l", &[200.0, 600.0]),
            ("b", &[]),
        ]);
        assert_eq!(by_callbacks.finish(), by_replay);
    }

    proptest! {
        #[test]
        fn prop_compare_points_is_antisymmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(compare_points(&a, &b), compare_points(&b, &a).reverse());
            prop_assert_eq!(compare_points(&a, &a), Ordering::Equal);
        }

        #[test]
        fn prop_ordered_endpoints_direction_independent(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            let (p1, p2) = ordered_endpoints(a, b);
            prop_assert_ne!(compare_points(&p1, &p2), Ordering::Greater);
            if compare_points(&a, &b) != Ordering::Equal {
                prop_assert_eq!(ordered_endpoints(a, b), ordered_endpoints(b, a));
            }
        }

        #[test]
        fn prop_rulings_stay_inside_page(
            x0 in -200.0f32..800.0, y0 in -200.0f32..1000.0,
            x1 in -200.0f32..800.0, y1 in -200.0f32..1000.0
        ) {
            let mut extractor = RulingExtractor::new(letter(), RulingConfig::default());
            extractor.move_to(x0, y0);
            extractor.line_to(x1, y1);
            extractor.stroke_path();

            prop_assert!(extractor.ruling_count() <= 1);
            for ruling in extractor.rulings() {
                prop_assert!(ruling.length() > 0.01);
                let bbox = ruling.bbox();
                prop_assert!(bbox.left() >= -0.01 && bbox.right() <= 612.01);
                prop_assert!(bbox.top() >= -0.01 && bbox.bottom() <= 792.01);
            }
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_ruling_serializes_endpoints() {
        let rulings = extract(&[("m", &[100.0, 700.0]), ("l", &[300.0, 700.0]), ("S", &[])]);
        let json = serde_json::to_value(rulings[0]).unwrap();
        assert_eq!(json["p1"]["x"], 100.0);
        assert_eq!(json["p1"]["y"], 92.0);
        assert_eq!(json["p2"]["x"], 300.0);

        let back: Ruling = serde_json::from_value(json).unwrap();
        assert_eq!(back, rulings[0]);
    }
}
