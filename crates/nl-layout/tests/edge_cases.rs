//! Edge case tests for nl-layout
//!
//! Ordering, wrapping and clamping behavior of the flow packer.

use nl_layout::*;

fn uniform(widths: &[f32], height: f32) -> Vec<Size> {
    widths.iter().map(|&w| Size::new(w, height)).collect()
}

// ============================================================================
// ORDER PRESERVATION
// ============================================================================

#[test]
fn test_output_matches_input_order_and_count() {
    let items: Vec<Size> = (1..=25).map(|i| Size::new(i as f32 * 7.0, 10.0 + i as f32)).collect();
    let result = pack(120.0, &items, 6.0);

    assert_eq!(result.placements.len(), items.len());
    for (placed, item) in result.placements.iter().zip(&items) {
        assert_eq!(placed.size, *item);
    }
}

#[test]
fn test_items_advance_left_to_right_then_down() {
    let result = pack(100.0, &uniform(&[30.0; 10], 12.0), 5.0);

    for pair in result.placements.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.line == b.line {
            assert!(b.origin.x > a.origin.x);
            assert_eq!(a.origin.y, b.origin.y);
        } else {
            assert_eq!(b.line, a.line + 1);
            assert_eq!(b.origin.x, 0.0);
            assert!(b.origin.y > a.origin.y);
        }
    }
}

// ============================================================================
// WRAPPING
// ============================================================================

#[test]
fn test_no_wrap_when_everything_fits() {
    // 3 * 20 + 2 * 10 = 80 <= 80
    let result = pack(80.0, &uniform(&[20.0, 20.0, 20.0], 9.0), 10.0);

    assert_eq!(result.line_count, 1);
    assert!(result.placements.iter().all(|p| p.origin.y == 0.0));
    assert_eq!(result.size.height, 9.0);
}

#[test]
fn test_forced_wrap_example() {
    let result = pack(100.0, &uniform(&[60.0, 60.0], 24.0), 8.0);

    assert_eq!(result.placements[0].origin, Point::new(0.0, 0.0));
    assert_eq!(result.placements[1].origin, Point::new(0.0, 32.0));
    assert_eq!(result.size, Size::new(100.0, 56.0));
}

#[test]
fn test_item_exactly_filling_line_does_not_wrap() {
    let result = pack(100.0, &uniform(&[46.0, 46.0], 10.0), 8.0);
    assert_eq!(result.line_count, 1);
    assert_eq!(result.placements[1].origin.x, 54.0);
}

#[test]
fn test_no_overlap_on_same_line() {
    let items = [
        Size::new(42.0, 20.0),
        Size::new(17.5, 20.0),
        Size::new(63.0, 20.0),
        Size::new(8.0, 20.0),
        Size::new(90.0, 20.0),
    ];
    let result = pack(110.0, &items, 8.0);

    for pair in result.placements.windows(2) {
        if pair[0].line == pair[1].line {
            assert!(pair[1].origin.x >= pair[0].frame().right() + 8.0);
        }
    }
    let frames = result.frames();
    for (i, a) in frames.iter().enumerate() {
        for b in &frames[i + 1..] {
            assert!(!a.intersects(b));
        }
    }
}

#[test]
fn test_oversized_item_after_others_gets_own_line() {
    let result = pack(50.0, &uniform(&[20.0, 120.0, 20.0], 10.0), 8.0);

    assert_eq!(result.placements[1].origin, Point::new(0.0, 18.0));
    assert_eq!(result.placements[2].origin, Point::new(0.0, 36.0));
    assert_eq!(result.line_count, 3);
    assert_eq!(result.size.width, 50.0);
}

#[test]
fn test_oversized_lone_item_is_not_clipped() {
    let result = pack(50.0, &[Size::new(120.0, 30.0)], 8.0);

    assert_eq!(result.placements[0].frame(), Rect::new(0.0, 0.0, 120.0, 30.0));
    assert_eq!(result.size, Size::new(50.0, 30.0));
}

// ============================================================================
// DEGENERATE INPUT
// ============================================================================

#[test]
fn test_empty_input() {
    let result = pack(100.0, &[], 8.0);
    assert!(result.placements.is_empty());
    assert_eq!(result.size, Size::new(100.0, 0.0));
}

#[test]
fn test_negative_sizes_clamp_to_zero() {
    let result = pack(100.0, &[Size::new(-10.0, -5.0), Size::new(30.0, 10.0)], 8.0);

    assert_eq!(result.placements[0].size, Size::ZERO);
    assert_eq!(result.placements[1].origin, Point::new(8.0, 0.0));
    assert_eq!(result.size.height, 10.0);
}

#[test]
fn test_negative_spacing_clamps_to_zero() {
    let result = pack(100.0, &uniform(&[30.0, 30.0], 10.0), -4.0);
    assert_eq!(result.placements[1].origin.x, 30.0);
}

#[test]
fn test_nan_width_is_unconstrained() {
    let result = pack(f32::NAN, &uniform(&[500.0, 500.0], 10.0), 0.0);
    assert_eq!(result.line_count, 1);
    assert_eq!(result.size.width, 1000.0);
}

#[test]
fn test_zero_width_items_never_wrap_an_empty_line() {
    let result = pack(10.0, &uniform(&[0.0, 0.0, 0.0], 4.0), 0.0);
    assert_eq!(result.line_count, 1);
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn test_repeated_packing_is_identical() {
    let items = uniform(&[33.0, 71.0, 12.0, 54.0, 90.0, 5.0], 18.0);
    assert_eq!(pack(128.0, &items, 6.0), pack(128.0, &items, 6.0));
}

#[test]
fn test_concurrent_packing() {
    let items = uniform(&[40.0, 40.0, 40.0, 40.0], 10.0);
    let expected = pack(100.0, &items, 8.0);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| pack(100.0, &items, 8.0)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
