//! Draw-pass geometry
//!
//! Pure functions computing the ring and tick geometry from the widget's
//! current bounds. The control is inscribed in a circle bounded by the
//! shorter side; the tick lives in a square derived from that circle.
//!
//! Oversized stroke widths would drive the radius and square side negative;
//! both are clamped at zero instead, so degenerate bounds produce degenerate
//! paths rather than errors.

use tickbox_core::{Path, Point, Rect, Size};

/// Radius of the ring circle for the given bounds and stroke width
pub fn ring_radius(bounds: Size, stroke_width: f32) -> f32 {
    ((bounds.min_side() - stroke_width * 2.0) / 2.0).max(0.0)
}

/// The ring: a closed circle centered in the bounds
pub fn ring_path(bounds: Size, stroke_width: f32) -> Path {
    let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
    Path::circle(center, ring_radius(bounds, stroke_width))
}

/// Bounding square of the tick, centered in the bounds
///
/// The side is 80% of the largest square inscribable in the ring circle
/// (Pythagoras: side² = diameter² / 2), deflated by the stroke inset.
pub fn tick_square(bounds: Size, stroke_width: f32) -> Rect {
    let biggest_radius = bounds.min_side();
    let biggest_side = (biggest_radius * biggest_radius / 2.0).sqrt();
    let side = (biggest_side / 100.0 * 80.0 - stroke_width * 2.0).max(0.0);
    Rect::from_center(
        Point::new(bounds.width / 2.0, bounds.height / 2.0),
        Size::new(side, side),
    )
}

/// The tick: an open two-segment polyline inside its bounding square
///
/// Starts at the left edge 60% down, runs to 40% across the bottom edge,
/// then up to the top-right corner.
pub fn tick_path(square: Rect) -> Path {
    Path::new()
        .move_to(square.x(), square.y() + square.height() / 100.0 * 60.0)
        .line_to(
            square.x() + square.width() / 100.0 * 40.0,
            square.y() + square.height(),
        )
        .line_to(square.x() + square.width(), square.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_ring_radius_formula() {
        // (min(W, H) - 2 * strokeWidth) / 2
        assert_close(ring_radius(Size::new(100.0, 100.0), 1.0), 49.0);
        assert_close(ring_radius(Size::new(100.0, 60.0), 1.0), 29.0);
        assert_close(ring_radius(Size::new(40.0, 100.0), 3.0), 17.0);
    }

    #[test]
    fn test_ring_radius_clamps_to_zero() {
        assert_eq!(ring_radius(Size::new(10.0, 10.0), 8.0), 0.0);
        assert_eq!(ring_radius(Size::ZERO, 1.0), 0.0);
    }

    #[test]
    fn test_ring_path_is_centered() {
        let path = ring_path(Size::new(100.0, 100.0), 1.0);
        assert!(path.is_closed());
        assert_eq!(path.bounds().center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_tick_square_side_formula() {
        // (sqrt(min(W, H)² / 2) / 100 * 80) - 2 * strokeWidth
        let square = tick_square(Size::new(100.0, 100.0), 1.0);
        let expected = (5000.0f32).sqrt() / 100.0 * 80.0 - 2.0;
        assert_close(square.width(), expected);
        assert_close(square.height(), expected);
    }

    #[test]
    fn test_tick_square_is_centered_in_bounds() {
        let square = tick_square(Size::new(120.0, 80.0), 2.0);
        assert_close(square.center().x, 60.0);
        assert_close(square.center().y, 40.0);
        assert_eq!(square.width(), square.height());
    }

    #[test]
    fn test_tick_square_clamps_to_zero() {
        let square = tick_square(Size::new(10.0, 10.0), 20.0);
        assert_eq!(square.size(), Size::ZERO);
        assert_eq!(square.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_tick_path_shape() {
        let square = Rect::new(0.0, 0.0, 100.0, 100.0);
        let path = tick_path(square);

        // Open polyline: one MoveTo, two LineTos, no Close
        assert_eq!(path.commands().len(), 3);
        assert!(!path.is_closed());

        use tickbox_core::PathCommand;
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 60.0)),
                PathCommand::LineTo(Point::new(40.0, 100.0)),
                PathCommand::LineTo(Point::new(100.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_degenerate_bounds_do_not_panic() {
        let path = tick_path(tick_square(Size::ZERO, 1.0));
        assert_eq!(path.commands().len(), 3);
        let ring = ring_path(Size::ZERO, 1.0);
        assert!(ring.is_closed());
    }
}
