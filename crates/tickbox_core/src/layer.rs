//! Geometry, color, and shape-layer types
//!
//! All visual content the widget produces is represented as shape layers: a
//! vector path paired with the paint applied to it. Layers carry no identity
//! and are replaced wholesale on every draw pass instead of being mutated
//! across passes.

use crate::draw::{Path, Stroke};

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }

    /// Get the size of this rect
    pub fn size(&self) -> Size {
        self.size
    }

    /// Create a rect from center point and size
    pub fn from_center(center: Point, size: Size) -> Self {
        Rect {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    // Same value from_hex(0xBFBFBF) produces, so hex descriptions and the
    // built-in default agree exactly
    pub const LIGHT_GRAY: Color = Color::rgb(191.0 / 255.0, 191.0 / 255.0, 191.0 / 255.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Whether this color is fully transparent
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shape Layer
// ─────────────────────────────────────────────────────────────────────────────

/// A drawable shape: a vector path plus the paint applied to it.
///
/// New layers start with transparent fill and stroke; the owning widget
/// applies its color scheme after construction. `stroke_end` is the fraction
/// of the outline that is stroked (1.0 strokes the complete path).
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLayer {
    pub path: Path,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke: Stroke,
    pub stroke_end: f32,
}

impl ShapeLayer {
    /// Create a layer for the given path with transparent paint
    pub fn new(path: Path) -> Self {
        Self {
            path,
            fill_color: Color::TRANSPARENT,
            stroke_color: Color::TRANSPARENT,
            stroke: Stroke::default(),
            stroke_end: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_and_contains() {
        let rect = Rect::new(10.0, 10.0, 80.0, 40.0);
        assert_eq!(rect.center(), Point::new(50.0, 30.0));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(90.0, 50.0)));
        assert!(!rect.contains(Point::new(90.1, 50.0)));
    }

    #[test]
    fn test_rect_from_center() {
        let rect = Rect::from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(rect, Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(rect.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_size_min_side() {
        assert_eq!(Size::new(100.0, 60.0).min_side(), 60.0);
        assert_eq!(Size::ZERO.min_side(), 0.0);
    }

    #[test]
    fn test_color_from_hex() {
        let white = Color::from_hex(0xFFFFFF);
        assert_eq!(white, Color::WHITE);

        let blue = Color::from_hex(0x0000FF);
        assert_eq!(blue, Color::BLUE);

        // LIGHT_GRAY is the hex value 0xBFBFBF, bit for bit
        assert_eq!(Color::from_hex(0xBFBFBF), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_color_transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::WHITE.is_transparent());
        assert!(Color::WHITE.with_alpha(0.0).is_transparent());
    }

    #[test]
    fn test_shape_layer_starts_transparent() {
        let layer = ShapeLayer::new(Path::circle(Point::new(5.0, 5.0), 4.0));
        assert_eq!(layer.fill_color, Color::TRANSPARENT);
        assert_eq!(layer.stroke_color, Color::TRANSPARENT);
        assert_eq!(layer.stroke_end, 1.0);
    }
}
