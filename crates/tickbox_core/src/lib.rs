//! Tickbox Core Primitives
//!
//! This crate provides the foundational visual types for the tickbox
//! checkbox widget:
//!
//! - **Geometry**: points, sizes, and rectangles in device-independent units
//! - **Colors**: linear-space RGBA colors
//! - **Shape Layers**: a vector path plus its paint, rebuilt wholesale on
//!   every draw pass
//! - **Events**: pointer events as delivered by the host input system
//!
//! # Example
//!
//! ```rust
//! use tickbox_core::{Color, Path, Point, ShapeLayer, Stroke};
//!
//! let mut layer = ShapeLayer::new(Path::circle(Point::new(50.0, 50.0), 49.0));
//! layer.fill_color = Color::WHITE;
//! layer.stroke_color = Color::LIGHT_GRAY;
//! layer.stroke = Stroke::new(1.0);
//! assert_eq!(layer.stroke_end, 1.0);
//! ```

pub mod draw;
pub mod events;
pub mod layer;

pub use draw::{LineCap, LineJoin, Path, PathCommand, Stroke};
pub use events::{event_types, Event, EventData};
pub use layer::{Color, Point, Rect, ShapeLayer, Size};
