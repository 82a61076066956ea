//! Circular checkbox widget
//!
//! The CheckBox owns two shape layers: a ring (the box itself) and a tick
//! (the checkmark, clear while unchecked). Every draw pass rebuilds both
//! layers from the current bounds; property setters recolor the existing
//! layers in place without recomputing geometry.
//!
//! Tapping the widget notifies the delegate only. The widget never flips its
//! own `checked` state from a tap; toggling is the delegate's decision.
//!
//! # Example
//!
//! ```rust
//! use tickbox_core::{Color, Rect};
//! use tickbox_widget::checkbox;
//!
//! let mut cb = checkbox()
//!     .bounds(Rect::new(0.0, 0.0, 100.0, 100.0))
//!     .tint(Color::BLUE)
//!     .build();
//!
//! cb.draw();
//! cb.set_checked(true);
//! assert_eq!(cb.ring_layer().unwrap().fill_color, Color::BLUE);
//! ```

use tickbox_core::events::{event_types, Event};
use tickbox_core::{Color, Rect, ShapeLayer, Stroke};

use crate::metrics;
use crate::style::{CheckBoxDesc, CheckBoxStyle, StyleError};

/// Observer notified when the checkbox is tapped
///
/// The delegate is told about the tap and decides what to do with it; in
/// particular it is responsible for calling [`CheckBox::set_checked`] if the
/// tap should toggle the box.
pub trait CheckBoxDelegate: Send {
    /// A primary tap completed inside the checkbox bounds
    fn checkbox_tapped(&mut self, checkbox: &CheckBox, event: &Event);
}

/// A tappable circular checkbox
pub struct CheckBox {
    /// Frame in the parent's coordinate space
    bounds: Rect,
    /// Current toggle state
    checked: bool,
    /// Stroke width of both layers' outlines
    stroke_width: f32,
    /// Ring outline color while unchecked
    stroke_color: Color,
    /// Ring fill color while unchecked
    background: Color,
    /// Tick color while checked; the tick is clear while unchecked
    tick: Color,
    /// Ambient tint: ring fill and outline while checked
    tint: Color,
    /// Ring layer, rebuilt every draw pass; None before the first pass
    ring_layer: Option<ShapeLayer>,
    /// Tick layer, rebuilt every draw pass; None before the first pass
    tick_layer: Option<ShapeLayer>,
    /// Optional single observer
    delegate: Option<Box<dyn CheckBoxDelegate>>,
}

impl CheckBox {
    /// Create a checkbox with the default style
    pub fn new(bounds: Rect) -> Self {
        Self::with_style(bounds, CheckBoxStyle::default())
    }

    /// Create a checkbox with the given style
    pub fn with_style(bounds: Rect, style: CheckBoxStyle) -> Self {
        Self {
            bounds,
            checked: style.checked,
            stroke_width: style.stroke_width,
            stroke_color: style.stroke_color,
            background: style.background,
            tick: style.tick,
            tint: style.tint,
            ring_layer: None,
            tick_layer: None,
            delegate: None,
        }
    }

    /// Create a checkbox from a JSON description
    pub fn from_description(json: &str) -> Result<Self, StyleError> {
        let desc = CheckBoxDesc::parse(json)?;
        Ok(Self::with_style(desc.frame(), desc.style()))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn tick(&self) -> Color {
        self.tick
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    /// The ring layer, if a draw pass has run
    pub fn ring_layer(&self) -> Option<&ShapeLayer> {
        self.ring_layer.as_ref()
    }

    /// The tick layer, if a draw pass has run
    pub fn tick_layer(&self) -> Option<&ShapeLayer> {
        self.tick_layer.as_ref()
    }

    /// Current layers in render order, ring beneath tick
    pub fn layers(&self) -> impl Iterator<Item = &ShapeLayer> {
        self.ring_layer.iter().chain(self.tick_layer.iter())
    }

    /// Register the single observer, replacing any previous one
    pub fn set_delegate(&mut self, delegate: Box<dyn CheckBoxDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Remove the observer
    pub fn take_delegate(&mut self) -> Option<Box<dyn CheckBoxDelegate>> {
        self.delegate.take()
    }

    // =========================================================================
    // Style setters (recolor in place, no geometry recompute)
    // =========================================================================

    /// Set the stroke width of both layers' outlines
    ///
    /// The new width applies to the existing layers immediately; the inset
    /// geometry it factors into is only recomputed on the next draw pass.
    pub fn set_stroke_width(&mut self, width: f32) {
        if width == self.stroke_width {
            return;
        }
        self.stroke_width = width;
        if let Some(ring) = self.ring_layer.as_mut() {
            ring.stroke = Stroke::new(width);
        }
        if let Some(tick) = self.tick_layer.as_mut() {
            tick.stroke = Stroke::new(width);
        }
    }

    /// Set the unchecked ring outline color
    pub fn set_stroke_color(&mut self, color: Color) {
        if color == self.stroke_color {
            return;
        }
        self.stroke_color = color;
        // Only the unchecked scheme shows this color
        if !self.checked {
            if let Some(ring) = self.ring_layer.as_mut() {
                ring.stroke_color = color;
            }
        }
    }

    /// Set the unchecked ring fill color
    pub fn set_background(&mut self, color: Color) {
        if color == self.background {
            return;
        }
        self.background = color;
        if !self.checked {
            if let Some(ring) = self.ring_layer.as_mut() {
                ring.fill_color = color;
            }
        }
    }

    /// Set the tick color shown while checked
    pub fn set_tick(&mut self, color: Color) {
        if color == self.tick {
            return;
        }
        self.tick = color;
        if self.checked {
            if let Some(tick) = self.tick_layer.as_mut() {
                tick.stroke_color = color;
            }
        }
    }

    /// Set the ambient tint used for the ring while checked
    pub fn set_tint(&mut self, color: Color) {
        if color == self.tint {
            return;
        }
        self.tint = color;
        if self.checked {
            if let Some(ring) = self.ring_layer.as_mut() {
                ring.fill_color = color;
                ring.stroke_color = color;
            }
        }
    }

    // =========================================================================
    // Checked state
    // =========================================================================

    /// Set the checked state, recoloring both layers immediately
    ///
    /// Setting the current value again is a no-op.
    pub fn set_checked(&mut self, checked: bool) {
        if checked == self.checked {
            return;
        }
        self.checked = checked;
        tracing::debug!(checked, "checkbox toggled");
        self.apply_color_scheme();
    }

    /// Apply the checked or unchecked color scheme to both layers
    ///
    /// Exactly one scheme is in effect at any time, never a mixture.
    fn apply_color_scheme(&mut self) {
        let (ring_fill, ring_stroke, tick_stroke) = if self.checked {
            (self.tint, self.tint, self.tick)
        } else {
            (self.background, self.stroke_color, Color::TRANSPARENT)
        };
        if let Some(ring) = self.ring_layer.as_mut() {
            ring.fill_color = ring_fill;
            ring.stroke_color = ring_stroke;
        }
        if let Some(tick) = self.tick_layer.as_mut() {
            tick.stroke_color = tick_stroke;
            tick.fill_color = Color::TRANSPARENT;
        }
    }

    // =========================================================================
    // Draw pass
    // =========================================================================

    /// Move the widget to a new frame and rerun the draw pass
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.draw();
    }

    /// Rebuild both layers from the current bounds
    ///
    /// Run by the host on first display, bounds changes, and explicit
    /// invalidation. Both layers are replaced wholesale; geometry from a
    /// previous bounds size is never kept.
    pub fn draw(&mut self) {
        let size = self.bounds.size();
        tracing::trace!(
            width = size.width,
            height = size.height,
            checked = self.checked,
            "checkbox draw pass"
        );

        let mut ring = ShapeLayer::new(metrics::ring_path(size, self.stroke_width));
        ring.stroke = Stroke::new(self.stroke_width);
        ring.stroke_end = 1.0;
        self.ring_layer = Some(ring);

        let square = metrics::tick_square(size, self.stroke_width);
        let mut tick = ShapeLayer::new(metrics::tick_path(square));
        tick.stroke = Stroke::new(self.stroke_width);
        self.tick_layer = Some(tick);

        self.apply_color_scheme();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed a host input event to the widget
    ///
    /// A primary pointer-up inside the bounds is a completed tap: the
    /// delegate is notified once, with this widget and the event. Everything
    /// else is ignored, and a tap with no delegate registered does nothing.
    pub fn handle_event(&mut self, event: &Event) {
        if event.event_type != event_types::POINTER_UP || !event.is_primary() {
            return;
        }
        let Some(position) = event.pointer_position() else {
            return;
        };
        if !self.bounds.size().to_rect().contains(position) {
            return;
        }

        tracing::debug!(x = position.x, y = position.y, "checkbox tapped");

        // The delegate leaves the slot while it runs so the widget can be
        // passed by shared reference.
        if let Some(mut delegate) = self.delegate.take() {
            delegate.checkbox_tapped(self, event);
            self.delegate = Some(delegate);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Create a checkbox builder
pub fn checkbox() -> CheckBoxBuilder {
    CheckBoxBuilder {
        bounds: Rect::ZERO,
        style: CheckBoxStyle::default(),
        delegate: None,
    }
}

/// Builder for creating checkboxes
pub struct CheckBoxBuilder {
    bounds: Rect,
    style: CheckBoxStyle,
    delegate: Option<Box<dyn CheckBoxDelegate>>,
}

impl CheckBoxBuilder {
    /// Set the frame
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the stroke width
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.style.stroke_width = width;
        self
    }

    /// Set the unchecked ring outline color
    pub fn stroke_color(mut self, color: Color) -> Self {
        self.style.stroke_color = color;
        self
    }

    /// Set the unchecked ring fill color
    pub fn background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    /// Set the tick color
    pub fn tick(mut self, color: Color) -> Self {
        self.style.tick = color;
        self
    }

    /// Set the ambient tint
    pub fn tint(mut self, color: Color) -> Self {
        self.style.tint = color;
        self
    }

    /// Set the initial checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.style.checked = checked;
        self
    }

    /// Register the observer
    pub fn delegate(mut self, delegate: Box<dyn CheckBoxDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Build the checkbox
    pub fn build(self) -> CheckBox {
        let mut checkbox = CheckBox::with_style(self.bounds, self.style);
        checkbox.delegate = self.delegate;
        checkbox
    }
}
