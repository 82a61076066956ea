//! Pointer events delivered by the host input system
//!
//! The host platform translates its native input into these events and feeds
//! them to widgets; widgets never poll for input themselves.

use crate::layer::Point;

/// Event type constants
pub mod event_types {
    /// Primary or secondary pointer pressed
    pub const POINTER_DOWN: u32 = 1;
    /// Pointer released
    pub const POINTER_UP: u32 = 2;
    /// Pointer entered the widget's bounds
    pub const POINTER_ENTER: u32 = 3;
    /// Pointer left the widget's bounds
    pub const POINTER_LEAVE: u32 = 4;
}

/// Payload carried by an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventData {
    /// No payload
    None,
    /// Pointer payload, positioned in the receiving widget's local space
    Pointer {
        x: f32,
        y: f32,
        /// 0 is the primary button (or the single touch contact)
        button: u32,
        pressure: f32,
    },
}

/// An input event
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// One of the `event_types` constants
    pub event_type: u32,
    /// Target widget, 0 when unrouted
    pub target: u64,
    /// Event payload
    pub data: EventData,
    /// Host timestamp in milliseconds
    pub timestamp: u64,
    /// Set by handlers to stop further propagation
    pub propagation_stopped: bool,
}

impl Event {
    /// Create a primary-button pointer event at the given local position
    pub fn pointer(event_type: u32, x: f32, y: f32) -> Self {
        Self {
            event_type,
            target: 0,
            data: EventData::Pointer {
                x,
                y,
                button: 0,
                pressure: 1.0,
            },
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    /// The pointer position, if this event carries one
    pub fn pointer_position(&self) -> Option<Point> {
        match self.data {
            EventData::Pointer { x, y, .. } => Some(Point::new(x, y)),
            EventData::None => None,
        }
    }

    /// Whether this event comes from the primary button / touch contact
    pub fn is_primary(&self) -> bool {
        matches!(self.data, EventData::Pointer { button: 0, .. })
    }
}
