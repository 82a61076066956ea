//! Tickbox Widget Library
//!
//! A single circular checkbox control: a tappable ring that draws a checkmark
//! when toggled.
//!
//! # Architecture
//!
//! The widget is built on three rules:
//!
//! 1. **Wholesale layer replacement**: every draw pass rebuilds the ring and
//!    tick layers from the current bounds; stale geometry is never shown.
//!
//! 2. **Cheap restyling**: property setters compare old and new values and
//!    recolor the existing layers in place, without a geometry recompute.
//!
//! 3. **Report, don't toggle**: a completed tap only notifies the delegate.
//!    Flipping `checked` is the delegate's responsibility.
//!
//! # Example
//!
//! ```rust
//! use tickbox_core::{event_types, Color, Event, Rect};
//! use tickbox_widget::prelude::*;
//!
//! let mut cb = checkbox()
//!     .bounds(Rect::new(0.0, 0.0, 100.0, 100.0))
//!     .tint(Color::BLUE)
//!     .build();
//!
//! // Host framework: first display
//! cb.draw();
//!
//! // Host framework: tap delivery (widget reports, caller toggles)
//! cb.handle_event(&Event::pointer(event_types::POINTER_UP, 50.0, 50.0));
//! cb.set_checked(!cb.checked());
//! assert!(cb.checked());
//! ```

pub mod checkbox;
pub mod metrics;
pub mod style;

pub use checkbox::{checkbox, CheckBox, CheckBoxBuilder, CheckBoxDelegate};
pub use style::{CheckBoxDesc, CheckBoxStyle, StyleError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::checkbox::{checkbox, CheckBox, CheckBoxBuilder, CheckBoxDelegate};
    pub use crate::style::{CheckBoxDesc, CheckBoxStyle, StyleError};
}
