//! Headless circular clock-face slider.
//!
//! `timewheel` implements the logic of a two-handle drag slider wrapped
//! around a 24-hour clock ring: drag one handle to pick a start time, the
//! other to pick an end time, and read the pair plus the clockwise duration
//! between them. The crate owns the angle↔time math, the arc-segment and
//! gradient geometry, the drag state machine, and per-instance event
//! subscription; it renders to plain data (and optionally an SVG document),
//! leaving windowing and input capture to the embedding layer.
//!
//! ## Usage
//!
//! ```
//! use glam::Vec2;
//! use timewheel::{ClockDial, ClockDialArgs, PointerEvent, DialHandle};
//!
//! let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();
//!
//! // Drag the end handle to the bottom of the ring (12:00).
//! let grab = dial.handle_position(DialHandle::End);
//! dial.handle_pointer(PointerEvent::pressed(grab));
//! let bottom = dial.center() + Vec2::new(0.0, dial.args().radius);
//! dial.handle_pointer(PointerEvent::moved(bottom));
//! dial.handle_pointer(PointerEvent::released(bottom));
//!
//! assert_eq!(dial.end_time().to_string(), "12:00");
//! let markup = timewheel::svg::render(&dial.frame());
//! assert!(markup.starts_with("<svg"));
//! ```

pub mod angle;
pub mod callback;
pub mod clock_face;
pub mod color;
pub mod dial;
pub mod geometry;
pub mod svg;
pub mod time;

pub use callback::{CallbackWith, Subscribers, Subscription};
pub use color::{Color, ColorParseError};
pub use dial::{
    ClockDial, ClockDialArgs, DialController, DialError, DialEvents, DialFrame, DialHandle,
    DialUpdate, EndUpdate, GradientArc, HandleGeometry, IconMarkup, PointerEvent, PointerPhase,
    StartUpdate,
};
pub use geometry::{ArcSegment, SEGMENT_OVERLAP};
pub use time::{TimeError, TimeOfDay};
