//! The circular time-range slider.
//!
//! ## Usage
//!
//! Build a [`ClockDial`] from [`ClockDialArgs`], feed it pointer events (or
//! drag angles directly), and read the selected times back:
//!
//! ```
//! use timewheel::{ClockDial, ClockDialArgs};
//!
//! let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();
//! assert_eq!(dial.start_time().to_string(), "18:00");
//! assert_eq!(dial.end_time().to_string(), "06:00");
//! assert_eq!(dial.duration_minutes(), 720);
//!
//! let _sub = dial.events().on_update(|update| {
//!     println!("{} -> {}", update.start_time, update.end_time);
//! });
//! dial.drag_end_to(std::f32::consts::PI);
//! assert_eq!(dial.end_time().to_string(), "12:00");
//! ```

use std::fmt;
use std::sync::Arc;

use derive_setters::Setters;
use glam::Vec2;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    angle::{MINUTE_ANGLE, angle_to_minutes, angle_to_time, normalize_tau, time_to_angle},
    callback::{Subscribers, Subscription},
    color::Color,
    geometry::SEGMENT_OVERLAP,
    time::TimeOfDay,
};

pub use interaction::{DialController, DialHandle, PointerEvent, PointerPhase, pointer_angle};
pub use render::{DialFrame, GradientArc, HandleGeometry};

mod interaction;
mod render;

/// Errors rejected by [`ClockDial::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialError {
    /// The arc must be divided into at least one segment.
    #[error("segment count must be at least 1")]
    ZeroSegments,
    /// The ring radius must be positive.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    /// The ring stroke width must be positive.
    #[error("stroke width must be positive, got {0}")]
    NonPositiveStrokeWidth(f32),
}

/// An SVG fragment injected into a handle, supplied by the embedding UI.
///
/// The crate ships no icon artwork of its own; handles without markup render
/// as plain discs.
#[derive(Debug, Clone)]
pub struct IconMarkup(Arc<str>);

impl IconMarkup {
    /// The raw markup fragment.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for IconMarkup {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl From<&str> for IconMarkup {
    fn from(markup: &str) -> Self {
        Self(Arc::from(markup))
    }
}

impl From<String> for IconMarkup {
    fn from(markup: String) -> Self {
        Self(Arc::from(markup))
    }
}

/// Configuration for a [`ClockDial`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct ClockDialArgs {
    /// Number of gradient segments the highlighted arc is divided into.
    pub segments: usize,
    /// Ring radius in pixels, measured to the middle of the stroke.
    pub radius: f32,
    /// Stroke width of the ring in pixels.
    pub stroke_width: f32,
    /// Color of the unselected ring.
    pub bg_circle_color: Color,
    /// Gradient color at the start handle.
    pub gradient_color_from: Color,
    /// Gradient color at the end handle.
    pub gradient_color_to: Color,
    /// Whether tick marks and hour labels are drawn inside the ring.
    pub show_clock_face: bool,
    /// Color of the clock face ticks and labels.
    pub clock_face_color: Color,
    /// Initial start time.
    pub start_time: TimeOfDay,
    /// Initial end time.
    pub end_time: TimeOfDay,
    /// Angular overlap between adjacent rendered segments, in radians.
    pub segment_overlap: f32,
    /// Optional markup for the start handle.
    #[setters(skip)]
    pub start_icon: Option<IconMarkup>,
    /// Optional markup for the end handle.
    #[setters(skip)]
    pub stop_icon: Option<IconMarkup>,
}

impl Default for ClockDialArgs {
    fn default() -> Self {
        Self {
            segments: 5,
            radius: 145.0,
            stroke_width: 40.0,
            bg_circle_color: Color::from_rgb_u8(0x17, 0x17, 0x17),
            gradient_color_from: Color::from_rgb_u8(0xff, 0x98, 0x00),
            gradient_color_to: Color::from_rgb_u8(0xff, 0xcf, 0x00),
            show_clock_face: true,
            clock_face_color: Color::from_rgb_u8(0x9d, 0x9d, 0x9d),
            start_time: TimeOfDay::from_minutes(18 * 60),
            end_time: TimeOfDay::from_minutes(6 * 60),
            segment_overlap: SEGMENT_OVERLAP,
            start_icon: None,
            stop_icon: None,
        }
    }
}

impl ClockDialArgs {
    /// Sets the start handle markup.
    pub fn start_icon(mut self, icon: impl Into<IconMarkup>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    /// Sets the end handle markup.
    pub fn stop_icon(mut self, icon: impl Into<IconMarkup>) -> Self {
        self.stop_icon = Some(icon.into());
        self
    }
}

/// Snapshot emitted whenever either handle moves.
#[derive(Debug, Clone, PartialEq)]
pub struct DialUpdate {
    /// Current start-handle angle.
    pub start_angle: f32,
    /// Current clockwise arc length from start to end handle.
    pub angle_length: f32,
    /// Time under the start handle.
    pub start_time: TimeOfDay,
    /// Time under the end handle.
    pub end_time: TimeOfDay,
    /// Selected duration in minutes.
    pub duration_minutes: u32,
}

/// Snapshot emitted when the start handle moves.
#[derive(Debug, Clone, PartialEq)]
pub struct StartUpdate {
    /// New start-handle angle.
    pub start_angle: f32,
    /// Time under the start handle.
    pub start_time: TimeOfDay,
    /// Selected duration in minutes.
    pub duration_minutes: u32,
}

/// Snapshot emitted when the end handle moves.
#[derive(Debug, Clone, PartialEq)]
pub struct EndUpdate {
    /// New clockwise arc length from start to end handle.
    pub angle_length: f32,
    /// Time under the end handle.
    pub end_time: TimeOfDay,
    /// Selected duration in minutes.
    pub duration_minutes: u32,
}

/// Per-instance event registries for a dial.
#[derive(Default)]
pub struct DialEvents {
    update: Subscribers<DialUpdate>,
    start: Subscribers<StartUpdate>,
    end: Subscribers<EndUpdate>,
}

impl DialEvents {
    /// Registers a handler for every handle movement.
    pub fn on_update<F>(&self, handler: F) -> Subscription
    where
        F: Fn(DialUpdate) + Send + Sync + 'static,
    {
        self.update.subscribe(handler)
    }

    /// Registers a handler for start-handle movement.
    pub fn on_start_update<F>(&self, handler: F) -> Subscription
    where
        F: Fn(StartUpdate) + Send + Sync + 'static,
    {
        self.start.subscribe(handler)
    }

    /// Registers a handler for end-handle movement.
    pub fn on_end_update<F>(&self, handler: F) -> Subscription
    where
        F: Fn(EndUpdate) + Send + Sync + 'static,
    {
        self.end.subscribe(handler)
    }
}

/// A circular two-handle slider selecting a start/end time-of-day.
///
/// The dial stores only the start angle and the clockwise arc length; all
/// times, durations, and frame geometry are recomputed from those two values
/// on demand.
pub struct ClockDial {
    args: ClockDialArgs,
    /// Start-handle angle. In the centered `(−π, π]` convention until the
    /// first drag; drags always store `[0, 2π)`.
    start_angle: f32,
    /// Clockwise arc length, `[0, 2π)`.
    angle_length: f32,
    /// Ring center in the pointer-event coordinate space.
    center: Vec2,
    controller: DialController,
    events: DialEvents,
}

impl ClockDial {
    /// Creates a dial, validating the configuration.
    pub fn new(args: ClockDialArgs) -> Result<Self, DialError> {
        if args.segments == 0 {
            return Err(DialError::ZeroSegments);
        }
        if !(args.radius > 0.0) {
            return Err(DialError::NonPositiveRadius(args.radius));
        }
        if !(args.stroke_width > 0.0) {
            return Err(DialError::NonPositiveStrokeWidth(args.stroke_width));
        }

        let start_angle = time_to_angle(args.start_time);
        let angle_length = args.start_time.span_to(args.end_time) as f32 * MINUTE_ANGLE;
        debug!(
            segments = args.segments,
            radius = args.radius,
            start = %args.start_time,
            end = %args.end_time,
            "creating clock dial"
        );

        let container = args.stroke_width + args.radius * 2.0 + 2.0;
        Ok(Self {
            args,
            start_angle,
            angle_length,
            center: Vec2::splat(container / 2.0),
            controller: DialController::default(),
            events: DialEvents::default(),
        })
    }

    /// The configuration the dial was built with.
    pub fn args(&self) -> &ClockDialArgs {
        &self.args
    }

    /// Event registries scoped to this instance.
    pub fn events(&self) -> &DialEvents {
        &self.events
    }

    /// Current start-handle angle.
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Current clockwise arc length between the handles.
    pub fn angle_length(&self) -> f32 {
        self.angle_length
    }

    /// Time under the start handle, snapped to 5 minutes.
    pub fn start_time(&self) -> TimeOfDay {
        angle_to_time(self.start_angle)
    }

    /// Time under the end handle, snapped to 5 minutes.
    pub fn end_time(&self) -> TimeOfDay {
        angle_to_time(self.start_angle + self.angle_length)
    }

    /// Selected duration in minutes, `[0, 1440)`.
    pub fn duration_minutes(&self) -> u32 {
        angle_to_minutes(self.angle_length)
    }

    /// Width and height of the square viewport that fits the whole ring.
    pub fn container_size(&self) -> f32 {
        self.args.stroke_width + self.args.radius * 2.0 + 2.0
    }

    /// Ring center used to translate pointer positions into angles.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Tells the dial where its ring center sits in pointer coordinates.
    ///
    /// The embedding layer calls this after layout, the way it would measure
    /// a bounding rect.
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Drag state of the handles.
    pub fn controller(&self) -> &DialController {
        &self.controller
    }

    /// Moves the start handle to `angle`, keeping the end handle fixed.
    pub fn drag_start_to(&mut self, angle: f32) {
        let new_start = normalize_tau(angle);
        let current_stop = normalize_tau(self.start_angle + self.angle_length);
        self.angle_length = normalize_tau(current_stop - new_start);
        self.start_angle = new_start;
        trace!(
            start_angle = self.start_angle,
            angle_length = self.angle_length,
            "start handle moved"
        );

        self.emit_update();
        self.events.start.emit(&StartUpdate {
            start_angle: self.start_angle,
            start_time: self.start_time(),
            duration_minutes: self.duration_minutes(),
        });
    }

    /// Moves the end handle to `angle`, keeping the start handle fixed.
    pub fn drag_end_to(&mut self, angle: f32) {
        self.angle_length = normalize_tau(normalize_tau(angle) - self.start_angle);
        trace!(angle_length = self.angle_length, "end handle moved");

        self.emit_update();
        self.events.end.emit(&EndUpdate {
            angle_length: self.angle_length,
            end_time: self.end_time(),
            duration_minutes: self.duration_minutes(),
        });
    }

    fn emit_update(&self) {
        self.events.update.emit(&DialUpdate {
            start_angle: self.start_angle,
            angle_length: self.angle_length,
            start_time: self.start_time(),
            end_time: self.end_time(),
            duration_minutes: self.duration_minutes(),
        });
    }
}

impl fmt::Debug for ClockDial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClockDial")
            .field("args", &self.args)
            .field("start_angle", &self.start_angle)
            .field("angle_length", &self.angle_length)
            .field("center", &self.center)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}
