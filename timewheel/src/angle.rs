//! Angle ↔ time-of-day conversion for the 24-hour clock ring.
//!
//! The ring uses clock orientation: angle 0 is 12 o'clock (midnight at the
//! top) and angles grow clockwise. Two normalization conventions coexist and
//! both are load-bearing:
//!
//! - The drag path always wraps angles into `[0, 2π)` (see
//!   [`normalize_tau`]) before they are stored or converted to time.
//! - The reverse path from a configured [`TimeOfDay`] keeps angles centered
//!   in `(−π, π]` (see [`time_to_angle`]), so an initial 18:00 handle sits at
//!   `−π/2` rather than `3π/2`.
//!
//! Every function here is pure and total over finite inputs.

use std::f32::consts::{PI, TAU};

use crate::time::TimeOfDay;

/// Number of selectable ticks around the ring: one per 5 minutes of a day.
pub const TICKS_PER_DAY: u32 = 288;

/// Minutes represented by a single tick.
pub const TICK_MINUTES: u32 = 5;

/// Angular size of one tick, in radians.
pub const TICK_ANGLE: f32 = TAU / TICKS_PER_DAY as f32;

/// Angular size of one minute, in radians.
pub const MINUTE_ANGLE: f32 = TAU / (24.0 * 60.0);

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_tau(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can land exactly on TAU for tiny negative inputs.
    if wrapped >= TAU { wrapped - TAU } else { wrapped }
}

/// Converts a ring angle to clockwise minutes from midnight.
///
/// The angle is wrapped into `[0, 2π)`, rounded to the nearest 5-minute
/// tick, and scaled back to minutes. The result is always a multiple of
/// [`TICK_MINUTES`] in `[0, 1440)`, and the mapping is periodic in `2π`.
pub fn angle_to_minutes(angle: f32) -> u32 {
    let ticks = (normalize_tau(angle) / TICK_ANGLE).round() as i64;
    (ticks * TICK_MINUTES as i64).rem_euclid(TimeOfDay::MINUTES_PER_DAY as i64) as u32
}

/// Converts a ring angle to the time-of-day it points at.
pub fn angle_to_time(angle: f32) -> TimeOfDay {
    TimeOfDay::from_minutes(angle_to_minutes(angle))
}

/// Converts a time-of-day to its ring angle in the centered `(−π, π]` range.
///
/// Times after noon come out negative. Callers that need the drag-side
/// convention must pass the result through [`normalize_tau`]; the dial
/// deliberately does not do so for configured initial angles.
pub fn time_to_angle(time: TimeOfDay) -> f32 {
    let hours = time.hour() as f32 + time.minute() as f32 / 60.0;
    let angle = PI / 12.0 * hours;
    if angle > PI { angle - TAU } else { angle }
}
