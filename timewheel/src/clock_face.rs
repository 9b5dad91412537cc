//! Tick marks and hour labels drawn inside the ring.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::color::Color;

/// Half-hour tick marks around the face: 48 over 24 hours.
pub const TICK_COUNT: usize = 48;

/// Every fourth tick (the even hours) is drawn heavier.
pub const MAJOR_TICK_EVERY: usize = 4;

const TICK_INSET: f32 = 5.0;
const TICK_LENGTH: f32 = 7.0;
const LABEL_INSET: f32 = 30.0;

/// One radial tick mark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Outer end of the tick, relative to the ring center.
    pub from: Vec2,
    /// Inner end of the tick.
    pub to: Vec2,
    /// Whether this is an even-hour (heavy) tick.
    pub major: bool,
}

/// One hour label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLabel {
    /// Hour shown, `0..24` in steps of two; midnight is 0, at the top.
    pub hour: u8,
    /// Label anchor position relative to the ring center.
    pub position: Vec2,
}

/// The full face: ticks plus labels, all in ring-center coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFaceGeometry {
    /// Tick marks, outermost ring inward.
    pub ticks: Vec<TickMark>,
    /// Even-hour labels.
    pub labels: Vec<HourLabel>,
    /// Stroke and fill color for the face.
    pub color: Color,
}

/// Lays out the face inside a ring of inner radius `inner_radius`.
pub fn clock_face(inner_radius: f32, color: Color) -> ClockFaceGeometry {
    let face_radius = inner_radius - TICK_INSET;
    let label_radius = inner_radius - LABEL_INSET;

    let ticks = (0..TICK_COUNT)
        .map(|i| {
            let angle = TAU / TICK_COUNT as f32 * i as f32;
            let direction = Vec2::new(angle.cos(), angle.sin());
            TickMark {
                from: direction * face_radius,
                to: direction * (face_radius - TICK_LENGTH),
                major: i % MAJOR_TICK_EVERY == 0,
            }
        })
        .collect();

    // Twelve labels for the even hours; slot 12 o'clock carries 0 so
    // midnight reads naturally at the top of a 24-hour face.
    let labels = (0..12u8)
        .map(|i| {
            let angle = TAU / 12.0 * i as f32 - FRAC_PI_2 + TAU / 12.0;
            let hour = (2 * (i + 1)) % 24;
            HourLabel {
                hour,
                position: Vec2::new(angle.cos(), angle.sin()) * label_radius,
            }
        })
        .collect();

    ClockFaceGeometry {
        ticks,
        labels,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face() -> ClockFaceGeometry {
        clock_face(125.0, Color::from_rgb_u8(0x9d, 0x9d, 0x9d))
    }

    #[test]
    fn forty_eight_ticks_twelve_major() {
        let face = face();
        assert_eq!(face.ticks.len(), TICK_COUNT);
        assert_eq!(face.ticks.iter().filter(|t| t.major).count(), 12);
        assert!(face.ticks[0].major);
        assert!(!face.ticks[1].major);
    }

    #[test]
    fn ticks_point_inward() {
        for tick in face().ticks {
            assert!(tick.from.length() > tick.to.length());
            assert!((tick.from.length() - 120.0).abs() < 1e-3);
        }
    }

    #[test]
    fn labels_cover_even_hours_with_midnight_on_top() {
        let face = face();
        assert_eq!(face.labels.len(), 12);

        let hours: Vec<u8> = face.labels.iter().map(|l| l.hour).collect();
        assert!(hours.contains(&0));
        assert!(hours.iter().all(|h| h % 2 == 0 && *h < 24));

        let midnight = face.labels.iter().find(|l| l.hour == 0).unwrap();
        assert!(midnight.position.x.abs() < 1e-3);
        assert!(midnight.position.y < 0.0, "midnight belongs at the top");
    }
}
