//! Arc-segment geometry for the highlighted ring.
//!
//! Coordinates live in an SVG-like space: the ring is centered at the
//! origin, `+x` points right, `+y` points down. Angle 0 is 12 o'clock and
//! angles grow clockwise, so a point on the ring is
//! `(r·sin θ, −r·cos θ)`.

use std::f32::consts::TAU;

use glam::Vec2;

/// Extra radians appended to a segment's rendered end point so adjacent
/// arcs overlap slightly instead of leaving a hairline gap. A visual fudge
/// factor only; [`ArcSegment::true_to`] carries the exact boundary.
pub const SEGMENT_OVERLAP: f32 = 0.005;

/// Returns the point at `angle` on a ring of the given radius.
#[inline]
pub fn point_on_ring(radius: f32, angle: f32) -> Vec2 {
    Vec2::new(radius * angle.sin(), -radius * angle.cos())
}

/// One equal angular slice of the highlighted arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Angle where the slice begins, wrapped into `[0, 2π)`.
    pub from_angle: f32,
    /// Exact angle where the slice ends, wrapped into `[0, 2π)`.
    pub to_angle: f32,
    /// Start point on the ring.
    pub from: Vec2,
    /// Rendered end point, pushed past `to_angle` by the overlap.
    pub to: Vec2,
    /// Exact end point, for hit-testing or chaining to the next slice.
    pub true_to: Vec2,
}

/// Computes slice `index` of `total` equal slices of the arc starting at
/// `start_angle` and spanning `angle_length`, using [`SEGMENT_OVERLAP`].
pub fn arc_segment(
    index: usize,
    total: usize,
    radius: f32,
    start_angle: f32,
    angle_length: f32,
) -> ArcSegment {
    arc_segment_with_overlap(index, total, radius, start_angle, angle_length, SEGMENT_OVERLAP)
}

/// [`arc_segment`] with an explicit overlap, which may be zero.
pub fn arc_segment_with_overlap(
    index: usize,
    total: usize,
    radius: f32,
    start_angle: f32,
    angle_length: f32,
    overlap: f32,
) -> ArcSegment {
    debug_assert!(total > 0, "arc has zero segments");
    debug_assert!(index < total, "segment index {index} out of {total}");

    let slice = angle_length / total as f32;
    let from_angle = wrap_positive(start_angle + slice * index as f32);
    let to_angle = wrap_positive(start_angle + slice * (index as f32 + 1.0));

    ArcSegment {
        from_angle,
        to_angle,
        from: point_on_ring(radius, from_angle),
        to: point_on_ring(radius, to_angle + overlap),
        true_to: point_on_ring(radius, to_angle),
    }
}

/// Wraps a slice angle into `[0, 2π)`.
///
/// Slice angles only go negative through the centered initial-time
/// convention, so a single turn of correction is all that is ever needed.
fn wrap_positive(angle: f32) -> f32 {
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    if angle >= TAU { angle - TAU } else { angle }
}
