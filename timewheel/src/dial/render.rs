//! Renderer-ready geometry derived from the dial state.
//!
//! A [`DialFrame`] is a pure function of the current configuration and
//! handle angles; it carries everything a renderer needs and nothing is
//! cached between frames.

use glam::Vec2;
use smallvec::SmallVec;

use super::{ClockDial, DialHandle, IconMarkup};
use crate::{
    clock_face::{ClockFaceGeometry, clock_face},
    color::{Color, gradient_stops},
    geometry::{ArcSegment, arc_segment_with_overlap},
};

/// One gradient-painted slice of the highlighted arc.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientArc {
    /// Slice index, `0..segments`.
    pub index: usize,
    /// Slice geometry on the ring.
    pub segment: ArcSegment,
    /// Gradient color at the slice's start.
    pub from_color: Color,
    /// Gradient color at the slice's rendered end.
    pub to_color: Color,
}

/// Drawn state of one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleGeometry {
    /// Handle center relative to the ring center.
    pub center: Vec2,
    /// Disc radius.
    pub radius: f32,
    /// Accent color of the disc outline.
    pub ring_color: Color,
    /// Injected markup, if the embedding layer supplied any.
    pub icon: Option<IconMarkup>,
}

/// Everything a renderer needs for one frame of the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct DialFrame {
    /// Square viewport edge length.
    pub container_size: f32,
    /// Ring center within the viewport.
    pub center: Vec2,
    /// Ring radius.
    pub radius: f32,
    /// Ring stroke width.
    pub stroke_width: f32,
    /// Color of the unselected ring.
    pub bg_circle_color: Color,
    /// Gradient slices covering the selected arc.
    pub arcs: SmallVec<[GradientArc; 8]>,
    /// Start handle.
    pub start_handle: HandleGeometry,
    /// End handle.
    pub end_handle: HandleGeometry,
    /// Tick marks and hour labels, when enabled.
    pub clock_face: Option<ClockFaceGeometry>,
}

impl ClockDial {
    /// Computes the current frame from the dial state.
    pub fn frame(&self) -> DialFrame {
        let args = &self.args;
        let arcs: SmallVec<[GradientArc; 8]> = (0..args.segments)
            .map(|index| {
                let segment = arc_segment_with_overlap(
                    index,
                    args.segments,
                    args.radius,
                    self.start_angle,
                    self.angle_length,
                    args.segment_overlap,
                );
                let (from_color, to_color) = gradient_stops(
                    index,
                    args.segments,
                    args.gradient_color_from,
                    args.gradient_color_to,
                );
                GradientArc {
                    index,
                    segment,
                    from_color,
                    to_color,
                }
            })
            .collect();

        let handle_radius = (args.stroke_width - 1.0) / 2.0;
        // The start handle sits on the first slice's start point; the end
        // handle on the last slice's rendered end point, overlap included.
        let start_handle = HandleGeometry {
            center: arcs.first().map(|a| a.segment.from).unwrap_or(Vec2::ZERO),
            radius: handle_radius,
            ring_color: args.gradient_color_from,
            icon: args.start_icon.clone(),
        };
        let end_handle = HandleGeometry {
            center: arcs.last().map(|a| a.segment.to).unwrap_or(Vec2::ZERO),
            radius: handle_radius,
            ring_color: args.gradient_color_to,
            icon: args.stop_icon.clone(),
        };

        let container_size = self.container_size();
        DialFrame {
            container_size,
            center: Vec2::splat(container_size / 2.0),
            radius: args.radius,
            stroke_width: args.stroke_width,
            bg_circle_color: args.bg_circle_color,
            arcs,
            start_handle,
            end_handle,
            clock_face: args.show_clock_face.then(|| {
                clock_face(
                    args.radius - args.stroke_width / 2.0,
                    args.clock_face_color,
                )
            }),
        }
    }
}

impl DialFrame {
    /// Handle geometry by side.
    pub fn handle(&self, handle: DialHandle) -> &HandleGeometry {
        match handle {
            DialHandle::Start => &self.start_handle,
            DialHandle::End => &self.end_handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::dial::ClockDialArgs;

    #[test]
    fn frame_has_one_arc_per_segment() {
        let dial = ClockDial::new(ClockDialArgs::default().segments(7)).unwrap();
        let frame = dial.frame();
        assert_eq!(frame.arcs.len(), 7);
        for (i, arc) in frame.arcs.iter().enumerate() {
            assert_eq!(arc.index, i);
        }
    }

    #[test]
    fn container_fits_ring_and_stroke() {
        let dial = ClockDial::new(ClockDialArgs::default()).unwrap();
        let frame = dial.frame();
        assert_eq!(frame.container_size, 40.0 + 2.0 * 145.0 + 2.0);
        assert_eq!(frame.center, Vec2::splat(frame.container_size / 2.0));
    }

    #[test]
    fn handles_sit_on_the_arc_ends() {
        let dial = ClockDial::new(ClockDialArgs::default()).unwrap();
        let frame = dial.frame();

        assert_eq!(frame.start_handle.center, frame.arcs[0].segment.from);
        assert_eq!(
            frame.end_handle.center,
            frame.arcs.last().unwrap().segment.to
        );
        assert_eq!(frame.handle(DialHandle::Start), &frame.start_handle);
    }

    #[test]
    fn gradient_endpoints_match_config() {
        let args = ClockDialArgs::default();
        let dial = ClockDial::new(args.clone()).unwrap();
        let frame = dial.frame();

        let first = frame.arcs.first().unwrap();
        let last = frame.arcs.last().unwrap();
        for (got, want) in [
            (first.from_color, args.gradient_color_from),
            (last.to_color, args.gradient_color_to),
        ] {
            for (a, b) in got.to_array().into_iter().zip(want.to_array()) {
                assert!((a - b).abs() < 0.01);
            }
        }
    }

    #[test]
    fn clock_face_toggles_with_config() {
        let with = ClockDial::new(ClockDialArgs::default()).unwrap();
        assert!(with.frame().clock_face.is_some());

        let without = ClockDial::new(ClockDialArgs::default().show_clock_face(false)).unwrap();
        assert!(without.frame().clock_face.is_none());
    }

    #[test]
    fn frame_follows_drags() {
        let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();
        dial.drag_start_to(0.0);
        dial.drag_end_to(PI);
        let frame = dial.frame();

        assert!(frame.start_handle.center.distance(Vec2::new(0.0, -145.0)) < 1e-3);
        // End handle is on the rendered (overlap-shifted) end point.
        assert!(frame.end_handle.center.distance(Vec2::new(0.0, 145.0)) < 1.0);
    }
}
