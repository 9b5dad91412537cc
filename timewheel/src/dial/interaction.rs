//! Pointer handling for the dial's two handles.
//!
//! The embedding layer forwards pressed/moved/released events in its own
//! pixel space; everything here is synchronous and touches no global state.

use glam::Vec2;
use tracing::trace;

use super::ClockDial;
use crate::angle::normalize_tau;
use crate::geometry::point_on_ring;

/// Which of the two handles an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialHandle {
    /// The handle at the arc's start (bedtime in the classic skin).
    Start,
    /// The handle at the arc's end.
    End,
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Primary button or touch point went down.
    Pressed,
    /// The pointer moved.
    Moved,
    /// Primary button or touch point was released.
    Released,
}

/// A single pointer event in the embedding layer's pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in the same space as [`ClockDial::center`].
    pub position: Vec2,
    /// What happened.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Convenience constructor for a press.
    pub fn pressed(position: Vec2) -> Self {
        Self {
            position,
            phase: PointerPhase::Pressed,
        }
    }

    /// Convenience constructor for a move.
    pub fn moved(position: Vec2) -> Self {
        Self {
            position,
            phase: PointerPhase::Moved,
        }
    }

    /// Convenience constructor for a release.
    pub fn released(position: Vec2) -> Self {
        Self {
            position,
            phase: PointerPhase::Released,
        }
    }
}

/// Drag and hover state for a dial instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DialController {
    dragging: Option<DialHandle>,
    is_hovered: bool,
}

impl DialController {
    /// The handle currently being dragged, if any.
    pub fn dragging(&self) -> Option<DialHandle> {
        self.dragging
    }

    /// Whether the pointer is over either handle's grab disc.
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }
}

/// Converts a pointer position to a ring angle in `[0, 2π)`.
///
/// `atan2` measures from 3 o'clock; adding `π/2` rotates the origin to the
/// top of the ring so the result lines up with the clock convention.
pub fn pointer_angle(center: Vec2, position: Vec2) -> f32 {
    let delta = position - center;
    normalize_tau(delta.y.atan2(delta.x) + std::f32::consts::FRAC_PI_2)
}

impl ClockDial {
    /// Feeds one pointer event through the drag state machine.
    ///
    /// A press grabs the nearest handle whose grab disc contains the
    /// pointer; moves while dragging re-derive the corresponding angle and
    /// run the drag transition; a release ends the drag.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.phase {
            PointerPhase::Pressed => {
                let grabbed = self.handle_under(event.position);
                self.controller.dragging = grabbed;
                self.controller.is_hovered = grabbed.is_some();
                if let Some(handle) = grabbed {
                    trace!(?handle, "handle grabbed");
                }
            }
            PointerPhase::Moved => {
                self.controller.is_hovered = self.handle_under(event.position).is_some();
                match self.controller.dragging {
                    Some(DialHandle::Start) => {
                        self.drag_start_to(pointer_angle(self.center, event.position));
                    }
                    Some(DialHandle::End) => {
                        self.drag_end_to(pointer_angle(self.center, event.position));
                    }
                    None => {}
                }
            }
            PointerPhase::Released => {
                if self.controller.dragging.take().is_some() {
                    trace!("handle released");
                }
            }
        }
    }

    /// Pixel position of a handle's center.
    pub fn handle_position(&self, handle: DialHandle) -> Vec2 {
        let angle = match handle {
            DialHandle::Start => self.start_angle,
            DialHandle::End => self.start_angle + self.angle_length,
        };
        self.center + point_on_ring(self.args.radius, angle)
    }

    /// The handle whose grab disc contains `position`, nearest first.
    fn handle_under(&self, position: Vec2) -> Option<DialHandle> {
        // Same disc the handle is drawn with.
        let grab_radius = (self.args.stroke_width - 1.0) / 2.0;
        let start_dist = self.handle_position(DialHandle::Start).distance(position);
        let end_dist = self.handle_position(DialHandle::End).distance(position);

        if start_dist <= end_dist && start_dist <= grab_radius {
            Some(DialHandle::Start)
        } else if end_dist <= grab_radius {
            Some(DialHandle::End)
        } else {
            None
        }
    }
}
