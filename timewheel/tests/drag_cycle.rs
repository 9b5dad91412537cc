//! End-to-end drag cycles through the public API.

use std::sync::{Arc, Mutex};

use glam::Vec2;
use timewheel::{ClockDial, ClockDialArgs, DialHandle, DialUpdate, PointerEvent, TimeOfDay};

fn point_for_hour(dial: &ClockDial, hour: f32) -> Vec2 {
    let angle = std::f32::consts::TAU * hour / 24.0;
    dial.center() + Vec2::new(angle.sin(), -angle.cos()) * dial.args().radius
}

#[test]
fn full_drag_cycle_reschedules_the_night() {
    let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();
    let updates: Arc<Mutex<Vec<DialUpdate>>> = Arc::default();

    let subscription = {
        let updates = updates.clone();
        dial.events().on_update(move |u| {
            updates.lock().unwrap().push(u);
        })
    };

    // Drag the wake handle from 06:00 to 08:00.
    dial.handle_pointer(PointerEvent::pressed(dial.handle_position(DialHandle::End)));
    dial.handle_pointer(PointerEvent::moved(point_for_hour(&dial, 7.0)));
    dial.handle_pointer(PointerEvent::moved(point_for_hour(&dial, 8.0)));
    dial.handle_pointer(PointerEvent::released(point_for_hour(&dial, 8.0)));

    // Drag the bedtime handle from 18:00 to 23:00.
    dial.handle_pointer(PointerEvent::pressed(dial.handle_position(
        DialHandle::Start,
    )));
    dial.handle_pointer(PointerEvent::moved(point_for_hour(&dial, 23.0)));
    dial.handle_pointer(PointerEvent::released(point_for_hour(&dial, 23.0)));

    assert_eq!(dial.start_time(), TimeOfDay::new(23, 0).unwrap());
    assert_eq!(dial.end_time(), TimeOfDay::new(8, 0).unwrap());
    assert_eq!(dial.duration_minutes(), 9 * 60);

    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 3, "one update per drag move");
    let last = updates.last().unwrap();
    assert_eq!(last.start_time, TimeOfDay::new(23, 0).unwrap());
    assert_eq!(last.end_time, TimeOfDay::new(8, 0).unwrap());
    assert_eq!(last.duration_minutes, 540);
    drop(subscription);
}

#[test]
fn dropped_subscription_stops_receiving() {
    let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();
    let count = Arc::new(Mutex::new(0u32));

    let subscription = {
        let count = count.clone();
        dial.events().on_update(move |_| {
            *count.lock().unwrap() += 1;
        })
    };

    dial.drag_end_to(std::f32::consts::PI);
    drop(subscription);
    dial.drag_end_to(std::f32::consts::FRAC_PI_2);

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn releasing_outside_the_ring_still_ends_the_drag() {
    let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();

    dial.handle_pointer(PointerEvent::pressed(dial.handle_position(DialHandle::End)));
    dial.handle_pointer(PointerEvent::released(Vec2::new(-500.0, -500.0)));
    assert_eq!(dial.controller().dragging(), None);

    // A later move must not keep dragging.
    let before = dial.end_time();
    dial.handle_pointer(PointerEvent::moved(point_for_hour(&dial, 12.0)));
    assert_eq!(dial.end_time(), before);
}

#[test]
fn frame_and_times_stay_consistent_after_many_drags() {
    let mut dial = ClockDial::new(ClockDialArgs::default()).unwrap();

    for hour in [1.0_f32, 5.0, 9.5, 13.0, 20.0, 23.5] {
        dial.drag_end_to(std::f32::consts::TAU * hour / 24.0);
        let frame = dial.frame();

        let span = dial.start_time().span_to(dial.end_time());
        assert_eq!(span, dial.duration_minutes());
        assert_eq!(frame.arcs.len(), dial.args().segments);

        // End handle tracks the last rendered segment.
        let end = dial.handle_position(DialHandle::End) - dial.center();
        let last = frame.arcs.last().unwrap().segment;
        assert!(end.distance(last.true_to) < 1.5);
    }
}
