//! Drives a sleep-schedule dial without a windowing layer: replays a short
//! scripted drag, logs every update, and writes the resulting SVG next to
//! the working directory.

use std::error::Error;

use glam::Vec2;
use timewheel::{ClockDial, ClockDialArgs, DialHandle, PointerEvent, svg};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Icon artwork belongs to the embedding application, so the demo injects
// its own bedtime/wake glyphs instead of the library shipping any.
const BEDTIME_ICON: &str = r#"<g transform="translate(-8, -8)"><path d="M11.7,10.5c-3.6,0-6.4-2.9-6.4-6.4c0-0.7,0.1-1.4,0.4-2.1C3.1,2.9,1.2,5.3,1.2,8.1c0,3.6,2.9,6.4,6.4,6.4c2.8,0,5.2-1.8,6.1-4.4C13.1,10.4,12.4,10.5,11.7,10.5z"/></g>"#;
const WAKE_ICON: &str = r#"<g transform="translate(-8, -8)"><path d="M2,12.9h12c0.4,0,0.7-0.3,0.7-0.7c0-0.4-0.3-0.7-0.7-0.7c-0.9,0-1.7-0.7-1.7-1.7v-4c0-2.1-1.5-3.8-3.4-4.2C9,1.6,9,1.4,9,1.3c0-0.5-0.4-1-1-1c-0.5,0-1,0.4-1,1c0,0.2,0,0.3,0.1,0.4c-2,0.4-3.4,2.1-3.4,4.2v4c0,0.9-0.7,1.7-1.7,1.7c-0.4,0-0.7,0.3-0.7,0.7C1.3,12.6,1.6,12.9,2,12.9z"/><path d="M8,15.7c1.1,0,2.1-0.9,2.1-2.1H5.9C5.9,14.8,6.9,15.7,8,15.7z"/></g>"#;

fn point_for_hour(dial: &ClockDial, hour: f32) -> Vec2 {
    let angle = std::f32::consts::TAU * hour / 24.0;
    dial.center() + Vec2::new(angle.sin(), -angle.cos()) * dial.args().radius
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ClockDialArgs::default()
        .start_time("22:30".parse()?)
        .end_time("07:00".parse()?)
        .start_icon(BEDTIME_ICON)
        .stop_icon(WAKE_ICON);
    let mut dial = ClockDial::new(args)?;

    dial.events()
        .on_update(|update| {
            info!(
                start = %update.start_time,
                end = %update.end_time,
                minutes = update.duration_minutes,
                "selection changed"
            );
        })
        .detach();

    info!(
        start = %dial.start_time(),
        end = %dial.end_time(),
        minutes = dial.duration_minutes(),
        "initial selection"
    );

    // Nudge the wake handle from 07:00 to 08:30 in half-hour steps.
    dial.handle_pointer(PointerEvent::pressed(dial.handle_position(DialHandle::End)));
    for half_hours in 15..=17 {
        let position = point_for_hour(&dial, half_hours as f32 / 2.0);
        dial.handle_pointer(PointerEvent::moved(position));
    }
    dial.handle_pointer(PointerEvent::released(point_for_hour(&dial, 8.5)));

    let markup = svg::render(&dial.frame());
    let path = "timewheel-dial.svg";
    std::fs::write(path, &markup)?;
    info!(path, bytes = markup.len(), "wrote dial");

    Ok(())
}
