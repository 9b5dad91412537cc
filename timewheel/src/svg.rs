//! SVG document emission for a [`DialFrame`].
//!
//! The markup mirrors the classic skin of this widget: per-segment linear
//! gradients in the defs block, the background ring, the optional clock
//! face, the highlighted arc as one path per segment, and a disc per
//! handle with whatever icon markup the embedding layer injected.

use std::fmt::Write;

use crate::clock_face::ClockFaceGeometry;
use crate::dial::{DialFrame, HandleGeometry};

/// Renders a frame as a standalone SVG document.
pub fn render(frame: &DialFrame) -> String {
    let mut out = String::with_capacity(4096);
    let size = frame.container_size;

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size:.0}" height="{size:.0}">"#
    );

    // Gradient defs are in user space so each one can span its own arc.
    let _ = writeln!(out, "  <defs>");
    for arc in &frame.arcs {
        let from = arc.segment.from;
        let to = arc.segment.to;
        let _ = writeln!(
            out,
            r#"    <linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}">"#,
            gradient_id(arc.index),
            from.x,
            from.y,
            to.x,
            to.y
        );
        let _ = writeln!(
            out,
            r#"      <stop offset="0%" stop-color="{}"/>"#,
            arc.from_color.to_hex()
        );
        let _ = writeln!(
            out,
            r#"      <stop offset="100%" stop-color="{}"/>"#,
            arc.to_color.to_hex()
        );
        let _ = writeln!(out, "    </linearGradient>");
    }
    let _ = writeln!(out, "  </defs>");

    let _ = writeln!(
        out,
        r#"  <g transform="translate({:.2}, {:.2})">"#,
        frame.center.x, frame.center.y
    );

    let _ = writeln!(
        out,
        r#"    <circle r="{:.2}" stroke-width="{:.2}" fill="transparent" stroke="{}"/>"#,
        frame.radius,
        frame.stroke_width,
        frame.bg_circle_color.to_hex()
    );

    if let Some(face) = &frame.clock_face {
        write_clock_face(&mut out, face);
    }

    for arc in &frame.arcs {
        let from = arc.segment.from;
        let to = arc.segment.to;
        let _ = writeln!(
            out,
            r#"    <path d="M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2}" stroke-width="{:.2}" stroke="url(#{})" fill="transparent"/>"#,
            from.x,
            from.y,
            frame.radius,
            frame.radius,
            to.x,
            to.y,
            frame.stroke_width,
            gradient_id(arc.index)
        );
    }

    write_handle(&mut out, &frame.start_handle, frame.bg_circle_color.to_hex());
    write_handle(&mut out, &frame.end_handle, frame.bg_circle_color.to_hex());

    let _ = writeln!(out, "  </g>");
    let _ = writeln!(out, "</svg>");
    out
}

fn gradient_id(index: usize) -> String {
    format!("gradient{index}")
}

fn write_clock_face(out: &mut String, face: &ClockFaceGeometry) {
    let color = face.color.to_hex();
    for tick in &face.ticks {
        let _ = writeln!(
            out,
            r#"    <line stroke="{color}" stroke-width="{}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
            if tick.major { 3 } else { 1 },
            tick.from.x,
            tick.from.y,
            tick.to.x,
            tick.to.y
        );
    }
    for label in &face.labels {
        let _ = writeln!(
            out,
            r#"    <text fill="{color}" font-size="16" text-anchor="middle" x="{:.2}" y="{:.2}">{}</text>"#,
            label.position.x,
            label.position.y + 5.0,
            label.hour
        );
    }
}

fn write_handle(out: &mut String, handle: &HandleGeometry, fill: String) {
    let _ = writeln!(
        out,
        r#"    <g fill="{}" transform="translate({:.2}, {:.2})">"#,
        handle.ring_color.to_hex(),
        handle.center.x,
        handle.center.y
    );
    let _ = writeln!(
        out,
        r#"      <circle r="{:.2}" fill="{fill}" stroke="{}" stroke-width="1"/>"#,
        handle.radius,
        handle.ring_color.to_hex()
    );
    if let Some(icon) = &handle.icon {
        let _ = writeln!(out, "      {}", icon.as_str());
    }
    let _ = writeln!(out, "    </g>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::{ClockDial, ClockDialArgs};

    fn svg() -> String {
        let dial = ClockDial::new(ClockDialArgs::default()).unwrap();
        render(&dial.frame())
    }

    #[test]
    fn emits_one_gradient_and_path_per_segment() {
        let svg = svg();
        for i in 0..5 {
            assert!(svg.contains(&format!(r##"id="gradient{i}""##)));
            assert!(svg.contains(&format!(r##"url(#gradient{i})"##)));
        }
        assert!(!svg.contains("gradient5\""));
        assert_eq!(svg.matches("<path ").count(), 5);
    }

    #[test]
    fn ring_and_face_are_present() {
        let svg = svg();
        assert!(svg.contains(r##"stroke="#171717""##));
        assert_eq!(svg.matches("<line ").count(), 48);
        assert_eq!(svg.matches("<text ").count(), 12);
    }

    #[test]
    fn face_can_be_disabled() {
        let dial = ClockDial::new(ClockDialArgs::default().show_clock_face(false)).unwrap();
        let svg = render(&dial.frame());
        assert_eq!(svg.matches("<line ").count(), 0);
    }

    #[test]
    fn injected_icons_appear_verbatim() {
        let dial = ClockDial::new(
            ClockDialArgs::default()
                .start_icon(r#"<g id="moon"/>"#)
                .stop_icon(r#"<g id="sun"/>"#),
        )
        .unwrap();
        let svg = render(&dial.frame());
        assert!(svg.contains(r#"<g id="moon"/>"#));
        assert!(svg.contains(r#"<g id="sun"/>"#));
    }

    #[test]
    fn document_is_well_formed_enough() {
        let svg = svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }
}
