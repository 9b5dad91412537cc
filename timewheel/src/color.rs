//! Colors and the perceptual gradient used to paint the highlighted arc.
//!
//! The gradient between the two configured endpoint colors is interpolated
//! in CIE LCh (the cylindrical form of Lab) with the hue taking the shortest
//! path around the wheel. Interpolating in LCh instead of raw sRGB keeps the
//! perceived lightness ramp of the arc continuous across segment boundaries.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Error produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed color {0:?}, expected #rrggbb")]
pub struct ColorParseError(String);

/// An sRGB color with an alpha component, stored as `f32`s in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)] // C-compatible layout so frames can be uploaded to a GPU as-is
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three channel values.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new opaque `Color` from three `u8` channel values.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let malformed = || ColorParseError(hex.to_owned());
        let digits = hex.strip_prefix('#').ok_or_else(malformed)?;
        // from_str_radix accepts a sign prefix, so digits-only is checked
        // up front.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| malformed())
        };
        Ok(Self::from_rgb_u8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        ))
    }

    /// Renders the color as a `#rrggbb` hex string, dropping alpha.
    pub fn to_hex(self) -> String {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// Gradient stop colors for one arc segment.
///
/// Samples the LCh interpolation between `from` and `to` at the segment's
/// boundary fractions `index / total` and `(index + 1) / total`, so the first
/// segment starts exactly at `from` and the last ends exactly at `to`.
pub fn gradient_stops(index: usize, total: usize, from: Color, to: Color) -> (Color, Color) {
    debug_assert!(total > 0 && index < total);
    let total = total as f32;
    (
        lerp_lch(from, to, index as f32 / total),
        lerp_lch(from, to, (index as f32 + 1.0) / total),
    )
}

/// Interpolates between two colors in CIE LCh at fraction `t` in `[0, 1]`.
///
/// Lightness and chroma are interpolated linearly; hue travels the shortest
/// arc, and an achromatic endpoint inherits the other endpoint's hue so
/// gradients out of gray do not spin through unrelated hues. Alpha is
/// interpolated linearly in place.
pub fn lerp_lch(from: Color, to: Color, t: f32) -> Color {
    let a = Lch::from_color(from);
    let b = Lch::from_color(to);

    let (hue_a, hue_b) = match (a.c < CHROMA_EPSILON, b.c < CHROMA_EPSILON) {
        (true, false) => (b.h, b.h),
        (false, true) => (a.h, a.h),
        _ => (a.h, b.h),
    };
    let mut delta = hue_b - hue_a;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }

    let mixed = Lch {
        l: a.l + (b.l - a.l) * t,
        c: a.c + (b.c - a.c) * t,
        h: hue_a + delta * t,
    };
    let mut out = mixed.to_color();
    out.a = from.a + (to.a - from.a) * t;
    out
}

const CHROMA_EPSILON: f32 = 1e-4;

// D65 reference white.
const WHITE_X: f32 = 0.950_47;
const WHITE_Z: f32 = 1.088_83;

/// CIE LCh(ab) representation used internally by the gradient math.
#[derive(Debug, Clone, Copy)]
struct Lch {
    l: f32,
    c: f32,
    /// Hue in degrees.
    h: f32,
}

impl Lch {
    fn from_color(color: Color) -> Self {
        let r = srgb_to_linear(color.r);
        let g = srgb_to_linear(color.g);
        let b = srgb_to_linear(color.b);

        let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
        let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175 * b;
        let z = 0.019_333_9 * r + 0.119_192 * g + 0.950_304_1 * b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y);
        let fz = lab_f(z / WHITE_Z);

        let l = 116.0 * fy - 16.0;
        let lab_a = 500.0 * (fx - fy);
        let lab_b = 200.0 * (fy - fz);

        Self {
            l,
            c: lab_a.hypot(lab_b),
            h: lab_b.atan2(lab_a).to_degrees(),
        }
    }

    fn to_color(self) -> Color {
        let hue = self.h.to_radians();
        let lab_a = self.c * hue.cos();
        let lab_b = self.c * hue.sin();

        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + lab_a / 500.0;
        let fz = fy - lab_b / 200.0;

        let x = lab_f_inv(fx) * WHITE_X;
        let y = lab_f_inv(fy);
        let z = lab_f_inv(fz) * WHITE_Z;

        let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
        let g = -0.969_266 * x + 1.876_010_8 * y + 0.041_556 * z;
        let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;

        Color::from_rgb(
            linear_to_srgb(r).clamp(0.0, 1.0),
            linear_to_srgb(g).clamp(0.0, 1.0),
            linear_to_srgb(b).clamp(0.0, 1.0),
        )
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

// CIE 1976 component function, delta = 6/29.
fn lab_f(t: f32) -> f32 {
    const DELTA_CUBED: f32 = 0.008_856_452;
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * 0.042_806_183) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Color, expected: Color) {
        for (a, e) in actual.to_array().into_iter().zip(expected.to_array()) {
            assert!((a - e).abs() < 0.01, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn parses_hex() {
        let orange = Color::from_hex("#ff9800").unwrap();
        assert_close(orange, Color::from_rgb_u8(0xff, 0x98, 0x00));
        assert!(Color::from_hex("ff9800").is_err());
        assert!(Color::from_hex("#ff98").is_err());
        assert!(Color::from_hex("#ff98zz").is_err());
        assert!(Color::from_hex("#+f9800").is_err());
    }

    #[test]
    fn hex_round_trip() {
        for hex in ["#ff9800", "#ffcf00", "#171717", "#9d9d9d", "#000000"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn lerp_recovers_endpoints() {
        let from = Color::from_hex("#ff9800").unwrap();
        let to = Color::from_hex("#ffcf00").unwrap();
        assert_close(lerp_lch(from, to, 0.0), from);
        assert_close(lerp_lch(from, to, 1.0), to);
    }

    #[test]
    fn gradient_stops_cover_the_ramp() {
        let from = Color::from_hex("#ff9800").unwrap();
        let to = Color::from_hex("#ffcf00").unwrap();
        let segments = 5;

        let (first, _) = gradient_stops(0, segments, from, to);
        let (_, last) = gradient_stops(segments - 1, segments, from, to);
        assert_close(first, from);
        assert_close(last, to);

        // Adjacent segments share their boundary color.
        for i in 0..segments - 1 {
            let (_, stop) = gradient_stops(i, segments, from, to);
            let (next, _) = gradient_stops(i + 1, segments, from, to);
            assert_close(stop, next);
        }
    }

    #[test]
    fn midpoint_lightness_sits_between_endpoints() {
        let from = Color::from_hex("#ff9800").unwrap();
        let to = Color::from_hex("#ffcf00").unwrap();
        let mid = lerp_lch(from, to, 0.5);

        let (lo, hi) = {
            let a = Lch::from_color(from).l;
            let b = Lch::from_color(to).l;
            (a.min(b), a.max(b))
        };
        let l = Lch::from_color(mid).l;
        assert!(l >= lo - 0.5 && l <= hi + 0.5, "midpoint L {l} outside [{lo}, {hi}]");
    }

    #[test]
    fn achromatic_endpoint_keeps_partner_hue() {
        let gray = Color::from_rgb(0.5, 0.5, 0.5);
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let mid = lerp_lch(gray, red, 0.5);
        // A desaturated red, not a hue-spun green/blue.
        assert!(mid.r > mid.g && mid.r > mid.b, "{mid:?}");
    }

    #[test]
    fn lab_round_trip() {
        for hex in ["#ff9800", "#ffcf00", "#123456", "#9d9d9d"] {
            let color = Color::from_hex(hex).unwrap();
            assert_close(Lch::from_color(color).to_color(), color);
        }
    }
}
