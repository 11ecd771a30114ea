//! HSL to RGB conversion and channel clamping.
//!
//! Pure value math with no error states: inputs are pre-clamped by
//! callers, and outputs are clamped again here to absorb rounding.

/// Saturating clamp, generic over both integer and float channel math.
pub fn clamp<T: PartialOrd>(lower: T, upper: T, value: T) -> T {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// An 8-bit RGBA color, channels in 0..=255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Converts normalized HSL (`hue` in turns, `saturation` and `luminance`
/// in 0..=1) to an opaque RGB color.
///
/// Zero saturation short-circuits to the achromatic gray
/// `(luminance, luminance, luminance)`.
pub fn rgb_from_hsl(hue: f32, saturation: f32, luminance: f32) -> Rgba {
    let (r, g, b) = if saturation == 0.0 {
        (luminance, luminance, luminance)
    } else {
        let q = if luminance < 0.5 {
            luminance * (1.0 + saturation)
        } else {
            luminance + saturation - luminance * saturation
        };
        let p = 2.0 * luminance - q;

        (
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
        )
    };

    Rgba::opaque(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
}

/// Rounds a normalized channel to the nearest 0..=255 integer,
/// clamping to absorb float rounding at the ramp edges.
pub(crate) fn channel_to_u8(value: f32) -> u8 {
    clamp(0, 255, (value * 255.0).round() as i32) as u8
}

/// The standard 4-segment piecewise-linear HSL ramp for one channel.
/// The phase-shifted hue is wrapped into [0, 1) before the ramp.
fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
