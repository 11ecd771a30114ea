//! The stock hue wheel: twelve stops, yellow at the top, sweeping
//! clockwise through red, magenta, blue, and green back to yellow.

use super::{ConicalGradient, GradientError};
use crate::color::Rgba;

pub const HUE_WHEEL_FRACTIONS: [f32; 12] = [
    0.083333, 0.166666, 0.25, 0.333333, 0.416666, 0.5, 0.583333, 0.666666, 0.75, 0.833333,
    0.916666, 1.0,
];

pub const HUE_WHEEL_COLORS: [Rgba; 12] = [
    Rgba::new(255, 255, 0, 255),
    Rgba::new(255, 128, 0, 255),
    Rgba::new(255, 0, 0, 255),
    Rgba::new(255, 0, 128, 255),
    Rgba::new(255, 0, 255, 255),
    Rgba::new(128, 0, 255, 255),
    Rgba::new(0, 0, 255, 255),
    Rgba::new(0, 128, 255, 255),
    Rgba::new(0, 255, 255, 255),
    Rgba::new(0, 255, 128, 255),
    Rgba::new(0, 255, 0, 255),
    Rgba::new(128, 255, 0, 255),
];

impl ConicalGradient {
    /// The 12-stop hue wheel used by the picker's ring.
    pub fn hue_wheel(center: (f32, f32)) -> Self {
        Self::hue_wheel_with_offset(center, 0.0)
            .expect("stock hue wheel stops are a valid spec")
    }

    /// The stock wheel rotated by `offset` turns (-0.5..=0.5).
    pub fn hue_wheel_with_offset(
        center: (f32, f32),
        offset: f32,
    ) -> Result<Self, GradientError> {
        Self::new(center, offset, &HUE_WHEEL_FRACTIONS, &HUE_WHEEL_COLORS)
    }
}
