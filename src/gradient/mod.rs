//! A conical (angular) gradient: color varies by angle around a fixed
//! center point, sweeping clockwise from "up".

mod factory;
mod lookup;
mod spec;

pub use factory::{HUE_WHEEL_COLORS, HUE_WHEEL_FRACTIONS};
pub use spec::{GradientError, GradientStop};

use crate::color::Rgba;
use log::debug;
use lookup::LookupTable;
use spec::StopVec;

/// A center-anchored angular gradient usable as a fill source for a
/// rasterizer.
///
/// Immutable once built; [`ConicalGradient::color_at`] is read-only
/// and safe to call from parallel rasterization threads.
pub struct ConicalGradient {
    center: (f32, f32),
    stops: StopVec,
    table: LookupTable,
}

impl ConicalGradient {
    /// Builds a gradient from parallel fraction/color arrays.
    ///
    /// A stop at fraction 0.0 and 1.0 is synthesized when the caller
    /// omits one, `offset` (in -0.5..=0.5) rotates all stops, and the
    /// interpolation slopes are precomputed once here so the per-pixel
    /// path only does a lookup and one multiply per channel.
    pub fn new(
        center: (f32, f32),
        offset: f32,
        fractions: &[f32],
        colors: &[Rgba],
    ) -> Result<Self, GradientError> {
        let stops = spec::normalized_stops(offset, fractions, colors)?;
        debug!(
            "conical gradient at ({:.1}, {:.1}): {} stops after normalization",
            center.0,
            center.1,
            stops.len()
        );

        let table = LookupTable::build(&stops);
        Ok(Self {
            center,
            stops,
            table,
        })
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// The normalized stop list: strictly ascending fractions, first
    /// at 0.0 and last at 1.0.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The gradient color under the given pixel.
    ///
    /// Defined for every input, including the center pixel itself,
    /// so a raster pass can never fault mid-scanline.
    pub fn color_at(&self, x: f32, y: f32) -> Rgba {
        let angle = angle_from_up(x - self.center.0, y - self.center.1);
        self.table.color_at_angle(angle)
    }
}

/// Angle in degrees from the "up" direction sweeping clockwise, for
/// screen coordinates where y grows downward.
///
/// Quadrant-corrects a raw `acos(dx / distance)` into the full 0..=360
/// range. A zero-length vector is treated as distance 1, which lands
/// on angle 0.
pub(crate) fn angle_from_up(dx: f32, dy: f32) -> f32 {
    let mut distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        distance = 1.0;
    }

    let raw = (dx / distance).acos().to_degrees().abs();
    if dx >= 0.0 && dy <= 0.0 {
        90.0 - raw
    } else if dx >= 0.0 {
        raw + 90.0
    } else if dy >= 0.0 {
        raw + 90.0
    } else {
        450.0 - raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const CENTER: (f32, f32) = (100.0, 100.0);
    const RADIUS: f32 = 50.0;

    /// Pixel on a circle around CENTER at the given clockwise-from-up
    /// angle fraction.
    fn point_at_fraction(fraction: f32) -> (f32, f32) {
        let theta = fraction * TAU;
        (
            CENTER.0 + RADIUS * theta.sin(),
            CENTER.1 - RADIUS * theta.cos(),
        )
    }

    fn channel_close(a: u8, b: u8, tolerance: u8) -> bool {
        a.abs_diff(b) <= tolerance
    }

    #[test]
    fn angle_from_up_maps_cardinal_directions() {
        assert!((angle_from_up(0.0, -1.0) - 0.0).abs() < 1e-3);
        assert!((angle_from_up(1.0, 0.0) - 90.0).abs() < 1e-3);
        assert!((angle_from_up(0.0, 1.0) - 180.0).abs() < 1e-3);
        assert!((angle_from_up(-1.0, 0.0) - 270.0).abs() < 1e-3);
    }

    #[test]
    fn angle_from_up_is_defined_for_the_zero_vector() {
        assert_eq!(angle_from_up(0.0, 0.0), 0.0);
    }

    #[test]
    fn hue_wheel_matches_stop_colors_at_stop_angles() {
        let gradient = ConicalGradient::hue_wheel(CENTER);

        for (&fraction, &expected) in HUE_WHEEL_FRACTIONS.iter().zip(&HUE_WHEEL_COLORS) {
            // A full turn shares its ray with angle 0, which belongs to
            // the synthesized first stop; the last segment is sampled
            // just below the seam instead.
            if fraction == 1.0 {
                continue;
            }
            let (x, y) = point_at_fraction(fraction);
            let color = gradient.color_at(x, y);
            assert!(
                channel_close(color.r, expected.r, 2)
                    && channel_close(color.g, expected.g, 2)
                    && channel_close(color.b, expected.b, 2),
                "at fraction {fraction}: {color:?} != {expected:?}"
            );
        }

        let (x, y) = point_at_fraction(0.9999);
        let near_seam = gradient.color_at(x, y);
        let expected = HUE_WHEEL_COLORS[11];
        assert!(
            channel_close(near_seam.r, expected.r, 2)
                && channel_close(near_seam.g, expected.g, 2)
                && channel_close(near_seam.b, expected.b, 2),
            "just below the seam: {near_seam:?} != {expected:?}"
        );
    }

    #[test]
    fn angle_zero_matches_the_first_stop_color() {
        let gradient = ConicalGradient::hue_wheel(CENTER);
        let (x, y) = point_at_fraction(0.0);
        assert_eq!(gradient.color_at(x, y), HUE_WHEEL_COLORS[0]);
    }

    #[test]
    fn center_pixel_uses_the_angle_zero_color() {
        let gradient = ConicalGradient::hue_wheel(CENTER);
        let (x, y) = point_at_fraction(0.0);
        assert_eq!(
            gradient.color_at(CENTER.0, CENTER.1),
            gradient.color_at(x, y)
        );
    }

    #[test]
    fn exact_boundary_interpolation_at_interior_stops() {
        let red = Rgba::opaque(255, 0, 0);
        let green = Rgba::opaque(0, 255, 0);
        let blue = Rgba::opaque(0, 0, 255);
        let gradient =
            ConicalGradient::new(CENTER, 0.0, &[0.0, 0.5, 1.0], &[red, green, blue]).unwrap();

        let (x, y) = point_at_fraction(0.5);
        assert_eq!(gradient.color_at(x, y), green);
    }

    #[test]
    fn interpolation_is_monotonic_between_adjacent_stops() {
        let gradient = ConicalGradient::hue_wheel(CENTER);

        // Yellow (255,255,0) at 30 degrees to orange (255,128,0) at 60:
        // green falls, red and blue hold.
        let mut previous_green = 255u8;
        for step in 0..=30 {
            let fraction = (30.0 + step as f32) / 360.0;
            let (x, y) = point_at_fraction(fraction);
            let color = gradient.color_at(x, y);
            assert!(
                color.g <= previous_green,
                "green rose at {fraction}: {} > {previous_green}",
                color.g
            );
            previous_green = color.g;
        }
    }

    #[test]
    fn half_turn_offsets_keep_the_seam_continuous() {
        for offset in [-0.5, 0.5] {
            let gradient = ConicalGradient::new(
                CENTER,
                offset,
                &HUE_WHEEL_FRACTIONS,
                &HUE_WHEEL_COLORS,
            )
            .unwrap();

            let (x0, y0) = point_at_fraction(0.999);
            let (x1, y1) = point_at_fraction(0.001);
            let before = gradient.color_at(x0, y0);
            let after = gradient.color_at(x1, y1);

            // 0.002 turns is under one degree; the steepest wheel
            // segment moves ~4.3 channel units per degree.
            assert!(
                channel_close(before.r, after.r, 6)
                    && channel_close(before.g, after.g, 6)
                    && channel_close(before.b, after.b, 6),
                "seam discontinuity with offset {offset}: {before:?} vs {after:?}"
            );
        }
    }
}
