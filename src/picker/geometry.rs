//! Region bounds derived from the widget size: the centered
//! saturation/luminance square and the hue ring annulus.

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x && point.0 <= self.right() && point.1 >= self.y && point.1 <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Mid-thickness radius; the hue caret rides on this circle.
    pub track_radius: f32,
}

/// Bounds of the picker's two interactive regions, recomputed by the
/// host whenever the widget is resized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerLayout {
    pub center: (f32, f32),
    pub square: Rect,
    pub ring: RingGeometry,
}

impl PickerLayout {
    /// Default hue-ring thickness as a fraction of the widget side.
    pub const DEFAULT_RING_THICKNESS: f32 = 0.11;

    pub fn new(width: f32, height: f32) -> Option<Self> {
        Self::with_ring_thickness(width, height, Self::DEFAULT_RING_THICKNESS)
    }

    /// `thickness_fraction` is clamped to 0..=1; validation with an
    /// error belongs to the picker-facing setter.
    pub fn with_ring_thickness(
        width: f32,
        height: f32,
        thickness_fraction: f32,
    ) -> Option<Self> {
        if !(width > 0.0) || !(height > 0.0) {
            return None;
        }

        let side = width.min(height);
        let center = (width / 2.0, height / 2.0);

        let square_side = side / 2.0;
        let square = Rect {
            x: (width - square_side) / 2.0,
            y: (height - square_side) / 2.0,
            width: square_side,
            height: square_side,
        };

        let thickness = thickness_fraction.clamp(0.0, 1.0) * side;
        let outer_radius = side / 2.0;
        let inner_radius = (outer_radius - thickness).max(0.0);
        let track_radius = (outer_radius - thickness / 2.0).max(0.0);

        Some(Self {
            center,
            square,
            ring: RingGeometry {
                outer_radius,
                inner_radius,
                track_radius,
            },
        })
    }
}

/// On-screen center of the hue caret: the point on the ring track at
/// the given hue angle (clockwise from "up").
pub(crate) fn hue_caret_center(layout: &PickerLayout, hue: f32) -> (f32, f32) {
    let theta = hue * TAU;
    (
        layout.center.0 + layout.ring.track_radius * theta.sin(),
        layout.center.1 - layout.ring.track_radius * theta.cos(),
    )
}

/// On-screen center of the saturation/luminance caret inside the
/// square region.
pub(crate) fn square_caret_center(
    layout: &PickerLayout,
    saturation: f32,
    luminance: f32,
) -> (f32, f32) {
    (
        layout.square.x + saturation * layout.square.width,
        layout.square.y + luminance * layout.square.height,
    )
}

pub(crate) fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) {
        assert!(
            (a - b).abs() < 1e-4,
            "expected {a} ~= {b}, delta={}",
            (a - b).abs()
        );
    }

    #[test]
    fn square_region_is_centered_with_half_the_short_side() {
        let layout = PickerLayout::new(200.0, 100.0).unwrap();

        approx_eq(layout.square.width, 50.0);
        approx_eq(layout.square.height, 50.0);
        approx_eq(layout.square.x, 75.0);
        approx_eq(layout.square.y, 25.0);
        approx_eq(layout.center.0, 100.0);
        approx_eq(layout.center.1, 50.0);
    }

    #[test]
    fn ring_radii_follow_the_thickness_fraction() {
        let layout = PickerLayout::with_ring_thickness(200.0, 200.0, 0.1).unwrap();

        approx_eq(layout.ring.outer_radius, 100.0);
        approx_eq(layout.ring.inner_radius, 80.0);
        approx_eq(layout.ring.track_radius, 90.0);
    }

    #[test]
    fn degenerate_sizes_yield_no_layout() {
        assert!(PickerLayout::new(0.0, 100.0).is_none());
        assert!(PickerLayout::new(100.0, -5.0).is_none());
        assert!(PickerLayout::new(f32::NAN, 100.0).is_none());
    }

    #[test]
    fn hue_caret_rides_the_track_circle() {
        let layout = PickerLayout::with_ring_thickness(200.0, 200.0, 0.1).unwrap();

        let top = hue_caret_center(&layout, 0.0);
        approx_eq(top.0, 100.0);
        approx_eq(top.1, 10.0);

        let right = hue_caret_center(&layout, 0.25);
        approx_eq(right.0, 190.0);
        approx_eq(right.1, 100.0);
    }

    #[test]
    fn square_caret_tracks_fractional_position() {
        let layout = PickerLayout::new(200.0, 200.0).unwrap();

        let caret = square_caret_center(&layout, 0.5, 0.25);
        approx_eq(caret.0, layout.square.x + 50.0);
        approx_eq(caret.1, layout.square.y + 25.0);
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 20.0,
        };

        assert!(rect.contains((10.0, 10.0)));
        assert!(rect.contains((30.0, 30.0)));
        assert!(!rect.contains((30.1, 20.0)));
        assert!(!rect.contains((20.0, 9.9)));
    }
}
