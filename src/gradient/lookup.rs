//! Precomputed interpolation slopes for the per-pixel hot path.
//!
//! Built once at construction and immutable afterwards, so concurrent
//! reads from parallel rasterization threads are safe without locking.

use super::spec::GradientStop;
use crate::color::{channel_to_u8, Rgba};
use itertools::Itertools;
use smallvec::SmallVec;

type Channels = [f32; 4];

#[derive(Clone, Debug)]
pub(crate) struct LookupTable {
    /// Stop angles in degrees, ascending; first is 0.0, last is 360.0.
    angles: SmallVec<[f32; 16]>,
    /// Normalized RGBA channels of each stop.
    starts: SmallVec<[Channels; 16]>,
    /// Per-degree channel delta of the segment starting at stop i.
    deltas: SmallVec<[Channels; 16]>,
}

impl LookupTable {
    /// Expects a normalized stop list: strictly ascending fractions
    /// with a stop at 0.0 and at 1.0, at least two stops total.
    pub(crate) fn build(stops: &[GradientStop]) -> Self {
        let angles = stops.iter().map(|stop| stop.fraction * 360.0).collect();
        let starts: SmallVec<[Channels; 16]> =
            stops.iter().map(|stop| channels(stop.color)).collect();
        let deltas = stops
            .iter()
            .tuple_windows()
            .map(|(start, end)| {
                let span = (end.fraction - start.fraction) * 360.0;
                let from = channels(start.color);
                let to = channels(end.color);
                [
                    (to[0] - from[0]) / span,
                    (to[1] - from[1]) / span,
                    (to[2] - from[2]) / span,
                    (to[3] - from[3]) / span,
                ]
            })
            .collect();

        Self {
            angles,
            starts,
            deltas,
        }
    }

    /// Color for an angle in degrees, measured clockwise from "up".
    /// Selects the segment whose start is the last stop angle at or
    /// below the given angle, then interpolates linearly within it.
    pub(crate) fn color_at_angle(&self, angle: f32) -> Rgba {
        let upper = self.angles.partition_point(|&start| start <= angle);
        let segment = upper.saturating_sub(1).min(self.deltas.len() - 1);

        let into_segment = angle - self.angles[segment];
        let start = self.starts[segment];
        let delta = self.deltas[segment];

        Rgba::new(
            channel_to_u8(start[0] + into_segment * delta[0]),
            channel_to_u8(start[1] + into_segment * delta[1]),
            channel_to_u8(start[2] + into_segment * delta[2]),
            channel_to_u8(start[3] + into_segment * delta[3]),
        )
    }
}

fn channels(color: Rgba) -> Channels {
    [
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a as f32 / 255.0,
    ]
}
