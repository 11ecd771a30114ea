//! Gradient stop normalization: boundary synthesis, offset folding,
//! and ordering. Runs once at construction; the per-pixel path never
//! sees an unnormalized stop list.

use crate::color::Rgba;
use smallvec::SmallVec;
use thiserror::Error;

/// Nudge applied to offsets of exactly ±0.5 to avoid a degenerate
/// wraparound at the seam.
const OFFSET_NUDGE: f32 = 1e-5;

/// Epsilon used when re-folding an offset stop back into [0, 1].
const WRAP_EPSILON: f32 = 1e-4;

/// Inline capacity covers the stock 12-stop wheel plus synthesized
/// boundary and seam stops without heap allocation.
pub(crate) type StopVec = SmallVec<[GradientStop; 16]>;

#[derive(Debug, Error, PartialEq)]
pub enum GradientError {
    #[error("fractions ({fractions}) and colors ({colors}) must be equal in length")]
    InvalidSpec { fractions: usize, colors: usize },
    #[error("offset {0} is outside the -0.5..=0.5 range")]
    InvalidOffset(f32),
    #[error("fewer than two distinct angular stops")]
    DegenerateSpec,
}

/// A (fraction, color) anchor; fractions are fractions of a full turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub fraction: f32,
    pub color: Rgba,
}

/// Validates parallel fraction/color arrays and produces the final,
/// strictly ascending stop list with a stop at 0.0 and at 1.0.
pub(crate) fn normalized_stops(
    offset: f32,
    fractions: &[f32],
    colors: &[Rgba],
) -> Result<StopVec, GradientError> {
    if fractions.len() != colors.len() {
        return Err(GradientError::InvalidSpec {
            fractions: fractions.len(),
            colors: colors.len(),
        });
    }
    if !(-0.5..=0.5).contains(&offset) {
        return Err(GradientError::InvalidOffset(offset));
    }
    if distinct_fraction_count(fractions) < 2 {
        return Err(GradientError::DegenerateSpec);
    }
    let offset = nudge_offset(offset);

    let mut stops: StopVec = fractions
        .iter()
        .zip(colors)
        .map(|(&fraction, &color)| GradientStop { fraction, color })
        .collect();

    // Synthesize the boundary stops. The 1.0 stop reuses the first
    // color so a full sweep closes on itself.
    if stops[0].fraction != 0.0 {
        let color = stops[0].color;
        stops.insert(0, GradientStop { fraction: 0.0, color });
    }
    if stops[stops.len() - 1].fraction != 1.0 {
        let color = stops[0].color;
        stops.push(GradientStop { fraction: 1.0, color });
    }

    let mut folded = fold_offset(&stops, offset);
    folded.sort_by(|a, b| a.fraction.total_cmp(&b.fraction));
    folded.dedup_by(|a, b| a.fraction == b.fraction);

    if folded.len() < 2 {
        return Err(GradientError::DegenerateSpec);
    }
    Ok(folded)
}

fn distinct_fraction_count(fractions: &[f32]) -> usize {
    let mut sorted: SmallVec<[f32; 16]> = fractions.iter().copied().collect();
    sorted.sort_by(f32::total_cmp);
    sorted.dedup();
    sorted.len()
}

fn nudge_offset(offset: f32) -> f32 {
    if offset == -0.5 {
        -0.5 + OFFSET_NUDGE
    } else if offset == 0.5 {
        0.5 - OFFSET_NUDGE
    } else {
        offset
    }
}

/// Applies the rotation offset to every stop, wrapping escaped stops
/// back into [0, 1] and inserting an interpolated seam color at both
/// 0.0 and 1.0 so the wrap join stays continuous.
fn fold_offset(stops: &[GradientStop], offset: f32) -> StopVec {
    // With no rotation nothing can escape [0, 1]; folding here would
    // needlessly rebind the boundary stops through the seam path.
    if offset == 0.0 {
        return stops.iter().copied().collect();
    }

    let count = stops.len();
    let mut folded = StopVec::new();

    for (ix, stop) in stops.iter().enumerate() {
        let shifted = stop.fraction + offset;

        if shifted <= 0.0 {
            folded.push(GradientStop {
                fraction: 1.0 + shifted + WRAP_EPSILON,
                color: stop.color,
            });

            // The segment toward the next stop crosses zero; anchor
            // its color at the seam.
            let (next_fraction, next_color) = if ix < count - 1 {
                (stops[ix + 1].fraction + offset, stops[ix + 1].color)
            } else {
                (1.0 - stops[0].fraction + offset, stops[0].color)
            };
            if next_fraction > 0.0 {
                let t = -shifted / (next_fraction - shifted);
                let seam = lerp_color(stop.color, next_color, t);
                folded.push(GradientStop { fraction: 0.0, color: seam });
                folded.push(GradientStop { fraction: 1.0, color: seam });
            }
        } else if shifted >= 1.0 {
            folded.push(GradientStop {
                fraction: shifted - 1.0 - WRAP_EPSILON,
                color: stop.color,
            });

            let (prev_fraction, prev_color) = if ix > 0 {
                (stops[ix - 1].fraction + offset, stops[ix - 1].color)
            } else {
                (stops[count - 1].fraction + offset, stops[count - 1].color)
            };
            if prev_fraction < 1.0 {
                let t = (shifted - 1.0) / (shifted - prev_fraction);
                let seam = lerp_color(stop.color, prev_color, t);
                folded.push(GradientStop { fraction: 1.0, color: seam });
                folded.push(GradientStop { fraction: 0.0, color: seam });
            }
        } else {
            folded.push(GradientStop {
                fraction: shifted,
                color: stop.color,
            });
        }
    }

    folded
}

fn lerp_color(start: Rgba, end: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| {
        let a = a as f32 / 255.0;
        let b = b as f32 / 255.0;
        crate::color::channel_to_u8(a + (b - a) * t)
    };
    Rgba::new(
        mix(start.r, end.r),
        mix(start.g, end.g),
        mix(start.b, end.b),
        mix(start.a, end.a),
    )
}
