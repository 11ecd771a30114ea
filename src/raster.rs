//! Pixmap fills for the picker's two surfaces: the conical hue ring
//! and the saturation/luminance square.
//!
//! Both passes read only immutable gradient/layout state, so a host
//! may split them across scanline threads.

use crate::color::{rgb_from_hsl, Rgba};
use crate::gradient::ConicalGradient;
use crate::picker::PickerLayout;
use tiny_skia::{Pixmap, PremultipliedColorU8};

/// 2x2 subsample grid for edge coverage on the ring.
const SUBSAMPLE_OFFSETS: [f32; 2] = [0.25, 0.75];

/// Paints the annulus between the layout's inner and outer ring radii
/// with the gradient, antialiasing the rim through subsample coverage.
pub fn fill_hue_ring(pixmap: &mut Pixmap, layout: &PickerLayout, gradient: &ConicalGradient) {
    let width = pixmap.width();
    let height = pixmap.height();
    let pixels = pixmap.pixels_mut();

    let (center_x, center_y) = layout.center;
    let outer_radius = layout.ring.outer_radius;
    let inner_radius = layout.ring.inner_radius;

    for y in 0..height {
        for x in 0..width {
            let mut r_sum = 0.0_f32;
            let mut g_sum = 0.0_f32;
            let mut b_sum = 0.0_f32;
            let mut covered = 0_u8;

            for sy in SUBSAMPLE_OFFSETS {
                for sx in SUBSAMPLE_OFFSETS {
                    let sample_x = x as f32 + sx;
                    let sample_y = y as f32 + sy;
                    let dx = sample_x - center_x;
                    let dy = sample_y - center_y;
                    let dist = (dx * dx + dy * dy).sqrt();
                    if dist > outer_radius || dist < inner_radius {
                        continue;
                    }

                    let color = gradient.color_at(sample_x, sample_y);
                    r_sum += color.r as f32 / 255.0;
                    g_sum += color.g as f32 / 255.0;
                    b_sum += color.b as f32 / 255.0;
                    covered += 1;
                }
            }

            if covered == 0 {
                continue;
            }

            // Divide by the full grid, not the covered count, so the
            // channels come out premultiplied against coverage.
            let coverage = covered as f32 / 4.0;
            let r_u8 = (r_sum / 4.0 * 255.0).round() as u8;
            let g_u8 = (g_sum / 4.0 * 255.0).round() as u8;
            let b_u8 = (b_sum / 4.0 * 255.0).round() as u8;
            let a_u8 = (coverage * 255.0).round() as u8;

            if let Some(pixel) = PremultipliedColorU8::from_rgba(r_u8, g_u8, b_u8, a_u8) {
                pixels[(y * width + x) as usize] = pixel;
            }
        }
    }
}

/// Paints the saturation/luminance field for the given hue over the
/// layout's square region: saturation left to right, luminance top to
/// bottom.
pub fn fill_sl_square(pixmap: &mut Pixmap, layout: &PickerLayout, hue: f32) {
    let square = layout.square;
    let width = pixmap.width();
    let height = pixmap.height();
    let pixels = pixmap.pixels_mut();

    let x_start = square.x.floor().max(0.0) as u32;
    let y_start = square.y.floor().max(0.0) as u32;
    let x_end = (square.right().ceil() as u32).min(width);
    let y_end = (square.bottom().ceil() as u32).min(height);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let saturation = ((x as f32 + 0.5 - square.x) / square.width).clamp(0.0, 1.0);
            let luminance = ((y as f32 + 0.5 - square.y) / square.height).clamp(0.0, 1.0);
            let Rgba { r, g, b, .. } = rgb_from_hsl(hue, saturation, luminance);

            if let Some(pixel) = PremultipliedColorU8::from_rgba(r, g, b, 255) {
                pixels[(y * width + x) as usize] = pixel;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 200;

    fn layout() -> PickerLayout {
        PickerLayout::new(SIZE as f32, SIZE as f32).unwrap()
    }

    fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> PremultipliedColorU8 {
        pixmap.pixels()[(y * pixmap.width() + x) as usize]
    }

    #[test]
    fn ring_fill_leaves_corners_and_center_transparent() {
        let layout = layout();
        let gradient = ConicalGradient::hue_wheel(layout.center);
        let mut pixmap = Pixmap::new(SIZE, SIZE).unwrap();

        fill_hue_ring(&mut pixmap, &layout, &gradient);

        assert_eq!(pixel_at(&pixmap, 0, 0).alpha(), 0);
        assert_eq!(pixel_at(&pixmap, SIZE / 2, SIZE / 2).alpha(), 0);
    }

    #[test]
    fn ring_fill_paints_the_track_with_gradient_colors() {
        let layout = layout();
        let gradient = ConicalGradient::hue_wheel(layout.center);
        let mut pixmap = Pixmap::new(SIZE, SIZE).unwrap();

        fill_hue_ring(&mut pixmap, &layout, &gradient);

        // Top of the track: angle 0, the wheel's yellow.
        let track_y = (layout.center.1 - layout.ring.track_radius) as u32;
        let pixel = pixel_at(&pixmap, SIZE / 2, track_y);
        assert_eq!(pixel.alpha(), 255);
        assert!(pixel.red() >= 250 && pixel.green() >= 250 && pixel.blue() <= 5);
    }

    #[test]
    fn sl_square_runs_black_to_white_top_to_bottom() {
        let layout = layout();
        let mut pixmap = Pixmap::new(SIZE, SIZE).unwrap();

        fill_sl_square(&mut pixmap, &layout, 0.3);

        let square = layout.square;
        let x_mid = (square.x + square.width / 2.0) as u32;

        let top = pixel_at(&pixmap, x_mid, square.y as u32);
        assert!(top.red() <= 3 && top.green() <= 3 && top.blue() <= 3);

        let bottom = pixel_at(&pixmap, x_mid, square.bottom() as u32 - 1);
        assert!(bottom.red() >= 252 && bottom.green() >= 252 && bottom.blue() >= 252);
    }

    #[test]
    fn sl_square_matches_the_color_model_per_pixel() {
        let layout = layout();
        let mut pixmap = Pixmap::new(SIZE, SIZE).unwrap();
        let hue = 0.6;

        fill_sl_square(&mut pixmap, &layout, hue);

        let square = layout.square;
        let x = (square.x + square.width * 0.75) as u32;
        let y = (square.y + square.height * 0.25) as u32;
        let saturation = (x as f32 + 0.5 - square.x) / square.width;
        let luminance = (y as f32 + 0.5 - square.y) / square.height;
        let expected = rgb_from_hsl(hue, saturation, luminance);

        let pixel = pixel_at(&pixmap, x, y);
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
            (expected.r, expected.g, expected.b, 255)
        );
    }
}
