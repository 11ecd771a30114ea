//! Renders the picker to `hue_wheel.png`: the conical hue ring, the
//! saturation/luminance square for the picked hue, and a simulated
//! press on the ring.
//!
//! Run with `cargo run --example hue_wheel`.

use hsl_wheel::{fill_hue_ring, fill_sl_square, ConicalGradient, PickerState};
use tiny_skia::Pixmap;

const SIZE: u32 = 360;

fn main() {
    env_logger::init();

    let mut picker = PickerState::new(SIZE as f32, SIZE as f32);
    picker.subscribe(|event| println!("{event:?}"));

    // Grab the ring a third of a turn around, then settle on a mild
    // saturation/luminance pair.
    picker.on_press((SIZE as f32 - 40.0, SIZE as f32 - 80.0));
    picker.on_release();
    picker.set_saturation(0.8).expect("normalized");
    picker.set_luminance(0.5).expect("normalized");

    let layout = *picker.layout().expect("non-zero size");
    let wheel = ConicalGradient::hue_wheel(layout.center);

    let mut pixmap = Pixmap::new(SIZE, SIZE).expect("non-zero pixmap");
    fill_hue_ring(&mut pixmap, &layout, &wheel);
    fill_sl_square(&mut pixmap, &layout, picker.hue());

    pixmap.save_png("hue_wheel.png").expect("write hue_wheel.png");
    println!(
        "wrote hue_wheel.png (h={:.3} s={:.3} l={:.3}, rgb={:?})",
        picker.hue(),
        picker.saturation(),
        picker.luminance(),
        hsl_wheel::rgb_from_hsl(picker.hue(), picker.saturation(), picker.luminance())
    );
}
