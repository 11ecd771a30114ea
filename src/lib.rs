//! Core of an HSL color-wheel picker: a hue ring around a
//! saturation/luminance square.
//!
//! Three pieces, leaves first:
//!
//! - [`color`]: pure HSL to RGB conversion and clamping.
//! - [`gradient`]: a conical (angular) gradient that paints the
//!   multi-stop hue wheel by angle around a center point, with a
//!   lookup table of interpolation slopes built once at construction.
//! - [`picker`]: the pointer-driven state machine that owns the
//!   current hue/saturation/luminance, maps pointer coordinates to
//!   value updates and back, and notifies listeners per channel.
//!
//! [`raster`] bridges to a host renderer by filling `tiny-skia`
//! pixmaps; panel layout, repaint scheduling, and caret drawing stay
//! with the host.
//!
//! ```no_run
//! use hsl_wheel::{ConicalGradient, PickerEvent, PickerState};
//!
//! let mut picker = PickerState::new(300.0, 300.0);
//! picker.subscribe(|event| {
//!     if let PickerEvent::HueChanged(hue) = event {
//!         println!("hue is now {hue:.3}");
//!     }
//! });
//!
//! let layout = *picker.layout().unwrap();
//! let wheel = ConicalGradient::hue_wheel(layout.center);
//!
//! picker.on_press((150.0, 10.0)); // grab the ring at the top
//! picker.on_release();
//! let rgb = hsl_wheel::rgb_from_hsl(picker.hue(), picker.saturation(), picker.luminance());
//! let _ = (wheel, rgb);
//! ```

pub mod color;
pub mod gradient;
pub mod picker;
pub mod raster;

pub use color::{clamp, rgb_from_hsl, Rgba};
pub use gradient::{
    ConicalGradient, GradientError, GradientStop, HUE_WHEEL_COLORS, HUE_WHEEL_FRACTIONS,
};
pub use picker::{
    DragTarget, PickerError, PickerEvent, PickerLayout, PickerState, Rect, RingGeometry,
    SubscriptionId, CARET_HOVER_RADIUS,
};
pub use raster::{fill_hue_ring, fill_sl_square};
