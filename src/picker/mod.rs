//! Pointer-driven picker state: owns the current hue, saturation, and
//! luminance, maps pointer coordinates to value updates and back, and
//! broadcasts change notifications to registered listeners.

mod geometry;

pub use geometry::{PickerLayout, Rect, RingGeometry};

use crate::gradient::angle_from_up;
use log::trace;
use thiserror::Error;

/// Pointer distance (px) at which a caret counts as hovered.
pub const CARET_HOVER_RADIUS: f32 = 5.0;

#[derive(Debug, Error, PartialEq)]
pub enum PickerError {
    /// A setter received a value outside 0.0..=1.0. Values are never
    /// silently clamped here; that would hide host-side bugs.
    #[error("expected a normalized value in 0.0..=1.0, received {0}")]
    OutOfRange(f32),
}

/// Which sub-region the pointer currently grips. Transitions on press,
/// persists through the drag, returns to `Idle` on release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragTarget {
    #[default]
    Idle,
    Hue,
    Square,
}

/// A change notification; each variant carries the new normalized value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickerEvent {
    HueChanged(f32),
    SaturationChanged(f32),
    LuminanceChanged(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(PickerEvent)>;

/// The picker's interaction state machine.
///
/// Single-threaded and synchronous: all transitions run on the thread
/// that delivers pointer events, and listeners are invoked inline.
pub struct PickerState {
    hue: f32,
    saturation: f32,
    luminance: f32,
    drag: DragTarget,
    width: f32,
    height: f32,
    ring_thickness_fraction: f32,
    layout: Option<PickerLayout>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PickerState {
    pub fn new(width: f32, height: f32) -> Self {
        let ring_thickness_fraction = PickerLayout::DEFAULT_RING_THICKNESS;
        Self {
            hue: 0.0,
            saturation: 0.0,
            luminance: 0.0,
            drag: DragTarget::Idle,
            width,
            height,
            ring_thickness_fraction,
            layout: PickerLayout::with_ring_thickness(width, height, ring_thickness_fraction),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn luminance(&self) -> f32 {
        self.luminance
    }

    pub fn drag_target(&self) -> DragTarget {
        self.drag
    }

    /// True while the user is actively dragging either the ring or the
    /// square; hosts use this to defer expensive side effects.
    pub fn value_is_adjusting(&self) -> bool {
        self.drag != DragTarget::Idle
    }

    pub fn layout(&self) -> Option<&PickerLayout> {
        self.layout.as_ref()
    }

    /// Recomputes the region bounds for a new widget size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.layout =
            PickerLayout::with_ring_thickness(width, height, self.ring_thickness_fraction);
        trace!("picker resized to {width:.0}x{height:.0}");
    }

    pub fn ring_thickness_fraction(&self) -> f32 {
        self.ring_thickness_fraction
    }

    /// Sets the ring thickness as a fraction of the widget side and
    /// rebuilds the layout.
    pub fn set_ring_thickness_fraction(&mut self, fraction: f32) -> Result<(), PickerError> {
        validate_normalized(fraction)?;
        self.ring_thickness_fraction = fraction;
        self.layout =
            PickerLayout::with_ring_thickness(self.width, self.height, fraction);
        Ok(())
    }

    /// Registers a change listener; the id can be passed to
    /// [`PickerState::unsubscribe`]. Invocation order across listeners
    /// is unspecified.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(PickerEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Pointer pressed: the square region grips saturation/luminance,
    /// anywhere else grips the hue ring.
    pub fn on_press(&mut self, point: (f32, f32)) {
        let Some(layout) = self.layout else {
            return;
        };

        if layout.square.contains(point) {
            self.drag = DragTarget::Square;
            trace!("press at ({:.1}, {:.1}) grips the square", point.0, point.1);
            self.apply_square_point(&layout, point);
        } else {
            self.drag = DragTarget::Hue;
            trace!("press at ({:.1}, {:.1}) grips the ring", point.0, point.1);
            self.apply_hue_point(&layout, point);
        }
    }

    /// Pointer moved while pressed: re-applies the press mapping for
    /// the gripped region. No-op while idle.
    pub fn on_drag(&mut self, point: (f32, f32)) {
        let Some(layout) = self.layout else {
            return;
        };

        match self.drag {
            DragTarget::Square => self.apply_square_point(&layout, point),
            DragTarget::Hue => self.apply_hue_point(&layout, point),
            DragTarget::Idle => {}
        }
    }

    /// Pointer released: returns to idle and fires one notification
    /// per channel, even if unchanged, so listeners that deferred work
    /// during the drag can resynchronize.
    pub fn on_release(&mut self) {
        self.drag = DragTarget::Idle;
        trace!("release; h={:.3} s={:.3} l={:.3}", self.hue, self.saturation, self.luminance);
        self.emit(PickerEvent::HueChanged(self.hue));
        self.emit(PickerEvent::SaturationChanged(self.saturation));
        self.emit(PickerEvent::LuminanceChanged(self.luminance));
    }

    /// Sets the hue directly. A value of exactly 1.0 is folded to 0.0;
    /// anything outside 0.0..=1.0 is rejected.
    pub fn set_hue(&mut self, value: f32) -> Result<(), PickerError> {
        validate_normalized(value)?;
        self.hue = value.rem_euclid(1.0);
        self.emit(PickerEvent::HueChanged(self.hue));
        Ok(())
    }

    pub fn set_saturation(&mut self, value: f32) -> Result<(), PickerError> {
        validate_normalized(value)?;
        self.saturation = value;
        self.emit(PickerEvent::SaturationChanged(self.saturation));
        Ok(())
    }

    pub fn set_luminance(&mut self, value: f32) -> Result<(), PickerError> {
        validate_normalized(value)?;
        self.luminance = value;
        self.emit(PickerEvent::LuminanceChanged(self.luminance));
        Ok(())
    }

    /// Expected on-screen location of the hue caret, for host-side
    /// marker drawing.
    pub fn hue_caret_center(&self) -> Option<(f32, f32)> {
        self.layout
            .as_ref()
            .map(|layout| geometry::hue_caret_center(layout, self.hue))
    }

    /// Expected on-screen location of the saturation/luminance caret.
    pub fn square_caret_center(&self) -> Option<(f32, f32)> {
        self.layout
            .as_ref()
            .map(|layout| geometry::square_caret_center(layout, self.saturation, self.luminance))
    }

    /// Advisory hit-test: true when the pointer is close enough to
    /// either caret that the host should show a grab cursor.
    pub fn hovers_caret(&self, point: (f32, f32)) -> bool {
        let near = |caret: Option<(f32, f32)>| {
            caret.is_some_and(|center| geometry::distance(point, center) <= CARET_HOVER_RADIUS)
        };
        near(self.hue_caret_center()) || near(self.square_caret_center())
    }

    /// Pointer path for the square: clamps into the region, then maps
    /// the fractional position to saturation (x) and luminance (y).
    fn apply_square_point(&mut self, layout: &PickerLayout, point: (f32, f32)) {
        let square = layout.square;
        let x = point.0.clamp(square.x, square.right());
        let y = point.1.clamp(square.y, square.bottom());

        self.saturation = (x - square.x) / square.width;
        self.luminance = (y - square.y) / square.height;
        self.emit(PickerEvent::SaturationChanged(self.saturation));
        self.emit(PickerEvent::LuminanceChanged(self.luminance));
    }

    /// Pointer path for the ring: hue from the pointer's angle around
    /// the widget center, as a fraction of a full turn.
    fn apply_hue_point(&mut self, layout: &PickerLayout, point: (f32, f32)) {
        let angle = angle_from_up(point.0 - layout.center.0, point.1 - layout.center.1);
        self.hue = (angle / 360.0).rem_euclid(1.0);
        self.emit(PickerEvent::HueChanged(self.hue));
    }

    fn emit(&mut self, event: PickerEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

fn validate_normalized(value: f32) -> Result<(), PickerError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PickerError::OutOfRange(value))
    }
}
