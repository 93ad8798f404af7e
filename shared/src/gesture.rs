//! Instant-begin drag recognizer.
//!
//! Converts raw pointer press/move/release callbacks into drag phases with
//! translation and velocity along a single axis. Unlike a conventional pan
//! recognizer it enters the began phase immediately on press rather than
//! after a movement threshold, so a touch can grab an in-flight sheet
//! transition without moving first.
//!
//! Positions are measured along the screen-down axis: positive translation
//! and velocity point toward the closed position of a sheet.

/// Blend factor for exponential velocity smoothing.
const VELOCITY_SMOOTHING: f32 = 0.6;

/// Per-event drag measurement. Not persisted beyond the current gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Distance from the press position, axis units.
    pub translation: f32,
    /// Smoothed pointer velocity, axis units per second. Exactly 0.0 when
    /// the pointer never moved.
    pub velocity: f32,
}

/// Phase events emitted by [`DragRecognizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Began,
    Changed(DragSample),
    Ended(DragSample),
}

/// Single-axis drag detector with instant-begin policy.
#[derive(Debug, Default)]
pub struct DragRecognizer {
    active: bool,
    origin: f32,
    last: f32,
    velocity: f32,
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer pressed at `pos`. Begins immediately; a redundant press while
    /// already active is ignored.
    pub fn press(&mut self, pos: f32) -> Option<DragEvent> {
        if self.active {
            return None;
        }
        self.active = true;
        self.origin = pos;
        self.last = pos;
        self.velocity = 0.0;
        Some(DragEvent::Began)
    }

    /// Pointer moved to `pos`, `dt` seconds after the previous event.
    pub fn moved(&mut self, pos: f32, dt: f32) -> Option<DragEvent> {
        if !self.active {
            return None;
        }
        if dt > 0.0 {
            let instantaneous = (pos - self.last) / dt;
            if self.velocity == 0.0 {
                self.velocity = instantaneous;
            } else {
                self.velocity += (instantaneous - self.velocity) * VELOCITY_SMOOTHING;
            }
        }
        self.last = pos;
        Some(DragEvent::Changed(self.sample(pos)))
    }

    /// Pointer released at `pos`. Ends the gesture and reports the final
    /// translation and velocity.
    pub fn release(&mut self, pos: f32) -> Option<DragEvent> {
        if !self.active {
            return None;
        }
        self.active = false;
        Some(DragEvent::Ended(self.sample(pos)))
    }

    fn sample(&self, pos: f32) -> DragSample {
        DragSample {
            translation: pos - self.origin,
            velocity: self.velocity,
        }
    }
}
