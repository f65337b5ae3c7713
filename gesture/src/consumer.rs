//! Reference gesture consumer: a volume knob.
//!
//! Rotation turns the knob five steps at a time.  A closed fist mutes,
//! remembering the level; an open hand restores it.

use tracing::debug;

use crate::arbiter::{GestureChange, GestureEvent};
use crate::listener::{Disposition, GestureListener};
use crate::sexp::bool_str;

/// Steps applied per rotation event.
const STEPS_PER_ROTATION: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct VolumeKnob {
    value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Only an active knob reacts to gestures.
    pub active: bool,
    /// Level to restore on unmute.
    muted_from: Option<f32>,
}

impl VolumeKnob {
    /// Reversed bounds are swapped.
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.max(min).min(max),
            min,
            max,
            step,
            active: true,
            muted_from: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_muted(&self) -> bool {
        self.muted_from.is_some()
    }

    /// Set the level directly.  Any non-zero level cancels a mute.
    pub fn set_value(&mut self, value: f32) {
        // min/max are public; never panic on a reversed range
        self.value = value.max(self.min).min(self.max);
        if self.value > self.min {
            self.muted_from = None;
        }
    }

    /// Mute if audible.  Returns true if anything changed.
    pub fn mute(&mut self) -> bool {
        if self.is_muted() || self.value <= self.min {
            return false;
        }
        self.muted_from = Some(self.value);
        self.value = self.min;
        true
    }

    /// Restore the level saved by `mute`.  Returns true if anything changed.
    pub fn unmute(&mut self) -> bool {
        match self.muted_from.take() {
            Some(level) => {
                self.value = level;
                true
            }
            None => false,
        }
    }

    pub fn toggle_mute(&mut self) {
        if !self.unmute() {
            self.mute();
        }
    }

    fn turn(&mut self, steps: f32) {
        self.set_value(self.value + steps * self.step);
    }

    /// Generate s-expression for the knob state.
    pub fn knob_sexp(&self) -> String {
        format!(
            "(:value {:.1} :min {:.1} :max {:.1} :muted {} :active {})",
            self.value,
            self.min,
            self.max,
            bool_str(self.is_muted()),
            bool_str(self.active),
        )
    }
}

impl Default for VolumeKnob {
    fn default() -> Self {
        Self::new(45.0, 0.0, 100.0, 2.0)
    }
}

impl GestureListener for VolumeKnob {
    fn on_gesture(&mut self, change: &GestureChange) -> Disposition {
        if !self.active {
            return Disposition::Ignored;
        }
        let Some(event) = change.current else {
            return Disposition::Ignored;
        };
        match event {
            GestureEvent::RotateCw => self.turn(STEPS_PER_ROTATION),
            GestureEvent::RotateCcw => self.turn(-STEPS_PER_ROTATION),
            GestureEvent::FistClosed => {
                self.mute();
            }
            GestureEvent::FistOpen => {
                self.unmute();
            }
            GestureEvent::SwipeLeft | GestureEvent::SwipeRight => return Disposition::Ignored,
        }
        debug!("Volume knob {} -> {}", event.as_str(), self.knob_sexp());
        Disposition::Consumed
    }
}
