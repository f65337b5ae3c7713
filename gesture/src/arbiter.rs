//! Gesture event arbitration: the single current event, cooldowns,
//! edge-triggering, transient expiry and the pinch-click debounce.

use tracing::debug;

use crate::pointer::PointerState;
use crate::pose::Pose;
use crate::rotation::Rotation;
use crate::swipe::SwipeDirection;

// ── Events ─────────────────────────────────────────────────

/// Discrete gestures delivered to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    RotateCw,
    RotateCcw,
    FistClosed,
    FistOpen,
    SwipeLeft,
    SwipeRight,
}

impl GestureEvent {
    /// Wire name, as consumers and the replay tool see it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RotateCw => "ROTATE_CW",
            Self::RotateCcw => "ROTATE_CCW",
            Self::FistClosed => "FIST_CLOSED",
            Self::FistOpen => "FIST_OPEN",
            Self::SwipeLeft => "SWIPE_LEFT",
            Self::SwipeRight => "SWIPE_RIGHT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ROTATE_CW" => Some(Self::RotateCw),
            "ROTATE_CCW" => Some(Self::RotateCcw),
            "FIST_CLOSED" => Some(Self::FistClosed),
            "FIST_OPEN" => Some(Self::FistOpen),
            "SWIPE_LEFT" => Some(Self::SwipeLeft),
            "SWIPE_RIGHT" => Some(Self::SwipeRight),
            _ => None,
        }
    }

    /// Pulses that clear themselves, as opposed to latched poses.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::FistClosed | Self::FistOpen)
    }
}

impl From<Rotation> for GestureEvent {
    fn from(rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => Self::RotateCw,
            Rotation::CounterClockwise => Self::RotateCcw,
        }
    }
}

impl From<SwipeDirection> for GestureEvent {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Self::SwipeLeft,
            SwipeDirection::Right => Self::SwipeRight,
        }
    }
}

impl From<Pose> for GestureEvent {
    fn from(pose: Pose) -> Self {
        match pose {
            Pose::FistClosed => Self::FistClosed,
            Pose::FistOpen => Self::FistOpen,
        }
    }
}

/// A change of the current gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureChange {
    pub previous: Option<GestureEvent>,
    pub current: Option<GestureEvent>,
    pub timestamp_ms: f64,
}

/// A debounced pinch click at the cursor position.  Hit-testing and
/// click synthesis are up to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickRequest {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

// ── Arbiter ────────────────────────────────────────────────

/// Owns the current event and the two process-wide timers.
#[derive(Debug, Clone)]
pub struct GestureArbiter {
    /// The single active event, if any.  Consumers may clear it.
    current: Option<GestureEvent>,
    /// Last event fired.  Edge-triggering compares against this, so a
    /// consumer clearing `current` does not re-arm a held pose.
    last_fired: Option<GestureEvent>,
    /// When the current transient event clears itself.
    expires_at_ms: Option<f64>,
    /// Last time any gesture fired; gates every detector's cooldown.
    last_gesture_ms: Option<f64>,
    /// Last dispatched click.
    last_click_ms: Option<f64>,
    /// Lifetime of transient events (ms).
    pub transient_ms: f64,
    /// Minimum time between clicks (ms).
    pub click_debounce_ms: f64,
}

impl GestureArbiter {
    pub fn new(transient_ms: f64, click_debounce_ms: f64) -> Self {
        Self {
            current: None,
            last_fired: None,
            expires_at_ms: None,
            last_gesture_ms: None,
            last_click_ms: None,
            transient_ms,
            click_debounce_ms,
        }
    }

    pub fn current(&self) -> Option<GestureEvent> {
        self.current
    }

    pub fn last_gesture_ms(&self) -> Option<f64> {
        self.last_gesture_ms
    }

    pub fn last_click_ms(&self) -> Option<f64> {
        self.last_click_ms
    }

    /// Whether `cooldown_ms` has passed since the last gesture.  Always
    /// true before the first gesture.
    pub fn cooldown_elapsed(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        self.last_gesture_ms
            .map_or(true, |last| now_ms - last >= cooldown_ms)
    }

    /// Fire an event unconditionally.  Transient events get a deadline.
    pub fn emit(&mut self, event: GestureEvent, now_ms: f64) -> GestureChange {
        let previous = self.current.replace(event);
        self.last_fired = Some(event);
        self.last_gesture_ms = Some(now_ms);
        self.expires_at_ms = if event.is_transient() {
            Some(now_ms + self.transient_ms)
        } else {
            None
        };
        debug!("Gesture fired: {} at {:.0}ms", event.as_str(), now_ms);
        GestureChange {
            previous,
            current: Some(event),
            timestamp_ms: now_ms,
        }
    }

    /// Fire a level-triggered event only if it differs from the last
    /// event fired, whether or not that one has since been cleared.
    pub fn latch(&mut self, event: GestureEvent, now_ms: f64) -> Option<GestureChange> {
        if self.last_fired == Some(event) {
            return None;
        }
        Some(self.emit(event, now_ms))
    }

    /// Clear a transient event whose deadline has passed.
    pub fn expire(&mut self, now_ms: f64) -> Option<GestureChange> {
        let deadline = self.expires_at_ms?;
        if now_ms < deadline {
            return None;
        }
        debug!("Gesture expired: {:?} at {:.0}ms", self.current, now_ms);
        self.clear(now_ms)
    }

    /// Clear whatever event is current.  The timers and the edge state
    /// are left alone.
    pub fn clear(&mut self, now_ms: f64) -> Option<GestureChange> {
        self.expires_at_ms = None;
        let previous = self.current.take()?;
        Some(GestureChange {
            previous: Some(previous),
            current: None,
            timestamp_ms: now_ms,
        })
    }

    /// Debounced pinch-to-click, independent of gesture state.
    pub fn try_click(&mut self, pointer: &PointerState, now_ms: f64) -> Option<ClickRequest> {
        if !pointer.is_pinching {
            return None;
        }
        if let Some(last) = self.last_click_ms {
            if now_ms - last < self.click_debounce_ms {
                return None;
            }
        }
        self.last_click_ms = Some(now_ms);
        debug!("Click at ({:.3}, {:.3})", pointer.x, pointer.y);
        Some(ClickRequest {
            x: pointer.x,
            y: pointer.y,
            timestamp_ms: now_ms,
        })
    }

    /// Forget the current event, the edge state and both timers.
    pub fn reset(&mut self) {
        self.current = None;
        self.last_fired = None;
        self.expires_at_ms = None;
        self.last_gesture_ms = None;
        self.last_click_ms = None;
    }
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(300.0, 500.0)
    }
}
