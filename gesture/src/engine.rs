//! The gesture engine: one landmark frame in, pointer state and
//! gesture events out.
//!
//! Per frame: pointer estimate -> click debounce -> history push ->
//! movement check -> either the motion detectors (rotation, then swipe)
//! or the static pose detector, never both -> listener delivery.
//!
//! The rotation, swipe and pose cooldowns are separate windows measured
//! against one shared "last gesture" timestamp.  A held fist therefore
//! delays a rotation by up to its own window, and a rotation delays the
//! next pose by the pose window.

use std::time::Instant;

use tracing::{debug, info};

use crate::arbiter::{ClickRequest, GestureArbiter, GestureChange, GestureEvent};
use crate::config::GestureConfig;
use crate::history::MotionHistory;
use crate::landmarks::LandmarkFrame;
use crate::listener::{Disposition, GestureListener, ListenerId, ListenerSet};
use crate::movement::{Branch, MovementClassifier};
use crate::pointer::{self, PointerState};
use crate::pose;
use crate::rotation::RotationDetector;
use crate::sexp::bool_str;
use crate::swipe::SwipeDetector;

/// What happened during one `process_frame` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Detector family the frame was routed to; `None` without a hand.
    pub branch: Option<Branch>,
    /// Event fired this frame.
    pub emitted: Option<GestureEvent>,
    /// Pinch click dispatched this frame.
    pub click: Option<ClickRequest>,
    /// Pointer state after the frame.
    pub pointer: PointerState,
}

/// Frame-synchronous gesture classifier for a single hand.
pub struct GestureEngine {
    config: GestureConfig,
    pointer: PointerState,
    history: MotionHistory,
    movement: MovementClassifier,
    rotation: RotationDetector,
    swipe: SwipeDetector,
    arbiter: GestureArbiter,
    listeners: ListenerSet,
    /// Origin for `process_frame` timestamps.
    epoch: Instant,
    /// Time of the last processed frame, on whichever clock drove it.
    last_frame_ms: Option<f64>,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        info!(
            "Gesture engine initialized (pinch {:.3}, history {}, swipe {})",
            config.pinch_threshold,
            config.history_capacity,
            bool_str(config.swipe_enabled),
        );
        Self {
            pointer: PointerState::default(),
            history: MotionHistory::new(config.history_capacity),
            movement: MovementClassifier::new(
                config.movement_window,
                config.movement_min_samples,
                config.movement_threshold,
            ),
            rotation: RotationDetector::from_config(&config),
            swipe: SwipeDetector::from_config(&config),
            arbiter: GestureArbiter::new(config.transient_event_ms, config.click_debounce_ms),
            listeners: ListenerSet::new(),
            epoch: Instant::now(),
            last_frame_ms: None,
            config,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replace the configuration.  Invalid configs are rejected and the
    /// current one stays in effect.
    pub fn set_config(&mut self, config: GestureConfig) -> anyhow::Result<()> {
        config.validate()?;
        self.history.set_capacity(config.history_capacity);
        self.movement = MovementClassifier::new(
            config.movement_window,
            config.movement_min_samples,
            config.movement_threshold,
        );
        self.rotation = RotationDetector::from_config(&config);
        self.swipe = SwipeDetector::from_config(&config);
        self.arbiter.transient_ms = config.transient_event_ms;
        self.arbiter.click_debounce_ms = config.click_debounce_ms;
        self.config = config;
        info!("Gesture config updated: {}", self.config.config_sexp());
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────

    /// Process one video frame, timestamped with the engine's own clock.
    pub fn process_frame(&mut self, frame: Option<&LandmarkFrame>) -> FrameReport {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        self.process_frame_at(frame, now_ms)
    }

    /// Process one video frame at a caller-supplied wall-clock time (ms).
    /// `None` means no hand was detected; pointer and latched state are
    /// left as they were.
    pub fn process_frame_at(&mut self, frame: Option<&LandmarkFrame>, now_ms: f64) -> FrameReport {
        self.last_frame_ms = Some(now_ms);
        if let Some(change) = self.arbiter.expire(now_ms) {
            self.dispatch(change);
        }

        let frame = match frame {
            Some(f) if self.config.enabled => f,
            _ => {
                return FrameReport {
                    branch: None,
                    emitted: None,
                    click: None,
                    pointer: self.pointer,
                };
            }
        };

        self.pointer = pointer::estimate(frame, self.config.pinch_threshold, self.config.mirror_x);
        let click = self.arbiter.try_click(&self.pointer, now_ms);

        self.history.push(self.pointer.sample());
        let branch = self.movement.classify(&self.history);
        let change = match branch {
            Branch::Motion => self.detect_motion(now_ms),
            Branch::Stationary => self.detect_pose(frame, now_ms),
        };
        let emitted = change.and_then(|c| c.current);

        if let Some(click) = &click {
            self.listeners.notify_click(click);
        }
        if let Some(change) = change {
            self.dispatch(change);
        }

        FrameReport {
            branch: Some(branch),
            emitted,
            click,
            pointer: self.pointer,
        }
    }

    /// Rotation first; a swipe is only considered when no rotation fired.
    fn detect_motion(&mut self, now_ms: f64) -> Option<GestureChange> {
        if self
            .arbiter
            .cooldown_elapsed(now_ms, self.config.rotation_cooldown_ms)
        {
            if let Some(rotation) = self.rotation.detect(&self.history) {
                self.history.clear();
                return Some(self.arbiter.emit(rotation.into(), now_ms));
            }
        }

        if self.config.swipe_enabled
            && self
                .arbiter
                .cooldown_elapsed(now_ms, self.config.swipe_cooldown_ms)
        {
            if let Some(direction) = self.swipe.detect(&self.history) {
                self.history.clear();
                return Some(self.arbiter.emit(direction.into(), now_ms));
            }
        }
        None
    }

    fn detect_pose(&mut self, frame: &LandmarkFrame, now_ms: f64) -> Option<GestureChange> {
        if !self
            .arbiter
            .cooldown_elapsed(now_ms, self.config.pose_cooldown_ms)
        {
            return None;
        }
        let pose = pose::classify(frame)?;
        self.arbiter.latch(pose.into(), now_ms)
    }

    /// Deliver a change; clear the event if a listener consumed it.
    fn dispatch(&mut self, change: GestureChange) {
        let disposition = self.listeners.notify_gesture(&change);
        if disposition == Disposition::Consumed && change.current.is_some() {
            debug!("Gesture consumed: {:?}", change.current);
            if let Some(cleared) = self.arbiter.clear(change.timestamp_ms) {
                self.listeners.notify_gesture(&cleared);
            }
        }
    }

    // ── Output ────────────────────────────────────────────

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn gesture_event(&self) -> Option<GestureEvent> {
        self.arbiter.current()
    }

    pub fn history(&self) -> &MotionHistory {
        &self.history
    }

    /// Mark the current event as handled.  The change is stamped with the
    /// time of the last processed frame, so hosts feeding their own clock
    /// to `process_frame_at` never see engine-clock timestamps.  Before the
    /// first frame the engine clock is used.
    pub fn clear_gesture_event(&mut self) {
        let now_ms = self
            .last_frame_ms
            .unwrap_or_else(|| self.epoch.elapsed().as_secs_f64() * 1000.0);
        self.clear_gesture_event_at(now_ms);
    }

    pub fn clear_gesture_event_at(&mut self, now_ms: f64) {
        if let Some(change) = self.arbiter.clear(now_ms) {
            debug!("Gesture cleared by consumer: {:?}", change.previous);
            self.listeners.notify_gesture(&change);
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn GestureListener>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Drop history, pointer and event state.  Listeners stay subscribed.
    pub fn reset(&mut self) {
        self.pointer = PointerState::default();
        self.last_frame_ms = None;
        self.history.clear();
        self.arbiter.reset();
    }

    /// Generate s-expression for engine status.
    pub fn status_sexp(&self) -> String {
        format!(
            "(:enabled {} :gesture {} :history {} :hovering {} :pinching {} :x {:.3} :y {:.3} :listeners {})",
            bool_str(self.config.enabled),
            self.arbiter
                .current()
                .map(|e| format!("\"{}\"", e.as_str()))
                .unwrap_or_else(|| "nil".to_string()),
            self.history.len(),
            bool_str(self.pointer.is_hovering),
            bool_str(self.pointer.is_pinching),
            self.pointer.x,
            self.pointer.y,
            self.listeners.len(),
        )
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

// ── Test helpers ───────────────────────────────────────────

/// A relaxed hand (nothing folded, index not extended) whose index tip
/// sits at raw detector coordinates `(x, y)`.  Never classifies as a pose
/// and never pinches.
#[cfg(test)]
fn pointing_frame(x: f32, y: f32) -> LandmarkFrame {
    use crate::landmarks::{HandLandmark, Landmark, LANDMARK_COUNT};

    LandmarkFrame::new([Landmark::new(x, y, 0.0); LANDMARK_COUNT])
        .with_point(HandLandmark::ThumbTip, Landmark::new(x + 0.2, y, 0.0))
}

/// A pinching hand at raw `(x, y)`.
#[cfg(test)]
fn pinch_frame(x: f32, y: f32) -> LandmarkFrame {
    use crate::landmarks::{HandLandmark, Landmark};

    pointing_frame(x, y).with_point(HandLandmark::ThumbTip, Landmark::new(x + 0.01, y, 0.0))
}

/// Raw frames whose mirrored cursor traces the circle used by the
/// rotation tests.
#[cfg(test)]
fn circle_frames(direction: f32) -> Vec<LandmarkFrame> {
    crate::rotation::circle_samples(0.08, 24, direction)
        .into_iter()
        .map(|s| pointing_frame(1.0 - s.x, s.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::consumer::VolumeKnob;
    use crate::listener::Recorder;
    use crate::pose::hand;

    const FRAME_MS: f64 = 33.0;

    #[test]
    fn test_no_hand_keeps_state() {
        let mut engine = GestureEngine::default();
        let report = engine.process_frame_at(Some(&pointing_frame(0.3, 0.4)), 1000.0);
        assert_eq!(report.branch, Some(Branch::Stationary));
        let before = engine.pointer_state();
        assert!(before.is_hovering);

        let report = engine.process_frame_at(None, 1033.0);
        assert_eq!(report.branch, None);
        assert_eq!(engine.pointer_state(), before);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_pointer_mirrored() {
        let mut engine = GestureEngine::default();
        engine.process_frame_at(Some(&pointing_frame(0.3, 0.4)), 1000.0);
        let pointer = engine.pointer_state();
        assert!((pointer.x - 0.7).abs() < 1e-6);
        assert!((pointer.y - 0.4).abs() < 1e-6);
        assert!(!pointer.is_pinching);
    }

    #[test]
    fn test_circle_rotates_clockwise_once() {
        let mut engine = GestureEngine::default();
        let mut fired = Vec::new();
        for (i, frame) in circle_frames(1.0).iter().enumerate() {
            let report = engine.process_frame_at(Some(frame), 1000.0 + i as f64 * FRAME_MS);
            if let Some(event) = report.emitted {
                fired.push(event);
                assert!(engine.history().is_empty(), "history must clear on rotation");
            }
        }
        assert_eq!(fired, vec![GestureEvent::RotateCw]);
    }

    #[test]
    fn test_circle_rotates_counter_clockwise_once() {
        let mut engine = GestureEngine::default();
        let mut fired = Vec::new();
        for (i, frame) in circle_frames(-1.0).iter().enumerate() {
            let report = engine.process_frame_at(Some(frame), 1000.0 + i as f64 * FRAME_MS);
            if let Some(event) = report.emitted {
                fired.push(event);
                assert!(engine.history().is_empty());
            }
        }
        assert_eq!(fired, vec![GestureEvent::RotateCcw]);
    }

    #[test]
    fn test_straight_line_never_rotates() {
        let mut engine = GestureEngine::default();
        for i in 0..20 {
            let x = 0.1 + 0.04 * i as f32;
            let report = engine.process_frame_at(Some(&pointing_frame(x, 0.5)), 1000.0 + i as f64 * FRAME_MS);
            assert_eq!(report.emitted, None, "frame {} fired {:?}", i, report);
        }
        assert_eq!(engine.history().len(), 20);
    }

    #[test]
    fn test_straight_line_swipes() {
        let mut config = GestureConfig::default();
        config.swipe_enabled = true;
        let mut engine = GestureEngine::new(config);
        let mut fired = Vec::new();
        // raw x decreasing means the mirrored cursor moves right
        for i in 0..10 {
            let x = 0.8 - 0.03 * i as f32;
            let report = engine.process_frame_at(Some(&pointing_frame(x, 0.5)), 1000.0 + i as f64 * FRAME_MS);
            fired.extend(report.emitted);
        }
        assert_eq!(fired, vec![GestureEvent::SwipeRight]);
        assert_eq!(engine.gesture_event(), Some(GestureEvent::SwipeRight));
    }

    #[test]
    fn test_rotation_expires_after_transient_window() {
        let mut engine = GestureEngine::default();
        let mut fired_at = None;
        for (i, frame) in circle_frames(1.0).iter().enumerate() {
            let now = 1000.0 + i as f64 * FRAME_MS;
            if engine.process_frame_at(Some(frame), now).emitted.is_some() {
                fired_at = Some(now);
                break;
            }
        }
        let fired_at = fired_at.expect("circle should rotate");
        assert_eq!(engine.gesture_event(), Some(GestureEvent::RotateCw));

        engine.process_frame_at(None, fired_at + 299.0);
        assert_eq!(engine.gesture_event(), Some(GestureEvent::RotateCw));
        engine.process_frame_at(None, fired_at + 300.0);
        assert_eq!(engine.gesture_event(), None);
    }

    #[test]
    fn test_fist_fires_once_while_held() {
        let mut engine = GestureEngine::default();
        let fist = hand([true; 5]);
        let mut fired = Vec::new();
        for i in 0..30 {
            let report = engine.process_frame_at(Some(&fist), 1000.0 + i as f64 * FRAME_MS);
            assert_eq!(report.branch, Some(Branch::Stationary));
            fired.extend(report.emitted);
        }
        assert_eq!(fired, vec![GestureEvent::FistClosed]);
        assert_eq!(engine.gesture_event(), Some(GestureEvent::FistClosed));
    }

    #[test]
    fn test_fist_open_after_closed() {
        let mut engine = GestureEngine::default();
        let report = engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        assert_eq!(report.emitted, Some(GestureEvent::FistClosed));

        let open = hand([false; 5]);
        // still inside the pose cooldown
        let report = engine.process_frame_at(Some(&open), 1400.0);
        assert_eq!(report.emitted, None);
        assert_eq!(engine.gesture_event(), Some(GestureEvent::FistClosed));

        let report = engine.process_frame_at(Some(&open), 1500.0);
        assert_eq!(report.emitted, Some(GestureEvent::FistOpen));
        let report = engine.process_frame_at(Some(&open), 2100.0);
        assert_eq!(report.emitted, None);
        assert_eq!(engine.gesture_event(), Some(GestureEvent::FistOpen));
    }

    #[test]
    fn test_pinch_click_debounce() {
        let mut engine = GestureEngine::default();
        let frame = pinch_frame(0.5, 0.5);
        assert!(engine.process_frame_at(Some(&frame), 1000.0).click.is_some());
        assert!(engine.process_frame_at(Some(&frame), 1200.0).click.is_none());

        let mut engine = GestureEngine::default();
        assert!(engine.process_frame_at(Some(&frame), 1000.0).click.is_some());
        assert!(engine.process_frame_at(Some(&frame), 1500.0).click.is_some());
    }

    #[test]
    fn test_click_during_gesture_cooldown() {
        let mut engine = GestureEngine::default();
        let fist = hand([true; 5]);
        assert_eq!(
            engine.process_frame_at(Some(&fist), 1000.0).emitted,
            Some(GestureEvent::FistClosed)
        );
        let report = engine.process_frame_at(Some(&pinch_frame(0.5, 0.5)), 1010.0);
        assert!(report.click.is_some());
        assert_eq!(engine.gesture_event(), Some(GestureEvent::FistClosed));
    }

    #[test]
    fn test_moving_fist_is_not_a_pose() {
        let mut engine = GestureEngine::default();
        // a fist dragged sideways, wrist and all
        for i in 0..12 {
            let dx = 0.03 * i as f32;
            let mut points = *hand([true; 5]).points();
            for p in points.iter_mut() {
                p.x += dx;
            }
            let frame = LandmarkFrame::new(points);
            let report = engine.process_frame_at(Some(&frame), 1000.0 + i as f64 * 600.0);
            if i >= 5 {
                assert_eq!(report.branch, Some(Branch::Motion), "frame {}", i);
                assert_eq!(report.emitted, None);
            }
        }
    }

    #[test]
    fn test_stationary_frames_skip_motion_detectors() {
        let mut engine = GestureEngine::default();
        // a hand held in place
        for i in 0..40 {
            let report =
                engine.process_frame_at(Some(&pointing_frame(0.4, 0.4)), 1000.0 + i as f64 * FRAME_MS);
            assert_eq!(report.branch, Some(Branch::Stationary));
            assert_eq!(report.emitted, None);
        }
    }

    #[test]
    fn test_pose_cooldown_after_rotation() {
        let mut engine = GestureEngine::default();
        let mut fired_at = 0.0;
        for (i, frame) in circle_frames(1.0).iter().enumerate() {
            let now = 1000.0 + i as f64 * FRAME_MS;
            if engine.process_frame_at(Some(frame), now).emitted.is_some() {
                fired_at = now;
                break;
            }
        }
        let fist = hand([true; 5]);
        let report = engine.process_frame_at(Some(&fist), fired_at + 100.0);
        assert_eq!(report.branch, Some(Branch::Stationary));
        assert_eq!(report.emitted, None);
        let report = engine.process_frame_at(Some(&fist), fired_at + 500.0);
        assert_eq!(report.emitted, Some(GestureEvent::FistClosed));
    }

    #[test]
    fn test_listener_receives_changes() {
        let mut engine = GestureEngine::default();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        engine.subscribe(Box::new(recorder.clone()));

        engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        engine.process_frame_at(Some(&pinch_frame(0.5, 0.5)), 1600.0);

        let recorder = recorder.borrow();
        assert_eq!(recorder.fired(), vec![GestureEvent::FistClosed]);
        assert_eq!(recorder.clicks.len(), 1);
    }

    #[test]
    fn test_consumed_event_is_cleared() {
        let mut engine = GestureEngine::default();
        let recorder = Rc::new(RefCell::new(Recorder {
            consume: true,
            ..Recorder::default()
        }));
        engine.subscribe(Box::new(recorder.clone()));

        let fist = hand([true; 5]);
        engine.process_frame_at(Some(&fist), 1000.0);
        assert_eq!(engine.gesture_event(), None);
        {
            let recorder = recorder.borrow();
            assert_eq!(recorder.changes.len(), 2, "fire then clear: {:?}", recorder.changes);
            assert_eq!(recorder.changes[1].current, None);
        }

        // cleared, but a still-held fist does not fire again
        for i in 1..30 {
            let report = engine.process_frame_at(Some(&fist), 1000.0 + i as f64 * FRAME_MS);
            assert_eq!(report.emitted, None, "frame {}", i);
        }
        assert_eq!(recorder.borrow().fired(), vec![GestureEvent::FistClosed]);

        // the opposing pose still gets through once the hand settles
        let open = hand([false; 5]);
        let fired: Vec<_> = (0..10)
            .filter_map(|i| {
                engine
                    .process_frame_at(Some(&open), 2500.0 + i as f64 * FRAME_MS)
                    .emitted
            })
            .collect();
        assert_eq!(fired, vec![GestureEvent::FistOpen]);
    }

    #[test]
    fn test_held_fist_mutes_knob_once() {
        let mut engine = GestureEngine::default();
        let knob = Rc::new(RefCell::new(VolumeKnob::default()));
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        engine.subscribe(Box::new(recorder.clone()));
        engine.subscribe(Box::new(knob.clone()));

        let fist = hand([true; 5]);
        for i in 0..30 {
            engine.process_frame_at(Some(&fist), 1000.0 + i as f64 * FRAME_MS);
        }
        assert_eq!(recorder.borrow().fired(), vec![GestureEvent::FistClosed]);
        assert!(knob.borrow().is_muted());

        // open hand unmutes, held open hand stays quiet
        for i in 0..30 {
            engine.process_frame_at(Some(&hand([false; 5])), 2000.0 + i as f64 * FRAME_MS);
        }
        assert_eq!(
            recorder.borrow().fired(),
            vec![GestureEvent::FistClosed, GestureEvent::FistOpen]
        );
        assert!(!knob.borrow().is_muted());
        assert_eq!(knob.borrow().value(), 45.0);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut engine = GestureEngine::default();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let id = engine.subscribe(Box::new(recorder.clone()));
        assert!(engine.unsubscribe(id));

        engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        assert!(recorder.borrow().changes.is_empty());
    }

    #[test]
    fn test_clear_uses_host_clock() {
        let mut engine = GestureEngine::default();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        engine.subscribe(Box::new(recorder.clone()));

        engine.process_frame_at(Some(&hand([true; 5])), 5_000_000.0);
        engine.process_frame_at(None, 5_000_033.0);
        engine.clear_gesture_event();

        let recorder = recorder.borrow();
        let cleared = recorder.changes.last().expect("clear delivered");
        assert_eq!(cleared.current, None);
        assert_eq!(cleared.timestamp_ms, 5_000_033.0);
    }

    #[test]
    fn test_clear_gesture_event() {
        let mut engine = GestureEngine::default();
        engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        engine.clear_gesture_event_at(1010.0);
        assert_eq!(engine.gesture_event(), None);
    }

    #[test]
    fn test_disabled_ignores_frames() {
        let mut config = GestureConfig::default();
        config.enabled = false;
        let mut engine = GestureEngine::new(config);
        let report = engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        assert_eq!(report.branch, None);
        assert!(engine.history().is_empty());
        assert_eq!(engine.gesture_event(), None);
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let mut engine = GestureEngine::default();
        let mut config = GestureConfig::default();
        config.history_capacity = 4;
        assert!(engine.set_config(config).is_err());
        assert_eq!(engine.config().history_capacity, 60);

        let mut config = GestureConfig::default();
        config.history_capacity = 30;
        engine.set_config(config).unwrap();
        assert_eq!(engine.history().capacity(), 30);
    }

    #[test]
    fn test_reset() {
        let mut engine = GestureEngine::default();
        engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        engine.reset();
        assert_eq!(engine.gesture_event(), None);
        assert!(engine.history().is_empty());
        assert!(!engine.pointer_state().is_hovering);
    }

    #[test]
    fn test_status_sexp() {
        let mut engine = GestureEngine::default();
        let sexp = engine.status_sexp();
        assert!(sexp.contains(":enabled t"));
        assert!(sexp.contains(":gesture nil"));

        engine.process_frame_at(Some(&hand([true; 5])), 1000.0);
        let sexp = engine.status_sexp();
        assert!(sexp.contains(":gesture \"FIST_CLOSED\""), "got {}", sexp);
        assert!(sexp.contains(":history 1"));
    }

    #[test]
    fn test_wall_clock_entry_point() {
        let mut engine = GestureEngine::default();
        let report = engine.process_frame(Some(&hand([true; 5])));
        assert_eq!(report.emitted, Some(GestureEvent::FistClosed));
        let report = engine.process_frame(None);
        assert_eq!(report.branch, None);
    }
}
