//! Pointer state from the index fingertip, with pinch detection.

use crate::landmarks::{HandLandmark, LandmarkFrame};

/// How the host should draw its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    Default,
    Click,
}

impl CursorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Click => "click",
        }
    }
}

/// Continuous cursor state, overwritten every frame a hand is seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Cursor x in screen space (mirrored when configured).
    pub x: f32,
    /// Cursor y in screen space.
    pub y: f32,
    /// Index tip depth as reported by the detector.
    pub z: f32,
    /// Thumb and index tips pinched together.
    pub is_pinching: bool,
    /// A hand has been seen and the cursor is live.
    pub is_hovering: bool,
}

impl PointerState {
    pub fn cursor_mode(&self) -> CursorMode {
        if self.is_pinching {
            CursorMode::Click
        } else {
            CursorMode::Default
        }
    }

    /// The (x, y) pair pushed to the motion history.
    pub fn sample(&self) -> PointerSample {
        PointerSample {
            x: self.x,
            y: self.y,
        }
    }
}

/// One cursor position in the motion history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &PointerSample) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Distance between thumb tip and index tip in the image plane.
pub fn pinch_distance(frame: &LandmarkFrame) -> f32 {
    frame.distance(HandLandmark::ThumbTip, HandLandmark::IndexTip)
}

/// Derive the pointer state for one frame.
pub fn estimate(frame: &LandmarkFrame, pinch_threshold: f32, mirror_x: bool) -> PointerState {
    let tip = frame.point(HandLandmark::IndexTip);
    PointerState {
        x: if mirror_x { 1.0 - tip.x } else { tip.x },
        y: tip.y,
        z: tip.z,
        is_pinching: pinch_distance(frame) < pinch_threshold,
        is_hovering: true,
    }
}

// ── Test helpers ───────────────────────────────────────────

#[cfg(test)]
fn frame_with_tips(thumb: (f32, f32), index: (f32, f32)) -> LandmarkFrame {
    use crate::landmarks::{Landmark, LANDMARK_COUNT};

    LandmarkFrame::new([Landmark::new(0.5, 0.9, 0.0); LANDMARK_COUNT])
        .with_point(HandLandmark::ThumbTip, Landmark::new(thumb.0, thumb.1, 0.0))
        .with_point(HandLandmark::IndexTip, Landmark::new(index.0, index.1, -0.02))
}
