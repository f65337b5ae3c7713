//! Static hand pose classification: closed fist vs. open hand.
//!
//! A digit counts as folded when its tip has curled back closer to the
//! wrist than its middle joint.  The thumb compares its tip against its
//! interphalangeal joint.

use crate::landmarks::{HandLandmark, LandmarkFrame};

/// Recognized static poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    /// All five digits folded.
    FistClosed,
    /// At most one digit folded, index extended.
    FistOpen,
}

/// (tip, joint) pairs for the digits, thumb first.
const DIGITS: [(HandLandmark, HandLandmark); 5] = [
    (HandLandmark::ThumbTip, HandLandmark::ThumbIp),
    (HandLandmark::IndexTip, HandLandmark::IndexPip),
    (HandLandmark::MiddleTip, HandLandmark::MiddlePip),
    (HandLandmark::RingTip, HandLandmark::RingPip),
    (HandLandmark::PinkyTip, HandLandmark::PinkyPip),
];

/// Whether the digit ending in `tip` is curled toward the palm.
pub fn is_folded(frame: &LandmarkFrame, tip: HandLandmark, joint: HandLandmark) -> bool {
    frame.wrist_distance(tip) < frame.wrist_distance(joint)
}

pub fn index_extended(frame: &LandmarkFrame) -> bool {
    frame.wrist_distance(HandLandmark::IndexTip) > frame.wrist_distance(HandLandmark::IndexPip)
}

/// Number of folded digits, 0 to 5.
pub fn folded_count(frame: &LandmarkFrame) -> usize {
    DIGITS
        .iter()
        .filter(|(tip, joint)| is_folded(frame, *tip, *joint))
        .count()
}

/// Classify a frame.  `None` for anything between a fist and an open hand.
pub fn classify(frame: &LandmarkFrame) -> Option<Pose> {
    match folded_count(frame) {
        5 => Some(Pose::FistClosed),
        0 | 1 if index_extended(frame) => Some(Pose::FistOpen),
        _ => None,
    }
}

// ── Test helpers ───────────────────────────────────────────

/// Build a hand with the wrist at (0.5, 0.8) and each digit pointing up.
/// `folded[i]` curls digit `i` (thumb first) back below its joint.
#[cfg(test)]
pub(crate) fn hand(folded: [bool; 5]) -> LandmarkFrame {
    use crate::landmarks::{Landmark, LANDMARK_COUNT};

    let wrist = Landmark::new(0.5, 0.8, 0.0);
    let mut frame = LandmarkFrame::new([wrist; LANDMARK_COUNT]);
    for (i, (tip, joint)) in DIGITS.iter().enumerate() {
        let x = 0.40 + 0.06 * i as f32;
        frame = frame.with_point(*joint, Landmark::new(x, 0.8 - 0.15, 0.0));
        let tip_y = if folded[i] { 0.8 - 0.08 } else { 0.8 - 0.30 };
        frame = frame.with_point(*tip, Landmark::new(x, tip_y, 0.0));
    }
    frame
}
