//! Hand landmark data structures.
//!
//! Models the 21 landmarks per hand produced by a camera-based hand
//! detector.  `x` and `y` are normalized to the frame width/height,
//! `z` is depth relative to the wrist.

use tracing::debug;

// ── Landmark definitions ───────────────────────────────────

/// The 21 hand landmarks, in detector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl HandLandmark {
    /// Convert landmark enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb-cmc",
            Self::ThumbMcp => "thumb-mcp",
            Self::ThumbIp => "thumb-ip",
            Self::ThumbTip => "thumb-tip",
            Self::IndexMcp => "index-mcp",
            Self::IndexPip => "index-pip",
            Self::IndexDip => "index-dip",
            Self::IndexTip => "index-tip",
            Self::MiddleMcp => "middle-mcp",
            Self::MiddlePip => "middle-pip",
            Self::MiddleDip => "middle-dip",
            Self::MiddleTip => "middle-tip",
            Self::RingMcp => "ring-mcp",
            Self::RingPip => "ring-pip",
            Self::RingDip => "ring-dip",
            Self::RingTip => "ring-tip",
            Self::PinkyMcp => "pinky-mcp",
            Self::PinkyPip => "pinky-pip",
            Self::PinkyDip => "pinky-dip",
            Self::PinkyTip => "pinky-tip",
        }
    }

    /// Fingertip landmarks, thumb first.
    pub fn fingertips() -> [HandLandmark; 5] {
        [
            Self::ThumbTip,
            Self::IndexTip,
            Self::MiddleTip,
            Self::RingTip,
            Self::PinkyTip,
        ]
    }
}

// ── Points ─────────────────────────────────────────────────

/// One tracked point on the hand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    /// Horizontal position, 0.0 (left edge) to 1.0 (right edge).
    pub x: f32,
    /// Vertical position, 0.0 (top edge) to 1.0 (bottom edge).
    pub y: f32,
    /// Depth relative to the wrist; smaller is closer to the camera.
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance to another landmark in the image plane, ignoring depth.
    pub fn planar_distance(&self, other: &Landmark) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

// ── Frame ──────────────────────────────────────────────────

/// All landmarks of one detected hand in one video frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a frame from a detector slice.  Returns `None` unless the
    /// slice holds exactly 21 landmarks.
    pub fn from_slice(points: &[Landmark]) -> Option<Self> {
        let points: [Landmark; LANDMARK_COUNT] = match points.try_into() {
            Ok(p) => p,
            Err(_) => {
                debug!(
                    "Landmark frame: expected {} landmarks, got {}",
                    LANDMARK_COUNT,
                    points.len(),
                );
                return None;
            }
        };
        Some(Self { points })
    }

    /// Build a frame from a flat `[x0, y0, z0, x1, y1, z1, ...]` buffer,
    /// the layout detector bindings usually hand over.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != LANDMARK_COUNT * 3 {
            debug!(
                "Landmark frame: expected {} floats, got {}",
                LANDMARK_COUNT * 3,
                data.len(),
            );
            return None;
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (point, xyz) in points.iter_mut().zip(data.chunks_exact(3)) {
            *point = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Some(Self { points })
    }

    pub fn point(&self, landmark: HandLandmark) -> Landmark {
        self.points[landmark.index()]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Planar distance between two landmarks of this hand.
    pub fn distance(&self, a: HandLandmark, b: HandLandmark) -> f32 {
        self.point(a).planar_distance(&self.point(b))
    }

    /// Planar distance from a landmark to the wrist.
    pub fn wrist_distance(&self, landmark: HandLandmark) -> f32 {
        self.distance(HandLandmark::Wrist, landmark)
    }

    /// Copy of this frame with one landmark moved.
    pub fn with_point(mut self, landmark: HandLandmark, point: Landmark) -> Self {
        self.points[landmark.index()] = point;
        self
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_count() {
        assert_eq!(HandLandmark::Wrist.index(), 0);
        assert_eq!(HandLandmark::ThumbTip.index(), 4);
        assert_eq!(HandLandmark::IndexPip.index(), 6);
        assert_eq!(HandLandmark::IndexTip.index(), 8);
        assert_eq!(HandLandmark::MiddleTip.index(), 12);
        assert_eq!(HandLandmark::RingTip.index(), 16);
        assert_eq!(HandLandmark::PinkyPip.index(), 18);
        assert_eq!(HandLandmark::PinkyTip.index(), 20);
        assert_eq!(LANDMARK_COUNT, 21);
    }

    #[test]
    fn test_from_slice_wrong_count() {
        let points = vec![Landmark::default(); 10];
        assert!(LandmarkFrame::from_slice(&points).is_none());

        let points = vec![Landmark::default(); LANDMARK_COUNT];
        assert!(LandmarkFrame::from_slice(&points).is_some());
    }

    #[test]
    fn test_from_flat() {
        let data: Vec<f32> = (0..LANDMARK_COUNT * 3).map(|i| i as f32).collect();
        let frame = LandmarkFrame::from_flat(&data).expect("63 floats is a full frame");
        let tip = frame.point(HandLandmark::IndexTip);
        assert_eq!(tip, Landmark::new(24.0, 25.0, 26.0));

        assert!(LandmarkFrame::from_flat(&data[..60]).is_none());
    }

    #[test]
    fn test_planar_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.3, 0.4, 9.0);
        assert!((a.planar_distance(&b) - 0.5).abs() < 1e-6);
        assert!((b.planar_distance(&a) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_with_point() {
        let frame = LandmarkFrame::new([Landmark::default(); LANDMARK_COUNT])
            .with_point(HandLandmark::ThumbTip, Landmark::new(0.3, 0.4, 0.0));
        assert!((frame.wrist_distance(HandLandmark::ThumbTip) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_landmark_as_str() {
        assert_eq!(HandLandmark::Wrist.as_str(), "wrist");
        assert_eq!(HandLandmark::ThumbIp.as_str(), "thumb-ip");
        assert_eq!(HandLandmark::IndexTip.as_str(), "index-tip");
        assert_eq!(HandLandmark::PinkyTip.as_str(), "pinky-tip");
        assert_eq!(HandLandmark::fingertips()[1], HandLandmark::IndexTip);
    }
}
