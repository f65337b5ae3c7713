//! Moving vs. stationary classification.
//!
//! A short-horizon velocity proxy: the straight-line displacement across
//! the last few samples.  It is the only gate deciding whether the
//! motion detectors or the pose detector run on a frame.

use crate::history::MotionHistory;

/// Which detector family a frame was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Hand is moving: rotation and swipe detectors.
    Motion,
    /// Hand is still: static pose detector.
    Stationary,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::Stationary => "stationary",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MovementClassifier {
    /// Samples spanned by the displacement check.
    pub window: usize,
    /// History length required before movement is reported.
    pub min_samples: usize,
    /// Displacement across the window that counts as moving.
    pub threshold: f32,
}

impl MovementClassifier {
    pub fn new(window: usize, min_samples: usize, threshold: f32) -> Self {
        Self {
            window,
            min_samples,
            threshold,
        }
    }

    /// Displacement between the oldest and newest sample of the window,
    /// or `None` while the history is too short.
    pub fn displacement(&self, history: &MotionHistory) -> Option<f32> {
        if history.len() < self.min_samples {
            return None;
        }
        let mut recent = history.recent(self.window);
        let first = recent.next()?;
        let last = recent.last()?;
        Some(first.distance(last))
    }

    pub fn is_moving(&self, history: &MotionHistory) -> bool {
        self.displacement(history)
            .map(|d| d > self.threshold)
            .unwrap_or(false)
    }

    pub fn classify(&self, history: &MotionHistory) -> Branch {
        if self.is_moving(history) {
            Branch::Motion
        } else {
            Branch::Stationary
        }
    }
}

impl Default for MovementClassifier {
    fn default() -> Self {
        Self::new(5, 6, 0.02)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerSample;

    fn history_from(xs: &[f32]) -> MotionHistory {
        let mut history = MotionHistory::default();
        for &x in xs {
            history.push(PointerSample::new(x, 0.5));
        }
        history
    }

    #[test]
    fn test_requires_six_samples() {
        let classifier = MovementClassifier::default();
        // large jumps, but only 5 samples
        let history = history_from(&[0.0, 0.2, 0.4, 0.6, 0.8]);
        assert!(!classifier.is_moving(&history));
        assert_eq!(classifier.classify(&history), Branch::Stationary);
    }

    #[test]
    fn test_moving_over_last_five() {
        let classifier = MovementClassifier::default();
        // last five span 0.10 -> 0.14
        let history = history_from(&[0.0, 0.10, 0.11, 0.12, 0.13, 0.14]);
        assert!(classifier.is_moving(&history));
        assert_eq!(classifier.classify(&history), Branch::Motion);
    }

    #[test]
    fn test_old_motion_ignored() {
        let classifier = MovementClassifier::default();
        // big jump early, then still for the last five
        let history = history_from(&[0.0, 0.5, 0.5, 0.5, 0.5, 0.5]);
        assert!(!classifier.is_moving(&history));
    }

    #[test]
    fn test_displacement_is_straight_line() {
        let classifier = MovementClassifier::default();
        // wiggles back to the start: long path, zero displacement
        let history = history_from(&[0.3, 0.3, 0.4, 0.3, 0.4, 0.3]);
        assert_eq!(classifier.displacement(&history), Some(0.0));
        assert!(!classifier.is_moving(&history));
    }

    #[test]
    fn test_threshold_is_strict() {
        let classifier = MovementClassifier::new(5, 6, 0.02);
        let history = history_from(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.02]);
        assert!(!classifier.is_moving(&history));
    }
}
