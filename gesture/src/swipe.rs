//! Horizontal swipe detection over the motion history.

use crate::config::GestureConfig;
use crate::history::MotionHistory;

/// Direction of a swipe in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// A swipe is a long, nearly straight, mostly horizontal trajectory.
#[derive(Debug, Clone, Copy)]
pub struct SwipeDetector {
    pub min_samples: usize,
    pub min_linearity: f32,
    pub min_distance: f32,
}

impl SwipeDetector {
    pub fn from_config(config: &GestureConfig) -> Self {
        Self {
            min_samples: config.swipe_min_samples,
            min_linearity: config.swipe_min_linearity,
            min_distance: config.swipe_min_distance,
        }
    }

    pub fn detect(&self, history: &MotionHistory) -> Option<SwipeDirection> {
        if history.len() < self.min_samples {
            return None;
        }
        let (first, last) = (history.front()?, history.back()?);
        let dx = last.x - first.x;
        let dy = last.y - first.y;
        let distance = history.net_displacement();
        let arc_length = history.arc_length();
        let linearity = if arc_length > 0.0 {
            distance / arc_length
        } else {
            0.0
        };

        if linearity <= self.min_linearity || distance <= self.min_distance {
            return None;
        }
        // vertical flicks are not mapped to anything
        if dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::from_config(&GestureConfig::default())
    }
}
