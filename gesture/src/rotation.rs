//! Circular sweep detection over the motion history.
//!
//! A rotation is a closed, roughly round loop: the trajectory must be far
//! from straight (low linearity), keep a consistent distance from its own
//! centroid, and wind far enough around it.  The sign of the winding
//! angle gives the direction.  In screen coordinates (y grows downward)
//! a positive winding is clockwise.

use std::f32::consts::PI;

use tracing::trace;

use crate::config::GestureConfig;
use crate::history::MotionHistory;
use crate::pointer::PointerSample;

/// Direction of a detected sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Geometry of the buffered trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryStats {
    pub centroid: PointerSample,
    pub arc_length: f32,
    pub net_displacement: f32,
    /// Net displacement over arc length; 1.0 for a degenerate path.
    pub linearity: f32,
    pub mean_radius: f32,
    /// Population standard deviation of the per-sample radius.
    pub radius_std_dev: f32,
    /// Signed winding angle about the centroid, radians.
    pub total_angle: f32,
}

impl TrajectoryStats {
    /// Compute stats for a history.  Returns `None` when it is empty.
    pub fn compute(history: &MotionHistory) -> Option<Self> {
        if history.is_empty() {
            return None;
        }
        let n = history.len() as f32;

        let (sum_x, sum_y) = history
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        let centroid = PointerSample::new(sum_x / n, sum_y / n);

        let arc_length = history.arc_length();
        let net_displacement = history.net_displacement();
        let linearity = if arc_length > 0.0 {
            net_displacement / arc_length
        } else {
            1.0
        };

        let mean_radius = history.iter().map(|p| p.distance(&centroid)).sum::<f32>() / n;
        let variance = history
            .iter()
            .map(|p| (p.distance(&centroid) - mean_radius).powi(2))
            .sum::<f32>()
            / n;

        let angles: Vec<f32> = history
            .iter()
            .map(|p| (p.y - centroid.y).atan2(p.x - centroid.x))
            .collect();
        let total_angle = angles
            .windows(2)
            .map(|w| wrap_angle(w[1] - w[0]))
            .sum();

        Some(Self {
            centroid,
            arc_length,
            net_displacement,
            linearity,
            mean_radius,
            radius_std_dev: variance.sqrt(),
            total_angle,
        })
    }
}

/// Wrap an angle difference into (-pi, pi].
pub fn wrap_angle(mut delta: f32) -> f32 {
    while delta > PI {
        delta -= 2.0 * PI;
    }
    while delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}

/// Thresholds for the rotation gate.
#[derive(Debug, Clone, Copy)]
pub struct RotationDetector {
    pub min_samples: usize,
    pub max_linearity: f32,
    pub min_radius: f32,
    pub max_radius_std_dev: f32,
    pub min_angle: f32,
}

impl RotationDetector {
    pub fn from_config(config: &GestureConfig) -> Self {
        Self {
            min_samples: config.rotation_min_samples,
            max_linearity: config.rotation_max_linearity,
            min_radius: config.rotation_min_radius,
            max_radius_std_dev: config.rotation_max_radius_std_dev,
            min_angle: config.rotation_min_angle,
        }
    }

    /// Classify the buffered trajectory.  Silent (`None`) with too little
    /// history or when the shape is not a clean loop.
    pub fn detect(&self, history: &MotionHistory) -> Option<Rotation> {
        if history.len() < self.min_samples {
            return None;
        }
        let stats = TrajectoryStats::compute(history)?;
        trace!(
            "Rotation stats: linearity={:.3} radius={:.3} std={:.3} angle={:.2}",
            stats.linearity,
            stats.mean_radius,
            stats.radius_std_dev,
            stats.total_angle,
        );

        let round_loop = stats.linearity < self.max_linearity
            && stats.mean_radius > self.min_radius
            && stats.radius_std_dev < self.max_radius_std_dev;
        if !round_loop {
            return None;
        }

        if stats.total_angle > self.min_angle {
            Some(Rotation::Clockwise)
        } else if stats.total_angle < -self.min_angle {
            Some(Rotation::CounterClockwise)
        } else {
            None
        }
    }
}

impl Default for RotationDetector {
    fn default() -> Self {
        Self::from_config(&GestureConfig::default())
    }
}

// ── Test helpers ───────────────────────────────────────────

/// Samples on a circle, `steps` steps of `2*pi/24` starting at angle 0.
/// `direction` is +1.0 for increasing angle, -1.0 for decreasing.
#[cfg(test)]
pub(crate) fn circle_samples(radius: f32, steps: usize, direction: f32) -> Vec<PointerSample> {
    let step = 2.0 * PI / 24.0;
    (0..=steps)
        .map(|i| {
            let a = direction * step * i as f32;
            PointerSample::new(0.5 + radius * a.cos(), 0.5 + radius * a.sin())
        })
        .collect()
}
