//! Gesture engine configuration.
//!
//! Every threshold the detectors use lives here so it can be
//! recalibrated per camera field-of-view and frame rate.  The defaults
//! were tuned for a laptop webcam at roughly 30 fps.

use anyhow::{bail, Context};
use lexpr::Value;

use crate::sexp::{bool_str, get_float, get_keyword, get_usize, get_value, plist_keys};

/// Every key `apply_sexp` understands.
const CONFIG_KEYS: [&str; 21] = [
    "enabled",
    "mirror-x",
    "pinch-threshold",
    "history-capacity",
    "movement-window",
    "movement-min-samples",
    "movement-threshold",
    "rotation-min-samples",
    "rotation-cooldown-ms",
    "rotation-max-linearity",
    "rotation-min-radius",
    "rotation-max-radius-std-dev",
    "rotation-min-angle",
    "transient-event-ms",
    "pose-cooldown-ms",
    "click-debounce-ms",
    "swipe-enabled",
    "swipe-min-samples",
    "swipe-cooldown-ms",
    "swipe-min-linearity",
    "swipe-min-distance",
];

fn float_key(value: &Value, key: &str) -> anyhow::Result<Option<f64>> {
    if get_value(value, key).is_none() {
        return Ok(None);
    }
    match get_float(value, key) {
        Some(v) => Ok(Some(v)),
        None => bail!("invalid :{} (expected a number)", key),
    }
}

fn count_key(value: &Value, key: &str) -> anyhow::Result<Option<usize>> {
    if get_value(value, key).is_none() {
        return Ok(None);
    }
    match get_usize(value, key) {
        Some(v) => Ok(Some(v)),
        None => bail!("invalid :{} (expected a non-negative integer)", key),
    }
}

fn bool_key(value: &Value, key: &str) -> anyhow::Result<Option<bool>> {
    match get_keyword(value, key).as_deref() {
        None => Ok(None),
        Some("t") => Ok(Some(true)),
        Some("nil") => Ok(Some(false)),
        Some(_) => bail!("invalid :{} (expected t or nil)", key),
    }
}

/// Thresholds and windows for every stage of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Enable frame processing.
    pub enabled: bool,
    /// Mirror x so the cursor matches a mirrored video preview.
    pub mirror_x: bool,
    /// Maximum thumb-tip to index-tip distance (normalized) for a pinch.
    pub pinch_threshold: f32,
    /// Number of pointer samples kept in the motion history.
    pub history_capacity: usize,
    /// Samples spanned by the movement check.
    pub movement_window: usize,
    /// History length required before movement is reported.
    pub movement_min_samples: usize,
    /// Displacement across the movement window that counts as moving.
    pub movement_threshold: f32,
    /// History length required before a rotation is considered.
    pub rotation_min_samples: usize,
    /// Time (ms) since the last gesture before a rotation may fire.
    pub rotation_cooldown_ms: f64,
    /// Trajectories straighter than this are not rotations.
    pub rotation_max_linearity: f32,
    /// Minimum mean distance of samples from the centroid.
    pub rotation_min_radius: f32,
    /// Maximum spread of the per-sample radius.
    pub rotation_max_radius_std_dev: f32,
    /// Winding angle (radians) needed to fire a rotation.
    pub rotation_min_angle: f32,
    /// Lifetime (ms) of rotation and swipe events before they self-clear.
    pub transient_event_ms: f64,
    /// Time (ms) since the last gesture before a pose may fire.
    pub pose_cooldown_ms: f64,
    /// Minimum time (ms) between two pinch clicks.
    pub click_debounce_ms: f64,
    /// Enable swipe detection on moving frames.
    pub swipe_enabled: bool,
    /// History length required before a swipe is considered.
    pub swipe_min_samples: usize,
    /// Time (ms) since the last gesture before a swipe may fire.
    pub swipe_cooldown_ms: f64,
    /// Trajectories must be at least this straight to be a swipe.
    pub swipe_min_linearity: f32,
    /// Minimum net distance (normalized) of a swipe.
    pub swipe_min_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mirror_x: true,
            pinch_threshold: 0.05,
            history_capacity: 60,
            movement_window: 5,
            movement_min_samples: 6,
            movement_threshold: 0.02,
            rotation_min_samples: 20,
            rotation_cooldown_ms: 300.0,
            rotation_max_linearity: 0.5,
            rotation_min_radius: 0.04,
            rotation_max_radius_std_dev: 0.05,
            rotation_min_angle: 4.0,
            transient_event_ms: 300.0,
            pose_cooldown_ms: 500.0,
            click_debounce_ms: 500.0,
            swipe_enabled: false,
            swipe_min_samples: 5,
            swipe_cooldown_ms: 500.0,
            swipe_min_linearity: 0.8,
            swipe_min_distance: 0.1,
        }
    }
}

impl GestureConfig {
    /// Parse a config plist such as `(:pinch-threshold 0.06 :swipe-enabled t)`.
    /// Keys that are absent keep their defaults.
    pub fn from_sexp_str(raw: &str) -> anyhow::Result<Self> {
        let value = lexpr::from_str(raw).context("malformed config s-expression")?;
        let mut config = Self::default();
        config.apply_sexp(&value)?;
        config.validate()?;
        Ok(config)
    }

    /// Override any subset of fields from a keyword plist.  Unknown keys
    /// and mistyped values are rejected and leave `self` untouched.
    pub fn apply_sexp(&mut self, value: &Value) -> anyhow::Result<()> {
        let keys = plist_keys(value).context("config is not a keyword plist")?;
        if let Some(unknown) = keys.iter().find(|k| !CONFIG_KEYS.contains(&k.as_str())) {
            bail!("unknown config key :{}", unknown);
        }

        let mut next = self.clone();
        if let Some(v) = bool_key(value, "enabled")? {
            next.enabled = v;
        }
        if let Some(v) = bool_key(value, "mirror-x")? {
            next.mirror_x = v;
        }
        if let Some(v) = float_key(value, "pinch-threshold")? {
            next.pinch_threshold = v as f32;
        }
        if let Some(v) = count_key(value, "history-capacity")? {
            next.history_capacity = v;
        }
        if let Some(v) = count_key(value, "movement-window")? {
            next.movement_window = v;
        }
        if let Some(v) = count_key(value, "movement-min-samples")? {
            next.movement_min_samples = v;
        }
        if let Some(v) = float_key(value, "movement-threshold")? {
            next.movement_threshold = v as f32;
        }
        if let Some(v) = count_key(value, "rotation-min-samples")? {
            next.rotation_min_samples = v;
        }
        if let Some(v) = float_key(value, "rotation-cooldown-ms")? {
            next.rotation_cooldown_ms = v;
        }
        if let Some(v) = float_key(value, "rotation-max-linearity")? {
            next.rotation_max_linearity = v as f32;
        }
        if let Some(v) = float_key(value, "rotation-min-radius")? {
            next.rotation_min_radius = v as f32;
        }
        if let Some(v) = float_key(value, "rotation-max-radius-std-dev")? {
            next.rotation_max_radius_std_dev = v as f32;
        }
        if let Some(v) = float_key(value, "rotation-min-angle")? {
            next.rotation_min_angle = v as f32;
        }
        if let Some(v) = float_key(value, "transient-event-ms")? {
            next.transient_event_ms = v;
        }
        if let Some(v) = float_key(value, "pose-cooldown-ms")? {
            next.pose_cooldown_ms = v;
        }
        if let Some(v) = float_key(value, "click-debounce-ms")? {
            next.click_debounce_ms = v;
        }
        if let Some(v) = bool_key(value, "swipe-enabled")? {
            next.swipe_enabled = v;
        }
        if let Some(v) = count_key(value, "swipe-min-samples")? {
            next.swipe_min_samples = v;
        }
        if let Some(v) = float_key(value, "swipe-cooldown-ms")? {
            next.swipe_cooldown_ms = v;
        }
        if let Some(v) = float_key(value, "swipe-min-linearity")? {
            next.swipe_min_linearity = v as f32;
        }
        if let Some(v) = float_key(value, "swipe-min-distance")? {
            next.swipe_min_distance = v as f32;
        }
        *self = next;
        Ok(())
    }

    /// Reject configurations the detectors cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        let thresholds = [
            ("pinch-threshold", self.pinch_threshold),
            ("movement-threshold", self.movement_threshold),
            ("rotation-max-linearity", self.rotation_max_linearity),
            ("rotation-min-radius", self.rotation_min_radius),
            ("rotation-max-radius-std-dev", self.rotation_max_radius_std_dev),
            ("rotation-min-angle", self.rotation_min_angle),
            ("swipe-min-linearity", self.swipe_min_linearity),
            ("swipe-min-distance", self.swipe_min_distance),
        ];
        for (name, value) in thresholds {
            if !(value.is_finite() && value > 0.0) {
                bail!("{} must be a positive number, got {}", name, value);
            }
        }

        let windows = [
            ("rotation-cooldown-ms", self.rotation_cooldown_ms),
            ("transient-event-ms", self.transient_event_ms),
            ("pose-cooldown-ms", self.pose_cooldown_ms),
            ("click-debounce-ms", self.click_debounce_ms),
            ("swipe-cooldown-ms", self.swipe_cooldown_ms),
        ];
        for (name, value) in windows {
            if !(value.is_finite() && value >= 0.0) {
                bail!("{} must be a non-negative duration, got {}", name, value);
            }
        }

        if self.movement_window < 2 {
            bail!("movement-window must span at least 2 samples");
        }
        let needed = [
            ("movement-min-samples", self.movement_min_samples),
            ("movement-window", self.movement_window),
            ("rotation-min-samples", self.rotation_min_samples),
            ("swipe-min-samples", self.swipe_min_samples),
        ];
        for (name, samples) in needed {
            if samples > self.history_capacity {
                bail!(
                    "{} ({}) exceeds history-capacity ({})",
                    name,
                    samples,
                    self.history_capacity,
                );
            }
        }
        Ok(())
    }

    /// Generate s-expression for the full config.
    pub fn config_sexp(&self) -> String {
        format!(
            "(:enabled {} :mirror-x {} :pinch-threshold {:.3} :history-capacity {} :movement-window {} :movement-min-samples {} :movement-threshold {:.3} :rotation-min-samples {} :rotation-cooldown-ms {:.0} :rotation-max-linearity {:.2} :rotation-min-radius {:.3} :rotation-max-radius-std-dev {:.3} :rotation-min-angle {:.2} :transient-event-ms {:.0} :pose-cooldown-ms {:.0} :click-debounce-ms {:.0} :swipe-enabled {} :swipe-min-samples {} :swipe-cooldown-ms {:.0} :swipe-min-linearity {:.2} :swipe-min-distance {:.3})",
            bool_str(self.enabled),
            bool_str(self.mirror_x),
            self.pinch_threshold,
            self.history_capacity,
            self.movement_window,
            self.movement_min_samples,
            self.movement_threshold,
            self.rotation_min_samples,
            self.rotation_cooldown_ms,
            self.rotation_max_linearity,
            self.rotation_min_radius,
            self.rotation_max_radius_std_dev,
            self.rotation_min_angle,
            self.transient_event_ms,
            self.pose_cooldown_ms,
            self.click_debounce_ms,
            bool_str(self.swipe_enabled),
            self.swipe_min_samples,
            self.swipe_cooldown_ms,
            self.swipe_min_linearity,
            self.swipe_min_distance,
        )
    }
}
