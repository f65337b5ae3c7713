//! Rolling window of recent pointer samples.

use std::collections::VecDeque;

use crate::pointer::PointerSample;

/// Default history length, roughly two seconds at 30 fps.
pub const DEFAULT_CAPACITY: usize = 60;

/// Bounded, arrival-ordered buffer of pointer samples (oldest first).
#[derive(Debug, Clone)]
pub struct MotionHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
}

impl MotionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once past capacity.
    pub fn push(&mut self, sample: PointerSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Change the capacity, dropping the oldest samples if it shrank.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn front(&self) -> Option<&PointerSample> {
        self.samples.front()
    }

    pub fn back(&self) -> Option<&PointerSample> {
        self.samples.back()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &PointerSample> + '_ {
        self.samples.iter()
    }

    /// The last `n` samples, oldest first (fewer if the buffer is shorter).
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &PointerSample> + '_ {
        self.samples.iter().skip(self.samples.len().saturating_sub(n))
    }

    /// Sum of distances between consecutive samples.
    pub fn arc_length(&self) -> f32 {
        self.samples
            .iter()
            .zip(self.samples.iter().skip(1))
            .map(|(a, b)| a.distance(b))
            .sum()
    }

    /// Straight-line distance from the oldest to the newest sample.
    pub fn net_displacement(&self) -> f32 {
        match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) => first.distance(last),
            _ => 0.0,
        }
    }
}

impl Default for MotionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
