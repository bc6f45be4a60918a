//! Rendered handle positions, tweened toward the logical values.
//!
//! The logical value changes instantly; `ValueMotion` owns what is drawn.
//! Taps and key presses ease over [`AnimationSpec::medium`]; drags and
//! programmatic jumps snap so the handle stays glued to the pointer.

use ripple_core::{AnimatedValue, AnimationSpec};
use web_time::Instant;

pub struct ValueMotion {
    first: AnimatedValue<f32>,
    second: AnimatedValue<f32>,
    has_second: bool,
}

impl ValueMotion {
    pub fn new(value: f32, second_value: Option<f32>, spec: AnimationSpec) -> Self {
        Self {
            first: AnimatedValue::new(value, spec),
            second: AnimatedValue::new(second_value.unwrap_or(value), spec),
            has_second: second_value.is_some(),
        }
    }

    /// Starts a transition toward the given values. A transition already in
    /// flight is abandoned and the new one starts from what is on screen.
    pub fn animate_to(&mut self, value: f32, second_value: Option<f32>, now: Instant) {
        if *self.first.target() != value {
            self.first.set_target(value, now);
        }
        self.has_second = second_value.is_some();
        if let Some(second) = second_value {
            if *self.second.target() != second {
                self.second.set_target(second, now);
            }
        }
    }

    pub fn jump_to(&mut self, value: f32, second_value: Option<f32>) {
        self.first.snap_to(value);
        self.has_second = second_value.is_some();
        if let Some(second) = second_value {
            self.second.snap_to(second);
        }
    }

    /// Advances both handles. Returns `true` while either is still moving.
    pub fn step(&mut self, now: Instant) -> bool {
        let first = self.first.update(now);
        let second = self.second.update(now);
        first || second
    }

    pub fn finish(&mut self) {
        self.first.finish();
        self.second.finish();
    }

    pub fn is_running(&self) -> bool {
        self.first.is_animating() || self.second.is_animating()
    }

    pub fn values(&self) -> (f32, Option<f32>) {
        let second = self.has_second.then(|| *self.second.get());
        (*self.first.get(), second)
    }
}
