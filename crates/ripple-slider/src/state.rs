//! The slider's single source of truth: logical values, bounds, step and
//! the transient interaction flags. DOM classes and canvas pixels are
//! projections of this struct, never the other way round.

use ripple_core::TimerHandle;

use crate::config::SliderConfig;
use crate::mapping::{clamp, tick_values};

/// Identifies one of the two handles. A single-value slider only uses
/// `First`; in range mode `First` always holds the lower value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Thumb {
    First,
    Second,
}

impl Thumb {
    pub fn other(self) -> Thumb {
        match self {
            Thumb::First => Thumb::Second,
            Thumb::Second => Thumb::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Thumb::First => 0,
            Thumb::Second => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    pub value: f32,
    pub second_value: Option<f32>,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub disabled: bool,

    pub pressed: bool,
    pub dragging: bool,
    /// Handle owned by the current pointer interaction.
    pub active_handle: Option<Thumb>,
    /// Handle whose value label is showing.
    pub active_bubble: Option<Thumb>,
    pub value_hide_timer: Option<TimerHandle>,
    /// Pointer X at press time; drag starts once movement exceeds the threshold.
    pub press_origin_x: f32,

    /// Tick values, regenerated whenever bounds or step change.
    pub ticks: Vec<f32>,
}

impl SliderState {
    /// Expects a sanitized config.
    pub fn from_config(config: &SliderConfig) -> Self {
        let mut state = Self {
            value: config.value,
            second_value: config.second_value,
            min: config.min,
            max: config.max,
            step: config.step,
            disabled: config.disabled,
            pressed: false,
            dragging: false,
            active_handle: None,
            active_bubble: None,
            value_hide_timer: None,
            press_origin_x: 0.0,
            ticks: Vec::new(),
        };
        state.regenerate_ticks();
        state
    }

    pub fn is_range(&self) -> bool {
        self.second_value.is_some()
    }

    pub fn value_of(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::First => self.value,
            Thumb::Second => self.second_value.unwrap_or(self.value),
        }
    }

    /// Writes without ordering; callers restore `value <= second_value`.
    pub fn set_value_of(&mut self, thumb: Thumb, value: f32) {
        match thumb {
            Thumb::First => self.value = value,
            Thumb::Second => {
                if self.second_value.is_some() {
                    self.second_value = Some(value);
                }
            }
        }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        clamp(value, self.min, self.max)
    }

    /// Swaps the two values if they are out of order. Returns whether a
    /// swap happened.
    pub fn order_values(&mut self) -> bool {
        match self.second_value {
            Some(second) if second < self.value => {
                self.second_value = Some(self.value);
                self.value = second;
                true
            }
            _ => false,
        }
    }

    /// Installs new bounds and re-clamps both values. The caller guarantees
    /// `min < max`. Returns whether a value moved.
    pub fn set_bounds(&mut self, min: f32, max: f32) -> bool {
        self.min = min;
        self.max = max;
        let before = (self.value, self.second_value);
        self.value = self.clamp(self.value);
        self.second_value = self.second_value.map(|v| clamp(v, min, max));
        self.order_values();
        self.regenerate_ticks();
        before != (self.value, self.second_value)
    }

    pub fn set_step(&mut self, step: f32) {
        self.step = step;
        self.regenerate_ticks();
    }

    pub fn regenerate_ticks(&mut self) {
        self.ticks = tick_values(self.min, self.max, self.step);
    }

    /// The handle being pressed, for pressed-state visuals.
    pub fn pressed_thumb(&self) -> Option<Thumb> {
        if self.pressed { self.active_handle } else { None }
    }
}
