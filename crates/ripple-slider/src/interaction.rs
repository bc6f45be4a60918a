//! Pointer and keyboard transitions over [`SliderState`].
//!
//! ```text
//! Idle --press handle--> Pressed --move > threshold--> Dragging
//!  ^  --tap track-----> Pressed (value already set)        |
//!  +---------------------- release / cancel ---------------+
//! ```
//!
//! Everything here is pure state manipulation; the widget decides which
//! events to emit and what to repaint based on the returned [`Commit`]s.

use ripple_core::{Key, KeyEvent, Rect};

use crate::mapping::{clamp, position_to_value, round_to_step};
use crate::state::{SliderState, Thumb};

/// Pointer travel in pixels before a press turns into a drag.
pub const DRAG_THRESHOLD: f32 = 3.0;
/// Fraction of the range one arrow key moves in continuous mode.
pub const CONTINUOUS_KEY_FRACTION: f32 = 0.01;
/// Multiplier for Shift+arrow and PageUp/PageDown.
pub const LARGE_STEP_MULTIPLIER: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pressed,
    Dragging,
}

/// Outcome of writing a value to a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub changed: bool,
    /// Handle that holds the written value afterwards. Differs from the
    /// requested handle when the write crossed the sibling.
    pub owner: Thumb,
}

impl Commit {
    pub fn crossed(&self, requested: Thumb) -> bool {
        self.owner != requested
    }
}

/// Track rectangle in document coordinates plus the handle inset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub rect: Rect,
    pub edge_padding: f32,
}

pub fn phase(state: &SliderState) -> Phase {
    match (state.pressed, state.dragging) {
        (_, true) => Phase::Dragging,
        (true, false) => Phase::Pressed,
        (false, false) => Phase::Idle,
    }
}

/// Value under a pointer X, snapped when requested.
pub fn pointer_value(state: &SliderState, x: f32, track: TrackGeometry, snap: bool) -> f32 {
    let raw = position_to_value(x, track.rect, state.min, state.max, track.edge_padding);
    let value = if snap {
        round_to_step(raw, state.min, state.step)
    } else {
        raw
    };
    state.clamp(value)
}

/// The handle a track tap at `value` should move. Ties go to the handle the
/// pointer lies beyond, so coincident handles can still be pulled apart.
pub fn nearest_thumb(state: &SliderState, value: f32) -> Thumb {
    let Some(second) = state.second_value else {
        return Thumb::First;
    };
    let d1 = (value - state.value).abs();
    let d2 = (value - second).abs();
    if d1 < d2 {
        Thumb::First
    } else if d2 < d1 {
        Thumb::Second
    } else if value > second {
        Thumb::Second
    } else {
        Thumb::First
    }
}

/// Writes `value` to `thumb`, keeping `value <= second_value`. When the
/// write crosses the sibling the two handles trade identities: the written
/// value lands on the other handle and the sibling's value stays put.
pub fn commit_value(state: &mut SliderState, thumb: Thumb, value: f32) -> Commit {
    let value = state.clamp(value);
    let Some(second) = state.second_value else {
        let changed = state.value != value;
        state.value = value;
        return Commit {
            changed,
            owner: Thumb::First,
        };
    };

    let before = (state.value, second);
    let owner = match thumb {
        Thumb::First if value > second => {
            state.value = second;
            state.second_value = Some(value);
            Thumb::Second
        }
        Thumb::Second if value < state.value => {
            state.second_value = Some(state.value);
            state.value = value;
            Thumb::First
        }
        _ => {
            state.set_value_of(thumb, value);
            thumb
        }
    };
    if owner != thumb {
        if state.active_handle == Some(thumb) {
            state.active_handle = Some(owner);
        }
        if state.active_bubble == Some(thumb) {
            state.active_bubble = Some(owner);
        }
    }
    Commit {
        changed: before != (state.value, state.second_value.unwrap_or(second)),
        owner,
    }
}

pub fn press_handle(state: &mut SliderState, thumb: Thumb, x: f32) {
    state.pressed = true;
    state.dragging = false;
    state.active_handle = Some(thumb);
    state.active_bubble = Some(thumb);
    state.press_origin_x = x;
}

/// Moves the nearest handle to the tapped position and presses it.
pub fn tap_track(state: &mut SliderState, x: f32, track: TrackGeometry, snap: bool) -> Commit {
    let value = pointer_value(state, x, track, snap);
    let thumb = nearest_thumb(state, value);
    let commit = commit_value(state, thumb, value);
    press_handle(state, commit.owner, x);
    commit
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragStep {
    /// This move crossed the threshold and began the drag.
    pub started: bool,
    pub commit: Option<Commit>,
}

pub fn drag_to(state: &mut SliderState, x: f32, track: TrackGeometry, snap: bool) -> DragStep {
    let mut step = DragStep::default();
    let Some(thumb) = state.active_handle.filter(|_| state.pressed) else {
        return step;
    };
    if !state.dragging {
        if (x - state.press_origin_x).abs() <= DRAG_THRESHOLD {
            return step;
        }
        state.dragging = true;
        step.started = true;
    }
    let value = pointer_value(state, x, track, snap);
    step.commit = Some(commit_value(state, thumb, value));
    step
}

/// Ends any interaction. Returns the handle that was active, or `None`
/// when nothing was in progress.
pub fn release(state: &mut SliderState) -> Option<Thumb> {
    if !state.pressed {
        return None;
    }
    state.pressed = false;
    state.dragging = false;
    state.active_handle.take()
}

/// Step used by one arrow key press.
pub fn key_step(state: &SliderState) -> f32 {
    if state.step > 0.0 {
        state.step
    } else {
        (state.max - state.min) * CONTINUOUS_KEY_FRACTION
    }
}

/// Target value for `key` on `thumb`, or `None` if the key is not handled.
pub fn key_target(state: &SliderState, thumb: Thumb, event: &KeyEvent) -> Option<f32> {
    let current = state.value_of(thumb);
    let step = key_step(state);
    let arrow = if event.modifiers.shift {
        step * LARGE_STEP_MULTIPLIER
    } else {
        step
    };
    let target = match event.key {
        Key::ArrowRight | Key::ArrowUp => current + arrow,
        Key::ArrowLeft | Key::ArrowDown => current - arrow,
        Key::PageUp => current + step * LARGE_STEP_MULTIPLIER,
        Key::PageDown => current - step * LARGE_STEP_MULTIPLIER,
        Key::Home => state.min,
        Key::End => state.max,
        _ => return None,
    };
    let snapped = if state.step > 0.0 {
        round_to_step(target, state.min, state.step)
    } else {
        target
    };
    Some(clamp(snapped, state.min, state.max))
}
