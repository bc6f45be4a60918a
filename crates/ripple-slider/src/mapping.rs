//! Conversions between value space (`min..=max`) and track space
//! (percent and pixels).
//!
//! A handle has finite width, so its center may not travel all the way to
//! the track's rounded caps. Visual positions are therefore remapped into
//! `[edge, 100 - edge]` percent, where `edge` is the edge padding expressed
//! as a percentage of the track width. Pointer positions are mapped back
//! against the same inset track, which keeps the two directions inverse to
//! each other.
//!
//! Every function here is total: degenerate input (`NaN`, an empty range, a
//! zero-width track) yields a safe default instead of propagating.

use ripple_core::Rect;

/// Pixels a handle's center keeps away from either end of the track.
pub const EDGE_PADDING: f32 = 6.0;

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() || min.is_nan() || max.is_nan() || min > max {
        return if min.is_nan() { 0.0 } else { min };
    }
    value.clamp(min, max)
}

/// `(value - min) / (max - min) * 100`, or `0` for an empty range.
pub fn value_to_percent(value: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    if !(range > 0.0) || !value.is_finite() || !range.is_finite() {
        return 0.0;
    }
    (value - min) / range * 100.0
}

/// Remaps `[0, 100]` into `[edge, 100 - edge]` so a handle drawn at the
/// result never overlaps the track caps.
pub fn percent_to_visual_percent(percent: f32, track_width: f32, edge_padding: f32) -> f32 {
    if !(track_width > 0.0) || percent.is_nan() {
        return 0.0;
    }
    let edge = (edge_padding.max(0.0) / track_width * 100.0).min(50.0);
    if percent <= 0.0 {
        edge
    } else if percent >= 100.0 {
        100.0 - edge
    } else {
        edge + percent / 100.0 * (100.0 - 2.0 * edge)
    }
}

/// Pixel offset from the track's left edge of a handle at `percent`. Same
/// mapping as [`percent_to_visual_percent`], computed in pixels.
pub fn percent_to_track_x(percent: f32, track_width: f32, edge_padding: f32) -> f32 {
    if !(track_width > 0.0) || percent.is_nan() {
        return 0.0;
    }
    let edge = edge_padding.max(0.0).min(track_width / 2.0);
    edge + percent.clamp(0.0, 100.0) / 100.0 * (track_width - 2.0 * edge)
}

/// Maps an absolute pointer X coordinate onto a value, clamped to the
/// track's interior (the track inset by `edge_padding` on both sides).
pub fn position_to_value(pixel_x: f32, track: Rect, min: f32, max: f32, edge_padding: f32) -> f32 {
    let interior = track.inset_x(edge_padding.max(0.0));
    if !(interior.w > 0.0) || pixel_x.is_nan() {
        return min;
    }
    let ratio = ((pixel_x - interior.x) / interior.w).clamp(0.0, 1.0);
    min + ratio * (max - min)
}

/// Absolute X coordinate of a handle showing `value`.
pub fn value_to_pixel(value: f32, track: Rect, min: f32, max: f32, edge_padding: f32) -> f32 {
    let percent = value_to_percent(clamp(value, min, max), min, max);
    track.x + percent_to_track_x(percent, track.w, edge_padding)
}

/// Snaps to the nearest `min + k * step`. Identity when `step <= 0` or
/// when the step is too fine to count in `f32`.
pub fn round_to_step(value: f32, min: f32, step: f32) -> f32 {
    if !(step > 0.0) || !value.is_finite() {
        return value;
    }
    let steps = (value - min) / step;
    if !steps.is_finite() {
        return value;
    }
    min + steps.round() * step
}

/// Decimal places needed to print multiples of `step` exactly.
pub fn step_decimals(step: f32) -> usize {
    if !(step > 0.0) || step.fract() == 0.0 {
        return 0;
    }
    let printed = format!("{step}");
    printed
        .split_once('.')
        .map(|(_, frac)| frac.len().min(4))
        .unwrap_or(0)
}

pub fn format_value(value: f32, step: f32) -> String {
    let decimals = step_decimals(step);
    format!("{value:.decimals$}")
}

/// Hard limit on generated tick marks.
pub const MAX_TICKS: usize = 1000;

/// Values at `min + k * step` up to and including `max`. Empty for a
/// continuous slider; truncated to [`MAX_TICKS`] for very fine steps.
pub fn tick_values(min: f32, max: f32, step: f32) -> Vec<f32> {
    if !(step > 0.0) || !(max > min) {
        return Vec::new();
    }
    // Counted in f64 so a tiny step cannot overflow to infinity.
    let requested = (f64::from(max - min) / f64::from(step) + 1e-4).floor();
    if requested + 1.0 > MAX_TICKS as f64 {
        log::warn!(
            "slider: {:.0} ticks requested, drawing the first {MAX_TICKS}",
            requested + 1.0
        );
    }
    let count = requested.min(MAX_TICKS as f64) as usize;
    let mut ticks: Vec<f32> = (0..=count)
        .take(MAX_TICKS)
        .map(|i| min + i as f32 * step)
        .collect();
    let last = ticks.last().copied().unwrap_or(min);
    if ticks.len() < MAX_TICKS && max - last > step * 1e-3 {
        ticks.push(max);
    }
    ticks
}
