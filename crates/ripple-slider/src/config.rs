//! Inbound configuration and the derived, read-only render configuration.
//!
//! `SliderConfig` is what a host hands over at construction (possibly
//! deserialized from JSON). Every later mutation goes through
//! [`VersionedConfig::update`], which bumps a version and derives a fresh
//! [`RenderConfig`]. The renderer only ever sees a `RenderConfig` value.

use ripple_core::{ColorRole, Size};
use serde::Deserialize;

use crate::mapping::EDGE_PADDING;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliderSize {
    #[default]
    #[serde(alias = "xs")]
    ExtraSmall,
    #[serde(alias = "s")]
    Small,
    #[serde(alias = "m")]
    Medium,
    #[serde(alias = "l")]
    Large,
    #[serde(alias = "xl")]
    ExtraLarge,
}

/// Pixel constants derived from a size variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeMetrics {
    pub track_height: f32,
    pub handle_width: f32,
    pub handle_height: f32,
    pub edge_padding: f32,
    /// Space between a handle and the track segments beside it.
    pub handle_gap: f32,
    /// How much `handle_gap` shrinks while that handle is pressed.
    pub pressed_gap_shrink: f32,
    /// Space separating a centered slider's active segment from its origin.
    pub center_gap: f32,
    /// Corner radius of segment ends that face a handle.
    pub inner_radius: f32,
    pub dot_radius: f32,
    pub tick_radius: f32,
}

impl SliderSize {
    pub fn metrics(self) -> SizeMetrics {
        let (track_height, handle_height) = match self {
            SliderSize::ExtraSmall => (16.0, 44.0),
            SliderSize::Small => (24.0, 44.0),
            SliderSize::Medium => (40.0, 52.0),
            SliderSize::Large => (56.0, 68.0),
            SliderSize::ExtraLarge => (96.0, 108.0),
        };
        SizeMetrics {
            track_height,
            handle_width: 4.0,
            handle_height,
            edge_padding: EDGE_PADDING,
            handle_gap: 6.0,
            pressed_gap_shrink: 2.0,
            center_gap: 2.0,
            inner_radius: 2.0,
            dot_radius: 2.0,
            tick_radius: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    pub min: f32,
    pub max: f32,
    pub value: f32,
    /// Upper value; only meaningful with `range`.
    pub second_value: Option<f32>,
    /// `0` means continuous.
    pub step: f32,
    pub disabled: bool,
    pub range: bool,
    /// Bipolar slider whose visual origin is `0`.
    pub centered: bool,
    pub ticks: bool,
    pub color: ColorRole,
    pub size: SliderSize,
    pub show_value: bool,
    pub snap_to_steps: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            value: 0.0,
            second_value: None,
            step: 1.0,
            disabled: false,
            range: false,
            centered: false,
            ticks: false,
            color: ColorRole::Primary,
            size: SliderSize::ExtraSmall,
            show_value: true,
            snap_to_steps: true,
        }
    }
}

impl SliderConfig {
    pub fn range(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            value: min,
            ..Self::default()
        }
    }

    /// Repairs malformed numbers so the bound and ordering invariants hold.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            log::warn!(
                "slider: invalid bounds {}..{}, using {}..{}",
                self.min,
                self.max,
                defaults.min,
                defaults.max
            );
            self.min = defaults.min;
            self.max = defaults.max;
        }
        if !self.step.is_finite() || self.step < 0.0 {
            log::warn!("slider: invalid step {}, using continuous mode", self.step);
            self.step = 0.0;
        }
        if !self.value.is_finite() {
            log::warn!("slider: invalid value {}, using min", self.value);
            self.value = self.min;
        }
        self.value = self.value.clamp(self.min, self.max);

        if self.range {
            let second = self
                .second_value
                .filter(|v| v.is_finite())
                .unwrap_or(self.max)
                .clamp(self.min, self.max);
            if second < self.value {
                self.second_value = Some(self.value);
                self.value = second;
            } else {
                self.second_value = Some(second);
            }
            if self.centered {
                log::warn!("slider: centered mode is ignored for range sliders");
                self.centered = false;
            }
        } else {
            self.second_value = None;
        }
        self
    }
}

/// Immutable per-draw configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub version: u64,
    pub range: bool,
    pub centered: bool,
    pub ticks: bool,
    pub disabled: bool,
    pub color: ColorRole,
    pub size: SliderSize,
    pub metrics: SizeMetrics,
    /// Canvas width in pixels; the canvas spans the track.
    pub width: f32,
    pub height: f32,
}

pub struct VersionedConfig {
    config: SliderConfig,
    surface: Size,
    version: u64,
}

impl VersionedConfig {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config: config.sanitized(),
            surface: Size::default(),
            version: 0,
        }
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn render(&self) -> RenderConfig {
        RenderConfig {
            version: self.version,
            range: self.config.range,
            centered: self.config.centered,
            ticks: self.config.ticks && self.config.step > 0.0,
            disabled: self.config.disabled,
            color: self.config.color,
            size: self.config.size,
            metrics: self.config.size.metrics(),
            width: self.surface.width,
            height: self.surface.height,
        }
    }

    pub fn update(&mut self, f: impl FnOnce(&mut SliderConfig)) -> RenderConfig {
        f(&mut self.config);
        self.version += 1;
        self.render()
    }

    pub fn resize(&mut self, surface: Size) -> RenderConfig {
        self.surface = surface;
        self.version += 1;
        self.render()
    }
}
