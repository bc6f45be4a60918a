//! Track painting.
//!
//! `paint` is a pure function of the render config, the theme and a
//! [`RenderFrame`] snapshot. It clears the canvas and draws, bottom to top:
//! end dots (continuous sliders only), track segments, tick marks. Handles
//! are DOM elements and are positioned by the widget, not drawn here.
//!
//! Layout is exposed separately ([`segments`], [`tick_marks`],
//! [`end_dots`]) so it can be asserted on without a canvas.

use ripple_canvas::Canvas;
use ripple_core::{Color, Rect, Theme, Vec2};
use smallvec::SmallVec;

use crate::config::RenderConfig;
use crate::mapping::{clamp, percent_to_track_x, value_to_percent};
use crate::state::Thumb;

pub const INACTIVE_TICK_OPACITY: f32 = 0.5;
pub const DISABLED_ACTIVE_OPACITY: f32 = 0.38;
pub const DISABLED_INACTIVE_OPACITY: f32 = 0.12;

/// What one paint needs to know about the slider's state.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    /// Rendered (possibly animated) values.
    pub value: f32,
    pub second_value: Option<f32>,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub ticks: &'a [f32],
    pub pressed: Option<Thumb>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Active,
    Inactive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub rect: Rect,
    pub radius: f32,
}

/// A filled circle: a tick mark or an end dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mark {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub active: Color,
    pub inactive: Color,
    /// Marks drawn over the active segment.
    pub on_active: Color,
    /// Marks drawn over an inactive segment.
    pub on_inactive: Color,
}

impl Palette {
    pub fn resolve(theme: &Theme, config: &RenderConfig) -> Self {
        if config.disabled {
            return Self {
                active: theme.on_surface.with_opacity(DISABLED_ACTIVE_OPACITY),
                inactive: theme.on_surface.with_opacity(DISABLED_INACTIVE_OPACITY),
                on_active: theme.surface,
                on_inactive: theme
                    .on_surface
                    .with_opacity(DISABLED_ACTIVE_OPACITY * INACTIVE_TICK_OPACITY),
            };
        }
        let role = theme.role(config.color);
        Self {
            active: role.color,
            inactive: role.container,
            on_active: role.on_color,
            on_inactive: role.color.with_opacity(INACTIVE_TICK_OPACITY),
        }
    }

    fn segment(&self, kind: SegmentKind) -> Color {
        match kind {
            SegmentKind::Active => self.active,
            SegmentKind::Inactive => self.inactive,
        }
    }
}

/// Canvas-local X of a handle center showing `value`.
pub fn handle_x(config: &RenderConfig, frame: &RenderFrame<'_>, value: f32) -> f32 {
    let percent = value_to_percent(clamp(value, frame.min, frame.max), frame.min, frame.max);
    percent_to_track_x(percent, config.width, config.metrics.edge_padding)
}

/// The horizontal band the track occupies, vertically centered.
pub fn track_band(config: &RenderConfig) -> Rect {
    let h = config.metrics.track_height.min(config.height).max(0.0);
    Rect::new(0.0, (config.height - h) / 2.0, config.width, h)
}

/// Value-space interval drawn as active.
pub fn active_interval(config: &RenderConfig, frame: &RenderFrame<'_>) -> (f32, f32) {
    match frame.second_value {
        Some(second) if config.range => (frame.value.min(second), frame.value.max(second)),
        _ if config.centered => {
            let origin = clamp(0.0, frame.min, frame.max);
            (origin.min(frame.value), origin.max(frame.value))
        }
        _ => (frame.min, frame.value),
    }
}

fn handle_gap(config: &RenderConfig, frame: &RenderFrame<'_>, thumb: Thumb) -> f32 {
    let m = &config.metrics;
    let shrink = if frame.pressed == Some(thumb) {
        m.pressed_gap_shrink
    } else {
        0.0
    };
    (m.handle_gap - shrink).max(0.0)
}

fn push_segment(
    out: &mut SmallVec<[Segment; 3]>,
    config: &RenderConfig,
    kind: SegmentKind,
    left: f32,
    right: f32,
) {
    let left = left.max(0.0);
    let right = right.min(config.width);
    if right - left <= 0.0 {
        return;
    }
    let band = track_band(config);
    let touches_end = left <= 0.0 || right >= config.width;
    let radius = if touches_end {
        band.h / 2.0
    } else {
        config.metrics.inner_radius
    }
    .min((right - left) / 2.0);
    out.push(Segment {
        kind,
        rect: Rect::from_x_span(left, right, band.y, band.h),
        radius,
    });
}

pub fn segments(config: &RenderConfig, frame: &RenderFrame<'_>) -> SmallVec<[Segment; 3]> {
    use SegmentKind::*;

    let mut out = SmallVec::new();
    let half = config.metrics.handle_width / 2.0;
    let x1 = handle_x(config, frame, frame.value);
    let g1 = handle_gap(config, frame, Thumb::First);

    if let (true, Some(second)) = (config.range, frame.second_value) {
        let x2 = handle_x(config, frame, second);
        let g2 = handle_gap(config, frame, Thumb::Second);
        push_segment(&mut out, config, Inactive, 0.0, x1 - half - g1);
        if x2 - x1 >= track_band(config).h {
            push_segment(&mut out, config, Active, x1 + half + g1, x2 - half - g2);
        }
        push_segment(&mut out, config, Inactive, x2 + half + g2, config.width);
        return out;
    }

    if config.centered {
        let origin = handle_x(config, frame, 0.0);
        let center_gap = config.metrics.center_gap;
        let before = x1 - half - g1;
        let after = x1 + half + g1;
        if (x1 - origin).abs() < 0.5 {
            push_segment(&mut out, config, Inactive, 0.0, before);
        } else if x1 > origin {
            push_segment(&mut out, config, Inactive, 0.0, origin - center_gap);
            push_segment(&mut out, config, Active, origin + center_gap, before);
        } else {
            push_segment(&mut out, config, Inactive, 0.0, before);
            push_segment(&mut out, config, Active, after, origin - center_gap);
        }
        let remaining_from = if x1 < origin - 0.5 {
            origin + center_gap
        } else {
            after
        };
        push_segment(&mut out, config, Inactive, remaining_from, config.width);
        return out;
    }

    push_segment(&mut out, config, Active, 0.0, x1 - half - g1);
    push_segment(&mut out, config, Inactive, x1 + half + g1, config.width);
    out
}

fn handle_values(config: &RenderConfig, frame: &RenderFrame<'_>) -> SmallVec<[f32; 2]> {
    let mut values = SmallVec::new();
    values.push(frame.value);
    if let (true, Some(second)) = (config.range, frame.second_value) {
        values.push(second);
    }
    values
}

pub fn tick_marks(config: &RenderConfig, frame: &RenderFrame<'_>, palette: &Palette) -> Vec<Mark> {
    if !config.ticks || !(frame.step > 0.0) {
        return Vec::new();
    }
    let tolerance = frame.step * 0.1;
    let handles = handle_values(config, frame);
    let (lo, hi) = active_interval(config, frame);
    let y = config.height / 2.0;
    frame
        .ticks
        .iter()
        .filter(|&&t| handles.iter().all(|h| (t - h).abs() >= tolerance))
        .map(|&t| Mark {
            center: Vec2::new(handle_x(config, frame, t), y),
            radius: config.metrics.tick_radius,
            color: if t >= lo && t <= hi {
                palette.on_active
            } else {
                palette.on_inactive
            },
        })
        .collect()
}

/// Stop indicators at the ends of the track that are not covered by the
/// active segment or a handle.
pub fn end_dots(
    config: &RenderConfig,
    frame: &RenderFrame<'_>,
    palette: &Palette,
) -> SmallVec<[Mark; 2]> {
    let mut dots = SmallVec::new();
    if config.ticks {
        return dots;
    }
    let (lo, hi) = active_interval(config, frame);
    let reach = config.metrics.handle_width / 2.0 + config.metrics.handle_gap;
    let handles: SmallVec<[f32; 2]> = handle_values(config, frame)
        .iter()
        .map(|&v| handle_x(config, frame, v))
        .collect();
    let y = config.height / 2.0;
    for end in [frame.min, frame.max] {
        let x = handle_x(config, frame, end);
        let active = end >= lo && end <= hi;
        if active || handles.iter().any(|h| (h - x).abs() < reach) {
            continue;
        }
        dots.push(Mark {
            center: Vec2::new(x, y),
            radius: config.metrics.dot_radius,
            color: palette.active,
        });
    }
    dots
}

pub fn paint(canvas: &mut dyn Canvas, config: &RenderConfig, theme: &Theme, frame: &RenderFrame<'_>) {
    canvas.clear();
    if !(config.width > 0.0) || !(config.height > 0.0) {
        return;
    }
    let palette = Palette::resolve(theme, config);
    for dot in end_dots(config, frame, &palette) {
        canvas.fill_circle(dot.center, dot.radius, dot.color);
    }
    for segment in segments(config, frame) {
        canvas.fill_rect(segment.rect, segment.radius, palette.segment(segment.kind));
    }
    for tick in tick_marks(config, frame, &palette) {
        canvas.fill_circle(tick.center, tick.radius, tick.color);
    }
}

#[cfg(test)]
mod tests {
    use ripple_canvas::{DrawCommand, DrawScope};
    use ripple_core::Size;

    use super::*;
    use crate::config::{SliderConfig, VersionedConfig};

    const TICKS: [f32; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

    fn config(f: impl FnOnce(&mut SliderConfig)) -> RenderConfig {
        let mut versioned = VersionedConfig::new(SliderConfig::default());
        versioned.update(f);
        // 6px edge padding on a 212px canvas leaves 2px per unit.
        versioned.resize(Size::new(212.0, 44.0))
    }

    fn frame(value: f32, second_value: Option<f32>) -> RenderFrame<'static> {
        RenderFrame {
            value,
            second_value,
            min: 0.0,
            max: 100.0,
            step: 25.0,
            ticks: &TICKS,
            pressed: None,
        }
    }

    fn spans(segments: &[Segment]) -> Vec<(SegmentKind, f32, f32)> {
        segments
            .iter()
            .map(|s| (s.kind, s.rect.x, s.rect.right()))
            .collect()
    }

    #[test]
    fn single_splits_around_handle() {
        let cfg = config(|_| {});
        let segs = segments(&cfg, &frame(50.0, None));
        // Handle at 106, half width 2, gap 6.
        assert_eq!(
            spans(&segs),
            vec![
                (SegmentKind::Active, 0.0, 98.0),
                (SegmentKind::Inactive, 114.0, 212.0)
            ]
        );
        assert_eq!(segs[0].radius, 8.0);
    }

    #[test]
    fn pressed_handle_shrinks_its_gap() {
        let cfg = config(|_| {});
        let mut f = frame(50.0, None);
        f.pressed = Some(Thumb::First);
        let segs = segments(&cfg, &f);
        assert_eq!(segs[0].rect.right(), 100.0);
        assert_eq!(segs[1].rect.x, 112.0);
    }

    #[test]
    fn range_suppresses_sliver() {
        let cfg = config(|c| {
            c.range = true;
            c.second_value = Some(60.0);
        });
        let segs = segments(&cfg, &frame(20.0, Some(60.0)));
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[1].kind, SegmentKind::Active);
        assert_eq!((segs[1].rect.x, segs[1].rect.right()), (54.0, 118.0));

        // 4 units apart is 8px, under the 16px track thickness.
        let segs = segments(&cfg, &frame(50.0, Some(54.0)));
        assert!(segs.iter().all(|s| s.kind == SegmentKind::Inactive));
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn centered_grows_from_origin() {
        let cfg = config(|c| {
            c.centered = true;
            c.min = -50.0;
            c.max = 50.0;
        });
        let mut f = frame(0.0, None);
        f.min = -50.0;
        f.max = 50.0;

        let at_origin = segments(&cfg, &f);
        assert!(at_origin.iter().all(|s| s.kind == SegmentKind::Inactive));

        f.value = 25.0;
        let positive = spans(&segments(&cfg, &f));
        assert_eq!(
            positive,
            vec![
                (SegmentKind::Inactive, 0.0, 104.0),
                (SegmentKind::Active, 108.0, 148.0),
                (SegmentKind::Inactive, 164.0, 212.0),
            ]
        );

        f.value = -25.0;
        let negative = spans(&segments(&cfg, &f));
        assert_eq!(
            negative,
            vec![
                (SegmentKind::Inactive, 0.0, 48.0),
                (SegmentKind::Active, 64.0, 104.0),
                (SegmentKind::Inactive, 108.0, 212.0),
            ]
        );
    }

    #[test]
    fn ticks_skip_handles_and_dim_inactive() {
        let cfg = config(|c| {
            c.ticks = true;
            c.step = 25.0;
        });
        let theme = Theme::dark();
        let palette = Palette::resolve(&theme, &cfg);
        let marks = tick_marks(&cfg, &frame(50.0, None), &palette);
        let xs: Vec<f32> = marks.iter().map(|m| m.center.x).collect();
        assert_eq!(xs, vec![6.0, 56.0, 156.0, 206.0]);
        assert_eq!(marks[0].color, palette.on_active);
        assert_eq!(marks[2].color, palette.on_inactive);
        assert_eq!(palette.on_inactive, theme.primary.with_opacity(0.5));
    }

    #[test]
    fn dots_only_in_continuous_mode() {
        let theme = Theme::dark();
        let cfg = config(|_| {});
        let palette = Palette::resolve(&theme, &cfg);
        let dots = end_dots(&cfg, &frame(50.0, None), &palette);
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].center.x, 206.0);

        let ticked = config(|c| c.ticks = true);
        assert!(end_dots(&ticked, &frame(50.0, None), &palette).is_empty());
    }

    #[test]
    fn disabled_uses_on_surface() {
        let theme = Theme::light();
        let cfg = config(|c| c.disabled = true);
        let palette = Palette::resolve(&theme, &cfg);
        assert_eq!(palette.active, theme.on_surface.with_opacity(0.38));
        assert_eq!(palette.inactive, theme.on_surface.with_opacity(0.12));
    }

    #[test]
    fn paint_draws_in_z_order() {
        let cfg = config(|_| {});
        let mut scope = DrawScope::new(Size::new(212.0, 44.0));
        scope.fill_circle(Vec2::new(0.0, 0.0), 1.0, Color::WHITE);
        paint(&mut scope, &cfg, &Theme::dark(), &frame(50.0, None));
        let kinds: Vec<&str> = scope
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Rect { .. } => "rect",
                DrawCommand::Ellipse { .. } => "dot",
            })
            .collect();
        insta::assert_snapshot!(kinds.join(" "), @"dot rect rect");
    }

    #[test]
    fn empty_canvas_draws_nothing() {
        let cfg = VersionedConfig::new(SliderConfig::default()).render();
        let mut scope = DrawScope::new(Size::default());
        paint(&mut scope, &cfg, &Theme::dark(), &frame(10.0, None));
        assert!(scope.commands.is_empty());
    }
}
