use std::cell::RefCell;
use std::rc::Rc;
use web_time::Duration;

use ripple_canvas::{DrawCommand, RecordingSurface};
use ripple_core::{
    Document, DocumentEvents, ElementId, Host, Key, KeyEvent, PointerEvent, Rect,
    Scheduler, Size, TestClock, Theme, ThemeSource,
};

use crate::widget::{DISABLED_CLASS, DRAGGING_CLASS, FOCUSED_CLASS, VISIBLE_CLASS};
use crate::*;

use crate::events::SliderEventKind::*;

// The track spans x = 4..216. With 6px edge padding a 0..100 slider puts
// value `v` at x = 10 + 2v.
fn x_of(value: f32) -> f32 {
    10.0 + 2.0 * value
}

struct Fixture {
    host: Host,
    clock: TestClock,
    surface: RecordingSurface,
    container: ElementId,
    track: ElementId,
    handles: [ElementId; 2],
    labels: [ElementId; 2],
    slider: Slider,
    events: Rc<RefCell<Vec<SliderEvent>>>,
}

fn fixture(config: SliderConfig) -> Fixture {
    fixture_with_failures(config, 0)
}

fn fixture_with_failures(config: SliderConfig, failures: u32) -> Fixture {
    let clock = TestClock::new();
    let host = Host::new(
        Document::shared("ripple-"),
        Scheduler::new(clock.clone()),
        ThemeSource::new(Theme::dark()),
    );
    let (container, track, handles, labels) = {
        let mut doc = host.document.borrow_mut();
        let container = doc.create_element("div");
        let track = doc.create_element("div");
        doc.set_rect(track, Rect::new(4.0, 0.0, 212.0, 44.0)).unwrap();
        let handles = [doc.create_element("div"), doc.create_element("div")];
        let labels = [doc.create_element("span"), doc.create_element("span")];
        (container, track, handles, labels)
    };
    let surface = RecordingSurface::new(Size::new(212.0, 44.0));
    surface.fail_next(failures);

    let range = config.range;
    let slider = Slider::new(&host, config);
    let mut parts = SliderParts::new(container, track, handles[0], surface.clone())
        .with_labels(labels[0], Some(labels[1]));
    if range {
        parts = parts.with_second_handle(handles[1]);
    }
    slider.attach(parts).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    for kind in [Start, Input, Change, End, Focus, Blur] {
        let log = events.clone();
        slider.on(kind, move |e| log.borrow_mut().push(e.clone()));
    }
    Fixture {
        host,
        clock,
        surface,
        container,
        track,
        handles,
        labels,
        slider,
        events,
    }
}

fn range(value: f32, second: f32) -> SliderConfig {
    SliderConfig {
        value,
        second_value: Some(second),
        range: true,
        ..SliderConfig::default()
    }
}

impl Fixture {
    fn kinds(&self) -> Vec<SliderEventKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    fn advance(&self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.host.scheduler.pump();
    }

    /// Runs roughly `ms` worth of 16ms frames.
    fn run_frames(&self, ms: u64) {
        for _ in 0..ms.div_ceil(16) {
            self.advance(16);
        }
    }

    fn listeners(&self) -> usize {
        self.host.document.borrow().listener_count(DocumentEvents::all())
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        let doc = self.host.document.borrow();
        doc.has_class(element, &doc.prefixed(class))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let doc = self.host.document.borrow();
        doc.element(element)
            .and_then(|el| el.attribute(name))
            .map(str::to_string)
    }

    fn press(&self, target: ElementId, x: f32) {
        self.slider
            .handle_pointer_down(target, &PointerEvent::mouse_down(x, 22.0));
    }

    fn move_to(&self, x: f32) {
        self.slider.handle_pointer_move(&PointerEvent::mouse_move(x, 22.0));
    }

    fn release(&self, x: f32) {
        self.slider.handle_pointer_up(&PointerEvent::mouse_up(x, 22.0));
    }

    fn key(&self, target: ElementId, key: Key) -> bool {
        self.slider.handle_key_down(target, &KeyEvent::new(key))
    }

    fn rect_colors(&self) -> Vec<ripple_core::Color> {
        self.surface.scope().rects().map(|(_, c)| c).collect()
    }
}

#[test]
fn drag_past_threshold_updates_value() {
    let f = fixture(SliderConfig::default());
    f.press(f.handles[0], x_of(0.0));
    assert!(f.slider.is_pressed());
    assert_eq!(f.listeners(), 2);

    f.move_to(x_of(1.0));
    assert_eq!(f.slider.get_value(), 0.0);
    assert!(!f.slider.is_dragging());

    f.move_to(x_of(30.0));
    assert_eq!(f.slider.get_value(), 30.0);
    assert!(f.has_class(f.container, DRAGGING_CLASS));

    f.release(x_of(30.0));
    assert_eq!(f.kinds(), vec![Start, Input, Change, End]);
    assert_eq!(f.events.borrow()[2].value, 30.0);
    assert_eq!(f.listeners(), 0);
    assert!(!f.has_class(f.container, DRAGGING_CLASS));
}

#[test]
fn touch_uses_touch_listeners() {
    let f = fixture(SliderConfig::default());
    f.slider
        .handle_pointer_down(f.handles[0], &PointerEvent::touch_start(x_of(0.0), 22.0));
    let doc = f.host.document.borrow();
    assert_eq!(
        doc.listener_count(DocumentEvents::TOUCH_MOVE | DocumentEvents::TOUCH_END),
        2
    );
    assert_eq!(doc.listener_count(DocumentEvents::POINTER_MOVE), 0);
}

#[test]
fn track_tap_commits_then_animates() {
    let f = fixture(SliderConfig::default());
    f.press(f.track, x_of(60.0));
    assert_eq!(f.slider.get_value(), 60.0);
    assert_eq!(f.slider.rendered_values(), (0.0, None));
    assert!(f.slider.is_animating());
    assert_eq!(f.kinds(), vec![Start, Input]);

    f.run_frames(300);
    assert!(!f.slider.is_animating());
    assert_eq!(f.slider.rendered_values(), (60.0, None));
    assert_eq!(f.host.scheduler.pending_frames(), 0);

    f.release(x_of(60.0));
    assert_eq!(f.kinds(), vec![Start, Input, Change, End]);

    assert!(f.slider.is_label_visible(Thumb::First));
    assert!(f.has_class(f.labels[0], VISIBLE_CLASS));
    f.advance(999);
    assert!(f.slider.is_label_visible(Thumb::First));
    f.advance(2);
    assert!(!f.slider.is_label_visible(Thumb::First));
    assert!(!f.has_class(f.labels[0], VISIBLE_CLASS));
}

#[test]
fn drag_snaps_running_animation() {
    let f = fixture(SliderConfig::default());
    f.press(f.track, x_of(60.0));
    f.move_to(x_of(70.0));
    assert!(f.slider.is_dragging());
    assert!(!f.slider.is_animating());
    assert_eq!(f.slider.rendered_values(), (70.0, None));
}

#[test]
fn drag_snaps_to_step() {
    let f = fixture(SliderConfig {
        step: 2.0,
        ..SliderConfig::default()
    });
    f.press(f.handles[0], x_of(0.0));
    f.move_to(x_of(3.0));
    assert_eq!(f.slider.get_value(), 4.0);
    f.move_to(x_of(5.1));
    assert_eq!(f.slider.get_value(), 6.0);
}

#[test]
fn crossing_handles_swap_identity() {
    let f = fixture(range(25.0, 75.0));
    f.press(f.handles[0], x_of(25.0));
    f.move_to(x_of(80.0));
    assert_eq!(f.slider.get_value(), 75.0);
    assert_eq!(f.slider.get_second_value(), Some(80.0));
    assert_eq!(f.slider.active_handle(), Some(Thumb::Second));
    assert_eq!(f.attribute(f.handles[0], "aria-valuenow").as_deref(), Some("75"));
    assert_eq!(f.attribute(f.handles[1], "aria-valuenow").as_deref(), Some("80"));

    f.release(x_of(80.0));
    let change = f.events.borrow()[2].clone();
    assert_eq!(change.kind, Change);
    assert_eq!((change.value, change.second_value), (75.0, Some(80.0)));
}

#[test]
fn range_order_survives_arbitrary_drags() {
    let f = fixture(range(30.0, 60.0));
    f.press(f.handles[1], x_of(60.0));
    for x in [170.0, 0.0, 400.0, 120.0, 60.0, 300.0, -50.0, 130.0, 64.0] {
        f.move_to(x);
        let (v, s) = (f.slider.get_value(), f.slider.get_second_value().unwrap());
        assert!(0.0 <= v && v <= s && s <= 100.0, "{v} {s} after x={x}");
    }
    f.release(64.0);
    assert_eq!(f.listeners(), 0);
}

#[test]
fn keyboard_crossing_moves_focus() {
    let f = fixture(range(40.0, 42.0));
    f.slider.handle_focus(f.handles[0]);
    assert!(f.key(f.handles[0], Key::ArrowRight));
    assert!(f.slider.is_animating());
    assert!(f.key(f.handles[0], Key::ArrowRight));
    assert_eq!((f.slider.get_value(), f.slider.get_second_value()), (42.0, Some(42.0)));

    assert!(f.key(f.handles[0], Key::ArrowRight));
    assert_eq!((f.slider.get_value(), f.slider.get_second_value()), (42.0, Some(43.0)));
    assert_eq!(f.slider.focused_handle(), Some(Thumb::Second));
    assert_eq!(f.host.document.borrow().active_element(), Some(f.handles[1]));
    assert!(f.has_class(f.handles[1], FOCUSED_CLASS));
    assert!(!f.has_class(f.handles[0], FOCUSED_CLASS));

    // The host reports the focus move afterwards; it stays inside the widget.
    f.slider.handle_blur(f.handles[0], Some(f.handles[1]));
    f.slider.handle_focus(f.handles[1]);
    assert_eq!(
        f.kinds(),
        vec![Focus, Input, Change, Input, Change, Input, Change]
    );

    f.key(f.handles[1], Key::ArrowRight);
    assert_eq!(f.slider.get_second_value(), Some(44.0));
}

#[test]
fn unhandled_or_saturated_keys_emit_nothing() {
    let f = fixture(SliderConfig {
        value: 100.0,
        ..SliderConfig::default()
    });
    assert!(f.key(f.handles[0], Key::End));
    assert!(!f.key(f.handles[0], Key::Tab));
    assert!(!f.key(f.track, Key::ArrowLeft));
    assert!(f.kinds().is_empty());

    assert!(f.key(f.handles[0], Key::PageDown));
    assert_eq!(f.slider.get_value(), 90.0);
}

#[test]
fn focus_between_handles_does_not_flicker() {
    let f = fixture(range(20.0, 60.0));
    f.slider.handle_focus(f.handles[0]);
    assert!(f.has_class(f.labels[0], VISIBLE_CLASS));

    f.slider.handle_blur(f.handles[0], Some(f.handles[1]));
    f.slider.handle_focus(f.handles[1]);
    assert!(f.has_class(f.labels[1], VISIBLE_CLASS));
    assert!(!f.has_class(f.labels[0], VISIBLE_CLASS));
    assert_eq!(f.kinds(), vec![Focus]);

    f.advance(200);
    assert!(f.has_class(f.labels[1], VISIBLE_CLASS));

    f.slider.handle_blur(f.handles[1], None);
    assert_eq!(f.kinds(), vec![Focus, Blur]);
    f.advance(149);
    assert!(f.slider.is_label_visible(Thumb::Second));
    f.advance(2);
    assert!(!f.slider.is_label_visible(Thumb::Second));
    assert_eq!(f.slider.focused_handle(), None);
}

#[test]
fn disabled_slider_ignores_input() {
    let f = fixture(SliderConfig {
        value: 50.0,
        ..SliderConfig::default()
    });
    f.slider.set_disabled(true);
    assert!(f.slider.is_disabled());
    assert!(f.has_class(f.container, DISABLED_CLASS));
    assert_eq!(f.attribute(f.handles[0], "aria-disabled").as_deref(), Some("true"));

    f.press(f.handles[0], x_of(50.0));
    f.move_to(x_of(90.0));
    f.release(x_of(90.0));
    f.press(f.track, x_of(10.0));
    assert!(!f.key(f.handles[0], Key::ArrowRight));
    f.slider.handle_focus(f.handles[0]);

    assert_eq!(f.slider.get_value(), 50.0);
    assert_eq!(f.listeners(), 0);
    assert!(f.kinds().is_empty());
    let muted = Theme::dark().on_surface.with_opacity(0.38);
    assert!(f.rect_colors().contains(&muted));
}

#[test]
fn disabling_mid_drag_ends_silently() {
    let f = fixture(SliderConfig::default());
    f.press(f.handles[0], x_of(0.0));
    f.move_to(x_of(20.0));
    f.slider.set_disabled(true);
    assert!(!f.slider.is_pressed());
    assert_eq!(f.listeners(), 0);
    assert_eq!(f.kinds(), vec![Start, Input]);
}

#[test]
fn start_handler_can_cancel_interaction() {
    let f = fixture(SliderConfig::default());
    f.slider.on(Start, |e| e.prevent_default());
    f.press(f.track, x_of(50.0));
    assert_eq!(f.slider.get_value(), 0.0);
    assert!(!f.slider.is_pressed());
    assert_eq!(f.listeners(), 0);
    assert_eq!(f.kinds(), vec![Start]);
}

#[test]
fn new_press_finishes_stale_interaction() {
    let f = fixture(SliderConfig::default());
    f.press(f.handles[0], x_of(0.0));
    f.move_to(x_of(30.0));
    // The matching pointer up never arrived.
    f.press(f.track, x_of(80.0));
    assert_eq!(f.kinds(), vec![Start, Input, Change, End, Start, Input]);
    assert_eq!(f.listeners(), 2);
    assert_eq!(f.slider.get_value(), 80.0);
}

#[test]
fn setters_clamp_and_are_idempotent() {
    let f = fixture(SliderConfig::default());
    f.slider.set_value(30.0, true);
    f.slider.set_value(30.0, true);
    assert_eq!(f.kinds(), vec![Change]);
    f.run_frames(300);
    assert_eq!(f.slider.rendered_values(), (30.0, None));

    f.slider.set_value(150.0, false).set_value(f32::NAN, false);
    assert_eq!(f.slider.get_value(), 100.0);
    assert_eq!(f.kinds(), vec![Change]);

    f.slider.set_min(110.0).set_step(-1.0);
    assert_eq!(f.slider.get_min(), 0.0);
    assert_eq!(f.slider.get_step(), 1.0);

    f.slider.set_max(50.0);
    assert_eq!(f.slider.get_max(), 50.0);
    assert_eq!(f.slider.get_value(), 50.0);
    assert_eq!(f.attribute(f.handles[0], "aria-valuemax").as_deref(), Some("50"));

    f.slider.set_step(0.0);
    assert_eq!(f.slider.get_step(), 0.0);
}

#[test]
fn range_setters_keep_order() {
    let f = fixture(range(25.0, 75.0));
    f.slider.set_value(80.0, false);
    assert_eq!((f.slider.get_value(), f.slider.get_second_value()), (75.0, Some(80.0)));
    f.slider.set_second_value(10.0, false);
    assert_eq!((f.slider.get_value(), f.slider.get_second_value()), (10.0, Some(75.0)));

    let single = fixture(SliderConfig::default());
    single.slider.set_second_value(10.0, true);
    assert_eq!(single.slider.get_second_value(), None);
    assert!(single.kinds().is_empty());
}

#[test]
fn mirrors_format_to_step_precision() {
    let f = fixture(SliderConfig {
        value: 25.0,
        step: 0.5,
        ..SliderConfig::default()
    });
    assert_eq!(f.attribute(f.handles[0], "aria-valuenow").as_deref(), Some("25.0"));
    assert_eq!(f.attribute(f.handles[0], "aria-valuemin").as_deref(), Some("0.0"));
    assert_eq!(f.attribute(f.handles[0], "role").as_deref(), Some("slider"));
    let doc = f.host.document.borrow();
    assert_eq!(doc.element(f.labels[0]).map(|el| el.text()), Some("25.0"));
}

#[test]
fn resize_remaps_handle_position() {
    let f = fixture(SliderConfig::default());
    let left = |f: &Fixture| {
        let doc = f.host.document.borrow();
        doc.element(f.handles[0])
            .and_then(|el| el.style("left"))
            .map(str::to_string)
    };
    assert_eq!(left(&f).as_deref(), Some("2.830%"));

    f.host
        .document
        .borrow_mut()
        .set_rect(f.track, Rect::new(4.0, 0.0, 412.0, 44.0))
        .unwrap();
    f.slider.handle_resize();
    assert_eq!(f.slider.render_config().width, 412.0);
    assert_eq!(f.surface.scope().size, Size::new(412.0, 44.0));
    assert_eq!(left(&f).as_deref(), Some("1.456%"));
}

#[test]
fn theme_change_repaints() {
    let f = fixture(SliderConfig {
        value: 50.0,
        ..SliderConfig::default()
    });
    assert!(f.rect_colors().contains(&Theme::dark().primary));
    f.host.theme.set(Theme::light());
    assert!(f.rect_colors().contains(&Theme::light().primary));
    assert!(!f.rect_colors().contains(&Theme::dark().primary));
}

#[test]
fn ticked_slider_draws_segments_then_ticks() {
    let f = fixture(SliderConfig {
        value: 50.0,
        step: 25.0,
        ticks: true,
        ..SliderConfig::default()
    });
    let kinds: Vec<&str> = f
        .surface
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Ellipse { .. } => "tick",
        })
        .collect();
    insta::assert_snapshot!(kinds.join(" "), @"rect rect tick tick tick tick");
}

#[test]
fn surface_retry_backs_off_then_gives_up() {
    let f = fixture_with_failures(SliderConfig::default(), 3);
    assert_eq!(f.surface.acquisitions(), 1);
    f.host.scheduler.pump();
    assert_eq!(f.surface.acquisitions(), 2);
    f.advance(49);
    assert_eq!(f.surface.acquisitions(), 2);
    f.advance(1);
    assert_eq!(f.surface.acquisitions(), 3);
    f.advance(500);
    assert_eq!(f.surface.acquisitions(), 3);
    assert!(f.surface.commands().is_empty());

    // A later value change starts over.
    f.slider.set_value(10.0, false);
    assert_eq!(f.surface.acquisitions(), 4);
    assert!(!f.surface.commands().is_empty());
}

#[test]
fn surface_retry_recovers_on_next_frame() {
    let f = fixture_with_failures(SliderConfig::default(), 1);
    assert!(f.surface.commands().is_empty());
    f.host.scheduler.pump();
    assert!(!f.surface.commands().is_empty());
    assert_eq!(f.host.scheduler.pending_timers(), 0);
}

#[test]
fn destroy_releases_host_resources() {
    let f = fixture(SliderConfig::default());
    f.press(f.track, x_of(60.0));
    assert!(f.host.scheduler.pending_frames() > 0);

    f.slider.destroy();
    assert!(f.slider.is_destroyed());
    assert_eq!(f.listeners(), 0);
    assert_eq!(f.host.document.borrow().resize_observer_count(), 0);
    assert_eq!(f.host.theme.subscriber_count(), 0);
    assert_eq!(f.host.scheduler.pending_frames(), 0);
    assert_eq!(f.host.scheduler.pending_timers(), 0);

    let drawn = f.surface.commands();
    f.host.theme.set(Theme::light());
    f.slider.set_value(10.0, true).destroy();
    f.move_to(x_of(90.0));
    f.run_frames(100);
    assert_eq!(f.surface.commands(), drawn);
    assert_eq!(f.slider.get_value(), 60.0);
    assert_eq!(f.kinds(), vec![Start, Input]);
}

#[test]
fn disposing_host_scope_destroys_slider() {
    let f = fixture(SliderConfig::default());
    f.press(f.handles[0], x_of(0.0));
    f.host.lifecycle.dispose();
    assert!(f.slider.is_destroyed());
    assert_eq!(f.listeners(), 0);
}

#[test]
fn attach_reports_missing_elements() {
    let host = Host::headless();
    let (container, track, handle, stale) = {
        let mut doc = host.document.borrow_mut();
        let ids = (
            doc.create_element("div"),
            doc.create_element("div"),
            doc.create_element("div"),
            doc.create_element("div"),
        );
        doc.remove_element(ids.3);
        ids
    };
    let surface = RecordingSurface::new(Size::new(100.0, 20.0));

    let slider = Slider::new(&host, SliderConfig::default());
    let parts = SliderParts::new(container, stale, handle, surface.clone());
    assert!(matches!(
        slider.attach(parts),
        Err(SliderError::MissingElement("track"))
    ));

    let ranged = Slider::new(&host, range(10.0, 20.0));
    let parts = SliderParts::new(container, track, handle, surface.clone());
    assert!(matches!(
        ranged.attach(parts),
        Err(SliderError::MissingElement("second handle"))
    ));

    slider.destroy();
    let parts = SliderParts::new(container, track, handle, surface);
    assert!(matches!(slider.attach(parts), Err(SliderError::Destroyed)));
}

#[test]
fn detached_slider_degrades_to_state_only() {
    let host = Host::headless();
    let slider = Slider::new(&host, SliderConfig::default());
    slider.set_value(42.0, false).handle_resize();
    assert_eq!(slider.get_value(), 42.0);
    let stray = host.document.borrow_mut().create_element("div");
    slider.handle_pointer_down(stray, &PointerEvent::mouse_down(0.0, 0.0));
    assert!(!slider.is_pressed());
}

#[test]
fn tiny_step_keeps_input_within_bounds() {
    let f = fixture(SliderConfig {
        value: 50.0,
        ..SliderConfig::default()
    });
    f.slider.set_step(1e-38);
    assert_eq!(f.slider.get_step(), 1e-38);

    // A step this fine cannot move the value in f32.
    assert!(f.key(f.handles[0], Key::ArrowRight));
    assert_eq!(f.slider.get_value(), 50.0);
    assert!(f.kinds().is_empty());

    f.key(f.handles[0], Key::End);
    assert_eq!(f.slider.get_value(), 100.0);
    f.key(f.handles[0], Key::Home);
    assert_eq!(f.slider.get_value(), 0.0);
    assert_eq!(f.kinds(), vec![Input, Change, Input, Change]);

    f.press(f.handles[0], x_of(0.0));
    f.move_to(x_of(70.0));
    f.release(x_of(70.0));
    assert_eq!(f.slider.get_value(), 70.0);
}

#[test]
fn repeated_interactions_leave_no_listeners() {
    let f = fixture(range(20.0, 80.0));
    for round in 0..6 {
        let shift = round as f32;
        let (target, from, to) = match round % 3 {
            0 => (f.handles[0], x_of(f.slider.get_value()), x_of(10.0 + shift)),
            1 => (
                f.handles[1],
                x_of(f.slider.get_second_value().unwrap()),
                x_of(90.0 - shift),
            ),
            _ => (f.track, x_of(50.0), x_of(55.0)),
        };
        f.press(target, from);
        assert_eq!(f.listeners(), 2, "press in round {round}");
        f.move_to(to);
        f.release(to);
        assert_eq!(f.listeners(), 0, "release in round {round}");
        assert!(!f.slider.is_pressed());
    }

    for _ in 0..3 {
        f.slider
            .handle_pointer_down(f.handles[0], &PointerEvent::touch_start(x_of(20.0), 22.0))
            .handle_pointer_move(&PointerEvent::touch_move(x_of(30.0), 22.0))
            .handle_pointer_up(&PointerEvent::touch_end(x_of(30.0), 22.0));
        assert_eq!(f.listeners(), 0);
    }

    let kinds = f.kinds();
    let count = |kind| kinds.iter().filter(|&&k| k == kind).count();
    assert_eq!(count(Start), 9);
    assert_eq!(count(End), 9);
}

#[test]
fn destroy_returns_host_scope_to_baseline() {
    let host = Host::headless();
    let baseline = host.lifecycle.disposer_count();
    for _ in 0..5 {
        let slider = Slider::new(&host, SliderConfig::default());
        assert_eq!(host.lifecycle.disposer_count(), baseline + 1);
        assert_eq!(host.theme.subscriber_count(), 1);
        slider.destroy();
        assert_eq!(host.lifecycle.disposer_count(), baseline);
        assert_eq!(host.theme.subscriber_count(), 0);
    }
}

#[test]
fn dropping_last_handle_releases_host_resources() {
    let f = fixture(SliderConfig::default());
    f.press(f.track, x_of(60.0));
    let Fixture {
        host,
        slider,
        surface,
        ..
    } = f;

    let other = slider.clone();
    drop(slider);
    assert_eq!(host.theme.subscriber_count(), 1);
    assert_eq!(host.lifecycle.disposer_count(), 1);

    drop(other);
    assert_eq!(host.theme.subscriber_count(), 0);
    assert_eq!(host.lifecycle.disposer_count(), 0);
    assert_eq!(host.scheduler.pending_frames(), 0);
    {
        let doc = host.document.borrow();
        assert_eq!(doc.listener_count(DocumentEvents::all()), 0);
        assert_eq!(doc.resize_observer_count(), 0);
    }

    let drawn = surface.commands();
    host.theme.set(Theme::light());
    host.scheduler.pump();
    assert_eq!(surface.commands(), drawn);
}
