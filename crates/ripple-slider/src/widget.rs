//! The slider widget: a cheap, clonable handle over shared state.
//!
//! Hosts forward raw input through the `handle_*` methods. Semantic events
//! are queued while the state is borrowed and delivered once it has been
//! released, so handlers are free to call back into the slider. Scheduler
//! and theme callbacks hold only a weak reference and become no-ops once
//! the slider is gone.

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

use ripple_canvas::Surface;
use ripple_core::{
    AnimationSpec, Dispose, DisposerId, Document, DocumentError, DocumentEvents, ElementId, Emitter,
    FrameHandle, HandlerId, Host, KeyEvent, ListenerId, PointerEvent, PointerKind, Theme,
    TimerHandle,
};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::animation::ValueMotion;
use crate::config::{RenderConfig, SliderConfig, VersionedConfig};
use crate::error::SliderError;
use crate::events::{OriginalEvent, SliderEvent, SliderEventKind};
use crate::focus::{FocusCoordinator, HandleFocus};
use crate::interaction::{self, TrackGeometry};
use crate::mapping::{format_value, percent_to_visual_percent, value_to_percent};
use crate::render::{self, RenderFrame};
use crate::state::{SliderState, Thumb};

/// Label stays up this long after a release or key press.
pub const RELEASE_HIDE_DELAY: Duration = Duration::from_millis(1000);
pub const BLUR_HIDE_DELAY: Duration = Duration::from_millis(150);
pub const SURFACE_RETRY_DELAY: Duration = Duration::from_millis(50);

pub const DRAGGING_CLASS: &str = "slider--dragging";
pub const DISABLED_CLASS: &str = "slider--disabled";
pub const FOCUSED_CLASS: &str = "slider-handle--focused";
pub const VISIBLE_CLASS: &str = "slider-value--visible";

const THUMBS: [Thumb; 2] = [Thumb::First, Thumb::Second];

/// Elements a slider attaches to. `surface` is the canvas laid over the
/// track; it is sized to the track's rect.
pub struct SliderParts {
    pub container: ElementId,
    pub track: ElementId,
    pub handle: ElementId,
    pub second_handle: Option<ElementId>,
    pub label: Option<ElementId>,
    pub second_label: Option<ElementId>,
    pub surface: Box<dyn Surface>,
}

impl SliderParts {
    pub fn new(
        container: ElementId,
        track: ElementId,
        handle: ElementId,
        surface: impl Surface + 'static,
    ) -> Self {
        Self {
            container,
            track,
            handle,
            second_handle: None,
            label: None,
            second_label: None,
            surface: Box::new(surface),
        }
    }

    pub fn with_second_handle(mut self, handle: ElementId) -> Self {
        self.second_handle = Some(handle);
        self
    }

    pub fn with_labels(mut self, label: ElementId, second_label: Option<ElementId>) -> Self {
        self.label = Some(label);
        self.second_label = second_label;
        self
    }
}

struct Attached {
    container: ElementId,
    track: ElementId,
    handles: [Option<ElementId>; 2],
    labels: [Option<ElementId>; 2],
    surface: Box<dyn Surface>,
    unobserve: Dispose,
}

enum SurfaceRetry {
    Ready,
    NextFrame(FrameHandle),
    Delayed(TimerHandle),
    GaveUp,
}

#[derive(Clone, Copy, Debug)]
enum Press {
    Handle(Thumb),
    Track,
}

struct Inner {
    host: Host,
    this: Weak<RefCell<Inner>>,
    /// Tags this slider's document listeners.
    owner: u64,
    events: Emitter<SliderEventKind, SliderEvent>,
    outbox: Vec<SliderEvent>,

    config: VersionedConfig,
    render: RenderConfig,
    state: SliderState,
    motion: ValueMotion,
    theme: Theme,
    theme_sub: Option<Dispose>,
    lifecycle_entry: Option<DisposerId>,
    focus: Box<dyn FocusCoordinator>,

    attached: Option<Attached>,
    listeners: SmallVec<[ListenerId; 2]>,
    press_values: (f32, Option<f32>),
    frame: Option<FrameHandle>,
    frame_seq: u64,
    retry: SurfaceRetry,
    destroyed: bool,
}

#[derive(Clone)]
pub struct Slider {
    inner: Rc<RefCell<Inner>>,
}

impl Slider {
    pub fn new(host: &Host, config: SliderConfig) -> Self {
        let config = VersionedConfig::new(config);
        let render = config.render();
        let state = SliderState::from_config(config.config());
        let motion = ValueMotion::new(state.value, state.second_value, AnimationSpec::medium());
        let owner = host.document.borrow_mut().next_owner();

        let inner = Rc::new_cyclic(|this| {
            RefCell::new(Inner {
                host: host.clone(),
                this: this.clone(),
                owner,
                events: Emitter::new(),
                outbox: Vec::new(),
                config,
                render,
                state,
                motion,
                theme: host.theme.get(),
                theme_sub: None,
                lifecycle_entry: None,
                focus: Box::new(HandleFocus::new()),
                attached: None,
                listeners: SmallVec::new(),
                press_values: (0.0, None),
                frame: None,
                frame_seq: 0,
                retry: SurfaceRetry::Ready,
                destroyed: false,
            })
        });

        let weak = Rc::downgrade(&inner);
        let sub = host
            .theme
            .subscribe(move |theme: &Theme| with_inner(&weak, |inner| inner.on_theme(*theme)));
        let theme = host.theme.clone();
        inner.borrow_mut().theme_sub = Some(Dispose::new(move || {
            theme.unsubscribe(sub);
        }));

        let weak = Rc::downgrade(&inner);
        let entry = host
            .lifecycle
            .add_disposer(move || with_inner(&weak, Inner::destroy));
        inner.borrow_mut().lifecycle_entry = Some(entry);

        log::debug!("slider {owner}: created");
        Self { inner }
    }

    /// Binds the slider to its elements and paints it. Fails when an element
    /// is not part of the document, or a range slider has no second handle.
    pub fn attach(&self, parts: SliderParts) -> Result<&Self, SliderError> {
        self.with(|inner| inner.attach(parts))?;
        Ok(self)
    }

    pub fn on(&self, kind: SliderEventKind, f: impl Fn(&mut SliderEvent) + 'static) -> HandlerId {
        self.inner.borrow().events.on(kind, f)
    }

    pub fn off(&self, id: HandlerId) -> bool {
        self.inner.borrow().events.off(id)
    }

    // Host input.

    /// Pointer down on one of the slider's elements.
    pub fn handle_pointer_down(&self, target: ElementId, event: &PointerEvent) -> &Self {
        let press = self.inner.borrow_mut().prepare_press(target, event);
        let prevented = self.flush();
        match press {
            Some(press) if !prevented => self.with(|inner| inner.begin_press(press, event)),
            Some(_) => log::debug!("slider: interaction cancelled by a start handler"),
            None => {}
        }
        self
    }

    /// Document-level pointer or touch move.
    pub fn handle_pointer_move(&self, event: &PointerEvent) -> &Self {
        self.with(|inner| inner.pointer_move(event));
        self
    }

    /// Document-level pointer up, touch end or cancel.
    pub fn handle_pointer_up(&self, event: &PointerEvent) -> &Self {
        self.with(|inner| inner.pointer_up(event));
        self
    }

    /// Returns `true` when the key was consumed and the host should
    /// suppress its default action.
    pub fn handle_key_down(&self, target: ElementId, event: &KeyEvent) -> bool {
        self.with(|inner| inner.key_down(target, event))
    }

    pub fn handle_focus(&self, target: ElementId) -> &Self {
        self.with(|inner| inner.focus_in(target));
        self
    }

    /// `related` is the element receiving focus, if known.
    pub fn handle_blur(&self, target: ElementId, related: Option<ElementId>) -> &Self {
        self.with(|inner| inner.focus_out(target, related));
        self
    }

    /// Resize observer notification for the track.
    pub fn handle_resize(&self) -> &Self {
        report("resize", self.with(Inner::resize));
        self
    }

    // Public operations.

    pub fn set_value(&self, value: f32, trigger_change: bool) -> &Self {
        let result = self.with(|inner| inner.set_thumb_value(Thumb::First, value, trigger_change));
        report("set_value", result);
        self
    }

    pub fn get_value(&self) -> f32 {
        self.inner.borrow().state.value
    }

    pub fn set_second_value(&self, value: f32, trigger_change: bool) -> &Self {
        let result =
            self.with(|inner| inner.set_thumb_value(Thumb::Second, value, trigger_change));
        report("set_second_value", result);
        self
    }

    pub fn get_second_value(&self) -> Option<f32> {
        self.inner.borrow().state.second_value
    }

    pub fn set_min(&self, min: f32) -> &Self {
        let result = self.with(|inner| {
            let max = inner.state.max;
            inner.set_bounds(min, max)
        });
        report("set_min", result);
        self
    }

    pub fn get_min(&self) -> f32 {
        self.inner.borrow().state.min
    }

    pub fn set_max(&self, max: f32) -> &Self {
        let result = self.with(|inner| {
            let min = inner.state.min;
            inner.set_bounds(min, max)
        });
        report("set_max", result);
        self
    }

    pub fn get_max(&self) -> f32 {
        self.inner.borrow().state.max
    }

    /// `0` switches to continuous mode.
    pub fn set_step(&self, step: f32) -> &Self {
        report("set_step", self.with(|inner| inner.set_step(step)));
        self
    }

    pub fn get_step(&self) -> f32 {
        self.inner.borrow().state.step
    }

    pub fn set_disabled(&self, disabled: bool) -> &Self {
        report("set_disabled", self.with(|inner| inner.set_disabled(disabled)));
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().state.disabled
    }

    /// Releases every resource the slider holds in the host. Idempotent.
    pub fn destroy(&self) -> &Self {
        self.with(Inner::destroy);
        self
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().destroyed
    }

    // Introspection.

    pub fn is_pressed(&self) -> bool {
        self.inner.borrow().state.pressed
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().state.dragging
    }

    pub fn active_handle(&self) -> Option<Thumb> {
        self.inner.borrow().state.active_handle
    }

    pub fn focused_handle(&self) -> Option<Thumb> {
        self.inner.borrow().focus.focused()
    }

    pub fn is_label_visible(&self, thumb: Thumb) -> bool {
        self.inner.borrow().label_visible(thumb)
    }

    /// Values currently drawn, which trail the logical values while an
    /// animation runs.
    pub fn rendered_values(&self) -> (f32, Option<f32>) {
        self.inner.borrow().motion.values()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().motion.is_running()
    }

    pub fn render_config(&self) -> RenderConfig {
        self.inner.borrow().render
    }

    fn with<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let result = f(&mut *self.inner.borrow_mut());
        self.flush();
        result
    }

    /// Delivers queued events. Returns whether a `Start` handler prevented
    /// the default.
    fn flush(&self) -> bool {
        let (queued, events) = {
            let mut inner = self.inner.borrow_mut();
            (mem::take(&mut inner.outbox), inner.events.clone())
        };
        let mut prevented = false;
        for mut event in queued {
            events.trigger(event.kind, &mut event);
            prevented |= event.kind == SliderEventKind::Start && event.default_prevented();
        }
        prevented
    }
}

fn report(op: &str, result: Result<(), SliderError>) {
    match result {
        Ok(()) => {}
        Err(SliderError::Destroyed) => log::debug!("slider: {op} ignored after destroy"),
        Err(err) => log::warn!("slider: {op}: {err}"),
    }
}

fn with_inner(weak: &Weak<RefCell<Inner>>, f: impl FnOnce(&mut Inner)) {
    let Some(rc) = weak.upgrade() else {
        return;
    };
    let Ok(mut inner) = rc.try_borrow_mut() else {
        log::warn!("slider: deferred callback found the slider busy");
        return;
    };
    f(&mut *inner);
}

impl Inner {
    fn ensure_live(&self) -> Result<(), SliderError> {
        if self.destroyed {
            Err(SliderError::Destroyed)
        } else {
            Ok(())
        }
    }

    fn emit(&mut self, kind: SliderEventKind, original: Option<OriginalEvent>) {
        let event = SliderEvent::new(kind, self.state.value, self.state.second_value, original);
        self.outbox.push(event);
    }

    fn dom(&self, op: impl FnOnce(&mut Document) -> Result<(), DocumentError>) {
        if let Err(err) = op(&mut *self.host.document.borrow_mut()) {
            log::warn!("slider {}: {err}", self.owner);
        }
    }

    fn thumb_of(&self, element: ElementId) -> Option<Thumb> {
        let attached = self.attached.as_ref()?;
        THUMBS
            .into_iter()
            .find(|t| attached.handles[t.index()] == Some(element))
    }

    fn handle_element(&self, thumb: Thumb) -> Option<ElementId> {
        self.attached.as_ref()?.handles[thumb.index()]
    }

    fn track_geometry(&self) -> Option<TrackGeometry> {
        let attached = self.attached.as_ref()?;
        let rect = self.host.document.borrow().rect(attached.track)?;
        Some(TrackGeometry {
            rect,
            edge_padding: self.render.metrics.edge_padding,
        })
    }

    fn label_visible(&self, thumb: Thumb) -> bool {
        self.config.config().show_value
            && !self.state.disabled
            && self.state.active_bubble == Some(thumb)
    }

    // Attachment.

    fn attach(&mut self, parts: SliderParts) -> Result<(), SliderError> {
        self.ensure_live()?;
        {
            let doc = self.host.document.borrow();
            let required = [
                ("container", Some(parts.container)),
                ("track", Some(parts.track)),
                ("handle", Some(parts.handle)),
                ("second handle", parts.second_handle),
                ("value label", parts.label),
                ("second value label", parts.second_label),
            ];
            for (name, id) in required {
                if id.is_some_and(|id| !doc.contains(id)) {
                    return Err(SliderError::MissingElement(name));
                }
            }
        }
        let range = self.state.is_range();
        if range && parts.second_handle.is_none() {
            return Err(SliderError::MissingElement("second handle"));
        }

        self.detach();
        let observer = self.host.document.borrow_mut().observe_resize(parts.track)?;
        let document = self.host.document.clone();
        self.attached = Some(Attached {
            container: parts.container,
            track: parts.track,
            handles: [Some(parts.handle), parts.second_handle.filter(|_| range)],
            labels: [parts.label, parts.second_label.filter(|_| range)],
            surface: parts.surface,
            unobserve: Dispose::new(move || {
                document.borrow_mut().unobserve_resize(observer);
            }),
        });

        for thumb in THUMBS {
            if let Some(handle) = self.handle_element(thumb) {
                self.dom(|doc| doc.set_attribute(handle, "role", "slider"));
            }
        }
        self.resize_from_track();
        self.sync_values();
        self.sync_markers();
        self.paint();
        log::debug!("slider {}: attached", self.owner);
        Ok(())
    }

    fn detach(&mut self) {
        self.cancel_interaction();
        self.cancel_retry();
        if let Some(attached) = self.attached.take() {
            attached.unobserve.run();
        }
    }

    fn resize_from_track(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        let Some(rect) = self.host.document.borrow().rect(attached.track) else {
            return;
        };
        let size = rect.size();
        attached.surface.resize(size);
        self.render = self.config.resize(size);
    }

    fn resize(&mut self) -> Result<(), SliderError> {
        self.ensure_live()?;
        if self.attached.is_none() {
            return Err(SliderError::NotAttached);
        }
        self.resize_from_track();
        self.paint();
        Ok(())
    }

    fn on_theme(&mut self, theme: Theme) {
        if self.destroyed {
            return;
        }
        self.theme = theme;
        self.paint();
    }

    // Pointer interaction.

    fn prepare_press(&mut self, target: ElementId, event: &PointerEvent) -> Option<Press> {
        if self.destroyed || self.state.disabled || !event.is_primary_down() {
            return None;
        }
        if self.attached.is_none() {
            log::warn!("slider {}: pointer down before attach", self.owner);
            return None;
        }
        if !self.listeners.is_empty() {
            log::debug!("slider {}: finishing stale interaction", self.owner);
            self.finish_interaction(None);
        }
        let press = self.thumb_of(target).map_or(Press::Track, Press::Handle);
        self.emit(
            SliderEventKind::Start,
            Some(OriginalEvent::Pointer(event.clone())),
        );
        Some(press)
    }

    fn begin_press(&mut self, press: Press, event: &PointerEvent) {
        if self.destroyed || self.state.disabled {
            return;
        }
        let Some(track) = self.track_geometry() else {
            log::warn!("slider {}: track is no longer attached", self.owner);
            return;
        };
        let x = event.position.x;
        self.press_values = (self.state.value, self.state.second_value);
        self.clear_label_timer();
        match press {
            Press::Handle(thumb) => interaction::press_handle(&mut self.state, thumb, x),
            Press::Track => {
                let snap = self.config.config().snap_to_steps;
                let commit = interaction::tap_track(&mut self.state, x, track, snap);
                if commit.changed {
                    self.animate_to_state();
                    self.sync_values();
                    self.emit(
                        SliderEventKind::Input,
                        Some(OriginalEvent::Pointer(event.clone())),
                    );
                }
            }
        }

        let (moves, ups) = match event.kind {
            PointerKind::Touch => (DocumentEvents::TOUCH_MOVE, DocumentEvents::TOUCH_END),
            PointerKind::Mouse | PointerKind::Pen => {
                (DocumentEvents::POINTER_MOVE, DocumentEvents::POINTER_UP)
            }
        };
        {
            let mut doc = self.host.document.borrow_mut();
            self.listeners.push(doc.add_listener(moves, self.owner));
            self.listeners.push(doc.add_listener(ups, self.owner));
        }
        log::debug!("slider {}: pressed {press:?}", self.owner);
        self.sync_markers();
        self.paint();
    }

    fn pointer_move(&mut self, event: &PointerEvent) {
        if self.destroyed || self.listeners.is_empty() {
            return;
        }
        let Some(track) = self.track_geometry() else {
            return;
        };
        let before = self.state.active_handle;
        let snap = self.config.config().snap_to_steps;
        let step = interaction::drag_to(&mut self.state, event.position.x, track, snap);
        if step.started {
            log::debug!("slider {}: drag started", self.owner);
            self.snap_motion();
            self.sync_markers();
        }
        let Some(commit) = step.commit.filter(|c| c.changed) else {
            return;
        };
        self.snap_motion();
        if let Some(from) = before.filter(|&from| commit.crossed(from)) {
            self.follow_crossing(from, commit.owner);
        }
        self.sync_values();
        self.sync_markers();
        self.paint();
        self.emit(
            SliderEventKind::Input,
            Some(OriginalEvent::Pointer(event.clone())),
        );
    }

    fn pointer_up(&mut self, event: &PointerEvent) {
        if self.destroyed || self.listeners.is_empty() {
            return;
        }
        self.finish_interaction(Some(OriginalEvent::Pointer(event.clone())));
    }

    fn finish_interaction(&mut self, original: Option<OriginalEvent>) {
        self.detach_listeners();
        if interaction::release(&mut self.state).is_none() {
            return;
        }
        log::debug!("slider {}: released", self.owner);
        self.schedule_label_hide(RELEASE_HIDE_DELAY);
        self.sync_markers();
        self.paint();
        if (self.state.value, self.state.second_value) != self.press_values {
            self.emit(SliderEventKind::Change, original.clone());
        }
        self.emit(SliderEventKind::End, original);
    }

    /// Ends the interaction without emitting anything.
    fn cancel_interaction(&mut self) {
        self.detach_listeners();
        if interaction::release(&mut self.state).is_some() {
            log::debug!("slider {}: interaction cancelled", self.owner);
            self.sync_markers();
            self.paint();
        }
    }

    fn detach_listeners(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let mut doc = self.host.document.borrow_mut();
        for id in self.listeners.drain(..) {
            doc.remove_listener(id);
        }
    }

    /// Moves keyboard focus along with a value that crossed to the sibling.
    fn follow_crossing(&mut self, from: Thumb, to: Thumb) {
        if self.focus.focused() != Some(from) {
            return;
        }
        self.focus.blur(from, Some(to));
        self.focus.focus(to);
        if let Some(element) = self.handle_element(to) {
            if let Err(err) = self.host.document.borrow_mut().focus(element) {
                log::warn!("slider {}: {err}", self.owner);
            }
        }
    }

    // Keyboard and focus.

    fn key_down(&mut self, target: ElementId, event: &KeyEvent) -> bool {
        if self.destroyed || self.state.disabled {
            return false;
        }
        let Some(thumb) = self.thumb_of(target) else {
            return false;
        };
        let Some(value) = interaction::key_target(&self.state, thumb, event) else {
            return false;
        };
        self.state.active_bubble = Some(thumb);
        let commit = interaction::commit_value(&mut self.state, thumb, value);
        if commit.crossed(thumb) {
            self.follow_crossing(thumb, commit.owner);
        }
        self.schedule_label_hide(RELEASE_HIDE_DELAY);
        self.sync_markers();
        if commit.changed {
            if self.state.dragging {
                self.snap_motion();
            } else {
                self.animate_to_state();
            }
            self.sync_values();
            self.paint();
            let original = Some(OriginalEvent::Key(event.clone()));
            self.emit(SliderEventKind::Input, original.clone());
            self.emit(SliderEventKind::Change, original);
        }
        true
    }

    fn focus_in(&mut self, target: ElementId) {
        if self.destroyed || self.state.disabled {
            return;
        }
        let Some(thumb) = self.thumb_of(target) else {
            return;
        };
        let entered = self.focus.focus(thumb);
        self.clear_label_timer();
        self.state.active_bubble = Some(thumb);
        self.sync_markers();
        if entered {
            self.emit(SliderEventKind::Focus, None);
        }
    }

    fn focus_out(&mut self, target: ElementId, related: Option<ElementId>) {
        if self.destroyed {
            return;
        }
        let Some(thumb) = self.thumb_of(target) else {
            return;
        };
        let next = related
            .and_then(|el| self.thumb_of(el))
            .filter(|&next| next != thumb);
        let left = self.focus.blur(thumb, next);
        if next.is_none() && !self.state.pressed {
            self.schedule_label_hide(BLUR_HIDE_DELAY);
        }
        self.sync_markers();
        if left && !self.state.disabled {
            self.emit(SliderEventKind::Blur, None);
        }
    }

    fn clear_label_timer(&mut self) {
        if let Some(timer) = self.state.value_hide_timer.take() {
            self.host.scheduler.clear_timeout(timer);
        }
    }

    fn schedule_label_hide(&mut self, delay: Duration) {
        self.clear_label_timer();
        let weak = self.this.clone();
        let timer = self
            .host
            .scheduler
            .set_timeout(delay, move || with_inner(&weak, Inner::hide_label));
        self.state.value_hide_timer = Some(timer);
    }

    fn hide_label(&mut self) {
        self.state.value_hide_timer = None;
        if self.destroyed || self.state.pressed {
            return;
        }
        self.state.active_bubble = None;
        self.sync_markers();
    }

    // Public operations.

    fn set_thumb_value(
        &mut self,
        thumb: Thumb,
        value: f32,
        trigger_change: bool,
    ) -> Result<(), SliderError> {
        self.ensure_live()?;
        if !value.is_finite() {
            return Err(SliderError::InvalidValue(value));
        }
        if thumb == Thumb::Second && !self.state.is_range() {
            log::warn!("slider {}: second value ignored outside range mode", self.owner);
            return Ok(());
        }
        let before = (self.state.value, self.state.second_value);
        let clamped = self.state.clamp(value);
        self.state.set_value_of(thumb, clamped);
        self.state.order_values();
        let after = (self.state.value, self.state.second_value);
        if before == after {
            return Ok(());
        }
        self.render = self.config.update(|c| {
            c.value = after.0;
            c.second_value = after.1;
        });
        if self.state.dragging {
            self.snap_motion();
        } else {
            self.animate_to_state();
        }
        self.sync_values();
        self.paint();
        if trigger_change {
            self.emit(SliderEventKind::Change, None);
        }
        Ok(())
    }

    fn set_bounds(&mut self, min: f32, max: f32) -> Result<(), SliderError> {
        self.ensure_live()?;
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(SliderError::InvalidRange { min, max });
        }
        if (min, max) == (self.state.min, self.state.max) {
            return Ok(());
        }
        self.state.set_bounds(min, max);
        let (value, second_value) = (self.state.value, self.state.second_value);
        self.render = self.config.update(|c| {
            c.min = min;
            c.max = max;
            c.value = value;
            c.second_value = second_value;
        });
        // Rendered positions are relative to the bounds, so they jump too.
        self.snap_motion();
        self.sync_values();
        self.paint();
        Ok(())
    }

    fn set_step(&mut self, step: f32) -> Result<(), SliderError> {
        self.ensure_live()?;
        if !step.is_finite() || step < 0.0 {
            return Err(SliderError::InvalidStep(step));
        }
        self.state.set_step(step);
        self.render = self.config.update(|c| c.step = step);
        self.sync_values();
        self.paint();
        Ok(())
    }

    fn set_disabled(&mut self, disabled: bool) -> Result<(), SliderError> {
        self.ensure_live()?;
        if self.state.disabled == disabled {
            return Ok(());
        }
        self.state.disabled = disabled;
        self.render = self.config.update(|c| c.disabled = disabled);
        if disabled {
            self.cancel_interaction();
            self.clear_label_timer();
            self.state.active_bubble = None;
        }
        self.sync_values();
        self.sync_markers();
        self.paint();
        Ok(())
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.detach();
        self.clear_label_timer();
        if let Some(frame) = self.frame.take() {
            self.host.scheduler.cancel_frame(frame);
        }
        if let Some(unsubscribe) = self.theme_sub.take() {
            unsubscribe.run();
        }
        if let Some(entry) = self.lifecycle_entry.take() {
            self.host.lifecycle.remove_disposer(entry);
        }
        self.focus.reset();
        self.events.clear();
        self.outbox.clear();
        log::debug!("slider {}: destroyed", self.owner);
    }

    // Animation.

    fn animate_to_state(&mut self) {
        let now = self.host.scheduler.now();
        self.motion
            .animate_to(self.state.value, self.state.second_value, now);
        self.request_frame();
    }

    /// Stops any running transition at the logical values.
    fn snap_motion(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.host.scheduler.cancel_frame(frame);
        }
        self.motion.jump_to(self.state.value, self.state.second_value);
    }

    fn request_frame(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.host.scheduler.cancel_frame(frame);
        }
        if !self.motion.is_running() {
            return;
        }
        self.frame_seq += 1;
        let seq = self.frame_seq;
        let weak = self.this.clone();
        let frame = self
            .host
            .scheduler
            .request_frame(move |now| with_inner(&weak, |inner| inner.on_frame(seq, now)));
        self.frame = Some(frame);
    }

    fn on_frame(&mut self, seq: u64, now: Instant) {
        // A frame cancelled while its batch was already running still fires.
        if self.destroyed || self.frame_seq != seq || self.frame.is_none() {
            return;
        }
        self.frame = None;
        let running = self.motion.step(now);
        self.paint();
        if running {
            self.request_frame();
        } else {
            log::debug!("slider {}: animation settled", self.owner);
        }
    }

    // Painting.

    fn paint(&mut self) {
        if self.destroyed || self.attached.is_none() {
            return;
        }
        self.sync_positions();
        if matches!(
            self.retry,
            SurfaceRetry::NextFrame(_) | SurfaceRetry::Delayed(_)
        ) {
            return;
        }
        match self.draw() {
            Ok(()) => self.retry = SurfaceRetry::Ready,
            Err(err) => {
                log::debug!("slider {}: {err}, retrying next frame", self.owner);
                let weak = self.this.clone();
                let frame = self
                    .host
                    .scheduler
                    .request_frame(move |_| with_inner(&weak, Inner::retry_on_frame));
                self.retry = SurfaceRetry::NextFrame(frame);
            }
        }
    }

    fn draw(&mut self) -> Result<(), SliderError> {
        let attached = self.attached.as_mut().ok_or(SliderError::NotAttached)?;
        let (value, second_value) = self.motion.values();
        let frame = RenderFrame {
            value,
            second_value,
            min: self.state.min,
            max: self.state.max,
            step: self.state.step,
            ticks: &self.state.ticks,
            pressed: self.state.pressed_thumb(),
        };
        let (config, theme) = (&self.render, &self.theme);
        let drawn = attached
            .surface
            .with_context(&mut |canvas| render::paint(canvas, config, theme, &frame));
        if drawn {
            Ok(())
        } else {
            Err(SliderError::SurfaceUnavailable)
        }
    }

    fn retry_on_frame(&mut self) {
        if self.destroyed || !matches!(self.retry, SurfaceRetry::NextFrame(_)) {
            return;
        }
        if self.draw().is_ok() {
            self.retry = SurfaceRetry::Ready;
            return;
        }
        log::debug!(
            "slider {}: surface still unavailable, retrying in {SURFACE_RETRY_DELAY:?}",
            self.owner
        );
        let weak = self.this.clone();
        let timer = self
            .host
            .scheduler
            .set_timeout(SURFACE_RETRY_DELAY, move || {
                with_inner(&weak, Inner::retry_after_delay)
            });
        self.retry = SurfaceRetry::Delayed(timer);
    }

    fn retry_after_delay(&mut self) {
        if self.destroyed || !matches!(self.retry, SurfaceRetry::Delayed(_)) {
            return;
        }
        if self.draw().is_ok() {
            self.retry = SurfaceRetry::Ready;
        } else {
            log::warn!("slider {}: canvas surface unavailable, giving up", self.owner);
            self.retry = SurfaceRetry::GaveUp;
        }
    }

    fn cancel_retry(&mut self) {
        match mem::replace(&mut self.retry, SurfaceRetry::Ready) {
            SurfaceRetry::NextFrame(frame) => {
                self.host.scheduler.cancel_frame(frame);
            }
            SurfaceRetry::Delayed(timer) => {
                self.host.scheduler.clear_timeout(timer);
            }
            SurfaceRetry::Ready | SurfaceRetry::GaveUp => {}
        }
    }

    // DOM mirrors.

    fn sync_values(&self) {
        let Some(attached) = &self.attached else {
            return;
        };
        let step = self.state.step;
        let min = format_value(self.state.min, step);
        let max = format_value(self.state.max, step);
        let disabled = self.state.disabled.to_string();
        for thumb in THUMBS {
            let now = format_value(self.state.value_of(thumb), step);
            if let Some(handle) = attached.handles[thumb.index()] {
                self.dom(|doc| {
                    doc.set_attribute(handle, "aria-valuenow", now.as_str())?;
                    doc.set_attribute(handle, "aria-valuemin", min.as_str())?;
                    doc.set_attribute(handle, "aria-valuemax", max.as_str())?;
                    doc.set_attribute(handle, "aria-disabled", disabled.as_str())
                });
            }
            if let Some(label) = attached.labels[thumb.index()] {
                self.dom(|doc| doc.set_text(label, now.as_str()));
            }
        }
    }

    /// Places handles and labels at the rendered values.
    fn sync_positions(&self) {
        let Some(attached) = &self.attached else {
            return;
        };
        let (value, second_value) = self.motion.values();
        let width = self.render.width;
        let edge = self.render.metrics.edge_padding;
        for (thumb, value) in [(Thumb::First, Some(value)), (Thumb::Second, second_value)] {
            let Some(value) = value else {
                continue;
            };
            let percent = value_to_percent(value, self.state.min, self.state.max);
            let left = format!("{:.3}%", percent_to_visual_percent(percent, width, edge));
            let elements = [
                attached.handles[thumb.index()],
                attached.labels[thumb.index()],
            ];
            for element in elements.into_iter().flatten() {
                self.dom(|doc| doc.set_style(element, "left", left.as_str()));
            }
        }
    }

    fn sync_markers(&self) {
        let Some(attached) = &self.attached else {
            return;
        };
        let container = attached.container;
        let (dragging, disabled) = (self.state.dragging, self.state.disabled);
        self.dom(|doc| {
            let class = doc.prefixed(DRAGGING_CLASS);
            doc.toggle_class(container, &class, dragging)?;
            let class = doc.prefixed(DISABLED_CLASS);
            doc.toggle_class(container, &class, disabled)
        });
        let focused = self.focus.focused();
        for thumb in THUMBS {
            if let Some(handle) = attached.handles[thumb.index()] {
                let on = focused == Some(thumb);
                self.dom(|doc| {
                    let class = doc.prefixed(FOCUSED_CLASS);
                    doc.toggle_class(handle, &class, on)
                });
            }
            if let Some(label) = attached.labels[thumb.index()] {
                let on = self.label_visible(thumb);
                self.dom(|doc| {
                    let class = doc.prefixed(VISIBLE_CLASS);
                    doc.toggle_class(label, &class, on)
                });
            }
        }
    }
}

/// Dropping the last handle without `destroy` still releases host resources.
impl Drop for Inner {
    fn drop(&mut self) {
        self.destroy();
    }
}
