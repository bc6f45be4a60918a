use std::cell::Cell;
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Material "medium" motion duration used for value transitions.
pub const DURATION_MEDIUM: Duration = Duration::from_millis(225);

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    Standard,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Standard => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

fn bezier_component(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Solves the curve's x(t) = `x` with Newton-Raphson, then evaluates y(t).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_component(x1, x2, t) - x;
        if err.abs() < NEWTON_EPSILON {
            break;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < NEWTON_EPSILON {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }
    bezier_component(y1, y2, t).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::medium()
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn medium() -> Self {
        Self::tween(DURATION_MEDIUM, Easing::Standard)
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

// Animation clock
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A test clock you can drive deterministically. Clones share the same time.
#[derive(Clone)]
pub struct TestClock {
    t: Rc<Cell<Instant>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Animated value that transitions smoothly.
///
/// Retargeting while a transition is running restarts from the value
/// currently shown, so consecutive updates never jump.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Jumps to `value` immediately, cancelling any running transition.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    /// Completes the running transition at its target.
    pub fn finish(&mut self) {
        let target = self.target.clone();
        self.snap_to(target);
    }

    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.spec.delay {
            return true;
        }
        let animation_time = elapsed - self.spec.delay;
        if animation_time >= self.spec.duration || self.spec.duration.is_zero() {
            self.finish();
            return false;
        }

        let t = (animation_time.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0);
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn set_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
