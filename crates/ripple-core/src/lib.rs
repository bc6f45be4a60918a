//! # Ripple host model
//!
//! Ripple widgets are written against a small model of their host rather
//! than a concrete DOM or windowing backend. This crate is that model:
//!
//! - `geometry` / `color` / `theme`: value types and theme tokens. The
//!   active theme is published through a `ThemeSource` signal.
//! - `dom`: a document of elements with prefixed classes, attributes,
//!   styles, focus, document-level listener records and resize observers.
//! - `scheduler`: one-shot frame callbacks and single-shot timers, driven by
//!   the host once per refresh via `Scheduler::pump`.
//! - `animation`: easing curves and `AnimatedValue`, timed against the
//!   scheduler's clock.
//! - `emitter`: `on` / `off` / `trigger` for widget events.
//! - `scope` / `effects`: lifecycle teardown.
//!
//! ## Deterministic time
//!
//! ```rust
//! use ripple_core::*;
//! use web_time::Duration;
//!
//! let clock = TestClock::new();
//! let scheduler = Scheduler::new(clock.clone());
//! let fired = std::rc::Rc::new(std::cell::Cell::new(false));
//! let f = fired.clone();
//! scheduler.set_timeout(Duration::from_millis(100), move || f.set(true));
//!
//! clock.advance(Duration::from_millis(100));
//! scheduler.pump();
//! assert!(fired.get());
//! ```

pub mod animation;
pub mod color;
pub mod dom;
pub mod effects;
pub mod emitter;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scheduler;
pub mod scope;
pub mod signal;
pub mod theme;

pub use animation::{AnimatedValue, AnimationSpec, Clock, Easing, SystemClock, TestClock};
pub use color::*;
pub use dom::*;
pub use effects::*;
pub use emitter::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use scheduler::*;
pub use scope::*;
pub use signal::*;
pub use theme::*;

/// Everything a widget needs from its host, bundled for construction.
#[derive(Clone)]
pub struct Host {
    pub document: DocumentRef,
    pub scheduler: Scheduler,
    pub theme: ThemeSource,
    pub lifecycle: Scope,
}

impl Host {
    pub fn new(document: DocumentRef, scheduler: Scheduler, theme: ThemeSource) -> Self {
        Self {
            document,
            scheduler,
            theme,
            lifecycle: Scope::new(),
        }
    }

    /// A host with an empty document, the system clock and the dark theme.
    pub fn headless() -> Self {
        Self::new(
            Document::shared("ripple-"),
            Scheduler::system(),
            ThemeSource::new(Theme::dark()),
        )
    }
}
