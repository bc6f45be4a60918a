//! Material slider core.
//!
//! A [`Slider`] maps pointer and keyboard input onto one value (or an
//! ordered pair in range mode), animates the rendered position, paints the
//! track onto a [`ripple_canvas::Surface`] and mirrors its state onto the
//! host document for accessibility.
//!
//! ```
//! use ripple_canvas::RecordingSurface;
//! use ripple_core::{Host, Rect, Size};
//! use ripple_slider::{Slider, SliderConfig, SliderParts};
//!
//! let host = Host::headless();
//! let (container, track, handle) = {
//!     let mut doc = host.document.borrow_mut();
//!     let ids = (doc.create_element("div"), doc.create_element("div"), doc.create_element("div"));
//!     doc.set_rect(ids.1, Rect::new(0.0, 0.0, 212.0, 44.0)).unwrap();
//!     ids
//! };
//!
//! let surface = RecordingSurface::new(Size::new(212.0, 44.0));
//! let slider = Slider::new(&host, SliderConfig::default());
//! slider
//!     .attach(SliderParts::new(container, track, handle, surface.clone()))
//!     .unwrap();
//! slider.set_value(40.0, false);
//! assert_eq!(slider.get_value(), 40.0);
//! assert!(!surface.commands().is_empty());
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod events;
pub mod focus;
pub mod interaction;
pub mod mapping;
pub mod render;
pub mod state;
pub mod widget;

pub use config::{RenderConfig, SizeMetrics, SliderConfig, SliderSize, VersionedConfig};
pub use error::SliderError;
pub use events::{OriginalEvent, SliderEvent, SliderEventKind};
pub use focus::{FocusCoordinator, HandleFocus};
pub use state::{SliderState, Thumb};
pub use widget::{Slider, SliderParts};

#[cfg(test)]
mod tests;
