//! Focus bookkeeping shared by the handles of one slider.
//!
//! Moving focus from one handle to its sibling produces a blur followed by
//! a focus. Both handles consult the same coordinator so that such a move
//! reads as "still focused" and the value label does not flicker.

use std::cell::Cell;

use crate::state::Thumb;

pub trait FocusCoordinator {
    fn focused(&self) -> Option<Thumb>;

    /// Records focus on `thumb`. Returns `true` when focus entered the
    /// widget from outside.
    fn focus(&self, thumb: Thumb) -> bool;

    /// Records that `thumb` lost focus to `next` (a sibling handle, or
    /// `None` for anything outside the widget). Returns `true` when focus
    /// left the widget.
    fn blur(&self, thumb: Thumb, next: Option<Thumb>) -> bool;

    fn reset(&self);
}

#[derive(Debug, Default)]
pub struct HandleFocus {
    current: Cell<Option<Thumb>>,
}

impl HandleFocus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FocusCoordinator for HandleFocus {
    fn focused(&self) -> Option<Thumb> {
        self.current.get()
    }

    fn focus(&self, thumb: Thumb) -> bool {
        let entered = self.current.get().is_none();
        self.current.set(Some(thumb));
        entered
    }

    fn blur(&self, thumb: Thumb, next: Option<Thumb>) -> bool {
        if self.current.get() != Some(thumb) {
            return false;
        }
        self.current.set(next);
        next.is_none()
    }

    fn reset(&self) {
        self.current.set(None);
    }
}
