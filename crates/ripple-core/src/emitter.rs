//! Named-event emitter with `on` / `off` / `trigger`.
//!
//! Handlers get `&mut E` so a payload can carry flags such as
//! "default prevented" back to the code that triggered it. The handler list
//! is snapshotted before dispatch; handlers may register or remove handlers
//! (including themselves) while running.

use std::cell::RefCell;
use std::rc::Rc;

pub type HandlerId = usize;

type Handler<E> = Rc<dyn Fn(&mut E)>;

pub struct Emitter<K, E>(Rc<RefCell<Inner<K, E>>>);

struct Inner<K, E> {
    next_id: HandlerId,
    handlers: Vec<(HandlerId, K, Handler<E>)>,
}

impl<K, E> Clone for Emitter<K, E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K: Copy + PartialEq + 'static, E: 'static> Default for Emitter<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq + 'static, E: 'static> Emitter<K, E> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Inner {
            next_id: 0,
            handlers: Vec::new(),
        })))
    }

    pub fn on(&self, key: K, f: impl Fn(&mut E) + 'static) -> HandlerId {
        let mut inner = self.0.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, key, Rc::new(f)));
        id
    }

    pub fn off(&self, id: HandlerId) -> bool {
        let mut inner = self.0.borrow_mut();
        let before = inner.handlers.len();
        inner.handlers.retain(|(hid, _, _)| *hid != id);
        inner.handlers.len() != before
    }

    /// Calls every handler registered for `key`, in registration order.
    /// Returns the number of handlers invoked.
    pub fn trigger(&self, key: K, event: &mut E) -> usize {
        let matching: Vec<Handler<E>> = self
            .0
            .borrow()
            .handlers
            .iter()
            .filter(|(_, k, _)| *k == key)
            .map(|(_, _, h)| h.clone())
            .collect();
        for h in &matching {
            h(event);
        }
        matching.len()
    }

    pub fn handler_count(&self) -> usize {
        self.0.borrow().handlers.len()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().handlers.clear();
    }
}
