use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type DisposerId = usize;

/// Lifecycle owner. Widgets register teardown with `add_disposer`; the host
/// calls `dispose` when the owning component is destroyed. A widget torn
/// down earlier takes its entry back with `remove_disposer`.
pub struct Scope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    next_id: Cell<DisposerId>,
    disposers: RefCell<Vec<(DisposerId, Box<dyn FnOnce()>)>>,
    disposed: Cell<bool>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                next_id: Cell::new(0),
                disposers: RefCell::new(Vec::new()),
                disposed: Cell::new(false),
            }),
        }
    }

    /// Registers teardown. On an already disposed scope it runs immediately.
    pub fn add_disposer(&self, disposer: impl FnOnce() + 'static) -> DisposerId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        if self.inner.disposed.get() {
            disposer();
            return id;
        }
        self.inner
            .disposers
            .borrow_mut()
            .push((id, Box::new(disposer)));
        id
    }

    /// Drops a disposer without running it.
    pub fn remove_disposer(&self, id: DisposerId) -> bool {
        let mut disposers = self.inner.disposers.borrow_mut();
        let before = disposers.len();
        disposers.retain(|(d, _)| *d != id);
        disposers.len() != before
    }

    pub fn disposer_count(&self) -> usize {
        self.inner.disposers.borrow().len()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        let disposers = std::mem::take(&mut *self.inner.disposers.borrow_mut());
        for (_, disposer) in disposers {
            disposer();
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Scope {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        if self.disposed.get() {
            return;
        }
        let disposers = std::mem::take(&mut *self.disposers.borrow_mut());
        for (_, disposer) in disposers {
            disposer();
        }
    }
}
