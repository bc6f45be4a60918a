//! Frame and timer scheduling for a single-threaded event loop.
//!
//! The host owns one `Scheduler` and calls [`Scheduler::pump`] once per
//! display refresh. Frame callbacks are one-shot, like
//! `requestAnimationFrame`: a callback that wants another frame requests it
//! again, and the new request runs on the following pump.

use std::cell::RefCell;
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::animation::{Clock, SystemClock};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

type FrameCallback = Box<dyn FnOnce(Instant)>;
type TimerCallback = Box<dyn FnOnce()>;

struct Inner {
    next_id: u64,
    clock: Rc<dyn Clock>,
    frames: Vec<(FrameHandle, FrameCallback)>,
    timers: Vec<(TimerHandle, Instant, TimerCallback)>,
}

impl Inner {
    fn id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Clone)]
pub struct Scheduler(Rc<RefCell<Inner>>);

impl Scheduler {
    pub fn new(clock: impl Clock) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            next_id: 1,
            clock: Rc::new(clock),
            frames: Vec::new(),
            timers: Vec::new(),
        })))
    }

    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    pub fn now(&self) -> Instant {
        let clock = self.0.borrow().clock.clone();
        clock.now()
    }

    pub fn request_frame(&self, f: impl FnOnce(Instant) + 'static) -> FrameHandle {
        let mut inner = self.0.borrow_mut();
        let handle = FrameHandle(inner.id());
        inner.frames.push((handle, Box::new(f)));
        handle
    }

    /// Returns `false` when the frame already ran or was cancelled.
    pub fn cancel_frame(&self, handle: FrameHandle) -> bool {
        let mut inner = self.0.borrow_mut();
        let before = inner.frames.len();
        inner.frames.retain(|(h, _)| *h != handle);
        inner.frames.len() != before
    }

    pub fn set_timeout(&self, delay: Duration, f: impl FnOnce() + 'static) -> TimerHandle {
        let now = self.now();
        let mut inner = self.0.borrow_mut();
        let handle = TimerHandle(inner.id());
        inner.timers.push((handle, now + delay, Box::new(f)));
        handle
    }

    pub fn clear_timeout(&self, handle: TimerHandle) -> bool {
        let mut inner = self.0.borrow_mut();
        let before = inner.timers.len();
        inner.timers.retain(|(h, _, _)| *h != handle);
        inner.timers.len() != before
    }

    pub fn pending_frames(&self) -> usize {
        self.0.borrow().frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.0.borrow().timers.len()
    }

    /// Fires every due timer in deadline order, then runs the frame callbacks
    /// that were queued before this call. Returns how many callbacks ran.
    pub fn pump(&self) -> usize {
        let now = self.now();
        let mut ran = 0;

        // Callbacks run with the queue unborrowed so they can schedule again.
        while let Some(cb) = self.take_due_timer(now) {
            cb();
            ran += 1;
        }

        let frames = std::mem::take(&mut self.0.borrow_mut().frames);
        for (_, cb) in frames {
            cb(now);
            ran += 1;
        }
        ran
    }

    fn take_due_timer(&self, now: Instant) -> Option<TimerCallback> {
        let mut inner = self.0.borrow_mut();
        let idx = inner
            .timers
            .iter()
            .enumerate()
            .filter(|(_, (_, at, _))| *at <= now)
            .min_by_key(|(_, (_, at, _))| *at)
            .map(|(i, _)| i)?;
        let (_, _, cb) = inner.timers.remove(idx);
        Some(cb)
    }
}
