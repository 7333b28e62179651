//! Trailing-edge debounce over a [`Timer`].

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::timer::{Timer, TimerHandle};

/// Wraps `func` so it runs once, `wait` after the most recent call.
///
/// Each call cancels the pending invocation and reschedules with its own
/// argument, so only the last argument of a burst reaches `func`.
pub struct Debounced<A: 'static> {
    timer: Rc<dyn Timer>,
    wait: Duration,
    func: Rc<dyn Fn(A)>,
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl<A: 'static> Debounced<A> {
    pub fn new(timer: Rc<dyn Timer>, wait: Duration, func: impl Fn(A) + 'static) -> Self {
        Self { timer, wait, func: Rc::new(func), pending: Rc::new(Cell::new(None)) }
    }

    /// Restart the quiet period, remembering `arg` for the eventual call.
    pub fn call(&self, arg: A) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
        let func = Rc::clone(&self.func);
        let pending = Rc::clone(&self.pending);
        let handle = self.timer.schedule(
            self.wait,
            Box::new(move || {
                pending.set(None);
                func(arg);
            }),
        );
        self.pending.set(Some(handle));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) -> bool {
        self.pending
            .take()
            .is_some_and(|handle| self.timer.cancel(handle))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}
