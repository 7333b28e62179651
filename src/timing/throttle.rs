//! Leading-edge throttle over a [`Timer`].

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::timer::Timer;

/// Wraps `func` so it runs at most once per `interval`.
///
/// The first call in a window runs immediately; calls made while cooling
/// down are dropped, not queued.
pub struct Throttled<A> {
    timer: Rc<dyn Timer>,
    interval: Duration,
    func: Box<dyn Fn(A)>,
    cooling: Rc<Cell<bool>>,
}

impl<A> Throttled<A> {
    pub fn new(timer: Rc<dyn Timer>, interval: Duration, func: impl Fn(A) + 'static) -> Self {
        Self { timer, interval, func: Box::new(func), cooling: Rc::new(Cell::new(false)) }
    }

    /// Invoke `func` unless the current window already fired.
    ///
    /// Returns whether `func` ran.
    pub fn call(&self, arg: A) -> bool {
        if self.cooling.get() {
            return false;
        }
        self.cooling.set(true);
        let cooling = Rc::clone(&self.cooling);
        self.timer
            .schedule(self.interval, Box::new(move || cooling.set(false)));
        (self.func)(arg);
        true
    }

    #[must_use]
    pub fn is_cooling(&self) -> bool {
        self.cooling.get()
    }
}
