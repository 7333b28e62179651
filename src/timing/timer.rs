//! One-shot timer collaborator and its virtual-clock implementation.
//!
//! DESIGN
//! ======
//! Every deferred action in the crate (auto-dismiss, debounce, throttle
//! cooldown) goes through [`Timer`] so tests can advance time explicitly with
//! [`VirtualTimer`] instead of sleeping. The browser build backs the same trait
//! with `gloo-timers` (see `gloo_timer`).

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::time::Duration;

/// Deferred callback run at most once.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Opaque handle for a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Schedule and cancel one-shot callbacks.
///
/// Implementations must never run a callback synchronously from inside
/// `schedule` or `cancel`; callers may hold `RefCell` borrows across both.
pub trait Timer {
    /// Run `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;

    /// Cancel a pending callback.
    ///
    /// Returns `false` when the callback already ran or was cancelled.
    fn cancel(&self, handle: TimerHandle) -> bool;
}

// =============================================================================
// VIRTUAL TIMER
// =============================================================================

/// Manually driven timer for deterministic tests and headless use.
///
/// Callbacks run only from [`VirtualTimer::advance`] / [`VirtualTimer::advance_to`],
/// ordered by due time and then by scheduling order.
#[derive(Default)]
pub struct VirtualTimer {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    /// Keyed by `(due_ms, seq)`; `seq` doubles as the handle value.
    pending: RefCell<BTreeMap<(u64, u64), TimerCallback>>,
}

impl VirtualTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds since construction.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Number of callbacks still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward by `delta`, firing everything that comes due.
    ///
    /// Returns the number of callbacks run.
    pub fn advance(&self, delta: Duration) -> usize {
        let target = self.now_ms.get().saturating_add(duration_ms(delta));
        self.advance_to(target)
    }

    /// Move the clock to `target_ms`, firing everything due at or before it.
    ///
    /// Callbacks scheduled while advancing also fire if they come due before
    /// `target_ms`. Moving backwards is ignored.
    pub fn advance_to(&self, target_ms: u64) -> usize {
        let mut fired = 0;
        loop {
            // Release the borrow before running the callback so it can
            // schedule or cancel freely.
            let next = {
                let mut pending = self.pending.borrow_mut();
                match pending.first_key_value() {
                    Some((&(due, _), _)) if due <= target_ms => pending.pop_first(),
                    _ => None,
                }
            };
            let Some(((due, _), callback)) = next else {
                break;
            };
            self.now_ms.set(due.max(self.now_ms.get()));
            callback();
            fired += 1;
        }
        if target_ms > self.now_ms.get() {
            self.now_ms.set(target_ms);
        }
        fired
    }
}

impl Timer for VirtualTimer {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let due = self.now_ms.get().saturating_add(duration_ms(delay));
        self.pending.borrow_mut().insert((due, seq), callback);
        TimerHandle(seq)
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        let mut pending = self.pending.borrow_mut();
        let key = pending.keys().find(|(_, seq)| *seq == handle.0).copied();
        key.and_then(|key| pending.remove(&key)).is_some()
    }
}

pub(crate) fn duration_ms(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
