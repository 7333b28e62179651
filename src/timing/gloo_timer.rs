//! Browser [`Timer`] backed by `gloo-timers`.
//!
//! Each scheduled callback is a `spawn_local` task sleeping on a
//! `TimeoutFuture`; cancellation aborts the task through an `AbortHandle`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use super::timer::{Timer, TimerCallback, TimerHandle};

/// `setTimeout`-backed timer for the page.
#[derive(Default)]
pub struct GlooTimer {
    next_id: Cell<u64>,
    active: Rc<RefCell<HashMap<u64, AbortHandle>>>,
}

impl GlooTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for GlooTimer {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let (abort, registration) = AbortHandle::new_pair();
        self.active.borrow_mut().insert(id, abort);

        let active = Rc::clone(&self.active);
        wasm_bindgen_futures::spawn_local(async move {
            let sleep = gloo_timers::future::sleep(delay);
            if Abortable::new(sleep, registration).await.is_ok() {
                active.borrow_mut().remove(&id);
                callback();
            }
        });
        TimerHandle::from_raw(id)
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        let removed = self.active.borrow_mut().remove(&handle.raw());
        match removed {
            Some(abort) => {
                abort.abort();
                true
            }
            None => false,
        }
    }
}
