//! Cancellable one-shot timers for banner expiry.
//!
//! DESIGN
//! ======
//! A `TaskSlot` holds at most one pending task. Scheduling into an occupied
//! slot drops the old task, and dropping a gloo `Timeout` cancels it, so only
//! the newest schedule can fire. Outside the browser tasks never fire; state
//! tests drive expiry through explicit timestamps instead.

use std::cell::RefCell;
use std::rc::Rc;

/// A pending callback; dropping it cancels the callback.
pub struct ScheduledTask {
    #[cfg(feature = "hydrate")]
    _timeout: gloo_timers::callback::Timeout,
}

impl ScheduledTask {
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { _timeout: gloo_timers::callback::Timeout::new(delay_ms, callback) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
            Self {}
        }
    }
}

/// Single-occupancy holder for the latest task. A fired task stays in the
/// slot until the next schedule or cancel replaces it.
#[derive(Clone, Default)]
pub struct TaskSlot(Rc<RefCell<Option<ScheduledTask>>>);

impl TaskSlot {
    /// Run `callback` after `delay_ms`, cancelling whatever was pending.
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.0.replace(Some(ScheduledTask::new(delay_ms, callback)));
    }

    pub fn cancel(&self) {
        self.0.replace(None);
    }
}
