//! Owned handles for pending timers.
//!
//! Dropping a `gloo_timers` handle cancels it, so the registry is the single
//! place that decides which timers stay alive.

use std::collections::HashMap;

use gloo_timers::callback::{Interval, Timeout};

#[derive(Default)]
pub(crate) struct TimerRegistry {
    next_id: u64,
    pending: HashMap<u64, Timeout>,
    intervals: Vec<Interval>,
}

impl TimerRegistry {
    /// Reserve an id before the callback that needs it is built.
    pub(crate) fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub(crate) fn insert_timeout(&mut self, id: u64, timeout: Timeout) {
        self.pending.insert(id, timeout);
    }

    /// Release a timeout whose callback has run.
    pub(crate) fn finish(&mut self, id: u64) {
        self.pending.remove(&id);
    }

    pub(crate) fn push_interval(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.len() + self.intervals.len()
    }

    /// Cancel everything still scheduled.
    pub(crate) fn cancel_all(&mut self) {
        self.pending.clear();
        self.intervals.clear();
    }
}
