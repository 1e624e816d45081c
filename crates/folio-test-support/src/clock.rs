//! Deterministic host for page transitions.
//!
//! [`VirtualClock`] plays the role of the browser runtime: it applies events,
//! records every effect with the virtual time it was produced at, and fires
//! scheduled tasks when time is advanced. Tasks due at the same instant fire
//! in the order they were scheduled.

use folio_ui::core::page::{Effect, PageEvent, PageState, Render};
use folio_ui::core::schedule::{Schedule, Task};

/// An effect and the virtual time it was produced at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimedEffect {
    /// Milliseconds since the clock started.
    pub at_ms: u64,
    /// The effect.
    pub effect: Effect,
}

#[derive(Clone, Debug)]
struct PendingTask {
    due_ms: u64,
    seq: u64,
    task: Task,
    period_ms: Option<u64>,
}

/// Virtual-time host around a [`PageState`].
#[derive(Debug)]
pub struct VirtualClock {
    page: PageState,
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
    log: Vec<TimedEffect>,
}

impl VirtualClock {
    /// Start at time zero.
    #[must_use]
    pub const fn new(page: PageState) -> Self {
        Self {
            page,
            now_ms: 0,
            next_seq: 0,
            pending: Vec::new(),
            log: Vec::new(),
        }
    }

    /// The hosted page.
    #[must_use]
    pub const fn page(&self) -> &PageState {
        &self.page
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether a task is scheduled.
    #[must_use]
    pub fn is_pending(&self, task: Task) -> bool {
        self.pending.iter().any(|pending| pending.task == task)
    }

    /// Apply an event now; returns the effects it produced.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        let effects = self.page.handle(event);
        for effect in &effects {
            match effect {
                Effect::Schedule(schedule) => self.schedule(*schedule),
                Effect::Teardown => self.pending.clear(),
                _ => {}
            }
            self.log.push(TimedEffect {
                at_ms: self.now_ms,
                effect: effect.clone(),
            });
        }
        effects
    }

    /// Fire every task due up to and including `at_ms`.
    ///
    /// # Panics
    ///
    /// Panics when asked to move backwards.
    pub fn advance_to(&mut self, at_ms: u64) {
        assert!(at_ms >= self.now_ms, "virtual time cannot move backwards");
        while let Some(index) = self.next_due(at_ms) {
            let pending = self.pending.remove(index);
            self.now_ms = pending.due_ms;
            if let Some(period) = pending.period_ms {
                self.push(pending.due_ms + period, pending.task, Some(period));
            }
            self.dispatch(PageEvent::TimerFired(pending.task));
        }
        self.now_ms = at_ms;
    }

    /// Advance by `ms` from the current time.
    pub fn advance_by(&mut self, ms: u64) {
        self.advance_to(self.now_ms + ms);
    }

    /// Every recorded effect, oldest first.
    #[must_use]
    pub fn effects(&self) -> &[TimedEffect] {
        &self.log
    }

    /// Recorded renders with their timestamps.
    pub fn renders(&self) -> impl Iterator<Item = (u64, &Render)> {
        self.log.iter().filter_map(|timed| match &timed.effect {
            Effect::Render(render) => Some((timed.at_ms, render)),
            _ => None,
        })
    }

    fn schedule(&mut self, schedule: Schedule) {
        match schedule {
            Schedule::Once { after_ms, task } => {
                self.push(self.now_ms + u64::from(after_ms), task, None);
            }
            Schedule::Every { period_ms, task } => {
                // A zero period would never let time advance.
                let period = u64::from(period_ms.max(1));
                self.push(self.now_ms + period, task, Some(period));
            }
        }
    }

    fn push(&mut self, due_ms: u64, task: Task, period_ms: Option<u64>) {
        self.next_seq += 1;
        self.pending.push(PendingTask {
            due_ms,
            seq: self.next_seq,
            task,
            period_ms,
        });
    }

    fn next_due(&self, at_ms: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due_ms <= at_ms)
            .min_by_key(|(_, pending)| (pending.due_ms, pending.seq))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_page;

    #[test]
    fn intervals_repeat_until_teardown() {
        let mut clock = VirtualClock::new(sample_page(None));
        clock.dispatch(PageEvent::Initialize);
        clock.advance_to(2_000);
        let blinks = clock
            .renders()
            .filter(|(_, render)| matches!(render, Render::CursorOpacity(_)))
            .count();
        assert_eq!(blinks, 4);

        clock.dispatch(PageEvent::Teardown);
        clock.advance_by(5_000);
        let after = clock
            .renders()
            .filter(|(at, render)| *at > 2_000 && matches!(render, Render::CursorOpacity(_)))
            .count();
        assert_eq!(after, 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn effects_carry_their_fire_time() {
        let mut clock = VirtualClock::new(sample_page(None));
        clock.dispatch(PageEvent::Initialize);
        clock.advance_to(1_000);
        let typed = clock
            .renders()
            .find(|(_, render)| matches!(render, Render::TypingText(_)))
            .map(|(at, _)| at);
        assert_eq!(typed, Some(1_000));
        assert_eq!(clock.now_ms(), 1_000);
    }
}
