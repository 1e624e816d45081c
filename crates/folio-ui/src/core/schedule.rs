//! Deferred work requested by page transitions.
//!
//! Transitions never touch timers themselves; they return [`Schedule`]
//! requests and the host decides how to run them. Every request the host
//! accepts must be cancelable so teardown leaves nothing running.

use crate::core::skills::SkillId;
use crate::core::toast::ToastTicket;

/// Work to run when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Reveal the next caption character.
    TypeNext,
    /// Flip the caption cursor.
    BlinkCursor,
    /// Apply a skill bar's width.
    RevealSkill(SkillId),
    /// Auto-hide the toast shown with this ticket.
    HideToast(ToastTicket),
    /// Second icon render pass.
    RerenderIcons,
}

/// A timer request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Run `task` once after `after_ms`.
    Once {
        /// Delay in milliseconds.
        after_ms: u32,
        /// Work to run.
        task: Task,
    },
    /// Run `task` every `period_ms` until torn down.
    Every {
        /// Period in milliseconds.
        period_ms: u32,
        /// Work to run.
        task: Task,
    },
}
