// ============================================================================
// Deferred Appearance Updates
// ============================================================================

use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;

/// Host hook for waking the event loop when work is queued.
///
/// Any `Fn()` closure is a wakeup, so a host can pass a closure that pings
/// its loop (a calloop `Ping`, a channel sender, a flag).
pub trait Wakeup {
    fn wake(&self);
}

impl<F: Fn()> Wakeup for F {
    fn wake(&self) {
        self()
    }
}

/// A pending resolve-and-apply pass over every appearance property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppearanceJob {
    /// Whether the new values transition in or are applied at once
    pub animated: bool,
}

/// Coalescing queue holding at most one appearance job.
///
/// Any number of requests between two drains collapse into a single job.
/// [`push`](Self::push) decides whether that job animates, the most recent
/// call winning. [`refresh`](Self::refresh) rides along with whatever is
/// pending. The wakeup is pinged only when the queue goes from empty to
/// pending.
#[derive(Default)]
pub struct JobQueue {
    pending: Option<AppearanceJob>,
    wakeup: Option<Rc<dyn Wakeup>>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the hook pinged when a job is queued. Shared hooks let one host
    /// loop serve many buttons.
    pub fn set_wakeup(&mut self, wakeup: Rc<dyn Wakeup>) {
        self.wakeup = Some(wakeup);
    }

    /// Queue a job that animates exactly when `animated` is set.
    pub fn push(&mut self, animated: bool) {
        let was_pending = self.pending.replace(AppearanceJob { animated }).is_some();
        self.queued(was_pending, animated);
    }

    /// Queue a job without changing the `animated` flag of a pending one.
    /// A fresh job does not animate.
    pub fn refresh(&mut self) {
        match &self.pending {
            Some(job) => self.queued(true, job.animated),
            None => self.push(false),
        }
    }

    fn queued(&self, was_pending: bool, animated: bool) {
        if was_pending {
            log::trace!("appearance job coalesced (animated: {})", animated);
            return;
        }

        log::trace!("appearance job queued (animated: {})", animated);
        // Only ping on first request - later pushes ride along with this batch
        if let Some(wakeup) = &self.wakeup {
            wakeup.wake();
        }
    }

    /// Take the pending job, leaving the queue empty.
    pub fn take(&mut self) -> Option<AppearanceJob> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl fmt::Debug for JobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobQueue")
            .field("pending", &self.pending)
            .field("wakeup", &self.wakeup.is_some())
            .finish()
    }
}

bitflags! {
    /// What the host has to redo for a button after it changed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Content sizes or layout configuration changed
        const NEEDS_LAYOUT = 1 << 0;
        /// Only painted values changed
        const NEEDS_PAINT = 1 << 1;
    }
}
