use crate::Environment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayState {
    Stopped,
    Running,
}

/// Identifies one armed repeating timer.
///
/// A new handle is minted every time autoplay is (re)armed, so hosts that mirror the timer with a
/// real `setInterval`-style API can tell a re-arm apart from a surviving timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(pub u64);

#[derive(Clone, Copy, Debug)]
struct Timer {
    handle: TimerHandle,
    due_ms: u64,
}

/// The timer-based advance loop.
///
/// The driver owns at most one timer. It is adapter-driven: instead of registering callbacks it
/// records the next due time, and the host calls [`Autoplay::poll`] from its timer or frame loop.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval_ms: i64,
    timer: Option<Timer>,
    next_handle: u64,
}

impl Autoplay {
    pub fn new(interval_ms: i64) -> Self {
        Self {
            interval_ms,
            timer: None,
            next_handle: 1,
        }
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }

    pub fn state(&self) -> AutoplayState {
        if self.timer.is_some() {
            AutoplayState::Running
        } else {
            AutoplayState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The handle of the active timer, if any.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer.map(|t| t.handle)
    }

    /// When the next tick is due.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timer.map(|t| t.due_ms)
    }

    /// Whether `start` would arm a timer under the given conditions.
    pub fn can_run(&self, env: Environment, item_count: usize) -> bool {
        !env.reduced_motion && env.document_visible && self.interval_ms > 0 && item_count > 1
    }

    /// Arms the repeating tick.
    ///
    /// No-op when already running, when motion is reduced, when the document is hidden, when the
    /// interval is not positive, or when there is nothing to cycle through. The guards are read
    /// from `env` at call time. Returns `true` when a timer was armed by this call.
    pub fn start(&mut self, now_ms: u64, env: Environment, item_count: usize) -> bool {
        if self.timer.is_some() || !self.can_run(env, item_count) {
            return false;
        }
        let handle = TimerHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        let due_ms = now_ms.saturating_add(self.interval_ms as u64);
        cdebug!(handle = handle.0, due_ms, "autoplay armed");
        self.timer = Some(Timer { handle, due_ms });
        true
    }

    /// Cancels the timer if present. Idempotent; returns `true` when a timer was cancelled.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(_timer) => {
                cdebug!(handle = _timer.handle.0, "autoplay cancelled");
                true
            }
            None => false,
        }
    }

    /// Fires at most one due tick and schedules the next one.
    ///
    /// Ticks that were missed while the host was not polling (e.g. a throttled background tab)
    /// are dropped rather than replayed in a burst.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if now_ms < timer.due_ms {
            return false;
        }
        let interval = self.interval_ms.max(1) as u64;
        let mut due_ms = timer.due_ms.saturating_add(interval);
        if due_ms <= now_ms {
            due_ms = now_ms.saturating_add(interval);
        }
        ctrace!(handle = timer.handle.0, now_ms, due_ms, "autoplay tick");
        timer.due_ms = due_ms;
        true
    }
}
