//! Debounced Commit
//!
//! Ticketed debounce state. Every `schedule` replaces the pending value and
//! issues a new ticket; only the newest ticket may commit, and only once.
//! The browser side arms one timer per ticket (see `SearchDebounce`).

use gloo_timers::callback::Timeout;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    next: u64,
    pending: Option<(Ticket, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { next: 0, pending: None }
    }
}

impl<T> Debouncer<T> {
    /// Replace any pending value; the previous ticket becomes void
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Take the pending value if `ticket` is still current
    pub fn expire(&mut self, ticket: Ticket) -> Option<T> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Debouncer plus the browser timer for its current ticket.
/// Dropping the timer cancels it, so rearming and teardown both cancel.
pub struct SearchDebounce {
    quiet: Duration,
    state: Debouncer<String>,
    timer: Option<Timeout>,
}

impl SearchDebounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            state: Debouncer::default(),
            timer: None,
        }
    }

    pub fn quiet_millis(&self) -> u32 {
        u32::try_from(self.quiet.as_millis()).unwrap_or(u32::MAX)
    }

    /// Schedule `text`; returns the ticket the new timer must present
    pub fn schedule(&mut self, text: String) -> Ticket {
        self.timer = None;
        self.state.schedule(text)
    }

    pub fn arm(&mut self, timer: Timeout) {
        self.timer = Some(timer);
    }

    pub fn expire(&mut self, ticket: Ticket) -> Option<String> {
        let value = self.state.expire(ticket);
        if value.is_some() {
            self.timer = None;
        }
        value
    }

    pub fn cancel(&mut self) {
        self.timer = None;
        self.state.cancel();
    }
}
