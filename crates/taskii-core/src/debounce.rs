//! Search debounce policy.
//!
//! Query edits wait for [`DebouncePolicy::delay`] of quiet before a search is
//! issued; every new edit supersedes the pending one. After a search
//! completes, the empty-result state waits a further
//! [`DebouncePolicy::empty_state_delay`] so fast typing never flashes it.
//!
//! Superseding is tracked by [`Debouncer`], a generation counter shared by the
//! controller and the background tasks it spawns.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Default quiet period before a query edit triggers a search.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Default delay before an empty result set is displayed as such.
pub const DEFAULT_EMPTY_STATE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DebouncePolicy {
    pub delay: Duration,
    pub empty_state_delay: Duration,
}

impl DebouncePolicy {
    #[must_use]
    pub const fn from_millis(delay_ms: u64, empty_state_delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            empty_state_delay: Duration::from_millis(empty_state_delay_ms),
        }
    }
}

impl Default for DebouncePolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DEBOUNCE,
            empty_state_delay: DEFAULT_EMPTY_STATE_DELAY,
        }
    }
}

/// Proof that an operation was issued at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Cancel-on-new-input generation counter.
///
/// Cloning shares the counter. Issuing a new ticket or calling
/// [`Debouncer::cancel`] invalidates every ticket issued before.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede all outstanding work and return a ticket for the new work.
    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Supersede all outstanding work without issuing new work.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Whether `ticket` is still the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_one_second_each() {
        let policy = DebouncePolicy::default();
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert_eq!(policy.empty_state_delay, Duration::from_secs(1));
        assert_eq!(DebouncePolicy::from_millis(1000, 1000), policy);
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let debouncer = Debouncer::new();
        let first = debouncer.issue();
        assert!(debouncer.is_current(first));

        let second = debouncer.issue();
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn cancel_invalidates_outstanding() {
        let debouncer = Debouncer::new();
        let ticket = debouncer.issue();
        debouncer.cancel();
        assert!(!debouncer.is_current(ticket));
    }

    #[test]
    fn clones_share_generation() {
        let debouncer = Debouncer::new();
        let shared = debouncer.clone();
        let ticket = debouncer.issue();
        shared.issue();
        assert!(!debouncer.is_current(ticket));
    }
}
