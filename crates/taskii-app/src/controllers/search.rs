//! Search screen with debounced querying.
//!
//! Typing schedules a search after [`DebouncePolicy::delay`]; each new edit
//! supersedes the pending one. The search button runs immediately. The empty
//! state is revealed only after [`DebouncePolicy::empty_state_delay`] and
//! only if nothing newer superseded the search.

use std::sync::{Arc, Weak};

use serde::Serialize;
use taskii_core::debounce::{DebouncePolicy, Debouncer, Ticket};
use taskii_core::entities::Task;
use taskii_db::service::TaskiiService;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::{SharedState, new_state, publish};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Task>,
    pub show_empty_state: bool,
}

pub struct SearchController {
    service: Arc<TaskiiService>,
    state: SharedState<SearchState>,
    policy: DebouncePolicy,
    debouncer: Debouncer,
    limit: u32,
}

impl SearchController {
    #[must_use]
    pub fn new(service: Arc<TaskiiService>, policy: DebouncePolicy, limit: u32) -> Self {
        Self {
            service,
            state: new_state(),
            policy,
            debouncer: Debouncer::new(),
            limit,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Store the query and schedule a debounced search.
    ///
    /// Any pending search is superseded. Returns `None` for an empty query.
    pub fn on_query_changed(&self, query: impl Into<String>) -> Option<JoinHandle<()>> {
        let query = query.into();
        let ticket = self.debouncer.issue();
        self.state.send_modify(|s| s.query.clone_from(&query));
        if query.is_empty() {
            return None;
        }

        let job = self.search_job(ticket, query);
        let delay = self.policy.delay;
        let debouncer = self.debouncer.clone();
        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !debouncer.is_current(ticket) {
                tracing::trace!("debounced search superseded");
                return;
            }
            job.run().await;
        }))
    }

    /// Search the current query now, cancelling any pending debounced search.
    ///
    /// Returns `None` for an empty query.
    pub fn on_search_clicked(&self) -> Option<JoinHandle<()>> {
        let ticket = self.debouncer.issue();
        let query = self.state.borrow().query.clone();
        if query.is_empty() {
            return None;
        }
        let job = self.search_job(ticket, query);
        Some(tokio::spawn(job.run()))
    }

    /// Reset query, results and empty state; cancel anything pending.
    pub fn on_clear_clicked(&self) {
        self.debouncer.cancel();
        self.state.send_replace(SearchState::default());
    }

    fn search_job(&self, ticket: Ticket, query: String) -> SearchJob {
        SearchJob {
            service: Arc::clone(&self.service),
            state: Arc::downgrade(&self.state),
            debouncer: self.debouncer.clone(),
            ticket,
            query,
            limit: self.limit,
            empty_state_delay: self.policy.empty_state_delay,
        }
    }
}

struct SearchJob {
    service: Arc<TaskiiService>,
    state: Weak<watch::Sender<SearchState>>,
    debouncer: Debouncer,
    ticket: Ticket,
    query: String,
    limit: u32,
    empty_state_delay: std::time::Duration,
}

impl SearchJob {
    async fn run(self) {
        let results = match self.service.search_tasks(&self.query, self.limit).await {
            Ok(results) => results,
            Err(error) => {
                tracing::warn!(%error, query = %self.query, "search failed");
                return;
            }
        };
        if !self.debouncer.is_current(self.ticket) {
            return;
        }
        tracing::debug!(query = %self.query, hits = results.len(), "search finished");
        let published = publish(&self.state, |s| {
            s.results = results;
            s.show_empty_state = false;
        });
        if !published {
            return;
        }

        tokio::time::sleep(self.empty_state_delay).await;
        if self.debouncer.is_current(self.ticket) {
            publish(&self.state, |s| s.show_empty_state = true);
        }
    }
}
