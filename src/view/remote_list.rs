// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetch-on-activation list controller.
//!
//! A [`RemoteList`] starts in [`ViewState::Loading`] and moves exactly once per
//! activation to either `Loaded` or `Failed`. Each activation hands out a
//! [`FetchTicket`] stamped with the current generation; deactivating the view
//! bumps the generation so a response that arrives afterwards is dropped
//! instead of overwriting state nobody is looking at.
//!
//! The page handlers build a fresh controller per request and only ever call
//! [`RemoteList::load`]; a disconnecting client drops that future, so nothing
//! is applied. `deactivate` and stale-ticket handling in `resolve` matter to
//! callers that keep one controller across several activations.

use super::Resource;
use crate::error::FetchError;
use crate::services::ApiClient;

/// Lifecycle of a list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<R> {
    Loading,
    Loaded(Vec<R>),
    /// User-visible error message
    Failed(String),
}

/// Proof that a fetch was started by a particular activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Controller for one resource list view.
#[derive(Debug)]
pub struct RemoteList<R: Resource> {
    state: ViewState<R>,
    generation: u64,
    active: bool,
}

impl<R: Resource> Default for RemoteList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> RemoteList<R> {
    /// New, inactive view in the `Loading` state.
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
            active: false,
        }
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<R> {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Loaded records, if the fetch succeeded.
    pub fn records(&self) -> Option<&[R]> {
        match &self.state {
            ViewState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    /// Activate the view.
    ///
    /// Returns a ticket when a fetch should start. An already active view
    /// returns `None`: re-rendering never triggers another fetch.
    pub fn activate(&mut self) -> Option<FetchTicket> {
        if self.active {
            return None;
        }

        self.active = true;
        self.state = ViewState::Loading;
        tracing::debug!(
            resource = R::PATH,
            generation = self.generation,
            "View activated"
        );
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Deactivate the view, invalidating any outstanding ticket.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.active = false;
        self.generation += 1;
        tracing::debug!(
            resource = R::PATH,
            generation = self.generation,
            "View deactivated"
        );
    }

    /// Apply a fetch result.
    ///
    /// Returns `false` (and leaves state untouched) when the ticket is stale,
    /// the view is inactive, or this activation already resolved.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<R>, FetchError>) -> bool {
        if !self.active
            || ticket.generation != self.generation
            || !matches!(self.state, ViewState::Loading)
        {
            tracing::debug!(
                resource = R::PATH,
                ticket_generation = ticket.generation,
                generation = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }

        self.state = match result {
            Ok(records) => {
                tracing::debug!(resource = R::PATH, count = records.len(), "View loaded");
                ViewState::Loaded(records)
            }
            Err(e) => {
                tracing::error!(resource = R::PATH, error = %e, "Error fetching {}", R::NOUN);
                ViewState::Failed(e.to_string())
            }
        };
        true
    }

    /// Activate the view and, if that starts a fetch, await it and resolve.
    ///
    /// Dropping the returned future before it completes leaves the view in
    /// `Loading`; nothing is applied late.
    pub async fn load(&mut self, api: &ApiClient) -> &ViewState<R> {
        if let Some(ticket) = self.activate() {
            let result = api.fetch::<R>().await;
            self.resolve(ticket, result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    fn team(name: &str) -> Team {
        Team {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_loading_and_inactive() {
        let view = RemoteList::<Team>::new();
        assert_eq!(view.state(), &ViewState::Loading);
        assert!(!view.is_active());
        assert!(view.records().is_none());
    }

    #[test]
    fn test_resolves_once_per_activation() {
        let mut view = RemoteList::<Team>::new();
        let ticket = view.activate().expect("first activation starts a fetch");

        assert!(view.resolve(ticket, Ok(vec![team("Marvel")])));
        assert_eq!(view.records().map(|r| r.len()), Some(1));

        // A second resolution for the same activation is ignored
        assert!(!view.resolve(ticket, Err(FetchError::Http { status: 500 })));
        assert_eq!(view.records().map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_reactivation_while_active_does_not_refetch() {
        let mut view = RemoteList::<Team>::new();
        assert!(view.activate().is_some());
        assert!(view.activate().is_none());
    }

    #[test]
    fn test_failure_stores_message() {
        let mut view = RemoteList::<Team>::new();
        let ticket = view.activate().unwrap();
        view.resolve(ticket, Err(FetchError::Http { status: 503 }));
        assert_eq!(
            view.state(),
            &ViewState::Failed("HTTP error! status: 503".to_string())
        );
    }

    #[test]
    fn test_stale_result_after_deactivate_is_dropped() {
        let mut view = RemoteList::<Team>::new();
        let stale = view.activate().unwrap();
        view.deactivate();

        assert!(!view.resolve(stale, Ok(vec![team("Marvel")])));
        assert_eq!(view.state(), &ViewState::Loading);
    }

    #[test]
    fn test_stale_result_does_not_clobber_new_activation() {
        let mut view = RemoteList::<Team>::new();
        let stale = view.activate().unwrap();
        view.deactivate();
        let fresh = view.activate().unwrap();
        assert_ne!(stale.generation(), fresh.generation());

        assert!(!view.resolve(stale, Ok(vec![team("Old")])));
        assert_eq!(view.state(), &ViewState::Loading);

        assert!(view.resolve(fresh, Ok(vec![team("New"), team("Newer")])));
        assert_eq!(view.records().map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_reactivation_resets_to_loading() {
        let mut view = RemoteList::<Team>::new();
        let ticket = view.activate().unwrap();
        view.resolve(ticket, Ok(vec![team("Marvel")]));
        view.deactivate();

        assert!(view.activate().is_some());
        assert_eq!(view.state(), &ViewState::Loading);
    }
}
