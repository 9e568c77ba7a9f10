// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List view controllers and derived view state.

pub mod remote_list;
pub mod users;

pub use remote_list::{FetchTicket, RemoteList, ViewState};
pub use users::{filter_users, matches_query, ViewMode};

use serde::de::DeserializeOwned;

/// A record type served by one OctoFit list endpoint.
///
/// `Default` is the record used for list elements that carry no fields.
pub trait Resource: DeserializeOwned + Default + Send + 'static {
    /// Endpoint path segment under the API base (`users` -> `/api/users/`).
    const PATH: &'static str;
    /// Lowercase plural used in messages ("Loading users...").
    const NOUN: &'static str;
    /// Capitalized name used in headings ("Error Loading Users").
    const LABEL: &'static str;
}
