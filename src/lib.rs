// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit Dashboard: browse users, activities, teams, the leaderboard and
//! workout suggestions from the OctoFit Tracker API.
//!
//! Every page is a [`view::RemoteList`] over one resource type: it fetches the
//! list once when the page is activated, then renders loading, error or data.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod view;

use config::Config;
use services::ApiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
}

impl AppState {
    /// Build state with an API client for the configured base URL.
    pub fn new(config: Config) -> Self {
        let api = ApiClient::from_config(&config);
        Self { config, api }
    }
}
