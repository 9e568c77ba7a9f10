// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard page handlers.
//!
//! Each request is one activation of the page's view: a fresh
//! [`RemoteList`] fetches its list once and the result is rendered. Fetch
//! failures become the page's error panel, never an error response.

use crate::error::AppError;
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::render::{self, ListPage};
use crate::view::{RemoteList, ViewMode};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Page routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/users", get(users))
        .route("/activities", get(resource::<Activity>))
        .route("/teams", get(resource::<Team>))
        .route("/leaderboard", get(resource::<LeaderboardEntry>))
        .route("/workouts", get(resource::<Workout>))
}

async fn home() -> Html<String> {
    Html(render::home())
}

/// Users page query string.
#[derive(Debug, Deserialize)]
struct UsersQuery {
    /// Search text
    #[serde(default)]
    q: Option<String>,
    /// `cards` (default) or `table`
    #[serde(default)]
    view: Option<String>,
}

async fn users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsersQuery>,
    uri: Uri,
) -> Html<String> {
    let query = params.q.unwrap_or_default();
    let mode = ViewMode::parse(params.view.as_deref().unwrap_or_default());
    tracing::debug!(query = %query, view = mode.as_str(), "Rendering users page");

    let mut view = RemoteList::<User>::new();
    let view_state = view.load(&state.api).await;

    Html(render::users::users_page(
        view_state,
        &query,
        mode,
        &retry_href(&uri),
    ))
}

async fn resource<R: ListPage>(State(state): State<Arc<AppState>>, uri: Uri) -> Html<String> {
    let mut view = RemoteList::<R>::new();
    let view_state = view.load(&state.api).await;

    Html(render::resource_page(view_state, &retry_href(&uri)))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Retry reloads exactly the page that failed.
fn retry_href(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
