// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use octofit_dashboard::config::Config;
use octofit_dashboard::routes::create_router;
use octofit_dashboard::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Serve `api` on an ephemeral local port, as a stand-in for the OctoFit
/// backend. Returns the API base URL (`http://127.0.0.1:PORT/api`).
#[allow(dead_code)]
pub async fn spawn_fake_api(api: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake API");
    let addr = listener.local_addr().expect("Fake API has no address");

    tokio::spawn(async move {
        axum::serve(listener, api).await.expect("Fake API crashed");
    });

    format!("http://{}/api", addr)
}

/// Base URL of a port nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe socket");
    let addr = listener.local_addr().expect("Probe socket has no address");
    drop(listener);
    format!("http://{}/api", addr)
}

/// Create the dashboard app pointed at `api_base_url`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(api_base_url: &str) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(api_base_url)));
    (create_router(state.clone()), state)
}

/// GET `uri` from the dashboard and return status and body text.
#[allow(dead_code)]
pub async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
