// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering for dashboard pages.
//!
//! Renderers are pure functions of a [`ViewState`](crate::view::ViewState)
//! and derived state; they never fetch. Views are built with leptos and
//! rendered to a string on the server.

pub mod activities;
pub mod format;
pub mod layout;
pub mod leaderboard;
pub mod state;
pub mod teams;
pub mod users;
pub mod workouts;

pub use layout::{page, Nav};
pub use state::{render_state, ErrorPanel, LoadingPanel};

use crate::view::{Resource, ViewState};
use layout::{NotFound, Welcome};
use leptos::prelude::*;

/// A resource with a fixed page layout (everything except Users, whose page
/// also carries search and view-mode state).
pub trait ListPage: Resource {
    const NAV: Nav;
    const HEADING: &'static str;
    const SUBTITLE: &'static str;

    /// Body for the loaded list, including the empty placeholder.
    fn render_records(records: &[Self]) -> AnyView;
}

/// Content area for a [`ListPage`] resource.
pub fn resource_view<R: ListPage>(state: &ViewState<R>, retry_href: &str) -> AnyView {
    render_state(state, retry_href, |records| {
        view! {
            <div class="container mt-4">
                <ComponentHeader heading={R::HEADING} subtitle={R::SUBTITLE} />
                {R::render_records(records)}
            </div>
        }
        .into_any()
    })
}

/// Full document for a [`ListPage`] resource.
pub fn resource_page<R: ListPage>(state: &ViewState<R>, retry_href: &str) -> String {
    page(R::NAV, R::LABEL, resource_view(state, retry_href))
}

/// Full 404 document.
pub fn not_found(path: &str) -> String {
    page(
        Nav::Home,
        "Not Found",
        view! { <NotFound path={path.to_string()} /> }.into_any(),
    )
}

/// Full landing page document.
pub fn home() -> String {
    page(Nav::Home, "Home", view! { <Welcome /> }.into_any())
}

#[component]
fn ComponentHeader(heading: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="component-header">
            <h2>{heading}</h2>
            <p class="text-muted mb-0">{subtitle}</p>
        </div>
    }
}

fn badge(class: &str, label: String) -> impl IntoView {
    let class = format!("badge {}", class);
    view! { <span class=class>{label}</span> }
}

/// Optional text, empty when absent.
fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Optional number, `-` when absent.
fn number(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}
