// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading and error panels, and dispatch on [`ViewState`].

use crate::view::{Resource, ViewState};
use leptos::prelude::*;

/// Spinner shown while a view is loading.
#[component]
pub fn LoadingPanel(noun: &'static str) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <p class="mt-3">{format!("Loading {}...", noun)}</p>
        </div>
    }
}

/// Error message with a Retry control that reloads the page.
#[component]
pub fn ErrorPanel(
    label: &'static str,
    #[prop(into)] message: String,
    #[prop(into)] retry_href: String,
) -> impl IntoView {
    view! {
        <div class="error-container">
            <h4>{format!("⚠️ Error Loading {}", label)}</h4>
            <p>{message}</p>
            <a class="btn btn-outline-danger" href=retry_href>"Retry"</a>
        </div>
    }
}

/// Render a view: spinner, error panel, or `loaded` applied to the records.
pub fn render_state<R, F>(state: &ViewState<R>, retry_href: &str, loaded: F) -> AnyView
where
    R: Resource,
    F: FnOnce(&[R]) -> AnyView,
{
    match state {
        ViewState::Loading => view! { <LoadingPanel noun={R::NOUN} /> }.into_any(),
        ViewState::Failed(message) => view! {
            <ErrorPanel label={R::LABEL} message={message.clone()} retry_href={retry_href.to_string()} />
        }
        .into_any(),
        ViewState::Loaded(records) => loaded(records),
    }
}
