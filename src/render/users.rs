// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users directory: search box, card/table toggle, and the two layouts.

use super::format::Avatar;
use super::{badge, page, render_state, text, Nav};
use crate::models::User;
use crate::view::{filter_users, Resource, ViewMode, ViewState};
use leptos::prelude::*;

/// Link to the Users page with the given layout, keeping the search query.
pub fn users_href(mode: ViewMode, query: &str) -> String {
    let mut href = format!("{}?view={}", Nav::Users.href(), mode.as_str());
    if !query.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(query));
    }
    href
}

/// Full Users document.
pub fn users_page(state: &ViewState<User>, query: &str, mode: ViewMode, retry_href: &str) -> String {
    page(Nav::Users, User::LABEL, users_view(state, query, mode, retry_href))
}

/// Content area for the Users page.
pub fn users_view(state: &ViewState<User>, query: &str, mode: ViewMode, retry_href: &str) -> AnyView {
    render_state(state, retry_href, |users| {
        let filtered = filter_users(users, query);
        tracing::debug!(
            total = users.len(),
            matched = filtered.len(),
            view = mode.as_str(),
            "Filtered users"
        );

        let body = match mode {
            ViewMode::Cards => cards(&filtered, query),
            ViewMode::Table => table(&filtered, query),
        };

        view! {
            <div class="container mt-4">
                {header(filtered.len(), query, mode)}
                <div class="bg-white p-3 shadow-sm">
                    {search_box(query, mode)}
                    {body}
                </div>
            </div>
        }
        .into_any()
    })
}

fn header(count: usize, query: &str, mode: ViewMode) -> impl IntoView {
    view! {
        <div class="component-header">
            <div class="d-flex justify-content-between align-items-center flex-wrap">
                <div>
                    <h2>"👤 Users Directory"</h2>
                    <p class="text-muted mb-0">{format!("{} registered OctoFit users", count)}</p>
                </div>
                <div class="d-flex gap-2 mt-2 mt-md-0">
                    {toggle(ViewMode::Cards, mode, query, "📇", "Cards")}
                    {toggle(ViewMode::Table, mode, query, "📊", "Table")}
                </div>
            </div>
        </div>
    }
}

fn toggle(
    target: ViewMode,
    current: ViewMode,
    query: &str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    let class = if target == current {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-outline-primary"
    };
    view! {
        <a class=class href={users_href(target, query)}>
            <span>{icon}</span>
            {format!(" {}", label)}
        </a>
    }
}

fn search_box(query: &str, mode: ViewMode) -> impl IntoView {
    view! {
        <form class="search-container mb-4" method="get" action={Nav::Users.href()}>
            <input type="hidden" name="view" value={mode.as_str()} />
            <input
                type="search"
                name="q"
                class="form-control form-control-lg"
                placeholder="🔍 Search by username, email, or team..."
                value={query.to_string()}
            />
        </form>
    }
}

fn no_match(query: &str) -> String {
    format!(r#"No users found matching "{}""#, query)
}

fn team_badge(user: &User, missing: &'static str, missing_class: &'static str) -> AnyView {
    match user.team_label() {
        Some(team) => badge("bg-primary", team.to_string()).into_any(),
        None => view! { <span class=missing_class>{missing}</span> }.into_any(),
    }
}

fn avatar_style(avatar: &Avatar) -> String {
    format!("background-color: {}", avatar.color)
}

fn cards(users: &[&User], query: &str) -> AnyView {
    let cards = if users.is_empty() {
        view! {
            <div class="col-12">
                <p class="no-data">{no_match(query)}</p>
            </div>
        }
        .into_any()
    } else {
        users.iter().map(|user| card(user)).collect_view().into_any()
    };
    view! { <div class="row g-4">{cards}</div> }.into_any()
}

fn card(user: &User) -> impl IntoView {
    let avatar = Avatar::for_name(user.username.as_deref());
    let email = text(user.email.as_deref());
    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card user-card h-100">
                <div class="card-body">
                    <div class="d-flex align-items-start mb-3">
                        <div class="user-avatar me-3" style={avatar_style(&avatar)}>
                            {avatar.initial.clone()}
                        </div>
                        <div class="flex-grow-1">
                            <h5 class="card-title mb-1">{text(user.display_name())}</h5>
                            <span class="badge bg-secondary user-id-badge">
                                {format!("ID: {}", user.display_id().unwrap_or_default())}
                            </span>
                        </div>
                    </div>
                    <div class="user-details">
                        <div class="detail-item">
                            <span class="detail-icon">"📧"</span>
                            <a href={format!("mailto:{}", email)} class="detail-text">{email.clone()}</a>
                        </div>
                        <div class="detail-item">
                            <span class="detail-icon">"👥"</span>
                            {team_badge(user, "No Team Assigned", "text-muted detail-text")}
                        </div>
                    </div>
                </div>
                <div class="card-footer bg-transparent border-0">
                    <button class="btn btn-sm btn-outline-primary w-100">"View Profile"</button>
                </div>
            </div>
        </div>
    }
}

fn table(users: &[&User], query: &str) -> AnyView {
    let rows = if users.is_empty() {
        view! {
            <tr>
                <td colspan="4" class="no-data">{no_match(query)}</td>
            </tr>
        }
        .into_any()
    } else {
        users.iter().map(|user| table_row(user)).collect_view().into_any()
    };

    view! {
        <div class="table-responsive">
            <table class="table table-hover users-table">
                <thead>
                    <tr>
                        <th scope="col">"User"</th>
                        <th scope="col">"Email"</th>
                        <th scope="col">"Team"</th>
                        <th scope="col">"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn table_row(user: &User) -> impl IntoView {
    let avatar = Avatar::for_name(user.username.as_deref());
    let email = text(user.email.as_deref());
    view! {
        <tr>
            <td>
                <div class="d-flex align-items-center">
                    <div class="user-avatar-small me-2" style={avatar_style(&avatar)}>
                        {avatar.initial.clone()}
                    </div>
                    <div>
                        <strong>{text(user.display_name())}</strong>
                        <br />
                        <small class="text-muted">
                            {format!("ID: {}", user.display_id().unwrap_or_default())}
                        </small>
                    </div>
                </div>
            </td>
            <td>
                <a href={format!("mailto:{}", email)} class="text-decoration-none">{email.clone()}</a>
            </td>
            <td>{team_badge(user, "No Team", "text-muted")}</td>
            <td>
                <button class="btn btn-sm btn-outline-primary">"View"</button>
            </td>
        </tr>
    }
}
