// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation shell shared by every page.

use leptos::prelude::*;

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Users,
    Activities,
    Teams,
    Leaderboard,
    Workouts,
}

impl Nav {
    /// Entries shown in the navbar, in order.
    pub const LINKS: [Nav; 5] = [
        Nav::Users,
        Nav::Activities,
        Nav::Teams,
        Nav::Leaderboard,
        Nav::Workouts,
    ];

    pub fn href(&self) -> &'static str {
        match self {
            Nav::Home => "/",
            Nav::Users => "/users",
            Nav::Activities => "/activities",
            Nav::Teams => "/teams",
            Nav::Leaderboard => "/leaderboard",
            Nav::Workouts => "/workouts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nav::Home => "Home",
            Nav::Users => "Users",
            Nav::Activities => "Activities",
            Nav::Teams => "Teams",
            Nav::Leaderboard => "Leaderboard",
            Nav::Workouts => "Workouts",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Nav::Home => "🏋️",
            Nav::Users => "👤",
            Nav::Activities => "🏃",
            Nav::Teams => "👥",
            Nav::Leaderboard => "🏆",
            Nav::Workouts => "💪",
        }
    }
}

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Wrap page content in the document and navbar.
pub fn page(active: Nav, title: &str, content: AnyView) -> String {
    let title = format!("{} | OctoFit Tracker", title);
    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href=BOOTSTRAP_CSS />
            </head>
            <body>
                <div class="App">
                    <NavBar active=active />
                    <div class="container-fluid">{content}</div>
                </div>
            </body>
        </html>
    };
    format!("<!DOCTYPE html>{}", document.to_html())
}

#[component]
fn NavBar(active: Nav) -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand-lg navbar-custom">
            <div class="container-fluid px-4">
                <a class="navbar-brand d-flex align-items-center" href="/">
                    <span class="brand-text">"OctoFit Tracker"</span>
                </a>
                <ul class="navbar-nav ms-auto">
                    {Nav::LINKS
                        .into_iter()
                        .map(|nav| {
                            let class = if nav == active { "nav-link active" } else { "nav-link" };
                            view! {
                                <li class="nav-item">
                                    <a class=class href={nav.href()}>
                                        <span class="nav-icon">{nav.icon()}</span>
                                        {format!(" {}", nav.label())}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

/// Landing page body.
#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="welcome-section">
            <h1>{format!("{} Welcome to OctoFit Tracker", Nav::Home.icon())}</h1>
            <p class="lead">"Track your fitness journey with your team!"</p>
            <p class="text-muted">"Select a section from the navigation menu to get started."</p>
            <div class="mt-4">
                <a href={Nav::Activities.href()} class="btn btn-primary btn-lg me-2 mb-2">
                    "View Activities"
                </a>
                <a href={Nav::Leaderboard.href()} class="btn btn-outline-primary btn-lg mb-2">
                    "Check Leaderboard"
                </a>
            </div>
        </div>
    }
}

/// 404 page body.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class="container mt-4">
            <div class="card">
                <div class="card-body">
                    <h1>"404 - Page Not Found"</h1>
                    <p>"No page at "<code>{path}</code></p>
                    <a href="/" class="btn btn-primary">"Back to OctoFit"</a>
                </div>
            </div>
        </div>
    }
}
