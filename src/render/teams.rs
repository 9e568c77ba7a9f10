// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team cards.

use super::{badge, text, ListPage, Nav};
use crate::models::Team;
use leptos::prelude::*;

impl ListPage for Team {
    const NAV: Nav = Nav::Teams;
    const HEADING: &'static str = "👥 Teams";
    const SUBTITLE: &'static str = "Join a team and compete together";

    fn render_records(records: &[Self]) -> AnyView {
        let cards = if records.is_empty() {
            view! {
                <div class="col-12">
                    <p class="no-data">"No teams found"</p>
                </div>
            }
            .into_any()
        } else {
            records.iter().map(card).collect_view().into_any()
        };

        view! {
            <div class="p-4 bg-white rounded-bottom shadow-sm">
                <div class="row">{cards}</div>
            </div>
        }
        .into_any()
    }
}

fn card(team: &Team) -> impl IntoView {
    view! {
        <div class="col-md-4 mb-4">
            <div class="card h-100">
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{format!("👥 {}", text(team.name.as_deref()))}</h5>
                    <p class="card-text flex-grow-1">{text(team.description.as_deref())}</p>
                    <div class="mt-auto">
                        {badge("bg-primary", format!("{} Members", team.member_total()))}
                    </div>
                </div>
                <div class="card-footer bg-transparent border-0">
                    <button class="btn btn-sm btn-outline-primary w-100">"View Team"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_placeholder() {
        assert!(Team::render_records(&[]).to_html().contains("No teams found"));
    }

    #[test]
    fn test_member_count_fallback_rendered() {
        let team = Team {
            name: Some("Team DC".to_string()),
            description: Some("Justice & friends".to_string()),
            members: Some(json!(["a@x.com", "b@x.com"])),
            ..Default::default()
        };
        let html = Team::render_records(&[team]).to_html();
        assert!(html.contains("👥 Team DC"));
        assert!(html.contains("Justice &amp; friends"));
        assert!(html.contains("2 Members"));
        assert_eq!(html.matches("card-title").count(), 1);
    }
}
