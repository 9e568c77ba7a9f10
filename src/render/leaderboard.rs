// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard table. Rank comes from list position, not from the entry.

use super::format::RankBadge;
use super::{badge, text, ListPage, Nav};
use crate::models::LeaderboardEntry;
use leptos::prelude::*;

/// Rows at or above this index get the podium highlight.
const PODIUM: usize = 3;

impl ListPage for LeaderboardEntry {
    const NAV: Nav = Nav::Leaderboard;
    const HEADING: &'static str = "🏆 Leaderboard";
    const SUBTITLE: &'static str = "Top performers in the OctoFit community";

    fn render_records(records: &[Self]) -> AnyView {
        let rows = if records.is_empty() {
            view! {
                <tr>
                    <td colspan="4" class="no-data">"No leaderboard data found"</td>
                </tr>
            }
            .into_any()
        } else {
            records
                .iter()
                .enumerate()
                .map(|(index, entry)| row(index, entry))
                .collect_view()
                .into_any()
        };

        view! {
            <div class="table-container">
                <div class="table-responsive">
                    <table class="table table-hover">
                        <thead>
                            <tr>
                                <th scope="col">"Rank"</th>
                                <th scope="col">"User"</th>
                                <th scope="col">"Total Calories"</th>
                                <th scope="col">"Activities"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    }
}

fn row(index: usize, entry: &LeaderboardEntry) -> impl IntoView {
    let class = if index < PODIUM { "table-light" } else { "" };
    view! {
        <tr class=class>
            <td>
                <h5 class="mb-0">{RankBadge::for_index(index).to_string()}</h5>
            </td>
            <td>
                <strong>{text(entry.display_name())}</strong>
            </td>
            <td>{badge("bg-danger", format!("{} cal", entry.calories()))}</td>
            <td>{badge("bg-primary", entry.activities().to_string())}</td>
        </tr>
    }
}
