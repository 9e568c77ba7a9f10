// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity log table.

use super::format::format_date;
use super::{badge, number, text, ListPage, Nav};
use crate::models::Activity;
use leptos::prelude::*;

impl ListPage for Activity {
    const NAV: Nav = Nav::Activities;
    const HEADING: &'static str = "🏃 Activity Log";
    const SUBTITLE: &'static str = "Track all fitness activities";

    fn render_records(records: &[Self]) -> AnyView {
        let rows = if records.is_empty() {
            view! {
                <tr>
                    <td colspan="6" class="no-data">"No activities found"</td>
                </tr>
            }
            .into_any()
        } else {
            records.iter().map(row).collect_view().into_any()
        };

        view! {
            <div class="table-container">
                <div class="table-responsive">
                    <table class="table table-hover">
                        <thead>
                            <tr>
                                <th scope="col">"#"</th>
                                <th scope="col">"User"</th>
                                <th scope="col">"Activity Type"</th>
                                <th scope="col">"Duration"</th>
                                <th scope="col">"Calories"</th>
                                <th scope="col">"Date"</th>
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

fn row(activity: &Activity) -> impl IntoView {
    let date = activity.date.as_deref().map(format_date).unwrap_or_default();
    view! {
        <tr>
            <td>{badge("bg-primary", activity.display_id().unwrap_or_default())}</td>
            <td>
                <strong>{text(activity.user_label())}</strong>
            </td>
            <td>{badge("bg-info", text(activity.activity_type.as_deref()))}</td>
            <td>{format!("{} min", number(activity.duration))}</td>
            <td>{badge("bg-success", format!("{} cal", number(activity.calories())))}</td>
            <td>{date}</td>
        </tr>
    }
}
