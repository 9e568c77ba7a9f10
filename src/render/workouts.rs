// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout suggestion cards.

use super::format::difficulty_color;
use super::{badge, number, text, ListPage, Nav};
use crate::models::Workout;
use leptos::prelude::*;

impl ListPage for Workout {
    const NAV: Nav = Nav::Workouts;
    const HEADING: &'static str = "💪 Workout Suggestions";
    const SUBTITLE: &'static str = "Personalized workout plans for your fitness goals";

    fn render_records(records: &[Self]) -> AnyView {
        let cards = if records.is_empty() {
            view! {
                <div class="col-12">
                    <p class="no-data">"No workouts found"</p>
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

fn card(workout: &Workout) -> impl IntoView {
    let difficulty = workout.difficulty_label();
    view! {
        <div class="col-md-6 mb-4">
            <div class="card h-100">
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title">{format!("💪 {}", text(workout.name.as_deref()))}</h5>
                    <p class="card-text flex-grow-1">{text(workout.description.as_deref())}</p>
                    <div class="mt-auto">
                        <div class="mb-2">
                            {badge("bg-info me-2", text(workout.kind()))}
                            {badge("bg-primary me-2", format!("{} min", number(workout.duration)))}
                            {badge(difficulty_color(difficulty).class(), text(difficulty))}
                        </div>
                    </div>
                </div>
                <div class="card-footer bg-transparent border-0">
                    <button class="btn btn-sm btn-primary w-100">"Start Workout"</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(difficulty: &str) -> Workout {
        Workout {
            name: Some("Plank Ladder".to_string()),
            workout_type: Some("Strength".to_string()),
            duration: Some(15),
            difficulty_level: Some(difficulty.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_difficulty_badge_class() {
        let html = Workout::render_records(&[workout("ADVANCED")]).to_html();
        assert!(html.contains(r#"<span class="badge bg-danger">ADVANCED</span>"#));

        let html = Workout::render_records(&[workout("extreme")]).to_html();
        assert!(html.contains(r#"<span class="badge bg-secondary">extreme</span>"#));
    }

    #[test]
    fn test_card_details() {
        let html = Workout::render_records(&[workout("beginner")]).to_html();
        assert!(html.contains("💪 Plank Ladder"));
        assert!(html.contains(r#"<span class="badge bg-info me-2">Strength</span>"#));
        assert!(html.contains("15 min"));
        assert!(html.contains("bg-success"));
    }

    #[test]
    fn test_empty_placeholder() {
        assert!(Workout::render_records(&[]).to_html().contains("No workouts found"));
    }
}
