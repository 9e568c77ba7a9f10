// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout suggestion as returned by `/api/workouts/`.

use serde::Deserialize;

use super::lenient::{self, first_non_empty};
use crate::view::Resource;

/// A suggested workout plan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Workout {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub workout_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub activity_type: Option<String>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub duration: Option<i64>,
    /// beginner / intermediate / advanced
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub difficulty_level: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub difficulty: Option<String>,
}

impl Workout {
    /// Workout type, falling back to the backend's `activity_type`.
    pub fn kind(&self) -> Option<&str> {
        first_non_empty([self.workout_type.as_deref(), self.activity_type.as_deref()])
    }

    /// Difficulty level as sent by the API.
    pub fn difficulty_label(&self) -> Option<&str> {
        first_non_empty([self.difficulty_level.as_deref(), self.difficulty.as_deref()])
    }
}

impl Resource for Workout {
    const PATH: &'static str = "workouts";
    const NOUN: &'static str = "workouts";
    const LABEL: &'static str = "Workouts";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_workout() {
        let workout: Workout = serde_json::from_value(json!({
            "id": 3,
            "name": "Morning HIIT",
            "description": "Short and sharp",
            "workout_type": "Cardio",
            "duration": 20,
            "difficulty_level": "Advanced"
        }))
        .unwrap();
        assert_eq!(workout.kind(), Some("Cardio"));
        assert_eq!(workout.difficulty_label(), Some("Advanced"));
    }

    #[test]
    fn test_backend_shape_fallbacks() {
        let workout: Workout = serde_json::from_value(json!({
            "name": "Hero Run",
            "activity_type": "Running",
            "difficulty": "Medium",
            "exercises": ["warmup", "sprints"]
        }))
        .unwrap();
        assert_eq!(workout.kind(), Some("Running"));
        assert_eq!(workout.difficulty_label(), Some("Medium"));
    }
}
