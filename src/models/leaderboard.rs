// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Leaderboard entry as returned by `/api/leaderboard/`.
//!
//! Rank is positional: the API returns entries in rank order and the page
//! numbers them by index. Any `rank` field in the payload is ignored.

use serde::Deserialize;

use super::lenient::{self, first_non_empty};
use crate::view::Resource;

/// One row of the leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub user_id: Option<i64>,
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_calories: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub total_activities: Option<i64>,
}

impl LeaderboardEntry {
    /// Name shown in the user column.
    pub fn display_name(&self) -> Option<&str> {
        first_non_empty([
            self.user_name.as_deref(),
            self.username.as_deref(),
            self.user_email.as_deref(),
        ])
    }

    /// Total calories, defaulting to zero.
    pub fn calories(&self) -> i64 {
        self.total_calories.unwrap_or(0)
    }

    /// Total activities, defaulting to zero.
    pub fn activities(&self) -> i64 {
        self.total_activities.unwrap_or(0)
    }
}

impl Resource for LeaderboardEntry {
    const PATH: &'static str = "leaderboard";
    const NOUN: &'static str = "leaderboard";
    const LABEL: &'static str = "Leaderboard";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_to_zero() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({"username": "ana"})).unwrap();
        assert_eq!(entry.display_name(), Some("ana"));
        assert_eq!(entry.calories(), 0);
        assert_eq!(entry.activities(), 0);
    }

    #[test]
    fn test_user_name_preferred() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({
            "user_id": 4,
            "user_name": "Natasha",
            "username": "blackwidow",
            "total_calories": 1200,
            "total_activities": 6,
            "rank": 9
        }))
        .unwrap();
        assert_eq!(entry.display_name(), Some("Natasha"));
        assert_eq!(entry.calories(), 1200);
        assert_eq!(entry.activities(), 6);
    }
}
