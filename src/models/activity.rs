// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity log record as returned by `/api/activities/`.

use serde::Deserialize;

use super::lenient::{self, first_non_empty};
use crate::view::Resource;

/// A logged fitness activity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    /// User reference (name or id)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user: Option<String>,
    /// Denormalized user name
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_name: Option<String>,
    /// Owner email, used when no user name is available
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_email: Option<String>,
    /// Activity type (Running, Cycling, ...)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub activity_type: Option<String>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub calories_burned: Option<i64>,
    /// Calories under the backend's field name
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub calories: Option<i64>,
    /// Activity date (ISO 8601)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
}

impl Activity {
    /// ID badge: numeric id, else the document id.
    pub fn display_id(&self) -> Option<String> {
        self.id
            .map(|id| id.to_string())
            .or_else(|| self.object_id.clone())
    }

    /// Who performed the activity.
    pub fn user_label(&self) -> Option<&str> {
        first_non_empty([
            self.user_name.as_deref(),
            self.user.as_deref(),
            self.user_email.as_deref(),
        ])
    }

    /// Calories burned, from whichever field the API populated.
    pub fn calories(&self) -> Option<i64> {
        self.calories_burned.or(self.calories)
    }
}

impl Resource for Activity {
    const PATH: &'static str = "activities";
    const NOUN: &'static str = "activities";
    const LABEL: &'static str = "Activities";
}
