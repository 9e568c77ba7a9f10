//! User record as returned by `/api/users/`.

use serde::Deserialize;

use super::lenient::{self, first_non_empty};
use crate::view::Resource;

/// OctoFit user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    /// Numeric user ID
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    /// Document ID used by the Mongo-backed API when `id` is absent
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub username: Option<String>,
    /// Display name (fallback when `username` is absent)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    /// Team reference (name or id, not resolved)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub team: Option<String>,
    /// Denormalized team name
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub team_name: Option<String>,
}

impl User {
    /// ID shown on cards: numeric id, else the document id.
    pub fn display_id(&self) -> Option<String> {
        self.id
            .map(|id| id.to_string())
            .or_else(|| self.object_id.clone())
    }

    /// Name shown on cards and used for the avatar.
    pub fn display_name(&self) -> Option<&str> {
        first_non_empty([self.username.as_deref(), self.name.as_deref()])
    }

    /// Team label: `team_name`, else `team`.
    pub fn team_label(&self) -> Option<&str> {
        first_non_empty([self.team_name.as_deref(), self.team.as_deref()])
    }
}

impl Resource for User {
    const PATH: &'static str = "users";
    const NOUN: &'static str = "users";
    const LABEL: &'static str = "Users";
}
