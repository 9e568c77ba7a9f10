// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team record as returned by `/api/teams/`.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;
use crate::view::Resource;

/// A team users compete in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(default, rename = "_id", deserialize_with = "lenient::opt_string")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub member_count: Option<i64>,
    /// Member list (any element shape); only its length is used
    #[serde(default)]
    pub members: Option<Value>,
}

impl Team {
    /// Number of members: `member_count` when non-zero, else the length of
    /// the `members` list, else zero.
    pub fn member_total(&self) -> i64 {
        match self.member_count {
            Some(count) if count != 0 => count,
            _ => self
                .members
                .as_ref()
                .and_then(Value::as_array)
                .map(|members| members.len() as i64)
                .unwrap_or(0),
        }
    }
}

impl Resource for Team {
    const PATH: &'static str = "teams";
    const NOUN: &'static str = "teams";
    const LABEL: &'static str = "Teams";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn team(value: Value) -> Team {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_member_count_wins() {
        let t = team(json!({"name": "Marvel", "member_count": 5, "members": [1, 2]}));
        assert_eq!(t.member_total(), 5);
    }

    #[test]
    fn test_members_list_fallback() {
        let t = team(json!({"name": "DC", "members": ["a@x.com", "b@x.com", "c@x.com"]}));
        assert_eq!(t.member_total(), 3);

        // Zero count falls through to the list, like a falsy count would
        let t = team(json!({"member_count": 0, "members": ["a@x.com"]}));
        assert_eq!(t.member_total(), 1);
    }

    #[test]
    fn test_no_member_information() {
        assert_eq!(team(json!({"name": "Solo"})).member_total(), 0);
        assert_eq!(team(json!({"members": "not a list"})).member_total(), 0);
    }
}
