// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived state for the Users view: search filter and layout toggle.

use crate::models::User;

/// Users page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    /// Parse a `view` query value; anything unrecognized is `Cards`.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("table") {
            ViewMode::Table
        } else {
            ViewMode::Cards
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Cards => "cards",
            ViewMode::Table => "table",
        }
    }
}

/// Whether `user` matches the search query.
///
/// Case-insensitive substring match on username, email or team name; a
/// field the record does not carry never matches.
pub fn matches_query(user: &User, query: &str) -> bool {
    let needle = query.to_lowercase();
    [
        user.username.as_deref(),
        user.email.as_deref(),
        user.team_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Users matching `query`, in their original order.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_query(user, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str, team_name: Option<&str>) -> User {
        User {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            team_name: team_name.map(str::to_string),
            ..Default::default()
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("ironman", "tony@stark.com", Some("Team Marvel")),
            user("batman", "bruce@wayne.com", Some("Team DC")),
            user("ana", "ana@x.com", None),
        ]
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!(ViewMode::parse("table"), ViewMode::Table);
        assert_eq!(ViewMode::parse("TABLE"), ViewMode::Table);
        assert_eq!(ViewMode::parse("cards"), ViewMode::Cards);
        assert_eq!(ViewMode::parse("grid"), ViewMode::Cards);
        assert_eq!(ViewMode::parse(""), ViewMode::Cards);
        assert_eq!(ViewMode::default(), ViewMode::Cards);
    }

    #[test]
    fn test_empty_query_matches_everyone() {
        let users = sample();
        assert_eq!(filter_users(&users, "").len(), 3);
    }

    #[test]
    fn test_matches_each_field_case_insensitively() {
        let users = sample();

        let by_name: Vec<_> = filter_users(&users, "IRON")
            .iter()
            .filter_map(|u| u.username.as_deref())
            .collect();
        assert_eq!(by_name, vec!["ironman"]);

        let by_email: Vec<_> = filter_users(&users, "wayne.COM")
            .iter()
            .filter_map(|u| u.username.as_deref())
            .collect();
        assert_eq!(by_email, vec!["batman"]);

        let by_team: Vec<_> = filter_users(&users, "team")
            .iter()
            .filter_map(|u| u.username.as_deref())
            .collect();
        assert_eq!(by_team, vec!["ironman", "batman"]);
    }

    #[test]
    fn test_no_match() {
        let users = sample();
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_filtered_output_always_contains_query() {
        let users = sample();
        for query in ["a", "AN", ".com", "marvel", "x", "q", "@"] {
            let lower = query.to_lowercase();
            let filtered = filter_users(&users, query);
            for u in &filtered {
                let hit = [&u.username, &u.email, &u.team_name]
                    .into_iter()
                    .flatten()
                    .any(|f| f.to_lowercase().contains(&lower));
                assert!(hit, "{:?} should not match {:?}", u, query);
            }
            let excluded = users.len() - filtered.len();
            let expected_excluded = users.iter().filter(|u| !matches_query(u, query)).count();
            assert_eq!(excluded, expected_excluded);
        }
    }

    #[test]
    fn test_team_reference_without_name_is_not_searched() {
        let users = vec![User {
            username: Some("solo".to_string()),
            team: Some("Team Marvel".to_string()),
            ..Default::default()
        }];
        assert!(filter_users(&users, "marvel").is_empty());
    }

    #[test]
    fn test_record_without_search_fields_never_matches() {
        let users = vec![User {
            id: Some(9),
            ..Default::default()
        }];
        assert!(filter_users(&users, "").is_empty());
    }
}
