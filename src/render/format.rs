// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-field formatting helpers shared by the page renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Avatar background colors, indexed by the first character's code.
pub const AVATAR_PALETTE: [&str; 6] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a",
];

/// Initial shown for users without a name.
pub const PLACEHOLDER_INITIAL: &str = "?";

/// Leaderboard rank marker for a 1-indexed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Position(usize),
}

impl RankBadge {
    /// Badge for a 0-based list index.
    pub fn for_index(index: usize) -> Self {
        match index + 1 {
            1 => RankBadge::Gold,
            2 => RankBadge::Silver,
            3 => RankBadge::Bronze,
            rank => RankBadge::Position(rank),
        }
    }
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBadge::Gold => f.write_str("🥇"),
            RankBadge::Silver => f.write_str("🥈"),
            RankBadge::Bronze => f.write_str("🥉"),
            RankBadge::Position(rank) => write!(f, "{}", rank),
        }
    }
}

/// Badge color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Success,
    Warning,
    Danger,
    Secondary,
}

impl BadgeColor {
    /// Bootstrap background class (`bg-success`, ...).
    pub fn class(&self) -> &'static str {
        match self {
            BadgeColor::Success => "bg-success",
            BadgeColor::Warning => "bg-warning",
            BadgeColor::Danger => "bg-danger",
            BadgeColor::Secondary => "bg-secondary",
        }
    }
}

/// Color for a workout difficulty level (case-insensitive).
pub fn difficulty_color(level: Option<&str>) -> BadgeColor {
    match level.map(|l| l.trim().to_lowercase()).as_deref() {
        Some("beginner") => BadgeColor::Success,
        Some("intermediate") => BadgeColor::Warning,
        Some("advanced") => BadgeColor::Danger,
        _ => BadgeColor::Secondary,
    }
}

/// Avatar initial and background color for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub initial: String,
    pub color: &'static str,
}

impl Avatar {
    pub fn for_name(name: Option<&str>) -> Self {
        match name.and_then(|n| n.chars().next()) {
            Some(first) => Avatar {
                initial: first.to_uppercase().collect(),
                // Indexed by the leading UTF-16 code unit (the high
                // surrogate outside the BMP).
                color: AVATAR_PALETTE[utf16_lead(first) as usize % AVATAR_PALETTE.len()],
            },
            None => Avatar {
                initial: PLACEHOLDER_INITIAL.to_string(),
                color: AVATAR_PALETTE[0],
            },
        }
    }
}

fn utf16_lead(c: char) -> u16 {
    let mut buf = [0u16; 2];
    c.encode_utf16(&mut buf)[0]
}

/// Format an activity date as `M/D/YYYY`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps and
/// plain `YYYY-MM-DD` dates; anything else is `Invalid Date`.
///
/// Dates are calendar days in UTC: timestamps with an offset are converted
/// first, naive timestamps are taken as already being UTC.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
