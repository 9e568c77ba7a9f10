// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Records returned by the OctoFit API.

pub mod activity;
pub mod leaderboard;
pub mod lenient;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::User;
pub use workout::Workout;
