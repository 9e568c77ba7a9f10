// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - external API access.

pub mod api_client;

pub use api_client::{decode_records, normalize_list, ApiClient};
