// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit REST API client.
//!
//! Every list endpoint is fetched with a single unparameterized GET. The API
//! answers either with a bare JSON array or with a pagination envelope
//! (`{"count": .., "results": [..]}`); both are normalized to a plain list.

use crate::config::Config;
use crate::error::FetchError;
use crate::view::Resource;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// OctoFit API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given API base URL (e.g.
    /// `https://name-8000.app.github.dev/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from application config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Full endpoint URL for a resource path segment, e.g. `users` ->
    /// `{base}/users/`.
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path.trim_matches('/'))
    }

    /// Fetch and decode the full list for a resource.
    pub async fn fetch<R: Resource>(&self) -> Result<Vec<R>, FetchError> {
        let items = self.fetch_list(R::PATH).await?;
        let records: Vec<R> = decode_records(items);
        tracing::debug!(resource = R::PATH, count = records.len(), "Decoded records");
        Ok(records)
    }

    /// Fetch a resource list as raw JSON records.
    pub async fn fetch_list(&self, path: &str) -> Result<Vec<Value>, FetchError> {
        let url = self.resource_url(path);
        tracing::info!(url = %url, "Fetching resource list");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Request failed");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %url, status = status.as_u16(), "API returned error status");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(url = %url, error = %e, "Response is not valid JSON");
            FetchError::Parse(e.to_string())
        })?;

        Ok(normalize_list(payload))
    }
}

/// Normalize an API payload to a list of records.
///
/// A bare array is the list; an object's `results` array is the list;
/// anything else is an empty list.
pub fn normalize_list(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Decode raw list elements into records.
///
/// Records are opaque: an element that is not an object, or an object that
/// cannot be read at all, becomes an empty record so the list keeps the
/// length the API sent.
pub fn decode_records<R: DeserializeOwned + Default>(items: Vec<Value>) -> Vec<R> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(index, "List element is not an object");
                return R::default();
            }
            serde_json::from_value(item).unwrap_or_else(|e| {
                tracing::warn!(index, error = %e, "Could not decode list element");
                R::default()
            })
        })
        .collect()
}
