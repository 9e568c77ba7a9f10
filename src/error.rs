// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for API fetches and server responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Failure while fetching a resource list from the OctoFit API.
///
/// Views collapse every variant into its display string; nothing downstream
/// distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl FetchError {
    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Server-level error that converts to an HTML response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(path) => {
                tracing::debug!(path = %path, "Page not found");
                (StatusCode::NOT_FOUND, crate::render::not_found(path))
            }
        };

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = FetchError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(FetchError::Network("refused".into()).status(), None);
        assert_eq!(FetchError::Parse("eof".into()).status(), None);
    }

    #[test]
    fn test_not_found_response() {
        let response = AppError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
