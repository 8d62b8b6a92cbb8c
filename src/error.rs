// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each variant tells what went wrong and where; request handling turns
//! them into degraded renderings rather than propagating them to visitors.

use std::fmt;
use thiserror::Error;

/// Error code from a Notion error body.
///
/// Only "not found" changes what the blog renders; every other code is
/// carried through for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// `object_not_found`: unknown id, or a page not shared with the integration.
    ObjectNotFound,
    /// The error body was not a Notion error object.
    HttpStatus(u16),
    /// Any other code, verbatim.
    Other(String),
}

impl NotionErrorCode {
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "object_not_found" => Self::ObjectNotFound,
            other => Self::Other(other.to_string()),
        }
    }

    /// Used when the error body is unparseable; a bare 404 still means
    /// "not found".
    pub fn from_http_status(status: u16) -> Self {
        match status {
            404 => Self::ObjectNotFound,
            other => Self::HttpStatus(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectNotFound => f.write_str("object_not_found"),
            Self::HttpStatus(status) => write!(f, "http_{}", status),
            Self::Other(code) => f.write_str(code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
        request_id: Option<String>,
    },

    #[error("Failed to deserialize response from {url}: {source}\nBody: {body}")]
    Deserialization {
        url: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Template registration failed: {0}")]
    TemplateRegistration(#[from] Box<handlebars::TemplateError>),

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether the remote service reported that the object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotionService { code, .. } if code.is_not_found())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}
