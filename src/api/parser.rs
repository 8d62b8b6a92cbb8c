//! Response parsing.
//!
//! Success bodies are deserialized into our wire records; error bodies are
//! read with notion-client's error object and mapped onto `NotionErrorCode`.

use super::client::ApiResponse;
use super::types::PaginatedResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{BlockRecord, DocumentRecord};
use notion_client::objects::error::Error as NotionError;
use reqwest::StatusCode;

/// Parse any Notion API response, success or error.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::Deserialization {
            url: url.to_string(),
            source: e,
            body: preview(body),
        }
    })
}

/// Maps an error body onto `AppError::NotionService`, falling back to the
/// HTTP status when the body is not a Notion error object.
fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
            request_id: notion_error.request_id,
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
        request_id: None,
    }
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        let cut = (0..=ERROR_BODY_PREVIEW_LENGTH)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

/// Parse a `pages/{id}` response.
pub fn parse_document_response(result: ApiResponse<String>) -> Result<DocumentRecord, AppError> {
    parse_api_response(result)
}

/// Parse one page of a database query.
pub fn parse_documents_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<DocumentRecord>, AppError> {
    parse_api_response(result)
}

/// Parse one page of block children.
pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<BlockRecord>, AppError> {
    parse_api_response(result)
}
