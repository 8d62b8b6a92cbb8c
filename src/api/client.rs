//! HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest: authentication headers, request logging
//! and the three call shapes the blog consumes. Parsing lives in `parser`.

use super::query::CollectionQuery;
use super::simple_pagination::fetch_all_pages_simple;
use super::{parser, ContentRepository};
use crate::constants::{NOTION_API_BASE_URL, NOTION_VERSION};
use crate::error::AppError;
use crate::model::{BlockRecord, DocumentRecord};
use crate::types::{ApiKey, CollectionId, DocumentId, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
///
/// Cloning is cheap and shares the connection pool. Never mutated after
/// construction.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a client for the production API.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::build(api_key, NOTION_API_BASE_URL.to_string())
    }

    /// Creates a client against another API root (a proxy or a local stub).
    pub fn with_base_url(api_key: &ApiKey, base_url: &ValidatedUrl) -> Result<Self, AppError> {
        Self::build(api_key, base_url.as_base().to_string())
    }

    fn build(api_key: &ApiKey, base_url: String) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint with query parameters.
    pub async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        log::debug!("GET {} -> {}", url, response.status());

        Ok(response)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "POST {} body: {}",
                url,
                serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
            );
        }

        let response = self.client.post(&url).json(body).send().await?;
        log::debug!("POST {} -> {}", url, response.status());

        Ok(response)
    }
}

#[async_trait::async_trait]
impl ContentRepository for NotionHttpClient {
    async fn query_collection(
        &self,
        collection: &CollectionId,
        query: &CollectionQuery,
    ) -> Result<Vec<DocumentRecord>, AppError> {
        let endpoint = format!("databases/{}/query", collection);
        let base_body = serde_json::to_value(query)?;

        let pagination_result = fetch_all_pages_simple(
            |page_size, cursor| {
                let client = self.clone();
                let endpoint = endpoint.clone();
                let mut body = base_body.clone();
                async move {
                    body["page_size"] = serde_json::json!(page_size);
                    if let Some(cursor) = cursor {
                        body["start_cursor"] = serde_json::json!(cursor);
                    }
                    let response = client.post(&endpoint, &body).await?;
                    let result = extract_response_text(response).await?;
                    parser::parse_documents_pagination(result)
                }
            },
            None,
        )
        .await?;

        log::info!(
            "📊 Collection {} returned {} documents over {} page(s)",
            collection,
            pagination_result.items.len(),
            pagination_result.pages_fetched
        );
        Ok(pagination_result.items)
    }

    async fn retrieve_children(
        &self,
        parent: &DocumentId,
        max_pages: Option<u32>,
    ) -> Result<Vec<BlockRecord>, AppError> {
        let endpoint = format!("blocks/{}/children", parent);

        let pagination_result = fetch_all_pages_simple(
            |page_size, cursor| {
                let client = self.clone();
                let endpoint = endpoint.clone();
                async move {
                    let mut query = vec![("page_size", page_size.to_string())];
                    if let Some(cursor) = cursor {
                        query.push(("start_cursor", cursor));
                    }
                    let response = client.get(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    parser::parse_blocks_pagination(result)
                }
            },
            max_pages,
        )
        .await?;

        if pagination_result.truncated {
            log::warn!(
                "Children of {} truncated after {} page(s); {} blocks kept",
                parent,
                pagination_result.pages_fetched,
                pagination_result.items.len()
            );
        }
        Ok(pagination_result.items)
    }

    async fn retrieve_document(&self, id: &DocumentId) -> Result<DocumentRecord, AppError> {
        let endpoint = format!("pages/{}", id);
        let response = self.get(&endpoint, &[]).await?;
        let result = extract_response_text(response).await?;
        parser::parse_document_response(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
