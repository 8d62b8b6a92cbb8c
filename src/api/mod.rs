// src/api/mod.rs
//! Notion API interaction: the ability to read posts from a workspace.
//!
//! This module separates I/O (`client`), parsing (`parser`) and request
//! shapes (`query`). Everything above it depends on `ContentRepository`,
//! never on HTTP details.

pub mod client;
pub mod parser;
pub mod query;
mod simple_pagination;
pub mod types;

use crate::error::AppError;
use crate::model::{BlockRecord, DocumentRecord};
use crate::types::{CollectionId, DocumentId};

/// The three call shapes the blog consumes from Notion.
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    /// Queries a database with a filter and sort, following every cursor.
    async fn query_collection(
        &self,
        collection: &CollectionId,
        query: &query::CollectionQuery,
    ) -> Result<Vec<DocumentRecord>, AppError>;

    /// Lists a block's immediate children, `max_pages` pages at most
    /// (`None` follows every cursor).
    async fn retrieve_children(
        &self,
        parent: &DocumentId,
        max_pages: Option<u32>,
    ) -> Result<Vec<BlockRecord>, AppError>;

    /// Retrieves one page record by id.
    async fn retrieve_document(&self, id: &DocumentId) -> Result<DocumentRecord, AppError>;
}

pub use client::NotionHttpClient;
pub use query::CollectionQuery;
