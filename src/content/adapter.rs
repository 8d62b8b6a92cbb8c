//! Content adapter: fetches posts from the repository and normalizes them.

use super::{ContentError, ContentResult};
use crate::api::{CollectionQuery, ContentRepository};
use crate::model::{BlockRecord, DocumentRecord, PostSummary};
use crate::types::{CollectionId, DocumentId};
use std::sync::Arc;

/// Adapter knobs resolved from configuration.
#[derive(Debug, Clone, Default)]
pub struct AdapterSettings {
    /// Database holding the posts. `None` leaves the index empty.
    pub collection: Option<CollectionId>,
    /// Pages of children to fetch per document; `None` follows every cursor.
    pub block_page_limit: Option<u32>,
}

/// Reads posts through a `ContentRepository`.
///
/// Stateless apart from the shared, read-only repository handle; every call
/// goes to the network.
#[derive(Clone)]
pub struct ContentAdapter {
    repository: Arc<dyn ContentRepository>,
    settings: AdapterSettings,
}

impl ContentAdapter {
    pub fn new(repository: Arc<dyn ContentRepository>, settings: AdapterSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Published posts, newest first.
    ///
    /// Without a configured collection this returns
    /// `CollectionNotConfigured` without touching the network.
    pub async fn list_published_posts(&self) -> ContentResult<Vec<PostSummary>> {
        let Some(collection) = &self.settings.collection else {
            log::warn!("No collection id configured; the post index will be empty");
            return Err(ContentError::CollectionNotConfigured);
        };

        let query = CollectionQuery::published_newest_first();
        let records = self
            .repository
            .query_collection(collection, &query)
            .await
            .map_err(|source| {
                log::error!("Failed to query collection {}: {}", collection, source);
                ContentError::Unavailable {
                    operation: "listing published posts",
                    source,
                }
            })?;

        Ok(records.iter().map(PostSummary::from_record).collect())
    }

    /// Immediate child blocks of a document, in document order.
    pub async fn fetch_blocks(&self, id: &DocumentId) -> ContentResult<Vec<BlockRecord>> {
        self.repository
            .retrieve_children(id, self.settings.block_page_limit)
            .await
            .map_err(|source| {
                log::error!("Failed to fetch blocks of {}: {}", id, source);
                ContentError::Unavailable {
                    operation: "fetching child blocks",
                    source,
                }
            })
    }

    /// The raw page record, or `None` when Notion does not know the id.
    pub async fn fetch_document(&self, id: &DocumentId) -> ContentResult<Option<DocumentRecord>> {
        match self.repository.retrieve_document(id).await {
            Ok(record) => Ok(Some(record)),
            Err(e) if e.is_not_found() => {
                log::info!("Document {} not found", id);
                Ok(None)
            }
            Err(source) => {
                log::error!("Failed to fetch document {}: {}", id, source);
                Err(ContentError::Unavailable {
                    operation: "fetching document properties",
                    source,
                })
            }
        }
    }
}
