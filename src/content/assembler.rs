//! Document assembler: properties and blocks in, one render-ready post out.

use super::adapter::ContentAdapter;
use super::record_map::RecordMap;
use super::ContentError;
use crate::model::DocumentProperties;
use crate::types::DocumentId;

/// A post ready for the document page.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDocument {
    pub id: DocumentId,
    pub properties: DocumentProperties,
    pub record_map: RecordMap,
}

/// Why a document page cannot be rendered.
#[derive(Debug)]
pub enum NotFoundReason {
    /// Notion does not know the id.
    MissingDocument,
    /// The document exists but has no child blocks.
    NoBlocks,
    /// One of the two fetches failed.
    Unavailable(ContentError),
}

#[derive(Debug)]
pub enum DocumentOutcome {
    Ready(Box<AssembledDocument>),
    NotFound(NotFoundReason),
}

#[derive(Clone)]
pub struct DocumentAssembler {
    adapter: ContentAdapter,
}

impl DocumentAssembler {
    pub fn new(adapter: ContentAdapter) -> Self {
        Self { adapter }
    }

    /// Fetches properties and blocks concurrently and merges them.
    ///
    /// A missing document and an empty block list each yield `NotFound` on
    /// their own. Fetch failures do too; nothing escapes as an error.
    pub async fn assemble(&self, id: &DocumentId) -> DocumentOutcome {
        let (document, blocks) = tokio::join!(
            self.adapter.fetch_document(id),
            self.adapter.fetch_blocks(id)
        );

        let record = match document {
            Ok(Some(record)) => record,
            Ok(None) => return DocumentOutcome::NotFound(NotFoundReason::MissingDocument),
            Err(e) => return DocumentOutcome::NotFound(NotFoundReason::Unavailable(e)),
        };

        let blocks = match blocks {
            Ok(blocks) if blocks.is_empty() => {
                log::info!("Document {} has no blocks; treating it as not found", id);
                return DocumentOutcome::NotFound(NotFoundReason::NoBlocks);
            }
            Ok(blocks) => blocks,
            Err(e) => return DocumentOutcome::NotFound(NotFoundReason::Unavailable(e)),
        };

        let record_map = RecordMap::build(&record, &blocks);
        let properties = DocumentProperties::from_record(&record);
        log::debug!(
            "Assembled '{}' ({}) with {} records",
            properties.title,
            id,
            record_map.block.len()
        );

        DocumentOutcome::Ready(Box::new(AssembledDocument {
            id: id.clone(),
            properties,
            record_map,
        }))
    }
}
