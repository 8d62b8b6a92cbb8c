//! The record map: a document and its child blocks keyed by id.

use crate::model::{BlockRecord, DocumentRecord};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Access role attached to every entry; the blog only ever reads.
pub const READER_ROLE: &str = "reader";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordEntry {
    pub value: Value,
    pub role: &'static str,
}

impl RecordEntry {
    fn reader(value: Value) -> Self {
        Self {
            value,
            role: READER_ROLE,
        }
    }
}

/// Id-keyed merge of a document with its child blocks.
///
/// `block` holds the document under its own id plus one entry per child.
/// The collection-related maps are part of the shape renderers expect and
/// are always empty. `content` keeps the children's document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordMap {
    pub block: IndexMap<String, RecordEntry>,
    pub collection: IndexMap<String, RecordEntry>,
    pub collection_view: IndexMap<String, RecordEntry>,
    pub notion_user: IndexMap<String, RecordEntry>,
    pub collection_query: IndexMap<String, Value>,
    pub signed_urls: IndexMap<String, String>,
    pub content: Vec<String>,
}

impl RecordMap {
    /// Builds the map. The document entry is inserted first and is never
    /// replaced: a child whose id collides with an existing key is dropped.
    pub fn build(document: &DocumentRecord, blocks: &[BlockRecord]) -> Self {
        let mut map = RecordMap::default();
        map.block
            .insert(document.id.clone(), RecordEntry::reader(document.to_value()));

        for block in blocks {
            if map.block.contains_key(&block.id) {
                log::warn!(
                    "Block id {} collides with an existing record in document {}; skipping it",
                    block.id,
                    document.id
                );
                continue;
            }
            map.block
                .insert(block.id.clone(), RecordEntry::reader(block.raw.clone()));
            map.content.push(block.id.clone());
        }

        map
    }

    pub fn get(&self, id: &str) -> Option<&RecordEntry> {
        self.block.get(id)
    }

    /// Child blocks in document order.
    pub fn child_blocks(&self) -> Vec<BlockRecord> {
        self.content
            .iter()
            .filter_map(|id| self.get(id))
            .filter_map(|entry| BlockRecord::from_value(entry.value.clone()))
            .collect()
    }
}
