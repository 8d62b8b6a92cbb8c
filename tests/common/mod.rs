// tests/common/mod.rs
//! Shared helpers for the integration tests: an in-memory repository and
//! fixture loaders.
#![allow(dead_code)]

use notion_blog::api::query::CollectionQuery;
use notion_blog::{
    AdapterSettings, AppError, BlockRecord, CollectionId, ContentAdapter, ContentRepository,
    DocumentId, DocumentRecord, NotionErrorCode, PropertyBag,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const COLLECTION: &str = "a1b2c3d4-e5f6-7890-abcd-ef1234567890";
pub const API_KEY: &str = "secret_test_key_123456789";

pub fn fixture(name: &str) -> Value {
    let path = format!(
        "{}/tests/fixtures/api_responses/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    let text = std::fs::read_to_string(&path).expect("fixture should exist");
    serde_json::from_str(&text).expect("fixture should be valid JSON")
}

/// A canned repository response.
#[derive(Clone)]
pub enum Canned<T> {
    Ok(T),
    NotFound,
    Fail,
}

impl<T: Clone> Canned<T> {
    fn produce(&self) -> Result<T, AppError> {
        match self {
            Canned::Ok(value) => Ok(value.clone()),
            Canned::NotFound => Err(not_found_error()),
            Canned::Fail => Err(AppError::NotionService {
                code: NotionErrorCode::from_api_response("service_unavailable"),
                message: "upstream down".to_string(),
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                request_id: None,
            }),
        }
    }
}

pub fn not_found_error() -> AppError {
    AppError::NotionService {
        code: NotionErrorCode::ObjectNotFound,
        message: "Could not find page".to_string(),
        status: reqwest::StatusCode::NOT_FOUND,
        request_id: Some("req-1".to_string()),
    }
}

/// In-memory `ContentRepository` that counts calls and records arguments.
pub struct FakeRepository {
    pub collection: Canned<Vec<DocumentRecord>>,
    pub children: Canned<Vec<BlockRecord>>,
    pub document: Canned<DocumentRecord>,
    pub query_calls: AtomicUsize,
    pub children_calls: AtomicUsize,
    pub document_calls: AtomicUsize,
    pub last_query: Mutex<Option<Value>>,
    pub last_max_pages: Mutex<Option<Option<u32>>>,
}

impl FakeRepository {
    pub fn new(
        collection: Canned<Vec<DocumentRecord>>,
        children: Canned<Vec<BlockRecord>>,
        document: Canned<DocumentRecord>,
    ) -> Self {
        Self {
            collection,
            children,
            document,
            query_calls: AtomicUsize::new(0),
            children_calls: AtomicUsize::new(0),
            document_calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
            last_max_pages: Mutex::new(None),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
            + self.children_calls.load(Ordering::SeqCst)
            + self.document_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ContentRepository for FakeRepository {
    async fn query_collection(
        &self,
        _collection: &CollectionId,
        query: &CollectionQuery,
    ) -> Result<Vec<DocumentRecord>, AppError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(serde_json::to_value(query).unwrap());
        self.collection.produce()
    }

    async fn retrieve_children(
        &self,
        _parent: &DocumentId,
        max_pages: Option<u32>,
    ) -> Result<Vec<BlockRecord>, AppError> {
        self.children_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_max_pages.lock().unwrap() = Some(max_pages);
        self.children.produce()
    }

    async fn retrieve_document(&self, _id: &DocumentId) -> Result<DocumentRecord, AppError> {
        self.document_calls.fetch_add(1, Ordering::SeqCst);
        self.document.produce()
    }
}

pub fn settings(collection: bool) -> AdapterSettings {
    AdapterSettings {
        collection: collection.then(|| CollectionId::parse(COLLECTION).unwrap()),
        block_page_limit: None,
    }
}

pub fn adapter(repository: Arc<FakeRepository>, collection: bool) -> ContentAdapter {
    ContentAdapter::new(repository, settings(collection))
}

pub fn paragraph(id: &str, text: &str) -> BlockRecord {
    BlockRecord::from_value(json!({
        "object": "block",
        "id": id,
        "type": "paragraph",
        "has_children": false,
        "paragraph": { "rich_text": [{ "type": "text", "plain_text": text }] }
    }))
    .unwrap()
}

pub fn record(id: &str, properties: Value) -> DocumentRecord {
    DocumentRecord::new(id, PropertyBag::from(properties))
}

pub fn title_property(text: &str) -> Value {
    json!({ "type": "title", "title": [{ "type": "text", "plain_text": text }] })
}
