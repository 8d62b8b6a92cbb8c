//! Adapter and assembler behaviour against an in-memory repository.

mod common;

use common::{adapter, fixture, paragraph, record, title_property, Canned, FakeRepository};
use notion_blog::{
    BlockRecord, ContentError, ContentResultExt, DocumentAssembler, DocumentId, DocumentOutcome,
    DocumentRecord, NotFoundReason,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn published_records() -> Vec<DocumentRecord> {
    let body = fixture("database_query_published.json");
    serde_json::from_value(body["results"].clone()).unwrap()
}

fn assembler(repository: &Arc<FakeRepository>) -> DocumentAssembler {
    DocumentAssembler::new(adapter(repository.clone(), true))
}

#[tokio::test]
async fn unset_collection_lists_nothing_without_network() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(published_records()),
        Canned::Ok(vec![]),
        Canned::NotFound,
    ));
    let adapter = adapter(repository.clone(), false);

    let result = adapter.list_published_posts().await;
    assert!(matches!(result, Err(ContentError::CollectionNotConfigured)));
    assert_eq!(repository.total_calls(), 0);

    let posts = adapter.list_published_posts().await.or_empty();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn published_posts_keep_order_and_apply_fallbacks() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(published_records()),
        Canned::Ok(vec![]),
        Canned::NotFound,
    ));

    let posts = adapter(repository.clone(), true)
        .list_published_posts()
        .await
        .unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "1f2e3d4c-5b6a-4978-8a1b-2c3d4e5f6a7b");
    assert_eq!(posts[0].title, "Writing a Parser");
    assert_eq!(posts[0].description, "Tokens, trees and tears");
    assert_eq!(posts[0].reading_time_minutes, 7);

    assert_eq!(posts[1].title, "Untitled");
    assert_eq!(posts[1].description, "No description");
    assert_eq!(posts[1].reading_time_minutes, 0);

    assert_eq!(repository.query_calls.load(Ordering::SeqCst), 1);
    let query = repository.last_query.lock().unwrap().clone().unwrap();
    assert_eq!(
        query,
        json!({
            "filter": { "property": "public", "checkbox": { "equals": true } },
            "sorts": [{ "property": "Created time", "direction": "descending" }]
        })
    );
}

#[tokio::test]
async fn single_public_record_yields_single_summary() {
    let only = record(
        "p-1",
        json!({ "public": { "checkbox": true }, "Title": title_property("Only one") }),
    );
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![only]),
        Canned::Ok(vec![]),
        Canned::NotFound,
    ));

    let posts = adapter(repository, true).list_published_posts().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "p-1");
    assert_eq!(posts[0].title, "Only one");
}

#[tokio::test]
async fn provider_failure_is_reported_as_unavailable() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Fail,
        Canned::Fail,
        Canned::Fail,
    ));
    let adapter = adapter(repository, true);

    let err = adapter.list_published_posts().await.unwrap_err();
    assert!(err.is_unavailable());

    let id = DocumentId::parse("abc").unwrap();
    assert!(adapter.fetch_blocks(&id).await.unwrap_err().is_unavailable());
    assert!(adapter.fetch_document(&id).await.unwrap_err().is_unavailable());
    assert!(adapter.fetch_blocks(&id).await.or_empty().is_empty());
}

#[tokio::test]
async fn missing_document_is_none() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(vec![]),
        Canned::NotFound,
    ));
    let id = DocumentId::parse("abc").unwrap();

    let document = adapter(repository, true).fetch_document(&id).await.unwrap();
    assert!(document.is_none());
}

#[tokio::test]
async fn block_page_limit_is_passed_through() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(vec![paragraph("b1", "one")]),
        Canned::NotFound,
    ));
    let mut settings = common::settings(true);
    settings.block_page_limit = Some(1);
    let adapter = notion_blog::ContentAdapter::new(repository.clone(), settings);

    let blocks = adapter
        .fetch_blocks(&DocumentId::parse("abc").unwrap())
        .await
        .unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(*repository.last_max_pages.lock().unwrap(), Some(Some(1)));
}

#[tokio::test]
async fn untitled_document_with_blocks_is_assembled() {
    let document = record("abc", json!({ "Title": { "title": [] } }));
    let blocks = vec![
        paragraph("b1", "first"),
        paragraph("b2", "second"),
        paragraph("b3", "third"),
    ];
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(blocks),
        Canned::Ok(document),
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("abc").unwrap())
        .await;

    let DocumentOutcome::Ready(assembled) = outcome else {
        panic!("expected a ready document, got {:?}", outcome);
    };
    assert_eq!(assembled.properties.title, "Untitled");
    assert_eq!(assembled.properties.description, "No description");
    assert_eq!(assembled.properties.body, "No body");
    assert_eq!(assembled.properties.reading_time_minutes, 0);

    let map = &assembled.record_map;
    assert_eq!(map.block.len(), 4);
    assert_eq!(map.content, vec!["b1", "b2", "b3"]);
    assert_eq!(map.get("abc").unwrap().role, "reader");
    assert_eq!(map.get("abc").unwrap().value["id"], "abc");
    assert_eq!(map.get("b2").unwrap().value["paragraph"]["rich_text"][0]["plain_text"], "second");
    assert!(map.collection.is_empty());
    assert!(map.collection_view.is_empty());
    assert!(map.notion_user.is_empty());

    assert_eq!(repository.document_calls.load(Ordering::SeqCst), 1);
    assert_eq!(repository.children_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fixture_document_is_assembled_with_all_fields() {
    let document: DocumentRecord =
        serde_json::from_value(fixture("page_properties.json")).unwrap();
    let blocks: Vec<BlockRecord> =
        serde_json::from_value(fixture("blocks_page_1.json")["results"].clone()).unwrap();
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(blocks),
        Canned::Ok(document),
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("1f2e3d4c-5b6a-4978-8a1b-2c3d4e5f6a7b").unwrap())
        .await;

    let DocumentOutcome::Ready(assembled) = outcome else {
        panic!("expected a ready document");
    };
    assert_eq!(assembled.properties.title, "Writing a Parser");
    assert_eq!(assembled.properties.body, "A short tour of recursive descent.");
    assert_eq!(assembled.properties.reading_time_minutes, 7);
    assert!(assembled.properties.last_edited_at.is_some());
    assert_eq!(assembled.record_map.content.len(), 2);
    // Untyped wire fields survive in the document entry.
    let entry = &assembled
        .record_map
        .get("1f2e3d4c-5b6a-4978-8a1b-2c3d4e5f6a7b")
        .unwrap()
        .value;
    assert_eq!(entry["archived"], false);
}

#[tokio::test]
async fn missing_properties_mean_not_found() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(vec![paragraph("b1", "orphan")]),
        Canned::NotFound,
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("abc").unwrap())
        .await;
    assert!(matches!(
        outcome,
        DocumentOutcome::NotFound(NotFoundReason::MissingDocument)
    ));
}

#[tokio::test]
async fn empty_blocks_mean_not_found() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(vec![]),
        Canned::Ok(record("abc", json!({ "Title": title_property("Draft") }))),
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("abc").unwrap())
        .await;
    assert!(matches!(
        outcome,
        DocumentOutcome::NotFound(NotFoundReason::NoBlocks)
    ));
}

#[tokio::test]
async fn properties_failure_means_not_found() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(vec![paragraph("b1", "text")]),
        Canned::Fail,
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("abc").unwrap())
        .await;
    assert!(matches!(
        outcome,
        DocumentOutcome::NotFound(NotFoundReason::Unavailable(ContentError::Unavailable { .. }))
    ));
    // Both fetches were issued.
    assert_eq!(repository.children_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn blocks_failure_means_not_found() {
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Fail,
        Canned::Ok(record("abc", json!({}))),
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("abc").unwrap())
        .await;
    assert!(matches!(
        outcome,
        DocumentOutcome::NotFound(NotFoundReason::Unavailable(_))
    ));
}

#[tokio::test]
async fn colliding_block_id_keeps_document_entry() {
    let document = record("abc", json!({ "Title": title_property("Kept") }));
    let repository = Arc::new(FakeRepository::new(
        Canned::Ok(vec![]),
        Canned::Ok(vec![paragraph("abc", "impostor"), paragraph("b1", "real")]),
        Canned::Ok(document),
    ));

    let outcome = assembler(&repository)
        .assemble(&DocumentId::parse("abc").unwrap())
        .await;
    let DocumentOutcome::Ready(assembled) = outcome else {
        panic!("expected a ready document");
    };

    let entry = assembled.record_map.get("abc").unwrap();
    assert!(entry.value.get("properties").is_some());
    assert!(entry.value.get("paragraph").is_none());
    assert_eq!(assembled.record_map.content, vec!["b1"]);
}
