// src/lib.rs
//! notion-blog library: serves a blog whose posts live in a Notion database.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`, `ContentError`
//! - **Configuration**: `CommandLineInput`, `SiteConfig`
//! - **Domain model**: `DocumentRecord`, `BlockRecord`, `PropertyBag`, `PostSummary`
//! - **Domain types**: `DocumentId`, `CollectionId`, `ApiKey`
//! - **API client**: `ContentRepository`, `NotionHttpClient`, `CollectionQuery`
//! - **Content**: `ContentAdapter`, `DocumentAssembler`, `RecordMap`
//! - **Site**: `SiteState`, `router`, `serve`, `PageRenderer`

pub mod api;
mod config;
mod constants;
pub mod content;
mod error;
pub mod model;
pub mod site;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SiteConfig};

// --- Domain Model ---
pub use crate::model::{
    BlockKind, BlockRecord, DocumentProperties, DocumentRecord, PostSummary, PropertyBag,
    RichText,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, CollectionId, DocumentId, Id, ValidatedUrl};

// --- API Client ---
pub use crate::api::{CollectionQuery, ContentRepository, NotionHttpClient};

// --- Content ---
pub use crate::content::{
    AdapterSettings, AssembledDocument, ContentAdapter, ContentError, ContentResult,
    ContentResultExt, DocumentAssembler, DocumentOutcome, NotFoundReason, RecordMap,
};

// --- Site ---
pub use crate::site::pages::PageRenderer;
pub use crate::site::{router, serve, SiteState};
