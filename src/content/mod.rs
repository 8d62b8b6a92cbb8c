//! Content adapter and document assembler.
//!
//! Turns Notion records into what the pages display. Failures are returned
//! as `ContentError` so the shell can tell "nothing published" from
//! "provider unreachable", and `or_empty` turns either into the safe empty
//! rendering.

pub mod adapter;
pub mod assembler;
pub mod extract;
pub mod record_map;

use crate::error::AppError;
use thiserror::Error;

pub use adapter::{AdapterSettings, ContentAdapter};
pub use assembler::{AssembledDocument, DocumentAssembler, DocumentOutcome, NotFoundReason};
pub use extract::{extract_reading_time, extract_text, DisplayField};
pub use record_map::{RecordEntry, RecordMap};

/// Why the adapter could not produce content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("no collection id is configured")]
    CollectionNotConfigured,

    #[error("content provider unavailable while {operation}: {source}")]
    Unavailable {
        operation: &'static str,
        #[source]
        source: AppError,
    },
}

impl ContentError {
    /// True when the failure came from the remote provider rather than
    /// local configuration.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ContentError::Unavailable { .. })
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Degrades a content result to its empty value.
pub trait ContentResultExt<T> {
    /// Returns the value, or logs the error and returns `T::default()`.
    fn or_empty(self) -> T;
}

impl<T: Default> ContentResultExt<T> for ContentResult<T> {
    fn or_empty(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Serving empty content: {}", e);
                T::default()
            }
        }
    }
}
