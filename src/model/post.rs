use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry on the index page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reading_time_minutes: u32,
}

/// Display fields of a single post, derived from its property bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentProperties {
    pub title: String,
    pub description: String,
    pub body: String,
    pub reading_time_minutes: u32,
    pub last_edited_at: Option<DateTime<Utc>>,
}
