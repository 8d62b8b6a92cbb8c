// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains. Reading
//! them should tell you how the blog talks to Notion and what it shows
//! when a post's properties are missing.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Pinned API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Production API root.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

// ---------------------------------------------------------------------------
// Collection schema
// ---------------------------------------------------------------------------

/// Checkbox property that marks a post as published.
pub const PUBLIC_PROPERTY: &str = "public";

/// Property the index is sorted on, newest first.
pub const CREATED_TIME_PROPERTY: &str = "Created time";

pub const TITLE_PROPERTY: &str = "Title";
pub const DESCRIPTION_PROPERTY: &str = "Description";
pub const BODY_PROPERTY: &str = "Body";

/// Number or formula property holding the estimated reading time in minutes.
pub const READING_TIME_PROPERTY: &str = "ReadingTime";

// ---------------------------------------------------------------------------
// Display fallbacks
// ---------------------------------------------------------------------------

pub const UNTITLED: &str = "Untitled";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_BODY: &str = "No body";
pub const NO_READING_TIME: u32 = 0;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
