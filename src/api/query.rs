//! Database query bodies.
//!
//! Only the filter and sort shapes the blog needs are modelled; they
//! serialize to the exact JSON Notion expects under `filter` and `sorts`.

use crate::constants::{CREATED_TIME_PROPERTY, PUBLIC_PROPERTY};
use serde::Serialize;

/// Body of a `databases/{id}/query` request, minus pagination fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PropertyFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<PropertySort>,
}

impl CollectionQuery {
    /// Posts whose `public` checkbox is ticked, newest first.
    pub fn published_newest_first() -> Self {
        Self {
            filter: Some(PropertyFilter::checkbox_equals(PUBLIC_PROPERTY, true)),
            sorts: vec![PropertySort::descending(CREATED_TIME_PROPERTY)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyFilter {
    pub property: String,
    pub checkbox: CheckboxCondition,
}

impl PropertyFilter {
    pub fn checkbox_equals(property: impl Into<String>, equals: bool) -> Self {
        Self {
            property: property.into(),
            checkbox: CheckboxCondition { equals },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckboxCondition {
    pub equals: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySort {
    pub property: String,
    pub direction: SortDirection,
}

impl PropertySort {
    pub fn descending(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Descending,
}
