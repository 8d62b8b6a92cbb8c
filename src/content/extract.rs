//! Display-field extraction shared by the index and the document page.
//!
//! Extraction is total: a missing property, an empty array or an
//! unexpected shape yields the field's fallback, never an error.

use crate::constants::{
    BODY_PROPERTY, DESCRIPTION_PROPERTY, NO_BODY, NO_DESCRIPTION, NO_READING_TIME,
    READING_TIME_PROPERTY, TITLE_PROPERTY, UNTITLED,
};
use crate::model::{DocumentProperties, DocumentRecord, PostSummary, PropertyBag};

/// Text fields read from a post's property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayField {
    Title,
    Description,
    Body,
}

impl DisplayField {
    pub fn property_name(self) -> &'static str {
        match self {
            DisplayField::Title => TITLE_PROPERTY,
            DisplayField::Description => DESCRIPTION_PROPERTY,
            DisplayField::Body => BODY_PROPERTY,
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            DisplayField::Title => UNTITLED,
            DisplayField::Description => NO_DESCRIPTION,
            DisplayField::Body => NO_BODY,
        }
    }
}

/// First `plain_text` of the field's property, or the field's fallback.
///
/// An empty string counts as absent.
pub fn extract_text(bag: &PropertyBag, field: DisplayField) -> String {
    bag.first_plain_text(field.property_name())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| field.fallback())
        .to_string()
}

/// Reading time in whole minutes; absent, negative or non-finite → 0.
pub fn extract_reading_time(bag: &PropertyBag) -> u32 {
    match bag.number(READING_TIME_PROPERTY) {
        Some(minutes) if minutes.is_finite() && minutes > 0.0 => {
            minutes.round().min(u32::MAX as f64) as u32
        }
        _ => NO_READING_TIME,
    }
}

impl PostSummary {
    pub fn from_record(record: &DocumentRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: extract_text(&record.properties, DisplayField::Title),
            description: extract_text(&record.properties, DisplayField::Description),
            reading_time_minutes: extract_reading_time(&record.properties),
        }
    }
}

impl DocumentProperties {
    pub fn from_record(record: &DocumentRecord) -> Self {
        Self {
            title: extract_text(&record.properties, DisplayField::Title),
            description: extract_text(&record.properties, DisplayField::Description),
            body: extract_text(&record.properties, DisplayField::Body),
            reading_time_minutes: extract_reading_time(&record.properties),
            last_edited_at: record.last_edited_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(value: &str) -> serde_json::Value {
        json!([{ "type": "text", "plain_text": value }])
    }

    fn full_bag() -> PropertyBag {
        PropertyBag::from(json!({
            "Title": { "type": "title", "title": text("Hello") },
            "Description": { "type": "rich_text", "rich_text": text("A greeting") },
            "Body": { "type": "rich_text", "rich_text": text("Long form") },
            "ReadingTime": { "type": "number", "number": 4 }
        }))
    }

    #[test]
    fn reads_every_field() {
        let bag = full_bag();
        assert_eq!(extract_text(&bag, DisplayField::Title), "Hello");
        assert_eq!(extract_text(&bag, DisplayField::Description), "A greeting");
        assert_eq!(extract_text(&bag, DisplayField::Body), "Long form");
        assert_eq!(extract_reading_time(&bag), 4);
    }

    #[test]
    fn each_empty_array_falls_back_independently() {
        for field in [DisplayField::Title, DisplayField::Description, DisplayField::Body] {
            let mut properties = full_bag();
            let key = match field {
                DisplayField::Title => "title",
                _ => "rich_text",
            };
            properties = PropertyBag::from({
                let mut raw = serde_json::to_value(&properties).unwrap();
                raw[field.property_name()][key] = json!([]);
                raw
            });

            assert_eq!(extract_text(&properties, field), field.fallback());
            for other in [DisplayField::Title, DisplayField::Description, DisplayField::Body] {
                if other != field {
                    assert_ne!(extract_text(&properties, other), other.fallback());
                }
            }
        }
    }

    #[test]
    fn empty_bag_yields_all_fallbacks() {
        let record = DocumentRecord::new("p", PropertyBag::default());
        let properties = DocumentProperties::from_record(&record);
        assert_eq!(
            properties,
            DocumentProperties {
                title: "Untitled".to_string(),
                description: "No description".to_string(),
                body: "No body".to_string(),
                reading_time_minutes: 0,
                last_edited_at: None,
            }
        );
    }

    #[test]
    fn empty_plain_text_counts_as_absent() {
        let bag = PropertyBag::from(json!({ "Title": { "title": text("") } }));
        assert_eq!(extract_text(&bag, DisplayField::Title), "Untitled");
    }

    #[test]
    fn reading_time_edge_cases() {
        let reading = |value: serde_json::Value| {
            extract_reading_time(&PropertyBag::from(json!({ "ReadingTime": value })))
        };
        assert_eq!(reading(json!({ "number": 2.5 })), 3);
        assert_eq!(reading(json!({ "number": -1 })), 0);
        assert_eq!(reading(json!({ "number": null })), 0);
        assert_eq!(reading(json!({ "formula": { "type": "number", "number": 9 } })), 9);
        assert_eq!(reading(json!({ "formula": { "type": "string", "string": "9" } })), 0);
    }

    #[test]
    fn summary_and_document_share_extraction() {
        let record = DocumentRecord::new("p-1", full_bag());
        let summary = PostSummary::from_record(&record);
        let document = DocumentProperties::from_record(&record);

        assert_eq!(summary.id, "p-1");
        assert_eq!(summary.title, document.title);
        assert_eq!(summary.description, document.description);
        assert_eq!(summary.reading_time_minutes, document.reading_time_minutes);
    }
}
