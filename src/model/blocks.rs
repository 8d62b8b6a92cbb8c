//! Typed views of the Notion block types the blog renders.
//!
//! Deserialized from a block's raw JSON on demand. Fields the renderer does
//! not use (colors, parents, authorship) are ignored.

use super::RichText;
use serde::Deserialize;

/// The content-bearing part of a block, keyed by its `type` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextBlock },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextBlock },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextBlock },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextBlock },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: TextBlock },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: TextBlock },
    #[serde(rename = "to_do")]
    ToDo { to_do: TextBlock },
    #[serde(rename = "toggle")]
    Toggle { toggle: TextBlock },
    #[serde(rename = "quote")]
    Quote { quote: TextBlock },
    #[serde(rename = "callout")]
    Callout { callout: CalloutBlock },
    #[serde(rename = "code")]
    Code { code: CodeBlock },
    #[serde(rename = "divider")]
    Divider,
    #[serde(rename = "image")]
    Image { image: FileSource },
    #[serde(rename = "bookmark")]
    Bookmark { bookmark: LinkBlock },
    #[serde(rename = "embed")]
    Embed { embed: LinkBlock },
    #[serde(rename = "equation")]
    Equation { equation: EquationBlock },
    #[serde(other)]
    Unsupported,
}

/// Rich text payload shared by paragraphs, headings, list items and friends.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    /// Only present on `to_do` blocks.
    #[serde(default)]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalloutBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub icon: Option<CalloutIcon>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalloutIcon {
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

/// An image (or other file) hosted by Notion or linked externally.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileSource {
    #[serde(default)]
    pub external: Option<FileUrl>,
    #[serde(default)]
    pub file: Option<FileUrl>,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

impl FileSource {
    pub fn url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .or(self.file.as_ref())
            .map(|f| f.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileUrl {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkBlock {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EquationBlock {
    #[serde(default)]
    pub expression: String,
}
