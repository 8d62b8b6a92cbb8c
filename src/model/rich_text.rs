use serde::{Deserialize, Serialize};

/// A single rich text span. Text, mention and equation spans all carry a
/// `plain_text` rendering, which is what the blog displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub text: Option<RichTextContent>,
}

impl RichText {
    /// Where the span links to: its explicit href, else the text link.
    pub fn link(&self) -> Option<&str> {
        self.href.as_deref().or_else(|| {
            self.text
                .as_ref()
                .and_then(|t| t.link.as_ref())
                .map(|l| l.url.as_str())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextContent {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: Option<RichTextLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextLink {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

/// Concatenated plain text of a span list.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|s| s.plain_text.as_str()).collect()
}
