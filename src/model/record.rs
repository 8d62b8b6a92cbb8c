use super::blocks::BlockKind;
use super::PropertyBag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A Notion page as returned by `pages/{id}` or a database query.
///
/// Only the fields the blog reads are typed; everything else is carried in
/// `extra` so the record serializes back to its full wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: PropertyBag,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentRecord {
    /// A bare record with the given id and property bag.
    pub fn new(id: impl Into<String>, properties: PropertyBag) -> Self {
        Self {
            id: id.into(),
            created_time: None,
            last_edited_time: None,
            properties,
            extra: Map::new(),
        }
    }

    /// The whole record as JSON, used as the document's record-map entry.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            log::warn!("Failed to serialize document {}: {}", self.id, e);
            Value::Null
        })
    }
}

/// A child block, kept as raw JSON.
///
/// The raw value is what lands in the record map; `kind()` gives the typed
/// view the renderer works with.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    pub id: String,
    pub raw: Value,
}

impl BlockRecord {
    /// Wraps a raw block value, reading its `id`.
    pub fn from_value(raw: Value) -> Option<Self> {
        let id = raw.get("id")?.as_str()?.to_string();
        Some(Self { id, raw })
    }

    /// The Notion block type string (`"paragraph"`, `"heading_1"`, ...).
    pub fn block_type(&self) -> &str {
        self.raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }

    /// Typed view of the block. Shapes this crate does not understand come
    /// back as `BlockKind::Unsupported`.
    pub fn kind(&self) -> BlockKind {
        match BlockKind::deserialize(&self.raw) {
            Ok(kind) => kind,
            Err(e) => {
                log::debug!(
                    "Block {} ({}) did not match its expected shape: {}",
                    self.id,
                    self.block_type(),
                    e
                );
                BlockKind::Unsupported
            }
        }
    }
}

impl Serialize for BlockRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        BlockRecord::from_value(raw).ok_or_else(|| serde::de::Error::missing_field("id"))
    }
}
