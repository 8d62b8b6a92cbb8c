use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `properties` object of a Notion page.
///
/// Kept as JSON: every lookup is best-effort and returns `None` instead of
/// failing when a property is missing or has an unexpected shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(Map<String, Value>);

impl PropertyBag {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// `plain_text` of the first element of a `title` or `rich_text` array.
    ///
    /// Only the first element is read, matching how Notion's own list views
    /// preview a field. An empty array yields `None`.
    pub fn first_plain_text(&self, name: &str) -> Option<&str> {
        let property = self.get(name)?;
        let items = property
            .get("title")
            .or_else(|| property.get("rich_text"))?
            .as_array()?;
        items.first()?.get("plain_text")?.as_str()
    }

    /// A numeric property, or a formula whose result is a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        let property = self.get(name)?;
        property
            .get("number")
            .and_then(Value::as_f64)
            .or_else(|| property.get("formula")?.get("number")?.as_f64())
    }
}

impl From<Value> for PropertyBag {
    /// Non-object values become an empty bag.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}
