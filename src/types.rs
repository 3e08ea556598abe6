use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One film simulation recipe record.
///
/// Recipes are kept as raw JSON objects so that a rewrite preserves every
/// field and the original key order; only `name` and `author` are
/// interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    fields: Map<String, Value>,
}

impl Recipe {
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Current author, if present and a string (null counts as absent).
    pub fn author(&self) -> Option<&str> {
        self.fields.get("author").and_then(Value::as_str)
    }

    /// Overwrites the author. An existing key keeps its position in the
    /// record; a missing key is appended.
    pub fn set_author(&mut self, author: &str) {
        self.fields
            .insert("author".to_string(), Value::String(author.to_string()));
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Recipe {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
