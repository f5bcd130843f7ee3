//! The output triple and a JSON body builder for overrides.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The names index, the types index, and the JSON body of one inspection.
///
/// A plain value: built fresh per call, compared by content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTriple {
    /// Member and type names across the object graph.
    pub names: Vec<String>,
    /// Formatted runtime types across the object graph.
    pub types: Vec<String>,
    /// JSON body of the root, or empty if it could not be encoded.
    pub json: String,
}

impl ResultTriple {
    /// Creates a triple from any string-like names and types.
    #[must_use]
    pub fn new<N, T>(names: N, types: T, json: impl Into<String>) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            types: types.into_iter().map(Into::into).collect(),
            json: json.into(),
        }
    }

    /// Parses the JSON body. Returns `None` for an empty or malformed body.
    #[must_use]
    pub fn json_value(&self) -> Option<Value> {
        serde_json::from_str(&self.json).ok()
    }

    /// Returns true if the JSON body is empty.
    #[must_use]
    pub fn has_empty_body(&self) -> bool {
        self.json.is_empty()
    }
}

/// JSON object builder addressed by key paths.
///
/// Intermediate objects are created on demand; a non-object value found on
/// the way is replaced by an object.
///
/// ```rust
/// use logscope_core::JsonBody;
///
/// let body = JsonBody::new().set(["aunt", "name"], "Kristin Castillo");
/// assert_eq!(body.to_string(), r#"{"aunt":{"name":"Kristin Castillo"}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody(Value);

impl JsonBody {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Sets `value` at `path`, builder style.
    #[must_use]
    pub fn set<P>(mut self, path: P, value: impl Into<Value>) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        self.insert(path, value);
        self
    }

    /// Sets `value` at `path`. An empty path replaces the whole body.
    pub fn insert<P>(&mut self, path: P, value: impl Into<Value>)
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut keys: Vec<String> = path.into_iter().map(Into::into).collect();
        let Some(last) = keys.pop() else {
            self.0 = value.into();
            return;
        };

        let mut cursor = &mut self.0;
        for key in keys {
            let Some(object) = ensure_object(cursor) else {
                return;
            };
            cursor = object
                .entry(key)
                .or_insert_with(|| Value::Object(Map::new()));
        }
        if let Some(object) = ensure_object(cursor) {
            object.insert(last, value.into());
        }
    }

    /// Looks up the value at `path`.
    #[must_use]
    pub fn get<P>(&self, path: P) -> Option<&Value>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        path.into_iter()
            .try_fold(&self.0, |node, key| node.get(key.as_ref()))
    }

    /// Borrows the body.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the builder, returning the body.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for JsonBody {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JsonBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<JsonBody> for Value {
    fn from(body: JsonBody) -> Self {
        body.0
    }
}

fn ensure_object(value: &mut Value) -> Option<&mut Map<String, Value>> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}
