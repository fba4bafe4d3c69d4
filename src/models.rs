use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Helper to deserialize id as either string or integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Filter state for one dashboard filter, keyed by filter id.
///
/// Entries arrive as arbitrary JSON records; the crate only ever inspects the
/// `filterState.value` path and otherwise carries them opaquely, so new record
/// fields pass through links untouched.
pub type FilterStateMap = HashMap<String, FilterEntry>;

/// One filter's state record, held as plain JSON data.
///
/// Wrapping [`Value`] instead of a typed struct keeps the distinction between
/// an explicit `null` selection and a missing one, which the name-keyed link
/// payload depends on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FilterEntry(pub Value);

impl FilterEntry {
    /// Wrap a raw filter record.
    pub fn new(record: Value) -> Self {
        Self(record)
    }

    /// Build a minimal record carrying just a current selection.
    pub fn with_value(value: impl Into<Value>) -> Self {
        Self(json!({ "filterState": { "value": value.into() } }))
    }

    /// The current selection at `filterState.value`, if the record has one.
    ///
    /// An explicit `null` selection is `Some(Value::Null)`; a record without
    /// the path is `None`.
    pub fn current_value(&self) -> Option<&Value> {
        self.0.get("filterState").and_then(|state| state.get("value"))
    }

    /// The underlying record.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// One filter declaration from the dashboard's metadata document.
///
/// Declarations pair the internal filter id with the label shown to users.
/// Unknown metadata fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterDescriptor {
    /// Internal filter id, as used in [`FilterStateMap`] keys.
    pub id: String,
    /// Human-readable filter label.
    pub name: String,
}

/// The subset of a dashboard metadata document this crate reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardMetadata {
    /// Declared filters; dashboards without any simply omit the field.
    #[serde(default)]
    pub native_filter_configuration: Vec<FilterDescriptor>,
}

/// Identity and metadata of the dashboard being shared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardInfo {
    /// Unique identifier from backend (can be string or integer)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Raw metadata document, stored server-side as a JSON string.
    pub json_metadata: String,
}

impl DashboardInfo {
    pub fn new(id: impl Into<String>, json_metadata: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            json_metadata: json_metadata.into(),
        }
    }
}

/// A point-in-time capture of shareable view state: filter records keyed by
/// filter id, plus the open tabs.
///
/// The filter map is a [`Map`] rather than a `HashMap` so key order, and with
/// it every encoded form of the snapshot, is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShareSnapshot {
    /// Normalized filter records, keyed by filter id.
    pub filters: Map<String, Value>,
    /// Ids of the currently open tabs, in position order.
    pub tabs: Vec<String>,
}
