//! Name-keyed filter mapping for human-readable links.
//!
//! The long link's payload keys filters by internal id, which means nothing
//! to a reader. This module re-keys current selections by the display names
//! declared in the dashboard's metadata, producing payloads like
//! `(Region:EU)` instead of `(NATIVE_FILTER-h2n1Vng8:...)`.

use serde_json::{Map, Value};

use crate::error::{MetadataError, ShareResult};
use crate::models::{DashboardInfo, DashboardMetadata, FilterStateMap};

/// Map current filter selections to their declared display names.
///
/// The metadata document drives the result: only declared filters appear,
/// each under its display name. A declared filter with no current selection
/// is omitted, while an explicit `null` selection is kept as `null`. When two
/// declarations share a display name, the later one wins.
///
/// Selections are cloned out of the already-plain filter records, so the
/// result needs no further normalization. Metadata that fails to parse as
/// JSON fails the whole mapping; there is no partial output.
pub fn human_snapshot(
    info: &DashboardInfo,
    filter_state: &FilterStateMap,
) -> ShareResult<Map<String, Value>> {
    let metadata: DashboardMetadata =
        serde_json::from_str(&info.json_metadata).map_err(MetadataError::from)?;

    let mut named = Map::new();
    for descriptor in &metadata.native_filter_configuration {
        let Some(entry) = filter_state.get(&descriptor.id) else {
            continue;
        };
        if let Some(value) = entry.current_value() {
            named.insert(descriptor.name.clone(), value.clone());
        }
    }
    tracing::debug!(
        "Mapped {} of {} declared filters to display names",
        named.len(),
        metadata.native_filter_configuration.len()
    );
    Ok(named)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShareError;
    use crate::models::FilterEntry;
    use serde_json::json;

    fn metadata_with(descriptors: Value) -> DashboardInfo {
        let document = json!({ "native_filter_configuration": descriptors });
        DashboardInfo::new("7", document.to_string())
    }

    #[test]
    fn test_maps_selection_to_display_name() {
        let info = metadata_with(json!([
            {"id": "NATIVE_FILTER-abc", "name": "Region"}
        ]));
        let mut state = FilterStateMap::new();
        state.insert("NATIVE_FILTER-abc".to_string(), FilterEntry::with_value("EU"));

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert_eq!(named, json!({"Region": "EU"}).as_object().cloned().unwrap());
    }

    #[test]
    fn test_omits_declared_filter_without_selection() {
        let info = metadata_with(json!([
            {"id": "NATIVE_FILTER-abc", "name": "Region"},
            {"id": "NATIVE_FILTER-xyz", "name": "Year"}
        ]));
        let mut state = FilterStateMap::new();
        state.insert("NATIVE_FILTER-abc".to_string(), FilterEntry::with_value("EU"));
        // Present in state but with no filterState.value path.
        state.insert(
            "NATIVE_FILTER-xyz".to_string(),
            FilterEntry::new(json!({"filterState": {}})),
        );

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert!(named.contains_key("Region"));
        assert!(!named.contains_key("Year"));
    }

    #[test]
    fn test_keeps_explicit_null_selection() {
        let info = metadata_with(json!([
            {"id": "NATIVE_FILTER-abc", "name": "Region"}
        ]));
        let mut state = FilterStateMap::new();
        state.insert(
            "NATIVE_FILTER-abc".to_string(),
            FilterEntry::new(json!({"filterState": {"value": null}})),
        );

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert_eq!(named.get("Region"), Some(&Value::Null));
    }

    #[test]
    fn test_ignores_state_entries_never_declared() {
        let info = metadata_with(json!([
            {"id": "NATIVE_FILTER-abc", "name": "Region"}
        ]));
        let mut state = FilterStateMap::new();
        state.insert("NATIVE_FILTER-abc".to_string(), FilterEntry::with_value("EU"));
        state.insert(
            "NATIVE_FILTER-other".to_string(),
            FilterEntry::with_value("hidden"),
        );

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert_eq!(named.len(), 1);
    }

    #[test]
    fn test_duplicate_display_names_later_declaration_wins() {
        let info = metadata_with(json!([
            {"id": "NATIVE_FILTER-first", "name": "Region"},
            {"id": "NATIVE_FILTER-second", "name": "Region"}
        ]));
        let mut state = FilterStateMap::new();
        state.insert(
            "NATIVE_FILTER-first".to_string(),
            FilterEntry::with_value("EU"),
        );
        state.insert(
            "NATIVE_FILTER-second".to_string(),
            FilterEntry::with_value("US"),
        );

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert_eq!(named.get("Region"), Some(&json!("US")));
    }

    #[test]
    fn test_metadata_without_declarations_yields_empty_map() {
        let info = DashboardInfo::new("7", "{}");
        let mut state = FilterStateMap::new();
        state.insert("NATIVE_FILTER-abc".to_string(), FilterEntry::with_value("EU"));

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert!(named.is_empty());
    }

    #[test]
    fn test_unparsable_metadata_fails_whole_mapping() {
        let info = DashboardInfo::new("7", "{definitely not json");
        let result = human_snapshot(&info, &FilterStateMap::new());
        assert!(matches!(result, Err(ShareError::Metadata(_))));
    }

    #[test]
    fn test_complex_selections_survive_intact() {
        let info = metadata_with(json!([
            {"id": "NATIVE_FILTER-range", "name": "Order Date"}
        ]));
        let selection = json!({"start": "2024-01-01", "end": "2024-06-30"});
        let mut state = FilterStateMap::new();
        state.insert(
            "NATIVE_FILTER-range".to_string(),
            FilterEntry::with_value(selection.clone()),
        );

        let named = human_snapshot(&info, &state).expect("Failed to map");
        assert_eq!(named.get("Order Date"), Some(&selection));
    }
}
