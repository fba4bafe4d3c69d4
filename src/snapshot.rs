//! Capture of shareable dashboard view state.
//!
//! A snapshot is taken fresh each time an action runs, so every link encodes
//! the state at its moment of invocation. Two flavors exist: the native
//! subset (only filter ids carrying the reserved prefix) for link payloads,
//! and the full state for the permalink service.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ShareError, ShareResult};
use crate::models::{FilterStateMap, ShareSnapshot};

/// Reserved id prefix marking filters that belong in shared links.
pub const NATIVE_FILTER_PREFIX: &str = "NATIVE_FILTER";

/// Check whether a filter id belongs to the shareable native family.
///
/// The prefix match is exact and case-sensitive; `"native_filter-x"` and
/// `"XNATIVE_FILTER"` do not qualify.
pub fn is_native_filter(filter_id: &str) -> bool {
    filter_id.starts_with(NATIVE_FILTER_PREFIX)
}

/// Reduce a value to plain JSON data.
///
/// Anything already in [`Value`] form passes through structurally unchanged,
/// so the function is idempotent. Types that cannot become JSON (non-string
/// map keys and the like) fail rather than producing a partial payload.
pub fn normalize<T: Serialize>(value: &T) -> ShareResult<Value> {
    serde_json::to_value(value).map_err(|err| ShareError::Serialize {
        message: err.to_string(),
    })
}

/// Capture the native-filter subset of the current view state.
///
/// Only entries whose id passes [`is_native_filter`] are kept; session-local
/// and internal entries never reach a link. The input map is read, not
/// consumed, and entries are copied in normalized form.
pub fn native_snapshot(
    filter_state: &FilterStateMap,
    active_tabs: &[String],
) -> ShareResult<ShareSnapshot> {
    let snapshot = collect(filter_state, active_tabs, is_native_filter)?;
    tracing::debug!(
        "Captured native filter snapshot: kept {} of {} entries",
        snapshot.filters.len(),
        filter_state.len()
    );
    Ok(snapshot)
}

/// Capture the complete view state, native and otherwise.
///
/// This is the flavor handed to the permalink service, which restores the
/// whole view rather than just the shareable filters.
pub fn full_snapshot(
    filter_state: &FilterStateMap,
    active_tabs: &[String],
) -> ShareResult<ShareSnapshot> {
    collect(filter_state, active_tabs, |_| true)
}

fn collect(
    filter_state: &FilterStateMap,
    active_tabs: &[String],
    keep: impl Fn(&str) -> bool,
) -> ShareResult<ShareSnapshot> {
    let mut filters = Map::new();
    for (filter_id, entry) in filter_state {
        if keep(filter_id) {
            filters.insert(filter_id.clone(), normalize(entry)?);
        }
    }
    Ok(ShareSnapshot {
        filters,
        tabs: active_tabs.to_vec(),
    })
}
