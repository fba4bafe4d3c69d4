//! Permalink service trait abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ShareResult;
use crate::models::ShareSnapshot;

/// Payload persisted by the permalink service for one shared view.
///
/// Carries the complete view state, not just the shareable subset: a short
/// link restores the whole view, including filters that never appear in a
/// long link's payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PermalinkRequest {
    /// Dashboard being shared.
    pub dashboard_id: String,
    /// Complete filter state, keyed by filter id.
    pub data_mask: Map<String, Value>,
    /// Ids of the open tabs, in position order.
    pub active_tabs: Vec<String>,
    /// Optional component to scroll to when the link is opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl PermalinkRequest {
    /// Assemble the service payload from a full state snapshot.
    pub fn from_snapshot(
        dashboard_id: impl Into<String>,
        snapshot: ShareSnapshot,
        anchor: Option<String>,
    ) -> Self {
        Self {
            dashboard_id: dashboard_id.into(),
            data_mask: snapshot.filters,
            active_tabs: snapshot.tabs,
            anchor,
        }
    }
}

/// Trait for the short-link service.
#[async_trait]
pub trait PermalinkService: Send + Sync {
    /// Persist the view state and return the absolute short-link URL.
    async fn create_permalink(&self, request: &PermalinkRequest) -> ShareResult<String>;
}
