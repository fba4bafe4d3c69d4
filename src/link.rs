//! Link assembly for shared dashboard views.
//!
//! Links are derived from the page URL the user is looking at, never built
//! from scratch: scheme, host, path, remaining query parameters and fragment
//! all carry over, with exactly one state-bearing parameter appended. The
//! session-local `native_filters_key` parameter is stripped first so a
//! recipient never inherits the sender's filter session.

use serde_json::{Map, Value};
use url::Url;

use crate::models::ShareSnapshot;
use crate::rison;

/// Query parameter carrying the id-keyed native filter payload.
pub const NATIVE_FILTERS_PARAM: &str = "native_filters";
/// Query parameter carrying the name-keyed human-readable payload.
pub const HUMAN_FILTERS_PARAM: &str = "filters";
/// Session-local parameter that must never appear in a shared link.
pub const SESSION_KEY_PARAM: &str = "native_filters_key";
/// Format version prefixed to the human-readable payload.
pub const HUMAN_LINK_VERSION: u64 = 1;

/// Build a shareable URL from the current page location.
///
/// Existing query parameters are kept in order, minus every occurrence of
/// [`SESSION_KEY_PARAM`], and `param=token` is appended as the final pair.
/// The token is percent-encoded by the URL serializer; callers pass it raw.
pub fn share_url(location: &Url, param: &str, token: &str) -> Url {
    let retained: Vec<(String, String)> = location
        .query_pairs()
        .filter(|(key, _)| key != SESSION_KEY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut shared = location.clone();
    shared.set_query(None);
    {
        let mut pairs = shared.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(param, token);
    }
    shared
}

/// Build the long link: current location plus the id-keyed native filter
/// payload under [`NATIVE_FILTERS_PARAM`].
pub fn long_link(location: &Url, snapshot: &ShareSnapshot) -> Url {
    let token = rison::encode(&Value::Object(snapshot.filters.clone()));
    share_url(location, NATIVE_FILTERS_PARAM, &token)
}

/// Build the human-readable link: current location plus the versioned
/// name-keyed payload under [`HUMAN_FILTERS_PARAM`].
///
/// The payload is the two-element sequence `version,(name:value,...)` in
/// top-level rison form, e.g. `1,(Region:EU)`.
pub fn human_link(location: &Url, named: &Map<String, Value>) -> Url {
    let payload = [
        Value::from(HUMAN_LINK_VERSION),
        Value::Object(named.clone()),
    ];
    let token = rison::encode_array(&payload);
    share_url(location, HUMAN_FILTERS_PARAM, &token)
}

/// Build a `mailto:` URL opening a draft with the given subject and body.
///
/// Both parts are percent-encoded whole. The trailing space after the
/// subject keeps mail clients from gluing the subject to the cursor when the
/// draft opens.
pub fn mailto_link(subject: &str, body: &str) -> String {
    format!(
        "mailto:?Subject={}%20&Body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
