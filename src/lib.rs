//! dashlink - shareable links for dashboard views
//!
//! Turns the state of a dashboard view (filter selections, open tabs) into
//! links a user can hand to someone else: a service-backed short link, a
//! self-contained long link, a human-readable link keyed by filter display
//! names, and an email draft carrying the short link.

pub mod adapters;
pub mod error;
pub mod human;
pub mod link;
pub mod models;
pub mod prelude;
pub mod rison;
pub mod share;
pub mod snapshot;
pub mod traits;
