//! Share actions for the current dashboard view.
//!
//! Four user-facing actions, each single-shot: copy the short link, copy the
//! long link, copy the human-readable link, and share by email. An action
//! either succeeds or fails as a unit, raises exactly one notification, and
//! never returns an error to the caller; failures are logged with their
//! error code and surfaced as one uniform message.

use std::sync::Arc;

use url::Url;

use crate::error::ShareResult;
use crate::human;
use crate::link;
use crate::models::{DashboardInfo, FilterStateMap};
use crate::snapshot;
use crate::traits::{ClipboardSink, MailSink, Notifier, PermalinkRequest, PermalinkService};

/// Notification shown after a successful clipboard write.
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
/// Notification shown after the mail client was handed the draft.
pub const MAIL_OPENED_MESSAGE: &str = "Opened email client.";
/// Uniform failure notification; the underlying error goes to the log only.
pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong. Try again later.";

/// Email composition settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Subject line for shared-view emails.
    pub email_subject: String,
    /// Text placed in front of the link in the email body.
    pub email_body_prefix: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            email_subject: "Superset dashboard".to_string(),
            email_body_prefix: "Check out this dashboard: ".to_string(),
        }
    }
}

/// Everything one share action needs to know about the current view.
///
/// Built fresh per invocation. `location` is an immutable capture of the
/// page URL, not a live handle; concurrent actions each see their own
/// context and never observe each other's work.
#[derive(Debug, Clone)]
pub struct ShareContext {
    /// The page URL the user is looking at.
    pub location: Url,
    /// Identity and metadata of the dashboard.
    pub info: DashboardInfo,
    /// Current filter state, keyed by filter id.
    pub filter_state: FilterStateMap,
    /// Ids of the open tabs, in position order.
    pub active_tabs: Vec<String>,
    /// Optional component the short link should scroll to.
    pub anchor: Option<String>,
}

impl ShareContext {
    /// Create a context with no filter state, tabs or anchor.
    pub fn new(location: Url, info: DashboardInfo) -> Self {
        Self {
            location,
            info,
            filter_state: FilterStateMap::new(),
            active_tabs: Vec::new(),
            anchor: None,
        }
    }
}

/// The four share actions, wired to their external sinks.
///
/// Sinks are shared trait objects so a host can wire production adapters in
/// one place and hand clones of the action set to every menu that needs it.
/// Clones share the sinks, not copy them.
#[derive(Clone)]
pub struct ShareActions {
    permalink: Arc<dyn PermalinkService>,
    clipboard: Arc<dyn ClipboardSink>,
    mail: Arc<dyn MailSink>,
    notifier: Arc<dyn Notifier>,
    config: ShareConfig,
}

impl ShareActions {
    /// Wire up the action set.
    pub fn new(
        permalink: Arc<dyn PermalinkService>,
        clipboard: Arc<dyn ClipboardSink>,
        mail: Arc<dyn MailSink>,
        notifier: Arc<dyn Notifier>,
        config: ShareConfig,
    ) -> Self {
        Self {
            permalink,
            clipboard,
            mail,
            notifier,
            config,
        }
    }

    /// Copy the short link for the current view to the clipboard.
    ///
    /// The clipboard is acquired before the permalink request goes out, so a
    /// denied clipboard costs no network round trip.
    pub async fn copy_short_link(&self, ctx: &ShareContext) {
        let outcome = self.try_copy_short_link(ctx).await;
        self.finish("copy_short_link", COPIED_MESSAGE, outcome);
    }

    async fn try_copy_short_link(&self, ctx: &ShareContext) -> ShareResult<()> {
        self.clipboard.acquire().await?;
        let short_link = self.request_short_link(ctx).await?;
        self.clipboard.copy_text(&short_link).await
    }

    /// Copy the long link carrying the full native-filter state.
    pub async fn copy_long_link(&self, ctx: &ShareContext) {
        let produce = || -> ShareResult<String> {
            let captured = snapshot::native_snapshot(&ctx.filter_state, &ctx.active_tabs)?;
            Ok(link::long_link(&ctx.location, &captured).to_string())
        };
        let outcome = self.clipboard.copy_from(&produce).await;
        self.finish("copy_long_link", COPIED_MESSAGE, outcome);
    }

    /// Copy the human-readable link with selections keyed by display name.
    pub async fn copy_human_readable_link(&self, ctx: &ShareContext) {
        let produce = || -> ShareResult<String> {
            let named = human::human_snapshot(&ctx.info, &ctx.filter_state)?;
            Ok(link::human_link(&ctx.location, &named).to_string())
        };
        let outcome = self.clipboard.copy_from(&produce).await;
        self.finish("copy_human_readable_link", COPIED_MESSAGE, outcome);
    }

    /// Open the system mail client with a draft linking the current view.
    ///
    /// The link in the body is the short link, so the draft stays readable
    /// no matter how much filter state the view carries.
    pub async fn share_by_email(&self, ctx: &ShareContext) {
        let outcome = self.try_share_by_email(ctx).await;
        self.finish("share_by_email", MAIL_OPENED_MESSAGE, outcome);
    }

    async fn try_share_by_email(&self, ctx: &ShareContext) -> ShareResult<()> {
        let short_link = self.request_short_link(ctx).await?;
        let body = format!("{}{}", self.config.email_body_prefix, short_link);
        let mailto = link::mailto_link(&self.config.email_subject, &body);
        self.mail.compose(&mailto).await
    }

    /// Request a permalink for the complete view state.
    async fn request_short_link(&self, ctx: &ShareContext) -> ShareResult<String> {
        let captured = snapshot::full_snapshot(&ctx.filter_state, &ctx.active_tabs)?;
        let request =
            PermalinkRequest::from_snapshot(ctx.info.id.clone(), captured, ctx.anchor.clone());
        self.permalink.create_permalink(&request).await
    }

    /// Boundary policy: one log line with full detail, one notification,
    /// nothing propagated.
    fn finish(&self, action: &'static str, success_message: &str, outcome: ShareResult<()>) {
        match outcome {
            Ok(()) => self.notifier.success(success_message),
            Err(error) => {
                tracing::error!("{} failed [{}]: {}", action, error.error_code(), error);
                self.notifier.danger(FAILURE_MESSAGE);
            }
        }
    }
}
