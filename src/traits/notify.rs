//! User notification trait abstraction.

/// Trait for user-facing notifications (toast-style, fire and forget).
///
/// Share actions raise exactly one notification per invocation: a success
/// message, or the uniform failure message with the underlying error kept to
/// the log. Implementations must not block; actions call these on their own
/// task.
pub trait Notifier: Send + Sync {
    /// Show a success notification.
    fn success(&self, message: &str);

    /// Show a failure notification.
    fn danger(&self, message: &str);
}
