//! Mock notifier for testing.

use std::sync::{Arc, Mutex};

use crate::traits::Notifier;

/// One recorded notification with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Success notification with its message.
    Success(String),
    /// Failure notification with its message.
    Danger(String),
}

/// Mock notifier recording every notification in order.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MockNotifier {
    /// Create a new mock notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get every recorded notification, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Get only the success messages, in order.
    pub fn successes(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter_map(|notice| match notice {
                Notice::Success(message) => Some(message.clone()),
                Notice::Danger(_) => None,
            })
            .collect()
    }

    /// Get only the failure messages, in order.
    pub fn dangers(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter_map(|notice| match notice {
                Notice::Danger(message) => Some(message.clone()),
                Notice::Success(_) => None,
            })
            .collect()
    }
}

impl Notifier for MockNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn danger(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Danger(message.to_string()));
    }
}
