//! Mock permalink service for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{PermalinkError, ShareResult};
use crate::traits::{PermalinkRequest, PermalinkService};

/// Mock permalink service returning a fixed short link.
///
/// Every request is recorded before the configured outcome applies, so tests
/// can verify the payload even on failure paths.
#[derive(Debug, Clone)]
pub struct MockPermalinkService {
    /// Short link returned on success
    url: Arc<Mutex<String>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<PermalinkRequest>>>,
    /// When set, requests fail with a server error
    fail: Arc<Mutex<bool>>,
}

impl MockPermalinkService {
    /// Create a mock returning the given short link.
    pub fn returning(url: &str) -> Self {
        Self {
            url: Arc::new(Mutex::new(url.to_string())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Make requests fail from now on.
    pub fn set_failure(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<PermalinkRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockPermalinkService {
    fn default() -> Self {
        Self::returning("https://bi.example.com/superset/dashboard/p/AbCdEf/")
    }
}

#[async_trait]
impl PermalinkService for MockPermalinkService {
    async fn create_permalink(&self, request: &PermalinkRequest) -> ShareResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        if *self.fail.lock().unwrap() {
            return Err(PermalinkError::ServerError {
                status: 500,
                message: "mock permalink failure".to_string(),
            }
            .into());
        }
        Ok(self.url.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShareSnapshot;

    #[tokio::test]
    async fn test_returns_configured_url_and_records_request() {
        let service = MockPermalinkService::returning("https://s.io/p/x");
        let request = PermalinkRequest::from_snapshot("7", ShareSnapshot::default(), None);

        let url = service.create_permalink(&request).await.unwrap();
        assert_eq!(url, "https://s.io/p/x");
        assert_eq!(service.requests().len(), 1);
        assert_eq!(service.requests()[0].dashboard_id, "7");
    }

    #[tokio::test]
    async fn test_failure_still_records_request() {
        let service = MockPermalinkService::default();
        service.set_failure();
        let request = PermalinkRequest::from_snapshot("7", ShareSnapshot::default(), None);

        assert!(service.create_permalink(&request).await.is_err());
        assert_eq!(service.requests().len(), 1);
    }
}
