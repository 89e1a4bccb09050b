//! Mock profile gateway.

use crate::error::{GatewayError, Result};
use crate::providers::ProfileGateway;
use crate::state::User;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    profiles: HashMap<String, User>,
    lookups: Vec<String>,
    failure: Option<GatewayError>,
}

/// Mock profile gateway.
///
/// Serves profiles from an in-memory map keyed by email and records every
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct MockProfileGateway {
    inner: Arc<Mutex<Inner>>,
}

impl MockProfileGateway {
    /// Create an empty mock gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway that knows the given user.
    #[must_use]
    pub fn with_profile(user: User) -> Self {
        let gateway = Self::new();
        gateway.insert(user);
        gateway
    }

    /// Add a profile record.
    pub fn insert(&self, user: User) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.profiles.insert(user.email.clone(), user);
        }
    }

    /// Make every subsequent lookup fail with the given error.
    pub fn fail_with(&self, error: GatewayError) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failure = Some(error);
        }
    }

    /// Emails looked up so far, in invocation order.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|i| i.lookups.clone())
            .unwrap_or_default()
    }
}

impl ProfileGateway for MockProfileGateway {
    fn get_profile(&self, email: &str) -> impl Future<Output = Result<User>> + Send {
        let inner = Arc::clone(&self.inner);
        let email = email.to_string();

        async move {
            let mut guard = inner
                .lock()
                .map_err(|_| GatewayError::Remote("mock gateway poisoned".to_string()))?;
            guard.lookups.push(email.clone());

            if let Some(error) = &guard.failure {
                return Err(error.clone());
            }

            guard
                .profiles
                .get(&email)
                .cloned()
                .ok_or_else(|| GatewayError::Remote(format!("No profile for {email}")))
        }
    }
}
