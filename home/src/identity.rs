//! Identity stream.
//!
//! Continuously-observable "current user" value pushed by the authentication
//! layer. Any number of independent observers may subscribe; each subscriber
//! immediately replays the latest known value, so a consumer that subscribes
//! and then reads never races the first push.

use crate::state::User;
use todo_client_core::observable::{Observable, Subscription};

/// Publisher/observer handle for the current authenticated user.
///
/// `None` is the logged-out sentinel. Pushes are last-write-wins: a slow
/// observer sees only the most recent identity, never a backlog.
#[derive(Debug, Clone, Default)]
pub struct IdentityStream {
    current: Observable<Option<User>>,
}

impl IdentityStream {
    /// Create a stream with no user logged in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream that already carries a logged-in user.
    #[must_use]
    pub fn with_user(user: User) -> Self {
        let stream = Self::default();
        stream.push(Some(user));
        stream
    }

    /// Push a new identity (or `None` on logout) to all observers.
    pub fn push(&self, user: Option<User>) {
        self.current.set(user);
    }

    /// The latest pushed identity.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.current.get()
    }

    /// Subscribe to identity changes.
    ///
    /// Dropping the returned handle detaches the observer.
    #[must_use]
    pub fn subscribe(&self) -> Subscription<Option<User>> {
        self.current.subscribe()
    }

    /// Number of attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.current.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;

    #[test]
    fn new_subscriber_replays_latest_identity() {
        let stream = IdentityStream::with_user(User::new("jane@example.com"));
        let sub = stream.subscribe();
        assert_eq!(sub.current(), Some(User::new("jane@example.com")));
    }

    #[test]
    fn logout_pushes_the_none_sentinel() {
        let stream = IdentityStream::with_user(User::new("jane@example.com"));
        stream.push(None);
        assert_eq!(stream.current(), None);
    }

    #[test]
    fn dropping_subscription_detaches_observer() {
        let stream = IdentityStream::new();
        let sub = stream.subscribe();
        assert_eq!(stream.observer_count(), 1);
        drop(sub);
        assert_eq!(stream.observer_count(), 0);
    }

    #[tokio::test]
    async fn rapid_pushes_collapse_to_latest() {
        let stream = IdentityStream::new();
        let mut sub = stream.subscribe();
        stream.push(Some(User::new("first@example.com")));
        stream.push(Some(User::new("second@example.com")));

        let seen = sub.changed().await.unwrap();
        assert_eq!(seen, Some(User::new("second@example.com")));
    }
}
