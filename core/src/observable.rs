//! Observable value cells for push-based collaborator state.
//!
//! An [`Observable`] holds a single current value and pushes replacements to
//! any number of independent subscribers. Semantics are last-write-wins: only
//! the most recent value is retained, earlier values are discarded regardless
//! of issue order. New subscribers immediately observe the latest value, so a
//! consumer that subscribes and then reads is never left waiting for the next
//! push.
//!
//! This is the substrate for the identity stream (current authenticated user)
//! and the alert channel (single-slot notification sink). It is deliberately
//! NOT a queue: intermediate values that a slow subscriber did not read are
//! gone.
//!
//! # Example
//!
//! ```
//! use todo_client_core::observable::Observable;
//!
//! let cell = Observable::new(0u32);
//! let sub = cell.subscribe();
//! cell.set(7);
//! assert_eq!(sub.current(), 7);
//! ```

use thiserror::Error;
use tokio::sync::watch;

/// Error returned when awaiting a change on a closed observable.
///
/// An observable closes when every [`Observable`] handle for the cell has
/// been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Observable closed: all publisher handles dropped")]
pub struct ObservableClosed;

/// A shared, single-slot value cell with multi-subscriber push semantics.
///
/// Cloning an `Observable` yields another publisher handle to the same
/// underlying cell; all clones share subscribers.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Create a new observable holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the current value, notifying all subscribers.
    ///
    /// Overwrite semantics: the previous value is discarded even if no
    /// subscriber ever read it.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribe to this observable.
    ///
    /// The returned [`Subscription`] replays the latest value immediately via
    /// [`Subscription::current`]. Dropping the subscription detaches it; no
    /// explicit unsubscribe call is needed.
    #[must_use]
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of currently attached subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A cancelable handle onto an [`Observable`].
///
/// Each subscription tracks its own read position: `changed()` resolves once
/// per value replacement that this subscriber has not yet seen. Dropping the
/// subscription releases it.
#[derive(Debug)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Read the latest pushed value without waiting.
    #[must_use]
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next value replacement and return it.
    ///
    /// If several replacements happen before this is polled, only the most
    /// recent value is returned (last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns [`ObservableClosed`] if every publisher handle has been dropped.
    pub async fn changed(&mut self) -> Result<T, ObservableClosed> {
        self.rx.changed().await.map_err(|_| ObservableClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)] // Test code can use unwrap

    use super::*;

    #[test]
    fn new_subscriber_sees_latest_value() {
        let cell = Observable::new(1u32);
        cell.set(2);
        let sub = cell.subscribe();
        assert_eq!(sub.current(), 2);
    }

    #[test]
    fn set_overwrites_without_queueing() {
        let cell = Observable::new(0u32);
        let sub = cell.subscribe();
        cell.set(1);
        cell.set(2);
        cell.set(3);
        assert_eq!(sub.current(), 3);
    }

    #[test]
    fn multiple_independent_subscribers() {
        let cell = Observable::new("a".to_string());
        let sub1 = cell.subscribe();
        let sub2 = cell.subscribe();
        assert_eq!(cell.subscriber_count(), 2);

        cell.set("b".to_string());
        assert_eq!(sub1.current(), "b");
        assert_eq!(sub2.current(), "b");

        drop(sub1);
        assert_eq!(cell.subscriber_count(), 1);
    }

    #[test]
    fn clone_shares_the_cell() {
        let cell = Observable::new(0u32);
        let other = cell.clone();
        other.set(9);
        assert_eq!(cell.get(), 9);
    }

    #[tokio::test]
    async fn changed_resolves_with_new_value() {
        let cell = Observable::new(0u32);
        let mut sub = cell.subscribe();

        let publisher = cell.clone();
        let task = tokio::spawn(async move {
            publisher.set(42);
        });

        let value = sub.changed().await.unwrap();
        assert_eq!(value, 42);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn changed_errors_once_closed() {
        let cell = Observable::new(0u32);
        let mut sub = cell.subscribe();
        drop(cell);
        assert_eq!(sub.changed().await, Err(ObservableClosed));
    }

    #[tokio::test]
    async fn rapid_pushes_collapse_to_latest() {
        let cell = Observable::new(0u32);
        let mut sub = cell.subscribe();
        cell.set(1);
        cell.set(2);
        let value = sub.changed().await.unwrap();
        assert_eq!(value, 2);
    }
}
