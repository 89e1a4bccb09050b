//! Integration tests for the Store runtime
//!
//! Exercises the reducer/effect feedback loop with a miniature paged-list
//! fixture: a refresh command kicks off an async load effect whose completion
//! action is fed back into the reducer.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic
#![allow(clippy::match_same_arms)] // Test code - allow pedantic warnings

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use todo_client_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use todo_client_runtime::{Store, StoreError};

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListAction {
    /// Fetch a page of items
    Refresh { page: u32 },
    /// Fetch completed (terminal)
    Loaded { page: u32, items: Vec<String> },
    /// Fetch failed (terminal)
    LoadFailed { page: u32, error: String },
    /// Fetch both the list and a profile concurrently
    RefreshAll,
    /// Profile fetch completed (terminal)
    ProfileLoaded { name: String },
    /// Schedule a deferred refresh
    RefreshLater { page: u32 },
    /// Fetch two pages strictly one after the other
    RefreshInOrder { first: u32, then: u32 },
}

#[derive(Debug, Clone, Default)]
struct ListState {
    items: Vec<String>,
    current_page: u32,
    profile: Option<String>,
    load_order: Vec<u32>,
}

/// Fake backend: page number decides latency and outcome.
#[derive(Clone)]
struct ListEnvironment {
    /// Pages that fail when fetched
    failing_pages: Arc<Vec<u32>>,
    /// Per-page artificial latency in milliseconds
    latency_ms: Arc<dyn Fn(u32) -> u64 + Send + Sync>,
    /// Number of fetches issued
    fetch_count: Arc<AtomicUsize>,
}

impl ListEnvironment {
    fn instant() -> Self {
        Self {
            failing_pages: Arc::new(Vec::new()),
            latency_ms: Arc::new(|_| 0),
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn with_failing_page(page: u32) -> Self {
        Self {
            failing_pages: Arc::new(vec![page]),
            ..Self::instant()
        }
    }

    fn with_latency(latency: impl Fn(u32) -> u64 + Send + Sync + 'static) -> Self {
        Self {
            latency_ms: Arc::new(latency),
            ..Self::instant()
        }
    }

    fn fetch(&self, page: u32) -> Effect<ListAction> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let failing = self.failing_pages.contains(&page);
        let delay = (self.latency_ms)(page);

        Effect::future(async move {
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            if failing {
                Some(ListAction::LoadFailed {
                    page,
                    error: "backend unavailable".to_string(),
                })
            } else {
                Some(ListAction::Loaded {
                    page,
                    items: vec![format!("item-{page}-a"), format!("item-{page}-b")],
                })
            }
        })
    }
}

#[derive(Clone)]
struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListAction::Refresh { page } => {
                state.current_page = page;
                smallvec![env.fetch(page)]
            },

            ListAction::Loaded { page, items } => {
                state.items = items;
                state.load_order.push(page);
                smallvec![Effect::None]
            },

            ListAction::LoadFailed { page, .. } => {
                state.load_order.push(page);
                smallvec![Effect::None]
            },

            ListAction::RefreshAll => {
                smallvec![Effect::merge(vec![
                    env.fetch(state.current_page),
                    Effect::future(async {
                        Some(ListAction::ProfileLoaded {
                            name: "jane".to_string(),
                        })
                    }),
                ])]
            },

            ListAction::ProfileLoaded { name } => {
                state.profile = Some(name);
                smallvec![Effect::None]
            },

            ListAction::RefreshLater { page } => {
                smallvec![Effect::Delay {
                    duration: Duration::from_millis(20),
                    action: Box::new(ListAction::Refresh { page }),
                }]
            },

            ListAction::RefreshInOrder { first, then } => {
                smallvec![Effect::chain(vec![env.fetch(first), env.fetch(then)])]
            },
        }
    }
}

fn store_with(env: ListEnvironment) -> Store<ListState, ListAction, ListEnvironment, ListReducer> {
    Store::new(ListState::default(), ListReducer, env)
}

// ============================================================================
// Tests
// ============================================================================

/// State mutations from the reducer are visible through `state()`.
#[tokio::test]
async fn send_applies_reducer_synchronously() {
    let store = store_with(ListEnvironment::instant());

    store.send(ListAction::Refresh { page: 3 }).await.unwrap();

    let page = store.state(|s| s.current_page).await;
    assert_eq!(page, 3);
}

/// A future effect's action is fed back into the reducer.
#[tokio::test]
async fn future_effect_feeds_action_back() {
    let store = store_with(ListEnvironment::instant());

    let loaded = store
        .send_and_wait_for(
            ListAction::Refresh { page: 1 },
            |a| matches!(a, ListAction::Loaded { page: 1, .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert!(matches!(loaded, ListAction::Loaded { page: 1, .. }));
    let items = store.state(|s| s.items.clone()).await;
    assert_eq!(items, vec!["item-1-a", "item-1-b"]);
}

/// `EffectHandle::wait` resolves once the direct effects of an action finish.
#[tokio::test]
async fn handle_wait_covers_direct_effects() {
    let store = store_with(ListEnvironment::with_latency(|_| 10));

    let mut handle = store.send(ListAction::Refresh { page: 1 }).await.unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(1))
        .await
        .unwrap();

    let items = store.state(|s| s.items.len()).await;
    assert_eq!(items, 2);
}

/// Parallel effects run concurrently and both feed back.
#[tokio::test]
async fn parallel_effects_all_complete() {
    let store = store_with(ListEnvironment::instant());

    let result = store
        .send_and_wait_for(
            ListAction::RefreshAll,
            |a| matches!(a, ListAction::ProfileLoaded { .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        ListAction::ProfileLoaded {
            name: "jane".to_string()
        }
    );

    // The list fetch in the same parallel group also lands
    tokio::time::sleep(Duration::from_millis(50)).await;
    let items = store.state(|s| s.items.len()).await;
    assert_eq!(items, 2);
}

/// `Effect::Delay` dispatches its action after the duration.
#[tokio::test]
async fn delay_effect_dispatches_later() {
    let store = store_with(ListEnvironment::instant());

    let loaded = store
        .send_and_wait_for(
            ListAction::RefreshLater { page: 5 },
            |a| matches!(a, ListAction::Loaded { page: 5, .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert!(matches!(loaded, ListAction::Loaded { page: 5, .. }));
}

/// Failure actions propagate through the same feedback loop as successes.
#[tokio::test]
async fn failure_actions_are_observable() {
    let store = store_with(ListEnvironment::with_failing_page(2));

    let failed = store
        .send_and_wait_for(
            ListAction::Refresh { page: 2 },
            |a| matches!(a, ListAction::LoadFailed { page: 2, .. }),
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    if let ListAction::LoadFailed { error, .. } = failed {
        assert_eq!(error, "backend unavailable");
    } else {
        panic!("Expected LoadFailed action");
    }

    // Failure leaves the previously shown items untouched
    let items = store.state(|s| s.items.clone()).await;
    assert!(items.is_empty());
}

/// Two in-flight fetches resolve in completion order, not issue order.
#[tokio::test]
async fn overlapping_fetches_complete_in_latency_order() {
    // Page 1 is slow, page 2 is fast
    let store = store_with(ListEnvironment::with_latency(
        |page| if page == 1 { 80 } else { 5 },
    ));

    store.send(ListAction::Refresh { page: 1 }).await.unwrap();
    store.send(ListAction::Refresh { page: 2 }).await.unwrap();

    // Wait for the slow fetch to land
    tokio::time::sleep(Duration::from_millis(150)).await;

    let (order, items) = store
        .state(|s| (s.load_order.clone(), s.items.clone()))
        .await;
    assert_eq!(order, vec![2, 1]);
    // Last completion wins the display
    assert_eq!(items, vec!["item-1-a", "item-1-b"]);
}

/// Sequential effects run strictly in order: the second fetch starts only
/// after the first one and its feedback reduction finish, even when the
/// first is much slower.
#[tokio::test]
async fn sequential_effects_run_in_order() {
    let store = store_with(ListEnvironment::with_latency(
        |page| if page == 1 { 60 } else { 0 },
    ));

    store
        .send(ListAction::RefreshInOrder { first: 1, then: 2 })
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let (order, items) = store
        .state(|s| (s.load_order.clone(), s.items.clone()))
        .await;
    assert_eq!(order, vec![1, 2]);
    // The chained fetch completes last and owns the display
    assert_eq!(items, vec!["item-2-a", "item-2-b"]);
}

/// `send_and_wait_for` times out when the terminal action never arrives.
#[tokio::test]
async fn wait_for_times_out() {
    let store = store_with(ListEnvironment::instant());

    let result = store
        .send_and_wait_for(
            ListAction::Refresh { page: 1 },
            |a| matches!(a, ListAction::LoadFailed { .. }),
            Duration::from_millis(50),
        )
        .await;

    assert!(matches!(result, Err(StoreError::Timeout)));
}

/// Initial actions are not broadcast; only effect-produced actions are.
#[tokio::test]
async fn initial_actions_not_broadcast() {
    let store = store_with(ListEnvironment::instant());
    let mut rx = store.subscribe_actions();

    store.send(ListAction::Refresh { page: 1 }).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let actions: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], ListAction::Loaded { page: 1, .. }));
}

/// Shutdown rejects new actions and drains pending effects.
#[tokio::test]
async fn shutdown_rejects_new_actions() {
    let store = store_with(ListEnvironment::with_latency(|_| 20));

    store.send(ListAction::Refresh { page: 1 }).await.unwrap();
    store.shutdown(Duration::from_secs(1)).await.unwrap();

    let result = store.send(ListAction::Refresh { page: 2 }).await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));

    // The in-flight fetch drained before shutdown returned, but its feedback
    // action arrived after the shutdown fence and was dropped
    let items = store.state(|s| s.items.len()).await;
    assert_eq!(items, 0);
}

/// Shutdown times out when effects outlive the deadline.
#[tokio::test]
async fn shutdown_times_out_on_long_effects() {
    let store = store_with(ListEnvironment::with_latency(|_| 500));

    store.send(ListAction::Refresh { page: 1 }).await.unwrap();

    let result = store.shutdown(Duration::from_millis(50)).await;
    assert!(matches!(result, Err(StoreError::ShutdownTimeout(_))));
}

/// Cloned stores share state and the shutdown flag.
#[tokio::test]
async fn clones_share_state() {
    let store = store_with(ListEnvironment::instant());
    let clone = store.clone();

    store.send(ListAction::Refresh { page: 7 }).await.unwrap();

    let page = clone.state(|s| s.current_page).await;
    assert_eq!(page, 7);
}
