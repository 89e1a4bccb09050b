//! Mock todo collection gateway.

use crate::constants::ITEMS_PER_PAGE;
use crate::error::{GatewayError, Result};
use crate::providers::{DeleteReceipt, Page, TodoDraft, TodoGateway};
use crate::state::{Todo, TodoId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded gateway invocation, for asserting call counts and payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// `list(page)` was invoked.
    List {
        /// Requested page.
        page: u32,
    },
    /// `create(draft)` was invoked.
    Create {
        /// Submitted draft.
        draft: TodoDraft,
    },
    /// `update(draft, id)` was invoked.
    Update {
        /// Submitted draft.
        draft: TodoDraft,
        /// Target id.
        id: TodoId,
    },
    /// `delete(id)` was invoked.
    Delete {
        /// Target id.
        id: TodoId,
    },
}

#[derive(Debug, Default)]
struct Inner {
    /// Stored items in insertion order.
    items: Vec<Todo>,
    /// Calls in invocation order.
    calls: Vec<GatewayCall>,
    /// When set, every operation fails with this error.
    failure: Option<GatewayError>,
    /// Artificial latency for `list`, per page.
    list_delays: HashMap<u32, Duration>,
    /// Counter for minted ids.
    next_id: u32,
}

/// Mock todo collection gateway.
///
/// Uses in-memory storage for testing. Paginates with the same fixed page
/// size as the real backend and mints sequential ids on create.
#[derive(Debug, Clone, Default)]
pub struct MockTodoGateway {
    inner: Arc<Mutex<Inner>>,
}

impl MockTodoGateway {
    /// Create an empty mock gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway seeded with items.
    #[must_use]
    pub fn with_items(items: Vec<Todo>) -> Self {
        let gateway = Self::new();
        if let Ok(mut inner) = gateway.inner.lock() {
            inner.next_id = u32::try_from(items.len()).unwrap_or(u32::MAX);
            inner.items = items;
        }
        gateway
    }

    /// Make every subsequent operation fail with the given error.
    pub fn fail_with(&self, error: GatewayError) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failure = Some(error);
        }
    }

    /// Let subsequent operations succeed again.
    pub fn recover(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failure = None;
        }
    }

    /// Delay `list` calls for the given page.
    pub fn set_list_delay(&self, page: u32, delay: Duration) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.list_delays.insert(page, delay);
        }
    }

    /// All recorded calls, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.lock().map(|i| i.calls.clone()).unwrap_or_default()
    }

    /// Number of `list` calls recorded so far.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, GatewayCall::List { .. }))
            .count()
    }

    /// Current stored items (across all pages).
    #[must_use]
    pub fn items(&self) -> Vec<Todo> {
        self.inner.lock().map(|i| i.items.clone()).unwrap_or_default()
    }

    fn internal_error() -> GatewayError {
        GatewayError::Remote("mock gateway poisoned".to_string())
    }
}

impl TodoGateway for MockTodoGateway {
    fn list(&self, page: u32) -> impl Future<Output = Result<Page>> + Send {
        let inner = Arc::clone(&self.inner);

        async move {
            let delay = {
                let mut guard = inner.lock().map_err(|_| Self::internal_error())?;
                guard.calls.push(GatewayCall::List { page });
                guard.list_delays.get(&page).copied()
            };

            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let guard = inner.lock().map_err(|_| Self::internal_error())?;
            if let Some(error) = &guard.failure {
                return Err(error.clone());
            }

            let total = u32::try_from(guard.items.len()).unwrap_or(u32::MAX);
            let start = (page.saturating_sub(1) * ITEMS_PER_PAGE) as usize;
            let todos = guard
                .items
                .iter()
                .skip(start)
                .take(ITEMS_PER_PAGE as usize)
                .cloned()
                .collect();

            Ok(Page { todos, total })
        }
    }

    fn create(&self, draft: &TodoDraft) -> impl Future<Output = Result<Todo>> + Send {
        let inner = Arc::clone(&self.inner);
        let draft = draft.clone();

        async move {
            let mut guard = inner.lock().map_err(|_| Self::internal_error())?;
            guard.calls.push(GatewayCall::Create {
                draft: draft.clone(),
            });

            if let Some(error) = &guard.failure {
                return Err(error.clone());
            }

            guard.next_id += 1;
            let todo = Todo::new(
                TodoId::new(format!("todo-{}", guard.next_id)),
                draft.title,
                draft.description,
            );
            guard.items.push(todo.clone());

            Ok(todo)
        }
    }

    fn update(&self, draft: &TodoDraft, id: &TodoId) -> impl Future<Output = Result<Todo>> + Send {
        let inner = Arc::clone(&self.inner);
        let draft = draft.clone();
        let id = id.clone();

        async move {
            let mut guard = inner.lock().map_err(|_| Self::internal_error())?;
            guard.calls.push(GatewayCall::Update {
                draft: draft.clone(),
                id: id.clone(),
            });

            if let Some(error) = &guard.failure {
                return Err(error.clone());
            }

            let Some(stored) = guard.items.iter_mut().find(|t| t.id == id) else {
                return Err(GatewayError::Remote("not found".to_string()));
            };

            stored.title = draft.title;
            stored.description = draft.description;
            Ok(stored.clone())
        }
    }

    fn delete(&self, id: &TodoId) -> impl Future<Output = Result<DeleteReceipt>> + Send {
        let inner = Arc::clone(&self.inner);
        let id = id.clone();

        async move {
            let mut guard = inner.lock().map_err(|_| Self::internal_error())?;
            guard.calls.push(GatewayCall::Delete { id: id.clone() });

            if let Some(error) = &guard.failure {
                return Err(error.clone());
            }

            let before = guard.items.len();
            guard.items.retain(|t| t.id != id);
            if guard.items.len() == before {
                return Err(GatewayError::Remote("not found".to_string()));
            }

            Ok(DeleteReceipt {
                message: "Todo deleted successfully".to_string(),
            })
        }
    }
}
