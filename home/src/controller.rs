//! Home controller.
//!
//! The imperative shell around the home reducer: owns the store, keeps the
//! identity subscription alive, and exposes the operations the view layer
//! calls. Dropping the controller detaches the identity subscription, so no
//! observer outlives the screen.

use crate::actions::HomeAction;
use crate::environment::HomeEnvironment;
use crate::identity::IdentityStream;
use crate::providers::{ProfileGateway, TodoGateway};
use crate::reducer::HomeReducer;
use crate::state::{HomeState, Todo, TodoId};
use std::sync::Arc;
use std::time::Duration;
use todo_client_runtime::{EffectHandle, Store, StoreError};
use tokio::task::JoinHandle;

type HomeStore<T, P> = Store<HomeState, HomeAction, HomeEnvironment<T, P>, HomeReducer<T, P>>;

/// Session-aware list controller for the home screen.
///
/// Construction subscribes to the identity stream; the latest identity is
/// captured into the initial state immediately (the stream replays its
/// current value to new subscribers), and later pushes are forwarded to the
/// store as [`HomeAction::SessionChanged`] by a background task.
///
/// # Teardown
///
/// Dropping the controller aborts the forwarding task and releases the
/// subscription. A push on the identity stream after the drop reaches no
/// part of the controller.
///
/// # Example
///
/// ```rust,ignore
/// let controller = HomeController::new(env, &identity);
/// controller.activate().await?;
/// controller.set_title("Buy milk".to_string()).await?;
/// controller.submit().await?;
/// ```
pub struct HomeController<T, P>
where
    T: TodoGateway + Clone + Send + Sync + 'static,
    P: ProfileGateway + Clone + Send + Sync + 'static,
{
    store: Arc<HomeStore<T, P>>,
    identity_forwarder: JoinHandle<()>,
}

impl<T, P> HomeController<T, P>
where
    T: TodoGateway + Clone + Send + Sync + 'static,
    P: ProfileGateway + Clone + Send + Sync + 'static,
{
    /// Create a controller bound to the given identity stream.
    ///
    /// The subscription replays the latest identity synchronously, so a
    /// logged-in session is visible in state before the first activation.
    #[must_use]
    pub fn new(environment: HomeEnvironment<T, P>, identity: &IdentityStream) -> Self {
        let initial_state = HomeState {
            current_user: identity.current(),
            ..HomeState::default()
        };

        let store = Arc::new(Store::new(initial_state, HomeReducer::new(), environment));

        let mut subscription = identity.subscribe();
        let forwarder_store = Arc::clone(&store);
        let identity_forwarder = tokio::spawn(async move {
            while let Ok(user) = subscription.changed().await {
                if forwarder_store
                    .send(HomeAction::SessionChanged(user))
                    .await
                    .is_err()
                {
                    // Store shut down, nothing left to forward to
                    break;
                }
            }
        });

        Self {
            store,
            identity_forwarder,
        }
    }

    /// First activation: reset form and pagination, fetch page 1 and the
    /// current user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn activate(&self) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::Activate).await
    }

    /// Fetch the given page of todos.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn get_all_todos(&self, page: u32) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::LoadPage { page }).await
    }

    /// Navigate to another page. Pagination state only; call
    /// [`Self::get_all_todos`] to load the page's data.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn page_changed(&self, page: u32) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::PageChanged { page }).await
    }

    /// Update the form's title field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn set_title(&self, title: String) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::TitleChanged(title)).await
    }

    /// Update the form's description field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn set_description(&self, description: String) -> Result<EffectHandle, StoreError> {
        self.store
            .send(HomeAction::DescriptionChanged(description))
            .await
    }

    /// Submit the form: create in create mode, update in edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn submit(&self) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::Submit).await
    }

    /// Populate the form from an existing item and enter edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn edit_todo(&self, todo: Todo) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::BeginEdit { todo }).await
    }

    /// Delete the item with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn delete_todo(&self, id: TodoId) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::Delete { id }).await
    }

    /// Flip the description visibility of one displayed item.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    pub async fn display_description(&self, id: TodoId) -> Result<EffectHandle, StoreError> {
        self.store.send(HomeAction::ToggleDescription { id }).await
    }

    /// Read the current view model via a closure.
    pub async fn state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&HomeState) -> R,
    {
        self.store.state(f).await
    }

    /// The underlying store, for observing actions in integration points.
    #[must_use]
    pub fn store(&self) -> &Arc<HomeStore<T, P>> {
        &self.store
    }

    /// Gracefully shut down, draining in-flight gateway effects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if effects outlive the
    /// timeout.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.store.shutdown(timeout).await
    }
}

impl<T, P> Drop for HomeController<T, P>
where
    T: TodoGateway + Clone + Send + Sync + 'static,
    P: ProfileGateway + Clone + Send + Sync + 'static,
{
    fn drop(&mut self) {
        // Mandatory teardown: release the identity subscription so no
        // dangling observer keeps receiving pushes
        self.identity_forwarder.abort();
    }
}
