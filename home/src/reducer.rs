//! Home screen reducer.
//!
//! All business logic of the session-aware list controller lives here as a
//! pure function over [`HomeState`].
//!
//! # Flow
//!
//! 1. Activation resets the form and pagination, then fetches page 1 and the
//!    current user's profile concurrently
//! 2. User interaction (submit, edit, delete, page change) issues gateway
//!    effects
//! 3. Every successful mutation re-fetches the current page instead of
//!    patching the list locally, so the view always reflects server truth
//! 4. Each completion writes the outcome to the alert channel: success paths
//!    clear it (delete additionally publishes the server's confirmation),
//!    failure paths overwrite it with the error
//!
//! # Concurrency
//!
//! Overlapping page fetches are not cancelled: both complete and the later
//! completion overwrites the displayed items (last completion wins, not last
//! request). Writes stay consistent because the store serializes all
//! reductions.

use crate::actions::HomeAction;
use crate::environment::HomeEnvironment;
use crate::providers::{ProfileGateway, TodoDraft, TodoGateway};
use crate::state::{HomeState, PaginationState, TodoId};
use todo_client_core::effect::Effect;
use todo_client_core::reducer::Reducer;
use todo_client_core::{SmallVec, smallvec};

/// Home screen reducer.
///
/// Stateless; all data lives in [`HomeState`] and the environment.
#[derive(Debug, Clone)]
pub struct HomeReducer<T, P> {
    /// Phantom data to hold type parameters.
    _phantom: std::marker::PhantomData<(T, P)>,
}

impl<T, P> HomeReducer<T, P> {
    /// Create a new home reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T, P> Default for HomeReducer<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> HomeReducer<T, P>
where
    T: TodoGateway + Clone + 'static,
    P: ProfileGateway + Clone + 'static,
{
    /// Effect: fetch one page of the collection.
    fn fetch_page(env: &HomeEnvironment<T, P>, page: u32) -> Effect<HomeAction> {
        let todos = env.todos.clone();

        Effect::future(async move {
            match todos.list(page).await {
                Ok(result) => Some(HomeAction::PageLoaded {
                    page,
                    todos: result.todos,
                    total: result.total,
                }),
                Err(error) => Some(HomeAction::PageLoadFailed { page, error }),
            }
        })
    }

    /// Effect: fetch the profile for the given email.
    fn fetch_profile(env: &HomeEnvironment<T, P>, email: String) -> Effect<HomeAction> {
        let profile = env.profile.clone();

        Effect::future(async move {
            match profile.get_profile(&email).await {
                Ok(user) => Some(HomeAction::ProfileLoaded(user)),
                Err(error) => Some(HomeAction::ProfileLoadFailed(error)),
            }
        })
    }

    /// Effect: store a new todo.
    fn create_todo(env: &HomeEnvironment<T, P>, draft: TodoDraft) -> Effect<HomeAction> {
        let todos = env.todos.clone();

        Effect::future(async move {
            match todos.create(&draft).await {
                Ok(todo) => Some(HomeAction::Created(todo)),
                Err(error) => Some(HomeAction::CreateFailed(error)),
            }
        })
    }

    /// Effect: replace an existing todo.
    fn update_todo(
        env: &HomeEnvironment<T, P>,
        draft: TodoDraft,
        id: TodoId,
    ) -> Effect<HomeAction> {
        let todos = env.todos.clone();

        Effect::future(async move {
            match todos.update(&draft, &id).await {
                Ok(todo) => Some(HomeAction::Updated(todo)),
                Err(error) => Some(HomeAction::UpdateFailed(error)),
            }
        })
    }

    /// Effect: delete a todo.
    fn delete_todo(env: &HomeEnvironment<T, P>, id: TodoId) -> Effect<HomeAction> {
        let todos = env.todos.clone();

        Effect::future(async move {
            match todos.delete(&id).await {
                Ok(receipt) => Some(HomeAction::Deleted {
                    message: receipt.message,
                }),
                Err(error) => Some(HomeAction::DeleteFailed(error)),
            }
        })
    }
}

impl<T, P> Reducer for HomeReducer<T, P>
where
    T: TodoGateway + Clone + 'static,
    P: ProfileGateway + Clone + 'static,
{
    type State = HomeState;
    type Action = HomeAction;
    type Environment = HomeEnvironment<T, P>;

    #[allow(clippy::too_many_lines)] // One match arm per action keeps the flow readable
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Identity: last-write-wins, no buffering
            // ═══════════════════════════════════════════════════════════════
            HomeAction::SessionChanged(user) => {
                state.current_user = user;
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════════
            // Activation: reset form + pagination, fetch page 1 and profile
            // ═══════════════════════════════════════════════════════════════
            HomeAction::Activate => {
                state.form.reset();
                state.edit.clear();
                state.pagination = PaginationState::default();
                state.loading = true;

                let mut effects = smallvec![Self::fetch_page(env, 1)];

                // The profile fetch needs an identity; the identity stream
                // replays its latest value to new subscribers, so a logged-in
                // session always has one by the time the screen activates.
                if let Some(user) = &state.current_user {
                    effects.push(Self::fetch_profile(env, user.email.clone()));
                } else {
                    tracing::warn!("Home activated without a current user, skipping profile");
                }

                effects
            },

            // ═══════════════════════════════════════════════════════════════
            // List fetch and pagination
            // ═══════════════════════════════════════════════════════════════
            HomeAction::LoadPage { page } => {
                smallvec![Self::fetch_page(env, page)]
            },

            HomeAction::PageLoaded { page, todos, total } => {
                tracing::debug!(page, count = todos.len(), total, "Page loaded");
                state.todos = todos;
                state.pagination.total_items = total;
                state.loading = false;
                env.alerts.clear();
                SmallVec::new()
            },

            HomeAction::PageLoadFailed { page, error } => {
                tracing::warn!(page, %error, "Page load failed");
                // Prior items stay visible, stale but better than blank
                state.loading = false;
                env.alerts.error(error.message());
                SmallVec::new()
            },

            HomeAction::PageChanged { page } => {
                // Pagination only; the view triggers LoadPage for the new
                // page itself
                state.pagination.current_page = page;
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════════
            // Form editing
            // ═══════════════════════════════════════════════════════════════
            HomeAction::TitleChanged(title) => {
                state.form.title = title;
                SmallVec::new()
            },

            HomeAction::DescriptionChanged(description) => {
                state.form.description = description;
                SmallVec::new()
            },

            HomeAction::BeginEdit { todo } => {
                state.form.title = todo.title;
                state.form.description = todo.description;
                state.edit.target = Some(todo.id);
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════════
            // Submission: one form, two paths, picked by the edit tag
            // ═══════════════════════════════════════════════════════════════
            HomeAction::Submit => {
                state.form.submitted = true;

                // Invalid form: reject locally, no gateway call, loading
                // untouched so the view keeps showing validation errors
                if !state.form.is_valid() {
                    return SmallVec::new();
                }

                state.loading = true;
                let draft = TodoDraft {
                    title: state.form.title.clone(),
                    description: state.form.description.clone(),
                };

                match &state.edit.target {
                    Some(id) => smallvec![Self::update_todo(env, draft, id.clone())],
                    None => smallvec![Self::create_todo(env, draft)],
                }
            },

            HomeAction::Created(todo) => {
                tracing::debug!(id = %todo.id, "Todo created");
                state.loading = false;
                state.form.reset();
                env.alerts.clear();
                smallvec![Self::fetch_page(env, state.pagination.current_page)]
            },

            HomeAction::CreateFailed(error) => {
                tracing::warn!(%error, "Create failed");
                // Form retained so the user can retry
                state.loading = false;
                env.alerts.error(error.message());
                SmallVec::new()
            },

            HomeAction::Updated(todo) => {
                tracing::debug!(id = %todo.id, "Todo updated");
                state.loading = false;
                state.form.reset();
                state.edit.clear();
                env.alerts.clear();
                smallvec![Self::fetch_page(env, state.pagination.current_page)]
            },

            HomeAction::UpdateFailed(error) => {
                tracing::warn!(%error, "Update failed");
                // Form and edit target retained so the user can retry
                state.loading = false;
                env.alerts.error(error.message());
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════════
            // Delete: fire-and-confirm, no prompt, no undo
            // ═══════════════════════════════════════════════════════════════
            HomeAction::Delete { id } => {
                smallvec![Self::delete_todo(env, id)]
            },

            HomeAction::Deleted { message } => {
                state.loading = false;
                env.alerts.success(message);
                smallvec![Self::fetch_page(env, state.pagination.current_page)]
            },

            HomeAction::DeleteFailed(error) => {
                tracing::warn!(%error, "Delete failed");
                state.loading = false;
                env.alerts.error(error.message());
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════════
            // View toggles
            // ═══════════════════════════════════════════════════════════════
            HomeAction::ToggleDescription { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|t| t.id == id) {
                    todo.display_description = !todo.display_description;
                }
                SmallVec::new()
            },

            // ═══════════════════════════════════════════════════════════════
            // Profile
            // ═══════════════════════════════════════════════════════════════
            HomeAction::ProfileLoaded(user) => {
                state.profile = Some(user);
                state.loading = false;
                env.alerts.clear();
                SmallVec::new()
            },

            HomeAction::ProfileLoadFailed(error) => {
                tracing::warn!(%error, "Profile load failed");
                state.loading = false;
                env.alerts.error(error.message());
                SmallVec::new()
            },
        }
    }
}
