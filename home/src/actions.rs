//! Home screen actions.
//!
//! Every input to the home reducer is an action: view commands issued by the
//! user, identity pushes forwarded from the authentication layer, and
//! completion events produced by gateway effects.

use crate::error::GatewayError;
use crate::state::{Todo, TodoId, User};

/// All inputs to the home reducer.
///
/// Variants ending in `-ed` / `-Failed` are feedback actions produced by
/// effects; the rest are commands from the view or the identity stream.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeAction {
    // ═══════════════════════════════════════════════════════════════════
    // Identity
    // ═══════════════════════════════════════════════════════════════════
    /// The identity stream pushed a new current user (`None` on logout).
    SessionChanged(Option<User>),

    // ═══════════════════════════════════════════════════════════════════
    // Lifecycle
    // ═══════════════════════════════════════════════════════════════════
    /// First activation of the screen: reset form and pagination, fetch
    /// page 1 and the current user's profile.
    Activate,

    // ═══════════════════════════════════════════════════════════════════
    // List
    // ═══════════════════════════════════════════════════════════════════
    /// Fetch the given page from the collection endpoint.
    LoadPage {
        /// 1-based page to fetch.
        page: u32,
    },

    /// A page fetch completed.
    PageLoaded {
        /// Page that was requested.
        page: u32,
        /// Items of that page, in server order.
        todos: Vec<Todo>,
        /// Server-reported total across all pages.
        total: u32,
    },

    /// A page fetch failed.
    PageLoadFailed {
        /// Page that was requested.
        page: u32,
        /// What went wrong.
        error: GatewayError,
    },

    /// The view navigated to another page. Updates pagination only; the
    /// view issues [`HomeAction::LoadPage`] separately.
    PageChanged {
        /// 1-based page the view navigated to.
        page: u32,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Form
    // ═══════════════════════════════════════════════════════════════════
    /// The title field changed.
    TitleChanged(String),

    /// The description field changed.
    DescriptionChanged(String),

    /// Submit the form: create in create mode, update in edit mode.
    Submit,

    /// Populate the form from an existing item and enter edit mode.
    BeginEdit {
        /// The item to edit.
        todo: Todo,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Mutation completions
    // ═══════════════════════════════════════════════════════════════════
    /// Create succeeded; the server returned the stored item.
    Created(Todo),

    /// Create failed.
    CreateFailed(GatewayError),

    /// Update succeeded; the server returned the stored item.
    Updated(Todo),

    /// Update failed.
    UpdateFailed(GatewayError),

    // ═══════════════════════════════════════════════════════════════════
    // Delete
    // ═══════════════════════════════════════════════════════════════════
    /// Delete the item with the given id.
    Delete {
        /// Id of the item to delete.
        id: TodoId,
    },

    /// Delete succeeded with a server confirmation message.
    Deleted {
        /// Server-supplied confirmation, surfaced as a success alert.
        message: String,
    },

    /// Delete failed.
    DeleteFailed(GatewayError),

    // ═══════════════════════════════════════════════════════════════════
    // View toggles
    // ═══════════════════════════════════════════════════════════════════
    /// Flip the description visibility of one displayed item.
    ToggleDescription {
        /// Id of the displayed item.
        id: TodoId,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Profile
    // ═══════════════════════════════════════════════════════════════════
    /// Profile fetch completed.
    ProfileLoaded(User),

    /// Profile fetch failed.
    ProfileLoadFailed(GatewayError),
}
