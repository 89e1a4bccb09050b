//! Home screen state types.
//!
//! This module defines the view model owned by the home reducer.
//! All types are `Clone` to support the functional architecture pattern.

use crate::constants::ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// ID Types
// ═══════════════════════════════════════════════════════════════════════

/// Server-assigned identifier for a todo item.
///
/// Opaque to the client; the server mints it on create and the client only
/// echoes it back on update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(pub String);

impl TodoId {
    /// Wrap a raw server id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string, for building request paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Core State Types
// ═══════════════════════════════════════════════════════════════════════

/// Identity record pushed by the authentication layer.
///
/// The home screen treats this as read-only: it is replaced wholesale on
/// every identity push and never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Email address, the lookup key for the profile gateway.
    pub email: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Create a user record from an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}

/// A single todo item.
///
/// `display_description` is a client-only view flag: it is skipped during
/// (de)serialization, so it never round-trips to the server and resets to
/// collapsed whenever a list re-fetch replaces the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned id.
    pub id: TodoId,

    /// Title (required, non-empty).
    pub title: String,

    /// Free-form description (may be empty).
    #[serde(default)]
    pub description: String,

    /// Whether the view currently shows the description for this item.
    #[serde(skip)]
    pub display_description: bool,
}

impl Todo {
    /// Create a todo item with the description collapsed.
    pub fn new(id: TodoId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            display_description: false,
        }
    }
}

/// Pagination state for the list view.
///
/// `total_items` is the server-reported count across all pages; it is only
/// ever set from a successful page fetch. `current_page` changes only through
/// explicit navigation or the reset to page 1 at activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Fixed page size.
    pub items_per_page: u32,

    /// 1-based page the view is on.
    pub current_page: u32,

    /// Server-reported total item count across all pages.
    pub total_items: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            current_page: 1,
            total_items: 0,
        }
    }
}

/// Create-vs-edit mode for the shared form.
///
/// The same form instance serves both modes; the two submit paths are kept
/// mutually exclusive by this single tag. `target` is the id being edited,
/// `None` means create mode, so a target id cannot exist outside edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditContext {
    /// Id of the todo being edited, or `None` in create mode.
    pub target: Option<TodoId>,
}

impl EditContext {
    /// Whether the form is in edit mode.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    /// Leave edit mode (back to create).
    pub fn clear(&mut self) {
        self.target = None;
    }
}

/// The shared create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    /// Title field (required).
    pub title: String,

    /// Description field (optional).
    pub description: String,

    /// Set on every submit attempt, valid or not, so the view can show
    /// validation errors. Reset only after a successful mutation.
    pub submitted: bool,
}

impl FormState {
    /// Whether the form passes local validation (non-blank title).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Reset all fields, including the submitted marker.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Root state for the home screen.
///
/// # Examples
///
/// ```
/// # use todo_client_home::HomeState;
/// let state = HomeState::default();
/// assert!(state.current_user.is_none());
/// assert_eq!(state.pagination.current_page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomeState {
    /// Latest identity push (last-write-wins; `None` means logged out).
    pub current_user: Option<User>,

    /// Profile detail fetched for the current user at activation.
    pub profile: Option<User>,

    /// The currently displayed page of todos.
    pub todos: Vec<Todo>,

    /// Pagination state.
    pub pagination: PaginationState,

    /// The shared create/edit form.
    pub form: FormState,

    /// Create-vs-edit mode tag.
    pub edit: EditContext,

    /// Whether a gateway operation is in flight.
    pub loading: bool,
}
