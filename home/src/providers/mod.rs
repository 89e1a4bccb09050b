//! Gateways to the remote backend.
//!
//! This module defines traits for the external collaborators the home
//! reducer calls: the todo collection endpoint and the user profile
//! endpoint. These traits enable dependency injection and make the home
//! logic testable.
//!
//! Gateways are **interfaces**, not implementations. The reducer depends on
//! these traits; production wires in the HTTP implementations from
//! [`http`], tests wire in the in-memory mocks.
//!
//! All operations are stateless request/response: the gateway holds no list
//! state, imposes no retry policy, and reports each failure exactly once to
//! its caller.

use crate::error::Result;
use crate::state::{Todo, TodoId, User};
use serde::{Deserialize, Serialize};
use std::future::Future;

pub mod http;

pub use http::{HttpProfileGateway, HttpTodoGateway};

/// One page of the remote todo collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Items of this page, in server order. At most one page size worth.
    pub todos: Vec<Todo>,

    /// Total item count across all pages. Authoritative for the
    /// pagination range shown by the view.
    pub total: u32,
}

/// The client-supplied part of a todo, sent on create and update.
///
/// The server owns the id; the draft never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    /// Title (validated non-blank before any gateway call).
    pub title: String,

    /// Free-form description.
    pub description: String,
}

/// Server confirmation for a completed delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    /// Human-readable confirmation, surfaced as a success alert.
    pub message: String,
}

/// CRUD operations against the remote todo collection.
///
/// Each operation resolves with a typed payload or fails with a
/// [`crate::GatewayError`]. No caching, no retries: one call, one outcome.
pub trait TodoGateway: Send + Sync {
    /// Fetch one page of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    fn list(&self, page: u32) -> impl Future<Output = Result<Page>> + Send;

    /// Store a new todo. The server assigns the id and returns the stored
    /// item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    fn create(&self, draft: &TodoDraft) -> impl Future<Output = Result<Todo>> + Send;

    /// Replace the title and description of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the id is unknown, or the
    /// response cannot be decoded.
    fn update(&self, draft: &TodoDraft, id: &TodoId) -> impl Future<Output = Result<Todo>> + Send;

    /// Remove a todo.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the id is unknown.
    fn delete(&self, id: &TodoId) -> impl Future<Output = Result<DeleteReceipt>> + Send;
}

/// Lookup of the authenticated user's profile detail.
pub trait ProfileGateway: Send + Sync {
    /// Fetch the profile record for the given email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no profile exists for the
    /// email.
    fn get_profile(&self, email: &str) -> impl Future<Output = Result<User>> + Send;
}
