//! # Todo Client Home
//!
//! The home screen of the todo client: a session-aware, paginated CRUD list
//! over a remote todo collection.
//!
//! The feature is built as a reducer over a single view model:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! - Identity pushes from the authentication layer arrive as
//!   [`HomeAction::SessionChanged`] via the [`identity::IdentityStream`]
//! - Gateway completions (list pages, mutations, profile) arrive as feedback
//!   actions produced by effects
//! - Notifications go out through the single-slot [`alert::AlertChannel`]
//!
//! Every mutation (create, update, delete) is confirmed by a re-fetch of the
//! current page rather than a local patch, so the view always reflects server
//! truth including server-assigned ids and the recomputed total.
//!
//! ## Example: creating a todo
//!
//! ```rust,ignore
//! use todo_client_home::*;
//!
//! let effects = reducer.reduce(
//!     &mut state,
//!     HomeAction::TitleChanged("Buy milk".into()),
//!     &env,
//! );
//!
//! let effects = reducer.reduce(&mut state, HomeAction::Submit, &env);
//! // → one create effect; its completion re-fetches the current page
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod alert;
pub mod config;
pub mod constants;
pub mod controller;
pub mod environment;
pub mod error;
pub mod identity;
pub mod providers;
pub mod reducer;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use actions::HomeAction;
pub use alert::{Alert, AlertChannel};
pub use controller::HomeController;
pub use environment::HomeEnvironment;
pub use error::{GatewayError, Result};
pub use identity::IdentityStream;
pub use reducer::HomeReducer;
pub use state::{EditContext, FormState, HomeState, PaginationState, Todo, TodoId, User};
