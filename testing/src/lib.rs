//! # Todo Client Testing
//!
//! Testing utilities for reducers in the todo client architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for exercising reducers in isolation
//! - Assertion helpers for effect lists
//!
//! ## Example
//!
//! ```ignore
//! use todo_client_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(HomeReducer::new())
//!     .with_env(test_environment())
//!     .given_state(HomeState::default())
//!     .when_action(HomeAction::PageChanged { page: 2 })
//!     .then_state(|state| {
//!         assert_eq!(state.pagination.current_page, 2);
//!     })
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
