//! Mock gateways for testing.
//!
//! In-memory implementations of the gateway traits. They record every call,
//! can be seeded with data, and can be told to fail or to delay specific
//! operations, which makes the reducer's error paths and the list fetch race
//! exercisable without a network.

mod profile;
mod todos;

pub use profile::MockProfileGateway;
pub use todos::{GatewayCall, MockTodoGateway};
