//! Home environment.
//!
//! This module defines the environment type for dependency injection
//! in the home reducer.

use crate::alert::AlertChannel;
use crate::providers::{ProfileGateway, TodoGateway};

/// Home environment.
///
/// Contains all external collaborators the home reducer needs. The gateways
/// are stateless request/response collaborators; the alert channel is the
/// single-slot sink the reducer writes outcomes to synchronously during
/// reduction.
///
/// # Type Parameters
///
/// - `T`: Todo collection gateway
/// - `P`: Profile gateway
#[derive(Clone)]
pub struct HomeEnvironment<T, P>
where
    T: TodoGateway + Clone,
    P: ProfileGateway + Clone,
{
    /// Todo collection gateway.
    pub todos: T,

    /// Profile gateway.
    pub profile: P,

    /// Single-slot notification sink.
    pub alerts: AlertChannel,
}

impl<T, P> HomeEnvironment<T, P>
where
    T: TodoGateway + Clone,
    P: ProfileGateway + Clone,
{
    /// Create a new home environment.
    #[must_use]
    pub const fn new(todos: T, profile: P, alerts: AlertChannel) -> Self {
        Self {
            todos,
            profile,
            alerts,
        }
    }
}
