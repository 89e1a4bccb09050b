//! Single-slot alert channel.
//!
//! Process-wide notification sink for the home screen. Holds at most one
//! current alert; each write replaces the previous one (overwrite, never
//! queue), so the view only ever renders the most recent outcome.

use todo_client_core::observable::{Observable, Subscription};

/// The current notification, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Alert {
    /// Nothing to show.
    #[default]
    None,

    /// A confirmation message.
    Success(String),

    /// An error message.
    Error(String),
}

impl Alert {
    /// The message text, if an alert is set.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(msg) | Self::Error(msg) => Some(msg),
        }
    }
}

/// Shared handle to the single alert slot.
///
/// Cloning yields another handle to the same slot. Writes are synchronous,
/// so the reducer can publish outcomes during reduction without an effect.
#[derive(Debug, Clone, Default)]
pub struct AlertChannel {
    slot: Observable<Alert>,
}

impl AlertChannel {
    /// Create an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with a success message.
    pub fn success(&self, message: impl Into<String>) {
        self.slot.set(Alert::Success(message.into()));
    }

    /// Replace the slot with an error message.
    pub fn error(&self, message: impl Into<String>) {
        self.slot.set(Alert::Error(message.into()));
    }

    /// Empty the slot.
    pub fn clear(&self) {
        self.slot.set(Alert::None);
    }

    /// The current alert.
    #[must_use]
    pub fn current(&self) -> Alert {
        self.slot.get()
    }

    /// Subscribe to alert replacements (for the rendering layer).
    #[must_use]
    pub fn subscribe(&self) -> Subscription<Alert> {
        self.slot.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_overwrite_the_slot() {
        let alerts = AlertChannel::new();
        alerts.error("first");
        alerts.success("second");
        assert_eq!(alerts.current(), Alert::Success("second".to_string()));
    }

    #[test]
    fn clear_empties_the_slot() {
        let alerts = AlertChannel::new();
        alerts.error("boom");
        alerts.clear();
        assert_eq!(alerts.current(), Alert::None);
        assert_eq!(alerts.current().message(), None);
    }

    #[test]
    fn clones_share_the_slot() {
        let alerts = AlertChannel::new();
        let other = alerts.clone();
        other.success("saved");
        assert_eq!(alerts.current(), Alert::Success("saved".to_string()));
    }
}
