//! Event type definitions for the event bus.

use serde::{Deserialize, Serialize};

use crate::model::AppState;

/// Where the session's initial state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateSource {
    /// Decoded from the `state` parameter of the opened location.
    SharedLink,
    /// Restored from the durable store.
    DurableStore,
    /// Nothing usable was found; hard-coded defaults.
    Defaults,
}

impl std::fmt::Display for StateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateSource::SharedLink => write!(f, "shared link"),
            StateSource::DurableStore => write!(f, "durable store"),
            StateSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// Root event enum for layout events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// Startup reconciliation picked an initial state.
    Restored {
        source: StateSource,
        snapshot: AppState,
    },
    /// A transition was persisted and published.
    Committed {
        /// Name of the action that produced the state.
        action: String,
        snapshot: AppState,
    },
    /// A transition could not be persisted; the live state is unchanged.
    CommitFailed { action: String, reason: String },
}

impl LayoutEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            LayoutEvent::Restored { .. } => EventCategory::Startup,
            LayoutEvent::Committed { .. } => EventCategory::Commit,
            LayoutEvent::CommitFailed { .. } => EventCategory::Error,
        }
    }

    /// The state carried by the event, if any.
    pub fn snapshot(&self) -> Option<&AppState> {
        match self {
            LayoutEvent::Restored { snapshot, .. } | LayoutEvent::Committed { snapshot, .. } => {
                Some(snapshot)
            }
            LayoutEvent::CommitFailed { .. } => None,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::Restored { source, snapshot } => format!(
                "Restored {} elements from {}",
                snapshot.elements.len(),
                source
            ),
            LayoutEvent::Committed { action, snapshot } => format!(
                "Committed {} ({} elements)",
                action,
                snapshot.elements.len()
            ),
            LayoutEvent::CommitFailed { action, reason } => {
                format!("Commit of {} failed: {}", action, reason)
            }
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Startup reconciliation events.
    Startup,
    /// Committed transitions.
    Commit,
    /// Failed commits.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Startup => write!(f, "Startup"),
            EventCategory::Commit => write!(f, "Commit"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}
