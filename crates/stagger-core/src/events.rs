//! Lifecycle events observable from a staggered group.
//!
//! The controller records one event per lifecycle transition; the host
//! drains the queue after delivering engine callbacks (to remove departed
//! entries from application state, chain follow-up animations, and so on).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use stagger_motion::Phase;

/// A lifecycle transition the controller recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupEvent {
    /// An enter animation began; the child's content became visible.
    EnterStarted { key: String },

    /// An enter animation finished.
    EnterFinished { key: String },

    /// A leave animation began.
    LeaveStarted { key: String },

    /// A leave animation finished; the child's content is hidden.
    LeaveFinished { key: String },

    /// The last outstanding leave finished and departed keys were dropped
    /// from the display list. `kept` is the list length after the flush.
    Flushed { kept: usize },
}

impl GroupEvent {
    /// The key this event concerns, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::EnterStarted { key }
            | Self::EnterFinished { key }
            | Self::LeaveStarted { key }
            | Self::LeaveFinished { key } => Some(key),
            Self::Flushed { .. } => None,
        }
    }

    /// The phase this event belongs to, if any.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::EnterStarted { .. } | Self::EnterFinished { .. } => Some(Phase::Enter),
            Self::LeaveStarted { .. } | Self::LeaveFinished { .. } => Some(Phase::Leave),
            Self::Flushed { .. } => None,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::EnterStarted { .. } | Self::LeaveStarted { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::EnterFinished { .. } | Self::LeaveFinished { .. })
    }

    pub fn is_flush(&self) -> bool {
        matches!(self, Self::Flushed { .. })
    }
}

/// FIFO queue of group events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GroupEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GroupEvent) {
        self.events.push_back(event);
    }

    /// Remove and return the oldest event.
    pub fn pop(&mut self) -> Option<GroupEvent> {
        self.events.pop_front()
    }

    /// Remove and return all events, oldest first.
    pub fn drain(&mut self) -> Vec<GroupEvent> {
        self.events.drain(..).collect()
    }

    /// The oldest event without removing it.
    pub fn peek(&self) -> Option<&GroupEvent> {
        self.events.front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Events concerning `key`, oldest first, without removing them.
    pub fn events_for_key(&self, key: &str) -> Vec<&GroupEvent> {
        self.events
            .iter()
            .filter(|event| event.key() == Some(key))
            .collect()
    }
}
