//! Enter/leave phases and per-phase configuration values.
//!
//! Most group options accept either a single value shared by both phases
//! or a two-element `[enter, leave]` pair. [`PerPhase`] models that shape
//! and resolves it for a given [`Phase`].

use serde::{Deserialize, Serialize};

/// Which half of a child's lifecycle a parameter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The child is being animated into the list.
    Enter,
    /// The child is being animated out of the list.
    Leave,
}

impl Phase {
    /// Index of this phase in `[enter, leave]` pairs.
    pub fn index(self) -> usize {
        match self {
            Self::Enter => 0,
            Self::Leave => 1,
        }
    }

    pub fn is_enter(self) -> bool {
        matches!(self, Self::Enter)
    }

    pub fn is_leave(self) -> bool {
        matches!(self, Self::Leave)
    }
}

/// A configuration value that may differ between the enter and leave phase.
///
/// Serializes as either a bare value (shared by both phases) or a
/// two-element `[enter, leave]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerPhase<T> {
    /// One value applied to both phases.
    Uniform(T),
    /// Distinct `[enter, leave]` values.
    Split([T; 2]),
}

impl<T> PerPhase<T> {
    /// Build a split value from explicit enter and leave halves.
    pub fn split(enter: T, leave: T) -> Self {
        Self::Split([enter, leave])
    }

    /// The value for `phase`.
    pub fn for_phase(&self, phase: Phase) -> &T {
        match self {
            Self::Uniform(value) => value,
            Self::Split(pair) => &pair[phase.index()],
        }
    }

    /// The enter-phase value.
    pub fn enter(&self) -> &T {
        self.for_phase(Phase::Enter)
    }

    /// The leave-phase value.
    pub fn leave(&self) -> &T {
        self.for_phase(Phase::Leave)
    }

    /// Whether an explicit leave half was supplied.
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }
}

impl<T> From<T> for PerPhase<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}

impl<T> From<[T; 2]> for PerPhase<T> {
    fn from(pair: [T; 2]) -> Self {
        Self::Split(pair)
    }
}

impl<T> From<(T, T)> for PerPhase<T> {
    fn from((enter, leave): (T, T)) -> Self {
        Self::split(enter, leave)
    }
}
