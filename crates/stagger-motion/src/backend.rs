//! The seam between the list controller and its host.
//!
//! The controller never touches a real node tree or animation engine; it
//! drives both through [`AnimationBackend`]. Implementations bridge to the
//! host renderer (node lookup, class markers) and to the animation engine
//! (play/stop). The controller's side of the contract: it issues one
//! `stop` before any new `play` on the same node, and skips the operation
//! entirely when [`AnimationBackend::is_mounted`] reports false.
//!
//! Engine begin/complete callbacks do not pass through this trait; the
//! host forwards them to the group's notification methods.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::phase::Phase;
use crate::preset::MotionProps;

/// One play instruction for the animation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayCommand {
    /// Which lifecycle phase this command animates.
    pub phase: Phase,

    /// Delay before the animation starts, in milliseconds.
    pub delay_ms: f32,

    /// Duration of the animation, in milliseconds.
    pub duration_ms: f32,

    /// Easing curve, already resolved.
    pub easing: Easing,

    /// Property pairs to animate, `[shown, hidden]` per property. Enter
    /// commands play hidden -> shown (the node starts at the hidden
    /// endpoint); leave pairs arrive already reversed.
    pub props: MotionProps,
}

/// Host-side executor for animation commands.
pub trait AnimationBackend {
    /// Whether a rendered node for `key` currently exists.
    fn is_mounted(&self, key: &str) -> bool;

    /// Start an animation on the node for `key`.
    fn play(&mut self, key: &str, command: &PlayCommand);

    /// Stop any in-flight animation on the node for `key`. Unknown keys
    /// are a no-op. A stopped animation must deliver no further begin or
    /// complete notification.
    fn stop(&mut self, key: &str);

    /// Apply or remove a transient class marker on the node for `key`.
    fn set_class(&mut self, key: &str, class: &str, active: bool);
}

/// Backend that mounts nothing and ignores every command.
///
/// Useful for headless hosts and for exercising list state without an
/// engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl AnimationBackend for NullBackend {
    fn is_mounted(&self, _key: &str) -> bool {
        false
    }

    fn play(&mut self, _key: &str, _command: &PlayCommand) {}

    fn stop(&mut self, _key: &str) {}

    fn set_class(&mut self, _key: &str, _class: &str, _active: bool) {}
}

/// A call captured by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Play {
        key: String,
        command: PlayCommand,
    },
    Stop {
        key: String,
    },
    SetClass {
        key: String,
        class: String,
        active: bool,
    },
}

impl BackendCall {
    /// The key this call targeted.
    pub fn key(&self) -> &str {
        match self {
            Self::Play { key, .. } | Self::Stop { key } | Self::SetClass { key, .. } => key,
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Self::Play { .. })
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop { .. })
    }
}

/// Backend that records every call for later assertion.
///
/// Mount state is explicit: a key is unmounted until [`mount`] is called
/// for it. Host test suites drive a group against this backend and assert
/// on the captured choreography.
///
/// [`mount`]: RecordingBackend::mount
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    mounted: HashSet<String>,
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the node for `key` as mounted.
    pub fn mount(&mut self, key: impl Into<String>) {
        self.mounted.insert(key.into());
    }

    /// Mark several nodes as mounted.
    pub fn mount_all<I>(&mut self, keys: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for key in keys {
            self.mount(key);
        }
    }

    /// Mark the node for `key` as gone.
    pub fn unmount(&mut self, key: &str) {
        self.mounted.remove(key);
    }

    /// Every call in arrival order.
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of stop calls captured.
    pub fn stop_count(&self) -> usize {
        self.calls.iter().filter(|call| call.is_stop()).count()
    }

    /// Every play captured for `key`, in arrival order.
    pub fn plays_for(&self, key: &str) -> Vec<&PlayCommand> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::Play { key: k, command } if k == key => Some(command),
                _ => None,
            })
            .collect()
    }

    /// The most recent play captured for `key`.
    pub fn last_play_for(&self, key: &str) -> Option<&PlayCommand> {
        self.plays_for(key).pop()
    }
}

impl AnimationBackend for RecordingBackend {
    fn is_mounted(&self, key: &str) -> bool {
        self.mounted.contains(key)
    }

    fn play(&mut self, key: &str, command: &PlayCommand) {
        self.calls.push(BackendCall::Play {
            key: key.to_string(),
            command: command.clone(),
        });
    }

    fn stop(&mut self, key: &str) {
        self.calls.push(BackendCall::Stop {
            key: key.to_string(),
        });
    }

    fn set_class(&mut self, key: &str, class: &str, active: bool) {
        self.calls.push(BackendCall::SetClass {
            key: key.to_string(),
            class: class.to_string(),
            active,
        });
    }
}
