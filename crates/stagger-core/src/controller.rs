//! The keyed-list animation controller.
//!
//! `StaggerGroup` is the per-group coordinator sitting between the host's
//! render cycle and the animation engine. It handles:
//! - Diffing incoming child lists into enter/leave batches
//! - Keeping leaving children in the display list until their animation ends
//! - Dispatching staggered play commands (stop-before-play, per-phase timing)
//! - Visibility bookkeeping so withheld content appears at enter-begin and
//!   disappears at leave-complete
//! - Flushing departed children once no leave remains outstanding
//!
//! The host drives it through lifecycle entry points (`on_mount`,
//! `on_props_changed`, `on_update`, `on_will_unmount`) and forwards the
//! engine's begin/complete callbacks to the notification methods. The
//! backend is passed into each call that needs it rather than stored, so
//! the group itself owns nothing but bookkeeping.
//!
//! # Usage
//!
//! ```
//! use stagger_core::children::KeyedChild;
//! use stagger_core::controller::StaggerGroup;
//! use stagger_motion::backend::RecordingBackend;
//! use stagger_motion::config::GroupConfig;
//!
//! let items = vec![
//!     KeyedChild::new("a", "Alpha"),
//!     KeyedChild::new("b", "Beta"),
//! ];
//! let mut group = StaggerGroup::new(GroupConfig::default(), items);
//! let mut backend = RecordingBackend::new();
//! backend.mount_all(["a", "b"]);
//!
//! // Host rendered the display list; kick the first dispatch.
//! group.on_mount(&mut backend);
//! assert_eq!(backend.last_play_for("b").map(|p| p.delay_ms), Some(100.0));
//!
//! // Engine reports the first animation beginning.
//! group.on_enter_begin("a", &mut backend);
//! assert!(group.visibility("a"));
//! ```

use std::collections::{HashMap, HashSet};
use std::mem;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use stagger_motion::backend::{AnimationBackend, PlayCommand};
use stagger_motion::config::GroupConfig;
use stagger_motion::phase::Phase;

use crate::children::{KeyedChild, contains_key};
use crate::diff::diff_children;
use crate::events::{EventQueue, GroupEvent};

/// Where a key currently sits in its lifecycle.
///
/// Derived from the controller's bookkeeping, not stored; re-entrant in the
/// sense that a leaving key re-added before its leave completes moves
/// straight back to `Entering`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildPhase {
    /// Not displayed, or displayed with its content withheld after a leave.
    Absent,
    /// Enter scheduled or playing; content appears at enter-begin.
    Entering,
    /// Entered and at rest.
    Visible,
    /// Leave scheduled or playing; the node stays mounted until complete.
    Leaving,
}

/// Controller for one animated group of keyed children.
///
/// Generic over the host's content type `C` (an element handle, a virtual
/// node, a widget id). Content is cloned into the display list so leaving
/// children can be frozen at their last rendered value.
#[derive(Debug, Clone)]
pub struct StaggerGroup<C> {
    config: GroupConfig,

    /// The child list the application last asked for.
    rendered: Vec<KeyedChild<C>>,

    /// The merged list actually displayed; retains leaving children.
    display: Vec<KeyedChild<C>>,

    /// Keys entering in this batch, in stagger order.
    enter_batch: Vec<String>,

    /// Enter keys already handed to the engine this batch.
    enter_dispatched: HashSet<String>,

    /// Keys leaving in this batch, in stagger order.
    leave_batch: Vec<String>,

    /// Leave keys already handed to the engine this batch.
    leave_dispatched: HashSet<String>,

    /// Leaving keys whose completion has not fired yet; emptying this
    /// triggers the flush.
    pending_leave: Vec<String>,

    /// Keys mid-animation. Completions for keys outside this set are
    /// leftovers from a superseded batch and are dropped.
    animating: HashSet<String>,

    /// Whether the current batches have seeded the animating set. Each
    /// batch seeds exactly once; completions drain the set and a drained
    /// batch must stay drained across further dispatch passes.
    batch_seeded: bool,

    /// Key to content-visible flag; absent means never entered.
    visibility: HashMap<String, bool>,

    /// Keys dropped from the display by a newer update while still
    /// animating; each is owed one stop at the next dispatch.
    stale: Vec<String>,

    /// Set whenever displayed state changed and the host should re-render.
    needs_render: bool,

    /// Lifecycle events awaiting a drain.
    events: EventQueue,
}

impl<C: Clone> StaggerGroup<C> {
    /// Create a group from its initial children.
    ///
    /// Every keyed child starts out entering with its content withheld, so
    /// the first `on_update` plays the whole list in.
    pub fn new(config: GroupConfig, initial_children: Vec<KeyedChild<C>>) -> Self {
        let diff = diff_children(&[], &initial_children);
        Self {
            config,
            rendered: initial_children,
            display: diff.merged,
            enter_batch: diff.enter_keys,
            enter_dispatched: HashSet::new(),
            leave_batch: Vec::new(),
            leave_dispatched: HashSet::new(),
            pending_leave: Vec::new(),
            animating: HashSet::new(),
            batch_seeded: false,
            visibility: HashMap::new(),
            stale: Vec::new(),
            needs_render: true,
            events: EventQueue::new(),
        }
    }

    // ========================================================================
    // Host Lifecycle
    // ========================================================================

    /// First dispatch after the host's initial render.
    pub fn on_mount(&mut self, backend: &mut impl AnimationBackend) {
        self.on_update(backend);
    }

    /// Absorb a new child list from the application.
    ///
    /// Pure bookkeeping: diffs against the previously rendered list,
    /// replaces the display list with the merge, and rebuilds both batches.
    /// No engine command is issued here; the host renders the new display
    /// list first and then calls [`on_update`](Self::on_update).
    pub fn on_props_changed(&mut self, next: Vec<KeyedChild<C>>) {
        let diff = diff_children(&self.rendered, &next);

        // Keys vanishing from the display entirely. Any of them still
        // animating was superseded mid-flight and is owed a stop.
        for child in &self.display {
            let key = match child.key() {
                Some(key) => key,
                None => continue,
            };
            if contains_key(&diff.merged, key) {
                continue;
            }
            if self.animating.contains(key) {
                debug!(key = %key, "dropped mid-flight by a newer update, stop owed");
                if !self.stale.iter().any(|k| k == key) {
                    self.stale.push(key.to_string());
                }
            }
            self.visibility.remove(key);
        }

        self.display = diff.merged;
        self.rendered = next;
        self.enter_batch = diff.enter_keys;
        self.pending_leave = diff.leave_keys.clone();
        self.leave_batch = diff.leave_keys;
        self.enter_dispatched.clear();
        self.leave_dispatched.clear();
        self.animating.clear();
        self.batch_seeded = false;
        self.needs_render = true;
    }

    /// Post-render dispatch pass.
    ///
    /// Stops superseded nodes, then plays every not-yet-dispatched key of
    /// both batches with its staggered delay. Keys whose node is not
    /// mounted yet are skipped (and retried on the next call); every play
    /// is preceded by a stop on the same node. Safe to call repeatedly.
    pub fn on_update(&mut self, backend: &mut impl AnimationBackend) {
        for key in mem::take(&mut self.stale) {
            if backend.is_mounted(&key) {
                backend.stop(&key);
            } else {
                debug!(key = %key, "superseded node already gone, skipping stop");
            }
        }

        // Seed the animating set once per batch; completions drain it and
        // a settled batch must stay settled across repeated passes.
        if !self.batch_seeded {
            self.animating.extend(self.enter_batch.iter().cloned());
            self.animating.extend(self.pending_leave.iter().cloned());
            self.batch_seeded = true;
        }

        self.dispatch_enters(backend);
        self.dispatch_leaves(backend);
    }

    /// Stop every tracked mounted node and reset the group.
    ///
    /// No completion callback is expected to fire afterwards; any that
    /// still arrives hits an empty animating set and is dropped.
    pub fn on_will_unmount(&mut self, backend: &mut impl AnimationBackend) {
        for child in &self.display {
            if let Some(key) = child.key() {
                if backend.is_mounted(key) {
                    backend.stop(key);
                }
            }
        }
        for key in mem::take(&mut self.stale) {
            if backend.is_mounted(&key) {
                backend.stop(&key);
            }
        }

        self.rendered.clear();
        self.display.clear();
        self.enter_batch.clear();
        self.enter_dispatched.clear();
        self.leave_batch.clear();
        self.leave_dispatched.clear();
        self.pending_leave.clear();
        self.animating.clear();
        self.batch_seeded = false;
        self.visibility.clear();
        self.needs_render = false;
    }

    // ========================================================================
    // Engine Notifications
    // ========================================================================

    /// An enter animation began for `key`: reveal its content and mark the
    /// node with the entering class.
    pub fn on_enter_begin(&mut self, key: &str, backend: &mut impl AnimationBackend) {
        self.visibility.insert(key.to_string(), true);
        backend.set_class(key, self.config.class_for(Phase::Enter), true);
        self.events.push(GroupEvent::EnterStarted {
            key: key.to_string(),
        });
        self.needs_render = true;
    }

    /// An enter animation finished for `key`.
    pub fn on_enter_complete(&mut self, key: &str, backend: &mut impl AnimationBackend) {
        self.animating.remove(key);
        backend.set_class(key, self.config.class_for(Phase::Enter), false);
        self.events.push(GroupEvent::EnterFinished {
            key: key.to_string(),
        });
    }

    /// A leave animation began for `key`: mark the node with the leaving
    /// class. Content stays visible while the node animates out.
    pub fn on_leave_begin(&mut self, key: &str, backend: &mut impl AnimationBackend) {
        backend.set_class(key, self.config.class_for(Phase::Leave), true);
        self.events.push(GroupEvent::LeaveStarted {
            key: key.to_string(),
        });
    }

    /// A leave animation finished for `key`: hide its content, settle the
    /// bookkeeping, and flush once no leave remains outstanding.
    pub fn on_leave_complete(&mut self, key: &str, backend: &mut impl AnimationBackend) {
        if !self.animating.remove(key) {
            debug!(key = %key, "stale leave completion, ignoring");
            return;
        }
        backend.set_class(key, self.config.class_for(Phase::Leave), false);
        self.visibility.insert(key.to_string(), false);
        self.pending_leave.retain(|k| k != key);
        self.events.push(GroupEvent::LeaveFinished {
            key: key.to_string(),
        });
        self.needs_render = true;
        if self.pending_leave.is_empty() {
            self.flush();
        }
    }

    // ========================================================================
    // Render Glue
    // ========================================================================

    /// The merged list the host should render, leaving children included.
    pub fn display_children(&self) -> &[KeyedChild<C>] {
        &self.display
    }

    /// Whether `key`'s content should be rendered. False until enter-begin
    /// and again after leave-complete.
    pub fn visibility(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(false)
    }

    /// Visibility for one displayed child; unkeyed children are always
    /// rendered as-is.
    pub fn is_content_visible(&self, child: &KeyedChild<C>) -> bool {
        match child.key() {
            Some(key) => self.visibility(key),
            None => true,
        }
    }

    /// Where `key` sits in the per-key lifecycle.
    pub fn child_phase(&self, key: &str) -> ChildPhase {
        if self.pending_leave.iter().any(|k| k == key) {
            return ChildPhase::Leaving;
        }
        if !contains_key(&self.display, key) {
            return ChildPhase::Absent;
        }
        if self.animating.contains(key)
            || (self.enter_batch.iter().any(|k| k == key) && !self.enter_dispatched.contains(key))
        {
            return ChildPhase::Entering;
        }
        match self.visibility.get(key) {
            Some(true) => ChildPhase::Visible,
            // Left already (false) or never tracked; content is withheld.
            _ => ChildPhase::Absent,
        }
    }

    /// Whether `key` is currently mid-animation.
    pub fn is_animating(&self, key: &str) -> bool {
        self.animating.contains(key)
    }

    /// Whether any key is currently mid-animation.
    pub fn has_active_animations(&self) -> bool {
        !self.animating.is_empty()
    }

    /// Whether displayed state changed since the last render.
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Acknowledge a render.
    pub fn clear_render_flag(&mut self) {
        self.needs_render = false;
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Replace the configuration; applies from the next batch on.
    pub fn set_config(&mut self, config: GroupConfig) {
        self.config = config;
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Remove and return all recorded lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GroupEvent> {
        self.events.drain()
    }

    /// Whether any lifecycle event awaits a drain.
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    fn dispatch_enters(&mut self, backend: &mut impl AnimationBackend) {
        if self.enter_batch.is_empty() {
            return;
        }
        let settings = self.config.phase_settings(Phase::Enter);
        let batch = self.enter_batch.clone();
        for (index, key) in batch.iter().enumerate() {
            if self.enter_dispatched.contains(key) {
                continue;
            }
            if !backend.is_mounted(key) {
                debug!(key = %key, "enter target not mounted, deferring");
                continue;
            }
            let command = PlayCommand {
                phase: Phase::Enter,
                delay_ms: settings.delay_for_index(index),
                duration_ms: settings.duration_ms,
                easing: settings.easing.clone(),
                props: settings.props.clone(),
            };
            trace!(key = %key, delay_ms = command.delay_ms, "dispatching enter");
            backend.stop(key);
            backend.play(key, &command);
            self.enter_dispatched.insert(key.clone());
        }
    }

    fn dispatch_leaves(&mut self, backend: &mut impl AnimationBackend) {
        if self.leave_batch.is_empty() {
            return;
        }
        let settings = self.config.phase_settings(Phase::Leave);
        let batch = self.leave_batch.clone();
        let size = batch.len();
        for (index, key) in batch.iter().enumerate() {
            if self.leave_dispatched.contains(key) {
                continue;
            }
            if !backend.is_mounted(key) {
                debug!(key = %key, "leave target not mounted, deferring");
                continue;
            }
            let order = if self.config.leave_reverse {
                size - index - 1
            } else {
                index
            };
            let command = PlayCommand {
                phase: Phase::Leave,
                delay_ms: settings.delay_for_index(order),
                duration_ms: settings.duration_ms,
                easing: settings.easing.clone(),
                props: settings.props.clone(),
            };
            trace!(key = %key, delay_ms = command.delay_ms, "dispatching leave");
            backend.stop(key);
            backend.play(key, &command);
            self.leave_dispatched.insert(key.clone());
        }
    }

    /// Drop departed children now that every leave has completed: the
    /// display list becomes the last rendered list verbatim.
    fn flush(&mut self) {
        let kept: HashSet<&str> = self.rendered.iter().filter_map(KeyedChild::key).collect();
        self.visibility.retain(|key, _| kept.contains(key.as_str()));
        self.display = self.rendered.clone();
        self.leave_batch.clear();
        self.leave_dispatched.clear();
        debug!(kept = self.display.len(), "leave batch drained, flushed display list");
        self.events.push(GroupEvent::Flushed {
            kept: self.display.len(),
        });
        self.needs_render = true;
    }
}

// Ensure the controller stays Send; hosts may own it off the main thread.
static_assertions::assert_impl_all!(StaggerGroup<String>: Send);
