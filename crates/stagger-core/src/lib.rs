//! Keyed-list reconciliation and the staggered animation controller.
//!
//! The host hands [`StaggerGroup`] its child list on every update; the
//! group diffs it against the previous one, keeps leaving children in the
//! display list until their animation finishes, and drives the engine
//! through the backend seam from [`stagger_motion`].
//!
//! # Architecture
//!
//! ```text
//! on_props_changed(next) ──> diff_children ──> merged display list
//!                                    │              enter/leave batches
//!                                    ▼
//! on_update(backend) ───────> stop + play per key (staggered delays)
//!                                    │
//! engine callbacks ──> on_enter_begin / on_leave_complete / ...
//!                                    │
//!                                    ▼
//!                      visibility map, events, flush
//! ```
//!
//! - [`children`]: the `(key, content)` pair and list lookup helpers.
//! - [`diff`]: classification and the merge policy for leaving children.
//! - [`controller`]: the per-group lifecycle coordinator.
//! - [`events`]: drainable lifecycle event queue.

pub mod children;
pub mod controller;
pub mod diff;
pub mod events;

pub use children::KeyedChild;
pub use controller::{ChildPhase, StaggerGroup};
pub use diff::{ChildrenDiff, diff_children};
pub use events::{EventQueue, GroupEvent};

pub use stagger_motion as motion;
