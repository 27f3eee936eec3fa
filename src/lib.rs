//! Staggered enter/leave animation for keyed child lists.
//!
//! Facade over the workspace: [`stagger_core`] carries the reconciler and
//! the group controller, [`stagger_motion`] the configuration, presets,
//! easing, and backend seam. Most hosts only need the re-exports below.
//!
//! ```
//! use stagger::{GroupConfig, KeyedChild, MotionPreset, StaggerGroup};
//!
//! let config = GroupConfig::new().with_kind(MotionPreset::Bottom);
//! let group = StaggerGroup::new(config, vec![KeyedChild::new("a", "Alpha")]);
//! assert_eq!(group.display_children().len(), 1);
//! ```

pub use stagger_core::{
    ChildPhase, ChildrenDiff, EventQueue, GroupEvent, KeyedChild, StaggerGroup, diff_children,
};
pub use stagger_motion::{
    AnimationBackend, BackendCall, Easing, GroupConfig, MotionPreset, MotionProperty, MotionProps,
    NullBackend, PerPhase, Phase, PhaseSettings, PlayCommand, RecordingBackend, ValuePair,
};

pub use stagger_core as core;
pub use stagger_motion as motion;
