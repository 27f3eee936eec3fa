//! Motion vocabulary for staggered list animation.
//!
//! This crate holds everything a staggered group needs to describe an
//! animation without running one: phases and per-phase option values,
//! named presets and the property pairs they expand to, easing carried as
//! data, and the backend seam the controller drives.
//!
//! # Architecture
//!
//! ```text
//! GroupConfig ── phase_settings(Phase) ──> PhaseSettings
//!      │                                        │
//!      │  kind / anim_config / ease             │ delay_for_index(i)
//!      ▼                                        ▼
//! MotionPreset ──> MotionProps            PlayCommand ──> AnimationBackend
//! ```
//!
//! - [`phase`]: [`Phase`] and the scalar-or-`[enter, leave]` carrier
//!   [`PerPhase`].
//! - [`preset`]: named motion shapes and their `[shown, hidden]` pairs.
//! - [`easing`]: curve names and bezier control points, unevaluated.
//! - [`config`]: the group option table and per-phase resolution.
//! - [`backend`]: the host/engine trait plus null and recording
//!   implementations.
//! - [`error`]: parse errors for names arriving as text.
//!
//! # Usage
//!
//! ```
//! use stagger_motion::{GroupConfig, MotionPreset, Phase};
//!
//! let config = GroupConfig::new()
//!     .with_kind(MotionPreset::Top)
//!     .with_interval(80.0);
//!
//! let settings = config.phase_settings(Phase::Enter);
//! assert_eq!(settings.delay_for_index(1), 80.0);
//! ```

pub mod backend;
pub mod config;
pub mod easing;
pub mod error;
pub mod phase;
pub mod preset;

pub use backend::{AnimationBackend, BackendCall, NullBackend, PlayCommand, RecordingBackend};
pub use config::{DEFAULT_ANIMATING_CLASSES, GroupConfig, PhaseSettings};
pub use easing::Easing;
pub use error::MotionError;
pub use phase::{PerPhase, Phase};
pub use preset::{MotionPreset, MotionProperty, MotionProps, ValuePair};
