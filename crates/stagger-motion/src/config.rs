//! Group-level animation configuration.
//!
//! Options follow the scalar-or-`[enter, leave]` convention from
//! [`PerPhase`]: a bare value applies to both phases, a two-element array
//! configures them separately. Resolution collapses the option set into
//! concrete per-phase settings:
//!
//! - Enter props come from `anim_config` when present, else the `kind`
//!   preset.
//! - Leave props use an explicit `[enter, leave]` `anim_config` as-is; any
//!   other source is enter-shaped and is reversed so the node plays back
//!   out the way it came in.
//! - Back-easing names resolve to bezier curves.
//!
//! # Usage
//!
//! ```
//! use stagger_motion::config::GroupConfig;
//! use stagger_motion::phase::Phase;
//! use stagger_motion::preset::MotionPreset;
//!
//! let config = GroupConfig::new()
//!     .with_kind(MotionPreset::Bottom)
//!     .with_interval([100.0, 60.0])
//!     .with_leave_reverse(true);
//!
//! let enter = config.phase_settings(Phase::Enter);
//! assert_eq!(enter.delay_for_index(2), 200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::phase::{PerPhase, Phase};
use crate::preset::{MotionPreset, MotionProps};

/// Default `[entering, leaving]` class markers.
pub const DEFAULT_ANIMATING_CLASSES: [&str; 2] = ["stagger-entering", "stagger-leaving"];

/// Configuration for one animated group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Container tag/type hint for the host renderer.
    pub component: String,

    /// Per-item stagger delay multiplier in milliseconds.
    pub interval: PerPhase<f32>,

    /// Animation duration in milliseconds.
    pub duration: PerPhase<f32>,

    /// Fixed base delay in milliseconds.
    pub delay: PerPhase<f32>,

    /// Named preset shape; overridden by `anim_config` when set.
    #[serde(rename = "type")]
    pub kind: PerPhase<MotionPreset>,

    /// Explicit property pairs overriding `kind`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim_config: Option<PerPhase<MotionProps>>,

    /// Easing forwarded to the engine.
    pub ease: PerPhase<Easing>,

    /// Reverse the stagger order of the leave batch.
    pub leave_reverse: bool,

    /// `[entering, leaving]` transient class markers.
    pub animating_class: [String; 2],
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            component: "div".to_string(),
            interval: PerPhase::Uniform(100.0),
            duration: PerPhase::Uniform(500.0),
            delay: PerPhase::Uniform(0.0),
            kind: PerPhase::Uniform(MotionPreset::Right),
            anim_config: None,
            ease: PerPhase::Uniform(Easing::default()),
            leave_reverse: false,
            animating_class: [
                DEFAULT_ANIMATING_CLASSES[0].to_string(),
                DEFAULT_ANIMATING_CLASSES[1].to_string(),
            ],
        }
    }
}

impl GroupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    pub fn with_interval(mut self, interval: impl Into<PerPhase<f32>>) -> Self {
        self.interval = interval.into();
        self
    }

    pub fn with_duration(mut self, duration: impl Into<PerPhase<f32>>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_delay(mut self, delay: impl Into<PerPhase<f32>>) -> Self {
        self.delay = delay.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<PerPhase<MotionPreset>>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_anim_config(mut self, config: impl Into<PerPhase<MotionProps>>) -> Self {
        self.anim_config = Some(config.into());
        self
    }

    pub fn with_ease(mut self, ease: impl Into<PerPhase<Easing>>) -> Self {
        self.ease = ease.into();
        self
    }

    pub fn with_leave_reverse(mut self, reverse: bool) -> Self {
        self.leave_reverse = reverse;
        self
    }

    pub fn with_animating_class(
        mut self,
        entering: impl Into<String>,
        leaving: impl Into<String>,
    ) -> Self {
        self.animating_class = [entering.into(), leaving.into()];
        self
    }

    /// Class marker for `phase`.
    pub fn class_for(&self, phase: Phase) -> &str {
        &self.animating_class[phase.index()]
    }

    /// Resolve the animated property pairs for `phase`.
    pub fn props_for(&self, phase: Phase) -> MotionProps {
        match phase {
            Phase::Enter => match &self.anim_config {
                Some(config) => config.enter().clone(),
                None => self.kind.enter().props(),
            },
            Phase::Leave => match &self.anim_config {
                // An explicit [enter, leave] override already describes the
                // outbound motion.
                Some(config) if config.is_split() => config.leave().clone(),
                Some(config) => config.leave().reversed(),
                None => self.kind.leave().props().reversed(),
            },
        }
    }

    /// Resolve easing for `phase` (back-ease names become bezier curves).
    pub fn ease_for(&self, phase: Phase) -> Easing {
        self.ease.for_phase(phase).resolved()
    }

    /// Fully resolved timing and shape for one phase.
    pub fn phase_settings(&self, phase: Phase) -> PhaseSettings {
        PhaseSettings {
            interval_ms: *self.interval.for_phase(phase),
            duration_ms: *self.duration.for_phase(phase),
            base_delay_ms: *self.delay.for_phase(phase),
            easing: self.ease_for(phase),
            props: self.props_for(phase),
        }
    }
}

/// Resolved parameters for one phase of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSettings {
    /// Per-item stagger multiplier in milliseconds.
    pub interval_ms: f32,
    /// Animation duration in milliseconds.
    pub duration_ms: f32,
    /// Fixed base delay in milliseconds.
    pub base_delay_ms: f32,
    /// Resolved easing.
    pub easing: Easing,
    /// Resolved property pairs.
    pub props: MotionProps,
}

impl PhaseSettings {
    /// Stagger delay for the item at `index` within its batch.
    pub fn delay_for_index(&self, index: usize) -> f32 {
        self.interval_ms * index as f32 + self.base_delay_ms
    }
}
