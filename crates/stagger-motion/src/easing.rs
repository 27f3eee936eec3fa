//! Easing carried as data for the animation engine.
//!
//! Timing math is the engine's job; this module only names curves. An
//! easing is either a curve name the engine understands or explicit cubic
//! bezier control points. The three `*_back` names are resolved to bezier
//! curves here because most engines do not ship them.
//!
//! # Usage
//!
//! ```
//! use stagger_motion::easing::Easing;
//!
//! let named = Easing::named("ease_out_quart");
//! assert_eq!(named.resolved(), named);
//!
//! let back = Easing::named("ease_out_back").resolved();
//! assert!(matches!(back, Easing::Bezier { .. }));
//! ```

use serde::{Deserialize, Serialize};

/// Easing specification passed through to the animation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Easing {
    /// A named curve, interpreted by the engine
    /// (`"linear"`, `"ease_out_quart"`, ...).
    Named(String),

    /// Custom cubic bezier control points.
    /// x values must be in [0, 1], y values can be any float.
    Bezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::Named("ease_out_quart".to_string())
    }
}

impl Easing {
    /// Create a named easing.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a custom cubic bezier easing.
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::Bezier { x1, y1, x2, y2 }
    }

    /// Resolve engine-unknown aliases to concrete curves.
    ///
    /// The back easings become their bezier control points; every other
    /// value is returned untouched.
    pub fn resolved(&self) -> Easing {
        match self {
            Self::Named(name) => match name.as_str() {
                "ease_in_back" => Self::Bezier {
                    x1: 0.6,
                    y1: -0.28,
                    x2: 0.735,
                    y2: 0.045,
                },
                "ease_out_back" => Self::Bezier {
                    x1: 0.175,
                    y1: 0.885,
                    x2: 0.32,
                    y2: 1.275,
                },
                "ease_in_out_back" => Self::Bezier {
                    x1: 0.68,
                    y1: -0.55,
                    x2: 0.265,
                    y2: 1.55,
                },
                _ => self.clone(),
            },
            Self::Bezier { .. } => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Easing::default(), Easing::named("ease_out_quart"));
    }

    #[test]
    fn test_back_easings_resolve_to_bezier() {
        let resolved = Easing::named("ease_in_back").resolved();
        assert_eq!(
            resolved,
            Easing::Bezier {
                x1: 0.6,
                y1: -0.28,
                x2: 0.735,
                y2: 0.045
            }
        );

        let resolved = Easing::named("ease_out_back").resolved();
        assert_eq!(
            resolved,
            Easing::Bezier {
                x1: 0.175,
                y1: 0.885,
                x2: 0.32,
                y2: 1.275
            }
        );

        let resolved = Easing::named("ease_in_out_back").resolved();
        assert_eq!(
            resolved,
            Easing::Bezier {
                x1: 0.68,
                y1: -0.55,
                x2: 0.265,
                y2: 1.55
            }
        );
    }

    #[test]
    fn test_other_names_pass_through() {
        let easing = Easing::named("ease_out_quart");
        assert_eq!(easing.resolved(), easing);

        let easing = Easing::named("linear");
        assert_eq!(easing.resolved(), easing);
    }

    #[test]
    fn test_bezier_passes_through_resolution() {
        let easing = Easing::bezier(0.4, 0.0, 0.2, 1.0);
        assert_eq!(easing.resolved(), easing);
    }

    #[test]
    fn test_serde_forms() {
        let named: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(named, Easing::named("linear"));

        let bezier: Easing =
            serde_json::from_str(r#"{"x1":0.4,"y1":0.0,"x2":0.2,"y2":1.0}"#).unwrap();
        assert_eq!(bezier, Easing::bezier(0.4, 0.0, 0.2, 1.0));

        let json = serde_json::to_string(&named).unwrap();
        assert_eq!(json, "\"linear\"");
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_invalid_bezier_x1() {
        Easing::bezier(-0.1, 0.0, 0.5, 1.0);
    }

    #[test]
    #[should_panic(expected = "Bezier x values must be in [0, 1]")]
    fn test_invalid_bezier_x2() {
        Easing::bezier(0.5, 0.0, 1.5, 1.0);
    }
}
