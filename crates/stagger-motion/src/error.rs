//! Error types for motion configuration parsing.

use thiserror::Error;

/// Convenience alias for fallible motion parsing.
pub type Result<T> = std::result::Result<T, MotionError>;

/// Errors produced while parsing motion configuration values.
///
/// The animation controller itself has no fatal error paths; these only
/// surface when a host parses preset or property names from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    /// A preset name did not match any known motion preset.
    #[error("unknown motion preset: {0}")]
    UnknownPreset(String),

    /// A property name did not match any animatable property.
    #[error("unknown motion property: {0}")]
    UnknownProperty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MotionError::UnknownPreset("zoom".to_string());
        assert_eq!(err.to_string(), "unknown motion preset: zoom");

        let err = MotionError::UnknownProperty("rotate".to_string());
        assert_eq!(err.to_string(), "unknown motion property: rotate");
    }
}
