//! Named motion shapes and the property pairs they expand to.
//!
//! A preset is a set of (property, `[shown, hidden]`) value pairs
//! describing how a child looks at rest versus fully outside the list.
//! Enter animations play hidden -> shown; the leave phase plays the same
//! pairs reversed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// A property an engine can animate on a node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionProperty {
    /// Node opacity, 0.0 (transparent) to 1.0 (opaque).
    Opacity,
    /// Horizontal translation in pixels.
    TranslateX,
    /// Vertical translation in pixels.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Horizontal scale factor.
    ScaleX,
    /// Vertical scale factor.
    ScaleY,
}

impl MotionProperty {
    /// The canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX => "translate_x",
            Self::TranslateY => "translate_y",
            Self::Scale => "scale",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
        }
    }
}

impl fmt::Display for MotionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotionProperty {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opacity" => Ok(Self::Opacity),
            "translate_x" => Ok(Self::TranslateX),
            "translate_y" => Ok(Self::TranslateY),
            "scale" => Ok(Self::Scale),
            "scale_x" => Ok(Self::ScaleX),
            "scale_y" => Ok(Self::ScaleY),
            other => Err(MotionError::UnknownProperty(other.to_string())),
        }
    }
}

/// A `[shown, hidden]` value pair for one property.
///
/// `shown` is the at-rest value of a visible node; `hidden` is its value
/// fully outside the list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuePair(pub [f64; 2]);

impl ValuePair {
    pub fn new(shown: f64, hidden: f64) -> Self {
        Self([shown, hidden])
    }

    pub fn shown(self) -> f64 {
        self.0[0]
    }

    pub fn hidden(self) -> f64 {
        self.0[1]
    }

    /// The same pair with its endpoints swapped.
    pub fn reversed(self) -> Self {
        Self([self.0[1], self.0[0]])
    }
}

impl From<[f64; 2]> for ValuePair {
    fn from(pair: [f64; 2]) -> Self {
        Self(pair)
    }
}

/// The set of property pairs one phase animates.
///
/// Ordered by property so serialization and command snapshots are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MotionProps {
    props: BTreeMap<MotionProperty, ValuePair>,
}

impl MotionProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, property: MotionProperty, pair: impl Into<ValuePair>) -> Self {
        self.insert(property, pair);
        self
    }

    pub fn insert(&mut self, property: MotionProperty, pair: impl Into<ValuePair>) {
        self.props.insert(property, pair.into());
    }

    pub fn get(&self, property: MotionProperty) -> Option<ValuePair> {
        self.props.get(&property).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MotionProperty, ValuePair)> + '_ {
        self.props.iter().map(|(property, pair)| (*property, *pair))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Every pair with its endpoints swapped (the leave-phase derivation).
    pub fn reversed(&self) -> MotionProps {
        MotionProps {
            props: self
                .props
                .iter()
                .map(|(property, pair)| (*property, pair.reversed()))
                .collect(),
        }
    }
}

/// Named preset animation shapes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreset {
    /// Slide in from the left while fading.
    Left,
    /// Slide in from the right while fading.
    #[default]
    Right,
    /// Slide in from above while fading.
    Top,
    /// Slide in from below while fading.
    Bottom,
    /// Grow from nothing while fading.
    Scale,
    /// Shrink from double size while fading.
    ScaleBig,
    /// Expand horizontally while fading.
    ScaleX,
    /// Expand vertically while fading.
    ScaleY,
    /// Fade only.
    Alpha,
}

impl MotionPreset {
    /// Expand the preset to its property pairs.
    pub fn props(self) -> MotionProps {
        let fade = MotionProps::new().with(MotionProperty::Opacity, [1.0, 0.0]);
        match self {
            Self::Left => fade.with(MotionProperty::TranslateX, [0.0, -30.0]),
            Self::Right => fade.with(MotionProperty::TranslateX, [0.0, 30.0]),
            Self::Top => fade.with(MotionProperty::TranslateY, [0.0, -30.0]),
            Self::Bottom => fade.with(MotionProperty::TranslateY, [0.0, 30.0]),
            Self::Scale => fade.with(MotionProperty::Scale, [1.0, 0.0]),
            Self::ScaleBig => fade.with(MotionProperty::Scale, [1.0, 2.0]),
            Self::ScaleX => fade.with(MotionProperty::ScaleX, [1.0, 0.0]),
            Self::ScaleY => fade.with(MotionProperty::ScaleY, [1.0, 0.0]),
            Self::Alpha => fade,
        }
    }

    /// The canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Scale => "scale",
            Self::ScaleBig => "scale_big",
            Self::ScaleX => "scale_x",
            Self::ScaleY => "scale_y",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for MotionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotionPreset {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "scale" => Ok(Self::Scale),
            "scale_big" => Ok(Self::ScaleBig),
            "scale_x" => Ok(Self::ScaleX),
            "scale_y" => Ok(Self::ScaleY),
            "alpha" => Ok(Self::Alpha),
            other => Err(MotionError::UnknownPreset(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Value Pairs
    // ========================================================================

    #[test]
    fn test_value_pair_accessors() {
        let pair = ValuePair::new(1.0, 0.0);
        assert_eq!(pair.shown(), 1.0);
        assert_eq!(pair.hidden(), 0.0);
    }

    #[test]
    fn test_value_pair_reversed() {
        let pair = ValuePair::new(0.0, 30.0);
        assert_eq!(pair.reversed(), ValuePair::new(30.0, 0.0));
    }

    // ========================================================================
    // Motion Props
    // ========================================================================

    #[test]
    fn test_props_builder_and_lookup() {
        let props = MotionProps::new()
            .with(MotionProperty::Opacity, [1.0, 0.0])
            .with(MotionProperty::TranslateX, [0.0, 30.0]);

        assert_eq!(props.len(), 2);
        assert_eq!(
            props.get(MotionProperty::TranslateX),
            Some(ValuePair::new(0.0, 30.0))
        );
        assert_eq!(props.get(MotionProperty::Scale), None);
    }

    #[test]
    fn test_props_reversed_swaps_every_pair() {
        let props = MotionPreset::Right.props().reversed();
        assert_eq!(
            props.get(MotionProperty::Opacity),
            Some(ValuePair::new(0.0, 1.0))
        );
        assert_eq!(
            props.get(MotionProperty::TranslateX),
            Some(ValuePair::new(30.0, 0.0))
        );
    }

    #[test]
    fn test_props_serde_is_a_plain_map() {
        let props = MotionPreset::Right.props();
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"opacity":[1.0,0.0],"translate_x":[0.0,30.0]}"#);

        let back: MotionProps = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }

    // ========================================================================
    // Presets
    // ========================================================================

    #[test]
    fn test_every_preset_fades() {
        for preset in [
            MotionPreset::Left,
            MotionPreset::Right,
            MotionPreset::Top,
            MotionPreset::Bottom,
            MotionPreset::Scale,
            MotionPreset::ScaleBig,
            MotionPreset::ScaleX,
            MotionPreset::ScaleY,
            MotionPreset::Alpha,
        ] {
            assert_eq!(
                preset.props().get(MotionProperty::Opacity),
                Some(ValuePair::new(1.0, 0.0)),
                "{preset} should fade"
            );
        }
    }

    #[test]
    fn test_directional_presets() {
        let right = MotionPreset::Right.props();
        assert_eq!(
            right.get(MotionProperty::TranslateX),
            Some(ValuePair::new(0.0, 30.0))
        );

        let top = MotionPreset::Top.props();
        assert_eq!(
            top.get(MotionProperty::TranslateY),
            Some(ValuePair::new(0.0, -30.0))
        );
    }

    #[test]
    fn test_scale_big_shrinks_from_double() {
        let props = MotionPreset::ScaleBig.props();
        assert_eq!(props.get(MotionProperty::Scale), Some(ValuePair::new(1.0, 2.0)));
    }

    #[test]
    fn test_alpha_is_fade_only() {
        let props = MotionPreset::Alpha.props();
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("scale_big".parse::<MotionPreset>(), Ok(MotionPreset::ScaleBig));
        assert_eq!(
            "zoom".parse::<MotionPreset>(),
            Err(MotionError::UnknownPreset("zoom".to_string()))
        );
    }

    #[test]
    fn test_preset_default_and_display() {
        assert_eq!(MotionPreset::default(), MotionPreset::Right);
        assert_eq!(MotionPreset::ScaleX.to_string(), "scale_x");
    }

    #[test]
    fn test_property_round_trips_through_names() {
        for property in [
            MotionProperty::Opacity,
            MotionProperty::TranslateX,
            MotionProperty::TranslateY,
            MotionProperty::Scale,
            MotionProperty::ScaleX,
            MotionProperty::ScaleY,
        ] {
            assert_eq!(property.name().parse::<MotionProperty>(), Ok(property));
        }
    }
}
