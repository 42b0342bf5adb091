//! Animation and pointer-drag configuration types.

use serde::{Deserialize, Serialize};

/// Integration rule used to move windows toward their targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Fixed-fraction approach per tick, no velocity.
    Exponential,
    /// Damped spring integrated with the frame delta.
    #[default]
    Spring,
}

/// Window animation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub interpolation: Interpolation,
    /// Fraction of the remaining distance covered per tick (valid range: (0, 1]).
    pub speed: f64,
    /// Spring stiffness (must be > 0).
    pub spring_tension: f64,
    /// Spring damping (must be >= 0).
    pub spring_friction: f64,
    /// Upper bound for one integration step in seconds (valid range: (0, 1]).
    pub max_dt: f64,
    /// Animation driver period in milliseconds (valid range: 1-100).
    pub tick_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Spring,
            speed: 0.2,
            spring_tension: 180.0,
            spring_friction: 14.0,
            max_dt: 0.1,
            tick_ms: 8,
        }
    }
}

/// Modifier that must be held for pointer drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DragModifier {
    #[default]
    Alt,
    Super,
    Ctrl,
    Shift,
}

/// Pointer move/resize configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub modifier: DragModifier,
    /// Smallest width a resize may produce (must be >= 1).
    pub min_width: f64,
    /// Smallest height a resize may produce (must be >= 1).
    pub min_height: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            modifier: DragModifier::Alt,
            min_width: 50.0,
            min_height: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_defaults() {
        let config = AnimationConfig::default();
        assert_eq!(config.interpolation, Interpolation::Spring);
        assert!((config.spring_tension - 180.0).abs() < f64::EPSILON);
        assert!((config.spring_friction - 14.0).abs() < f64::EPSILON);
        assert!((config.max_dt - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.tick_ms, 8);
    }

    #[test]
    fn animation_partial_toml() {
        let config: AnimationConfig = toml::from_str(
            r#"
interpolation = "exponential"
speed = 0.35
"#,
        )
        .unwrap();
        assert_eq!(config.interpolation, Interpolation::Exponential);
        assert!((config.speed - 0.35).abs() < f64::EPSILON);
        assert_eq!(config.tick_ms, 8);
    }

    #[test]
    fn drag_defaults() {
        let config = DragConfig::default();
        assert_eq!(config.modifier, DragModifier::Alt);
        assert!((config.min_width - 50.0).abs() < f64::EPSILON);
        assert!((config.min_height - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drag_modifier_parses() {
        let config: DragConfig = toml::from_str("modifier = \"super\"").unwrap();
        assert_eq!(config.modifier, DragModifier::Super);
    }
}
