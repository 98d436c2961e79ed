use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use touchform_common::Space;

/// Errors from loading or validating gesture configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("unknown profile '{0}' (expected combined, pinch-and-slide, or tap-toggle)")]
    UnknownProfile(String),
}

/// What switches auto-animation on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationTrigger {
    /// Level triggered: animate while at least `min_touches` are pressed.
    MultiTouch { min_touches: usize },
    /// Edge triggered: each tap or click flips animation on or off.
    Tap,
    /// Never animate.
    Never,
}

impl Default for AnimationTrigger {
    fn default() -> Self {
        Self::MultiTouch { min_touches: 3 }
    }
}

/// Auto-animation: constant spin plus a ping-pong scale oscillation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub trigger: AnimationTrigger,
    /// Degrees per second around each axis.
    pub rotation_speed: Vec3,
    pub space: Space,
    /// Maximum deviation from the initial scale.
    pub scale_amount: f32,
    /// Rate the oscillation driver advances, in scale units per second.
    pub scale_speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            trigger: AnimationTrigger::default(),
            rotation_speed: Vec3::new(0.0, 90.0, 0.0),
            space: Space::World,
            scale_amount: 0.2,
            scale_speed: 2.0,
        }
    }
}

impl AnimationConfig {
    /// Seconds for one full cycle: up from the minimum, over the maximum, and back.
    ///
    /// The driver sweeps `2 * scale_amount` in each direction at `scale_speed`,
    /// so a single sweep takes `2 * scale_amount / scale_speed` and the cycle
    /// twice that.
    pub fn period(&self) -> f32 {
        4.0 * self.scale_amount / self.scale_speed
    }
}

/// Tuning for the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Degrees of rotation per pixel of horizontal drag.
    pub rotation_speed: f32,
    pub rotation_axis: Vec3,
    pub rotation_space: Space,
    /// Scale change per pixel of pinch separation change.
    pub scale_speed: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Drag rotation and pinch scaling enabled.
    pub manual_gestures: bool,
    /// Use pointer buttons when no touches are active.
    pub pointer_fallback: bool,
    pub animation: AnimationConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.1,
            rotation_axis: Vec3::Y,
            rotation_space: Space::World,
            scale_speed: 0.001,
            min_scale: 0.1,
            max_scale: 10.0,
            manual_gestures: true,
            pointer_fallback: false,
            animation: AnimationConfig::default(),
        }
    }
}

impl GestureConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file. Missing fields take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("rotation_speed", self.rotation_speed),
            ("scale_speed", self.scale_speed),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("animation.scale_amount", self.animation.scale_amount),
            ("animation.scale_speed", self.animation.scale_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if !self.rotation_axis.is_finite() || !self.animation.rotation_speed.is_finite() {
            return Err(ConfigError::Invalid("vectors must be finite".into()));
        }
        if self.rotation_axis.length_squared() == 0.0 {
            return Err(ConfigError::Invalid("rotation_axis must be non-zero".into()));
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if self.animation.scale_amount < 0.0 {
            return Err(ConfigError::Invalid("animation.scale_amount must be >= 0".into()));
        }
        if self.animation.scale_speed <= 0.0 {
            return Err(ConfigError::Invalid("animation.scale_speed must be positive".into()));
        }
        if let AnimationTrigger::MultiTouch { min_touches } = self.animation.trigger {
            if min_touches < 3 {
                return Err(ConfigError::Invalid(format!(
                    "multi-touch trigger needs at least 3 touches, got {min_touches}"
                )));
            }
        }
        Ok(())
    }
}

/// Preset configurations matching the three shipped gesture behaviors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Drag rotates about world Y, pinch scales, three fingers animate.
    #[default]
    Combined,
    /// Drag rotates about local Z, pinch scales, pointer fallback, no animation.
    PinchAndSlide,
    /// Tap or click toggles animation; no manual gestures.
    TapToggle,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Self::Combined, Self::PinchAndSlide, Self::TapToggle];

    pub fn name(self) -> &'static str {
        match self {
            Self::Combined => "combined",
            Self::PinchAndSlide => "pinch-and-slide",
            Self::TapToggle => "tap-toggle",
        }
    }

    pub fn config(self) -> GestureConfig {
        match self {
            Self::Combined => GestureConfig::default(),
            Self::PinchAndSlide => GestureConfig {
                rotation_axis: Vec3::Z,
                rotation_space: Space::Local,
                pointer_fallback: true,
                animation: AnimationConfig {
                    trigger: AnimationTrigger::Never,
                    ..AnimationConfig::default()
                },
                ..GestureConfig::default()
            },
            Self::TapToggle => GestureConfig {
                manual_gestures: false,
                animation: AnimationConfig {
                    trigger: AnimationTrigger::Tap,
                    space: Space::Local,
                    ..AnimationConfig::default()
                },
                ..GestureConfig::default()
            },
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ConfigError::UnknownProfile(s.to_string()))
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        for profile in Profile::ALL {
            profile.config().validate().unwrap();
        }
    }

    #[test]
    fn partial_yaml_takes_defaults() {
        let config = GestureConfig::from_yaml_str("rotation_speed: 0.5\nmax_scale: 4.0\n").unwrap();
        assert_eq!(config.rotation_speed, 0.5);
        assert_eq!(config.max_scale, 4.0);
        assert_eq!(config.min_scale, 0.1);
        assert_eq!(config.rotation_axis, Vec3::Y);
    }

    #[test]
    fn yaml_trigger_and_space() {
        let text = "rotation_space: local\nanimation:\n  trigger: tap\n  space: local\n";
        let config = GestureConfig::from_yaml_str(text).unwrap();
        assert_eq!(config.rotation_space, Space::Local);
        assert_eq!(config.animation.trigger, AnimationTrigger::Tap);
        assert_eq!(config.animation.scale_amount, 0.2);
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = GestureConfig {
            min_scale: 5.0,
            max_scale: 1.0,
            ..GestureConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn non_finite_rejected() {
        let config = GestureConfig {
            scale_speed: f32::NAN,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_axis_rejected() {
        let config = GestureConfig {
            rotation_axis: Vec3::ZERO,
            ..GestureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn two_finger_animation_trigger_rejected() {
        let mut config = GestureConfig::default();
        config.animation.trigger = AnimationTrigger::MultiTouch { min_touches: 2 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn profile_names_parse() {
        for profile in Profile::ALL {
            assert_eq!(profile.name().parse::<Profile>().unwrap(), profile);
        }
        assert!(matches!(
            "spin".parse::<Profile>(),
            Err(ConfigError::UnknownProfile(_))
        ));
    }

    #[test]
    fn pinch_and_slide_rotates_local_z() {
        let config = Profile::PinchAndSlide.config();
        assert_eq!(config.rotation_axis, Vec3::Z);
        assert_eq!(config.rotation_space, Space::Local);
        assert!(config.pointer_fallback);
    }

    #[test]
    fn shipped_pinch_and_slide_file_matches_profile() {
        let config =
            GestureConfig::from_yaml_str(include_str!("../../../scripts/pinch_and_slide.yaml"))
                .unwrap();
        assert_eq!(config, Profile::PinchAndSlide.config());
    }

    #[test]
    fn period_is_full_cycle() {
        let anim = AnimationConfig::default();
        assert!((anim.period() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn yaml_round_trip() {
        let config = Profile::TapToggle.config();
        let text = config.to_yaml_string().unwrap();
        assert_eq!(GestureConfig::from_yaml_str(&text).unwrap(), config);
    }
}
