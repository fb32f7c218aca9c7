use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read tuning file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid tuning: {0}")]
    ValidationError(String),
}

/// Hand-tuned scalars driving the craft controller. Immutable once the
/// model is constructed.
///
/// Values are expressed per 60 Hz frame tick, not per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    /// Passive speed loss applied whenever forward thrust is released.
    pub air_resist: f64,
    /// Lateral velocity bias the triggers pull the craft toward.
    pub air_drift: f64,
    pub thrust: f64,
    pub air_brake: f64,
    pub max_speed: f64,

    // Consumed by the booster pickup layer, not by the update path.
    pub booster_speed: f64,
    pub booster_decay: f64,

    pub angular_speed: f64,
    /// Extra yaw authority granted while a trigger is held.
    pub air_angular_speed: f64,

    pub repulsion_ratio: f64,
    pub repulsion_cap: f64,
    pub repulsion_lerp: f64,

    // Consumed by the collision damage layer, not by the update path.
    pub collision_speed_decrease: f64,
    pub collision_speed_decrease_coef: f64,
    pub max_shield: f64,
    pub shield_delay: f64,
    pub shield_timing: f64,
    pub shield_damage: f64,

    pub drift_lerp: f64,
    pub angular_lerp: f64,
    pub roll_angle: f64,
    pub roll_lerp: f64,
    pub height_lerp: f64,
    /// Hover height above the track surface.
    pub height_offset: f64,
    pub gradient_lerp: f64,
    /// Carried for compatibility; the gradient probe uses the unscaled
    /// arctangent.
    pub gradient_scale: f64,
    pub tilt_lerp: f64,
    /// Carried for compatibility; the tilt probe uses the unscaled
    /// arctangent.
    pub tilt_scale: f64,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            air_resist: 0.02,
            air_drift: 0.1,
            thrust: 0.02,
            air_brake: 0.02,
            max_speed: 7.0,
            booster_speed: 7.0 * 0.2,
            booster_decay: 0.01,
            angular_speed: 0.005,
            air_angular_speed: 0.0065,
            repulsion_ratio: 0.5,
            repulsion_cap: 2.5,
            repulsion_lerp: 0.1,
            collision_speed_decrease: 0.8,
            collision_speed_decrease_coef: 0.8,
            max_shield: 1.0,
            shield_delay: 60.0,
            shield_timing: 0.0,
            shield_damage: 0.25,
            drift_lerp: 0.35,
            angular_lerp: 0.35,
            roll_angle: 0.6,
            roll_lerp: 0.08,
            height_lerp: 0.4,
            height_offset: 4.0,
            gradient_lerp: 0.05,
            gradient_scale: 4.0,
            tilt_lerp: 0.05,
            tilt_scale: 4.0,
        }
    }
}

impl FlightTuning {
    /// Loads a tuning profile from a YAML file. Missing fields fall back to
    /// the defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let tuning: FlightTuning = serde_yaml::from_str(&raw)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_speed <= 0.0 {
            return Err(ConfigError::ValidationError(
                "max_speed must be positive".into(),
            ));
        }
        let lerps = [
            ("drift_lerp", self.drift_lerp),
            ("angular_lerp", self.angular_lerp),
            ("roll_lerp", self.roll_lerp),
            ("height_lerp", self.height_lerp),
            ("gradient_lerp", self.gradient_lerp),
            ("tilt_lerp", self.tilt_lerp),
            ("repulsion_lerp", self.repulsion_lerp),
        ];
        for (name, value) in lerps {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must lie in (0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn default_tuning_is_valid() {
        let tuning = FlightTuning::default();
        tuning.validate().unwrap();
        assert_eq!(tuning.max_speed, 7.0);
        assert_eq!(tuning.thrust, 0.02);
        assert_eq!(tuning.height_offset, 4.0);
        assert_eq!(tuning.booster_speed, 1.4);
    }

    #[test]
    fn rejects_non_positive_max_speed() {
        let tuning = FlightTuning {
            max_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_lerp() {
        let tuning = FlightTuning {
            height_lerp: 1.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = FlightTuning {
            drift_lerp: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn loads_partial_yaml_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_speed: 9.5\nthrust: 0.04").unwrap();

        let tuning = FlightTuning::from_yaml_file(file.path()).unwrap();
        assert_eq!(tuning.max_speed, 9.5);
        assert_eq!(tuning.thrust, 0.04);
        assert_eq!(tuning.air_resist, FlightTuning::default().air_resist);
    }

    #[test]
    fn yaml_round_trip() {
        let tuning = FlightTuning::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_yaml::to_string(&tuning).unwrap()).unwrap();

        let loaded = FlightTuning::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded, tuning);
    }

    #[test]
    fn invalid_yaml_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_speed: -2.0").unwrap();
        assert!(matches!(
            FlightTuning::from_yaml_file(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
