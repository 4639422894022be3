use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::input::ControlMapping;
use crate::components::SuitConfig;
use crate::utils::{ConfigError, MAX_FRAME_DELTA};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Longest step handed to the integrator [s]
    pub max_delta: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_delta: MAX_FRAME_DELTA,
        }
    }
}

/// Everything tunable about a suit session, persisted as YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    pub suit: SuitConfig,
    pub input: ControlMapping,
    pub frame: FrameConfig,
}

impl RigSettings {
    /// `<config dir>/suit_rig/settings.yaml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("suit_rig").join("settings.yaml"))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let settings: Self = serde_yaml::from_reader(file)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Settings from [`RigSettings::default_path`], falling back to defaults.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(settings) => {
                    info!("Loaded suit settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    warn!("Ignoring {}: {}", path.display(), err);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.suit.validate()?;
        self.input.validate()?;
        if !self.frame.max_delta.is_finite() || self.frame.max_delta <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "frame.max_delta must be positive and finite, got {}",
                self.frame.max_delta
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = RigSettings::default();
        assert_eq!(settings.frame.max_delta, 0.05);
        assert_eq!(settings.input.dead_zone, 0.15);
        assert_eq!(settings.suit, SuitConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "
suit:
  max_speed: 8.0
  rot_accel:
    yaw: 6.0
input:
  dead_zone: 0.2
";
        let settings = RigSettings::from_yaml_str(yaml).unwrap();
        assert_eq!(settings.suit.max_speed, 8.0);
        assert_eq!(settings.suit.rot_accel.yaw, 6.0);
        assert_eq!(settings.suit.rot_accel.pitch, 2.0);
        assert_eq!(settings.input.dead_zone, 0.2);
        assert_eq!(settings.input.brake_buttons, vec![3, 9, 10, 4]);
        assert_eq!(settings.frame, FrameConfig::default());
    }

    #[test]
    fn test_settings_save_load() -> Result<(), ConfigError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("settings.yaml");

        let mut settings = RigSettings::default();
        settings.suit.linear_damping = 0.25;
        settings.frame.max_delta = 0.02;
        settings.save(&path)?;

        let loaded = RigSettings::load(&path)?;
        assert_eq!(loaded, settings);
        Ok(())
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let result = RigSettings::from_yaml_str("frame:\n  max_delta: -0.1\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = RigSettings::from_yaml_str("input:\n  dead_zone: 1.5\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = RigSettings::from_yaml_str("suit: [1, 2");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RigSettings::load("nonexistent_settings.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
