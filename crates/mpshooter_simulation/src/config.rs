//! Simulation config (policy constants, TOML-overridable)
//!
//! Значения по умолчанию = игровые константы. TOML файл может переопределить
//! любое поле, отсутствующие поля берутся из Default.
//!
//! ```toml
//! [aim]
//! turn_right_threshold = 60.0
//!
//! [net]
//! net_update_frequency = 30.0
//! ```

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid simulation config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Корневой config (раскладывается в отдельные resources плагином)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub aim: AimConfig,
    pub animation: AnimationConfig,
    pub net: NetConfig,
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Aim offset + turn-in-place thresholds
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    /// ao_yaw выше → TurningRight (градусы)
    pub turn_right_threshold: f32,
    /// ao_yaw ниже → TurningLeft (градусы)
    pub turn_left_threshold: f32,
    /// |ao_yaw| ниже → поворот завершён
    pub turn_rest_threshold: f32,
    /// Скорость interp ao_yaw к 0 во время поворота (1/сек)
    pub turn_interp_speed: f32,
    /// Pitch выше этого на non-local view считается wrapped
    pub proxy_pitch_wrap_threshold: f32,
    pub proxy_pitch_in_range: [f32; 2],
    pub proxy_pitch_out_range: [f32; 2],
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            turn_right_threshold: 70.0,
            turn_left_threshold: -90.0,
            turn_rest_threshold: 15.0,
            turn_interp_speed: 4.0,
            proxy_pitch_wrap_threshold: 90.0,
            proxy_pitch_in_range: [270.0, 360.0],
            proxy_pitch_out_range: [-90.0, 0.0],
        }
    }
}

impl AimConfig {
    pub fn pitch_in_range(&self) -> Vec2 {
        Vec2::from_array(self.proxy_pitch_in_range)
    }

    pub fn pitch_out_range(&self) -> Vec2 {
        Vec2::from_array(self.proxy_pitch_out_range)
    }
}

/// Сглаживание display-only параметров animation bridge
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub lean_interp_speed: f32,
    /// Lean клампится в [-lean_limit, lean_limit]
    pub lean_limit: f32,
    pub yaw_offset_interp_speed: f32,
    /// |yaw_offset| выше → corrective rate начинает падать
    pub corrective_threshold: f32,
    /// Нижняя граница corrective rate
    pub corrective_min: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            lean_interp_speed: 6.0,
            lean_limit: 90.0,
            yaw_offset_interp_speed: 6.0,
            corrective_threshold: 45.0,
            corrective_min: 0.5,
        }
    }
}

/// Частоты тика и репликации
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// FixedUpdate частота (Hz)
    pub fixed_hz: f64,
    /// Как часто authority шлёт movement snapshots (Hz)
    pub net_update_frequency: f32,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            fixed_hz: 60.0,
            net_update_frequency: 66.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy_constants() {
        let config = SimulationConfig::default();
        assert_eq!(config.aim.turn_right_threshold, 70.0);
        assert_eq!(config.aim.turn_left_threshold, -90.0);
        assert_eq!(config.aim.turn_rest_threshold, 15.0);
        assert_eq!(config.aim.turn_interp_speed, 4.0);
        assert_eq!(config.animation.lean_interp_speed, 6.0);
        assert_eq!(config.animation.corrective_threshold, 45.0);
        assert_eq!(config.net.net_update_frequency, 66.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            [aim]
            turn_right_threshold = 60.0

            [net]
            net_update_frequency = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(config.aim.turn_right_threshold, 60.0);
        assert_eq!(config.aim.turn_left_threshold, -90.0);
        assert_eq!(config.animation, AnimationConfig::default());
        assert_eq!(config.net.net_update_frequency, 30.0);
        assert_eq!(config.net.fixed_hz, 60.0);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result = SimulationConfig::from_toml_str("[aim]\nturn_right_threshold = \"fast\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
