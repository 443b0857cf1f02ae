//! Aim offset controller - per-tick orchestration
//!
//! Порядок правил (приоритет сверху вниз):
//! 1. Нет weapon → skip (outputs сохраняют прошлые значения)
//! 2. Движение ИЛИ воздух → override: baseline = aim yaw, ao_yaw = 0, Idle
//! 3. Стоим на земле → ao_yaw от baseline + turn-in-place FSM
//! 4. Pitch всегда; на non-local view - коррекция wrap artifact

use crate::aim::{AimInputs, AimOffset, TurningInPlace};
use crate::config::AimConfig;
use crate::orientation::{normalized_delta, planar_speed, remap_clamped};

impl AimOffset {
    /// Один тик controller. Возвращает false если тик пропущен (нет weapon).
    pub fn tick(&mut self, inputs: &AimInputs, dt: f32, config: &AimConfig) -> bool {
        if !inputs.weapon_equipped {
            return false;
        }

        let speed = planar_speed(inputs.velocity);

        if speed == 0.0 && !inputs.is_in_air {
            self.ao_yaw = normalized_delta(inputs.aim_yaw, self.starting_aim_yaw);
            if self.turning_in_place == TurningInPlace::Idle {
                // Seed для поворота, который может начаться в следующем тике
                self.interp_ao_yaw = self.ao_yaw;
            }
            self.use_controller_rotation_yaw = true;
            self.turn_in_place(inputs.aim_yaw, dt, config);
        } else {
            self.starting_aim_yaw = inputs.aim_yaw;
            self.ao_yaw = 0.0;
            self.use_controller_rotation_yaw = true;
            self.turning_in_place = TurningInPlace::Idle;
        }

        self.ao_pitch = corrected_pitch(inputs.aim_pitch, inputs.locally_controlled, config);

        true
    }
}

/// Pitch для aim offset
///
/// Replicated pitch квантуется в байт и приходит в [0, 360): отрицательный pitch
/// становится 270..360. Locally controlled view видит исходное значение.
pub fn corrected_pitch(pitch: f32, locally_controlled: bool, config: &AimConfig) -> f32 {
    if pitch > config.proxy_pitch_wrap_threshold && !locally_controlled {
        remap_clamped(pitch, config.pitch_in_range(), config.pitch_out_range())
    } else {
        pitch
    }
}
