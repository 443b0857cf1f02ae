//! Turn-in-place FSM
//!
//! Переходы (только стоя на земле, вызывается из controller):
//! - Idle → TurningRight: ao_yaw > turn_right_threshold
//! - Idle → TurningLeft: ao_yaw < turn_left_threshold
//! - Turning*: interp_ao_yaw → 0, ao_yaw = interp_ao_yaw;
//!   |ao_yaw| < turn_rest_threshold → Idle + resync starting_aim_yaw
//!
//! Override (движение / воздух → Idle, ao_yaw = 0) применяет controller ДО вызова FSM,
//! поэтому здесь его нет.

use crate::aim::{AimOffset, TurningInPlace};
use crate::config::AimConfig;
use crate::orientation::finterp_to;

impl AimOffset {
    /// Один шаг FSM. `current_aim_yaw` нужен для resync baseline в конце поворота.
    pub fn turn_in_place(&mut self, current_aim_yaw: f32, dt: f32, config: &AimConfig) {
        if self.turning_in_place == TurningInPlace::Idle {
            if self.ao_yaw > config.turn_right_threshold {
                self.turning_in_place = TurningInPlace::TurningRight;
            } else if self.ao_yaw < config.turn_left_threshold {
                self.turning_in_place = TurningInPlace::TurningLeft;
            }
        }

        if !self.turning_in_place.is_turning() {
            return;
        }

        self.interp_ao_yaw = finterp_to(self.interp_ao_yaw, 0.0, dt, config.turn_interp_speed);
        self.ao_yaw = self.interp_ao_yaw;

        if self.ao_yaw.abs() < config.turn_rest_threshold {
            self.turning_in_place = TurningInPlace::Idle;
            // Resync: без этого ao_yaw накопил бы drift после поворота
            self.starting_aim_yaw = current_aim_yaw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stationary(ao_yaw: f32) -> AimOffset {
        AimOffset {
            ao_yaw,
            interp_ao_yaw: ao_yaw,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_stays_idle_inside_thresholds() {
        let config = AimConfig::default();
        for yaw in [-90.0, -45.0, 0.0, 45.0, 70.0] {
            let mut state = stationary(yaw);
            state.turn_in_place(yaw, 1.0 / 60.0, &config);
            assert_eq!(state.turning_in_place, TurningInPlace::Idle, "yaw {yaw}");
            assert_eq!(state.ao_yaw, yaw);
        }
    }

    #[test]
    fn test_turn_right_above_threshold() {
        let config = AimConfig::default();
        let mut state = stationary(70.5);
        state.turn_in_place(70.5, 1.0 / 60.0, &config);

        assert_eq!(state.turning_in_place, TurningInPlace::TurningRight);
        // Interp уже пошёл в этом же тике
        assert!(state.ao_yaw < 70.5);
        assert_eq!(state.ao_yaw, state.interp_ao_yaw);
    }

    #[test]
    fn test_turn_left_below_threshold() {
        let config = AimConfig::default();
        let mut state = stationary(-90.5);
        state.turn_in_place(-90.5, 1.0 / 60.0, &config);

        assert_eq!(state.turning_in_place, TurningInPlace::TurningLeft);
        assert!(state.ao_yaw > -90.5);
    }

    #[test]
    fn test_turn_completes_and_resyncs_baseline() {
        let config = AimConfig::default();
        let mut state = stationary(100.0);
        let aim_yaw = 100.0;

        let mut ticks = 0;
        while ticks < 600 {
            state.turn_in_place(aim_yaw, 1.0 / 60.0, &config);
            ticks += 1;
            if !state.turning_in_place.is_turning() {
                break;
            }
        }

        assert_eq!(state.turning_in_place, TurningInPlace::Idle);
        assert!(state.ao_yaw.abs() < config.turn_rest_threshold);
        assert_eq!(state.starting_aim_yaw, aim_yaw);
        // 100 * (1 - 1/15)^n < 15 → n = 28
        assert_eq!(ticks, 28);
    }

    #[test]
    fn test_active_turn_does_not_flip_direction() {
        let config = AimConfig::default();
        let mut state = stationary(-100.0);
        state.turn_in_place(-100.0, 1.0 / 60.0, &config);
        assert_eq!(state.turning_in_place, TurningInPlace::TurningLeft);

        // Пока идёт поворот, threshold правила не применяются
        state.ao_yaw = 120.0;
        state.turn_in_place(0.0, 1.0 / 60.0, &config);
        assert_eq!(state.turning_in_place, TurningInPlace::TurningLeft);
    }
}
