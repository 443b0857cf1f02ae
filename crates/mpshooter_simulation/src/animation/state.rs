//! Animation driver parameters

use bevy::prelude::*;

use crate::aim::TurningInPlace;

/// Read-only параметры для внешнего animation driver (blend spaces, aim offset, FABRIK)
///
/// Пересчитывается раз в тик после aim offset controller.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimState {
    pub ao_yaw: f32,
    pub ao_pitch: f32,
    /// Горизонтальная скорость (m/s)
    pub speed: f32,
    pub is_in_air: bool,
    pub is_accelerating: bool,
    pub is_crouched: bool,
    pub weapon_equipped: bool,
    pub aiming: bool,
    /// Сглаженный yaw движения относительно aim (strafe blend space)
    pub yaw_offset: f32,
    /// Сглаженная скорость поворота корпуса, [-90, 90]
    pub lean: f32,
    /// Множитель procedural correction, [0.5, 1]
    pub corrective_rate: f32,
    /// LeftHandSocket weapon в пространстве hand_r (FABRIK target)
    pub left_hand_transform: Transform,
    pub turning_in_place: TurningInPlace,
}

impl Default for AnimState {
    fn default() -> Self {
        Self {
            ao_yaw: 0.0,
            ao_pitch: 0.0,
            speed: 0.0,
            is_in_air: false,
            is_accelerating: false,
            is_crouched: false,
            weapon_equipped: false,
            aiming: false,
            yaw_offset: 0.0,
            lean: 0.0,
            corrective_rate: 1.0,
            left_hand_transform: Transform::IDENTITY,
            turning_in_place: TurningInPlace::Idle,
        }
    }
}

/// Внутреннее состояние сглаживания bridge (между кадрами)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimSmoothing {
    /// Facing yaw прошлого кадра (None до первого кадра)
    pub facing_yaw_last_frame: Option<f32>,
    /// Сглаженный delta yaw (movement vs aim)
    pub delta_rotation_yaw: f32,
}
