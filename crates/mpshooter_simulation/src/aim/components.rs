//! Aim offset components: controller state, turn state, published snapshot.

use bevy::prelude::*;

/// Turn-in-place FSM состояние
///
/// Один enum вместо набора bool: недопустимые комбинации невыразимы.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum TurningInPlace {
    #[default]
    Idle,
    TurningLeft,
    TurningRight,
}

impl TurningInPlace {
    pub fn is_turning(self) -> bool {
        self != TurningInPlace::Idle
    }
}

/// Состояние aim offset controller (принадлежит персонажу, пишется только в его тике)
///
/// Инвариант: `ao_yaw == 0` пока персонаж движется или в воздухе;
/// пересчитывается относительно `starting_aim_yaw` только стоя на земле.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimOffset {
    pub ao_yaw: f32,
    pub ao_pitch: f32,
    /// Источник interp во время поворота; пока Idle - следует за ao_yaw
    pub interp_ao_yaw: f32,
    /// Baseline yaw: латчится при движении и в конце поворота
    pub starting_aim_yaw: f32,
    pub turning_in_place: TurningInPlace,
    /// Actor yaw следует за controller yaw
    pub use_controller_rotation_yaw: bool,
}

/// Входы controller на один тик
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimInputs {
    pub velocity: Vec3,
    pub is_in_air: bool,
    pub aim_yaw: f32,
    pub aim_pitch: f32,
    pub weapon_equipped: bool,
    pub locally_controlled: bool,
}

/// Опубликованный результат controller за тик
///
/// Animation bridge читает ТОЛЬКО этот snapshot (явная data dependency,
/// а не порядок вызовов).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimOffsetSnapshot {
    pub ao_yaw: f32,
    pub ao_pitch: f32,
    pub turning_in_place: TurningInPlace,
    pub use_controller_rotation_yaw: bool,
}

impl From<&AimOffset> for AimOffsetSnapshot {
    fn from(state: &AimOffset) -> Self {
        Self {
            ao_yaw: state.ao_yaw,
            ao_pitch: state.ao_pitch,
            turning_in_place: state.turning_in_place,
            use_controller_rotation_yaw: state.use_controller_rotation_yaw,
        }
    }
}
