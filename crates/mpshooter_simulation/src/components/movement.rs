//! Movement/orientation входы (пишутся внешними коллабораторами)

use bevy::prelude::*;

/// Состояние движения персонажа
///
/// Источник - movement коллаборатор (character controller на authority,
/// MovementSnapshot на simulated proxy). Core только читает.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementState {
    /// Мировая скорость (m/s), Y - вертикаль
    pub velocity: Vec3,
    /// Текущее ускорение от input (m/s²)
    pub acceleration: Vec3,
    /// В воздухе (прыжок/падение)
    pub is_falling: bool,
    pub is_crouched: bool,
}

impl MovementState {
    pub fn is_accelerating(&self) -> bool {
        self.acceleration.length() > 0.0
    }
}

/// Base aim rotation контролирующего view (градусы)
///
/// На locally controlled персонаже pitch в (-90, 90].
/// На proxy pitch приходит квантованным байтом → [0, 360): -45 превращается в 315.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl AimRotation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }
}
