//! Character marker - точка входа для всего aim/replication core

use bevy::prelude::*;

/// Персонаж (player pawn)
///
/// Через Required Components получает всё состояние, которое core читает и пишет:
/// movement/aim входы, aim offset state, опубликованный snapshot, animation параметры,
/// overlap reference и роль в сети.
///
/// Combat и CharacterMesh НЕ required: их отсутствие - штатный случай (silent early exit).
///
/// NetRole по умолчанию SimulatedProxy: entity без явной роли никогда не пишет
/// replicated state.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    crate::components::MovementState,
    crate::components::AimRotation,
    crate::components::OverlappingWeapon,
    crate::components::NetRole,
    crate::aim::AimOffset,
    crate::aim::AimOffsetSnapshot,
    crate::animation::AnimState,
    crate::animation::AnimSmoothing
)]
pub struct Character;
