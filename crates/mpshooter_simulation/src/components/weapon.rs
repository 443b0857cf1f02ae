//! Weapon entity, overlap relation и skeletal reference персонажа

use bevy::prelude::*;

/// Weapon entity (pickup в мире или в руках)
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    /// Pickup affordance ("Press E") видна этому участнику
    pub pickup_widget_visible: bool,
    /// World transform сокета LeftHandSocket на weapon mesh (None - mesh не загружен)
    pub left_hand_socket: Option<Transform>,
}

/// Weapon, рядом с которым стоит персонаж
///
/// Relation, не ownership: entity может быть despawned, поэтому каждый
/// read проверяет существование через Query.
///
/// Пишется только на authority (`replication::set_overlapping_weapon`),
/// реплицируется только owner client.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct OverlappingWeapon(pub Option<Entity>);

/// Skeletal reference персонажа для hand IK
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CharacterMesh {
    /// World transform кости hand_r (None - skeleton ещё не готов)
    pub hand_bone: Option<Transform>,
}
