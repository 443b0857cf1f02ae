//! Combat коллаборатор: equipped weapon + aiming
//!
//! Мутируется только на authority (equip через `equip_weapon`).
//! На клиентах обновляется репликацией (`ServerMessage::CombatChanged`)
//! и локальным предсказанием aiming.

use bevy::prelude::*;

/// Combat state персонажа
///
/// Опционален: все consumers работают с `Option<&Combat>`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Combat {
    /// Weapon в руках (relation на weapon entity, не ownership)
    pub equipped_weapon: Option<Entity>,
    pub aiming: bool,
}

impl Combat {
    /// Equip weapon (повторный equip того же weapon - no-op по результату)
    pub fn equip_weapon(&mut self, weapon: Entity) {
        self.equipped_weapon = Some(weapon);
    }

    pub fn set_aiming(&mut self, aiming: bool) {
        self.aiming = aiming;
    }
}

// ============================================================================
// Accessors (side-effect free, Combat может отсутствовать)
// ============================================================================

pub fn is_weapon_equipped(combat: Option<&Combat>) -> bool {
    combat.is_some_and(|c| c.equipped_weapon.is_some())
}

pub fn is_aiming(combat: Option<&Combat>) -> bool {
    combat.is_some_and(|c| c.aiming)
}

pub fn equipped_weapon(combat: Option<&Combat>) -> Option<Entity> {
    combat.and_then(|c| c.equipped_weapon)
}
