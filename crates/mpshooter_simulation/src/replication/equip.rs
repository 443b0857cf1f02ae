//! Equip / aim input path
//!
//! Equip: authority экипирует сразу, остальные шлют `ClientMessage::EquipRequest`.
//! Request без payload: server сам берёт свой overlap reference.
//!
//! Aim: локальное предсказание + `ClientMessage::SetAiming` на authority.

use bevy::prelude::*;

use crate::components::{Combat, NetRole, NetworkId, OverlappingWeapon, Weapon};
use crate::error::{NetError, NetResult};
use crate::replication::{AimToggleIntent, ClientLink, ClientMessage, EquipIntent};

/// Authority equip: weapon из overlap reference
///
/// Нет Combat или нет живого overlapped weapon → None (silent no-op).
pub fn equip_overlapping_weapon(
    combat: Option<Mut<Combat>>,
    overlap: &OverlappingWeapon,
    weapons: &Query<(), With<Weapon>>,
) -> Option<Entity> {
    let mut combat = combat?;
    let weapon = overlap.0.filter(|weapon| weapons.contains(*weapon))?;

    combat.equip_weapon(weapon);
    Some(weapon)
}

fn send_request(link: Option<&ClientLink>, message: ClientMessage) -> NetResult<()> {
    link.ok_or(NetError::LinkClosed)?.send(message)
}

/// Request id персонажа (без NetworkId запрос адресовать нельзя)
fn request_target(character: Entity, net_id: Option<&NetworkId>) -> NetResult<NetworkId> {
    net_id.copied().ok_or(NetError::NotReplicated(character))
}

/// System: EquipIntent → local equip (authority) или server request
pub fn process_equip_intents(
    mut intents: EventReader<EquipIntent>,
    mut characters: Query<(&NetRole, Option<&NetworkId>, &OverlappingWeapon, Option<&mut Combat>)>,
    weapons: Query<(), With<Weapon>>,
    link: Option<Res<ClientLink>>,
) {
    for intent in intents.read() {
        let Ok((role, net_id, overlap, combat)) = characters.get_mut(intent.character) else {
            continue;
        };

        // Без Combat equip невозможен ни локально, ни через server
        if combat.is_none() {
            continue;
        }

        if role.is_authority() {
            if let Some(weapon) = equip_overlapping_weapon(combat, overlap, &weapons) {
                crate::log(&format!("Equipped {:?} → {:?}", weapon, intent.character));
            }
            continue;
        }

        let result = request_target(intent.character, net_id).and_then(|character| {
            send_request(link.as_deref(), ClientMessage::EquipRequest { character })
        });

        if let Err(err) = result {
            crate::log_warning(&format!("Equip request dropped: {}", err));
        }
    }
}

/// System: AimToggleIntent → локальный aiming + server request
///
/// Aim включается только с оружием в руках; выключить можно всегда.
pub fn process_aim_toggle_intents(
    mut intents: EventReader<AimToggleIntent>,
    mut characters: Query<(&NetRole, Option<&NetworkId>, &mut Combat)>,
    link: Option<Res<ClientLink>>,
) {
    for intent in intents.read() {
        let Ok((role, net_id, mut combat)) = characters.get_mut(intent.character) else {
            continue;
        };

        let aiming = !combat.aiming && combat.equipped_weapon.is_some();
        if combat.aiming == aiming {
            continue;
        }
        combat.set_aiming(aiming);

        if role.is_authority() {
            continue;
        }

        let result = request_target(intent.character, net_id).and_then(|character| {
            send_request(link.as_deref(), ClientMessage::SetAiming { character, aiming })
        });

        if let Err(err) = result {
            crate::log_warning(&format!("Aim request dropped: {}", err));
        }
    }
}
