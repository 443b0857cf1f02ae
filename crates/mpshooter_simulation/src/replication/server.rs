//! Authority side: приём requests + рассылка изменений
//!
//! Receive (NetSet::Receive): ClientMessage из inbox → Combat мутации.
//! Send (NetSet::Send): Changed<OverlappingWeapon> → owner,
//! Changed<Combat> → все, movement snapshot → все кроме owner (по net clock).

use bevy::prelude::*;

use crate::components::{
    AimRotation, Character, Combat, MovementState, NetRole, NetworkId, OverlappingWeapon, Owner, PeerId, Weapon,
};
use crate::config::NetConfig;
use crate::orientation::{compress_axis_to_byte, yaw_from_rotation};
use crate::replication::{
    equip_overlapping_weapon, ClientMessage, MovementSnapshot, NetworkEntityMap, ServerLink, ServerMessage,
};

/// Аккумулятор для movement snapshot (частота ниже/равна tick rate)
#[derive(Resource, Debug, Default)]
pub struct NetUpdateClock {
    accumulator: f32,
}

impl NetUpdateClock {
    /// true - пора отправлять. Накопленный остаток не превышает один интервал.
    pub fn advance(&mut self, dt: f32, frequency: f32) -> bool {
        if frequency <= 0.0 {
            return false;
        }

        let interval = 1.0 / frequency;
        self.accumulator += dt;
        if self.accumulator < interval {
            return false;
        }

        self.accumulator = (self.accumulator - interval).min(interval);
        true
    }
}

/// System: обработка client requests на authority
///
/// Принимаются только запросы от owner peer персонажа; всё остальное
/// дропается с логом (без ответа клиенту).
pub fn receive_client_messages(
    link: Option<Res<ServerLink>>,
    map: Res<NetworkEntityMap>,
    mut characters: Query<(&NetRole, Option<&Owner>, &OverlappingWeapon, Option<&mut Combat>), With<Character>>,
    weapons: Query<(), With<Weapon>>,
) {
    let Some(link) = link else {
        return;
    };

    for (peer, message) in link.drain() {
        if !link.is_connected(peer) {
            crate::log(&format!("Request from disconnected {:?} dropped", peer));
            continue;
        }

        let target = match message {
            ClientMessage::EquipRequest { character } | ClientMessage::SetAiming { character, .. } => character,
        };

        let Some(entity) = map.get(target) else {
            crate::log(&format!("Request for unknown {:?} dropped", target));
            continue;
        };

        let Ok((role, owner, overlap, combat)) = characters.get_mut(entity) else {
            continue;
        };

        if !role.is_authority() || owner.map(|o| o.0) != Some(peer) {
            crate::log_warning(&format!("{:?} is not the owner of {:?}: request rejected", peer, target));
            continue;
        }

        match message {
            ClientMessage::EquipRequest { .. } => match equip_overlapping_weapon(combat, overlap, &weapons) {
                Some(weapon) => crate::log(&format!("Server equip {:?} → {:?}", weapon, entity)),
                None => crate::log(&format!("Equip request for {:?}: nothing to equip", entity)),
            },
            ClientMessage::SetAiming { aiming, .. } => {
                if let Some(mut combat) = combat {
                    combat.set_if_neq(Combat { aiming, ..*combat });
                }
            }
        }
    }
}

fn send_or_disconnect(link: &mut ServerLink, peer: PeerId, message: ServerMessage) {
    if let Err(err) = link.send_to(peer, message) {
        crate::log_warning(&format!("Replication dropped: {}", err));
        link.disconnect(peer);
    }
}

/// System: owner-only репликация overlap reference
pub fn send_overlap_changes(
    link: Option<ResMut<ServerLink>>,
    characters: Query<(&NetworkId, &NetRole, Option<&Owner>, &OverlappingWeapon), Changed<OverlappingWeapon>>,
    net_ids: Query<&NetworkId>,
) {
    let Some(mut link) = link else {
        return;
    };

    for (character, role, owner, overlap) in characters.iter() {
        // Host-controlled персонаж: owner нет, реплицировать некому
        let Some(Owner(peer)) = owner.filter(|_| role.is_authority()) else {
            continue;
        };

        // Weapon без NetworkId на клиенте не существует → реплицируется как пусто
        let weapon = overlap.0.and_then(|weapon| net_ids.get(weapon).ok().copied());

        crate::log(&format!("Overlap {:?} → {:?}: {:?}", character, peer, weapon));
        send_or_disconnect(
            &mut link,
            *peer,
            ServerMessage::OverlapChanged {
                character: *character,
                weapon,
            },
        );
    }
}

/// System: Combat репликация всем подключённым peers
pub fn send_combat_changes(
    link: Option<ResMut<ServerLink>>,
    characters: Query<(&NetworkId, &NetRole, &Combat), Changed<Combat>>,
    net_ids: Query<&NetworkId>,
) {
    let Some(mut link) = link else {
        return;
    };

    for (character, role, combat) in characters.iter() {
        if !role.is_authority() {
            continue;
        }

        let message = ServerMessage::CombatChanged {
            character: *character,
            equipped: combat.equipped_weapon.and_then(|weapon| net_ids.get(weapon).ok().copied()),
            aiming: combat.aiming,
        };

        let peers: Vec<PeerId> = link.peers().collect();
        for peer in peers {
            send_or_disconnect(&mut link, peer, message.clone());
        }
    }
}

/// System: movement snapshots для simulated proxies (всем кроме owner)
pub fn send_movement_snapshots(
    link: Option<ResMut<ServerLink>>,
    mut clock: ResMut<NetUpdateClock>,
    config: Res<NetConfig>,
    time: Res<Time<Fixed>>,
    characters: Query<(&NetworkId, &NetRole, Option<&Owner>, &MovementState, &AimRotation, &Transform), With<Character>>,
) {
    let Some(mut link) = link else {
        return;
    };

    if !clock.advance(time.delta_secs(), config.net_update_frequency) {
        return;
    }

    let peers: Vec<PeerId> = link.peers().collect();

    for (character, role, owner, movement, aim, transform) in characters.iter() {
        if !role.is_authority() {
            continue;
        }

        let snapshot = MovementSnapshot {
            character: *character,
            velocity: movement.velocity,
            acceleration: movement.acceleration,
            is_falling: movement.is_falling,
            is_crouched: movement.is_crouched,
            facing_yaw: yaw_from_rotation(transform.rotation),
            aim_yaw: aim.yaw,
            aim_pitch: compress_axis_to_byte(aim.pitch),
        };

        for &peer in &peers {
            if owner.is_some_and(|o| o.0 == peer) {
                continue;
            }
            send_or_disconnect(&mut link, peer, ServerMessage::MovementSnapshot(snapshot));
        }
    }
}
