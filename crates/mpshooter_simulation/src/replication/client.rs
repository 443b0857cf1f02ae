//! Client side: применение replicated state
//!
//! Порядок сообщений сохраняется link'ом, поэтому применяем строго по очереди.
//! Неизвестный NetworkId (entity ещё не заспавнена или уже despawned) → лог + drop.

use bevy::prelude::*;

use crate::components::{AimRotation, Character, Combat, LocallyControlled, MovementState, NetRole, OverlappingWeapon, Weapon};
use crate::error::NetResult;
use crate::orientation::decompress_axis_from_byte;
use crate::replication::{on_overlap_replicated, ClientLink, MovementSnapshot, NetworkEntityMap, PickupWidgets, ServerMessage};

type ReplicaQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static NetRole,
        Has<LocallyControlled>,
        &'static mut OverlappingWeapon,
        Option<&'static mut Combat>,
        &'static mut MovementState,
        &'static mut AimRotation,
        &'static mut Transform,
    ),
    With<Character>,
>;

/// System: inbox ClientLink → реплики
pub fn receive_server_messages(
    link: Option<Res<ClientLink>>,
    map: Res<NetworkEntityMap>,
    mut characters: ReplicaQuery,
    weapons: Query<(), With<Weapon>>,
    mut widgets: PickupWidgets,
) {
    let Some(link) = link else {
        return;
    };

    for message in link.drain() {
        if let Err(err) = apply_server_message(&message, &map, &mut characters, &weapons, &mut widgets) {
            crate::log(&format!("Replication skipped: {}", err));
        }
    }
}

fn apply_server_message(
    message: &ServerMessage,
    map: &NetworkEntityMap,
    characters: &mut ReplicaQuery,
    weapons: &Query<(), With<Weapon>>,
    widgets: &mut PickupWidgets,
) -> NetResult<()> {
    match *message {
        ServerMessage::OverlapChanged { character, weapon } => {
            let entity = map.resolve(character)?;
            let Ok((role, _, mut overlap, ..)) = characters.get_mut(entity) else {
                return Ok(());
            };
            // На authority overlap ведёт мутатор
            if role.is_authority() {
                return Ok(());
            }

            // Weapon, которого здесь нет (не заспавнен или уже despawned), считается пустым:
            // прошлый weapon всё равно надо скрыть
            let new = weapon
                .and_then(|id| map.get(id))
                .filter(|weapon| weapons.contains(*weapon));

            let last = overlap.0;
            overlap.set_if_neq(OverlappingWeapon(new));
            on_overlap_replicated(last, new, widgets);
        }
        ServerMessage::CombatChanged {
            character,
            equipped,
            aiming,
        } => {
            let entity = map.resolve(character)?;
            let Ok((role, _, _, Some(mut combat), ..)) = characters.get_mut(entity) else {
                return Ok(());
            };
            if role.is_authority() {
                return Ok(());
            }

            let equipped_weapon = match equipped {
                Some(id) => Some(map.resolve(id)?),
                None => None,
            };
            combat.set_if_neq(Combat {
                equipped_weapon,
                aiming,
            });
        }
        ServerMessage::MovementSnapshot(snapshot) => {
            let entity = map.resolve(snapshot.character)?;
            let Ok((role, locally_controlled, _, _, mut movement, mut aim, mut transform)) =
                characters.get_mut(entity)
            else {
                return Ok(());
            };
            // Своего персонажа client симулирует сам
            if role.is_authority() || locally_controlled {
                return Ok(());
            }

            apply_movement_snapshot(&snapshot, &mut movement, &mut aim, &mut transform);
        }
    }

    Ok(())
}

/// Snapshot → реплика. Pitch приходит квантованным в [0, 360):
/// отрицательные значения корректирует aim controller на proxy.
pub fn apply_movement_snapshot(
    snapshot: &MovementSnapshot,
    movement: &mut MovementState,
    aim: &mut AimRotation,
    transform: &mut Transform,
) {
    movement.velocity = snapshot.velocity;
    movement.acceleration = snapshot.acceleration;
    movement.is_falling = snapshot.is_falling;
    movement.is_crouched = snapshot.is_crouched;

    aim.yaw = snapshot.aim_yaw;
    aim.pitch = decompress_axis_from_byte(snapshot.aim_pitch);

    transform.rotation = Quat::from_rotation_y(snapshot.facing_yaw.to_radians());
}
