//! Aim offset systems.

use bevy::prelude::*;

use crate::aim::{AimInputs, AimOffset, AimOffsetSnapshot};
use crate::components::{is_weapon_equipped, AimRotation, Combat, LocallyControlled, MovementState};
use crate::config::AimConfig;

/// System: aim offset controller для всех персонажей этого участника
///
/// Работает на authority и на proxy одинаково: значения считаются локально
/// у каждого участника из его копии movement/aim state.
pub fn update_aim_offset(
    mut characters: Query<(
        Entity,
        &MovementState,
        &AimRotation,
        Option<&Combat>,
        Has<LocallyControlled>,
        &mut AimOffset,
    )>,
    config: Res<AimConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (entity, movement, aim, combat, locally_controlled, mut state) in characters.iter_mut() {
        let inputs = AimInputs {
            velocity: movement.velocity,
            is_in_air: movement.is_falling,
            aim_yaw: aim.yaw,
            aim_pitch: aim.pitch,
            weapon_equipped: is_weapon_equipped(combat),
            locally_controlled,
        };

        let was_turning = state.turning_in_place;
        if !state.tick(&inputs, dt, &config) {
            continue;
        }

        if state.turning_in_place != was_turning {
            crate::log(&format!(
                "Turn in place {:?}: {:?} → {:?} (ao_yaw {:.1})",
                entity, was_turning, state.turning_in_place, state.ao_yaw
            ));
        }
    }
}

/// System: публикует snapshot для animation bridge
///
/// Запускается в конце AimOffset set. Skip-тик (нет weapon) не трогает
/// AimOffset, поэтому snapshot сохраняет прошлые значения.
pub fn publish_aim_offset_snapshot(
    mut characters: Query<(&AimOffset, &mut AimOffsetSnapshot)>,
) {
    for (state, mut snapshot) in characters.iter_mut() {
        snapshot.set_if_neq(AimOffsetSnapshot::from(state));
    }
}
