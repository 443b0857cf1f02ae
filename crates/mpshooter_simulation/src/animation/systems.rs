//! Animation bridge system.

use bevy::prelude::*;

use crate::aim::AimOffsetSnapshot;
use crate::animation::{corrective_rate, hand_ik_transform, step_lean, step_yaw_offset, AnimSmoothing, AnimState};
use crate::components::{
    equipped_weapon, is_aiming, is_weapon_equipped, AimRotation, CharacterMesh, Combat, MovementState, Weapon,
};
use crate::config::AnimationConfig;
use crate::orientation::{planar_speed, yaw_from_rotation};

/// System: собирает параметры animation driver
///
/// Читает AimOffsetSnapshot (опубликован в этом же тике), movement flags напрямую,
/// weapon flags через accessors Combat. Hand IK пересчитывается только если есть
/// живой weapon с сокетом и skeleton персонажа - иначе держим прошлый transform.
pub fn update_anim_state(
    mut characters: Query<(
        &MovementState,
        &AimRotation,
        &Transform,
        &AimOffsetSnapshot,
        Option<&Combat>,
        Option<&CharacterMesh>,
        &mut AnimSmoothing,
        &mut AnimState,
    )>,
    weapons: Query<&Weapon>,
    config: Res<AnimationConfig>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (movement, aim, transform, snapshot, combat, mesh, mut smoothing, mut anim) in characters.iter_mut() {
        // Movement state
        anim.is_in_air = movement.is_falling;
        anim.is_accelerating = movement.is_accelerating();
        anim.is_crouched = movement.is_crouched;
        anim.speed = planar_speed(movement.velocity);
        anim.turning_in_place = snapshot.turning_in_place;

        // Weapon state
        anim.weapon_equipped = is_weapon_equipped(combat);
        anim.aiming = is_aiming(combat);

        // Lean
        let facing_yaw = yaw_from_rotation(transform.rotation);
        let facing_yaw_last = smoothing.facing_yaw_last_frame.unwrap_or(facing_yaw);
        anim.lean = step_lean(anim.lean, facing_yaw, facing_yaw_last, dt, &config);
        smoothing.facing_yaw_last_frame = Some(facing_yaw);

        // Yaw offset + corrective rate
        smoothing.delta_rotation_yaw =
            step_yaw_offset(smoothing.delta_rotation_yaw, movement.velocity, aim.yaw, dt, &config);
        anim.yaw_offset = smoothing.delta_rotation_yaw;
        anim.corrective_rate = corrective_rate(anim.yaw_offset, &config);

        // Hand IK
        if anim.weapon_equipped {
            let socket = equipped_weapon(combat)
                .and_then(|weapon| weapons.get(weapon).ok())
                .and_then(|weapon| weapon.left_hand_socket);
            let hand_bone = mesh.and_then(|mesh| mesh.hand_bone);

            if let (Some(socket), Some(hand_bone)) = (socket, hand_bone) {
                anim.left_hand_transform = hand_ik_transform(&socket, &hand_bone);
            }
        }

        // Aim offset (snapshot controller-а)
        anim.ao_yaw = snapshot.ao_yaw;
        anim.ao_pitch = snapshot.ao_pitch;
    }
}
