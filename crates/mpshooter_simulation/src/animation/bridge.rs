//! Derived display-only values: lean, yaw offset, corrective rate, hand IK.

use bevy::prelude::*;

use crate::config::AnimationConfig;
use crate::orientation::{finterp_to, normalized_delta, rinterp_yaw_to, yaw_from_direction};

/// Lean: сглаженная скорость поворота корпуса (deg/s), clamp в [-limit, limit]
///
/// `dt <= 0` - держим прошлое значение (деление на dt невозможно).
pub fn step_lean(lean: f32, facing_yaw: f32, facing_yaw_last: f32, dt: f32, config: &AnimationConfig) -> f32 {
    if dt <= 0.0 {
        return lean;
    }

    let target = normalized_delta(facing_yaw, facing_yaw_last) / dt;
    let interp = finterp_to(lean, target, dt, config.lean_interp_speed);
    interp.clamp(-config.lean_limit, config.lean_limit)
}

/// Yaw offset: сглаженный delta между направлением движения и aim
pub fn step_yaw_offset(
    delta_rotation_yaw: f32,
    velocity: Vec3,
    aim_yaw: f32,
    dt: f32,
    config: &AnimationConfig,
) -> f32 {
    let movement_yaw = yaw_from_direction(velocity);
    let target = normalized_delta(movement_yaw, aim_yaw);
    rinterp_yaw_to(delta_rotation_yaw, target, dt, config.yaw_offset_interp_speed)
}

/// Corrective rate: 1.0 пока |yaw_offset| <= threshold, дальше
/// `clamp(threshold / |yaw_offset|, min, 1)` - монотонно падает.
pub fn corrective_rate(yaw_offset: f32, config: &AnimationConfig) -> f32 {
    let magnitude = yaw_offset.abs();
    if magnitude > config.corrective_threshold {
        (config.corrective_threshold / magnitude).clamp(config.corrective_min, 1.0)
    } else {
        1.0
    }
}

/// LeftHandSocket (world) → пространство кости hand_r
///
/// Location переводится в bone space; rotation - мировая identity, выраженная
/// в bone space. Scale сокета сохраняется.
pub fn hand_ik_transform(socket_world: &Transform, hand_bone_world: &Transform) -> Transform {
    let bone_inverse = hand_bone_world.compute_affine().inverse();

    Transform {
        translation: bone_inverse.transform_point3(socket_world.translation),
        rotation: hand_bone_world.rotation.inverse(),
        scale: socket_world.scale,
    }
}
