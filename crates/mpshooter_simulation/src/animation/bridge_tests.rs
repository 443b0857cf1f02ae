//! Tests for animation bridge math.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::animation::{corrective_rate, hand_ik_transform, step_lean, step_yaw_offset};
    use crate::config::AnimationConfig;

    #[test]
    fn test_corrective_rate_examples() {
        let config = AnimationConfig::default();

        assert_eq!(corrective_rate(0.0, &config), 1.0);
        assert_eq!(corrective_rate(45.0, &config), 1.0);
        assert_eq!(corrective_rate(-45.0, &config), 1.0);
        assert_eq!(corrective_rate(60.0, &config), 0.75);
        assert_eq!(corrective_rate(-60.0, &config), 0.75);
        assert_eq!(corrective_rate(90.0, &config), 0.5);
        assert_eq!(corrective_rate(180.0, &config), 0.5);
    }

    #[test]
    fn test_corrective_rate_monotonic_beyond_threshold() {
        let config = AnimationConfig::default();
        let mut previous = 1.0;
        let mut offset = 45.0;

        while offset <= 180.0 {
            let rate = corrective_rate(offset, &config);
            assert!((0.5..=1.0).contains(&rate), "offset {offset} → {rate}");
            assert!(rate <= previous, "offset {offset}: {rate} > {previous}");
            previous = rate;
            offset += 0.5;
        }
    }

    #[test]
    fn test_lean_follows_turn_rate_and_clamps() {
        let config = AnimationConfig::default();
        let dt = 1.0 / 60.0;

        // 1° за кадр = 60°/s → lean идёт к 60 с шагом 10%
        let lean = step_lean(0.0, 1.0, 0.0, dt, &config);
        assert!((lean - 6.0).abs() < 1e-3, "lean {lean}");

        // Огромный поворот - clamp на 90
        let mut lean = 0.0;
        for _ in 0..120 {
            lean = step_lean(lean, 10.0, 0.0, dt, &config);
        }
        assert_eq!(lean, 90.0);
    }

    #[test]
    fn test_lean_wraps_across_180() {
        let config = AnimationConfig::default();
        // 179 → -179: реальный поворот +2°, а не -358°
        let lean = step_lean(0.0, -179.0, 179.0, 0.1, &config);
        assert!(lean > 0.0);
    }

    #[test]
    fn test_lean_holds_on_zero_dt() {
        let config = AnimationConfig::default();
        assert_eq!(step_lean(12.0, 30.0, 0.0, 0.0, &config), 12.0);
    }

    #[test]
    fn test_yaw_offset_converges_to_strafe_angle() {
        let config = AnimationConfig::default();
        let dt = 1.0 / 60.0;

        // Aim вперёд (yaw 0), движение влево (-X → yaw 90)
        let mut yaw_offset = 0.0;
        for _ in 0..300 {
            yaw_offset = step_yaw_offset(yaw_offset, Vec3::NEG_X * 4.0, 0.0, dt, &config);
        }
        assert!((yaw_offset - 90.0).abs() < 1e-2, "yaw_offset {yaw_offset}");
    }

    #[test]
    fn test_hand_ik_in_bone_space() {
        let bone = Transform::from_xyz(1.0, 2.0, 3.0).with_rotation(Quat::from_rotation_y(90f32.to_radians()));
        let socket = Transform::from_xyz(1.0, 2.0, 2.0);

        let ik = hand_ik_transform(&socket, &bone);

        // Сокет на 1м впереди (-Z) кости; кость повёрнута на 90° → в её пространстве это +X
        assert!((ik.translation - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5, "{:?}", ik.translation);
        assert!(ik.rotation.abs_diff_eq(bone.rotation.inverse(), 1e-5), "{:?}", ik.rotation);
    }
}
