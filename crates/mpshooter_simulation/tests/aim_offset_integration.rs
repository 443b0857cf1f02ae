//! Integration тесты aim offset → animation bridge (listen-server host)

use bevy::prelude::*;
use mpshooter_simulation::{
    create_headless_app, run_fixed_ticks, AimOffset, AimOffsetSnapshot, AimRotation, AnimState, Character,
    CharacterMesh, Combat, LocallyControlled, MovementState, NetRole, SimulationPlugin, TurningInPlace, Weapon,
};

struct Host {
    app: App,
    character: Entity,
}

impl Host {
    fn armed() -> Self {
        let mut app = create_headless_app(3);
        app.add_plugins(SimulationPlugin::default());

        let weapon = app.world_mut().spawn(Weapon::default()).id();
        let character = app
            .world_mut()
            .spawn((
                Character,
                NetRole::Authority,
                LocallyControlled,
                Combat {
                    equipped_weapon: Some(weapon),
                    aiming: false,
                },
            ))
            .id();

        run_fixed_ticks(&mut app, 1);
        Self { app, character }
    }

    fn set_aim_yaw(&mut self, yaw: f32) {
        if let Some(mut aim) = self.app.world_mut().get_mut::<AimRotation>(self.character) {
            aim.yaw = yaw;
        }
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        if let Some(mut movement) = self.app.world_mut().get_mut::<MovementState>(self.character) {
            movement.velocity = velocity;
        }
    }

    fn aim(&self) -> AimOffset {
        self.app.world().get::<AimOffset>(self.character).copied().unwrap_or_default()
    }

    fn anim(&self) -> AnimState {
        self.app.world().get::<AnimState>(self.character).copied().unwrap_or_default()
    }
}

#[test]
fn test_turn_right_then_settle() {
    let mut host = Host::armed();

    host.set_aim_yaw(80.0);
    run_fixed_ticks(&mut host.app, 1);

    assert_eq!(host.aim().turning_in_place, TurningInPlace::TurningRight);
    assert_eq!(host.anim().turning_in_place, TurningInPlace::TurningRight);
    assert!(host.aim().ao_yaw < 80.0);

    let mut ticks = 1;
    while host.aim().turning_in_place.is_turning() && ticks < 120 {
        run_fixed_ticks(&mut host.app, 1);
        ticks += 1;
    }

    let aim = host.aim();
    assert_eq!(aim.turning_in_place, TurningInPlace::Idle);
    assert_eq!(aim.starting_aim_yaw, 80.0);
    assert!(aim.ao_yaw.abs() < 15.0);
    // 80 * (14/15)^n < 15
    assert_eq!(ticks, 25);

    // Следующий тик считает ao_yaw уже от нового baseline
    run_fixed_ticks(&mut host.app, 1);
    assert_eq!(host.aim().ao_yaw, 0.0);
}

#[test]
fn test_moving_resets_aim_offset() {
    let mut host = Host::armed();

    host.set_aim_yaw(50.0);
    run_fixed_ticks(&mut host.app, 1);
    assert_eq!(host.aim().ao_yaw, 50.0);

    host.set_velocity(Vec3::new(0.0, 0.0, -3.0));
    host.set_aim_yaw(65.0);
    run_fixed_ticks(&mut host.app, 1);

    let aim = host.aim();
    assert_eq!(aim.ao_yaw, 0.0);
    assert_eq!(aim.starting_aim_yaw, 65.0);
    assert_eq!(aim.turning_in_place, TurningInPlace::Idle);
    assert!(aim.use_controller_rotation_yaw);

    let anim = host.anim();
    assert!((anim.speed - 3.0).abs() < 1e-5);
    assert!(anim.weapon_equipped);
    assert!(!anim.aiming);
}

#[test]
fn test_anim_state_mirrors_published_snapshot() {
    let mut host = Host::armed();

    for yaw in [10.0, -30.0, 60.0, -85.0] {
        host.set_aim_yaw(yaw);
        run_fixed_ticks(&mut host.app, 1);

        let snapshot = host
            .app
            .world()
            .get::<AimOffsetSnapshot>(host.character)
            .copied()
            .unwrap_or_default();
        let anim = host.anim();
        assert_eq!(anim.ao_yaw, snapshot.ao_yaw);
        assert_eq!(anim.ao_pitch, snapshot.ao_pitch);
        assert_eq!(anim.turning_in_place, snapshot.turning_in_place);
    }
}

#[test]
fn test_unarmed_character_keeps_previous_offsets() {
    let mut host = Host::armed();

    host.set_aim_yaw(40.0);
    run_fixed_ticks(&mut host.app, 1);
    assert_eq!(host.aim().ao_yaw, 40.0);

    let character = host.character;
    host.app.world_mut().entity_mut(character).insert(Combat::default());
    host.set_aim_yaw(-20.0);
    run_fixed_ticks(&mut host.app, 3);

    assert_eq!(host.aim().ao_yaw, 40.0);
    assert_eq!(host.anim().ao_yaw, 40.0);
    assert!(!host.anim().weapon_equipped);
}

#[test]
fn test_strafing_lowers_corrective_rate() {
    let mut host = Host::armed();

    // Движение вдоль -X при aim yaw 0 → yaw offset к 90
    host.set_velocity(Vec3::new(-4.0, 0.0, 0.0));
    run_fixed_ticks(&mut host.app, 300);

    let anim = host.anim();
    assert!((anim.yaw_offset - 90.0).abs() < 1e-2, "yaw_offset {}", anim.yaw_offset);
    assert!((anim.corrective_rate - 0.5).abs() < 1e-3);
}

#[test]
fn test_hand_ik_follows_socket_and_holds_without_skeleton() {
    let mut host = Host::armed();
    let character = host.character;

    let weapon = host
        .app
        .world()
        .get::<Combat>(character)
        .and_then(|combat| combat.equipped_weapon);
    let Some(weapon) = weapon else {
        panic!("armed host has a weapon");
    };

    host.app.world_mut().entity_mut(weapon).insert(Weapon {
        pickup_widget_visible: false,
        left_hand_socket: Some(Transform::from_xyz(0.5, 1.0, 0.0)),
    });
    host.app.world_mut().entity_mut(character).insert(CharacterMesh {
        hand_bone: Some(Transform::from_xyz(0.0, 1.0, 0.0)),
    });
    run_fixed_ticks(&mut host.app, 1);

    let ik = host.anim().left_hand_transform;
    assert!((ik.translation - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);

    // Skeleton пропал → держим прошлое значение
    host.app.world_mut().entity_mut(character).insert(CharacterMesh { hand_bone: None });
    run_fixed_ticks(&mut host.app, 1);
    assert_eq!(host.anim().left_hand_transform, ik);

    // Weapon despawned → тоже держим
    host.app.world_mut().despawn(weapon);
    run_fixed_ticks(&mut host.app, 1);
    assert_eq!(host.anim().left_hand_transform, ik);
}
