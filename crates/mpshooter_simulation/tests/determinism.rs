//! Тесты детерминизма
//!
//! Одинаковый seed → идентичные aim offset / animation параметры.
//! Входы (камера, движение) генерируются из DeterministicRng.

use bevy::prelude::*;
use rand::Rng;
use mpshooter_simulation::{
    create_headless_app, run_fixed_ticks, world_snapshot, AimOffset, AimRotation, AnimState, Character, Combat,
    DeterministicRng, LocallyControlled, MovementState, NetRole, SimulationPlugin, Weapon,
};

/// Случайные входы персонажа (вместо input / movement коллабораторов)
fn drive_inputs(mut rng: ResMut<DeterministicRng>, mut characters: Query<(&mut AimRotation, &mut MovementState)>) {
    for (mut aim, mut movement) in characters.iter_mut() {
        aim.yaw = (aim.yaw + rng.rng.gen_range(-6.0..6.0)).rem_euclid(360.0);
        aim.pitch = (aim.pitch + rng.rng.gen_range(-2.0..2.0)).clamp(-89.0, 89.0);

        // Иногда стоим, иногда идём
        if rng.rng.gen_bool(0.05) {
            movement.velocity = if movement.velocity == Vec3::ZERO {
                Vec3::new(rng.rng.gen_range(-4.0..4.0), 0.0, rng.rng.gen_range(-4.0..4.0))
            } else {
                Vec3::ZERO
            };
        }
    }
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const CHARACTER_COUNT: usize = 16;
    const TICK_COUNT: usize = 600;

    let snapshot1 = run_simulation(SEED, CHARACTER_COUNT, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, CHARACTER_COUNT, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const CHARACTER_COUNT: usize = 8;
    const TICK_COUNT: usize = 300;

    let snapshots: Vec<_> = (0..3)
        .map(|_| run_simulation(SEED, CHARACTER_COUNT, TICK_COUNT))
        .collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_simulation(1, 4, 200);
    let snapshot2 = run_simulation(2, 4, 200);

    assert_ne!(snapshot1, snapshot2);
}

/// Запускает симуляцию и возвращает snapshot aim offset + animation параметров
fn run_simulation(seed: u64, character_count: usize, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::default())
        .add_systems(FixedUpdate, drive_inputs.before(mpshooter_simulation::GameplaySet::AimOffset));

    for _ in 0..character_count {
        let weapon = app.world_mut().spawn(Weapon::default()).id();
        app.world_mut().spawn((
            Character,
            NetRole::Authority,
            LocallyControlled,
            Combat {
                equipped_weapon: Some(weapon),
                aiming: false,
            },
        ));
    }

    run_fixed_ticks(&mut app, tick_count);

    let mut snapshot = world_snapshot::<AimOffset>(app.world_mut());
    snapshot.extend(world_snapshot::<AnimState>(app.world_mut()));
    snapshot
}
