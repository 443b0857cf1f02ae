//! Headless демо: server + один client в одном процессе
//!
//! Сценарий: персонаж идёт, останавливается, камера уходит за порог
//! turn-in-place, персонаж подходит к винтовке и экипирует её через server.
//!
//! Config: `mpshooter_simulation [config.toml]` (иначе defaults).

use bevy::prelude::*;
use rand::Rng;
use mpshooter_simulation::{
    create_headless_app, log_error, log_info, run_fixed_ticks, AimOffset, AimRotation, AnimState, Character, Combat,
    DeterministicRng, EquipIntent, LocallyControlled, MovementState, NetRole, NetworkId, Owner, PeerId, ServerLink,
    SimulationConfig, SimulationPlugin, Weapon, WeaponProximity,
};

const CHARACTER_ID: NetworkId = NetworkId(1);
const RIFLE_ID: NetworkId = NetworkId(100);

fn load_config() -> SimulationConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimulationConfig::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(source) => SimulationConfig::from_toml_str(&source).unwrap_or_else(|err| {
            log_error(&format!("{}: {}", path, err));
            SimulationConfig::default()
        }),
        Err(err) => {
            log_error(&format!("{}: {}", path, err));
            SimulationConfig::default()
        }
    }
}

fn participant(seed: u64, config: &SimulationConfig) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin::with_config(config.clone()));
    app
}

fn main() {
    let seed = 42;
    let config = load_config();

    let mut server = participant(seed, &config);
    let mut client = participant(seed, &config);
    log_info(&format!("Starting headless session (seed: {})", seed));

    let mut link = ServerLink::new();
    client.insert_resource(link.connect(PeerId(1)));
    server.insert_resource(link);

    let server_rifle = server.world_mut().spawn((Weapon::default(), RIFLE_ID)).id();
    let server_character = server
        .world_mut()
        .spawn((Character, CHARACTER_ID, NetRole::Authority, Owner(PeerId(1)), Combat::default()))
        .id();

    client.world_mut().spawn((Weapon::default(), RIFLE_ID));
    let client_character = client
        .world_mut()
        .spawn((Character, CHARACTER_ID, NetRole::AutonomousProxy, LocallyControlled, Combat::default()))
        .id();

    for tick in 0..240u32 {
        // Input / movement коллабораторы (на authority - ground truth)
        match tick {
            0 => set_velocity(&mut server, server_character, Vec3::new(0.0, 0.0, -3.0)),
            30 => {
                set_velocity(&mut server, server_character, Vec3::ZERO);
                server.world_mut().send_event(WeaponProximity {
                    character: server_character,
                    weapon: server_rifle,
                    overlapping: true,
                });
            }
            40 => {
                client.world_mut().send_event(EquipIntent {
                    character: client_character,
                });
            }
            60..=90 => swing_camera(&mut server, server_character, 3.0),
            _ => {}
        }

        run_fixed_ticks(&mut server, 1);
        run_fixed_ticks(&mut client, 1);

        if tick % 20 == 0 {
            report(&server, server_character, tick);
            report(&client, client_character, tick);
        }
    }

    log_info("Simulation complete!");
}

fn set_velocity(app: &mut App, character: Entity, velocity: Vec3) {
    if let Some(mut movement) = app.world_mut().get_mut::<MovementState>(character) {
        movement.velocity = velocity;
    }
}

/// Камера уходит вправо с небольшим шумом
fn swing_camera(app: &mut App, character: Entity, step: f32) {
    let jitter = app
        .world_mut()
        .resource_mut::<DeterministicRng>()
        .rng
        .gen_range(-0.5..0.5);

    if let Some(mut aim) = app.world_mut().get_mut::<AimRotation>(character) {
        aim.yaw += step + jitter;
        aim.pitch = (aim.pitch - 0.5).max(-30.0);
    }
}

fn report(app: &App, character: Entity, tick: u32) {
    let world = app.world();
    let (Some(aim), Some(anim)) = (world.get::<AimOffset>(character), world.get::<AnimState>(character)) else {
        return;
    };
    let equipped = world.get::<Combat>(character).and_then(|combat| combat.equipped_weapon);
    let role = world.get::<NetRole>(character).copied().unwrap_or_default();

    log_info(&format!(
        "Tick {} [{}]: ao_yaw {:.1} ao_pitch {:.1} turn {:?} speed {:.1} yaw_offset {:.1} equipped {:?}",
        tick,
        role.as_str(),
        aim.ao_yaw,
        aim.ao_pitch,
        anim.turning_in_place,
        anim.speed,
        anim.yaw_offset,
        equipped
    ));
}
