//! Multiplayer shooter simulation core
//!
//! ECS-симуляция на Bevy 0.16 (headless): aim offset + turn-in-place,
//! weapon overlap replication и animation state bridge.
//!
//! Каждый участник (server, clients) - отдельный App; связь через
//! in-process link (`replication::ServerLink` / `replication::ClientLink`).
//!
//! Порядок тика (FixedUpdate, 60Hz):
//! NetSet::Receive → GameplaySet::Intents → GameplaySet::AimOffset
//! → GameplaySet::Animation → NetSet::Send

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod aim;
pub mod animation;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod orientation;
pub mod replication;

// Re-exports для удобства
pub use aim::{AimOffset, AimOffsetSnapshot, AimPlugin, TurningInPlace};
pub use animation::{AnimState, AnimationBridgePlugin};
pub use components::*;
pub use config::{AimConfig, AnimationConfig, ConfigError, NetConfig, SimulationConfig};
pub use error::{NetError, NetResult};
pub use logger::*;
pub use replication::{
    AimToggleIntent, ClientLink, ClientMessage, EquipIntent, PickupWidgetToggled, ReplicationPlugin, ServerLink,
    ServerMessage, WeaponProximity,
};

/// Gameplay фазы тика
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    /// Proximity, equip и aim intents
    Intents,
    /// Aim offset controller + snapshot
    AimOffset,
    /// Animation bridge (читает snapshot)
    Animation,
}

/// Сетевые фазы тика
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetSet {
    Receive,
    Send,
}

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(self.config.net.fixed_hz))
            .insert_resource(self.config.aim.clone())
            .insert_resource(self.config.animation.clone())
            .insert_resource(self.config.net.clone())
            .configure_sets(
                FixedUpdate,
                (
                    NetSet::Receive,
                    GameplaySet::Intents,
                    GameplaySet::AimOffset,
                    GameplaySet::Animation,
                    NetSet::Send,
                )
                    .chain(),
            )
            .add_plugins((ReplicationPlugin, AimPlugin, AnimationBridgePlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый `app.update()` сдвигает часы ровно на один fixed тик.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();

    let fixed = Time::<Fixed>::from_hz(NetConfig::default().fixed_hz);
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(fixed.timestep()))
        .insert_resource(fixed);

    app
}

/// Прогоняет ровно `ticks` FixedUpdate тиков
///
/// Первый update после создания App только заводит часы (zero delta),
/// поэтому он делается здесь автоматически.
pub fn run_fixed_ticks(app: &mut App, ticks: usize) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(timestep));

    if app.world().resource::<Time<Real>>().first_update().is_none() {
        app.update();
    }

    for _ in 0..ticks {
        app.update();
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
