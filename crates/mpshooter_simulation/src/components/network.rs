//! Network identity и роли
//!
//! Один authority на персонажа; остальные участники держат read-replica
//! и могут только отправлять запросы.

use bevy::prelude::*;

/// Роль этого процесса по отношению к entity
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum NetRole {
    /// Ground truth: единственный writer replicated state
    Authority,
    /// Реплика персонажа, которым управляет этот client
    AutonomousProxy,
    /// Реплика чужого персонажа
    #[default]
    SimulatedProxy,
}

impl NetRole {
    pub fn is_authority(self) -> bool {
        self == NetRole::Authority
    }

    /// Имя роли для debug overlay / логов
    pub fn as_str(self) -> &'static str {
        match self {
            NetRole::Authority => "Authority",
            NetRole::AutonomousProxy => "AutonomousProxy",
            NetRole::SimulatedProxy => "SimulatedProxy",
        }
    }
}

/// Marker: этот процесс управляет entity (input, camera)
///
/// Может стоять и на Authority (listen server host), и на AutonomousProxy.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LocallyControlled;

/// Стабильный id entity, общий для всех участников
///
/// Entity id локален для каждого App; через сеть ходят только NetworkId.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
#[reflect(Component)]
pub struct NetworkId(pub u64);

/// Id подключённого client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerId(pub u64);

/// Какой client владеет персонажем (только на authority)
///
/// Owner-only поля реплицируются только этому peer; server requests
/// принимаются только от него.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner(pub PeerId);
