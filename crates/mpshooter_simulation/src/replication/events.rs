//! Gameplay events (вход и выход replication core)
//!
//! Входы приходят от коллабораторов (collision volume, input layer),
//! выход - от overlap mutator к UI слою.

use bevy::prelude::*;

/// Proximity volume weapon пересёкся с персонажем (или перестал)
///
/// Обрабатывается только на authority: на остальных участниках
/// событие молча игнорируется.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponProximity {
    pub character: Entity,
    pub weapon: Entity,
    /// true - begin overlap, false - end overlap
    pub overlapping: bool,
}

/// Игрок нажал equip
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipIntent {
    pub character: Entity,
}

/// Игрок переключил aim
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimToggleIntent {
    pub character: Entity,
}

/// Pickup affordance weapon показана/скрыта на этом участнике
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupWidgetToggled {
    pub weapon: Entity,
    pub visible: bool,
}
