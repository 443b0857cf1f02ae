//! Wire messages (in-process, поэтому без сериализации)
//!
//! Через сеть ходят только NetworkId - Entity локален для каждого App.

use bevy::prelude::*;

use crate::components::NetworkId;

/// Authority → clients
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    /// Owner-only: overlapped weapon изменился
    OverlapChanged {
        character: NetworkId,
        weapon: Option<NetworkId>,
    },
    /// Всем peers: equipped weapon / aiming изменились
    CombatChanged {
        character: NetworkId,
        equipped: Option<NetworkId>,
        aiming: bool,
    },
    /// Всем кроме owner: movement/aim state для simulated proxy
    MovementSnapshot(MovementSnapshot),
}

/// Movement state одного персонажа на момент отправки
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSnapshot {
    pub character: NetworkId,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub is_falling: bool,
    pub is_crouched: bool,
    pub facing_yaw: f32,
    pub aim_yaw: f32,
    /// Pitch квантован в байт (256 шагов) - на приёме получается [0, 360)
    pub aim_pitch: u8,
}

/// Client → authority (reliable, без payload кроме caller identity)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMessage {
    EquipRequest { character: NetworkId },
    SetAiming { character: NetworkId, aiming: bool },
}
