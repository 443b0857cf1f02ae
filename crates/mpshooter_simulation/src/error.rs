//! Ошибки сетевого слоя
//!
//! Ни одна из них не фатальна: системы логируют и продолжают тик.

use bevy::prelude::Entity;
use thiserror::Error;

use crate::components::{NetworkId, PeerId};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetError {
    /// Мутация replicated state вызвана не на authority
    #[error("entity {0:?} is not authoritative for replicated state")]
    NotAuthority(Entity),

    /// NetworkId не зарегистрирован (или entity уже despawned)
    #[error("network id {0:?} does not resolve to a live entity")]
    UnknownNetworkId(NetworkId),

    /// У entity нет NetworkId - адресовать её по сети нельзя
    #[error("entity {0:?} has no network id")]
    NotReplicated(Entity),

    /// Peer отключился - сообщение потеряно на уровне канала
    #[error("peer {0:?} is disconnected")]
    PeerDisconnected(PeerId),

    /// Канал client → server закрыт
    #[error("server link closed")]
    LinkClosed,
}

pub type NetResult<T> = Result<T, NetError>;
