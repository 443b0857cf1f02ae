//! In-process reliable ordered link (server ↔ clients)
//!
//! Каждый участник - отдельный App; link соединяет их crossbeam каналами.
//! Гарантии: порядок сохраняется, доставка пока жив канал. Ack и retry нет:
//! если peer отвалился, сообщение теряется на уровне канала.

use std::collections::BTreeMap;

use bevy::prelude::*;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::components::PeerId;
use crate::error::{NetError, NetResult};
use crate::replication::{ClientMessage, ServerMessage};

/// Server-side endpoint: sender на каждого peer + общий inbox запросов
#[derive(Resource)]
pub struct ServerLink {
    // BTreeMap: детерминированный порядок broadcast
    peers: BTreeMap<PeerId, Sender<ServerMessage>>,
    inbox_sender: Sender<(PeerId, ClientMessage)>,
    inbox: Receiver<(PeerId, ClientMessage)>,
}

impl Default for ServerLink {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerLink {
    pub fn new() -> Self {
        let (inbox_sender, inbox) = unbounded();
        Self {
            peers: BTreeMap::new(),
            inbox_sender,
            inbox,
        }
    }

    /// Подключает peer и возвращает его endpoint (кладётся в client App)
    pub fn connect(&mut self, peer: PeerId) -> ClientLink {
        let (sender, receiver) = unbounded();
        self.peers.insert(peer, sender);

        ClientLink {
            peer,
            outbox: self.inbox_sender.clone(),
            inbox: receiver,
        }
    }

    pub fn disconnect(&mut self, peer: PeerId) {
        self.peers.remove(&peer);
    }

    pub fn is_connected(&self, peer: PeerId) -> bool {
        self.peers.contains_key(&peer)
    }

    pub fn peers(&self) -> impl Iterator<Item = PeerId> + '_ {
        self.peers.keys().copied()
    }

    pub fn send_to(&self, peer: PeerId, message: ServerMessage) -> NetResult<()> {
        let sender = self.peers.get(&peer).ok_or(NetError::PeerDisconnected(peer))?;
        sender
            .send(message)
            .map_err(|_| NetError::PeerDisconnected(peer))
    }

    /// Все накопившиеся запросы (non-blocking)
    pub fn drain(&self) -> Vec<(PeerId, ClientMessage)> {
        self.inbox.try_iter().collect()
    }
}

/// Client-side endpoint
#[derive(Resource)]
pub struct ClientLink {
    peer: PeerId,
    outbox: Sender<(PeerId, ClientMessage)>,
    inbox: Receiver<ServerMessage>,
}

impl ClientLink {
    pub fn peer(&self) -> PeerId {
        self.peer
    }

    /// Fire-and-forget запрос к authority
    pub fn send(&self, message: ClientMessage) -> NetResult<()> {
        self.outbox
            .send((self.peer, message))
            .map_err(|_| NetError::LinkClosed)
    }

    pub fn drain(&self) -> Vec<ServerMessage> {
        self.inbox.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::NetworkId;

    #[test]
    fn test_messages_arrive_in_order() {
        let mut server = ServerLink::new();
        let client = server.connect(PeerId(1));

        for id in 0..3 {
            client
                .send(ClientMessage::EquipRequest { character: NetworkId(id) })
                .unwrap();
        }

        let received: Vec<_> = server.drain();
        assert_eq!(received.len(), 3);
        assert_eq!(received[0], (PeerId(1), ClientMessage::EquipRequest { character: NetworkId(0) }));
        assert_eq!(received[2], (PeerId(1), ClientMessage::EquipRequest { character: NetworkId(2) }));
        assert!(server.drain().is_empty());
    }

    #[test]
    fn test_send_to_dropped_peer_fails() {
        let mut server = ServerLink::new();
        let client = server.connect(PeerId(7));
        drop(client);

        let message = ServerMessage::OverlapChanged {
            character: NetworkId(1),
            weapon: None,
        };
        assert_eq!(server.send_to(PeerId(7), message.clone()), Err(NetError::PeerDisconnected(PeerId(7))));
        assert_eq!(server.send_to(PeerId(8), message), Err(NetError::PeerDisconnected(PeerId(8))));
    }

    #[test]
    fn test_client_send_after_server_dropped() {
        let mut server = ServerLink::new();
        let client = server.connect(PeerId(1));
        drop(server);

        let result = client.send(ClientMessage::EquipRequest { character: NetworkId(1) });
        assert_eq!(result, Err(NetError::LinkClosed));
    }
}
