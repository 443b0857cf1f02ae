//! Replication core: роли, overlap reference, equip/aim requests, sync
//!
//! Модель: один authority (server) держит ground truth; clients - read-replicas,
//! мутируют только через requests. Participants - отдельные App, связанные
//! in-process link'ом (`ServerLink` / `ClientLink`).
//!
//! Сторона определяется наличием resource:
//! - `ServerLink` → receive requests, send overlap/combat/movement
//! - `ClientLink` → receive replicated state, send requests
//!
//! Listen-server host без link'ов работает как standalone authority.

use bevy::prelude::*;

pub mod client;
pub mod entity_map;
pub mod equip;
pub mod events;
pub mod link;
pub mod messages;
pub mod overlap;
pub mod server;

pub use client::*;
pub use entity_map::*;
pub use equip::*;
pub use events::*;
pub use link::*;
pub use messages::*;
pub use overlap::*;
pub use server::*;

use crate::{GameplaySet, NetSet};

pub struct ReplicationPlugin;

impl Plugin for ReplicationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Events
            .add_event::<WeaponProximity>()
            .add_event::<EquipIntent>()
            .add_event::<AimToggleIntent>()
            .add_event::<PickupWidgetToggled>()
            // Resources
            .init_resource::<NetworkEntityMap>()
            .init_resource::<NetUpdateClock>()
            .add_systems(
                FixedUpdate,
                (
                    (sync_network_entity_map, receive_server_messages, receive_client_messages)
                        .chain()
                        .in_set(NetSet::Receive),
                    (process_weapon_proximity, process_equip_intents, process_aim_toggle_intents)
                        .chain()
                        .in_set(GameplaySet::Intents),
                    (send_overlap_changes, send_combat_changes, send_movement_snapshots).in_set(NetSet::Send),
                ),
            );
    }
}
