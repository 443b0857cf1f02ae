//! NetworkId ↔ Entity registry (per App)

use std::collections::HashMap;

use bevy::prelude::*;

use crate::components::NetworkId;
use crate::error::{NetError, NetResult};

/// Registry поддерживается системой `sync_network_entity_map` (Added/Removed NetworkId)
#[derive(Resource, Debug, Default)]
pub struct NetworkEntityMap {
    entities: HashMap<NetworkId, Entity>,
}

impl NetworkEntityMap {
    pub fn insert(&mut self, id: NetworkId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    pub fn get(&self, id: NetworkId) -> Option<Entity> {
        self.entities.get(&id).copied()
    }

    pub fn resolve(&self, id: NetworkId) -> NetResult<Entity> {
        self.get(id).ok_or(NetError::UnknownNetworkId(id))
    }

    /// Удаляет запись по entity (NetworkId компонента уже нет на момент RemovedComponents)
    pub fn remove_entity(&mut self, entity: Entity) {
        self.entities.retain(|_, mapped| *mapped != entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// System: держит registry в синхроне со spawn/despawn
pub fn sync_network_entity_map(
    mut map: ResMut<NetworkEntityMap>,
    added: Query<(Entity, &NetworkId), Added<NetworkId>>,
    mut removed: RemovedComponents<NetworkId>,
) {
    for entity in removed.read() {
        map.remove_entity(entity);
    }

    for (entity, id) in added.iter() {
        if let Some(previous) = map.get(*id) {
            if previous != entity {
                crate::log_warning(&format!(
                    "NetworkId {:?} reassigned: {:?} → {:?}",
                    id, previous, entity
                ));
            }
        }
        map.insert(*id, entity);
    }
}
