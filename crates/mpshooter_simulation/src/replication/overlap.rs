//! Overlapping weapon: write-gated mutator + client-side change handler
//!
//! Pickup widget видна только тому, кто управляет персонажем:
//! - authority host (listen server) - через мутатор
//! - owner client - через `on_overlap_replicated`
//!
//! Остальные участники overlap вообще не получают (owner-only replication).

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::components::{LocallyControlled, NetRole, OverlappingWeapon, Weapon};
use crate::error::{NetError, NetResult};
use crate::replication::{PickupWidgetToggled, WeaponProximity};

/// Доступ к pickup widget weapon entities
///
/// Despawned weapon → toggle молча пропускается.
#[derive(SystemParam)]
pub struct PickupWidgets<'w, 's> {
    weapons: Query<'w, 's, &'static mut Weapon>,
    toggled: EventWriter<'w, PickupWidgetToggled>,
}

impl PickupWidgets<'_, '_> {
    pub fn show(&mut self, weapon: Entity, visible: bool) {
        let Ok(mut state) = self.weapons.get_mut(weapon) else {
            return;
        };

        state.pickup_widget_visible = visible;
        self.toggled.write(PickupWidgetToggled { weapon, visible });
    }
}

/// Мутатор overlap reference (только authority)
///
/// Порядок: скрыть widget прошлого weapon → записать → показать новый
/// (только если персонаж управляется локально). Запись через `set_if_neq`:
/// повтор того же значения не триггерит репликацию.
pub fn set_overlapping_weapon(
    character: Entity,
    role: NetRole,
    locally_controlled: bool,
    overlap: &mut Mut<OverlappingWeapon>,
    weapon: Option<Entity>,
    widgets: &mut PickupWidgets,
) -> NetResult<()> {
    if !role.is_authority() {
        return Err(NetError::NotAuthority(character));
    }

    if let Some(previous) = overlap.0 {
        widgets.show(previous, false);
    }

    overlap.set_if_neq(OverlappingWeapon(weapon));

    if locally_controlled {
        if let Some(weapon) = weapon {
            widgets.show(weapon, true);
        }
    }

    Ok(())
}

/// Client-side обработчик репликации overlap (owner client)
///
/// Вызывается с прошлым и новым значением: скрыть прошлый, показать новый.
/// Authority этот handler не вызывает - у него виджеты ведёт мутатор.
pub fn on_overlap_replicated(last: Option<Entity>, new: Option<Entity>, widgets: &mut PickupWidgets) {
    if let Some(last) = last {
        widgets.show(last, false);
    }
    if let Some(new) = new {
        widgets.show(new, true);
    }
}

/// System: proximity events → overlap mutator
///
/// Не-authority участники игнорируют события (коллизия считается только на server).
pub fn process_weapon_proximity(
    mut events: EventReader<WeaponProximity>,
    mut characters: Query<(&NetRole, Has<LocallyControlled>, &mut OverlappingWeapon)>,
    mut widgets: PickupWidgets,
) {
    for event in events.read() {
        let Ok((role, locally_controlled, mut overlap)) = characters.get_mut(event.character) else {
            continue;
        };

        if !role.is_authority() {
            continue;
        }

        // End overlap очищает reference, даже если это был другой weapon
        let weapon = event.overlapping.then_some(event.weapon);

        if let Err(err) = set_overlapping_weapon(
            event.character,
            *role,
            locally_controlled,
            &mut overlap,
            weapon,
            &mut widgets,
        ) {
            crate::log_warning(&format!("Overlap update rejected: {}", err));
        }
    }
}
