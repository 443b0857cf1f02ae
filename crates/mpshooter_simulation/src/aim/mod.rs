//! Aim offset module (AO_Yaw / AO_Pitch + turn-in-place)
//!
//! Каждый участник считает aim offset сам для своей копии персонажа:
//! authority - из ground truth movement, proxy - из реплицированного snapshot.
//!
//! Порядок внутри `GameplaySet::AimOffset`:
//! 1. update_aim_offset - controller + FSM
//! 2. publish_aim_offset_snapshot - snapshot для animation bridge

use bevy::prelude::*;

pub mod components;
pub mod controller;
pub mod systems;
pub mod turn_in_place;

pub use components::*;
pub use controller::corrected_pitch;
pub use systems::*;

use crate::GameplaySet;

pub struct AimPlugin;

impl Plugin for AimPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (update_aim_offset, publish_aim_offset_snapshot)
                .chain()
                .in_set(GameplaySet::AimOffset),
        );
    }
}
