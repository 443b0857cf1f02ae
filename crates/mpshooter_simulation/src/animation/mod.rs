//! Animation state bridge
//!
//! Раз в тик (после aim offset controller) превращает состояние персонажа
//! в плоский набор параметров для внешнего animation driver:
//! AO_Yaw/AO_Pitch, Speed, bIsInAir, bIsAccelerating, bIsCrouched,
//! bWeaponEquipped, bAiming, YawOffset, Lean, CorrectiveRate, LeftHandTransform, TurnState.
//!
//! Blending/montages - не здесь, core только поставляет числа.

use bevy::prelude::*;

pub mod bridge;
pub mod state;
pub mod systems;

pub use bridge::*;
pub use state::*;
pub use systems::*;

use crate::GameplaySet;

pub struct AnimationBridgePlugin;

impl Plugin for AnimationBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, update_anim_state.in_set(GameplaySet::Animation));
    }
}

#[cfg(test)]
mod bridge_tests;
