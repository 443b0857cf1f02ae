//! ECS Components для персонажа и его коллабораторов
//!
//! Организация по доменам:
//! - character: Character marker (required components всего core)
//! - movement: MovementState, AimRotation (заполняются movement/orientation коллабораторами)
//! - combat: Combat (equipped weapon + aiming), accessors
//! - weapon: Weapon, OverlappingWeapon, CharacterMesh
//! - network: NetRole, LocallyControlled, NetworkId, PeerId, Owner

pub mod character;
pub mod combat;
pub mod movement;
pub mod network;
pub mod weapon;

// Re-exports для удобного импорта
pub use character::*;
pub use combat::*;
pub use movement::*;
pub use network::*;
pub use weapon::*;
