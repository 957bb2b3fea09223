//! Combat resolution system.
//!
//! - `damage`: damage formula and HP reduction
//! - `death`: corpse transition and kill credit
//! - `result`: complete melee resolution with log messages
//!
//! Damage is `max(0, power - defense)` using effective stats (base plus
//! equipment). Reaching 0 HP while the actor still has an AI turns it into a
//! corpse; only the player's level receives experience for kills.

pub mod damage;
pub mod death;
pub mod result;

pub use damage::{DamageResult, apply_damage, calculate_damage};
pub use death::{die, grant_xp};
pub use result::{AttackOutcome, resolve_attack};
