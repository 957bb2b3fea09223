//! Actor template definitions and oracle interface.
//!
//! Templates are pure data (they deserialize from RON content packs) and are
//! turned into map [`Entity`] values by [`ActorTemplate::spawn`]. The
//! `ActorOracle` trait lets the runtime supply templates by id (e.g.
//! `"player"`, `"orc"`).

use crate::ai::AiKind;
use crate::state::{
    Actor, Entity, EntityId, Fighter, FighterStats, Inventory, Level, Position, Rgb,
};

/// Definition id under which the player template is registered.
pub const PLAYER_TEMPLATE_ID: &str = "player";

/// Authored description of an actor kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub stats: FighterStats,
    pub ai: AiKind,
    pub inventory_capacity: usize,

    /// Zero for monsters, which never level up.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_up_base: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_level_up_factor"))]
    pub level_up_factor: u32,
    /// Experience granted to the player when this actor dies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_given: u32,
}

#[cfg(feature = "serde")]
fn default_level_up_factor() -> u32 {
    Level::DEFAULT_LEVEL_UP_FACTOR
}

impl ActorTemplate {
    /// Creates an actor entity at `position` using the authored stats.
    pub fn spawn(&self, id: EntityId, position: Position) -> Entity {
        self.spawn_with_stats(id, position, self.stats)
    }

    /// Creates an actor entity whose current stats are `stats`.
    ///
    /// The fighter still remembers the authored stats as its defaults so later
    /// rescaling starts from them.
    pub fn spawn_with_stats(&self, id: EntityId, position: Position, stats: FighterStats) -> Entity {
        let mut fighter = Fighter::new(self.stats);
        if stats != self.stats {
            fighter.rescale(stats);
        }
        let actor = Actor::new(
            fighter,
            self.ai.clone(),
            Inventory::new(self.inventory_capacity),
            Level::new(self.level_up_base, self.level_up_factor, self.xp_given),
        );
        Entity::actor(id, self.name.clone(), self.glyph, self.color, position, actor)
    }
}

/// Oracle providing actor templates by definition id.
pub trait ActorOracle: Send + Sync {
    fn template(&self, def_id: &str) -> Option<&ActorTemplate>;

    /// Template used for the controllable character.
    fn player_template(&self) -> Option<&ActorTemplate> {
        self.template(PLAYER_TEMPLATE_ID)
    }

    /// Ids of every template this oracle knows about.
    fn template_ids(&self) -> Vec<String>;
}
