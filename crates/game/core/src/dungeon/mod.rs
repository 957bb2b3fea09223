//! Floor generation and floor-to-floor progression.
//!
//! - `spawn`: weighted spawn tables, per-floor caps and monster scaling
//! - `room`: rectangular rooms and L-shaped corridors
//! - `generator`: carves and populates one floor
pub mod error;
pub mod generator;
pub mod room;
pub mod spawn;

pub use error::GenerationError;
pub use generator::{DungeonGenerator, GeneratedFloor};
pub use room::{RectangularRoom, tunnel_between};
pub use spawn::{FloorTable, ScaledTemplates, ScalingTable, SpawnEntry, SpawnTable};

use tracing::info;

use crate::env::GameEnv;
use crate::map::GameMap;
use crate::state::{DungeonState, Entity, EntityIdAllocator, GameState};

/// Generates the floor after `dungeon.current_floor` and carries `player` into it.
///
/// The floor uses the stored map size, which then grows by the configured
/// increment for the following floor. Nothing is committed if generation fails.
pub fn generate_next_floor(
    env: GameEnv<'_>,
    dungeon: &mut DungeonState,
    ids: &mut EntityIdAllocator,
    player: Entity,
) -> Result<GameMap, GenerationError> {
    let floor = dungeon.current_floor + 1;
    let mut rng = dungeon.rng.clone();
    let mut next_ids = ids.clone();

    let generated =
        DungeonGenerator::new(env, &dungeon.params, floor).generate(&mut rng, &mut next_ids, player)?;

    dungeon.current_floor = floor;
    dungeon.rng = rng;
    dungeon.params.grow(env.config().floor_size_increment);
    *ids = next_ids;
    Ok(generated.map)
}

/// Replaces the active map with a freshly generated deeper floor.
///
/// The player entity moves with its inventory, equipment and level intact;
/// the previous floor and everything on it is discarded.
pub fn descend(state: &mut GameState, env: GameEnv<'_>) -> Result<(), GenerationError> {
    let player = state.player().clone();
    let map = generate_next_floor(env, &mut state.dungeon, &mut state.ids, player)?;
    state.map = map;
    info!(floor = state.dungeon.current_floor, "descended to new floor");
    Ok(())
}
