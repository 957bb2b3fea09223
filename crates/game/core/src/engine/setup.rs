use tracing::info;

use crate::config::GenerationParams;
use crate::dungeon::{GenerationError, generate_next_floor};
use crate::env::{GameEnv, PLAYER_TEMPLATE_ID};
use crate::state::{
    DungeonState, EntityId, EntityIdAllocator, GameState, MessageKind, Position, TurnPhase,
};

use super::GameEngine;

/// Welcome line logged at the start of every game.
pub const WELCOME_MESSAGE: &str = "Good luck buddy, you will need it";

/// Builds a fresh game on floor 1.
///
/// The player is spawned from the player template, the first floor is
/// generated around it and the initial field of view is computed.
pub fn new_game(
    env: GameEnv<'_>,
    params: GenerationParams,
    seed: u64,
) -> Result<GameState, GenerationError> {
    let player = env
        .actor_template(PLAYER_TEMPLATE_ID)?
        .spawn(EntityId::PLAYER, Position::ORIGIN);

    let mut dungeon = DungeonState::new(*env.config(), params, seed);
    let mut ids = EntityIdAllocator::new();
    let map = generate_next_floor(env, &mut dungeon, &mut ids, player)?;

    let mut state = GameState::new(map, dungeon, ids);
    state.messages.add(WELCOME_MESSAGE, MessageKind::Welcome);

    let mut engine = GameEngine::new(&mut state);
    engine.update_fov(&env);
    state.turn.phase = TurnPhase::AwaitingPlayerInput;

    info!(seed, "new game started");
    Ok(state)
}
