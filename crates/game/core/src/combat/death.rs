use tracing::info;

use crate::state::{EntityId, GameState, MessageKind, RenderOrder, Rgb};

/// Glyph drawn for corpses.
pub const CORPSE_GLYPH: char = '%';

/// Turns a living actor into a corpse and credits the kill.
///
/// The corpse stays on the map: it stops blocking, loses its AI and is drawn
/// below items. If the dead actor is not the player, the player gains the
/// actor's `xp_given`.
pub fn die(state: &mut GameState, id: EntityId) {
    let Some(entity) = state.map.entity_mut(id) else {
        return;
    };
    let Some(actor) = entity.as_actor_mut() else {
        return;
    };
    actor.ai = None;
    let xp_given = actor.level.xp_given();

    let name = std::mem::take(&mut entity.name);
    entity.name = format!("remains of {name}");
    entity.glyph = CORPSE_GLYPH;
    entity.color = Rgb::CORPSE;
    entity.blocks_movement = false;
    entity.render_order = RenderOrder::Corpse;

    if id.is_player() {
        info!(floor = state.dungeon.current_floor, "player died");
        state.messages.add("You died!", MessageKind::PlayerDeath);
    } else {
        state
            .messages
            .add(format!("{name} is dead!"), MessageKind::EnemyDeath);
        grant_xp(state, xp_given);
    }
}

/// Adds experience to the player and announces a reached level threshold.
pub fn grant_xp(state: &mut GameState, xp: u32) {
    if xp == 0 {
        return;
    }
    let level = &mut state.player_actor_mut().level;
    let pending = level.add_xp(xp);
    let next_level = level.current_level() + 1;

    state.messages.add(
        format!("You gain {xp} experience points."),
        MessageKind::Info,
    );
    if pending {
        state.messages.add(
            format!("You advance to level {next_level}!"),
            MessageKind::LevelUp,
        );
    }
}
