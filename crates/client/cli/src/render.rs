//! Plain-text rendering of a settled game state.
//!
//! Every function here reads the state and returns lines; nothing mutates it.

use game_core::{EntityKind, GameState, Position, TileKind};

use crate::state::InventoryPurpose;

const CURSOR: char = '*';

/// Map window centred on `center`, clamped to the map edges.
///
/// Unexplored tiles are blank. Entities are drawn only on visible tiles, the
/// topmost render layer winning.
pub fn map_lines(
    state: &GameState,
    center: Position,
    width: u32,
    height: u32,
    cursor: Option<Position>,
) -> Vec<String> {
    let map = &state.map;
    let width = width.min(map.width()) as i32;
    let height = height.min(map.height()) as i32;
    let left = (center.x - width / 2).clamp(0, map.width() as i32 - width);
    let top = (center.y - height / 2).clamp(0, map.height() as i32 - height);

    (top..top + height)
        .map(|y| {
            (left..left + width)
                .map(|x| {
                    let position = Position::new(x, y);
                    if cursor == Some(position) {
                        return CURSOR;
                    }
                    if map.is_visible(position)
                        && let Some(entity) = map
                            .entities()
                            .iter()
                            .filter(|entity| entity.position == position)
                            .max_by_key(|entity| entity.render_order)
                    {
                        return entity.glyph;
                    }
                    if !map.is_explored(position) {
                        return ' ';
                    }
                    match map.tile(position) {
                        Some(TileKind::Wall) | None => '#',
                        Some(TileKind::Floor) => '.',
                        Some(TileKind::DownStairs) => '>',
                    }
                })
                .collect()
        })
        .collect()
}

pub fn status_line(state: &GameState) -> String {
    let player = state.player_actor();
    let fighter = &player.fighter;
    let level = &player.level;
    format!(
        "HP: {}/{}  ATK: {}  DEF: {}  LVL: {}  XP: {}/{}  Floor: {}",
        fighter.hp(),
        fighter.max_hp(),
        player.power(),
        player.defense(),
        level.current_level(),
        level.current_xp(),
        level.experience_to_next_level(),
        state.current_floor(),
    )
}

pub fn message_lines(state: &GameState, count: usize) -> Vec<String> {
    let messages = state.messages.messages();
    let start = messages.len().saturating_sub(count);
    messages[start..].iter().map(|m| m.full_text()).collect()
}

/// Lettered inventory listing; equipped items are marked.
pub fn inventory_lines(state: &GameState, purpose: InventoryPurpose) -> Vec<String> {
    let player = state.player_actor();
    let items = player.inventory.items();
    let mut lines = vec![purpose.title().to_owned()];
    if items.is_empty() {
        lines.push("(Empty)".to_owned());
    }
    for (index, item) in items.iter().enumerate() {
        let letter = (b'a' + index as u8) as char;
        let marker = if player.equipment.is_equipped(item.id) {
            " (E)"
        } else {
            ""
        };
        lines.push(format!("({letter}) {}{marker}", item.name));
    }
    lines
}

/// Names of the entities at a visible tile, for the targeting cursor.
pub fn names_at(state: &GameState, position: Position) -> String {
    if !state.map.is_visible(position) {
        return String::new();
    }
    state
        .map
        .entities()
        .iter()
        .filter(|entity| entity.position == position)
        .map(|entity| match &entity.kind {
            EntityKind::Actor(actor) if actor.is_alive() => {
                format!("{} ({} hp)", entity.name, actor.fighter.hp())
            }
            _ => entity.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, GenerationParams, new_game};
    use runtime::OracleManager;

    fn state() -> GameState {
        let params = GenerationParams {
            map_width: 40,
            map_height: 30,
            max_rooms: 6,
            room_min_size: 4,
            room_max_size: 7,
            viewport_width: 0,
            viewport_height: 0,
        };
        let oracles = OracleManager::standard();
        new_game(oracles.as_game_env(GameConfig::default()), params, 17).unwrap()
    }

    #[test]
    fn map_window_shows_the_player() {
        let state = state();
        let lines = map_lines(&state, state.player_position(), 20, 10, None);

        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| line.chars().count() == 20));
        assert!(lines.iter().any(|line| line.contains('@')));
    }

    #[test]
    fn cursor_is_drawn_over_the_player() {
        let state = state();
        let player = state.player_position();
        let lines = map_lines(&state, player, 100, 100, Some(player));

        assert_eq!(lines.len(), 30);
        let row = &lines[player.y as usize];
        assert_eq!(row.chars().nth(player.x as usize), Some('*'));
        assert!(!lines.iter().any(|line| line.contains('@')));
    }

    #[test]
    fn fresh_game_has_an_empty_inventory() {
        let lines = inventory_lines(&state(), InventoryPurpose::Use);
        assert_eq!(lines, vec!["Select an item to use", "(Empty)"]);
    }

    #[test]
    fn status_reports_floor_and_health() {
        let line = status_line(&state());
        assert!(line.starts_with("HP: 30/30"));
        assert!(line.ends_with("Floor: 1"));
    }
}
