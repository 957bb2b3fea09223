use game_core::state::{FighterStats, Level, Rgb};
use game_core::{ActorTemplate, AiKind, PLAYER_TEMPLATE_ID};

/// Player carries 26 items and levels every `200 + level * 150` experience.
pub fn actors() -> Vec<(String, ActorTemplate)> {
    vec![
        (
            PLAYER_TEMPLATE_ID.to_owned(),
            ActorTemplate {
                name: "Player".into(),
                glyph: '@',
                color: Rgb::WHITE,
                stats: FighterStats::new(30, 2, 1),
                ai: AiKind::PlayerControlled,
                inventory_capacity: 26,
                level_up_base: 200,
                level_up_factor: Level::DEFAULT_LEVEL_UP_FACTOR,
                xp_given: 0,
            },
        ),
        monster("orc", "Orc", 'o', Rgb(81, 130, 98), FighterStats::new(10, 3, 0), 10),
        monster("troll", "Troll", 'T', Rgb(0, 127, 0), FighterStats::new(16, 4, 1), 25),
        monster("goblin", "Goblin", 'G', Rgb(67, 39, 24), FighterStats::new(8, 6, 1), 30),
    ]
}

fn monster(
    id: &str,
    name: &str,
    glyph: char,
    color: Rgb,
    stats: FighterStats,
    xp_given: u32,
) -> (String, ActorTemplate) {
    (
        id.to_owned(),
        ActorTemplate {
            name: name.into(),
            glyph,
            color,
            stats,
            ai: AiKind::Hostile,
            inventory_capacity: 0,
            level_up_base: 0,
            level_up_factor: Level::DEFAULT_LEVEL_UP_FACTOR,
            xp_given,
        },
    )
}
