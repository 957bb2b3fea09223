use game_core::{FloorTable, ScalingTable, SpawnEntry, SpawnTable};

use crate::ContentTables;

/// Spawn weights, per-room caps and monster scaling by floor.
///
/// Weights in later tiers replace earlier weights for the same template.
pub fn tables() -> ContentTables {
    let items = SpawnTable::new()
        .with_tier(0, vec![SpawnEntry::new("health_potion", 40)])
        .with_tier(
            2,
            vec![
                SpawnEntry::new("confusion_scroll", 15),
                SpawnEntry::new("dull_dagger", 3),
                SpawnEntry::new("leather_armor", 5),
            ],
        )
        .with_tier(
            3,
            vec![SpawnEntry::new("dagger", 3), SpawnEntry::new("sharp_dagger", 2)],
        )
        .with_tier(
            4,
            vec![
                SpawnEntry::new("lightning_scroll", 8),
                SpawnEntry::new("big_health_potion", 10),
                SpawnEntry::new("dull_sword", 2),
            ],
        )
        .with_tier(
            6,
            vec![SpawnEntry::new("fireball_scroll", 2), SpawnEntry::new("sword", 2)],
        )
        .with_tier(
            8,
            vec![SpawnEntry::new("sharp_sword", 1), SpawnEntry::new("chain_mail", 3)],
        )
        .with_tier(10, vec![SpawnEntry::new("iron_armor", 2)])
        .with_tier(12, vec![SpawnEntry::new("diamond_armor", 1)]);

    let monsters = SpawnTable::new()
        .with_tier(0, vec![SpawnEntry::new("orc", 80)])
        .with_tier(
            5,
            vec![SpawnEntry::new("troll", 30), SpawnEntry::new("goblin", 2)],
        )
        .with_tier(
            8,
            vec![SpawnEntry::new("troll", 60), SpawnEntry::new("goblin", 4)],
        );

    ContentTables {
        monster_spawns: monsters,
        item_spawns: items,
        max_monsters_per_room: FloorTable::new(vec![
            (1, 2),
            (4, 3),
            (6, 5),
            (8, 6),
            (10, 7),
            (15, 8),
            (30, 15),
        ]),
        max_items_per_room: FloorTable::new(vec![
            (1, 1),
            (4, 2),
            (8, 1),
            (9, 2),
            (11, 3),
            (12, 1),
            (14, 3),
        ]),
        monster_scaling: ScalingTable::new(vec![
            (50, 6.0),
            (40, 5.0),
            (30, 4.0),
            (20, 3.0),
            (15, 2.0),
            (12, 1.75),
            (8, 1.5),
            (5, 1.0),
            (3, 0.5),
            (1, 0.25),
        ]),
    }
}
