//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use crate::ai::AiKind;
use crate::config::{GameConfig, GenerationParams};
use crate::dungeon::{FloorTable, ScalingTable, SpawnEntry, SpawnTable};
use crate::env::{
    ActorOracle, ActorTemplate, GameEnv, ItemOracle, ItemTemplate, PLAYER_TEMPLATE_ID,
    TablesOracle,
};
use crate::map::{GameMap, TileKind};
use crate::state::{
    Consumable, DungeonState, Entity, EntityId, EntityIdAllocator, Equippable, FighterStats,
    GameState, Item, Position, Rgb,
};

/// Small in-memory content set: player, orc and troll, a handful of items.
pub struct TestContent {
    actors: BTreeMap<String, ActorTemplate>,
    items: BTreeMap<String, ItemTemplate>,
    monster_spawns: SpawnTable,
    item_spawns: SpawnTable,
    max_monsters: FloorTable,
    max_items: FloorTable,
    scaling: ScalingTable,
}

impl TestContent {
    pub fn new() -> Self {
        let mut actors = BTreeMap::new();
        actors.insert(
            PLAYER_TEMPLATE_ID.to_owned(),
            ActorTemplate {
                name: "Player".into(),
                glyph: '@',
                color: Rgb::WHITE,
                stats: FighterStats::new(30, 2, 1),
                ai: AiKind::PlayerControlled,
                inventory_capacity: 26,
                level_up_base: 200,
                level_up_factor: 150,
                xp_given: 0,
            },
        );
        actors.insert("orc".into(), monster("Orc", 'o', FighterStats::new(10, 3, 0), 35));
        actors.insert(
            "troll".into(),
            monster("Troll", 'T', FighterStats::new(16, 4, 1), 100),
        );

        let mut items = BTreeMap::new();
        let mut item = |id: &str, name: &str, glyph: char, item: Item| {
            items.insert(
                id.to_owned(),
                ItemTemplate {
                    name: name.into(),
                    glyph,
                    color: Rgb::WHITE,
                    item,
                },
            );
        };
        item("health_potion", "Health Potion", '!', consumable(Consumable::Healing { amount: 4 }));
        item(
            "lightning_scroll",
            "Lightning Scroll",
            '~',
            consumable(Consumable::Lightning {
                damage: 20,
                max_range: 5,
            }),
        );
        item(
            "confusion_scroll",
            "Confusion Scroll",
            '~',
            consumable(Consumable::Confusion { turns: 10 }),
        );
        item(
            "fireball_scroll",
            "Fireball Scroll",
            '~',
            consumable(Consumable::Fireball {
                damage: 12,
                radius: 3,
            }),
        );
        item("dagger", "Dagger", '/', equippable(Equippable::weapon(2)));
        item("sword", "Sword", '/', equippable(Equippable::weapon(4)));
        item("leather_armor", "Leather Armor", '[', equippable(Equippable::armor(1)));

        Self {
            actors,
            items,
            monster_spawns: SpawnTable::new()
                .with_tier(0, vec![SpawnEntry::new("orc", 80)])
                .with_tier(3, vec![SpawnEntry::new("troll", 30)]),
            item_spawns: SpawnTable::new().with_tier(
                0,
                vec![
                    SpawnEntry::new("health_potion", 40),
                    SpawnEntry::new("dagger", 5),
                ],
            ),
            max_monsters: FloorTable::new(vec![(1, 2), (4, 3)]),
            max_items: FloorTable::new(vec![(1, 1), (4, 2)]),
            scaling: ScalingTable::new(vec![(3, 1.5), (1, 1.0)]),
        }
    }

    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::from_content(self, GameConfig::default())
    }

    pub fn actor(&self, def_id: &str) -> &ActorTemplate {
        &self.actors[def_id]
    }

    pub fn item(&self, def_id: &str) -> &ItemTemplate {
        &self.items[def_id]
    }
}

fn monster(name: &str, glyph: char, stats: FighterStats, xp_given: u32) -> ActorTemplate {
    ActorTemplate {
        name: name.into(),
        glyph,
        color: Rgb(63, 127, 63),
        stats,
        ai: AiKind::Hostile,
        inventory_capacity: 0,
        level_up_base: 0,
        level_up_factor: 150,
        xp_given,
    }
}

fn consumable(consumable: Consumable) -> Item {
    Item {
        consumable: Some(consumable),
        equippable: None,
    }
}

fn equippable(equippable: Equippable) -> Item {
    Item {
        consumable: None,
        equippable: Some(equippable),
    }
}

impl ActorOracle for TestContent {
    fn template(&self, def_id: &str) -> Option<&ActorTemplate> {
        self.actors.get(def_id)
    }

    fn template_ids(&self) -> Vec<String> {
        self.actors.keys().cloned().collect()
    }
}

impl ItemOracle for TestContent {
    fn template(&self, def_id: &str) -> Option<&ItemTemplate> {
        self.items.get(def_id)
    }

    fn template_ids(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

impl TablesOracle for TestContent {
    fn monster_spawns(&self) -> &SpawnTable {
        &self.monster_spawns
    }

    fn item_spawns(&self) -> &SpawnTable {
        &self.item_spawns
    }

    fn max_monsters_per_room(&self) -> &FloorTable {
        &self.max_monsters
    }

    fn max_items_per_room(&self) -> &FloorTable {
        &self.max_items
    }

    fn monster_scaling(&self) -> &ScalingTable {
        &self.scaling
    }
}

/// Generation parameters for a compact floor without viewport margins.
pub fn small_params() -> GenerationParams {
    GenerationParams {
        map_width: 60,
        map_height: 40,
        max_rooms: 12,
        room_min_size: 4,
        room_max_size: 8,
        viewport_width: 0,
        viewport_height: 0,
    }
}

/// Hand-built arena for rule tests.
///
/// A single open room spanning `(1,1)..=(width-2, height-2)` with the player
/// at `player_at`, fully visible and no other entities.
pub struct Arena {
    pub state: GameState,
}

impl Arena {
    pub fn new(content: &TestContent, width: u32, height: u32, player_at: Position) -> Self {
        let mut map = GameMap::new(width, height);
        for y in 1..height as i32 - 1 {
            for x in 1..width as i32 - 1 {
                map.set_tile(Position::new(x, y), TileKind::Floor);
            }
        }
        map.add_entity(
            content
                .actor(PLAYER_TEMPLATE_ID)
                .spawn(EntityId::PLAYER, player_at),
        );
        map.compute_fov(player_at, GameConfig::DEFAULT_FOV_RADIUS);

        let mut dungeon = DungeonState::new(GameConfig::default(), small_params(), 7);
        dungeon.current_floor = 1;
        let state = GameState::new(map, dungeon, EntityIdAllocator::new());
        Self { state }
    }

    /// Spawns a monster from a template and returns its id.
    pub fn spawn_monster(&mut self, content: &TestContent, def_id: &str, at: Position) -> EntityId {
        let id = self.state.ids.allocate();
        self.state.map.add_entity(content.actor(def_id).spawn(id, at));
        id
    }

    /// Places an item on the floor and returns its id.
    pub fn drop_item(&mut self, content: &TestContent, def_id: &str, at: Position) -> EntityId {
        let id = self.state.ids.allocate();
        self.state.map.add_entity(content.item(def_id).spawn(id, at));
        id
    }

    /// Puts an item straight into the player's inventory.
    pub fn give_item(&mut self, content: &TestContent, def_id: &str) -> EntityId {
        let id = self.state.ids.allocate();
        let position = self.state.player_position();
        let item: Entity = content.item(def_id).spawn(id, position);
        let inventory = &mut self.state.player_actor_mut().inventory;
        assert!(inventory.push(item).is_ok(), "player inventory full");
        id
    }

    pub fn refresh_fov(&mut self) {
        let origin = self.state.player_position();
        self.state
            .map
            .compute_fov(origin, GameConfig::DEFAULT_FOV_RADIUS);
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        self.state.map.entity(id).expect("entity on map")
    }

    pub fn hp(&self, id: EntityId) -> u32 {
        self.entity(id)
            .as_actor()
            .expect("actor")
            .fighter
            .hp()
    }

    pub fn last_message(&self) -> &str {
        self.state
            .messages
            .last()
            .map(|m| m.text.as_str())
            .unwrap_or_default()
    }
}
