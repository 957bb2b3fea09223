//! Procedural floor generation.

use rand::Rng;
use tracing::{debug, info};

use super::error::GenerationError;
use super::room::{RectangularRoom, tunnel_between};
use super::spawn::ScaledTemplates;
use crate::config::GenerationParams;
use crate::env::{ActorTemplate, GameEnv, GameRng, ItemTemplate};
use crate::map::{GameMap, TileKind};
use crate::state::{Entity, EntityIdAllocator, FighterStats, Position};

/// Result of carving and populating one floor.
#[derive(Clone, Debug)]
pub struct GeneratedFloor {
    pub map: GameMap,
    /// Rooms in placement order. Only meaningful during generation.
    pub rooms: Vec<RectangularRoom>,
    pub downstairs: Option<Position>,
}

/// Builds a floor from generation parameters and content tables.
///
/// Exactly `max_rooms` placements are attempted. A candidate that overlaps an
/// already placed room, or that does not fit inside the margins, is discarded
/// without retry, so fewer rooms than `max_rooms` may exist and `max_rooms = 0`
/// yields a solid-wall floor without stairs.
pub struct DungeonGenerator<'a> {
    env: GameEnv<'a>,
    params: &'a GenerationParams,
    floor: u32,
}

impl<'a> DungeonGenerator<'a> {
    pub fn new(env: GameEnv<'a>, params: &'a GenerationParams, floor: u32) -> Self {
        Self { env, params, floor }
    }

    /// Carves the floor and places `player` at the center of the first room.
    ///
    /// If no room could be placed the player keeps its position clamped into
    /// the map so the entity set stays in bounds.
    pub fn generate(
        &self,
        rng: &mut GameRng,
        ids: &mut EntityIdAllocator,
        mut player: Entity,
    ) -> Result<GeneratedFloor, GenerationError> {
        let params = self.params;
        params.validate()?;

        let tables = self.env.tables()?;
        let mut map = GameMap::new(params.map_width, params.map_height);
        let mut rooms: Vec<RectangularRoom> = Vec::new();
        let mut scaled = ScaledTemplates::for_floor(tables.monster_scaling(), self.floor);

        for attempt in 0..params.max_rooms {
            let room_width = rng.gen_range(params.room_min_size..=params.room_max_size) as i32;
            let room_height = rng.gen_range(params.room_min_size..=params.room_max_size) as i32;

            let Some(x) = random_origin(rng, params.map_width, room_width, params.viewport_width)
            else {
                debug!(attempt, room_width, "room does not fit horizontally");
                continue;
            };
            let Some(y) = random_origin(rng, params.map_height, room_height, params.viewport_height)
            else {
                debug!(attempt, room_height, "room does not fit vertically");
                continue;
            };

            let room = RectangularRoom::new(x, y, room_width, room_height);
            if rooms.iter().any(|other| room.intersects(other)) {
                debug!(attempt, ?room, "room overlaps, attempt discarded");
                continue;
            }

            for position in room.inner() {
                map.set_tile(position, TileKind::Floor);
            }

            match rooms.last() {
                None => {
                    player.position = room.center();
                    map.add_entity(player.clone());
                }
                Some(previous) => {
                    let horizontal_first = rng.gen_bool(0.5);
                    for position in tunnel_between(previous.center(), room.center(), horizontal_first)
                    {
                        map.set_tile(position, TileKind::Floor);
                    }
                }
            }

            self.populate(&room, &mut map, rng, ids, &mut scaled)?;
            map.place_downstairs(room.center());
            rooms.push(room);
        }

        if rooms.is_empty() {
            player.position = Position::new(
                player.position.x.clamp(0, params.map_width as i32 - 1),
                player.position.y.clamp(0, params.map_height as i32 - 1),
            );
            map.add_entity(player);
        }

        info!(
            floor = self.floor,
            width = params.map_width,
            height = params.map_height,
            rooms = rooms.len(),
            entities = map.entities().len(),
            scaled_templates = scaled.len(),
            "generated floor"
        );

        let downstairs = map.downstairs();
        Ok(GeneratedFloor {
            map,
            rooms,
            downstairs,
        })
    }

    /// Draws monsters and items for one room and drops any whose random tile
    /// is already taken.
    fn populate(
        &self,
        room: &RectangularRoom,
        map: &mut GameMap,
        rng: &mut GameRng,
        ids: &mut EntityIdAllocator,
        scaled: &mut ScaledTemplates,
    ) -> Result<(), GenerationError> {
        let tables = self.env.tables()?;
        let floor = self.floor;

        let monster_count = rng.gen_range(0..=tables.max_monsters_per_room().value_at(floor));
        let item_count = rng.gen_range(0..=tables.max_items_per_room().value_at(floor));
        let monsters = tables
            .monster_spawns()
            .select(rng, floor, monster_count as usize);
        let items = tables.item_spawns().select(rng, floor, item_count as usize);

        let mut spawned = Vec::with_capacity(monsters.len() + items.len());
        for def_id in monsters {
            let template = self.env.actor_template(def_id)?;
            let stats = scaled.stats_for(def_id, template);
            spawned.push(SpawnRequest::Monster { template, stats });
        }
        for def_id in items {
            spawned.push(SpawnRequest::Item(self.env.item_template(def_id)?));
        }

        for request in spawned {
            let position = room.random_inner(rng);
            if map.any_entity_at(position) {
                debug!(%position, "spawn tile occupied, entity dropped");
                continue;
            }
            let entity = match request {
                SpawnRequest::Monster { template, stats } => {
                    template.spawn_with_stats(ids.allocate(), position, stats)
                }
                SpawnRequest::Item(template) => template.spawn(ids.allocate(), position),
            };
            map.add_entity(entity);
        }
        Ok(())
    }
}

enum SpawnRequest<'a> {
    Monster {
        template: &'a ActorTemplate,
        stats: FighterStats,
    },
    Item(&'a ItemTemplate),
}

/// Random top-left coordinate keeping a viewport-sized margin, or `None` if
/// the room cannot fit.
fn random_origin(rng: &mut GameRng, map_size: u32, room_size: i32, viewport: u32) -> Option<i32> {
    let low = (viewport / 2) as i32;
    let high = map_size as i32 - room_size - 1 - viewport as i32;
    (low <= high).then(|| rng.gen_range(low..=high))
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::env::PLAYER_TEMPLATE_ID;
    use crate::state::EntityId;
    use crate::testing::{TestContent, small_params};

    fn generate(content: &TestContent, params: &GenerationParams, seed: u64) -> GeneratedFloor {
        generate_on_floor(content, params, seed, 1)
    }

    fn generate_on_floor(
        content: &TestContent,
        params: &GenerationParams,
        seed: u64,
        floor: u32,
    ) -> GeneratedFloor {
        let player = content
            .actor(PLAYER_TEMPLATE_ID)
            .spawn(EntityId::PLAYER, Position::ORIGIN);
        DungeonGenerator::new(content.env(), params, floor)
            .generate(&mut GameRng::new(seed), &mut EntityIdAllocator::new(), player)
            .expect("generation succeeds")
    }

    fn reachable(map: &GameMap, start: Position) -> HashSet<Position> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = current.offset(dx, dy);
                if map.is_walkable(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn rooms_never_overlap() {
        let content = TestContent::new();
        for seed in 0..20 {
            let floor = generate(&content, &small_params(), seed);
            assert!(floor.rooms.len() <= small_params().max_rooms as usize);
            for (i, a) in floor.rooms.iter().enumerate() {
                for b in &floor.rooms[i + 1..] {
                    assert!(!a.intersects(b), "seed {seed}: {a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn every_room_is_reachable_from_the_player() {
        let content = TestContent::new();
        for seed in 0..20 {
            let floor = generate(&content, &small_params(), seed);
            let start = floor.map.entity(EntityId::PLAYER).unwrap().position;
            let area = reachable(&floor.map, start);
            for room in &floor.rooms {
                assert!(area.contains(&room.center()), "seed {seed}: {room:?} cut off");
            }
        }
    }

    #[test]
    fn exactly_one_stairs_tile_at_last_room_center() {
        let content = TestContent::new();
        for seed in 0..20 {
            let floor = generate(&content, &small_params(), seed);
            let stairs = floor
                .map
                .tiles()
                .iter()
                .filter(|tile| **tile == TileKind::DownStairs)
                .count();
            assert_eq!(stairs, 1, "seed {seed}");
            assert_eq!(floor.downstairs, floor.rooms.last().map(|room| room.center()));
        }
    }

    #[test]
    fn player_starts_in_first_room_and_entities_stay_in_rooms() {
        let content = TestContent::new();
        let floor = generate(&content, &small_params(), 11);
        let first = floor.rooms[0];
        assert_eq!(
            floor.map.entity(EntityId::PLAYER).unwrap().position,
            first.center()
        );

        let mut occupied = HashSet::new();
        for entity in floor.map.entities() {
            assert!(floor.map.in_bounds(entity.position));
            assert!(floor.map.is_walkable(entity.position));
            assert!(
                occupied.insert(entity.position),
                "two entities spawned on {}",
                entity.position
            );
        }
    }

    #[test]
    fn zero_rooms_yields_solid_walls_without_stairs() {
        let content = TestContent::new();
        let params = GenerationParams {
            max_rooms: 0,
            ..small_params()
        };
        let floor = generate(&content, &params, 5);
        assert!(floor.rooms.is_empty());
        assert!(floor.downstairs.is_none());
        assert!(floor.map.tiles().iter().all(|tile| *tile == TileKind::Wall));
        assert_eq!(floor.map.entities().len(), 1);
    }

    #[test]
    fn same_seed_same_floor() {
        let content = TestContent::new();
        let a = generate(&content, &small_params(), 42);
        let b = generate(&content, &small_params(), 42);
        assert_eq!(a.map, b.map);
        assert_eq!(a.rooms, b.rooms);
    }

    #[test]
    fn inverted_room_bounds_are_rejected() {
        let content = TestContent::new();
        let params = GenerationParams {
            room_min_size: 9,
            room_max_size: 4,
            ..small_params()
        };
        let player = content
            .actor(PLAYER_TEMPLATE_ID)
            .spawn(EntityId::PLAYER, Position::ORIGIN);
        let result = DungeonGenerator::new(content.env(), &params, 1).generate(
            &mut GameRng::new(1),
            &mut EntityIdAllocator::new(),
            player,
        );
        assert_eq!(
            result.unwrap_err(),
            GenerationError::InvalidRoomBounds { min: 9, max: 4 }
        );
    }

    #[test]
    fn rooms_without_interior_are_rejected() {
        let content = TestContent::new();
        for size in [0, 1] {
            let params = GenerationParams {
                room_min_size: size,
                room_max_size: size,
                ..small_params()
            };
            let player = content
                .actor(PLAYER_TEMPLATE_ID)
                .spawn(EntityId::PLAYER, Position::ORIGIN);
            let result = DungeonGenerator::new(content.env(), &params, 1).generate(
                &mut GameRng::new(3),
                &mut EntityIdAllocator::new(),
                player,
            );
            assert_eq!(
                result.unwrap_err(),
                GenerationError::RoomTooSmall { min: size }
            );
        }
    }

    #[test]
    fn smallest_rooms_still_hold_their_spawns() {
        let content = TestContent::new();
        let params = GenerationParams {
            room_min_size: GenerationParams::MIN_ROOM_SIZE,
            room_max_size: GenerationParams::MIN_ROOM_SIZE,
            ..small_params()
        };
        for seed in 0..20 {
            let floor = generate(&content, &params, seed);
            for entity in floor.map.entities() {
                assert!(floor.map.is_walkable(entity.position), "seed {seed}");
            }
        }
    }

    #[test]
    fn monsters_on_deep_floors_share_scaled_stats() {
        let content = TestContent::new();
        let authored = content.actor("orc").stats;
        let expected = authored.scaled(1.5);
        let mut orcs = 0;
        for seed in 0..20 {
            let floor = generate_on_floor(&content, &small_params(), seed, 3);
            for entity in floor.map.entities().iter().filter(|e| e.name == "Orc") {
                let fighter = &entity.as_actor().expect("orc is an actor").fighter;
                assert_eq!(fighter.max_hp(), expected.max_hp, "seed {seed}");
                assert_eq!(fighter.hp(), expected.max_hp, "seed {seed}");
                assert_eq!(fighter.base_power(), expected.power, "seed {seed}");
                assert_eq!(fighter.base_defense(), expected.defense, "seed {seed}");
                assert_eq!(fighter.defaults(), authored, "seed {seed}");
                orcs += 1;
            }
        }
        assert!(orcs > 0, "no orc spawned on floor 3");
        assert_eq!(expected, FighterStats::new(15, 5, 0));
    }
}
