//! The active floor: tile grid, visibility masks and the entity set.
//!
//! A [`GameMap`] is created once per floor by the dungeon generator and
//! replaced wholesale on descent. Grids are stored row-major; all entity
//! positions must stay inside `[0, width) × [0, height)`.
pub mod fov;
pub mod path;
pub mod tile;

pub use tile::{Graphic, SHROUD, TileFlags, TileKind};

use crate::state::{Entity, EntityId, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    entities: Vec<Entity>,
    downstairs: Option<Position>,
}

impl GameMap {
    /// Creates an all-wall map with nothing visible or explored.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; cells],
            visible: vec![false; cells],
            explored: vec![false; cells],
            entities: Vec::new(),
            downstairs: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Row-major index. Panics on out-of-bounds positions.
    #[inline]
    fn index(&self, position: Position) -> usize {
        assert!(
            self.in_bounds(position),
            "position {position} outside {}x{} map",
            self.width,
            self.height
        );
        position.y as usize * self.width as usize + position.x as usize
    }

    // ---- tiles ----

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.in_bounds(position)
            .then(|| self.tiles[self.index(position)])
    }

    pub fn set_tile(&mut self, position: Position, kind: TileKind) {
        let index = self.index(position);
        self.tiles[index] = kind;
    }

    /// Out-of-bounds tiles are never walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_walkable)
    }

    /// Out-of-bounds tiles are never transparent.
    pub fn is_transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_transparent)
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn downstairs(&self) -> Option<Position> {
        self.downstairs
    }

    /// Moves the stairs marker to `position`, turning the previous stairs tile
    /// (if any) back into floor so exactly one stairs tile exists.
    pub fn place_downstairs(&mut self, position: Position) {
        if let Some(previous) = self.downstairs.take() {
            self.set_tile(previous, TileKind::Floor);
        }
        self.set_tile(position, TileKind::DownStairs);
        self.downstairs = Some(position);
    }

    // ---- visibility ----

    pub fn is_visible(&self, position: Position) -> bool {
        self.in_bounds(position) && self.visible[self.index(position)]
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.in_bounds(position) && self.explored[self.index(position)]
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn explored(&self) -> &[bool] {
        &self.explored
    }

    /// Recomputes the visible grid from `origin` and folds it into `explored`.
    ///
    /// `visible` is cleared first; `explored` only ever gains cells.
    pub fn compute_fov(&mut self, origin: Position, radius: u32) {
        self.visible.fill(false);

        let width = self.width as usize;
        let (tiles, visible) = (&self.tiles, &mut self.visible);
        let in_bounds = |p: Position| {
            p.x >= 0 && p.y >= 0 && p.x < self.width as i32 && p.y < self.height as i32
        };
        fov::compute_fov(
            origin,
            radius,
            |p| !in_bounds(p) || !tiles[p.y as usize * width + p.x as usize].is_transparent(),
            |p| {
                if in_bounds(p) {
                    visible[p.y as usize * width + p.x as usize] = true;
                }
            },
        );

        for (explored, visible) in self.explored.iter_mut().zip(&self.visible) {
            *explored |= *visible;
        }
    }

    /// Per-tile descriptor a renderer should draw: light if visible, dark if
    /// explored, otherwise [`SHROUD`].
    pub fn render_descriptor(&self, position: Position) -> Graphic {
        match self.tile(position) {
            Some(kind) if self.is_visible(position) => kind.light(),
            Some(kind) if self.is_explored(position) => kind.dark(),
            _ => SHROUD,
        }
    }

    // ---- entities ----

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Adds an entity to the floor. Panics if its position is out of bounds.
    pub fn add_entity(&mut self, entity: Entity) {
        assert!(
            self.in_bounds(entity.position),
            "entity {} placed outside the map at {}",
            entity.id,
            entity.position
        );
        self.entities.push(entity);
    }

    /// Removes and returns the entity, keeping the order of the rest.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Moves an entity. Panics if `to` is out of bounds.
    pub fn move_entity(&mut self, id: EntityId, to: Position) {
        assert!(self.in_bounds(to), "entity {id} moved outside the map to {to}");
        if let Some(entity) = self.entity_mut(id) {
            entity.position = to;
        }
    }

    pub fn any_entity_at(&self, position: Position) -> bool {
        self.entities.iter().any(|e| e.position == position)
    }

    pub fn blocking_entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.blocks_movement && e.position == position)
    }

    /// Living actor standing at `position`.
    pub fn actor_at(&self, position: Position) -> Option<&Entity> {
        self.actors().find(|e| e.position == position)
    }

    /// Living actors in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_alive())
    }

    /// Items lying on the floor.
    pub fn items(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.as_item().is_some())
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &Entity> {
        self.items().filter(move |e| e.position == position)
    }

    /// Entities sorted back-to-front for drawing.
    pub fn render_order(&self) -> Vec<&Entity> {
        let mut sorted: Vec<&Entity> = self.entities.iter().collect();
        sorted.sort_by_key(|e| e.render_order);
        sorted
    }

    /// Whether an actor may step onto `position`: in bounds, walkable and not
    /// blocked by another entity.
    pub fn is_passable(&self, position: Position) -> bool {
        self.is_walkable(position) && self.blocking_entity_at(position).is_none()
    }

    /// Next tile on a path from `from` toward `to`, if one exists.
    pub fn step_toward(&self, from: Position, to: Position) -> Option<Position> {
        path::find_path(from, to, |p| self.is_passable(p))
            .and_then(|path| path.first().copied())
    }
}
