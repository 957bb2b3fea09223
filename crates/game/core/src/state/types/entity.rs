//! Map entities: actors and items share position, glyph and render data.

use strum::Display;

use super::actor::Actor;
use super::item::Item;
use super::{EntityId, Position, Rgb};

/// Draw layer; later variants are drawn on top of earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

/// Variant-specific components of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Actor(Box<Actor>),
    Item(Item),
}

/// Anything that occupies a tile.
///
/// Entities are owned by exactly one [`crate::map::GameMap`] (or by an
/// inventory while carried) and are referred to elsewhere by [`EntityId`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub position: Position,
    pub render_order: RenderOrder,
    pub blocks_movement: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn actor(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        color: Rgb,
        position: Position,
        actor: Actor,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            color,
            position,
            render_order: RenderOrder::Actor,
            blocks_movement: true,
            kind: EntityKind::Actor(Box::new(actor)),
        }
    }

    pub fn item(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        color: Rgb,
        position: Position,
        item: Item,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            color,
            position,
            render_order: RenderOrder::Item,
            blocks_movement: false,
            kind: EntityKind::Item(item),
        }
    }

    pub fn as_actor(&self) -> Option<&Actor> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Item(_) => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut Actor> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match &self.kind {
            EntityKind::Item(item) => Some(item),
            EntityKind::Actor(_) => None,
        }
    }

    /// True for actors that still have an AI (corpses and items are not alive).
    pub fn is_alive(&self) -> bool {
        self.as_actor().is_some_and(Actor::is_alive)
    }
}
