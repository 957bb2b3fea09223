use crate::state::{Entity, EntityId, Item, Position, Rgb};

/// Oracle providing item templates by definition id.
pub trait ItemOracle: Send + Sync {
    fn template(&self, def_id: &str) -> Option<&ItemTemplate>;

    fn template_ids(&self) -> Vec<String>;
}

/// Authored description of an item kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub item: Item,
}

impl ItemTemplate {
    pub fn spawn(&self, id: EntityId, position: Position) -> Entity {
        Entity::item(id, self.name.clone(), self.glyph, self.color, position, self.item)
    }
}
