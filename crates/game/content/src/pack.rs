//! A complete, self-consistent set of templates and tables.

use game_core::{
    ActorTemplate, FloorTable, ItemTemplate, PLAYER_TEMPLATE_ID, ScalingTable, SpawnTable,
};

/// Content pack inconsistencies found by [`ContentPack::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content pack has no 'player' actor template")]
    MissingPlayer,

    #[error("duplicate {kind} template id '{id}'")]
    DuplicateTemplate { kind: &'static str, id: String },

    #[error("{table} spawn table references unknown template '{id}'")]
    UnknownTemplate { table: &'static str, id: String },
}

/// Generation tables bundled with a content pack.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentTables {
    pub monster_spawns: SpawnTable,
    pub item_spawns: SpawnTable,
    pub max_monsters_per_room: FloorTable,
    pub max_items_per_room: FloorTable,
    pub monster_scaling: ScalingTable,
}

/// Templates keyed by definition id, plus the tables that reference them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentPack {
    pub actors: Vec<(String, ActorTemplate)>,
    pub items: Vec<(String, ItemTemplate)>,
    pub tables: ContentTables,
}

impl ContentPack {
    /// The built-in catalog.
    pub fn standard() -> Self {
        Self {
            actors: crate::standard::actors(),
            items: crate::standard::items(),
            tables: crate::standard::tables(),
        }
    }

    pub fn actor(&self, def_id: &str) -> Option<&ActorTemplate> {
        self.actors
            .iter()
            .find(|(id, _)| id == def_id)
            .map(|(_, template)| template)
    }

    pub fn item(&self, def_id: &str) -> Option<&ItemTemplate> {
        self.items
            .iter()
            .find(|(id, _)| id == def_id)
            .map(|(_, template)| template)
    }

    /// Checks that a player template exists, ids are unique and every spawn
    /// table entry names a known template.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.actor(PLAYER_TEMPLATE_ID).is_none() {
            return Err(ContentError::MissingPlayer);
        }
        check_unique("actor", self.actors.iter().map(|(id, _)| id))?;
        check_unique("item", self.items.iter().map(|(id, _)| id))?;

        for id in self.tables.monster_spawns.templates() {
            if self.actor(id).is_none() {
                return Err(ContentError::UnknownTemplate {
                    table: "monster",
                    id: id.to_owned(),
                });
            }
        }
        for id in self.tables.item_spawns.templates() {
            if self.item(id).is_none() {
                return Err(ContentError::UnknownTemplate {
                    table: "item",
                    id: id.to_owned(),
                });
            }
        }
        Ok(())
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a String>,
) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateTemplate {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
