//! Generation tables oracle backed by a content pack's tables.

use game_content::ContentTables;
use game_core::{FloorTable, ScalingTable, SpawnTable, TablesOracle};

/// TablesOracle implementation over [`ContentTables`].
#[derive(Debug, Clone, Default)]
pub struct TablesOracleImpl {
    tables: ContentTables,
}

impl TablesOracleImpl {
    pub fn new(tables: ContentTables) -> Self {
        Self { tables }
    }
}

impl TablesOracle for TablesOracleImpl {
    fn monster_spawns(&self) -> &SpawnTable {
        &self.tables.monster_spawns
    }

    fn item_spawns(&self) -> &SpawnTable {
        &self.tables.item_spawns
    }

    fn max_monsters_per_room(&self) -> &FloorTable {
        &self.tables.max_monsters_per_room
    }

    fn max_items_per_room(&self) -> &FloorTable {
        &self.tables.max_items_per_room
    }

    fn monster_scaling(&self) -> &ScalingTable {
        &self.tables.monster_scaling
    }
}
