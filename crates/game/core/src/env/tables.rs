use crate::dungeon::{FloorTable, ScalingTable, SpawnTable};

/// Oracle providing the floor-indexed generation tables.
///
/// Tables are content, not state: they never change during a game and are
/// not part of a save file.
pub trait TablesOracle: Send + Sync {
    fn monster_spawns(&self) -> &SpawnTable;
    fn item_spawns(&self) -> &SpawnTable;

    /// Upper bound for monsters drawn per room.
    fn max_monsters_per_room(&self) -> &FloorTable;
    /// Upper bound for items drawn per room.
    fn max_items_per_room(&self) -> &FloorTable;

    /// Stat multipliers applied to monsters by floor.
    fn monster_scaling(&self) -> &ScalingTable;
}
