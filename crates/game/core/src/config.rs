use crate::dungeon::GenerationError;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Radius of the player's field of view, in tiles.
    pub fov_radius: u32,

    /// Width and height added to the dungeon after each generated floor.
    pub floor_size_increment: u32,

    /// Max HP gained when the player picks constitution on level-up.
    pub level_up_hp: u32,
    /// Base power gained when the player picks strength on level-up.
    pub level_up_power: i32,
    /// Base defense gained when the player picks agility on level-up.
    pub level_up_defense: i32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOV_RADIUS: u32 = 8;
    pub const DEFAULT_FLOOR_SIZE_INCREMENT: u32 = 10;
    pub const DEFAULT_LEVEL_UP_HP: u32 = 20;
    pub const DEFAULT_LEVEL_UP_POWER: i32 = 1;
    pub const DEFAULT_LEVEL_UP_DEFENSE: i32 = 1;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            floor_size_increment: Self::DEFAULT_FLOOR_SIZE_INCREMENT,
            level_up_hp: Self::DEFAULT_LEVEL_UP_HP,
            level_up_power: Self::DEFAULT_LEVEL_UP_POWER,
            level_up_defense: Self::DEFAULT_LEVEL_UP_DEFENSE,
        }
    }

    pub fn with_fov_radius(fov_radius: u32) -> Self {
        Self {
            fov_radius,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied dungeon dimensions and room bounds.
///
/// `map_width`/`map_height` describe the *next* floor to generate and grow by
/// [`GameConfig::floor_size_increment`] after each floor. The viewport size
/// reserves a margin so rooms never hug the map edges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationParams {
    pub map_width: u32,
    pub map_height: u32,
    pub max_rooms: u32,
    pub room_min_size: u32,
    pub room_max_size: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl GenerationParams {
    pub const DEFAULT_VIEWPORT_WIDTH: u32 = 80;
    pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 50;
    pub const DEFAULT_MAX_ROOMS: u32 = 30;
    pub const DEFAULT_ROOM_MIN_SIZE: u32 = 6;
    pub const DEFAULT_ROOM_MAX_SIZE: u32 = 10;
    /// Smallest room side that still leaves a walkable interior.
    pub const MIN_ROOM_SIZE: u32 = 2;

    /// New-game parameters for a viewport of the given size.
    pub fn for_viewport(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            map_width: 80 + viewport_width,
            map_height: 43 + viewport_height,
            max_rooms: Self::DEFAULT_MAX_ROOMS,
            room_min_size: Self::DEFAULT_ROOM_MIN_SIZE,
            room_max_size: Self::DEFAULT_ROOM_MAX_SIZE,
            viewport_width,
            viewport_height,
        }
    }

    /// Rejects parameter sets the generator cannot carve a floor from.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.room_min_size < Self::MIN_ROOM_SIZE {
            return Err(GenerationError::RoomTooSmall {
                min: self.room_min_size,
            });
        }
        if self.room_min_size > self.room_max_size {
            return Err(GenerationError::InvalidRoomBounds {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.map_width == 0 || self.map_height == 0 {
            return Err(GenerationError::EmptyMap);
        }
        Ok(())
    }

    /// Grows the map size for the following floor.
    pub fn grow(&mut self, increment: u32) {
        self.map_width += increment;
        self.map_height += increment;
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::for_viewport(Self::DEFAULT_VIEWPORT_WIDTH, Self::DEFAULT_VIEWPORT_HEIGHT)
    }
}
