//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::Direction;

/// Configuration built once at startup and passed by reference.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding the save file (default: per-user data directory).
    pub save_dir: Option<PathBuf>,
    /// Directory with `content.ron` / `generation.toml` overrides.
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub keymap: KeyMap,
    pub view_width: u32,
    pub view_height: u32,
    /// Messages shown under the map.
    pub message_lines: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            data_dir: None,
            log_dir: None,
            seed: None,
            keymap: KeyMap::vi(),
            view_width: 60,
            view_height: 21,
            message_lines: 5,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_SAVE_DIR` - Directory for the save file
    /// - `DUNGEON_DATA_DIR` - Directory with content and generation overrides
    /// - `DUNGEON_LOG_DIR` - Directory for the log file
    /// - `DUNGEON_SEED` - Fixed seed for new games
    /// - `DUNGEON_KEYMAP` - Movement keys: `vi` (default), `numpad` or `wasd`
    /// - `DUNGEON_VIEW_WIDTH` / `DUNGEON_VIEW_HEIGHT` - Map window size
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.save_dir = env::var_os("DUNGEON_SAVE_DIR").map(PathBuf::from);
        config.data_dir = env::var_os("DUNGEON_DATA_DIR").map(PathBuf::from);
        config.log_dir = env::var_os("DUNGEON_LOG_DIR").map(PathBuf::from);
        config.seed = read_env::<u64>("DUNGEON_SEED");

        if let Some(keymap) = env::var("DUNGEON_KEYMAP").ok().and_then(|name| KeyMap::preset(&name)) {
            config.keymap = keymap;
        }
        if let Some(width) = read_env::<u32>("DUNGEON_VIEW_WIDTH") {
            config.view_width = width.max(10);
        }
        if let Some(height) = read_env::<u32>("DUNGEON_VIEW_HEIGHT") {
            config.view_height = height.max(5);
        }

        config
    }
}

/// Key bindings resolved once and handed to the input translator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    pub directions: [(char, Direction); 8],
    pub wait: char,
    pub pickup: char,
    pub use_item: char,
    pub drop: char,
    pub equip: char,
    pub descend: char,
    pub confirm: char,
    pub menu: char,
    pub quit: char,
}

impl KeyMap {
    pub fn vi() -> Self {
        Self::with_directions([
            ('k', Direction::North),
            ('u', Direction::NorthEast),
            ('l', Direction::East),
            ('n', Direction::SouthEast),
            ('j', Direction::South),
            ('b', Direction::SouthWest),
            ('h', Direction::West),
            ('y', Direction::NorthWest),
        ])
    }

    pub fn numpad() -> Self {
        Self::with_directions([
            ('8', Direction::North),
            ('9', Direction::NorthEast),
            ('6', Direction::East),
            ('3', Direction::SouthEast),
            ('2', Direction::South),
            ('1', Direction::SouthWest),
            ('4', Direction::West),
            ('7', Direction::NorthWest),
        ])
    }

    pub fn wasd() -> Self {
        Self {
            equip: 'x',
            ..Self::with_directions([
                ('w', Direction::North),
                ('e', Direction::NorthEast),
                ('d', Direction::East),
                ('c', Direction::SouthEast),
                ('s', Direction::South),
                ('z', Direction::SouthWest),
                ('a', Direction::West),
                ('q', Direction::NorthWest),
            ])
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "vi" => Some(Self::vi()),
            "numpad" => Some(Self::numpad()),
            "wasd" => Some(Self::wasd()),
            _ => None,
        }
    }

    fn with_directions(directions: [(char, Direction); 8]) -> Self {
        Self {
            directions,
            wait: '.',
            pickup: 'g',
            use_item: 'i',
            drop: 'r',
            equip: 'e',
            descend: '>',
            confirm: 'f',
            menu: 'm',
            quit: 'Q',
        }
    }

    pub fn direction(&self, key: char) -> Option<Direction> {
        self.directions
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, direction)| *direction)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_bind_every_direction_once() {
        for keymap in [KeyMap::vi(), KeyMap::numpad(), KeyMap::wasd()] {
            for direction in Direction::ALL {
                let bound = keymap
                    .directions
                    .iter()
                    .filter(|(_, d)| *d == direction)
                    .count();
                assert_eq!(bound, 1, "{direction} in {keymap:?}");
            }
            let commands = [
                keymap.wait,
                keymap.pickup,
                keymap.use_item,
                keymap.drop,
                keymap.equip,
                keymap.descend,
                keymap.confirm,
                keymap.menu,
                keymap.quit,
            ];
            for key in commands {
                assert!(keymap.direction(key).is_none(), "{key} clashes in {keymap:?}");
            }
        }
    }

    #[test]
    fn unknown_preset_is_ignored() {
        assert_eq!(KeyMap::preset(" NumPad "), Some(KeyMap::numpad()));
        assert_eq!(KeyMap::preset("dvorak"), None);
    }
}
