//! Tile kinds and their render descriptors.

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::state::Rgb;

bitflags! {
    /// Physical properties of a tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        /// Actors can stand on the tile.
        const WALKABLE = 0b0000_0001;
        /// The tile does not block sight.
        const TRANSPARENT = 0b0000_0010;
    }
}

/// Glyph plus foreground/background colors for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graphic {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Graphic {
    pub const fn new(glyph: char, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph, fg, bg }
    }
}

/// Descriptor for tiles that have never been seen.
pub const SHROUD: Graphic = Graphic::new(' ', Rgb::WHITE, Rgb::BLACK);

/// Terrain stored in every map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Wall,
    Floor,
    DownStairs,
}

impl TileKind {
    pub const fn flags(self) -> TileFlags {
        match self {
            Self::Wall => TileFlags::empty(),
            Self::Floor | Self::DownStairs => {
                TileFlags::WALKABLE.union(TileFlags::TRANSPARENT)
            }
        }
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.flags().contains(TileFlags::WALKABLE)
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.flags().contains(TileFlags::TRANSPARENT)
    }

    /// Descriptor used while the tile is inside the field of view.
    pub const fn light(self) -> Graphic {
        match self {
            Self::Wall => Graphic::new(' ', Rgb::WHITE, Rgb(130, 110, 50)),
            Self::Floor => Graphic::new(' ', Rgb::WHITE, Rgb(200, 180, 50)),
            Self::DownStairs => Graphic::new('>', Rgb::WHITE, Rgb(170, 80, 170)),
        }
    }

    /// Descriptor used for explored tiles outside the field of view.
    pub const fn dark(self) -> Graphic {
        match self {
            Self::Wall => Graphic::new(' ', Rgb::WHITE, Rgb(30, 30, 30)),
            Self::Floor => Graphic::new(' ', Rgb::WHITE, Rgb(70, 70, 70)),
            Self::DownStairs => Graphic::new('>', Rgb(0, 0, 100), Rgb(150, 50, 150)),
        }
    }
}
