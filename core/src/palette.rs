//! Cave color palettes and the fixed Commodore-64 color tables they index.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{CaveError, FormatError};

/// Number of entries in every hardware color table.
pub const COLOR_TABLE_LEN: usize = 16;

const PEPTO: [u32; COLOR_TABLE_LEN] = [
    0x000000, 0xFFFFFF, 0x813338, 0x75CEC8, 0x8E3C97, 0x56AC4D, 0x2E2C9B, 0xEDF171, 0x8E5029,
    0x553800, 0xC46C71, 0x4A4A4A, 0x7B7B7B, 0xA9FF9F, 0x706DEB, 0xB2B2B2,
];

const CONTRAST: [u32; COLOR_TABLE_LEN] = [
    0x000000, 0xFFFFFF, 0x68372B, 0x70A4B2, 0x6F3D86, 0x588D43, 0x352879, 0xB8C76F, 0x6F4F25,
    0x433900, 0x9A6759, 0x444444, 0x6C6C6C, 0x9AD284, 0x6C5EB5, 0x959595,
];

const LIGHT: [u32; COLOR_TABLE_LEN] = [
    0x000000, 0xFFFFFF, 0x984B43, 0x79C1C8, 0x9B51A5, 0x68AE5C, 0x52429D, 0xC9D684, 0x9B6739,
    0x6A5400, 0xC37B75, 0x636363, 0x8A8A8A, 0xA3E599, 0x8A7BCE, 0xADADAD,
];

/// Fixed 16-entry hardware color table used to resolve indexed colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTable {
    /// Pepto's measured Commodore-64 palette.
    #[default]
    Pepto,
    /// Commodore-64 palette with more contrast.
    Contrast,
    /// Lighter Commodore-64 palette.
    Light,
}

impl ColorTable {
    /// Returns the sixteen `0xRRGGBB` entries of the table.
    #[must_use]
    pub const fn colors(self) -> &'static [u32; COLOR_TABLE_LEN] {
        match self {
            Self::Pepto => &PEPTO,
            Self::Contrast => &CONTRAST,
            Self::Light => &LIGHT,
        }
    }

    /// Looks up the RGB value stored at the provided index.
    #[must_use]
    pub const fn rgb(self, index: ColorIndex) -> u32 {
        self.colors()[index.0 as usize]
    }
}

/// Index into a [`ColorTable`], guaranteed to be below [`COLOR_TABLE_LEN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Creates an index, rejecting values past the end of the table.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < COLOR_TABLE_LEN {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Retrieves the numeric index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ColorIndex {
    type Error = CaveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            FormatError::InvalidColor {
                value: value.to_string(),
            }
            .into()
        })
    }
}

impl From<ColorIndex> for u8 {
    fn from(index: ColorIndex) -> Self {
        index.0
    }
}

/// Value stored in a single palette slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSlot {
    /// Entry of the active hardware color table.
    Indexed(ColorIndex),
    /// Literal `0xRRGGBB` color that bypasses the table.
    Rgb(u32),
}

impl ColorSlot {
    /// Creates an indexed slot, validating the index against the table size.
    pub fn indexed(index: u8) -> Result<Self, CaveError> {
        Ok(Self::Indexed(ColorIndex::try_from(index)?))
    }

    /// Resolves the slot to a displayable `0xRRGGBB` color.
    #[must_use]
    pub const fn resolve(self, table: ColorTable) -> u32 {
        match self {
            Self::Indexed(index) => table.rgb(index),
            Self::Rgb(rgb) => rgb,
        }
    }

    const fn fixed(index: u8) -> Self {
        Self::Indexed(ColorIndex(index))
    }
}

impl FromStr for ColorSlot {
    type Err = CaveError;

    /// Parses either a decimal table index or an `#rrggbb` literal.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let invalid = || FormatError::InvalidColor {
            value: value.to_owned(),
        };

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(invalid().into());
            }
            let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return Ok(Self::Rgb(rgb));
        }

        let index = trimmed.parse::<u8>().map_err(|_| invalid())?;
        Self::indexed(index)
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed(index) => write!(f, "{}", index.get()),
            Self::Rgb(rgb) => write!(f, "#{rgb:06x}"),
        }
    }
}

/// Names the seven logical color slots of a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteSlot {
    /// First foreground color.
    Foreground1,
    /// Second foreground color.
    Foreground2,
    /// Third foreground color.
    Foreground3,
    /// Color of the amoeba colony.
    Amoeba,
    /// Color of slime.
    Slime,
    /// Background color of the playfield.
    Screen,
    /// Color of the border around the playfield.
    Border,
}

/// Color assignment for a single cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    /// First foreground color.
    pub fg1: ColorSlot,
    /// Second foreground color.
    pub fg2: ColorSlot,
    /// Third foreground color.
    pub fg3: ColorSlot,
    /// Color of the amoeba colony.
    pub amoeba: ColorSlot,
    /// Color of slime.
    pub slime: ColorSlot,
    /// Background color of the playfield.
    pub screen: ColorSlot,
    /// Color of the border around the playfield.
    pub border: ColorSlot,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fg1: ColorSlot::fixed(8),
            fg2: ColorSlot::fixed(11),
            fg3: ColorSlot::fixed(1),
            amoeba: ColorSlot::fixed(5),
            slime: ColorSlot::fixed(6),
            screen: ColorSlot::fixed(0),
            border: ColorSlot::fixed(0),
        }
    }
}

impl Palette {
    /// Returns the value stored in the requested slot.
    #[must_use]
    pub const fn slot(&self, slot: PaletteSlot) -> ColorSlot {
        match slot {
            PaletteSlot::Foreground1 => self.fg1,
            PaletteSlot::Foreground2 => self.fg2,
            PaletteSlot::Foreground3 => self.fg3,
            PaletteSlot::Amoeba => self.amoeba,
            PaletteSlot::Slime => self.slime,
            PaletteSlot::Screen => self.screen,
            PaletteSlot::Border => self.border,
        }
    }

    /// Resolves the requested slot against the active color table.
    #[must_use]
    pub const fn rgb(&self, slot: PaletteSlot, table: ColorTable) -> u32 {
        self.slot(slot).resolve(table)
    }

    /// Picks five distinct non-black table colors for the foreground,
    /// slime and amoeba slots, and blacks out screen and border.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut available: Vec<u8> = (1..COLOR_TABLE_LEN as u8).collect();
        let mut pick = |available: &mut Vec<u8>| {
            let position = rng.gen_range(0..available.len());
            ColorSlot::fixed(available.remove(position))
        };

        self.fg1 = pick(&mut available);
        self.fg2 = pick(&mut available);
        self.fg3 = pick(&mut available);
        self.slime = pick(&mut available);
        self.amoeba = pick(&mut available);
        self.screen = ColorSlot::fixed(0);
        self.border = ColorSlot::fixed(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_palette_resolves_through_active_table() {
        let palette = Palette::default();
        assert_eq!(palette.rgb(PaletteSlot::Foreground1, ColorTable::Pepto), 0x8E5029);
        assert_eq!(palette.rgb(PaletteSlot::Foreground1, ColorTable::Contrast), 0x6F4F25);
        assert_eq!(palette.rgb(PaletteSlot::Border, ColorTable::Light), 0x000000);
    }

    #[test]
    fn literal_slot_ignores_table() {
        let slot: ColorSlot = "#12ab9f".parse().expect("literal parses");
        assert_eq!(slot, ColorSlot::Rgb(0x12AB9F));
        for table in [ColorTable::Pepto, ColorTable::Contrast, ColorTable::Light] {
            assert_eq!(slot.resolve(table), 0x12AB9F);
        }
        assert_eq!(slot.to_string(), "#12ab9f");
    }

    #[test]
    fn index_past_table_is_rejected() {
        assert!(matches!(
            "16".parse::<ColorSlot>(),
            Err(CaveError::Format(FormatError::InvalidColor { .. }))
        ));
        assert!("#12345".parse::<ColorSlot>().is_err());
        assert!("grey".parse::<ColorSlot>().is_err());
        assert_eq!("15".parse::<ColorSlot>(), ColorSlot::indexed(15));
    }

    #[test]
    fn randomize_picks_distinct_non_black_colors() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut palette = Palette::default();
        palette.randomize(&mut rng);

        let picked = [
            palette.fg1,
            palette.fg2,
            palette.fg3,
            palette.slime,
            palette.amoeba,
        ];
        for (position, slot) in picked.iter().enumerate() {
            assert_ne!(*slot, ColorSlot::fixed(0));
            assert!(!picked[position + 1..].contains(slot), "duplicate {slot:?}");
        }
        assert_eq!(palette.screen, ColorSlot::fixed(0));
        assert_eq!(palette.border, ColorSlot::fixed(0));
    }

    #[test]
    fn randomize_is_reproducible_for_a_seed() {
        let mut first = Palette::default();
        let mut second = Palette::default();
        first.randomize(&mut ChaCha8Rng::seed_from_u64(7));
        second.randomize(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(first, second);
    }
}
