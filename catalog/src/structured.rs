//! Caves supplied as typed records of the structured text format.

use boulder_caves_core::{
    Cave, CaveError, ColorSlot, FormatError, Palette, DEFAULT_AMOEBA_FACTOR,
    DEFAULT_AMOEBA_SLOW_GROWTH_TIME, DEFAULT_CAVE_TIME, DEFAULT_DIAMONDS_REQUIRED,
    DEFAULT_MAGIC_WALL_MILLING_TIME,
};
use boulder_caves_system_translation::{symbol_rows, translate_symbol_rows};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Width of a structured cave that does not declare one.
pub const DEFAULT_STRUCTURED_WIDTH: u32 = 40;
/// Height of a structured cave that does not declare one.
pub const DEFAULT_STRUCTURED_HEIGHT: u32 = 22;
/// Largest width or height a structured cave may declare.
pub const MAX_STRUCTURED_SIZE: u32 = 200;

/// Reader of an external caveset in the structured text format.
///
/// The catalog only consumes already parsed records; locating and parsing
/// the text itself is the implementor's concern.
pub trait StructuredCaveSource {
    /// Title of the caveset.
    fn name(&self) -> &str;
    /// Author of the caveset.
    fn author(&self) -> &str;
    /// Release date of the caveset.
    fn date(&self) -> &str;
    /// Web address of the author.
    fn www(&self) -> &str;
    /// Caves in play order.
    fn caves(&self) -> &[StructuredCave];
}

/// Color value as written in a structured cave: a table index or text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructuredColor {
    /// Numeric table index, possibly out of range.
    Index(i64),
    /// Textual color, either a decimal index or `#rrggbb`.
    Text(String),
}

impl StructuredColor {
    fn to_slot(&self) -> Result<ColorSlot, CaveError> {
        match self {
            Self::Index(value) => u8::try_from(*value)
                .map_err(|_| {
                    CaveError::from(FormatError::InvalidColor {
                        value: value.to_string(),
                    })
                })
                .and_then(ColorSlot::indexed),
            Self::Text(text) => text.parse(),
        }
    }

    /// Like `to_slot`, but a negative index means black.
    fn to_backdrop_slot(&self, slot: &str) -> Result<ColorSlot, CaveError> {
        match self {
            Self::Index(value) if *value < 0 => {
                warn!("{slot} color {value} is negative, using 0");
                ColorSlot::indexed(0)
            }
            _ => self.to_slot(),
        }
    }
}

impl From<ColorSlot> for StructuredColor {
    fn from(slot: ColorSlot) -> Self {
        match slot {
            ColorSlot::Indexed(index) => Self::Index(i64::from(index.get())),
            ColorSlot::Rgb(_) => Self::Text(slot.to_string()),
        }
    }
}

/// Seven palette entries of a structured cave.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredColors {
    /// First foreground color.
    pub fg1: StructuredColor,
    /// Second foreground color.
    pub fg2: StructuredColor,
    /// Third foreground color.
    pub fg3: StructuredColor,
    /// Amoeba color.
    pub amoeba: StructuredColor,
    /// Slime color.
    pub slime: StructuredColor,
    /// Playfield background color.
    pub screen: StructuredColor,
    /// Border color.
    pub border: StructuredColor,
}

impl Default for StructuredColors {
    fn default() -> Self {
        Self::from(Palette::default())
    }
}

impl From<Palette> for StructuredColors {
    fn from(palette: Palette) -> Self {
        Self {
            fg1: palette.fg1.into(),
            fg2: palette.fg2.into(),
            fg3: palette.fg3.into(),
            amoeba: palette.amoeba.into(),
            slime: palette.slime.into(),
            screen: palette.screen.into(),
            border: palette.border.into(),
        }
    }
}

impl StructuredColors {
    /// Converts the entries into a palette, clamping negative backdrop indices.
    pub fn to_palette(&self) -> Result<Palette, CaveError> {
        Ok(Palette {
            fg1: self.fg1.to_slot()?,
            fg2: self.fg2.to_slot()?,
            fg3: self.fg3.to_slot()?,
            amoeba: self.amoeba.to_slot()?,
            slime: self.slime.to_slot()?,
            screen: self.screen.to_backdrop_slot("screen")?,
            border: self.border.to_backdrop_slot("border")?,
        })
    }
}

/// One cave of a structured caveset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredCave {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
    /// Marks a bonus cave.
    pub intermission: bool,
    /// Marks a cave whose edges wrap around.
    pub wraparound: bool,
    /// Time limit in seconds.
    pub time: u32,
    /// Diamonds needed to open the exit.
    pub diamonds_required: u32,
    /// Score per diamond until the requirement is met.
    pub diamond_value_normal: u32,
    /// Score per diamond beyond the requirement.
    pub diamond_value_extra: u32,
    /// Duration of slow amoeba growth.
    pub amoeba_time: u32,
    /// Fraction of the cave the amoeba may fill.
    pub amoeba_factor: f64,
    /// Duration a triggered magic wall stays active.
    pub magic_wall_time: u32,
    /// Probability that objects seep through slime.
    pub slime_permeability: f64,
    /// Map lines, one symbol per cell, top row first.
    pub map: Vec<String>,
    /// Palette entries.
    pub colors: StructuredColors,
}

impl Default for StructuredCave {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            width: DEFAULT_STRUCTURED_WIDTH,
            height: DEFAULT_STRUCTURED_HEIGHT,
            intermission: false,
            wraparound: false,
            time: DEFAULT_CAVE_TIME,
            diamonds_required: DEFAULT_DIAMONDS_REQUIRED,
            diamond_value_normal: 0,
            diamond_value_extra: 0,
            amoeba_time: DEFAULT_AMOEBA_SLOW_GROWTH_TIME,
            amoeba_factor: DEFAULT_AMOEBA_FACTOR,
            magic_wall_time: DEFAULT_MAGIC_WALL_MILLING_TIME,
            slime_permeability: 0.0,
            map: Vec::new(),
            colors: StructuredColors::default(),
        }
    }
}

impl StructuredCave {
    /// Captures a decoded cave in structured form.
    ///
    /// Fails when a cell has no map symbol, such as the player start of a
    /// binary record.
    pub fn from_cave(cave: &Cave) -> Result<Self, CaveError> {
        Ok(Self {
            name: cave.name.clone(),
            description: cave.description.clone(),
            width: cave.width(),
            height: cave.height(),
            intermission: cave.intermission,
            wraparound: cave.wraparound,
            time: cave.time,
            diamonds_required: cave.diamonds_required,
            diamond_value_normal: cave.diamond_value_normal,
            diamond_value_extra: cave.diamond_value_extra,
            amoeba_time: cave.amoeba_slow_growth_time,
            amoeba_factor: cave.amoeba_factor,
            magic_wall_time: cave.magic_wall_milling_time,
            slime_permeability: cave.slime_permeability,
            map: symbol_rows(cave)?,
            colors: cave.colors.into(),
        })
    }

    /// Builds the canonical cave. Colors are taken as written.
    pub fn to_cave(&self, index: u32) -> Result<Cave, CaveError> {
        if self.width > MAX_STRUCTURED_SIZE || self.height > MAX_STRUCTURED_SIZE {
            return Err(CaveError::precondition(format!(
                "a {}x{} cave exceeds the {MAX_STRUCTURED_SIZE}x{MAX_STRUCTURED_SIZE} limit",
                self.width, self.height
            )));
        }
        let cells = translate_symbol_rows(&self.map, self.width, self.height)?;

        let mut cave = Cave::new(
            index,
            self.name.as_str(),
            self.description.as_str(),
            self.width,
            self.height,
        );
        cave.intermission = self.intermission;
        cave.wraparound = self.wraparound;
        cave.time = self.time;
        cave.diamonds_required = self.diamonds_required;
        cave.diamond_value_normal = self.diamond_value_normal;
        cave.diamond_value_extra = self.diamond_value_extra;
        cave.amoeba_slow_growth_time = self.amoeba_time;
        cave.amoeba_factor = self.amoeba_factor;
        cave.magic_wall_milling_time = self.magic_wall_time;
        cave.slime_permeability = self.slime_permeability;
        cave.colors = self.colors.to_palette()?;
        cave.replace_map(cells)?;

        debug!(
            "decoded structured cave {:?} ({}x{})",
            cave.name, self.width, self.height
        );
        Ok(cave)
    }
}

/// Structured caveset held in memory, as deserialized from a document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredCaveSet {
    /// Title of the caveset.
    pub name: String,
    /// Author of the caveset.
    pub author: String,
    /// Release date.
    pub date: String,
    /// Web address of the author.
    pub www: String,
    /// Caves in play order.
    #[serde(rename = "cave")]
    pub caves: Vec<StructuredCave>,
}

impl StructuredCaveSource for StructuredCaveSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn www(&self) -> &str {
        &self.www
    }

    fn caves(&self) -> &[StructuredCave] {
        &self.caves
    }
}

#[cfg(test)]
mod tests {
    use boulder_caves_core::{Cell, GameObject};

    use super::*;

    fn tiny_cave() -> StructuredCave {
        StructuredCave {
            name: "Tiny".into(),
            width: 4,
            height: 3,
            map: vec!["WWWW".into(), "WPdW".into(), "WWWW".into()],
            ..StructuredCave::default()
        }
    }

    #[test]
    fn defaults_match_cave_defaults() {
        let cave = StructuredCave::default();
        assert_eq!(cave.time, DEFAULT_CAVE_TIME);
        assert_eq!(cave.diamonds_required, DEFAULT_DIAMONDS_REQUIRED);
        assert_eq!(
            cave.colors.to_palette().expect("valid"),
            Palette::default()
        );
    }

    #[test]
    fn to_cave_copies_metadata_and_map() {
        let mut structured = tiny_cave();
        structured.time = 99;
        structured.wraparound = true;
        structured.colors.fg3 = StructuredColor::Text("#102030".into());

        let cave = structured.to_cave(4).expect("valid cave");
        assert_eq!(cave.index, 4);
        assert_eq!(cave.time, 99);
        assert!(cave.wraparound);
        assert_eq!(cave.colors.fg3, ColorSlot::Rgb(0x102030));
        assert_eq!(cave.cell(1, 1), Some(Cell::still(GameObject::InboxBlinking)));
        assert_eq!(cave.cell(2, 1), Some(Cell::still(GameObject::Diamond)));
    }

    #[test]
    fn negative_backdrop_colors_clamp_to_black() {
        let mut structured = tiny_cave();
        structured.colors.screen = StructuredColor::Index(-1);
        structured.colors.border = StructuredColor::Index(-7);
        let cave = structured.to_cave(1).expect("clamped");
        assert_eq!(cave.colors.screen, ColorSlot::indexed(0).expect("valid"));
        assert_eq!(cave.colors.border, ColorSlot::indexed(0).expect("valid"));
    }

    #[test]
    fn invalid_foreground_colors_are_rejected() {
        let mut structured = tiny_cave();
        structured.colors.fg1 = StructuredColor::Index(-1);
        assert!(matches!(
            structured.to_cave(1),
            Err(CaveError::Format(FormatError::InvalidColor { .. }))
        ));

        structured.colors.fg1 = StructuredColor::Text("#12345".into());
        assert!(structured.to_cave(1).is_err());

        structured.colors.fg1 = StructuredColor::Index(16);
        assert!(structured.to_cave(1).is_err());
    }

    #[test]
    fn colony_does_not_recolor_structured_caves() {
        let mut structured = tiny_cave();
        structured.map[1] = "WPaW".into();
        let cave = structured.to_cave(1).expect("valid cave");
        assert_eq!(cave.colors.fg3, Palette::default().fg3);
    }

    #[test]
    fn map_shape_is_checked() {
        let mut structured = tiny_cave();
        structured.height = 4;
        assert_eq!(
            structured.to_cave(1),
            Err(CaveError::Format(FormatError::MapShapeMismatch {
                width: 4,
                height: 4,
                rows: 3,
            }))
        );
    }

    #[test]
    fn oversized_caves_are_rejected() {
        let structured = StructuredCave {
            width: MAX_STRUCTURED_SIZE + 1,
            height: 1,
            map: vec!["W".repeat(MAX_STRUCTURED_SIZE as usize + 1)],
            ..StructuredCave::default()
        };
        assert!(matches!(
            structured.to_cave(1),
            Err(CaveError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn from_cave_round_trips() {
        let structured = tiny_cave();
        let cave = structured.to_cave(1).expect("valid cave");
        assert_eq!(StructuredCave::from_cave(&cave), Ok(structured));
    }

    #[test]
    fn zero_width_caves_keep_their_rows() {
        let structured = StructuredCave {
            width: 0,
            height: 2,
            map: vec![String::new(); 2],
            ..StructuredCave::default()
        };
        let mut cave = structured.to_cave(1).expect("valid cave");
        assert_eq!(cave.rows().count(), 2);

        let restored = StructuredCave::from_cave(&cave).expect("exportable");
        assert_eq!(restored.map, structured.map);

        cave.resize(4, 4).expect("grow");
        assert_eq!(cave.map().len(), 16);
        assert!(cave.map().iter().all(|&cell| cell == Cell::EMPTY));
    }
}
