#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Boulder Caves engine.
//!
//! This crate defines the canonical in-memory cave produced by every decode
//! path. Generation systems fill raw object-code buffers, translation systems
//! turn those codes into typed [`Cell`] values, and the catalog assembles the
//! finished [`Cave`] together with its timing metadata and [`Palette`].
//! Simulation and rendering collaborators only ever read the result.

mod error;
mod palette;

use serde::{Deserialize, Serialize};

pub use error::{CaveError, FormatError};
pub use palette::{ColorIndex, ColorSlot, ColorTable, Palette, PaletteSlot, COLOR_TABLE_LEN};

/// Default time limit of a cave, in seconds.
pub const DEFAULT_CAVE_TIME: u32 = 200;
/// Default number of diamonds that must be collected to open the exit.
pub const DEFAULT_DIAMONDS_REQUIRED: u32 = 10;
/// Default time the amoeba grows slowly before speeding up.
pub const DEFAULT_AMOEBA_SLOW_GROWTH_TIME: u32 = 999;
/// Default time a magic wall stays active once triggered.
pub const DEFAULT_MAGIC_WALL_MILLING_TIME: u32 = 999;
/// Default fraction of the cave the amoeba may fill before turning into boulders.
pub const DEFAULT_AMOEBA_FACTOR: f64 = 0.2273;

/// Kind of content stored in a cave cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameObject {
    /// Open space.
    Empty,
    /// Diggable dirt.
    Dirt,
    /// Destructible brick wall.
    Brick,
    /// Wall that converts falling boulders and diamonds while active.
    MagicWall,
    /// Exit that has not opened yet.
    OutboxClosed,
    /// Exit that is open.
    OutboxBlinking,
    /// Exit that is invisible until opened.
    OutboxHidden,
    /// Indestructible wall.
    Steel,
    /// Roaming creature that explodes into empty space.
    Firefly,
    /// Roaming creature that explodes into diamonds.
    Butterfly,
    /// Resting boulder.
    Boulder,
    /// Boulder that is already falling.
    BoulderFalling,
    /// Resting diamond.
    Diamond,
    /// Diamond that is already falling.
    DiamondFalling,
    /// Entrance where the player appears.
    InboxBlinking,
    /// The player.
    Rockford,
    /// Growing colony.
    Amoeba,
    /// Wall that grows sideways into open space.
    HorizontalExpandingWall,
    /// Wall that grows up and down into open space.
    VerticalExpandingWall,
    /// Stand-in for the player that must not be destroyed.
    Voodoo,
    /// Permeable wall that lets objects seep through.
    Slime,
}

impl GameObject {
    /// Reports whether the object carries a meaningful heading.
    #[must_use]
    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Firefly | Self::Butterfly)
    }
}

/// Initial heading of a cell's object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// The object has no heading.
    Nowhere,
    /// Heading toward decreasing row indices.
    Up,
    /// Heading toward increasing row indices.
    Down,
    /// Heading toward decreasing column indices.
    Left,
    /// Heading toward increasing column indices.
    Right,
}

/// Typed content of a single cave cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    object: GameObject,
    direction: Direction,
}

impl Cell {
    /// Cell holding open space.
    pub const EMPTY: Self = Self::still(GameObject::Empty);

    /// Creates a cell holding an object with the provided heading.
    #[must_use]
    pub const fn new(object: GameObject, direction: Direction) -> Self {
        Self { object, direction }
    }

    /// Creates a cell holding an object without a heading.
    #[must_use]
    pub const fn still(object: GameObject) -> Self {
        Self::new(object, Direction::Nowhere)
    }

    /// Object stored in the cell.
    #[must_use]
    pub const fn object(&self) -> GameObject {
        self.object
    }

    /// Heading of the stored object.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Canonical description of a single cave: grid plus metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cave {
    /// One-based position of the cave in its caveset or level identifier.
    pub index: u32,
    /// Display name of the cave.
    pub name: String,
    /// Short description shown before the cave starts.
    pub description: String,
    /// Author of the caveset the cave belongs to.
    pub author: String,
    /// Web address of the caveset author.
    pub www: String,
    /// Release date of the caveset.
    pub date: String,
    /// Indicates a bonus cave.
    pub intermission: bool,
    /// Duration a triggered magic wall stays active.
    pub magic_wall_milling_time: u32,
    /// Duration the amoeba grows slowly.
    pub amoeba_slow_growth_time: u32,
    /// Score for each diamond until the requirement is met.
    pub diamond_value_normal: u32,
    /// Score for each diamond beyond the requirement.
    pub diamond_value_extra: u32,
    /// Diamonds needed to open the exit.
    pub diamonds_required: u32,
    /// Fraction of the cave the amoeba may fill before turning into boulders.
    pub amoeba_factor: f64,
    /// Probability that an object seeps through slime.
    pub slime_permeability: f64,
    /// Indicates that leaving one edge re-enters at the opposite edge.
    pub wraparound: bool,
    /// Time limit in seconds.
    pub time: u32,
    /// Colors used to draw the cave.
    pub colors: Palette,
    width: u32,
    height: u32,
    map: Vec<Cell>,
}

impl Cave {
    /// Creates an all-empty cave with default metadata.
    #[must_use]
    pub fn new(
        index: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            description: description.into(),
            author: String::new(),
            www: String::new(),
            date: String::new(),
            intermission: false,
            magic_wall_milling_time: DEFAULT_MAGIC_WALL_MILLING_TIME,
            amoeba_slow_growth_time: DEFAULT_AMOEBA_SLOW_GROWTH_TIME,
            diamond_value_normal: 0,
            diamond_value_extra: 0,
            diamonds_required: DEFAULT_DIAMONDS_REQUIRED,
            amoeba_factor: DEFAULT_AMOEBA_FACTOR,
            slime_permeability: 0.0,
            wraparound: false,
            time: DEFAULT_CAVE_TIME,
            colors: Palette::default(),
            width,
            height,
            map: vec![Cell::EMPTY; cell_count(width, height)],
        }
    }

    /// Width of the cave in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the cave in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major cells of the cave.
    #[must_use]
    pub fn map(&self) -> &[Cell] {
        &self.map
    }

    /// Iterator over the rows of the cave, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self.width as usize;
        let map = &self.map;
        (0..self.height as usize).map(move |y| &map[y * width..(y + 1) * width])
    }

    /// Replaces every cell of the cave with the provided row-major grid.
    pub fn replace_map(&mut self, map: Vec<Cell>) -> Result<(), CaveError> {
        let expected = cell_count(self.width, self.height);
        if map.len() != expected {
            return Err(CaveError::precondition(format!(
                "map holds {} cells, a {}x{} cave needs {expected}",
                map.len(),
                self.width,
                self.height
            )));
        }
        self.map = map;
        Ok(())
    }

    /// Returns the cell at the provided coordinates, if inside the cave.
    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> Option<Cell> {
        self.index_of(x, y).map(|index| self.map[index])
    }

    /// Overwrites the cell at the provided coordinates.
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) -> Result<(), CaveError> {
        let index = self.index_of(x, y).ok_or_else(|| {
            CaveError::precondition(format!(
                "cell ({x}, {y}) lies outside the {}x{} cave",
                self.width, self.height
            ))
        })?;
        self.map[index] = cell;
        Ok(())
    }

    /// Reports whether any cell holds the provided object.
    #[must_use]
    pub fn contains(&self, object: GameObject) -> bool {
        self.map.iter().any(|cell| cell.object() == object)
    }

    /// First foreground color resolved against `table`, as `0xRRGGBB`.
    #[must_use]
    pub const fn rgb_fg1(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Foreground1, table)
    }

    /// Second foreground color resolved against `table`.
    #[must_use]
    pub const fn rgb_fg2(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Foreground2, table)
    }

    /// Third foreground color resolved against `table`.
    #[must_use]
    pub const fn rgb_fg3(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Foreground3, table)
    }

    /// Amoeba color resolved against `table`.
    #[must_use]
    pub const fn rgb_amoeba(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Amoeba, table)
    }

    /// Slime color resolved against `table`.
    #[must_use]
    pub const fn rgb_slime(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Slime, table)
    }

    /// Screen color resolved against `table`.
    #[must_use]
    pub const fn rgb_screen(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Screen, table)
    }

    /// Border color resolved against `table`.
    #[must_use]
    pub const fn rgb_border(&self, table: ColorTable) -> u32 {
        self.colors.rgb(PaletteSlot::Border, table)
    }

    /// Grows the cave to the target size, keeping the original content centered.
    ///
    /// The top and left margins receive the smaller half of any odd padding.
    /// New cells are empty. Shrinking is not supported.
    pub fn resize(&mut self, target_width: u32, target_height: u32) -> Result<(), CaveError> {
        if target_width < self.width || target_height < self.height {
            return Err(CaveError::precondition(format!(
                "cannot shrink a {}x{} cave to {target_width}x{target_height}",
                self.width, self.height
            )));
        }

        let width = self.width as usize;
        let target_columns = target_width as usize;
        let left = (target_columns - width) / 2;
        let right = target_columns - width - left;
        let top = (target_height - self.height) as usize / 2;
        let bottom = (target_height - self.height) as usize - top;

        let mut resized = Vec::with_capacity(cell_count(target_width, target_height));
        resized.resize(top * target_columns, Cell::EMPTY);
        for row in self.rows() {
            resized.extend(std::iter::repeat(Cell::EMPTY).take(left));
            resized.extend_from_slice(row);
            resized.extend(std::iter::repeat(Cell::EMPTY).take(right));
        }
        resized.extend(std::iter::repeat(Cell::EMPTY).take(bottom * target_columns));

        assert_eq!(
            resized.len(),
            cell_count(target_width, target_height),
            "resized map must cover the target grid"
        );
        self.width = target_width;
        self.height = target_height;
        self.map = resized;
        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
