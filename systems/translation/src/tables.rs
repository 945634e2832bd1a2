//! Static object tables of the binary and structured cave formats.

use std::{collections::HashMap, hash::Hash, sync::OnceLock};

use boulder_caves_core::{Cell, Direction, GameObject};

const fn facing(object: GameObject, direction: Direction) -> Cell {
    Cell::new(object, direction)
}

const fn still(object: GameObject) -> Cell {
    Cell::still(object)
}

/// Object codes of the built-in binary records.
pub(crate) const BINARY_CODES: [(u8, Cell); 22] = [
    (0x00, still(GameObject::Empty)),
    (0x01, still(GameObject::Dirt)),
    (0x02, still(GameObject::Brick)),
    (0x03, still(GameObject::MagicWall)),
    (0x04, still(GameObject::OutboxClosed)),
    (0x05, still(GameObject::OutboxBlinking)),
    (0x07, still(GameObject::Steel)),
    (0x08, facing(GameObject::Firefly, Direction::Left)),
    (0x09, facing(GameObject::Firefly, Direction::Up)),
    (0x0A, facing(GameObject::Firefly, Direction::Right)),
    (0x0B, facing(GameObject::Firefly, Direction::Down)),
    (0x10, still(GameObject::Boulder)),
    (0x12, still(GameObject::BoulderFalling)),
    (0x14, still(GameObject::Diamond)),
    (0x16, still(GameObject::DiamondFalling)),
    (0x25, still(GameObject::InboxBlinking)),
    (0x30, facing(GameObject::Butterfly, Direction::Down)),
    (0x31, facing(GameObject::Butterfly, Direction::Left)),
    (0x32, facing(GameObject::Butterfly, Direction::Up)),
    (0x33, facing(GameObject::Butterfly, Direction::Right)),
    (0x38, still(GameObject::Rockford)),
    (0x3A, still(GameObject::Amoeba)),
];

/// Map symbols of the structured text format.
pub(crate) const MAP_SYMBOLS: [(char, Cell); 23] = [
    ('.', still(GameObject::Dirt)),
    (' ', still(GameObject::Empty)),
    ('w', still(GameObject::Brick)),
    ('M', still(GameObject::MagicWall)),
    ('x', still(GameObject::HorizontalExpandingWall)),
    ('v', still(GameObject::VerticalExpandingWall)),
    ('H', still(GameObject::OutboxHidden)),
    ('X', still(GameObject::OutboxClosed)),
    ('W', still(GameObject::Steel)),
    ('Q', facing(GameObject::Firefly, Direction::Left)),
    ('q', facing(GameObject::Firefly, Direction::Right)),
    ('O', facing(GameObject::Firefly, Direction::Up)),
    ('o', facing(GameObject::Firefly, Direction::Down)),
    ('c', facing(GameObject::Butterfly, Direction::Down)),
    ('C', facing(GameObject::Butterfly, Direction::Left)),
    ('b', facing(GameObject::Butterfly, Direction::Up)),
    ('B', facing(GameObject::Butterfly, Direction::Right)),
    ('r', still(GameObject::Boulder)),
    ('d', still(GameObject::Diamond)),
    ('P', still(GameObject::InboxBlinking)),
    ('a', still(GameObject::Amoeba)),
    ('F', still(GameObject::Voodoo)),
    ('s', still(GameObject::Slime)),
];

/// Forward and reverse lookups built from one static table.
#[derive(Debug)]
pub(crate) struct Bijection<K> {
    forward: HashMap<K, Cell>,
    reverse: HashMap<Cell, K>,
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> Bijection<K> {
    /// Indexes `entries`, panicking when two entries share a key or a cell.
    ///
    /// The tables are compiled in, so a collision means the static data
    /// itself is corrupt.
    fn build(table: &str, entries: &[(K, Cell)]) -> Self {
        let mut forward = HashMap::with_capacity(entries.len());
        let mut reverse = HashMap::with_capacity(entries.len());
        for &(key, cell) in entries {
            if let Some(previous) = forward.insert(key, cell) {
                panic!("{table} table maps {key:?} to both {previous:?} and {cell:?}");
            }
            if let Some(previous) = reverse.insert(cell, key) {
                panic!("{table} table maps {cell:?} from both {previous:?} and {key:?}");
            }
        }
        Self { forward, reverse }
    }

    pub(crate) fn cell(&self, key: K) -> Option<Cell> {
        self.forward.get(&key).copied()
    }

    pub(crate) fn key(&self, cell: Cell) -> Option<K> {
        self.reverse.get(&cell).copied()
    }
}

pub(crate) fn binary() -> &'static Bijection<u8> {
    static TABLE: OnceLock<Bijection<u8>> = OnceLock::new();
    TABLE.get_or_init(|| Bijection::build("object code", &BINARY_CODES))
}

pub(crate) fn symbols() -> &'static Bijection<char> {
    static TABLE: OnceLock<Bijection<char>> = OnceLock::new();
    TABLE.get_or_init(|| Bijection::build("map symbol", &MAP_SYMBOLS))
}
