#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Translation between raw cave encodings and typed cells.
//!
//! Binary records produce a map of 6-bit object codes and structured caves
//! carry one text symbol per cell. Both tables are injective in each
//! direction, which is verified once on first use.

mod tables;

use boulder_caves_core::{Cave, CaveError, Cell, FormatError, GameObject};
use boulder_caves_system_generation::CodeMap;
use log::debug;

/// Looks up the cell encoded by a binary object code.
pub fn cell_for_code(code: u8) -> Result<Cell, CaveError> {
    tables::binary()
        .cell(code)
        .ok_or_else(|| FormatError::UnknownObjectCode { code }.into())
}

/// Looks up the binary object code of a cell, if the binary format has one.
#[must_use]
pub fn code_for_cell(cell: Cell) -> Option<u8> {
    tables::binary().key(cell)
}

/// Looks up the cell encoded by a structured map symbol.
pub fn cell_for_symbol(symbol: char) -> Result<Cell, CaveError> {
    tables::symbols()
        .cell(symbol)
        .ok_or_else(|| FormatError::UnknownSymbol { symbol }.into())
}

/// Looks up the structured map symbol of a cell.
pub fn symbol_for_cell(cell: Cell) -> Result<char, CaveError> {
    tables::symbols().key(cell).ok_or_else(|| {
        FormatError::NoSymbolForCell {
            object: cell.object(),
            direction: cell.direction(),
        }
        .into()
    })
}

/// Converts every code of a generated map into a typed cell.
pub fn translate_code_map(map: &CodeMap) -> Result<Vec<Cell>, CaveError> {
    map.codes().iter().map(|&code| cell_for_code(code)).collect()
}

/// Converts structured map lines into typed cells.
///
/// The lines must form exactly `height` rows of `width` symbols.
pub fn translate_symbol_rows<S: AsRef<str>>(
    rows: &[S],
    width: u32,
    height: u32,
) -> Result<Vec<Cell>, CaveError> {
    let mismatch = || FormatError::MapShapeMismatch {
        width,
        height,
        rows: rows.len(),
    };
    if rows.len() != height as usize {
        return Err(mismatch().into());
    }

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for row in rows {
        let row = row.as_ref();
        if row.chars().count() != width as usize {
            return Err(mismatch().into());
        }
        for symbol in row.chars() {
            cells.push(cell_for_symbol(symbol)?);
        }
    }
    Ok(cells)
}

/// Renders a cave as structured map lines, top row first.
pub fn symbol_rows(cave: &Cave) -> Result<Vec<String>, CaveError> {
    cave.rows()
        .map(|row| {
            row.iter()
                .map(|&cell| symbol_for_cell(cell))
                .collect::<Result<String, _>>()
        })
        .collect()
}

/// Gives the third foreground color the amoeba color when the cave holds a
/// colony. Returns whether the palette changed.
///
/// Applies to caves decoded from binary records only; structured caves set
/// their third foreground color explicitly.
pub fn apply_colony_palette(cave: &mut Cave) -> bool {
    if !cave.contains(GameObject::Amoeba) {
        return false;
    }
    debug!(
        "cave {} holds an amoeba colony, fg3 takes color {}",
        cave.index, cave.colors.amoeba
    );
    cave.colors.fg3 = cave.colors.amoeba;
    true
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use boulder_caves_core::{ColorSlot, Direction};

    use super::*;
    use crate::tables::{BINARY_CODES, MAP_SYMBOLS};

    #[test]
    fn binary_table_is_injective() {
        let codes: HashSet<u8> = BINARY_CODES.iter().map(|&(code, _)| code).collect();
        let cells: HashSet<Cell> = BINARY_CODES.iter().map(|&(_, cell)| cell).collect();
        assert_eq!(codes.len(), BINARY_CODES.len());
        assert_eq!(cells.len(), BINARY_CODES.len());

        for &(code, cell) in &BINARY_CODES {
            assert_eq!(cell_for_code(code), Ok(cell));
            assert_eq!(code_for_cell(cell), Some(code));
        }
    }

    #[test]
    fn symbol_table_is_injective() {
        let symbols: HashSet<char> = MAP_SYMBOLS.iter().map(|&(symbol, _)| symbol).collect();
        let cells: HashSet<Cell> = MAP_SYMBOLS.iter().map(|&(_, cell)| cell).collect();
        assert_eq!(symbols.len(), MAP_SYMBOLS.len());
        assert_eq!(cells.len(), MAP_SYMBOLS.len());

        for &(symbol, cell) in &MAP_SYMBOLS {
            assert_eq!(cell_for_symbol(symbol), Ok(cell));
            assert_eq!(symbol_for_cell(cell), Ok(symbol));
        }
    }

    #[test]
    fn directional_codes_carry_headings() {
        assert_eq!(
            cell_for_code(0x0B),
            Ok(Cell::new(GameObject::Firefly, Direction::Down))
        );
        assert_eq!(
            cell_for_code(0x31),
            Ok(Cell::new(GameObject::Butterfly, Direction::Left))
        );
        assert_eq!(
            cell_for_symbol('q'),
            Ok(Cell::new(GameObject::Firefly, Direction::Right))
        );
    }

    #[test]
    fn unknown_entries_are_format_errors() {
        assert_eq!(
            cell_for_code(0x06),
            Err(CaveError::Format(FormatError::UnknownObjectCode { code: 0x06 }))
        );
        assert_eq!(
            cell_for_symbol('#'),
            Err(CaveError::Format(FormatError::UnknownSymbol { symbol: '#' }))
        );
        assert_eq!(
            symbol_for_cell(Cell::still(GameObject::Rockford)),
            Err(CaveError::Format(FormatError::NoSymbolForCell {
                object: GameObject::Rockford,
                direction: Direction::Nowhere,
            }))
        );
    }

    #[test]
    fn symbol_rows_must_match_declared_shape() {
        let rows = ["WWW", "W.W"];
        assert!(translate_symbol_rows(&rows, 3, 2).is_ok());
        assert_eq!(
            translate_symbol_rows(&rows, 3, 3),
            Err(CaveError::Format(FormatError::MapShapeMismatch {
                width: 3,
                height: 3,
                rows: 2,
            }))
        );
        assert!(translate_symbol_rows(&["WWW", "W."], 3, 2).is_err());
        assert!(translate_symbol_rows(&["WWW", "W.WW"], 3, 2).is_err());
    }

    #[test]
    fn row_length_is_checked_before_symbols() {
        assert_eq!(
            translate_symbol_rows(&["WWW", "W.W?"], 3, 2),
            Err(CaveError::Format(FormatError::MapShapeMismatch {
                width: 3,
                height: 2,
                rows: 2,
            }))
        );
        assert_eq!(
            translate_symbol_rows(&["WWW", "W?W"], 3, 2),
            Err(CaveError::Format(FormatError::UnknownSymbol { symbol: '?' }))
        );
    }

    #[test]
    fn colony_overrides_third_foreground() {
        let mut cave = Cave::new(1, "", "", 2, 1);
        cave.colors.amoeba = ColorSlot::indexed(13).expect("valid index");
        assert!(!apply_colony_palette(&mut cave));
        assert_eq!(cave.colors.fg3, ColorSlot::indexed(1).expect("valid index"));

        cave.set_cell(1, 0, Cell::still(GameObject::Amoeba))
            .expect("in range");
        assert!(apply_colony_palette(&mut cave));
        assert_eq!(cave.colors.fg3, cave.colors.amoeba);
    }
}
