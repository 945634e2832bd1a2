//! Drawing primitives over a flat buffer of raw object codes.

use boulder_caves_core::{CaveError, FormatError};

/// Unit steps for line directions N, NE, E, SE, S, SW, W, NW, in encoded order.
pub const LINE_DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Encoded direction that steps one column to the right.
pub const EAST: u8 = 2;
/// Encoded direction that steps one row down.
pub const SOUTH: u8 = 4;

/// Row-major buffer of raw object codes under construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeMap {
    width: u32,
    height: u32,
    codes: Vec<u8>,
}

impl CodeMap {
    /// Creates a map of the given size filled with code zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            codes: vec![0; width as usize * height as usize],
        }
    }

    /// Width of the map in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the map in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major object codes.
    #[must_use]
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Consumes the map, yielding the row-major object codes.
    #[must_use]
    pub fn into_codes(self) -> Vec<u8> {
        self.codes
    }

    /// Returns the code stored at the provided coordinates, if inside the map.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index_of(x, y).map(|index| self.codes[index])
    }

    /// Overwrites a single cell.
    pub fn set(&mut self, x: i32, y: i32, code: u8) -> Result<(), CaveError> {
        let index = self
            .index_of(x, y)
            .ok_or(FormatError::CoordinateOutOfRange {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            })?;
        self.codes[index] = code;
        Ok(())
    }

    /// Draws `length` cells from `(x, y)`, stepping along an encoded direction.
    pub fn draw_line(
        &mut self,
        code: u8,
        x: i32,
        y: i32,
        length: u32,
        direction: u8,
    ) -> Result<(), CaveError> {
        let (dx, dy) = *LINE_DIRECTIONS
            .get(usize::from(direction))
            .ok_or(FormatError::InvalidDirection { direction })?;
        let (mut x, mut y) = (x, y);
        for _ in 0..length {
            self.set(x, y, code)?;
            x += dx;
            y += dy;
        }
        Ok(())
    }

    /// Draws a rectangle outline and, when `fill` is given, paints its interior.
    ///
    /// The side edges start one row below the top edge and are two cells
    /// shorter than the rectangle, so corners are drawn once.
    pub fn draw_rectangle(
        &mut self,
        code: u8,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Option<u8>,
    ) -> Result<(), CaveError> {
        let right = x + width as i32 - 1;
        let bottom = y + height as i32 - 1;
        let inner_height = height.saturating_sub(2);

        self.draw_line(code, x, y, width, EAST)?;
        self.draw_line(code, x, bottom, width, EAST)?;
        self.draw_line(code, x, y + 1, inner_height, SOUTH)?;
        self.draw_line(code, right, y + 1, inner_height, SOUTH)?;

        if let Some(fill) = fill {
            let inner_width = width.saturating_sub(2);
            for row in (y + 1)..(y + 1 + inner_height as i32) {
                self.draw_line(fill, x + 1, row, inner_width, EAST)?;
            }
        }
        Ok(())
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let column = u32::try_from(x).ok()?;
        let row = u32::try_from(y).ok()?;
        if column < self.width && row < self.height {
            Some(row as usize * self.width as usize + column as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEEL: u8 = 0x07;
    const DIRT: u8 = 0x01;

    #[test]
    fn filled_rectangle_sets_outline_and_interior() {
        let mut map = CodeMap::new(10, 10);
        map.draw_rectangle(STEEL, 2, 3, 5, 4, Some(DIRT))
            .expect("rectangle fits");

        let mut outline = 0;
        let mut interior = 0;
        for y in 0..10 {
            for x in 0..10 {
                let code = map.get(x, y).expect("inside");
                let in_rect = (2..7).contains(&x) && (3..7).contains(&y);
                let on_edge = in_rect && (x == 2 || x == 6 || y == 3 || y == 6);
                if on_edge {
                    assert_eq!(code, STEEL, "outline at ({x}, {y})");
                    outline += 1;
                } else if in_rect {
                    assert_eq!(code, DIRT, "interior at ({x}, {y})");
                    interior += 1;
                } else {
                    assert_eq!(code, 0, "untouched at ({x}, {y})");
                }
            }
        }
        assert_eq!(outline, 14);
        assert_eq!(interior, 3 * 2);
    }

    #[test]
    fn outline_rectangle_leaves_interior_alone() {
        let mut map = CodeMap::new(6, 6);
        map.draw_rectangle(STEEL, 1, 1, 4, 4, None).expect("fits");
        assert_eq!(map.get(2, 2), Some(0));
        assert_eq!(map.get(3, 3), Some(0));
        assert_eq!(map.get(4, 4), Some(STEEL));
    }

    #[test]
    fn degenerate_rectangle_has_no_interior() {
        let mut map = CodeMap::new(6, 6);
        map.draw_rectangle(STEEL, 1, 1, 1, 1, Some(DIRT))
            .expect("fits");
        assert_eq!(map.codes().iter().filter(|&&code| code == DIRT).count(), 0);
        assert_eq!(map.get(1, 1), Some(STEEL));
    }

    #[test]
    fn lines_follow_all_eight_directions() {
        for (direction, (dx, dy)) in LINE_DIRECTIONS.iter().enumerate() {
            let mut map = CodeMap::new(7, 7);
            map.draw_line(9, 3, 3, 3, direction as u8).expect("fits");
            for step in 0..3 {
                assert_eq!(map.get(3 + dx * step, 3 + dy * step), Some(9));
            }
            assert_eq!(map.codes().iter().filter(|&&code| code == 9).count(), 3);
        }
    }

    #[test]
    fn drawing_outside_the_map_is_a_format_error() {
        let mut map = CodeMap::new(4, 4);
        assert_eq!(
            map.draw_line(1, 2, 0, 3, 0),
            Err(CaveError::Format(FormatError::CoordinateOutOfRange {
                x: 2,
                y: -1,
                width: 4,
                height: 4,
            }))
        );
        assert!(map.set(4, 0, 1).is_err());
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let mut map = CodeMap::new(4, 4);
        assert_eq!(
            map.draw_line(1, 0, 0, 1, 8),
            Err(CaveError::Format(FormatError::InvalidDirection { direction: 8 }))
        );
    }
}
