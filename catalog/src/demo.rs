//! Recorded player input for the built-in demonstration.

use boulder_caves_core::{CaveError, Direction, FormatError};
use serde::{Deserialize, Serialize};

/// Byte that ends a demo script.
pub const DEMO_TERMINATOR: u8 = 0x00;

/// One movement of the recorded player, held for `repeat` turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemoStep {
    /// Movement to apply, [`Direction::Nowhere`] for standing still.
    pub direction: Direction,
    /// Number of consecutive turns the movement is applied.
    pub repeat: u8,
}

/// Decodes a demo script up to its terminator or the end of input.
pub fn decode_demo(script: &[u8]) -> Result<Vec<DemoStep>, CaveError> {
    script
        .iter()
        .take_while(|&&byte| byte != DEMO_TERMINATOR)
        .enumerate()
        .map(|(offset, &byte)| {
            let direction = match byte & 0x0F {
                0x7 => Direction::Right,
                0xB => Direction::Left,
                0xD => Direction::Down,
                0xE => Direction::Up,
                0xF => Direction::Nowhere,
                _ => return Err(FormatError::InvalidDemoStep { offset, byte }.into()),
            };
            Ok(DemoStep {
                direction,
                repeat: byte >> 4,
            })
        })
        .collect()
}
