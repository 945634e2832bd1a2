#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic generation of classic Boulder Dash caves.
//!
//! A built-in cave record is a 32-byte header followed by a compact stream of
//! drawing instructions. Generation first scatters background objects using
//! the original two-seed generator, encloses the map in steel, and then
//! replays every instruction on top. The output is a map of raw object codes
//! that the translation system turns into typed cells.

mod draw;
mod instruction;
mod interpreter;
mod rng;

pub use draw::{CodeMap, EAST, LINE_DIRECTIONS, SOUTH};
pub use instruction::{
    decode_instructions, Instruction, InstructionKind, RawCave, END_OF_STREAM, HEADER_LEN,
    SCORE_ROWS,
};
pub use interpreter::{
    build_code_map, execute, random_fill, RandomFill, CAVE_HEIGHT, CAVE_WIDTH, DIRT_CODE,
    STEEL_CODE,
};
pub use rng::{checked_seeds, step, BdRandom};
