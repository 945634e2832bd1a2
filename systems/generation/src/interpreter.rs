//! Two-phase cave builder: randomized background, then explicit instructions.

use boulder_caves_core::CaveError;
use log::{debug, trace};

use crate::{
    draw::CodeMap,
    instruction::{decode_instructions, Instruction, RawCave},
    rng::BdRandom,
};

/// Width of every built-in cave, intermissions included.
pub const CAVE_WIDTH: u32 = 40;
/// Height of every built-in cave, intermissions included.
pub const CAVE_HEIGHT: u32 = 22;
/// Raw object code of dirt, the default background object.
pub const DIRT_CODE: u8 = 0x01;
/// Raw object code of the indestructible wall drawn around the cave.
pub const STEEL_CODE: u8 = 0x07;

/// Parameters of the randomized background fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomFill {
    /// Second generator seed; the first always starts at zero.
    pub seed: u8,
    /// Candidate object codes in priority order.
    pub objects: [u8; 4],
    /// Probabilities paired with `objects`.
    pub probabilities: [u8; 4],
}

impl RandomFill {
    /// Extracts the fill parameters from a record header.
    #[must_use]
    pub fn from_record(record: &RawCave<'_>) -> Self {
        Self {
            seed: record.random_seed(),
            objects: record.random_objects(),
            probabilities: record.random_probabilities(),
        }
    }

    /// Picks the background object for one generator output byte.
    ///
    /// Every pair whose probability exceeds `seed0` replaces the previous
    /// choice, so the last matching pair wins.
    #[must_use]
    pub fn choose(&self, seed0: u8) -> u8 {
        self.objects
            .iter()
            .zip(self.probabilities)
            .fold(DIRT_CODE, |chosen, (&object, probability)| {
                if seed0 < probability {
                    object
                } else {
                    chosen
                }
            })
    }
}

/// Fills every row but the first and last with random objects, then draws
/// a steel border around the whole map.
pub fn random_fill(map: &mut CodeMap, fill: &RandomFill) -> Result<(), CaveError> {
    let mut rng = BdRandom::new(0, fill.seed);
    let last_row = map.height().saturating_sub(1) as i32;
    let width = map.width() as i32;

    for y in 1..last_row {
        for x in 0..width {
            let (seed0, _) = rng.advance();
            map.set(x, y, fill.choose(seed0))?;
        }
    }
    trace!(
        "background fill from seed {:#04x} ended at seeds {:?}",
        fill.seed,
        rng.seeds()
    );

    map.draw_rectangle(STEEL_CODE, 0, 0, map.width(), map.height(), None)
}

/// Applies a single decoded instruction to the map.
pub fn execute(map: &mut CodeMap, instruction: &Instruction) -> Result<(), CaveError> {
    match *instruction {
        Instruction::Point { object, x, y } => map.set(x, y, object),
        Instruction::Line {
            object,
            x,
            y,
            length,
            direction,
        } => map.draw_line(object, x, y, u32::from(length), direction),
        Instruction::FilledRectangle {
            object,
            x,
            y,
            width,
            height,
            fill,
        } => map.draw_rectangle(
            object,
            x,
            y,
            u32::from(width),
            u32::from(height),
            Some(fill),
        ),
        Instruction::Rectangle {
            object,
            x,
            y,
            width,
            height,
        } => map.draw_rectangle(object, x, y, u32::from(width), u32::from(height), None),
    }
}

/// Builds the raw object-code map of a built-in cave record.
pub fn build_code_map(record: &RawCave<'_>) -> Result<CodeMap, CaveError> {
    let instructions = decode_instructions(record.instruction_stream())?;
    let mut map = CodeMap::new(CAVE_WIDTH, CAVE_HEIGHT);

    random_fill(&mut map, &RandomFill::from_record(record))?;
    for instruction in &instructions {
        execute(&mut map, instruction)?;
    }

    debug!(
        "built level {:#04x}: {} instructions over a {}x{} map",
        record.level(),
        instructions.len(),
        map.width(),
        map.height()
    );
    Ok(map)
}
