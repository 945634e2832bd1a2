//! Fixed-offset record header and the instruction stream that follows it.

use boulder_caves_core::{CaveError, FormatError};
use log::trace;

/// Number of header bytes preceding the instruction stream.
pub const HEADER_LEN: usize = 0x20;
/// Byte that terminates the instruction stream.
pub const END_OF_STREAM: u8 = 0xFF;
/// Rows reserved for the score display in encoded y coordinates.
pub const SCORE_ROWS: i32 = 2;

const OBJECT_MASK: u8 = 0x3F;
const KIND_SHIFT: u8 = 6;

/// Borrowed view over one raw cave record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawCave<'a> {
    bytes: &'a [u8],
}

impl<'a> RawCave<'a> {
    /// Wraps a record, checking that the full header is present.
    pub fn new(bytes: &'a [u8]) -> Result<Self, CaveError> {
        if bytes.len() < HEADER_LEN {
            return Err(FormatError::TruncatedHeader {
                len: bytes.len(),
                required: HEADER_LEN,
            }
            .into());
        }
        Ok(Self { bytes })
    }

    /// Level identifier.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.bytes[0x00]
    }

    /// Shared magic-wall milling and amoeba slow-growth time.
    #[must_use]
    pub fn magic_wall_time(&self) -> u8 {
        self.bytes[0x01]
    }

    /// Score for each diamond until the requirement is met.
    #[must_use]
    pub fn diamond_value_normal(&self) -> u8 {
        self.bytes[0x02]
    }

    /// Score for each diamond beyond the requirement.
    #[must_use]
    pub fn diamond_value_extra(&self) -> u8 {
        self.bytes[0x03]
    }

    /// Seed for the background fill.
    #[must_use]
    pub fn random_seed(&self) -> u8 {
        self.bytes[0x04]
    }

    /// Diamonds needed to open the exit.
    #[must_use]
    pub fn diamonds_required(&self) -> u8 {
        self.bytes[0x09]
    }

    /// Time limit in seconds.
    #[must_use]
    pub fn time(&self) -> u8 {
        self.bytes[0x0E]
    }

    /// Color indices for foreground 1, foreground 2 and the amoeba.
    #[must_use]
    pub fn palette_indices(&self) -> [u8; 3] {
        [self.bytes[0x13], self.bytes[0x14], self.bytes[0x15]]
    }

    /// Object code candidates for the background fill, in priority order.
    #[must_use]
    pub fn random_objects(&self) -> [u8; 4] {
        [
            self.bytes[0x18],
            self.bytes[0x19],
            self.bytes[0x1A],
            self.bytes[0x1B],
        ]
    }

    /// Probabilities paired with [`RawCave::random_objects`].
    #[must_use]
    pub fn random_probabilities(&self) -> [u8; 4] {
        [
            self.bytes[0x1C],
            self.bytes[0x1D],
            self.bytes[0x1E],
            self.bytes[0x1F],
        ]
    }

    /// Encoded drawing instructions.
    #[must_use]
    pub fn instruction_stream(&self) -> &'a [u8] {
        &self.bytes[HEADER_LEN..]
    }
}

/// Shape drawn by one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    /// Single cell.
    Point,
    /// Straight line in one of eight directions.
    Line,
    /// Rectangle outline with a painted interior.
    FilledRectangle,
    /// Rectangle outline only.
    Rectangle,
}

impl InstructionKind {
    /// Total encoded size of an instruction of this kind, selector byte included.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Point => 3,
            Self::Line | Self::Rectangle => 5,
            Self::FilledRectangle => 6,
        }
    }
}

/// One decoded drawing instruction with its y coordinate already shifted
/// past the score rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Sets a single cell.
    Point {
        /// Object code to draw.
        object: u8,
        /// Column of the cell.
        x: i32,
        /// Row of the cell.
        y: i32,
    },
    /// Draws a line.
    Line {
        /// Object code to draw.
        object: u8,
        /// Starting column.
        x: i32,
        /// Starting row.
        y: i32,
        /// Number of cells drawn.
        length: u8,
        /// Index into the eight encoded directions.
        direction: u8,
    },
    /// Draws a rectangle outline and paints its interior.
    FilledRectangle {
        /// Object code of the outline.
        object: u8,
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width including the outline.
        width: u8,
        /// Height including the outline.
        height: u8,
        /// Object code of the interior.
        fill: u8,
    },
    /// Draws a rectangle outline.
    Rectangle {
        /// Object code of the outline.
        object: u8,
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width including the outline.
        width: u8,
        /// Height including the outline.
        height: u8,
    },
}

impl Instruction {
    /// Shape drawn by the instruction.
    #[must_use]
    pub const fn kind(&self) -> InstructionKind {
        match self {
            Self::Point { .. } => InstructionKind::Point,
            Self::Line { .. } => InstructionKind::Line,
            Self::FilledRectangle { .. } => InstructionKind::FilledRectangle,
            Self::Rectangle { .. } => InstructionKind::Rectangle,
        }
    }
}

type Parser = fn(u8, &[u8]) -> Result<Instruction, CaveError>;

/// Decoders indexed by the kind selector in the top two bits.
const DECODERS: [(InstructionKind, Parser); 4] = [
    (InstructionKind::Point, parse_point),
    (InstructionKind::Line, parse_line),
    (InstructionKind::FilledRectangle, parse_filled_rectangle),
    (InstructionKind::Rectangle, parse_rectangle),
];

/// Decodes an instruction stream up to its terminator or the end of input.
pub fn decode_instructions(stream: &[u8]) -> Result<Vec<Instruction>, CaveError> {
    let mut instructions = Vec::new();
    let mut offset = 0;

    while let Some(&selector) = stream.get(offset) {
        if selector == END_OF_STREAM {
            break;
        }

        let (kind, parse) = decoder_for(selector >> KIND_SHIFT, offset)?;

        let required = kind.encoded_len();
        let available = stream.len() - offset;
        if available < required {
            return Err(FormatError::TruncatedInstruction {
                offset,
                required,
                available,
            }
            .into());
        }

        let instruction = parse(selector & OBJECT_MASK, &stream[offset..offset + required])?;
        trace!("offset {offset:#04x}: {instruction:?}");
        instructions.push(instruction);
        offset += required;
    }

    Ok(instructions)
}

fn decoder_for(kind: u8, offset: usize) -> Result<(InstructionKind, Parser), CaveError> {
    DECODERS
        .get(usize::from(kind))
        .copied()
        .ok_or_else(|| FormatError::UnknownInstructionKind { offset, kind }.into())
}

fn position(bytes: &[u8]) -> (i32, i32) {
    (i32::from(bytes[1]), i32::from(bytes[2]) - SCORE_ROWS)
}

fn parse_point(object: u8, bytes: &[u8]) -> Result<Instruction, CaveError> {
    let (x, y) = position(bytes);
    Ok(Instruction::Point { object, x, y })
}

fn parse_line(object: u8, bytes: &[u8]) -> Result<Instruction, CaveError> {
    let (x, y) = position(bytes);
    let direction = bytes[4];
    if usize::from(direction) >= crate::draw::LINE_DIRECTIONS.len() {
        return Err(FormatError::InvalidDirection { direction }.into());
    }
    Ok(Instruction::Line {
        object,
        x,
        y,
        length: bytes[3],
        direction,
    })
}

fn parse_filled_rectangle(object: u8, bytes: &[u8]) -> Result<Instruction, CaveError> {
    let (x, y) = position(bytes);
    Ok(Instruction::FilledRectangle {
        object,
        x,
        y,
        width: bytes[3],
        height: bytes[4],
        fill: bytes[5],
    })
}

fn parse_rectangle(object: u8, bytes: &[u8]) -> Result<Instruction, CaveError> {
    let (x, y) = position(bytes);
    Ok(Instruction::Rectangle {
        object,
        x,
        y,
        width: bytes[3],
        height: bytes[4],
    })
}
