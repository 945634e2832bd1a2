//! Error taxonomy shared by every stage of cave decoding.

use thiserror::Error;

use crate::{Direction, GameObject};

/// Failure raised while producing a cave.
///
/// A cave is either fully decoded or not produced at all, so every variant
/// aborts the request that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CaveError {
    /// A caller handed in arguments outside the documented domain.
    #[error("precondition violated: {reason}")]
    PreconditionViolation {
        /// Human readable description of the violated precondition.
        reason: String,
    },
    /// The cave data itself is malformed.
    #[error("malformed cave data: {0}")]
    Format(#[from] FormatError),
    /// The requested cave index does not exist in the caveset.
    #[error("cave index {index} is outside 1..={count}")]
    Bounds {
        /// Index that was requested, counting from one.
        index: usize,
        /// Number of caves available in the caveset.
        count: usize,
    },
}

impl CaveError {
    /// Builds a [`CaveError::PreconditionViolation`] from the provided reason.
    #[must_use]
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            reason: reason.into(),
        }
    }
}

/// Specific reasons a cave record or structured cave failed to decode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The fixed-offset header of a binary record is incomplete.
    #[error("record holds {len} bytes but the header needs {required}")]
    TruncatedHeader {
        /// Number of bytes present in the record.
        len: usize,
        /// Number of bytes the header occupies.
        required: usize,
    },
    /// An instruction ran past the end of the instruction stream.
    #[error("instruction at offset {offset} needs {required} bytes, only {available} remain")]
    TruncatedInstruction {
        /// Offset of the instruction's first byte within the stream.
        offset: usize,
        /// Bytes the instruction kind consumes.
        required: usize,
        /// Bytes left in the stream from `offset`.
        available: usize,
    },
    /// The kind selector of an instruction byte is not recognised.
    #[error("instruction at offset {offset} has unknown kind {kind}")]
    UnknownInstructionKind {
        /// Offset of the instruction's first byte within the stream.
        offset: usize,
        /// Kind value that failed to decode.
        kind: u8,
    },
    /// A line instruction used a direction index outside `0..=7`.
    #[error("line direction {direction} is not in 0..=7")]
    InvalidDirection {
        /// Direction byte found in the stream.
        direction: u8,
    },
    /// A drawing operation addressed a cell outside the map.
    #[error("cell ({x}, {y}) lies outside the {width}x{height} map")]
    CoordinateOutOfRange {
        /// Column that was addressed.
        x: i64,
        /// Row that was addressed.
        y: i64,
        /// Width of the map being drawn.
        width: u32,
        /// Height of the map being drawn.
        height: u32,
    },
    /// A binary object code has no entry in the code table.
    #[error("object code {code:#04x} has no table entry")]
    UnknownObjectCode {
        /// Offending object code.
        code: u8,
    },
    /// A structured map symbol has no entry in the symbol table.
    #[error("map symbol {symbol:?} has no table entry")]
    UnknownSymbol {
        /// Offending map symbol.
        symbol: char,
    },
    /// A cell cannot be written to the structured format.
    #[error("{object:?} facing {direction:?} has no map symbol")]
    NoSymbolForCell {
        /// Object stored in the cell.
        object: GameObject,
        /// Direction stored in the cell.
        direction: Direction,
    },
    /// Structured map lines do not form the declared grid.
    #[error("map lines do not form a {width}x{height} grid (found {rows} rows)")]
    MapShapeMismatch {
        /// Declared width of the cave.
        width: u32,
        /// Declared height of the cave.
        height: u32,
        /// Number of map lines supplied.
        rows: usize,
    },
    /// A demo script byte does not encode a known movement.
    #[error("demo byte {byte:#04x} at offset {offset} has no movement")]
    InvalidDemoStep {
        /// Offset of the byte within the script.
        offset: usize,
        /// Offending script byte.
        byte: u8,
    },
    /// A palette value is neither a valid index nor an `#rrggbb` literal.
    #[error("invalid palette color {value:?}")]
    InvalidColor {
        /// Text of the rejected color value.
        value: String,
    },
}
