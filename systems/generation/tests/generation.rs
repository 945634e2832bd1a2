use std::collections::BTreeMap;

use boulder_caves_core::{CaveError, FormatError};
use boulder_caves_system_generation::{
    build_code_map, decode_instructions, CodeMap, Instruction, RawCave, CAVE_HEIGHT, CAVE_WIDTH,
    STEEL_CODE,
};
use sha2::{Digest, Sha256};

const CAVE_A: [u8; 49] = [
    0x01, 0x14, 0x0A, 0x0F, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x96, 0x6E,
    0x46, 0x28, 0x1E, 0x08, 0x0B, 0x09, 0xD4, 0x20, 0x00, 0x10, 0x14, 0x00, 0x3C, 0x32, 0x09, 0x00,
    0x42, 0x01, 0x09, 0x1E, 0x02, 0x42, 0x09, 0x10, 0x1E, 0x02, 0x25, 0x03, 0x04, 0x04, 0x26, 0x12,
    0xFF,
];

fn cave_a_map() -> CodeMap {
    let record = RawCave::new(&CAVE_A).expect("header present");
    build_code_map(&record).expect("cave A builds")
}

#[test]
fn cave_a_header_fields() {
    let record = RawCave::new(&CAVE_A).expect("header present");
    assert_eq!(record.level(), 1);
    assert_eq!(record.magic_wall_time(), 20);
    assert_eq!(record.diamond_value_normal(), 10);
    assert_eq!(record.diamond_value_extra(), 15);
    assert_eq!(record.random_seed(), 0x0A);
    assert_eq!(record.diamonds_required(), 12);
    assert_eq!(record.time(), 150);
    assert_eq!(record.palette_indices(), [0x08, 0x0B, 0x09]);
}

#[test]
fn cave_a_instruction_stream_decodes() {
    let record = RawCave::new(&CAVE_A).expect("header present");
    let instructions = decode_instructions(record.instruction_stream()).expect("stream decodes");
    assert_eq!(
        instructions,
        vec![
            Instruction::Line {
                object: 0x02,
                x: 1,
                y: 7,
                length: 30,
                direction: 2,
            },
            Instruction::Line {
                object: 0x02,
                x: 9,
                y: 14,
                length: 30,
                direction: 2,
            },
            Instruction::Point {
                object: 0x25,
                x: 3,
                y: 2,
            },
            Instruction::Point {
                object: 0x04,
                x: 38,
                y: 16,
            },
        ]
    );
}

#[test]
fn cave_a_regenerates_identically() {
    let first = cave_a_map();
    let second = cave_a_map();
    assert_eq!(first, second, "generation diverged between runs");

    assert_eq!(first.width(), CAVE_WIDTH);
    assert_eq!(first.height(), CAVE_HEIGHT);

    let digest = Sha256::digest(first.codes());
    let hex: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();
    assert_eq!(
        hex,
        "286da27a4997e18b797a97389d29e2787bf7fb4d563761a86979d9346ed08f1f"
    );
}

#[test]
fn cave_a_object_census() {
    let map = cave_a_map();
    let mut counts = BTreeMap::new();
    for &code in map.codes() {
        *counts.entry(code).or_insert(0_usize) += 1;
    }

    let expected: BTreeMap<u8, usize> = [
        (0x00, 36),
        (0x01, 538),
        (0x02, 60),
        (0x04, 1),
        (0x07, 120),
        (0x10, 106),
        (0x14, 18),
        (0x25, 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(counts, expected);
}

#[test]
fn cave_a_places_entrance_and_exit() {
    let map = cave_a_map();
    assert_eq!(map.get(3, 2), Some(0x25));
    assert_eq!(map.get(38, 16), Some(0x04));
    assert_eq!(map.get(0, 0), Some(STEEL_CODE));
    assert_eq!(map.get(39, 21), Some(STEEL_CODE));
    for x in 1..31 {
        assert_eq!(map.get(x, 7), Some(0x02), "brick wall at column {x}");
    }
}

#[test]
fn instruction_outside_the_cave_fails_the_build() {
    // Point at column 40 overflows the 40-wide cave.
    let record = [&CAVE_A[..CAVE_A.len() - 1], &[0x10, 0x28, 0x04, 0xFF]].concat();
    let raw = RawCave::new(&record).expect("header present");
    assert_eq!(
        build_code_map(&raw),
        Err(CaveError::Format(FormatError::CoordinateOutOfRange {
            x: 40,
            y: 2,
            width: CAVE_WIDTH,
            height: CAVE_HEIGHT,
        }))
    );
}
