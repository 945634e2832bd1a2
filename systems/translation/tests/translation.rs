use boulder_caves_core::{Cave, Cell, GameObject};
use boulder_caves_system_generation::{build_code_map, RawCave, CAVE_HEIGHT, CAVE_WIDTH};
use boulder_caves_system_translation::{
    code_for_cell, symbol_rows, translate_code_map, translate_symbol_rows,
};

const CAVE_A: [u8; 49] = [
    0x01, 0x14, 0x0A, 0x0F, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x96, 0x6E,
    0x46, 0x28, 0x1E, 0x08, 0x0B, 0x09, 0xD4, 0x20, 0x00, 0x10, 0x14, 0x00, 0x3C, 0x32, 0x09, 0x00,
    0x42, 0x01, 0x09, 0x1E, 0x02, 0x42, 0x09, 0x10, 0x1E, 0x02, 0x25, 0x03, 0x04, 0x04, 0x26, 0x12,
    0xFF,
];

fn cave_a() -> Cave {
    let record = RawCave::new(&CAVE_A).expect("header present");
    let codes = build_code_map(&record).expect("cave A builds");
    let mut cave = Cave::new(1, "A - Intro", "", CAVE_WIDTH, CAVE_HEIGHT);
    cave.replace_map(translate_code_map(&codes).expect("known codes"))
        .expect("grid size");
    cave
}

#[test]
fn translated_cells_map_back_to_their_codes() {
    let record = RawCave::new(&CAVE_A).expect("header present");
    let codes = build_code_map(&record).expect("cave A builds");
    let cells = translate_code_map(&codes).expect("known codes");

    let restored: Vec<u8> = cells
        .iter()
        .map(|&cell| code_for_cell(cell).expect("binary cell"))
        .collect();
    assert_eq!(restored, codes.codes());
}

#[test]
fn cave_a_exports_expected_landmarks() {
    let rows = symbol_rows(&cave_a()).expect("every cell has a symbol");
    assert_eq!(rows.len(), CAVE_HEIGHT as usize);
    assert!(rows.iter().all(|row| row.chars().count() == CAVE_WIDTH as usize));
    assert_eq!(rows[0], "W".repeat(CAVE_WIDTH as usize));
    assert_eq!(rows[2], "W.rPr...... .........rd..r.... ..... ..W");
    assert_eq!(rows[16], "W r......... r..r........r......r.rr..XW");
}

#[test]
fn symbol_export_round_trips() {
    let original = cave_a();
    let rows = symbol_rows(&original).expect("every cell has a symbol");
    let cells = translate_symbol_rows(&rows, CAVE_WIDTH, CAVE_HEIGHT).expect("valid rows");
    assert_eq!(cells, original.map());

    let boulders = cells
        .iter()
        .filter(|&&cell| cell == Cell::still(GameObject::Boulder))
        .count();
    assert_eq!(boulders, 106);
}
