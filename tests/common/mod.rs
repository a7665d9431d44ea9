#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::path::Path;

/// 1x1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

pub const FIRST_NAMES: [&str; 14] = [
    "Jan", "Anna", "Piotr", "Maria", "Tomasz", "Katarzyna", "Paweł", "Agnieszka", "Michał",
    "Magdalena", "Krzysztof", "Joanna", "Marcin", "Ewa",
];

pub fn roster_csv(count: usize) -> String {
    let mut csv = String::from("imie;nazwisko\n");
    for i in 0..count {
        csv.push_str(&format!("{};Nazwisko{}\n", FIRST_NAMES[i % FIRST_NAMES.len()], i));
    }
    csv
}

pub fn read_xlsx_entry(path: &Path, name: &str) -> String {
    let data = std::fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

pub fn xlsx_entry_names(path: &Path) -> Vec<String> {
    let data = std::fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Number of student cells (rows 2 and below) in a column, e.g. `"B"`.
pub fn student_cells_in_column(sheet_xml: &str, column: &str) -> usize {
    (2..=1000)
        .take_while(|row| sheet_xml.contains(&format!("r=\"{}{}\"", column, row)))
        .count()
}

pub fn temp_images_in(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.starts_with("temporary_seed_image_"))
        .collect()
}
