#![allow(dead_code)]

use std::collections::HashMap;

use galaxy_gen::{Location, ProceduralGenerator};

pub fn seeded(seed: i64) -> ProceduralGenerator {
    ProceduralGenerator::with_seed(seed)
}

pub fn by_id(locations: &[Location]) -> HashMap<&str, &Location> {
    locations.iter().map(|l| (l.id.as_str(), l)).collect()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
