pub mod jsonl;

pub use jsonl::{read_locations_jsonl, write_enemies_jsonl, write_locations_jsonl};
