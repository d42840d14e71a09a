use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::model::{Enemy, Location};

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Export locations for the navigation store, one `Location` per line.
pub fn write_locations_jsonl(locations: &[Location], path: &Path) -> io::Result<()> {
    let count = write_jsonl(path, locations.iter())?;
    debug!(path = %path.display(), count, "locations written");
    Ok(())
}

/// Export enemies for the combat system, one `Enemy` per line.
pub fn write_enemies_jsonl(enemies: &[Enemy], path: &Path) -> io::Result<()> {
    let count = write_jsonl(path, enemies.iter())?;
    debug!(path = %path.display(), count, "enemies written");
    Ok(())
}

/// Read back a locations file written by [`write_locations_jsonl`].
pub fn read_locations_jsonl(path: &Path) -> io::Result<Vec<Location>> {
    let text = fs::read_to_string(path)?;
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(io::Error::from))
        .collect()
}
