//! Narrative text assembled from independent sentence fragments.
//!
//! Each producer returns `Some(sentence)` when it applies; `compose` keeps
//! the order and joins whatever is present.

use crate::model::Faction;

use super::tables::{PlanetClass, PlanetVariant, StarType};

pub fn compose<I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    fragments
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn planet_overview(
    class: &PlanetClass,
    variant: &PlanetVariant,
    star: &StarType,
    stable: bool,
) -> Option<String> {
    let orbit = if stable { "a stable" } else { "an erratic" };
    let star = star.name.to_lowercase();
    Some(format!(
        "This {} {} world has {}. It follows {orbit} orbit around {} {star}.",
        variant.name.to_lowercase(),
        class.name.to_lowercase(),
        variant.description,
        article(&star),
    ))
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

pub fn control(faction: Option<Faction>) -> Option<String> {
    faction.map(|f| match f {
        Faction::VoidEntity => "Something from the Void has claimed this place.".to_string(),
        other => format!("The {} controls this territory.", other.display_name()),
    })
}

pub fn resources(resource: Option<&str>) -> Option<String> {
    resource.map(|r| format!("Scans indicate deposits of {r}."))
}

pub fn life(life_form: Option<&str>) -> Option<String> {
    life_form.map(|l| format!("The planet harbors {l}."))
}

pub fn danger(level: u8) -> Option<String> {
    let text = match level {
        0..=2 => "Travelers report it as largely safe.",
        3..=4 => "Caution is advised.",
        5..=6 => "Hostile activity is common here.",
        7..=8 => "Few who land here leave unscathed.",
        _ => "Only the desperate or the foolish come here.",
    };
    Some(text.to_string())
}

pub fn system_overview(name: &str, region: &str, planet_count: usize) -> Option<String> {
    let bodies = if planet_count == 1 { "planet" } else { "planets" };
    Some(format!(
        "The {name} system lies in {region}, with {planet_count} charted {bodies}."
    ))
}
