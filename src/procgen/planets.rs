use tracing::trace;

use crate::model::{
    ContentKey, Encounters, EnvironmentEffect, Faction, Location, LocationType,
};

use super::description;
use super::names::{NameRegistry, slugify};
use super::seed::SeededRandom;
use super::tables::{
    ENEMY_TIERS, ENVIRONMENT_EFFECTS, LIFE_FORMS, NPC_TIERS, PLANET_CLASSES, PUZZLE_TIERS,
    PlanetClass, PlanetVariant, RESOURCE_CATEGORIES, STAR_TYPES, StarType,
};

/// Chance that a planet's orbit is stable.
const STABLE_ORBIT_CHANCE: f64 = 0.7;
/// Chance that any faction holds the planet.
const CONTROLLED_CHANCE: f64 = 0.7;
/// Chance that a controlled planet belongs to the Void Entity.
const VOID_CONTROL_CHANCE: f64 = 0.05;
const SPECIAL_RESOURCE_CHANCE: f64 = 0.4;

/// Build one planet. `connections` is left empty for the system assembler.
pub fn generate_planet(rng: &mut SeededRandom, names: &mut NameRegistry, region: &str) -> Location {
    let class = rng.choose(PLANET_CLASSES);
    let variant = rng.choose(class.variants);
    let stable = rng.chance(STABLE_ORBIT_CHANCE);
    let star = rng.choose(STAR_TYPES);
    let life_probability = life_probability(star, class, variant, stable);

    let controlled_by = roll_controller(rng);
    let danger_level = roll_danger(rng, controlled_by);
    let environment_effects = roll_environment_effects(rng);

    let resource = rng
        .chance(SPECIAL_RESOURCE_CHANCE)
        .then(|| *rng.choose(RESOURCE_CATEGORIES));
    let life_form = rng
        .chance(life_probability)
        .then(|| *rng.choose(LIFE_FORMS));

    let name = names.generate(rng);
    let encounters = generate_encounters(rng, danger_level);

    let description = description::compose([
        description::planet_overview(class, variant, star, stable),
        description::control(controlled_by),
        description::resources(resource),
        description::life(life_form),
        description::danger(danger_level),
    ]);

    trace!(%name, danger_level, encounters = encounters.len(), "planet generated");

    Location {
        id: slugify(&name),
        name,
        location_type: LocationType::Planet,
        description,
        encounters,
        connections: Vec::new(),
        region: region.to_string(),
        controlled_by,
        danger_level,
        environment_effects,
        discovered: false,
        visited: false,
    }
}

/// Star habitability scaled by orbit stability and planet type, clamped to [0, 1].
pub fn life_probability(
    star: &StarType,
    class: &PlanetClass,
    variant: &PlanetVariant,
    stable: bool,
) -> f64 {
    let orbit = if stable { 1.5 } else { 0.5 };
    (star.life_prob * orbit * class.life_multiplier * variant.life_multiplier).clamp(0.0, 1.0)
}

pub fn roll_controller(rng: &mut SeededRandom) -> Option<Faction> {
    if !rng.chance(CONTROLLED_CHANCE) {
        return None;
    }
    if rng.chance(VOID_CONTROL_CHANCE) {
        Some(Faction::VoidEntity)
    } else {
        Some(*rng.choose(Faction::CLAIMANTS))
    }
}

pub fn roll_danger(rng: &mut SeededRandom, controlled_by: Option<Faction>) -> u8 {
    let (min, max) = Faction::danger_range(controlled_by);
    rng.next_int(i64::from(min), i64::from(max)) as u8
}

/// Zero to two distinct effects, each at a severity up to its catalog maximum.
pub fn roll_environment_effects(rng: &mut SeededRandom) -> Vec<EnvironmentEffect> {
    let count = rng.next_int(0, 2) as usize;
    if count == 0 {
        return Vec::new();
    }
    let picks: Vec<usize> = rng.shuffle(&(0..ENVIRONMENT_EFFECTS.len()).collect::<Vec<_>>());
    picks
        .into_iter()
        .take(count)
        .map(|i| {
            let def = &ENVIRONMENT_EFFECTS[i];
            EnvironmentEffect {
                kind: def.kind,
                severity: rng.next_int(1, i64::from(def.max_severity)) as u8,
                description: def.description.to_string(),
            }
        })
        .collect()
}

/// 0-3 enemies and 0-2 puzzles from the danger tier, 0-3 NPCs by rarity roll.
pub fn generate_encounters(rng: &mut SeededRandom, danger_level: u8) -> Encounters {
    let enemy_pool = ENEMY_TIERS.for_danger(danger_level);
    let enemy_count = rng.next_int(0, 3);
    let enemies = (0..enemy_count)
        .map(|_| ContentKey::enemy(*rng.choose(enemy_pool)))
        .collect();

    let puzzle_pool = PUZZLE_TIERS.for_danger(danger_level);
    let puzzle_count = rng.next_int(0, 2);
    let puzzles = (0..puzzle_count)
        .map(|_| ContentKey::puzzle(*rng.choose(puzzle_pool)))
        .collect();

    let npc_count = rng.next_int(0, 3);
    let npcs = (0..npc_count)
        .map(|_| {
            let pool = NPC_TIERS.for_roll(rng.next());
            ContentKey::npc(*rng.choose(pool))
        })
        .collect();

    Encounters {
        enemies,
        puzzles,
        npcs,
    }
}
