pub mod config;
pub mod description;
pub mod enemies;
pub mod loot;
pub mod names;
pub mod planets;
pub mod seed;
pub mod systems;
pub mod tables;

pub use config::GalaxyGenConfig;
pub use names::{NameRegistry, slugify};
pub use seed::SeededRandom;

use tracing::debug;

use crate::id::IdGenerator;
use crate::model::{Ability, Enemy, Location, LootKey, TechLevel};

pub const MIN_DANGER: u8 = 1;
pub const MAX_DANGER: u8 = 10;

/// One content generation session.
///
/// Owns its random stream and the set of names already handed out, so two
/// generators seeded alike produce identical output for identical calls.
/// Not meant to be shared between sessions: give each region build its own
/// instance.
#[derive(Debug)]
pub struct ProceduralGenerator {
    rng: SeededRandom,
    names: NameRegistry,
    enemy_ids: IdGenerator,
    config: GalaxyGenConfig,
}

impl ProceduralGenerator {
    pub fn new(config: GalaxyGenConfig) -> Self {
        tables::assert_tables_populated();
        let config = config.normalized();
        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        debug!(seed = rng.seed(), "procedural generator created");
        Self {
            rng,
            names: NameRegistry::new(config.name_attempts),
            enemy_ids: IdGenerator::new(),
            config,
        }
    }

    pub fn with_seed(seed: i64) -> Self {
        Self::new(GalaxyGenConfig {
            seed: Some(seed),
            ..GalaxyGenConfig::default()
        })
    }

    pub fn config(&self) -> &GalaxyGenConfig {
        &self.config
    }

    /// Reposition the random stream. Names already used stay used.
    pub fn set_seed(&mut self, seed: i64) {
        self.rng.set_seed(seed);
    }

    /// Current stream position; advances as content is generated.
    pub fn seed(&self) -> i64 {
        self.rng.seed()
    }

    /// Forget used names and restart enemy numbering.
    pub fn reset_session(&mut self) {
        self.names.clear();
        self.enemy_ids.reset();
    }

    pub fn generate_planet_name(&mut self) -> String {
        self.names.generate(&mut self.rng)
    }

    pub fn generate_planet(&mut self, region: Option<&str>) -> Location {
        let region = region.unwrap_or(self.config.default_region.as_str());
        planets::generate_planet(&mut self.rng, &mut self.names, region)
    }

    /// `[system, planets...]` with system/planet links on both ends.
    pub fn generate_star_system(
        &mut self,
        region: &str,
        planet_count: Option<u32>,
    ) -> Vec<Location> {
        systems::generate_star_system(
            &mut self.rng,
            &mut self.names,
            &self.config,
            region,
            planet_count,
        )
    }

    /// All systems of a region plus their planets, systems cross-linked.
    pub fn generate_region(&mut self, region: &str, system_count: Option<u32>) -> Vec<Location> {
        systems::generate_region(
            &mut self.rng,
            &mut self.names,
            &self.config,
            region,
            system_count,
        )
    }

    /// Danger is clamped to 1..=10 before generation.
    pub fn generate_enemy(&mut self, danger_level: i32) -> Enemy {
        enemies::generate_enemy(&mut self.rng, &mut self.enemy_ids, danger_level)
    }

    pub fn generate_enemy_abilities(
        &mut self,
        tech_level: TechLevel,
        danger_level: i32,
    ) -> Vec<Ability> {
        enemies::generate_enemy_abilities(&mut self.rng, tech_level, danger_level)
    }

    pub fn generate_loot_id(&mut self, danger_level: i32) -> LootKey {
        let danger = clamp_danger(danger_level);
        loot::generate_loot_id(&mut self.rng, danger)
    }
}

impl Default for ProceduralGenerator {
    fn default() -> Self {
        Self::new(GalaxyGenConfig::default())
    }
}

pub fn clamp_danger(danger_level: i32) -> u8 {
    let clamped = danger_level.clamp(i32::from(MIN_DANGER), i32::from(MAX_DANGER));
    if clamped != danger_level {
        debug!(requested = danger_level, clamped, "danger level clamped");
    }
    clamped as u8
}
