pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod procgen;

pub use error::ContentKeyError;
pub use id::IdGenerator;
pub use model::{
    Ability, ContentCatalog, ContentKey, ContentKind, ContentResolver, Encounters, Enemy,
    EnvironmentEffect, Faction, ItemType, Location, LocationType, LootKey, Rarity, Reward,
    TechLevel,
};
pub use procgen::{GalaxyGenConfig, ProceduralGenerator, SeededRandom};
