#[macro_use]
mod macros;

pub mod content;
pub mod enemy;
pub mod location;

pub use content::{
    ContentCatalog, ContentKey, ContentKind, ContentResolver, ItemType, LootKey, Rarity,
};
pub use enemy::{Ability, Enemy, Reward, TechLevel};
pub use location::{
    Encounters, EnvironmentEffect, EnvironmentEffectKind, Faction, Location, LocationType,
};
