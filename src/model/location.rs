use serde::{Deserialize, Serialize};

use super::content::ContentKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LocationType {
    Planet,
    Space,
    Station,
    Derelict,
    Anomaly,
    Ruins,
    Settlement,
    Ship,
}

string_enum!(LocationType {
    Planet => "planet",
    Space => "space",
    Station => "station",
    Derelict => "derelict",
    Anomaly => "anomaly",
    Ruins => "ruins",
    Settlement => "settlement",
    Ship => "ship",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Faction {
    Alliance,
    Syndicate,
    Technocracy,
    Nomads,
    VoidEntity,
}

string_enum!(Faction {
    Alliance => "alliance",
    Syndicate => "syndicate",
    Technocracy => "technocracy",
    Nomads => "nomads",
    VoidEntity => "void_entity",
});

impl Faction {
    /// Factions that can claim territory through ordinary expansion.
    /// The Void Entity is rolled separately.
    pub const CLAIMANTS: &'static [Faction] = &[
        Faction::Alliance,
        Faction::Syndicate,
        Faction::Technocracy,
        Faction::Nomads,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Faction::Alliance => "Stellar Alliance",
            Faction::Syndicate => "Crimson Syndicate",
            Faction::Technocracy => "Helix Technocracy",
            Faction::Nomads => "Drifter Nomads",
            Faction::VoidEntity => "Void Entity",
        }
    }

    /// Inclusive danger range for territory held by this faction.
    pub fn danger_range(faction: Option<Faction>) -> (u8, u8) {
        match faction {
            Some(Faction::Alliance) => (1, 5),
            Some(Faction::VoidEntity) => (7, 10),
            Some(_) => (3, 7),
            None => (2, 10),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EnvironmentEffectKind {
    Radiation,
    ExtremeHeat,
    ExtremeCold,
    ToxicAtmosphere,
    LowGravity,
    HighGravity,
    ElectromagneticStorm,
    SeismicActivity,
}

string_enum!(EnvironmentEffectKind {
    Radiation => "radiation",
    ExtremeHeat => "extreme_heat",
    ExtremeCold => "extreme_cold",
    ToxicAtmosphere => "toxic_atmosphere",
    LowGravity => "low_gravity",
    HighGravity => "high_gravity",
    ElectromagneticStorm => "electromagnetic_storm",
    SeismicActivity => "seismic_activity",
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvironmentEffect {
    #[serde(rename = "type")]
    pub kind: EnvironmentEffectKind,
    /// 1 (mild) to 5 (lethal without protection).
    pub severity: u8,
    pub description: String,
}

/// Encounter references attached to a location. Keys are resolved by the
/// encounter systems, not by the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Encounters {
    #[serde(default)]
    pub enemies: Vec<ContentKey>,
    #[serde(default)]
    pub puzzles: Vec<ContentKey>,
    #[serde(default)]
    pub npcs: Vec<ContentKey>,
}

impl Encounters {
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty() && self.puzzles.is_empty() && self.npcs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enemies.len() + self.puzzles.len() + self.npcs.len()
    }
}

/// A navigable place: a star system (`Space`) or one of its planets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub description: String,
    #[serde(default)]
    pub encounters: Encounters,
    /// Ids of neighboring locations. Undirected: every edge is stored on both ends.
    #[serde(default)]
    pub connections: Vec<String>,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_by: Option<Faction>,
    pub danger_level: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_effects: Vec<EnvironmentEffect>,
    #[serde(default)]
    pub discovered: bool,
    #[serde(default)]
    pub visited: bool,
}

impl Location {
    pub fn is_system(&self) -> bool {
        self.location_type == LocationType::Space
    }

    pub fn is_connected_to(&self, id: &str) -> bool {
        self.connections.iter().any(|c| c == id)
    }

    /// Record an edge to `id` on this side only. Returns false if it already existed.
    pub fn connect(&mut self, id: &str) -> bool {
        if self.id == id || self.is_connected_to(id) {
            return false;
        }
        self.connections.push(id.to_string());
        true
    }
}
