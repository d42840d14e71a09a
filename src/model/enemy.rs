use serde::{Deserialize, Serialize};

use super::content::LootKey;

/// Qualitative technology bucket. Gates which abilities and descriptions an
/// enemy can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TechLevel {
    Basic,
    Moderate,
    Advanced,
    High,
    Natural,
    Alien,
}

string_enum!(TechLevel {
    Basic => "basic",
    Moderate => "moderate",
    Advanced => "advanced",
    High => "high",
    Natural => "natural",
    Alien => "alien",
});

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub energy_cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<u32>,
    pub cooldown: u32,
    /// Turns until usable again. Always 0 when generated.
    #[serde(default)]
    pub current_cooldown: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    pub experience: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LootKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub damage: u32,
    pub abilities: Vec<Ability>,
    pub description: String,
    pub reward: Reward,
}

