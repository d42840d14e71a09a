//! Content keys: opaque references from generated records to game content
//! (enemy, puzzle, NPC and item definitions) owned by other systems.
//!
//! The generator only guarantees that keys are well formed. Whether a key
//! resolves is up to whichever [`ContentResolver`] the caller consults, and a
//! resolver is allowed to answer "not found".

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentKeyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ContentKind {
    Enemy,
    Puzzle,
    Npc,
    Loot,
}

string_enum!(ContentKind {
    Enemy => "enemy",
    Puzzle => "puzzle",
    Npc => "npc",
    Loot => "loot",
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentKey {
    pub kind: ContentKind,
    pub id: String,
}

impl ContentKey {
    pub fn new(kind: ContentKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn enemy(id: impl Into<String>) -> Self {
        Self::new(ContentKind::Enemy, id)
    }

    pub fn puzzle(id: impl Into<String>) -> Self {
        Self::new(ContentKind::Puzzle, id)
    }

    pub fn npc(id: impl Into<String>) -> Self {
        Self::new(ContentKind::Npc, id)
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl From<LootKey> for ContentKey {
    fn from(key: LootKey) -> Self {
        Self::new(ContentKind::Loot, key.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Tech,
    Upgrade,
}

string_enum!(ItemType {
    Weapon => "weapon",
    Armor => "armor",
    Consumable => "consumable",
    Tech => "tech",
    Upgrade => "upgrade",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

string_enum!(Rarity {
    Common => "common",
    Uncommon => "uncommon",
    Rare => "rare",
    Epic => "epic",
    Legendary => "legendary",
});

/// Loot identifier `{type}_{rarity}_{number}`, e.g. `weapon_rare_417`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LootKey {
    pub item_type: ItemType,
    pub rarity: Rarity,
    /// 1..=999
    pub number: u16,
}

impl fmt::Display for LootKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.item_type, self.rarity, self.number)
    }
}

impl FromStr for LootKey {
    type Err = ContentKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('_').collect();
        let [item_type, rarity, number] = tokens.as_slice() else {
            return Err(ContentKeyError::WrongTokenCount(s.to_string()));
        };
        let item_type = item_type
            .parse::<ItemType>()
            .map_err(|_| ContentKeyError::UnknownItemType(item_type.to_string()))?;
        let rarity = rarity
            .parse::<Rarity>()
            .map_err(|_| ContentKeyError::UnknownRarity(rarity.to_string()))?;
        let number = number
            .parse::<u16>()
            .map_err(|_| ContentKeyError::InvalidNumber(number.to_string()))?;
        Ok(Self {
            item_type,
            rarity,
            number,
        })
    }
}

impl From<LootKey> for String {
    fn from(key: LootKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for LootKey {
    type Error = ContentKeyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Looks up the definition behind a content key.
///
/// Returning `None` is a normal answer: generated keys are not guaranteed to
/// have a definition in every catalog.
pub trait ContentResolver {
    type Definition;

    fn resolve(&self, key: &ContentKey) -> Option<&Self::Definition>;
}

/// Map-backed resolver.
#[derive(Debug, Clone)]
pub struct ContentCatalog<D> {
    entries: HashMap<ContentKey, D>,
}

impl<D> ContentCatalog<D> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: ContentKey, definition: D) -> Option<D> {
        self.entries.insert(key, definition)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys from `keys` that this catalog cannot resolve.
    pub fn unresolved<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a ContentKey>,
    ) -> Vec<&'a ContentKey> {
        keys.into_iter()
            .filter(|k| !self.entries.contains_key(*k))
            .collect()
    }
}

impl<D> Default for ContentCatalog<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ContentResolver for ContentCatalog<D> {
    type Definition = D;

    fn resolve(&self, key: &ContentKey) -> Option<&D> {
        self.entries.get(key)
    }
}
