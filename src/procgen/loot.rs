use crate::model::{ItemType, LootKey, Rarity};

use super::seed::SeededRandom;

/// Minimum danger and roll cutoff per tier, best tier first.
const RARITY_GATES: &[(Rarity, u8, f64)] = &[
    (Rarity::Legendary, 8, 0.95),
    (Rarity::Epic, 6, 0.85),
    (Rarity::Rare, 4, 0.7),
    (Rarity::Uncommon, 2, 0.5),
];

/// One roll, checked against each gate from the top. Anything that clears
/// no gate is common.
pub fn roll_rarity(rng: &mut SeededRandom, danger_level: u8) -> Rarity {
    let roll = rng.next();
    RARITY_GATES
        .iter()
        .find(|(_, min_danger, cutoff)| danger_level >= *min_danger && roll > *cutoff)
        .map(|(rarity, _, _)| *rarity)
        .unwrap_or(Rarity::Common)
}

/// Identifier only; turning it into an item is the inventory's job.
pub fn generate_loot_id(rng: &mut SeededRandom, danger_level: u8) -> LootKey {
    let rarity = roll_rarity(rng, danger_level);
    let item_type = *rng.choose(ItemType::ALL);
    let number = rng.next_int(1, 999) as u16;
    LootKey {
        item_type,
        rarity,
        number,
    }
}
