use tracing::trace;

use crate::id::IdGenerator;
use crate::model::{Ability, Enemy, Reward, TechLevel};

use super::clamp_danger;
use super::loot::generate_loot_id;
use super::seed::SeededRandom;
use super::tables::{
    ENEMY_MODIFIERS, ENEMY_TEMPLATES, abilities_for, enemy_descriptions_for,
};

/// Danger above which enemies get a name modifier and flat stat bonuses.
const MODIFIER_DANGER: i32 = 3;
const LOOT_DROP_CHANCE: f64 = 0.3;
const MAX_ABILITIES: i32 = 5;

/// Danger outside 1..=10 is clamped before any stat is derived.
pub fn generate_enemy(rng: &mut SeededRandom, ids: &mut IdGenerator, danger_level: i32) -> Enemy {
    let danger = clamp_danger(danger_level);
    let danger_level = i32::from(danger);
    let index = (danger_level / 2).clamp(0, ENEMY_TEMPLATES.len() as i32 - 1) as usize;
    let template = &ENEMY_TEMPLATES[index];

    let mut name = template.name.to_string();
    let mut bonus_health = 0;
    let mut bonus_damage = 0;
    if danger_level > MODIFIER_DANGER {
        let modifier = rng.choose(ENEMY_MODIFIERS);
        name = format!("{modifier} {name}");
        bonus_health = rng.next_int(5, 15);
        bonus_damage = rng.next_int(1, 3);
    }

    let scale = 1.0 + f64::from(danger_level) * 0.1;
    let health = scale_stat(i64::from(template.base_health) + bonus_health, scale);
    let damage = scale_stat(i64::from(template.base_damage) + bonus_damage, scale);

    let abilities = generate_enemy_abilities(rng, template.tech_level, danger_level);
    let description = rng.choose(enemy_descriptions_for(template.tech_level)).to_string();

    let experience = 20 * u32::from(danger);
    let items = if rng.chance(LOOT_DROP_CHANCE) {
        vec![generate_loot_id(rng, danger)]
    } else {
        Vec::new()
    };

    let id = format!("enemy_{}_{}", ids.next_id(), rng.next_int(0, 99_999));
    trace!(%id, %name, health, damage, "enemy generated");

    Enemy {
        id,
        name,
        health,
        max_health: health,
        damage,
        abilities,
        description,
        reward: Reward { experience, items },
    }
}

/// Round to nearest, never below 1.
fn scale_stat(base: i64, scale: f64) -> u32 {
    ((base as f64) * scale).round().max(1.0) as u32
}

/// Loadout of `clamp(danger / 2, 1, 5)` abilities drawn without repeats from
/// the tech level's templates, each with randomized numbers. Danger is
/// clamped to 1..=10 first.
pub fn generate_enemy_abilities(
    rng: &mut SeededRandom,
    tech_level: TechLevel,
    danger_level: i32,
) -> Vec<Ability> {
    let danger = clamp_danger(danger_level);
    let count = (i32::from(danger) / 2).clamp(1, MAX_ABILITIES) as usize;
    let templates = abilities_for(tech_level);
    let picks: Vec<usize> = rng.shuffle(&(0..templates.len()).collect::<Vec<_>>());

    let mut abilities: Vec<Ability> = picks
        .into_iter()
        .take(count)
        .map(|i| {
            let t = &templates[i];
            let damage = t.damage.map(|d| vary(rng, d, 0.2, 1));
            let healing = t.healing.map(|h| vary(rng, h, 0.2, 1));
            let energy_cost = vary(rng, t.energy_cost, 0.1, 0);
            Ability {
                id: t.id.to_string(),
                name: t.name.to_string(),
                description: t.description.to_string(),
                energy_cost,
                damage,
                healing,
                cooldown: t.cooldown,
                current_cooldown: 0,
            }
        })
        .collect();

    if abilities.is_empty() {
        abilities.push(basic_attack(danger));
    }
    abilities
}

/// `value * (1 ± spread)`, rounded, floored at `floor`.
fn vary(rng: &mut SeededRandom, value: u32, spread: f64, floor: u32) -> u32 {
    let factor = 1.0 - spread + rng.next() * spread * 2.0;
    let varied = (f64::from(value) * factor).round() as i64;
    varied.max(i64::from(floor)) as u32
}

fn basic_attack(danger: u8) -> Ability {
    Ability {
        id: "basic_attack".to_string(),
        name: "Basic Attack".to_string(),
        description: "A straightforward strike.".to_string(),
        energy_cost: 0,
        damage: Some(5 + 2 * u32::from(danger)),
        healing: None,
        cooldown: 0,
        current_cooldown: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy(seed: i64, danger: i32) -> Enemy {
        let mut rng = SeededRandom::new(seed);
        let mut ids = IdGenerator::new();
        generate_enemy(&mut rng, &mut ids, danger)
    }

    #[test]
    fn health_matches_max_at_creation() {
        for seed in 0..50 {
            for danger in 1..=10 {
                let e = enemy(seed, danger);
                assert_eq!(e.health, e.max_health);
                assert!(e.health > 0);
                assert!(e.damage > 0);
            }
        }
    }

    #[test]
    fn stronger_with_danger() {
        for seed in 0..50 {
            let weak = enemy(seed, 1);
            let strong = enemy(seed, 10);
            assert!(weak.health < strong.health);
            assert!(weak.damage < strong.damage);
        }
    }

    #[test]
    fn low_danger_has_no_modifier() {
        let e = enemy(3, 2);
        assert_eq!(e.name, ENEMY_TEMPLATES[1].name);
        // (35 + 0) * 1.2
        assert_eq!(e.health, 42);
        assert_eq!(e.damage, 6);
    }

    #[test]
    fn high_danger_gets_modifier() {
        let e = enemy(3, 8);
        assert!(
            ENEMY_MODIFIERS.iter().any(|m| e.name.starts_with(m)),
            "expected a modifier on {}",
            e.name
        );
        assert!(e.name.ends_with(ENEMY_TEMPLATES[4].name));
    }

    #[test]
    fn out_of_range_danger_is_clamped() {
        let e = enemy(1, 40);
        assert!(e.name.ends_with(ENEMY_TEMPLATES[5].name), "{}", e.name);
        assert_eq!(e.reward.experience, 200);
        let e = enemy(1, -4);
        assert_eq!(e.name, "Drone");
        assert_eq!(e.reward.experience, 20);
    }

    #[test]
    fn extreme_danger_does_not_overflow() {
        let high = enemy(1, i32::MAX);
        assert_eq!(high.health, high.max_health);
        assert_eq!(high.reward.experience, 200);
        assert_eq!(high, enemy(1, 10));

        let low = enemy(1, i32::MIN);
        assert_eq!(low, enemy(1, 1));

        let mut rng = SeededRandom::new(2);
        let loadout = generate_enemy_abilities(&mut rng, TechLevel::Alien, i32::MAX);
        assert_eq!(loadout.len(), 5);
    }

    #[test]
    fn reward_scales_with_danger() {
        assert_eq!(enemy(1, 4).reward.experience, 80);
        for seed in 0..100 {
            assert!(enemy(seed, 6).reward.items.len() <= 1);
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(enemy(99, 6), enemy(99, 6));
    }

    #[test]
    fn ability_count_follows_danger() {
        let mut rng = SeededRandom::new(10);
        assert_eq!(generate_enemy_abilities(&mut rng, TechLevel::Basic, 1).len(), 1);
        assert_eq!(generate_enemy_abilities(&mut rng, TechLevel::Basic, 5).len(), 2);
        assert_eq!(generate_enemy_abilities(&mut rng, TechLevel::Alien, 10).len(), 5);
        assert_eq!(generate_enemy_abilities(&mut rng, TechLevel::Alien, 40).len(), 5);
    }

    #[test]
    fn abilities_start_ready_and_stay_in_variation() {
        let mut rng = SeededRandom::new(11);
        for &tech in TechLevel::ALL {
            let templates = abilities_for(tech);
            for ability in generate_enemy_abilities(&mut rng, tech, 10) {
                assert_eq!(ability.current_cooldown, 0);
                let t = templates.iter().find(|t| t.id == ability.id).unwrap();
                if let (Some(base), Some(dmg)) = (t.damage, ability.damage) {
                    let lo = (f64::from(base) * 0.8).floor() as u32;
                    let hi = (f64::from(base) * 1.2).ceil() as u32;
                    assert!((lo.max(1)..=hi).contains(&dmg), "{} damage {dmg}", t.id);
                }
                assert_eq!(t.damage.is_some(), ability.damage.is_some());
                assert_eq!(t.healing.is_some(), ability.healing.is_some());
            }
        }
    }

    #[test]
    fn abilities_unique_within_loadout() {
        let mut rng = SeededRandom::new(12);
        let loadout = generate_enemy_abilities(&mut rng, TechLevel::High, 10);
        let mut ids: Vec<&str> = loadout.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), loadout.len());
    }

    #[test]
    fn enemy_ids_are_sequenced() {
        let mut rng = SeededRandom::new(1);
        let mut ids = IdGenerator::new();
        let a = generate_enemy(&mut rng, &mut ids, 3);
        let b = generate_enemy(&mut rng, &mut ids, 3);
        assert!(a.id.starts_with("enemy_1_"));
        assert!(b.id.starts_with("enemy_2_"));
    }

    #[test]
    fn basic_attack_scales() {
        assert_eq!(basic_attack(1).damage, Some(7));
        assert_eq!(basic_attack(10).damage, Some(25));
    }
}
