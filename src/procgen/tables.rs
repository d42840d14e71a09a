use crate::model::{EnvironmentEffectKind, TechLevel};

/// Star classification. `life_prob` scales habitability after the star is
/// picked; it does not weight the pick itself.
pub struct StarType {
    pub name: &'static str,
    pub life_prob: f64,
}

pub const STAR_TYPES: &[StarType] = &[
    StarType { name: "Red Dwarf", life_prob: 0.3 },
    StarType { name: "Orange Dwarf", life_prob: 0.6 },
    StarType { name: "Yellow Dwarf", life_prob: 0.8 },
    StarType { name: "White Dwarf", life_prob: 0.1 },
    StarType { name: "Brown Dwarf", life_prob: 0.05 },
    StarType { name: "Red Giant", life_prob: 0.15 },
    StarType { name: "Blue Giant", life_prob: 0.05 },
    StarType { name: "Binary Star", life_prob: 0.2 },
    StarType { name: "Neutron Star", life_prob: 0.01 },
    StarType { name: "Pulsar", life_prob: 0.01 },
    StarType { name: "Black Hole", life_prob: 0.0 },
];

pub struct PlanetVariant {
    pub name: &'static str,
    pub life_multiplier: f64,
    pub description: &'static str,
}

pub struct PlanetClass {
    pub name: &'static str,
    pub life_multiplier: f64,
    pub variants: &'static [PlanetVariant],
}

pub const PLANET_CLASSES: &[PlanetClass] = &[
    PlanetClass {
        name: "Terrestrial",
        life_multiplier: 1.0,
        variants: &[
            PlanetVariant {
                name: "Earthlike",
                life_multiplier: 2.0,
                description: "temperate oceans and breathable air",
            },
            PlanetVariant {
                name: "Desert",
                life_multiplier: 1.0,
                description: "endless dunes scoured by dry winds",
            },
            PlanetVariant {
                name: "Ocean",
                life_multiplier: 1.0,
                description: "a single planet-wide sea",
            },
            PlanetVariant {
                name: "Arctic",
                life_multiplier: 1.0,
                description: "glaciers stretching from pole to pole",
            },
            PlanetVariant {
                name: "Volcanic",
                life_multiplier: 1.0,
                description: "rivers of lava under an ash-choked sky",
            },
        ],
    },
    PlanetClass {
        name: "Gas Giant",
        life_multiplier: 0.1,
        variants: &[
            PlanetVariant {
                name: "Jovian",
                life_multiplier: 1.0,
                description: "banded storms wider than most worlds",
            },
            PlanetVariant {
                name: "Ringed",
                life_multiplier: 1.0,
                description: "a vast ring system of ice and rock",
            },
            PlanetVariant {
                name: "Hot",
                life_multiplier: 1.0,
                description: "an atmosphere boiling close to its star",
            },
        ],
    },
    PlanetClass {
        name: "Exotic",
        life_multiplier: 0.5,
        variants: &[
            PlanetVariant {
                name: "Crystalline",
                life_multiplier: 1.0,
                description: "a crust of resonating crystal spires",
            },
            PlanetVariant {
                name: "Tidally Locked",
                life_multiplier: 1.0,
                description: "one face in eternal day, the other in night",
            },
            PlanetVariant {
                name: "Carbon",
                life_multiplier: 1.0,
                description: "graphite plains and diamond mountains",
            },
        ],
    },
    PlanetClass {
        name: "Dwarf",
        life_multiplier: 1.0,
        variants: &[
            PlanetVariant {
                name: "Barren",
                life_multiplier: 1.0,
                description: "a cratered surface with no atmosphere",
            },
            PlanetVariant {
                name: "Icy",
                life_multiplier: 1.0,
                description: "a frozen shell over a hidden ocean",
            },
        ],
    },
];

pub const NAME_PREFIXES: &[&str] = &[
    "Kepler", "Xan", "Vega", "Orion", "Tau", "Zeta", "Nova", "Helios", "Cygnus", "Draco",
    "Lyra", "Altair", "Rigel", "Sirius", "Proxima", "Tycho", "Erebus", "Atlas", "Nyx", "Khar",
];

pub const NAME_SUFFIXES: &[&str] = &[
    "Prime", "Major", "Minor", "Secundus", "Tertius", "IV", "VII", "IX",
    "Alpha", "Beta", "Gamma", "Delta", "Reach", "Drift", "Expanse",
];

pub struct EnvironmentEffectDef {
    pub kind: EnvironmentEffectKind,
    pub max_severity: u8,
    pub description: &'static str,
}

pub const ENVIRONMENT_EFFECTS: &[EnvironmentEffectDef] = &[
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::Radiation,
        max_severity: 5,
        description: "Ionizing radiation saturates the surface",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::ExtremeHeat,
        max_severity: 4,
        description: "Surface temperatures exceed suit tolerances",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::ExtremeCold,
        max_severity: 4,
        description: "Cold severe enough to freeze unshielded systems",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::ToxicAtmosphere,
        max_severity: 5,
        description: "The air is laced with corrosive compounds",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::LowGravity,
        max_severity: 3,
        description: "Weak gravity makes every step a leap",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::HighGravity,
        max_severity: 4,
        description: "Crushing gravity slows all movement",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::ElectromagneticStorm,
        max_severity: 5,
        description: "Electromagnetic storms disrupt electronics",
    },
    EnvironmentEffectDef {
        kind: EnvironmentEffectKind::SeismicActivity,
        max_severity: 3,
        description: "Frequent quakes shake the ground",
    },
];

pub const RESOURCE_CATEGORIES: &[&str] = &[
    "rare minerals",
    "exotic gases",
    "ancient technology",
    "crystal formations",
    "dark matter deposits",
    "rare isotopes",
];

pub const LIFE_FORMS: &[&str] = &[
    "microbial life",
    "primitive flora",
    "complex fauna",
    "an intelligent species",
    "silicon-based organisms",
    "vast fungal networks",
];

/// Content ids bucketed by danger.
pub struct DangerTiers {
    pub low: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub high: &'static [&'static str],
}

impl DangerTiers {
    /// low <= 3, medium 4..=6, high > 6.
    pub fn for_danger(&self, danger: u8) -> &'static [&'static str] {
        match danger {
            0..=3 => self.low,
            4..=6 => self.medium,
            _ => self.high,
        }
    }
}

pub const ENEMY_TIERS: DangerTiers = DangerTiers {
    low: &["scavenger_drone", "space_pirate", "feral_creature", "security_bot"],
    medium: &["mercenary_squad", "rogue_ai", "alien_predator", "pirate_captain"],
    high: &["cyborg_enforcer", "ancient_guardian", "void_spawn", "warlord"],
};

pub const PUZZLE_TIERS: DangerTiers = DangerTiers {
    low: &["door_lock", "power_routing", "cargo_manifest"],
    medium: &["encrypted_terminal", "gravity_maze", "signal_decoder"],
    high: &["ancient_cipher", "quantum_lattice", "void_resonance"],
};

/// NPC ids bucketed by rarity, rolled independently of danger.
pub struct NpcTiers {
    pub common: &'static [&'static str],
    pub uncommon: &'static [&'static str],
    pub rare: &'static [&'static str],
}

impl NpcTiers {
    /// roll < 0.6 common, < 0.9 uncommon, otherwise rare.
    pub fn for_roll(&self, roll: f64) -> &'static [&'static str] {
        if roll < 0.6 {
            self.common
        } else if roll < 0.9 {
            self.uncommon
        } else {
            self.rare
        }
    }
}

pub const NPC_TIERS: NpcTiers = NpcTiers {
    common: &["merchant", "refugee", "miner", "dock_worker"],
    uncommon: &["smuggler", "researcher", "bounty_hunter"],
    rare: &["ancient_ai", "alien_envoy", "void_prophet"],
};

pub struct EnemyTemplate {
    pub name: &'static str,
    pub base_health: u32,
    pub base_damage: u32,
    pub tech_level: TechLevel,
}

/// Ordered by threat; indexed by `danger / 2`.
pub const ENEMY_TEMPLATES: &[EnemyTemplate] = &[
    EnemyTemplate {
        name: "Drone",
        base_health: 20,
        base_damage: 3,
        tech_level: TechLevel::Basic,
    },
    EnemyTemplate {
        name: "Pirate Raider",
        base_health: 35,
        base_damage: 5,
        tech_level: TechLevel::Basic,
    },
    EnemyTemplate {
        name: "Mercenary",
        base_health: 50,
        base_damage: 7,
        tech_level: TechLevel::Moderate,
    },
    EnemyTemplate {
        name: "Rogue AI",
        base_health: 70,
        base_damage: 9,
        tech_level: TechLevel::Advanced,
    },
    EnemyTemplate {
        name: "Alien Beast",
        base_health: 90,
        base_damage: 12,
        tech_level: TechLevel::Natural,
    },
    EnemyTemplate {
        name: "Cyborg Enforcer",
        base_health: 120,
        base_damage: 15,
        tech_level: TechLevel::High,
    },
    EnemyTemplate {
        name: "Ancient Guardian",
        base_health: 160,
        base_damage: 19,
        tech_level: TechLevel::Alien,
    },
    EnemyTemplate {
        name: "Void Entity",
        base_health: 220,
        base_damage: 25,
        tech_level: TechLevel::Alien,
    },
];

pub const ENEMY_MODIFIERS: &[&str] = &[
    "Elite", "Veteran", "Corrupted", "Armored", "Savage", "Enhanced", "Shielded", "Frenzied",
];

pub struct AbilityTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub energy_cost: u32,
    pub damage: Option<u32>,
    pub healing: Option<u32>,
    pub cooldown: u32,
}

const BASIC_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        id: "laser_shot",
        name: "Laser Shot",
        description: "A quick burst from a sidearm.",
        energy_cost: 5,
        damage: Some(6),
        healing: None,
        cooldown: 0,
    },
    AbilityTemplate {
        id: "ram",
        name: "Ram",
        description: "Charges headlong into the target.",
        energy_cost: 8,
        damage: Some(9),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "patch_up",
        name: "Patch Up",
        description: "Slaps a repair patch over damage.",
        energy_cost: 10,
        damage: None,
        healing: Some(8),
        cooldown: 3,
    },
    AbilityTemplate {
        id: "scatter_fire",
        name: "Scatter Fire",
        description: "Sprays shots in a wide arc.",
        energy_cost: 12,
        damage: Some(7),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "flash_grenade",
        name: "Flash Grenade",
        description: "A blinding flash followed by shrapnel.",
        energy_cost: 15,
        damage: Some(10),
        healing: None,
        cooldown: 3,
    },
];

const MODERATE_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        id: "plasma_rifle",
        name: "Plasma Rifle",
        description: "A searing bolt of plasma.",
        energy_cost: 12,
        damage: Some(14),
        healing: None,
        cooldown: 1,
    },
    AbilityTemplate {
        id: "combat_stim",
        name: "Combat Stim",
        description: "Injects a regenerative stimulant.",
        energy_cost: 15,
        damage: None,
        healing: Some(15),
        cooldown: 4,
    },
    AbilityTemplate {
        id: "suppressing_fire",
        name: "Suppressing Fire",
        description: "Pins the target down with sustained fire.",
        energy_cost: 18,
        damage: Some(11),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "frag_mine",
        name: "Frag Mine",
        description: "Deploys a proximity mine.",
        energy_cost: 20,
        damage: Some(18),
        healing: None,
        cooldown: 3,
    },
    AbilityTemplate {
        id: "vampiric_round",
        name: "Vampiric Round",
        description: "A round that siphons energy back to the shooter.",
        energy_cost: 22,
        damage: Some(10),
        healing: Some(6),
        cooldown: 3,
    },
];

const ADVANCED_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        id: "system_hack",
        name: "System Hack",
        description: "Overloads the target's implants.",
        energy_cost: 20,
        damage: Some(18),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "nanite_repair",
        name: "Nanite Repair",
        description: "A swarm of nanites rebuilds damaged parts.",
        energy_cost: 25,
        damage: None,
        healing: Some(22),
        cooldown: 4,
    },
    AbilityTemplate {
        id: "ion_cannon",
        name: "Ion Cannon",
        description: "A charged ion beam.",
        energy_cost: 30,
        damage: Some(26),
        healing: None,
        cooldown: 3,
    },
    AbilityTemplate {
        id: "drone_swarm",
        name: "Drone Swarm",
        description: "Releases a cloud of attack drones.",
        energy_cost: 28,
        damage: Some(20),
        healing: None,
        cooldown: 3,
    },
    AbilityTemplate {
        id: "logic_bomb",
        name: "Logic Bomb",
        description: "Plants code that detonates in the target's systems.",
        energy_cost: 35,
        damage: Some(30),
        healing: None,
        cooldown: 5,
    },
];

const HIGH_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        id: "rail_gun",
        name: "Rail Gun",
        description: "A hypersonic slug.",
        energy_cost: 30,
        damage: Some(32),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "regen_matrix",
        name: "Regeneration Matrix",
        description: "Cybernetic tissue knits itself back together.",
        energy_cost: 30,
        damage: None,
        healing: Some(30),
        cooldown: 4,
    },
    AbilityTemplate {
        id: "overcharge",
        name: "Overcharge",
        description: "Dumps reactor power into a single strike.",
        energy_cost: 40,
        damage: Some(40),
        healing: None,
        cooldown: 4,
    },
    AbilityTemplate {
        id: "shock_field",
        name: "Shock Field",
        description: "An electrified field around the body.",
        energy_cost: 25,
        damage: Some(22),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "siphon_core",
        name: "Siphon Core",
        description: "Drains the target's power cell.",
        energy_cost: 35,
        damage: Some(24),
        healing: Some(12),
        cooldown: 3,
    },
];

const NATURAL_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        id: "rending_claws",
        name: "Rending Claws",
        description: "Tears through armor with serrated claws.",
        energy_cost: 8,
        damage: Some(16),
        healing: None,
        cooldown: 1,
    },
    AbilityTemplate {
        id: "acid_spit",
        name: "Acid Spit",
        description: "A stream of corrosive bile.",
        energy_cost: 12,
        damage: Some(14),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "regenerate",
        name: "Regenerate",
        description: "Flesh regrows at an alarming rate.",
        energy_cost: 15,
        damage: None,
        healing: Some(20),
        cooldown: 4,
    },
    AbilityTemplate {
        id: "pounce",
        name: "Pounce",
        description: "Leaps onto the target from afar.",
        energy_cost: 10,
        damage: Some(18),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "feeding_frenzy",
        name: "Feeding Frenzy",
        description: "Bites that restore the beast's strength.",
        energy_cost: 20,
        damage: Some(15),
        healing: Some(10),
        cooldown: 3,
    },
];

const ALIEN_ABILITIES: &[AbilityTemplate] = &[
    AbilityTemplate {
        id: "void_lance",
        name: "Void Lance",
        description: "A spear of pure darkness.",
        energy_cost: 35,
        damage: Some(38),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "psionic_wave",
        name: "Psionic Wave",
        description: "A crushing wave of thought.",
        energy_cost: 30,
        damage: Some(30),
        healing: None,
        cooldown: 2,
    },
    AbilityTemplate {
        id: "entropy_drain",
        name: "Entropy Drain",
        description: "Pulls life force out of the target.",
        energy_cost: 40,
        damage: Some(25),
        healing: Some(20),
        cooldown: 3,
    },
    AbilityTemplate {
        id: "phase_shift",
        name: "Phase Shift",
        description: "Slips partly out of reality to mend itself.",
        energy_cost: 35,
        damage: None,
        healing: Some(35),
        cooldown: 5,
    },
    AbilityTemplate {
        id: "singularity",
        name: "Singularity",
        description: "Collapses space around the target.",
        energy_cost: 50,
        damage: Some(50),
        healing: None,
        cooldown: 6,
    },
];

pub fn abilities_for(tech: TechLevel) -> &'static [AbilityTemplate] {
    match tech {
        TechLevel::Basic => BASIC_ABILITIES,
        TechLevel::Moderate => MODERATE_ABILITIES,
        TechLevel::Advanced => ADVANCED_ABILITIES,
        TechLevel::High => HIGH_ABILITIES,
        TechLevel::Natural => NATURAL_ABILITIES,
        TechLevel::Alien => ALIEN_ABILITIES,
    }
}

pub fn enemy_descriptions_for(tech: TechLevel) -> &'static [&'static str] {
    match tech {
        TechLevel::Basic => &[
            "A crude machine cobbled together from salvaged parts.",
            "Poorly equipped, but desperate enough to be dangerous.",
        ],
        TechLevel::Moderate => &[
            "A professional fighter with military-grade gear.",
            "Well armed and clearly trained for ship-to-ship boarding actions.",
        ],
        TechLevel::Advanced => &[
            "Its processors calculate every move before you make yours.",
            "Sophisticated systems hum beneath a sleek armored shell.",
        ],
        TechLevel::High => &[
            "More machine than flesh, built for nothing but combat.",
            "Cutting-edge augmentations glow beneath scarred plating.",
        ],
        TechLevel::Natural => &[
            "A predator shaped by a hostile world's brutal evolution.",
            "Muscle, teeth and instinct. It has clearly fed recently.",
        ],
        TechLevel::Alien => &[
            "Its form shifts at the edge of perception, defying description.",
            "An intelligence older than any star chart regards you coldly.",
        ],
    }
}

/// Every table the generator draws from with `choose` must be non-empty.
/// Panics on a malformed table; called once when a generator is built.
pub fn assert_tables_populated() {
    assert!(!STAR_TYPES.is_empty(), "star type table is empty");
    assert!(!PLANET_CLASSES.is_empty(), "planet class table is empty");
    for class in PLANET_CLASSES {
        assert!(!class.variants.is_empty(), "planet class {} has no variants", class.name);
    }
    assert!(
        !NAME_PREFIXES.is_empty() && !NAME_SUFFIXES.is_empty(),
        "name fragment tables are empty"
    );
    assert!(!ENVIRONMENT_EFFECTS.is_empty(), "environment effect table is empty");
    for effect in ENVIRONMENT_EFFECTS {
        assert!(
            (1..=5).contains(&effect.max_severity),
            "effect {} max severity {} outside 1..=5",
            effect.kind,
            effect.max_severity
        );
    }
    assert!(!RESOURCE_CATEGORIES.is_empty(), "resource table is empty");
    assert!(!LIFE_FORMS.is_empty(), "life form table is empty");
    for tiers in [&ENEMY_TIERS, &PUZZLE_TIERS] {
        assert!(!tiers.low.is_empty() && !tiers.medium.is_empty() && !tiers.high.is_empty());
    }
    assert!(
        !NPC_TIERS.common.is_empty()
            && !NPC_TIERS.uncommon.is_empty()
            && !NPC_TIERS.rare.is_empty()
    );
    assert!(!ENEMY_TEMPLATES.is_empty(), "enemy template table is empty");
    assert!(!ENEMY_MODIFIERS.is_empty(), "enemy modifier table is empty");
    for &tech in TechLevel::ALL {
        assert!(!abilities_for(tech).is_empty(), "no abilities for tech level {tech}");
        assert!(!enemy_descriptions_for(tech).is_empty(), "no descriptions for tech level {tech}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_populated() {
        assert_tables_populated();
    }

    #[test]
    fn eleven_star_types() {
        assert_eq!(STAR_TYPES.len(), 11);
        for star in STAR_TYPES {
            assert!((0.0..=1.0).contains(&star.life_prob), "{} life_prob out of range", star.name);
        }
    }

    #[test]
    fn enemy_templates_grow_in_threat() {
        assert_eq!(ENEMY_TEMPLATES.len(), 8);
        for pair in ENEMY_TEMPLATES.windows(2) {
            assert!(pair[0].base_health < pair[1].base_health);
            assert!(pair[0].base_damage < pair[1].base_damage);
        }
    }

    #[test]
    fn ability_templates_have_an_effect() {
        for &tech in TechLevel::ALL {
            let templates = abilities_for(tech);
            assert!(templates.len() >= 5, "{tech} needs five templates for max loadout");
            for t in templates {
                assert!(
                    t.damage.is_some() || t.healing.is_some(),
                    "ability {} neither damages nor heals",
                    t.id
                );
            }
        }
    }

    #[test]
    fn danger_tier_boundaries() {
        assert_eq!(ENEMY_TIERS.for_danger(3), ENEMY_TIERS.low);
        assert_eq!(ENEMY_TIERS.for_danger(4), ENEMY_TIERS.medium);
        assert_eq!(ENEMY_TIERS.for_danger(6), ENEMY_TIERS.medium);
        assert_eq!(ENEMY_TIERS.for_danger(7), ENEMY_TIERS.high);
    }

    #[test]
    fn npc_roll_boundaries() {
        assert_eq!(NPC_TIERS.for_roll(0.59), NPC_TIERS.common);
        assert_eq!(NPC_TIERS.for_roll(0.6), NPC_TIERS.uncommon);
        assert_eq!(NPC_TIERS.for_roll(0.9), NPC_TIERS.rare);
    }

    #[test]
    fn content_ids_have_no_spaces() {
        let all = [
            ENEMY_TIERS.low, ENEMY_TIERS.medium, ENEMY_TIERS.high,
            PUZZLE_TIERS.low, PUZZLE_TIERS.medium, PUZZLE_TIERS.high,
            NPC_TIERS.common, NPC_TIERS.uncommon, NPC_TIERS.rare,
        ];
        for id in all.iter().flat_map(|t| t.iter()) {
            assert!(!id.contains(' '), "content id {id} contains a space");
        }
    }
}
