use tracing::debug;

use crate::model::{Encounters, Location, LocationType};

use super::config::GalaxyGenConfig;
use super::description;
use super::names::{NameRegistry, slugify};
use super::planets::generate_planet;
use super::seed::SeededRandom;

/// Build a star system and its planets. Returns `[system, planets...]`.
///
/// A `planet_count` of `None` or `Some(0)` draws from the configured range.
/// Every planet is linked to the system on both ends.
pub fn generate_star_system(
    rng: &mut SeededRandom,
    names: &mut NameRegistry,
    config: &GalaxyGenConfig,
    region: &str,
    planet_count: Option<u32>,
) -> Vec<Location> {
    let name = names.generate(rng);
    let id = slugify(&name);

    let count = match planet_count {
        Some(n) if n > 0 => n,
        _ => {
            let (min, max) = config.planets_per_system;
            rng.next_int(i64::from(min), i64::from(max)) as u32
        }
    };

    let mut planets: Vec<Location> = (0..count)
        .map(|_| generate_planet(rng, names, region))
        .collect();

    for planet in &mut planets {
        planet.connect(&id);
    }

    let system = Location {
        description: description::compose([description::system_overview(
            &name,
            region,
            planets.len(),
        )]),
        connections: planets.iter().map(|p| p.id.clone()).collect(),
        danger_level: system_danger(&planets),
        id,
        name,
        location_type: LocationType::Space,
        encounters: Encounters::default(),
        region: region.to_string(),
        controlled_by: None,
        environment_effects: Vec::new(),
        discovered: false,
        visited: false,
    };

    debug!(system = %system.name, planets = planets.len(), "star system generated");

    let mut locations = Vec::with_capacity(planets.len() + 1);
    locations.push(system);
    locations.extend(planets);
    locations
}

/// Rounded mean of the planets' danger, 1 for an empty system.
fn system_danger(planets: &[Location]) -> u8 {
    if planets.is_empty() {
        return 1;
    }
    let total: u32 = planets.iter().map(|p| u32::from(p.danger_level)).sum();
    let mean = (f64::from(total) / planets.len() as f64).round() as u8;
    mean.clamp(1, 10)
}

/// Build a region of star systems and cross-link the systems.
///
/// A `system_count` of `None` or `Some(0)` draws from the configured range.
/// Each system picks between 1 and `min(max_system_links, others)` other
/// systems; edges are added on both ends without duplicates.
pub fn generate_region(
    rng: &mut SeededRandom,
    names: &mut NameRegistry,
    config: &GalaxyGenConfig,
    region: &str,
    system_count: Option<u32>,
) -> Vec<Location> {
    let count = match system_count {
        Some(n) if n > 0 => n,
        _ => {
            let (min, max) = config.systems_per_region;
            rng.next_int(i64::from(min), i64::from(max)) as u32
        }
    };

    let mut locations: Vec<Location> = Vec::new();
    for _ in 0..count {
        locations.extend(generate_star_system(rng, names, config, region, None));
    }

    let picks: usize = link_systems(rng, &mut locations, config.max_system_links)
        .iter()
        .sum();

    debug!(
        region,
        systems = count,
        picks,
        locations = locations.len(),
        "region generated"
    );
    locations
}

/// Cross-link system locations. Non-system locations are left alone.
///
/// Returns how many neighbors each system picked, in system order. A pick
/// that lands on an existing edge is counted but adds nothing.
pub fn link_systems(
    rng: &mut SeededRandom,
    locations: &mut [Location],
    max_links: usize,
) -> Vec<usize> {
    let system_indices: Vec<usize> = locations
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_system())
        .map(|(i, _)| i)
        .collect();

    let mut picks = Vec::with_capacity(system_indices.len());
    for &this in &system_indices {
        let others: Vec<usize> = system_indices
            .iter()
            .copied()
            .filter(|&i| i != this)
            .collect();
        if others.is_empty() {
            picks.push(0);
            continue;
        }

        let upper = max_links.clamp(1, others.len());
        let link_count = rng.next_int(1, upper as i64) as usize;
        for other in rng.shuffle(&others).into_iter().take(link_count) {
            connect_pair(locations, this, other);
        }
        picks.push(link_count);
    }
    picks
}

fn connect_pair(locations: &mut [Location], a: usize, b: usize) {
    let id_a = locations[a].id.clone();
    let id_b = locations[b].id.clone();
    locations[a].connect(&id_b);
    locations[b].connect(&id_a);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(seed: i64) -> (SeededRandom, NameRegistry, GalaxyGenConfig) {
        let config = GalaxyGenConfig::default();
        (SeededRandom::new(seed), NameRegistry::new(config.name_attempts), config)
    }

    #[test]
    fn system_then_planets() {
        let (mut rng, mut names, config) = setup(1);
        let locs = generate_star_system(&mut rng, &mut names, &config, "Test Region", Some(3));
        assert_eq!(locs.len(), 4);
        assert_eq!(locs[0].location_type, LocationType::Space);
        assert_eq!(locs[0].connections.len(), 3);
        for planet in &locs[1..] {
            assert_eq!(planet.location_type, LocationType::Planet);
            assert!(planet.connections.contains(&locs[0].id));
            assert!(locs[0].connections.contains(&planet.id));
        }
    }

    #[test]
    fn zero_planet_count_draws_from_range() {
        for seed in 0..50 {
            let (mut rng, mut names, config) = setup(seed);
            let locs = generate_star_system(&mut rng, &mut names, &config, "R", Some(0));
            let planets = locs.len() - 1;
            assert!((1..=8).contains(&planets), "seed {seed}: {planets} planets");
        }
    }

    #[test]
    fn system_danger_within_bounds() {
        for seed in 0..50 {
            let (mut rng, mut names, config) = setup(seed);
            let locs = generate_star_system(&mut rng, &mut names, &config, "R", None);
            assert!((1..=10).contains(&locs[0].danger_level));
        }
    }

    #[test]
    fn region_systems_are_linked() {
        let (mut rng, mut names, config) = setup(8);
        let locs = generate_region(&mut rng, &mut names, &config, "Outer Rim", Some(5));
        let systems: Vec<&Location> = locs.iter().filter(|l| l.is_system()).collect();
        assert_eq!(systems.len(), 5);
        for s in &systems {
            let linked = systems
                .iter()
                .filter(|o| o.id != s.id && s.is_connected_to(&o.id))
                .count();
            assert!((1..=4).contains(&linked), "{} links to {linked} systems", s.name);
        }
    }

    fn single_planet_systems(
        rng: &mut SeededRandom,
        names: &mut NameRegistry,
        n: usize,
    ) -> Vec<Location> {
        let config = GalaxyGenConfig::default();
        let mut locs = Vec::new();
        for _ in 0..n {
            locs.extend(generate_star_system(rng, names, &config, "R", Some(1)));
        }
        locs
    }

    fn system_degrees(locs: &[Location]) -> Vec<usize> {
        let systems: Vec<&Location> = locs.iter().filter(|l| l.is_system()).collect();
        systems
            .iter()
            .map(|s| {
                systems
                    .iter()
                    .filter(|o| o.id != s.id && s.is_connected_to(&o.id))
                    .count()
            })
            .collect()
    }

    #[test]
    fn picks_stay_within_link_cap() {
        for max_links in [1, 3] {
            for seed in 0..30 {
                let (mut rng, mut names, _) = setup(seed);
                let mut locs = single_planet_systems(&mut rng, &mut names, 6);
                let picks = link_systems(&mut rng, &mut locs, max_links);
                assert_eq!(picks.len(), 6);
                for p in picks {
                    assert!(
                        (1..=max_links.min(5)).contains(&p),
                        "seed {seed}, max {max_links}: picked {p}"
                    );
                }
            }
        }
    }

    #[test]
    fn single_link_cap_bounds_edge_count() {
        for seed in 0..30 {
            let (mut rng, mut names, _) = setup(seed);
            let mut locs = single_planet_systems(&mut rng, &mut names, 6);
            link_systems(&mut rng, &mut locs, 1);
            let degrees = system_degrees(&locs);
            assert!(degrees.iter().all(|&d| d >= 1), "seed {seed}: {degrees:?}");
            let edges: usize = degrees.iter().sum::<usize>() / 2;
            assert!(edges <= 6, "seed {seed}: {edges} edges");
        }
    }

    #[test]
    fn zero_link_cap_still_links_once() {
        let (mut rng, mut names, _) = setup(3);
        let mut locs = single_planet_systems(&mut rng, &mut names, 4);
        let picks = link_systems(&mut rng, &mut locs, 0);
        assert_eq!(picks, vec![1; 4]);
        assert!(system_degrees(&locs).iter().all(|&d| d >= 1));
    }

    #[test]
    fn single_system_region_has_no_cross_links() {
        let (mut rng, mut names, config) = setup(4);
        let locs = generate_region(&mut rng, &mut names, &config, "Lonely", Some(1));
        let system = &locs[0];
        assert_eq!(system.connections.len(), locs.len() - 1);
    }

    #[test]
    fn link_systems_respects_max_when_alone() {
        let (mut rng, mut names, config) = setup(12);
        let mut locs = Vec::new();
        for _ in 0..2 {
            locs.extend(generate_star_system(&mut rng, &mut names, &config, "R", Some(1)));
        }
        let picks = link_systems(&mut rng, &mut locs, 3);
        assert_eq!(picks, vec![1, 1]);
        // Two systems, each must reach the other exactly once.
        let a = &locs[0];
        let b = &locs[2];
        assert_eq!(a.connections.iter().filter(|c| **c == b.id).count(), 1);
        assert_eq!(b.connections.iter().filter(|c| **c == a.id).count(), 1);
    }

    #[test]
    fn connections_have_no_duplicates() {
        let (mut rng, mut names, config) = setup(77);
        let locs = generate_region(&mut rng, &mut names, &config, "Core", None);
        for loc in &locs {
            let mut sorted = loc.connections.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), loc.connections.len(), "{} has duplicate edges", loc.id);
        }
    }
}
