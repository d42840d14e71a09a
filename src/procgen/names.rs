use std::collections::HashSet;

use tracing::warn;

use super::seed::SeededRandom;
use super::tables::{NAME_PREFIXES, NAME_SUFFIXES};

/// Hands out prefix+suffix names, never repeating one within a session.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    used: HashSet<String>,
    max_attempts: u32,
}

impl NameRegistry {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            used: HashSet::new(),
            max_attempts,
        }
    }

    /// Draw fresh names until one is unused. Once the retry budget is spent,
    /// the last draw gets a numeric suffix instead.
    pub fn generate(&mut self, rng: &mut SeededRandom) -> String {
        let mut candidate = random_name(rng);
        let mut attempts = 1;
        while self.used.contains(&candidate) && attempts < self.max_attempts {
            candidate = random_name(rng);
            attempts += 1;
        }

        if self.used.contains(&candidate) {
            warn!(attempts, base = %candidate, "name space exhausted, appending numeric suffix");
            let mut n = rng.next_int(1, 999);
            while self.used.contains(&format!("{candidate} {n}")) {
                n += 1;
            }
            candidate = format!("{candidate} {n}");
        }

        self.used.insert(candidate.clone());
        candidate
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }
}

fn random_name(rng: &mut SeededRandom) -> String {
    let prefix = rng.choose(NAME_PREFIXES);
    let suffix = rng.choose(NAME_SUFFIXES);
    format!("{prefix} {suffix}")
}

/// Location id for a name: lowercase, whitespace runs become `_`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
