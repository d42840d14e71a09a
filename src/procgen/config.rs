/// Configuration for galaxy generation.
#[derive(Debug, Clone)]
pub struct GalaxyGenConfig {
    /// RNG seed for deterministic generation. `None` seeds from entropy.
    pub seed: Option<i64>,
    /// Planet count range (inclusive) when a system's count is not given.
    pub planets_per_system: (u32, u32),
    /// System count range (inclusive) when a region's count is not given.
    pub systems_per_region: (u32, u32),
    /// Upper bound on the systems each system picks as neighbors.
    pub max_system_links: usize,
    /// Fresh name draws before falling back to a numeric suffix.
    pub name_attempts: u32,
    /// Region label for planets generated outside any region.
    pub default_region: String,
}

impl GalaxyGenConfig {
    /// Swap inverted ranges so random draws never see `min > max`, and keep
    /// at least one neighbor pick per system.
    pub fn normalized(mut self) -> Self {
        let order = |(a, b): (u32, u32)| if a > b { (b, a) } else { (a, b) };
        self.planets_per_system = order(self.planets_per_system);
        self.systems_per_region = order(self.systems_per_region);
        self.max_system_links = self.max_system_links.max(1);
        self
    }
}

impl Default for GalaxyGenConfig {
    fn default() -> Self {
        Self {
            seed: None,
            planets_per_system: (1, 8),
            systems_per_region: (3, 10),
            max_system_links: 3,
            name_attempts: 100,
            default_region: "Uncharted Space".to_string(),
        }
    }
}
