/// Read-only reference data describing a world.
///
/// Templates fall back to these names whenever the game state does not name
/// a recognized place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldData {
    /// Name of the world.
    pub name: &'static str,
    /// Canonical kingdom name.
    pub kingdom: &'static str,
    /// Canonical town name.
    pub town: &'static str,
    /// Opening scene, used when no location or prior narration exists.
    pub starting_scenario: &'static str,
    /// Name used for the player when the state names nobody.
    pub default_traveler: &'static str,
}

/// The world of Ethoria.
pub static ETHORIA: WorldData = WorldData {
    name: "Ethoria",
    kingdom: "Valdor",
    town: "Ravenhurst",
    starting_scenario: "You stand at the edge of the Whispering Pines, a half day's walk from \
                        Ravenhurst, as cold rain drips from the boughs overhead.",
    default_traveler: "The traveler",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_scenario_mentions_town() {
        assert!(ETHORIA.starting_scenario.contains(ETHORIA.town));
        assert!(!ETHORIA.starting_scenario.contains("  "));
    }
}
