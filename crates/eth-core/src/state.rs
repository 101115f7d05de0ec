use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::world::WorldData;

/// The player's portion of the game state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerState {
    /// Display name chosen by the player.
    pub name: Option<String>,
    /// Item name to count.
    #[serde(deserialize_with = "null_as_default")]
    pub inventory: BTreeMap<String, i64>,
    /// Current health.
    pub health: Option<i64>,
    /// Maximum health.
    #[serde(alias = "maxHealth")]
    pub max_health: Option<i64>,
}

/// Snapshot of the player and world as the caller currently sees it.
///
/// Every field is optional: snapshots come from browser storage or hand-written
/// JSON and may be partial. Read it through [`GameState::resolve`], which
/// applies all defaults in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// Player details, if a player has been created.
    pub player: Option<PlayerState>,
    /// Name of the character card the player is using.
    #[serde(alias = "characterName")]
    pub character_name: Option<String>,
    /// Free-form town description.
    pub town: Option<String>,
    /// Free-form kingdom description.
    pub kingdom: Option<String>,
    /// Free-form description of where the player stands.
    pub location: Option<String>,
}

/// A fully-defaulted view of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedState {
    /// Name used when quoting the player.
    pub who: String,
    /// Canonical town name or `"the town"`.
    pub town: String,
    /// Canonical kingdom name or `"the kingdom"`.
    pub kingdom: String,
    /// Current location or the world's starting scenario.
    pub area: String,
    /// Inventory entries ordered by item name.
    pub inventory: Vec<(String, i64)>,
    /// Current health, zero when unknown.
    pub health: i64,
    /// Maximum health, zero when unknown.
    pub max_health: i64,
}

impl GameState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a state from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the state as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a state from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Write the state to a JSON file.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        fs::write(path, self.to_json()?).map_err(|e| CoreError::io(path, e))
    }

    /// Set the player's display name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_entry().name = Some(name.into());
        self
    }

    /// Set the character card name.
    pub fn with_character_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }

    /// Set the town.
    pub fn with_town(mut self, town: impl Into<String>) -> Self {
        self.town = Some(town.into());
        self
    }

    /// Set the kingdom.
    pub fn with_kingdom(mut self, kingdom: impl Into<String>) -> Self {
        self.kingdom = Some(kingdom.into());
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add `count` of an item to the inventory.
    pub fn with_item(mut self, item: impl Into<String>, count: i64) -> Self {
        *self.player_entry().inventory.entry(item.into()).or_insert(0) += count;
        self
    }

    /// Set current and maximum health.
    pub fn with_health(mut self, health: i64, max_health: i64) -> Self {
        let player = self.player_entry();
        player.health = Some(health);
        player.max_health = Some(max_health);
        self
    }

    fn player_entry(&mut self) -> &mut PlayerState {
        self.player.get_or_insert_with(PlayerState::default)
    }

    /// Apply every default and name-resolution rule against `world`.
    pub fn resolve(&self, world: &WorldData) -> ResolvedState {
        let player = self.player.as_ref();

        let who = player
            .and_then(|p| non_empty(p.name.as_deref()))
            .or_else(|| non_empty(self.character_name.as_deref()))
            .unwrap_or(world.default_traveler)
            .to_string();

        let town = canonical_or(self.town.as_deref(), world.town, "the town");
        let kingdom = canonical_or(self.kingdom.as_deref(), world.kingdom, "the kingdom");

        let area = non_empty(self.location.as_deref())
            .unwrap_or(world.starting_scenario)
            .to_string();

        let inventory = player
            .map(|p| {
                p.inventory
                    .iter()
                    .map(|(name, count)| (name.clone(), *count))
                    .collect()
            })
            .unwrap_or_default();

        ResolvedState {
            who,
            town,
            kingdom,
            area,
            inventory,
            health: player.and_then(|p| p.health).unwrap_or(0),
            max_health: player.and_then(|p| p.max_health).unwrap_or(0),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

fn canonical_or(value: Option<&str>, canonical: &str, fallback: &str) -> String {
    if value.is_some_and(|v| v.contains(canonical)) {
        canonical.to_string()
    } else {
        fallback.to_string()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ETHORIA;

    fn full_state() -> GameState {
        GameState::new()
            .with_player_name("Aria")
            .with_character_name("Seraphine")
            .with_town("the walled town of Ravenhurst")
            .with_kingdom("Kingdom of Valdor")
            .with_location("the old mill")
            .with_item("torch", 2)
            .with_item("rope", 1)
            .with_health(17, 20)
    }

    #[test]
    fn resolve_full_state() {
        let resolved = full_state().resolve(&ETHORIA);
        assert_eq!(resolved.who, "Aria");
        assert_eq!(resolved.town, "Ravenhurst");
        assert_eq!(resolved.kingdom, "Valdor");
        assert_eq!(resolved.area, "the old mill");
        assert_eq!(
            resolved.inventory,
            vec![("rope".to_string(), 1), ("torch".to_string(), 2)]
        );
        assert_eq!((resolved.health, resolved.max_health), (17, 20));
    }

    #[test]
    fn unknown_places_fall_back_to_generic_names() {
        let resolved = GameState::new()
            .with_town("Millbrook")
            .with_kingdom("Aster")
            .resolve(&ETHORIA);
        assert_eq!(resolved.town, "the town");
        assert_eq!(resolved.kingdom, "the kingdom");
    }

    #[test]
    fn canonical_match_is_case_sensitive() {
        let resolved = GameState::new().with_town("ravenhurst").resolve(&ETHORIA);
        assert_eq!(resolved.town, "the town");
    }

    #[test]
    fn who_falls_back_to_character_name() {
        let resolved = GameState::new()
            .with_player_name("")
            .with_character_name("Seraphine")
            .resolve(&ETHORIA);
        assert_eq!(resolved.who, "Seraphine");
    }

    #[test]
    fn empty_state_gets_safe_defaults() {
        let resolved = GameState::new().resolve(&ETHORIA);
        assert_eq!(resolved.who, ETHORIA.default_traveler);
        assert_eq!(resolved.area, ETHORIA.starting_scenario);
        assert!(resolved.inventory.is_empty());
        assert_eq!((resolved.health, resolved.max_health), (0, 0));
    }

    #[test]
    fn empty_location_uses_starting_scenario() {
        let resolved = GameState::new().with_location("").resolve(&ETHORIA);
        assert_eq!(resolved.area, ETHORIA.starting_scenario);
    }

    #[test]
    fn with_item_accumulates() {
        let state = GameState::new().with_item("arrow", 5).with_item("arrow", 3);
        let resolved = state.resolve(&ETHORIA);
        assert_eq!(resolved.inventory, vec![("arrow".to_string(), 8)]);
    }

    #[test]
    fn parses_partial_camel_case_json() {
        let json = r#"{
            "characterName": "Seraphine",
            "player": { "inventory": { "potion": 3 }, "health": 9, "maxHealth": 12 }
        }"#;
        let state = GameState::from_json(json).unwrap();
        let resolved = state.resolve(&ETHORIA);
        assert_eq!(resolved.who, "Seraphine");
        assert_eq!(resolved.inventory, vec![("potion".to_string(), 3)]);
        assert_eq!((resolved.health, resolved.max_health), (9, 12));
    }

    #[test]
    fn parses_null_fields() {
        let json = r#"{ "player": { "name": null, "inventory": null }, "town": null }"#;
        let state = GameState::from_json(json).unwrap();
        assert!(state.player.as_ref().unwrap().inventory.is_empty());
        assert_eq!(state.resolve(&ETHORIA).town, "the town");
    }

    #[test]
    fn parses_empty_object() {
        assert_eq!(GameState::from_json("{}").unwrap(), GameState::new());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            GameState::from_json("{ not json"),
            Err(CoreError::Json(_))
        ));
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = full_state();
        state.save(&path).unwrap();
        assert_eq!(GameState::load(&path).unwrap(), state);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameState::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
