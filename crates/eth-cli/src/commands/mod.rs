pub mod act;
pub mod check;
pub mod new;
pub mod play;

use std::fs;
use std::path::Path;

use eth_adventure::SessionConfig;
use eth_core::{ChatMessage, ETHORIA, GameState};

/// Build the session config for `play` from its command-line flags.
pub fn session_config(seed: Option<u64>, content_filter: bool) -> SessionConfig {
    let config = SessionConfig::default().with_content_filter(content_filter);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// A fresh traveler standing in the starting scenario.
fn starter_state(name: Option<&str>) -> GameState {
    GameState::new()
        .with_player_name(name.unwrap_or("Wanderer"))
        .with_town(ETHORIA.town)
        .with_kingdom(ETHORIA.kingdom)
        .with_item("torch", 1)
        .with_item("waterskin", 1)
        .with_item("rations", 3)
        .with_health(20, 20)
}

/// Load a game state file, or start fresh when none is given.
fn load_state(path: Option<&Path>) -> Result<GameState, String> {
    match path {
        Some(path) => GameState::load(path).map_err(|e| e.to_string()),
        None => Ok(starter_state(None)),
    }
}

/// Load a conversation history file (a JSON array of messages).
fn load_history(path: Option<&Path>) -> Result<Vec<ChatMessage>, String> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot access {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("invalid history {}: {e}", path.display()))
}
