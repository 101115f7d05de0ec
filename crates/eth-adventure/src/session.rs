//! Adventure session management.
//!
//! `AdventureSession` is the caller that composes the content safety filter
//! with response generation. It owns the game state and the conversation
//! history, records each accepted turn, and can be saved to and restored
//! from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use eth_core::{ChatMessage, CoreError, GameState};

use crate::config::SessionConfig;
use crate::engine::{OfflineAdventure, ResponseGenerator};
use crate::error::{AdventureError, AdventureResult};
use crate::safety::screen_content;

/// Serializable state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The game state.
    #[serde(default)]
    pub state: GameState,
    /// Conversation history, oldest first.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// An interactive adventure session.
pub struct AdventureSession<G = OfflineAdventure> {
    generator: G,
    state: GameState,
    history: Vec<ChatMessage>,
    config: SessionConfig,
}

impl AdventureSession<OfflineAdventure> {
    /// Create a session narrated by the offline engine.
    pub fn new(state: GameState, config: SessionConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => OfflineAdventure::seeded(seed),
            None => OfflineAdventure::new(),
        };
        Self::with_generator(generator, state, config)
    }

    /// Restore a session from a snapshot.
    pub fn from_snapshot(snapshot: SessionSnapshot, config: SessionConfig) -> Self {
        let mut session = Self::new(snapshot.state, config);
        session.history = snapshot.history;
        session.trim_history();
        session
    }

    /// Load a session snapshot from a JSON file.
    pub fn load(path: &Path, config: SessionConfig) -> AdventureResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
        let snapshot: SessionSnapshot = serde_json::from_str(&json).map_err(CoreError::from)?;
        info!(
            path = %path.display(),
            messages = snapshot.history.len(),
            "loaded session"
        );
        Ok(Self::from_snapshot(snapshot, config))
    }
}

impl<G: ResponseGenerator> AdventureSession<G> {
    /// Create a session narrated by `generator`.
    pub fn with_generator(generator: G, state: GameState, config: SessionConfig) -> Self {
        Self {
            generator,
            state,
            history: Vec::new(),
            config,
        }
    }

    /// Get the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get a mutable reference to the game state.
    ///
    /// The narrator never changes the state; callers apply the consequences
    /// of a turn here.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Get the conversation history, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Process a line of player input and return the narration.
    ///
    /// Blank input yields an empty reply and is not recorded. Input rejected
    /// by the content filter is not recorded either.
    pub fn process(&mut self, input: &str) -> AdventureResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        if self.config.content_filter {
            if let Some(category) = screen_content(trimmed) {
                warn!(%category, "rejected player input");
                return Err(AdventureError::ContentRejected(category));
            }
        }

        let reply = self.generator.respond(trimmed, &self.state, &self.history);
        self.history.push(ChatMessage::user(trimmed));
        self.history.push(ChatMessage::assistant(reply.clone()));
        self.trim_history();
        debug!(messages = self.history.len(), "recorded turn");

        Ok(reply)
    }

    /// Capture the state and history.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            history: self.history.clone(),
        }
    }

    /// Write a snapshot of the session to a JSON file.
    pub fn save(&self, path: &Path) -> AdventureResult<()> {
        let json = serde_json::to_string_pretty(&self.snapshot()).map_err(CoreError::from)?;
        fs::write(path, json).map_err(|e| CoreError::io(path, e))?;
        info!(
            path = %path.display(),
            messages = self.history.len(),
            "saved session"
        );
        Ok(())
    }

    fn trim_history(&mut self) {
        let limit = self.config.history_limit;
        if limit > 0 && self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }
}
