//! Response generation entry points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use eth_core::{ChatMessage, GameState, WorldData};

use crate::intent::{parse_intent, strip_prefix};
use crate::narrator::Narrator;

/// Something that answers a player action with narration.
///
/// The offline engine is one implementation; networked generators plug in
/// behind the same call so sessions do not care which one is used.
pub trait ResponseGenerator {
    /// Produce the reply to `action` given the current state and history.
    fn respond(&mut self, action: &str, state: &GameState, history: &[ChatMessage]) -> String;
}

/// Generate a reply to `action` using the thread-local RNG.
///
/// Never fails and never returns an empty string. The content safety filter
/// is *not* applied here; see [`crate::check_content_safety`].
pub fn generate_adventure_response(
    action: &str,
    state: &GameState,
    history: &[ChatMessage],
) -> String {
    generate_adventure_response_with(action, state, history, &mut rand::rng())
}

/// Generate a reply to `action`, drawing randomness from `rng`.
pub fn generate_adventure_response_with<R: Rng>(
    action: &str,
    state: &GameState,
    history: &[ChatMessage],
    rng: &mut R,
) -> String {
    narrate(&Narrator::default(), action, state, history, rng)
}

fn narrate<R: Rng>(
    narrator: &Narrator,
    action: &str,
    state: &GameState,
    history: &[ChatMessage],
    rng: &mut R,
) -> String {
    let cleaned = strip_prefix(action);
    let intent = parse_intent(cleaned);
    debug!(intent = intent.name(), action = cleaned, "classified action");
    let resolved = state.resolve(narrator.world());
    narrator.render(&intent, &resolved, cleaned, history, rng)
}

/// The offline adventure engine with its own RNG.
pub struct OfflineAdventure {
    narrator: Narrator,
    rng: StdRng,
}

impl OfflineAdventure {
    /// Create an engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an engine with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            narrator: Narrator::default(),
            rng,
        }
    }

    /// Narrate a different world.
    pub fn with_world(mut self, world: WorldData) -> Self {
        self.narrator = Narrator::new(world);
        self
    }
}

impl Default for OfflineAdventure {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseGenerator for OfflineAdventure {
    fn respond(&mut self, action: &str, state: &GameState, history: &[ChatMessage]) -> String {
        narrate(&self.narrator, action, state, history, &mut self.rng)
    }
}
