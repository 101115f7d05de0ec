//! Core types for Ethoria: game state, chat history, world data, and caching.
//!
//! This crate defines the data the adventure engine reads. Nothing here
//! generates narrative; callers build a [`GameState`], resolve it against a
//! [`WorldData`], and hand both to the engine together with the conversation
//! history.

/// Time-bounded cache owned by its caller.
pub mod cache;
/// Error types used throughout the crate.
pub mod error;
/// Conversation history records.
pub mod message;
/// Game state snapshots and their normalized form.
pub mod state;
/// Static reference data for the world.
pub mod world;

/// Re-export the cache.
pub use cache::ExpiringCache;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export message types.
pub use message::{ChatMessage, Role, last_non_user};
/// Re-export state types.
pub use state::{GameState, PlayerState, ResolvedState};
/// Re-export world data.
pub use world::{ETHORIA, WorldData};
