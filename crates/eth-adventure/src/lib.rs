//! Offline adventure narrator for Ethoria.
//!
//! Turns a free-text player action into a short piece of narration without
//! calling any model. Actions are classified by an ordered list of intent
//! rules and rendered through fixed templates, with a little randomness for
//! combat damage and atmosphere. A separate content-safety filter screens
//! player input; [`AdventureSession`] composes the two and keeps the
//! conversation history.

/// Session configuration.
pub mod config;
/// Response generation entry points.
pub mod engine;
/// Error types for sessions.
pub mod error;
/// Action classification.
pub mod intent;
/// Narrative templates.
pub mod narrator;
/// Content safety filter.
pub mod safety;
/// Adventure session management.
pub mod session;

pub use config::SessionConfig;
pub use engine::{
    OfflineAdventure, ResponseGenerator, generate_adventure_response,
    generate_adventure_response_with,
};
pub use error::{AdventureError, AdventureResult};
pub use intent::{Intent, parse_intent, strip_prefix};
pub use narrator::Narrator;
pub use safety::{SafetyCategory, check_content_safety, screen_content};
pub use session::{AdventureSession, SessionSnapshot};
