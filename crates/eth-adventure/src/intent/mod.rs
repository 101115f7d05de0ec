//! Action classification.

mod rules;

pub use rules::{Intent, parse_intent, strip_prefix};
