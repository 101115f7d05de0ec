//! Narrator for turning classified actions into text.

mod templates;

pub use templates::{FLAVOR_LINES, MAX_DAMAGE, MIN_DAMAGE, Narrator};
