//! Content safety filter for player input.
//!
//! The filter is independent of response generation: nothing in
//! [`crate::engine`] calls it. Callers that want gated output screen the
//! input first, as [`crate::AdventureSession`] does.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Why a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyCategory {
    /// Self-harm, explicit sexual content, or graphic violence.
    Harmful,
    /// Hate speech.
    Hateful,
}

impl fmt::Display for SafetyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Harmful => write!(f, "harmful content"),
            Self::Hateful => write!(f, "hateful content"),
        }
    }
}

static PATTERNS: LazyLock<Vec<(SafetyCategory, Regex)>> = LazyLock::new(|| {
    [
        (
            SafetyCategory::Harmful,
            r"(?i)\b(suicide|self[- ]?harm|kill (?:myself|yourself)|cut(?:ting)? myself)\b",
        ),
        (
            SafetyCategory::Harmful,
            r"(?i)\b(rape\w*|molest\w*|porn\w*|explicit sex\w*|sexual assault|nsfw)\b",
        ),
        (
            SafetyCategory::Harmful,
            r"(?i)\b(gore|gory|tortur\w*|dismember\w*|mutilat\w*|disembowel\w*|behead\w*)\b",
        ),
        (
            SafetyCategory::Hateful,
            r"(?i)\b(genocide|ethnic cleansing|white power|racial purity|master race|heil hitler)\b",
        ),
        (
            SafetyCategory::Hateful,
            r"(?i)\b(subhumans?|inferior races?)\b",
        ),
    ]
    .into_iter()
    .map(|(category, pattern)| (category, Regex::new(pattern).expect("valid safety pattern")))
    .collect()
});

/// Return the category of the first disallowed term in `text`, if any.
pub fn screen_content(text: &str) -> Option<SafetyCategory> {
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(category, _)| *category)
}

/// `true` if `text` contains no disallowed terms.
pub fn check_content_safety(text: &str) -> bool {
    screen_content(text).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphic_violence_is_rejected() {
        assert!(!check_content_safety("I want to talk about gore and torture"));
        assert_eq!(
            screen_content("the bandit is TORTURED"),
            Some(SafetyCategory::Harmful)
        );
    }

    #[test]
    fn self_harm_and_sexual_content_is_rejected() {
        assert!(!check_content_safety("I think about suicide"));
        assert!(!check_content_safety("she wants to self-harm"));
        assert!(!check_content_safety("describe explicit sex"));
    }

    #[test]
    fn hate_speech_is_rejected() {
        assert_eq!(
            screen_content("they preach racial purity"),
            Some(SafetyCategory::Hateful)
        );
        assert!(!check_content_safety("those subhumans"));
    }

    #[test]
    fn ordinary_actions_pass() {
        assert!(check_content_safety("look around the room"));
        assert!(check_content_safety("attack goblin"));
        assert!(check_content_safety("kill the wolf"));
        assert!(check_content_safety(""));
    }

    #[test]
    fn matches_whole_words_only() {
        assert!(check_content_safety("travel to Goreham"));
        assert!(check_content_safety("talk to the tortoise"));
    }

    #[test]
    fn first_category_reported() {
        assert_eq!(
            screen_content("genocide and gore"),
            Some(SafetyCategory::Harmful)
        );
    }

    #[test]
    fn category_display() {
        assert_eq!(SafetyCategory::Hateful.to_string(), "hateful content");
    }
}
