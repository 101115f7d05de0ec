//! Ordered intent rules for player actions.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// What the player is trying to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Take in the surroundings.
    Look,
    /// Check the pack and health.
    Inventory,
    /// Show usage hints.
    Help,
    /// Travel somewhere.
    Travel {
        /// Where the player is heading.
        destination: String,
    },
    /// Start a conversation.
    Talk {
        /// Who the player addresses.
        addressee: String,
    },
    /// Attack something.
    Attack {
        /// What the player strikes at.
        target: String,
    },
    /// Use, consume, or equip an item.
    Use {
        /// The item name.
        item: String,
    },
    /// Rest and recover.
    Rest,
    /// Anything else: continue the story freely.
    Narrate,
}

impl Intent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Help => "help",
            Self::Travel { .. } => "travel",
            Self::Talk { .. } => "talk",
            Self::Attack { .. } => "attack",
            Self::Use { .. } => "use",
            Self::Rest => "rest",
            Self::Narrate => "narrate",
        }
    }
}

/// Target used when an attack names nothing.
const DEFAULT_ATTACK_TARGET: &str = "the threat";

struct IntentRule {
    pattern: Regex,
    build: fn(&Captures<'_>) -> Intent,
}

fn rule(pattern: &str, build: fn(&Captures<'_>) -> Intent) -> IntentRule {
    IntentRule {
        pattern: Regex::new(pattern).expect("valid intent pattern"),
        build,
    }
}

fn capture(caps: &Captures<'_>) -> String {
    caps.get(1)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

// Order matters: the first matching rule wins.
static RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        rule(r"^(look|examine|observe)", |_| Intent::Look),
        rule(r"^(inventory|bag|items)", |_| Intent::Inventory),
        rule(r"^(help|commands)", |_| Intent::Help),
        rule(r"^(?:go|travel|walk|move)\s+(?:to|towards)?\s*(.+)$", |caps| {
            Intent::Travel {
                destination: capture(caps),
            }
        }),
        rule(r"^(?:talk|speak)\s+(?:to\s+)?(.+)$", |caps| Intent::Talk {
            addressee: capture(caps),
        }),
        rule(r"^(?:attack|fight|strike)\s+(.*)$", |caps| {
            let target = capture(caps);
            Intent::Attack {
                target: if target.is_empty() {
                    DEFAULT_ATTACK_TARGET.to_string()
                } else {
                    target
                },
            }
        }),
        rule(r"^(?:use|consume|drink|equip)\s+(.*)$", |caps| Intent::Use {
            item: capture(caps),
        }),
        rule(r"^(rest|sleep|camp|recover)", |_| Intent::Rest),
    ]
});

static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:actions|story):").expect("valid prefix pattern"));

/// Remove a leading `Actions:` or `Story:` marker and surrounding whitespace.
pub fn strip_prefix(action: &str) -> &str {
    match PREFIX.find(action) {
        Some(m) => action[m.end()..].trim(),
        None => action.trim(),
    }
}

/// Classify an already-stripped action.
///
/// Matching runs on the trimmed, lower-cased text, so captured names come
/// back lower-cased. Text that matches no rule is [`Intent::Narrate`].
pub fn parse_intent(action: &str) -> Intent {
    let lower = action.trim().to_lowercase();
    RULES
        .iter()
        .find_map(|r| r.pattern.captures(&lower).map(|caps| (r.build)(&caps)))
        .unwrap_or(Intent::Narrate)
}
