//! Narrative templates for each kind of action.

use rand::Rng;

use eth_core::{ChatMessage, ETHORIA, ResolvedState, WorldData, last_non_user};

use crate::intent::Intent;

/// Lowest damage an attack can deal.
pub const MIN_DAMAGE: u32 = 4;
/// Highest damage an attack can deal.
pub const MAX_DAMAGE: u32 = 11;

/// Atmospheric lines mixed into free-form story continuations.
pub const FLAVOR_LINES: [&str; 4] = [
    "Somewhere in the distance, a crow calls twice and falls silent.",
    "The wind shifts, carrying the smell of rain and far-off chimney smoke.",
    "A shaft of pale light breaks through the clouds, then is gone.",
    "Leaves stir at the edge of the path, though no one is there.",
];

/// Renders classified actions as narration for a particular world.
#[derive(Debug, Clone, Copy)]
pub struct Narrator {
    world: WorldData,
}

impl Narrator {
    /// Create a narrator for the given world.
    pub fn new(world: WorldData) -> Self {
        Self { world }
    }

    /// The world this narrator describes.
    pub fn world(&self) -> &WorldData {
        &self.world
    }

    /// Render the response for `intent`.
    ///
    /// `action` is the prefix-stripped player text, quoted verbatim when the
    /// story is continued freely. Randomness is only drawn for attacks and
    /// story continuations.
    pub fn render<R: Rng>(
        &self,
        intent: &Intent,
        resolved: &ResolvedState,
        action: &str,
        history: &[ChatMessage],
        rng: &mut R,
    ) -> String {
        match intent {
            Intent::Look => self.describe_surroundings(resolved),
            Intent::Inventory => self.describe_inventory(resolved),
            Intent::Help => self.help(),
            Intent::Travel { destination } => self.narrate_travel(destination),
            Intent::Talk { addressee } => self.narrate_talk(addressee),
            Intent::Attack { target } => {
                let damage = rng.random_range(MIN_DAMAGE..=MAX_DAMAGE);
                self.narrate_attack(target, &resolved.area, damage)
            }
            Intent::Use { item } => self.narrate_use(item),
            Intent::Rest => self.narrate_rest(),
            Intent::Narrate => {
                let flavor = FLAVOR_LINES[rng.random_range(0..FLAVOR_LINES.len())];
                self.continue_story(resolved, action, history, flavor)
            }
        }
    }

    /// Describe where the player stands.
    pub fn describe_surroundings(&self, resolved: &ResolvedState) -> String {
        format!(
            "Location: {}\n\nThe air smells of wet pine and damp earth. Faint tracks cut \
             across the mud, heading off toward {}. Beyond the ridge, the banners of {} \
             hang limp in the drizzle.",
            resolved.area, resolved.town, resolved.kingdom
        )
    }

    /// List the pack contents and health.
    pub fn describe_inventory(&self, resolved: &ResolvedState) -> String {
        let items = if resolved.inventory.is_empty() {
            "nothing of note".to_string()
        } else {
            resolved
                .inventory
                .iter()
                .map(|(name, count)| format!("{name} x{count}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "You rummage through your pack: {items}.\nHealth: {}/{}",
            resolved.health, resolved.max_health
        )
    }

    /// Usage hints.
    pub fn help(&self) -> String {
        "Try: look, go to <place>, talk to <someone>, attack <target>, rest, use <item>, \
         inventory.\nStart a line with \"Story:\" to narrate freely instead of giving a command."
            .to_string()
    }

    /// Narrate setting out for a destination.
    pub fn narrate_travel(&self, destination: &str) -> String {
        format!(
            "You set out toward {destination}. The road bends beneath dripping branches, \
             and little by little the way ahead opens up."
        )
    }

    /// Narrate approaching someone to talk.
    pub fn narrate_talk(&self, addressee: &str) -> String {
        format!(
            "You approach {addressee}. They turn to face you, wary but willing to listen. \
             What do you say?"
        )
    }

    /// Narrate a blow against a target.
    pub fn narrate_attack(&self, target: &str, area: &str, damage: u32) -> String {
        format!(
            "You lunge at {target} and land a blow for {damage} damage.\nAround you: {area}\n\
             The fight is not over yet."
        )
    }

    /// Narrate using an item.
    pub fn narrate_use(&self, item: &str) -> String {
        format!("You use {item}. A moment later you feel its effect settle over you.")
    }

    /// Narrate resting.
    pub fn narrate_rest(&self) -> String {
        "You find a sheltered spot and rest a while. The ache in your limbs eases and your \
         thoughts grow clearer."
            .to_string()
    }

    /// Continue the story from the last narrated line.
    ///
    /// The opening line repeats the most recent non-player message, or the
    /// world's starting scenario when there is none.
    pub fn continue_story(
        &self,
        resolved: &ResolvedState,
        action: &str,
        history: &[ChatMessage],
        flavor: &str,
    ) -> String {
        let thread = last_non_user(history)
            .map(|m| m.content.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or(self.world.starting_scenario);
        [
            thread.to_string(),
            String::new(),
            format!("{}: \"{action}\"", resolved.who),
            flavor.to_string(),
            "What will you do next?".to_string(),
        ]
        .join("\n")
    }
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new(ETHORIA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eth_core::GameState;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn resolved() -> ResolvedState {
        GameState::new()
            .with_player_name("Aria")
            .with_town("Ravenhurst")
            .with_kingdom("Valdor")
            .with_location("the old mill")
            .with_item("torch", 2)
            .with_item("rope", 1)
            .with_health(17, 20)
            .resolve(&ETHORIA)
    }

    #[test]
    fn surroundings_mention_area_and_places() {
        let text = Narrator::default().describe_surroundings(&resolved());
        assert!(text.contains("the old mill"));
        assert!(text.contains("wet pine"));
        assert!(text.contains("tracks"));
        assert!(text.contains("Ravenhurst"));
        assert!(text.contains("Valdor"));
    }

    #[test]
    fn inventory_lists_items_and_health() {
        let text = Narrator::default().describe_inventory(&resolved());
        assert_eq!(
            text,
            "You rummage through your pack: rope x1, torch x2.\nHealth: 17/20"
        );
    }

    #[test]
    fn empty_inventory() {
        let text = Narrator::default().describe_inventory(&GameState::new().resolve(&ETHORIA));
        assert!(text.contains("nothing of note"));
        assert!(text.contains("Health: 0/0"));
    }

    #[test]
    fn help_is_two_lines() {
        let text = Narrator::default().help();
        assert_eq!(text.lines().count(), 2);
        for verb in ["look", "go to", "talk to", "attack", "rest", "use", "inventory"] {
            assert!(text.contains(verb), "missing {verb}");
        }
        assert!(text.contains("Story:"));
    }

    #[test]
    fn attack_template_interpolates() {
        let text = Narrator::default().narrate_attack("goblin", "the old mill", 7);
        assert!(text.contains("goblin"));
        assert!(text.contains("for 7 damage"));
        assert!(text.contains("the old mill"));
    }

    #[test]
    fn continue_story_uses_last_non_user_message() {
        let history = vec![
            ChatMessage::assistant("Thread X"),
            ChatMessage::user("go north"),
        ];
        let text = Narrator::default().continue_story(&resolved(), "I wait", &history, "Rain.");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Thread X", "", "Aria: \"I wait\"", "Rain.", "What will you do next?"]
        );
    }

    #[test]
    fn continue_story_without_history_uses_starting_scenario() {
        let text = Narrator::default().continue_story(&resolved(), "I wait", &[], "Rain.");
        assert_eq!(text.lines().next(), Some(ETHORIA.starting_scenario));
    }

    #[test]
    fn render_narrate_picks_a_flavor_line() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = Narrator::default().render(
            &Intent::Narrate,
            &resolved(),
            "I hum a tune",
            &[],
            &mut rng,
        );
        assert!(FLAVOR_LINES.iter().any(|line| text.contains(line)));
    }

    #[test]
    fn render_attack_rolls_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let narrator = Narrator::default();
        let intent = Intent::Attack {
            target: "goblin".to_string(),
        };
        for _ in 0..50 {
            let text = narrator.render(&intent, &resolved(), "attack goblin", &[], &mut rng);
            let damage = (MIN_DAMAGE..=MAX_DAMAGE)
                .find(|d| text.contains(&format!("for {d} damage")));
            assert!(damage.is_some(), "no damage in {text}");
        }
    }
}
