use std::path::Path;

use eth_adventure::{AdventureError, OfflineAdventure, ResponseGenerator, screen_content};

pub fn run(
    action: &str,
    state: Option<&Path>,
    history: Option<&Path>,
    seed: Option<u64>,
    content_filter: bool,
) -> Result<(), String> {
    if content_filter {
        if let Some(category) = screen_content(action) {
            return Err(AdventureError::ContentRejected(category).to_string());
        }
    }

    let state = super::load_state(state)?;
    let history = super::load_history(history)?;

    let mut engine = match seed {
        Some(seed) => OfflineAdventure::seeded(seed),
        None => OfflineAdventure::new(),
    };
    println!("{}", engine.respond(action, &state, &history));
    Ok(())
}
