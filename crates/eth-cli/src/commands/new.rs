use std::path::Path;

use colored::Colorize;
use tracing::info;

pub fn run(file: &Path, name: Option<&str>) -> Result<(), String> {
    if file.exists() {
        return Err(format!("{} already exists", file.display()));
    }

    let state = super::starter_state(name);
    state.save(file).map_err(|e| e.to_string())?;
    info!(path = %file.display(), "wrote starter state");

    println!("  {} {}", "Created".green().bold(), file.display());
    println!("  Play with: ethoria play --state {}", file.display());
    Ok(())
}
