use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use eth_adventure::{AdventureSession, SessionConfig};

pub fn run(
    state: Option<&Path>,
    session_file: Option<&Path>,
    config: SessionConfig,
) -> Result<(), String> {
    let mut session = match session_file {
        Some(path) if path.exists() => {
            AdventureSession::load(path, config).map_err(|e| e.to_string())?
        }
        _ => AdventureSession::new(super::load_state(state)?, config),
    };

    println!("  {} an adventure in Ethoria", "Starting".bold());
    if !session.history().is_empty() {
        println!("  Resumed with {} messages of history", session.history().len());
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            break;
        }

        match session.process(input) {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    if let Some(path) = session_file {
        session.save(path).map_err(|e| e.to_string())?;
        println!("  {} {}", "Saved".green().bold(), path.display());
    }

    Ok(())
}
