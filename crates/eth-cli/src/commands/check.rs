use colored::Colorize;

use eth_adventure::screen_content;

pub fn run(text: &str) -> Result<(), String> {
    match screen_content(text) {
        None => {
            println!("{}", "ok".green());
            Ok(())
        }
        Some(category) => Err(format!("rejected ({category})")),
    }
}
