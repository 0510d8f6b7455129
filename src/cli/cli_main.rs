use super::cli_equilibrium::equilibrium_menu;
use super::cli_examples::examples_menu;
use crate::History::HistoryLog;
use crate::settings::Settings;
use log::error;
use std::io::{self, Write};

pub fn run_interactive_menu(settings: &Settings) {
    let history_path = settings.history_path();
    let mut history = match HistoryLog::load(&history_path) {
        Ok(history) => history,
        Err(e) => {
            error!("{}, starting with an empty history", e);
            HistoryLog::new()
        }
    };
    history.pretty_print();
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => equilibrium_menu(&mut history, &history_path),
            "2" => history.pretty_print(),
            "3" => {
                history.clear();
                match history.save(&history_path) {
                    Ok(()) => println!("History cleared"),
                    Err(e) => error!("{}", e),
                }
            }
            "4" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Chemical equilibrium calculator: aA + bB <=> cC + dD \n
    equilibrium concentrations from initial concentrations and Kc \n \x1b[0m"
    );
    println!("\x1b[33m1. Compute equilibrium\x1b[0m");
    println!("\x1b[33m2. Show history\x1b[0m");
    println!("\x1b[33m3. Clear history\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    flush_prompt(&mut io::stdout());
}

/// makes a `print!` prompt visible before reading; a failed flush is logged, not fatal
pub(super) fn flush_prompt<W: Write>(writer: &mut W) -> bool {
    match writer.flush() {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to flush the prompt: {}", e);
            false
        }
    }
}

pub(super) fn get_user_input() -> String {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // end of input behaves like "exit"
        Ok(0) => "0".to_string(),
        Ok(_) => input,
        Err(e) => {
            error!("Failed to read input: {}", e);
            "0".to_string()
        }
    }
}
