use super::cli_main::{flush_prompt, get_user_input};
use crate::Examples::equilibrium_examples::equilibrium_examples;
use std::io;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. A + B <=> C + D, Kc = 1");
        println!("2. 2A + B <=> C + D, Kc = 0.5");
        println!("3. Kc too large: reactants run out");
        println!("4. Reverse shift is out of reach of the forward scan");
        println!("5. Small Kc, reading of the result");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        flush_prompt(&mut io::stdout());

        let choice = get_user_input();
        match choice.trim() {
            "1" => equilibrium_examples(0),
            "2" => equilibrium_examples(1),
            "3" => equilibrium_examples(2),
            "4" => equilibrium_examples(3),
            "5" => equilibrium_examples(4),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
