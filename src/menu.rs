use crate::actions;
use crate::config::Settings;
use crate::console::Console;
use crate::filter;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Collect,
    Search,
    Move,
    Delete,
    Exit,
}

impl MenuChoice {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(MenuChoice::Collect),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::Move),
            "4" => Some(MenuChoice::Delete),
            "exit" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) {
    console.say(format!("\n{}", "=".repeat(60)));
    console.say("MENU:");
    console.say("  1 - Collect files from directory and save to JSON");
    console.say("  2 - Search for specific file");
    console.say("  3 - Move file/directory");
    console.say("  4 - Delete file/directory");
    console.say("  exit - Exit program");
    console.say("=".repeat(60));
}

/// Runs the menu until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, settings: &Settings) {
    loop {
        print_menu(console);
        let answer = console.ask("\nEnter choice (1-4 or 'exit'): ");

        if console.is_closed() {
            log::debug!("input closed, leaving menu");
            break;
        }

        let Some(choice) = MenuChoice::parse(&answer) else {
            console.say("Invalid choice. Please enter 1, 2, 3, 4, or 'exit'.");
            continue;
        };

        if choice == MenuChoice::Exit {
            console.say("\nGoodbye!");
            break;
        }

        console.say(format!("\n{}", "-".repeat(60)));
        let criteria = filter::setup_filters(console);
        console.say("-".repeat(60));

        match choice {
            MenuChoice::Collect => actions::collect_and_store(console, criteria.as_ref(), settings),
            MenuChoice::Search => actions::search(console, criteria.as_ref(), settings),
            // Move takes no filters; the prompt is kept so every action reads the same.
            MenuChoice::Move => actions::move_entry(console),
            MenuChoice::Delete => actions::delete(console, criteria.as_ref(), settings),
            MenuChoice::Exit => {}
        }
    }
}
