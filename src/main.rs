mod actions;
mod config;
mod console;
mod error;
mod filter;
mod menu;
mod scanner;
mod store;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory for JSON exports (defaults to Data_Store next to the executable)
    #[arg(long, short = 's', value_name = "DIR")]
    data_store: Option<PathBuf>,

    /// List directory entries in name order instead of platform order
    #[arg(long)]
    sorted: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = config::Settings::new(args.data_store, args.sorted);
    log::debug!("settings: {settings:?}");

    println!("{}", "=".repeat(60).cyan());
    println!(
        "{}",
        format!(
            "Welcome to Arbor Browse ({})",
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );
    println!("{}", "=".repeat(60).cyan());

    let stdin = io::stdin();
    let mut console = console::Console::new(stdin.lock(), io::stdout());
    menu::run(&mut console, &settings);
}
