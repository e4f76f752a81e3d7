//! Interactive command line front end.
//!
//! Reads commands line by line from stdin, runs them against the in-memory
//! model, and prints feedback. Parse and execution errors are printed and the
//! loop continues; `exit` or end of input ends the session.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tutorbook_core::Person;
use tutorbook_logic::{Model, parse_command};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "tutorbook")]
#[command(about = "Contact and fee tracking address book")]
struct Cli {
    /// Tracing filter directive (e.g. "info" or "tutorbook_logic=debug").
    #[arg(long, default_value = "warn")]
    log_level: String,
    /// Suppress the greeting banner.
    #[arg(long)]
    quiet: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr; stdout is the conversation with the user.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting tutorbook v{PACKAGE_VERSION}");

    if !cli.quiet {
        println!("tutorbook v{PACKAGE_VERSION} — type 'help' for the command list, 'exit' to quit.");
    }

    let mut model = Model::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end();
        if input.trim().is_empty() {
            continue;
        }

        let command = match parse_command(input) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        let shows_list = command.shows_list();

        match command.execute(&mut model) {
            Ok(result) => {
                println!("{}", result.feedback);
                if shows_list {
                    for entry in render_person_list(&model.displayed_persons()) {
                        println!("{entry}");
                    }
                }
                if result.exit {
                    break;
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Renders the displayed persons as numbered lines.
fn render_person_list(persons: &[&Person]) -> Vec<String> {
    persons
        .iter()
        .enumerate()
        .map(|(position, person)| format!("{}. {person}", position + 1))
        .collect()
}
