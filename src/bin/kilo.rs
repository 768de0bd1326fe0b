//! kilo: show a file's first line in a full-screen raw-mode view.
//!
//! Run with: `cargo run --bin kilo -- [FILE]`
//!
//! Arrows, Home/End and PageUp/PageDown move the cursor; Ctrl-X quits.

use kilo::config::{Config, HELP_TEXT, ParseResult};
use kilo::terminal::Terminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Version => {
            println!("kilo {}", kilo::render::VERSION);
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(e) = kilo::logging::init(path, config.log_level) {
            eprintln!("kilo: {e}");
            return ExitCode::FAILURE;
        }
    }
    tracing::info!(version = kilo::render::VERSION, file = ?config.file, "kilo starting");

    let result = Terminal::stdio()
        .map_err(kilo::Error::from)
        .and_then(|mut terminal| kilo::run(&mut terminal, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("kilo: {e}");
            ExitCode::FAILURE
        }
    }
}
