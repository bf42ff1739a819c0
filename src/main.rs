use clap::Parser;
use std::io::{self, IsTerminal};
use verdict::cli::commands;
use verdict::cli::{Cli, Commands};
use verdict::logging::init_logging;
use verdict::{StructuredError, VerdictError};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {e}");
        // Don't exit, just continue without logging
    }

    if cli.no_color {
        colored::control::set_override(false);
    }
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(&args, cli.json, use_color),
        Commands::Completions(args) => commands::completions::execute(&args),
        Commands::Version => commands::version::execute(cli.json),
    };

    if let Err(e) = result {
        handle_error(&e, cli.json);
    }
}

/// Handle errors with structured output support.
///
/// When --json is set or stderr is not a TTY, outputs structured JSON to
/// stderr. Otherwise, outputs human-readable error with optional color.
fn handle_error(err: &VerdictError, json_mode: bool) -> ! {
    let structured = StructuredError::from_error(err);
    let exit_code = structured.code.exit_code();

    let use_json = json_mode || !io::stderr().is_terminal();

    if use_json {
        let json = structured.to_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        let use_color = io::stderr().is_terminal();
        eprintln!("{}", structured.to_human(use_color));
    }

    std::process::exit(exit_code);
}
