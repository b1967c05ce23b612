//! Command-line interface entry point for `bratviz`

mod args;
mod commands;

use args::{Cli, Command, RenderInputs};
use bratviz::config::Config;
use bratviz::info;
use bratviz::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            ExitCode::SUCCESS
        }
        Command::Render {
            texts,
            input,
            annotations,
            conllu,
            output,
            lang,
            mode,
            id,
        } => {
            let inputs = RenderInputs {
                texts,
                input,
                annotations,
                conllu,
            };
            let request = commands::render::RenderRequest {
                output,
                lang,
                mode,
                id,
            };
            commands::render::run(&inputs, request, &config)
        }
    }
}
