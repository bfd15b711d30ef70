//! Nutridose CLI - Command-line interface
//!
//! Commands:
//!   session  - Interactive session (default)
//!   check    - Evaluate a measurements file
//!   example  - Evaluate the built-in example set
//!   import   - Re-read an exported results file
//!   table    - Show the reference ranges
//!   schema   - Print JSON schema for output types

mod cli;

use cli::util::take_config_arg;
use nutridose::*;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().collect();

    let config = match load_config(&mut args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    init_tracing(&config);

    let command = args.get(1).map(|s| s.as_str()).unwrap_or("session");
    let rest = args.get(2..).unwrap_or(&[]);

    let result = match command {
        "session" => cli::cmd_session(&config),
        "check" => cli::cmd_check(rest, &config),
        "example" => cli::cmd_example(rest, &config),
        "import" => cli::cmd_import(rest),
        "table" => cli::cmd_table(rest),
        "schema" => cli::cmd_schema(rest),
        "config" => cli::cmd_config(rest, &config),
        "version" | "--version" | "-v" => {
            println!("nutridose {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn load_config(args: &mut Vec<String>) -> Result<Config> {
    match take_config_arg(args) {
        Some(path) => Config::load(&path),
        None => Config::load_from_dir(&std::env::current_dir()?),
    }
}

fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_usage() {
    println!(
        r#"
Nutridose - reference-range checks for blood-panel measurements

USAGE:
    nutridose [COMMAND] [OPTIONS]

COMMANDS:
    session                          Interactive session (default)
    check <data.txt>                 Evaluate a measurements file
    example                          Evaluate the built-in example data
    import <results.txt>             Re-read an exported results file
    table [--json]                   Show reference ranges
    schema [name]                    Print JSON schema for output type
    config [show|schema]             Show effective configuration
    version                          Print version

OPTIONS:
    --output <file>                  Save results in export format
    --json                           JSON output (check, example, table)
    --config <file>                  Config file (default: ./nutridose.yaml)

DATA FILE FORMAT:
    Hemoglobin:10.5
    Calcium:7.8

ENVIRONMENT:
    RUST_LOG                         Log filter (default: nutridose=warn)

EXAMPLES:
    nutridose check labs.txt --output results.txt
    nutridose example --json
    nutridose import results.txt
"#
    );
}
