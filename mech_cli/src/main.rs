//! # MechCalc CLI
//!
//! Evaluate mechanical formula requests from JSON and browse the equation
//! registry.
//!
//! ```bash
//! mech_cli eval requests.json
//! echo '{"formula":"power_to_torque","power":1000,"omega":100}' | mech_cli eval -
//! mech_cli list
//! mech_cli equations --output EQUATIONS.md
//! ```

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use mech_core::CalcError;

mod commands;

#[derive(Parser)]
#[command(name = "mech_cli")]
#[command(version, about = "MechCalc - vectorized mechanical engineering formulas")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one request or an array of requests.
    Eval {
        /// Path to a JSON request file, or `-` for stdin.
        path: String,
    },

    /// List registered equations.
    List,

    /// Print the equations reference as markdown.
    Equations {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MECH_LOG", default_filter(cli.verbose)))
        .init();

    let result = match cli.command {
        Commands::Eval { path } => commands::eval(&path),
        Commands::List => commands::list(),
        Commands::Equations { output } => commands::equations(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        if let Some(calc_error) = e.downcast_ref::<CalcError>() {
            if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                eprintln!("{json}");
            }
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn test_parse_eval_stdin() {
        let cli = Cli::try_parse_from(["mech_cli", "-vv", "eval", "-"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Eval { ref path } if path == "-"));
    }
}
