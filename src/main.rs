mod cli;
mod config;
mod display;
mod error;
mod service;
mod storage;

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::error::Error as _;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::TaskError;
use crate::service::ConfigService;
use crate::storage::Storage;

#[derive(Parser)]
#[command(name = "task", version, disable_help_subcommand = true)]
#[command(about = "Task CLI settings: user profile and default preferences", long_about = None)]
struct Cli {
    /// Path to config file [default: .task/config.json]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    #[command(disable_help_subcommand = true)]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

// Values may start with '-'; arguments past the expected ones are ignored.
#[derive(Subcommand)]
enum ConfigCommands {
    /// Set a config value (e.g. user.name, defaults.priority)
    Set {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        key: String,

        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        value: String,

        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        _ignored: Vec<String>,
    },
    /// Print a config value
    Get {
        #[arg(value_parser = NonEmptyStringValueParser::new(), allow_hyphen_values = true)]
        key: String,

        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        _ignored: Vec<String>,
    },
    /// Print all config values
    List {
        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        _ignored: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1, not clap's default 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let storage = cli.config.map(Storage::new).unwrap_or_default();
    debug!(path = %storage.path().display(), "using config file");
    let service = ConfigService::new(storage);

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Set { key, value, .. } => {
                exit_on_error(cli::config::set(&service, &key, &value))
            }
            ConfigCommands::Get { key, .. } => exit_on_error(cli::config::get(&service, &key)),
            ConfigCommands::List { .. } => {
                if let Err(e) = cli::config::list(&service) {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        },
        Commands::Other(args) => {
            let command = args.first().map(String::as_str).unwrap_or_default();
            eprintln!("Command not implemented: {}", command);
            std::process::exit(1);
        }
    }
}

/// Report a set/get failure and exit; validation errors are the user's to fix
fn exit_on_error(result: error::Result<()>) {
    match result {
        Ok(()) => {}
        Err(TaskError::Validation(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
        Err(e) => {
            debug!(code = e.code(), "command failed");
            eprintln!("Unexpected error: {}", e);
            let mut cause = e.source();
            while let Some(inner) = cause {
                eprintln!("  Caused by: {}", inner);
                cause = inner.source();
            }
            std::process::exit(1);
        }
    }
}
