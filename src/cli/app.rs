//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use checkstamp::output::OutputMode;

/// checkstamp - Completion stamps for Markdown checklists
#[derive(Parser, Debug)]
#[command(
    name = "checkstamp",
    version,
    about = "Completion stamps for Markdown checklists",
    long_about = "Append a completion stamp to checklist items when they are checked.\n\n\
                  Checked items gain ' ✅ YYYY-MM-DD' (optionally with HH:MM).\n\
                  Unchecked items lose any stamp they still carry."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.checkstamp/config.toml
    #[arg(long = "config", id = "config_path", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transform a single line and print the result
    Line {
        /// The line text
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Stamp time to use, `YYYY-MM-DD HH:MM` (defaults to now)
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Stamp checked items and clear stale stamps in Markdown files
    Stamp {
        /// A Markdown file, a directory to search for them, or `-` for stdin
        path: PathBuf,

        /// Only these 1-based lines (single file only)
        #[arg(short, long = "line", value_name = "N")]
        lines: Vec<usize>,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Stamp time to use, `YYYY-MM-DD HH:MM` (defaults to now)
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Watch a Markdown file and stamp items as they are checked
    #[cfg(feature = "watch")]
    Watch {
        /// The Markdown file to watch
        path: PathBuf,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current settings
    Show,

    /// Set a setting (enabled, include_time, exclude_patterns, date_format)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },

    /// Manage exclusion patterns
    Exclude {
        #[command(subcommand)]
        action: ExcludeAction,
    },

    /// Restore default settings
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum ExcludeAction {
    /// Add an exclusion pattern
    Add {
        /// Literal text that suppresses stamping
        pattern: String,
    },

    /// Remove an exclusion pattern
    Remove {
        /// Pattern to remove
        pattern: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let store = commands::settings_store(cli.config);

    match cli.command {
        Some(Command::Line { text, at }) => commands::line(&text, at.as_deref(), &store, output_mode),
        Some(Command::Stamp {
            path,
            lines,
            dry_run,
            at,
        }) => commands::stamp(&path, &lines, dry_run, at.as_deref(), &store, output_mode),
        #[cfg(feature = "watch")]
        Some(Command::Watch { path }) => commands::watch(&path, &store, output_mode),
        Some(Command::Config { action }) => {
            commands::config(action.unwrap_or(ConfigAction::Show), &store, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("checkstamp v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("checkstamp v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'checkstamp --help' for usage");
                println!("Run 'checkstamp stamp <file.md>' to stamp a checklist");
            }
            Ok(())
        },
    }
}
