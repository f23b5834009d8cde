//! CLI argument definitions for the query editor driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pulsar-query",
    version,
    about = "Replay and inspect Pulsar query editor sessions",
    long_about = "Drive the Pulsar query-state synchronizer from the command line.\n\n\
                  Replays scripted catalog refreshes and field edits, showing the\n\
                  settled query and execution request after every event."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: user config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the settings file).
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormatArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a scripted session and show every settled state.
    Replay(ReplayArgs),

    /// List selectable options for a catalog.
    Options(OptionsArgs),

    /// Run one synchronization pass over a stored query.
    Reconcile(ReconcileArgs),
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Path to the session script (JSON).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

#[derive(Parser)]
pub struct OptionsArgs {
    /// Catalog file: a response frame or a bare application array (JSON).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Show job options for this application.
    #[arg(long = "app", value_name = "APPID")]
    pub app: Option<String>,
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Stored query (JSON).
    #[arg(value_name = "QUERY")]
    pub query: PathBuf,

    /// Catalog file: a response frame or a bare application array (JSON).
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
