//! CLI argument definitions for the canvas debugger.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "canvas-debugger",
    version,
    about = "Inspect editor debugger state - which errors are shown and why",
    long_about = "Inspect a captured editor debugger snapshot.\n\n\
                  Filters evaluation errors down to those on widgets the user can \
                  currently see, accounting for tabs, modals, and containers."
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

    /// TOML configuration (container types, route, missing-ancestor policy).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// List the errors the debugger panel would show.
    Errors(SnapshotArgs),

    /// Print the error and warning badge counts.
    Count(SnapshotArgs),

    /// Show the effective visibility of evaluated widgets.
    Visibility(VisibilityArgs),

    /// Report whether the debugger icon is hidden at an editor path.
    Icon(IconArgs),
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// JSON snapshot of debugger, canvas widget, and data tree state.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct VisibilityArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Only report this widget.
    #[arg(long = "widget", value_name = "NAME")]
    pub widget: Option<String>,
}

#[derive(Parser)]
pub struct IconArgs {
    /// Editor path (e.g. /applications/<id>/pages/<id>/edit/datasource/<id>).
    ///
    /// When omitted, the `location` recorded in --snapshot is used.
    #[arg(value_name = "PATH", required_unless_present = "snapshot")]
    pub path: Option<String>,

    /// Snapshot whose recorded location is checked.
    #[arg(long = "snapshot", value_name = "SNAPSHOT")]
    pub snapshot: Option<PathBuf>,
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
