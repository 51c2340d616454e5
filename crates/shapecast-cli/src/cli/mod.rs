//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No geometry lives here.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shapecast_core::domain::RenderFormat;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shapecast",
    bin_name = "shapecast",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Compute shape areas and render them as text or JSON",
    long_about = "shapecast computes the area of simple shapes and renders \
                  the result as a plain-text line or a JSON record.",
    after_help = "EXAMPLES:\n\
        \x20 shapecast area circle:3\n\
        \x20 shapecast area square:3 rectangle:2x4 --format json\n\
        \x20 shapecast shapes\n\
        \x20 shapecast completions bash > /usr/share/bash-completion/completions/shapecast",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute and render the area of one or more shapes.
    #[command(
        visible_alias = "render",
        about = "Render shape areas",
        after_help = "SHAPES:\n\
            \x20 circle:<radius>              e.g. circle:3\n\
            \x20 square:<length>              e.g. square:2.5\n\
            \x20 rectangle:<width>x<height>   e.g. rectangle:2x4\n\n\
            EXAMPLES:\n\
            \x20 shapecast area circle:3\n\
            \x20 shapecast area circle:3 square:3 --format json"
    )]
    Area(AreaArgs),

    /// List built-in shapes.
    #[command(
        visible_alias = "ls",
        about = "List built-in shapes",
        after_help = "EXAMPLES:\n\
            \x20 shapecast shapes\n\
            \x20 shapecast shapes --format json"
    )]
    Shapes(ShapesArgs),

    /// Initialise a shapecast configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 shapecast init           # global config\n\
            \x20 shapecast init --local   # .shapecast.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shapecast completions bash > ~/.local/share/bash-completion/completions/shapecast\n\
            \x20 shapecast completions zsh  > ~/.zfunc/_shapecast\n\
            \x20 shapecast completions fish > ~/.config/fish/completions/shapecast.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the shapecast configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shapecast config get render.format\n\
            \x20 shapecast config list\n\
            \x20 shapecast config path"
    )]
    Config(ConfigCommands),
}

// ── area ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapecast area`.
#[derive(Debug, Args)]
pub struct AreaArgs {
    /// Shapes to render, as `<kind>:<dimensions>`.
    #[arg(value_name = "SHAPE", required = true, help = "Shapes, e.g. circle:3")]
    pub shapes: Vec<String>,

    /// Output format (defaults to `render.format` from the configuration).
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        value_parser = RenderFormat::from_str,
        help = "Output format: text or json"
    )]
    pub format: Option<RenderFormat>,
}

// ── shapes ────────────────────────────────────────────────────────────────────

/// Arguments for `shapecast shapes`.
#[derive(Debug, Args)]
pub struct ShapesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `shapes` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shapecast init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.shapecast.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shapecast completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shapecast config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
