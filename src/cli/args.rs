//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Full run, add missing keys to every translation file
//! - `update`: Incremental run for changed source files
//! - `prune`: Remove keys no call site produces anymore
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; config is searched from here and paths are relative to it
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory to scan (overrides config file)
    #[arg(long)]
    pub src_path: Option<String>,

    /// Translations directory (overrides config file)
    #[arg(long)]
    pub translations_path: Option<String>,

    /// Language tag, can be repeated: --language en --language fr (overrides config file)
    #[arg(long = "language", value_name = "TAG")]
    pub languages: Vec<String>,

    /// Name of the translation function (overrides config file)
    #[arg(long)]
    pub function_name: Option<String>,

    /// Partition keys by their `context` option
    #[arg(long)]
    pub contexts: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report missing keys without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Changed source files, relative to the project root
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PruneCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the configuration file in
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract keys from all source files and add the missing ones to every translation file
    Sync(SyncCommand),
    /// Extract keys from changed source files only and add the missing ones
    Update(UpdateCommand),
    /// Remove translation keys that are no longer used in source files
    Prune(PruneCommand),
    /// Initialize a new .i18nsyncrc.json configuration file
    Init(InitCommand),
}
