//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `compdoc parse` - Extract component documentation to JSON

mod tests;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// compdoc - component documentation extractor
#[derive(Parser, Debug)]
#[command(
    name = "compdoc",
    version,
    about = "Extract documentation from object-literal component definitions",
    long_about = "compdoc reads Vue single-file components and JavaScript/TypeScript modules,\n\
                  finds exported component definitions and writes their documentation\n\
                  (display name, description, tags and public setup functions) as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available compdoc subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract documentation from components
    ///
    /// Inputs may be files or directories. Directories are searched
    /// recursively for component sources, skipping `node_modules` and hidden
    /// directories.
    Parse(ParseArgs),
}

/// Arguments for the parse command
#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Files or directories to document
    ///
    /// Examples:
    ///   compdoc parse src/components
    ///   compdoc parse Button.vue Card.vue
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Write the JSON output to a file instead of stdout
    ///
    /// Parent directories are created when missing.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Parse `.js` files with JSX enabled
    #[arg(long)]
    pub jsx: bool,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Path to a config file (defaults to compdoc.config.json in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory used to resolve relative paths
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
