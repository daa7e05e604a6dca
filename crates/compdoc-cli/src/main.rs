//! compdoc CLI - component documentation extraction.
//!
//! Parses command-line arguments, initializes logging and dispatches to the
//! selected command.

use clap::Parser;
use compdoc_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Parse(parse_args) => commands::parse_execute(parse_args),
    };

    result.map_err(error::cli_error_to_miette)
}
