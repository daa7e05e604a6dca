//! compdoc CLI - component documentation extraction from the command line.
//!
//! # Architecture
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//! - `commands` - Command implementations
//! - `config` - Layered configuration (`compdoc.config.json`, environment, flags)
//!
//! # Example
//!
//! ```rust,no_run
//! use compdoc_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
