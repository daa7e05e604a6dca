//! Command implementations.

mod parse;
mod utils;

pub use parse::execute as parse_execute;
pub use utils::*;
