//! Output generators for extracted documentation.

pub mod json;
