#![deny(clippy::all)]

//! Documentation extraction for object-literal component definitions.
//!
//! This crate provides:
//! - A documentation model (`Documentation`) that accumulates per-component descriptors.
//! - A JSDoc tag parser and a TypeScript annotation resolver.
//! - A handler pipeline that walks exported component definitions parsed with OXC,
//!   including the setup-block extraction handler.
//! - A JSON generator for the extracted documentation.

pub mod component;
pub mod docblock;
pub mod doclets;
pub mod error;
pub mod extractor;
pub mod handlers;
pub mod model;
pub mod parser;
pub mod sfc;
pub mod type_annotation;

#[cfg(feature = "json")]
pub mod generators;

pub use component::{ComponentPath, resolve_exported_components};
pub use docblock::Docblocks;
pub use doclets::{
    BlockTag, DocBlockTags, ParamTag, Tag, TagContent, parse_doclets, transform_tags_into_object,
};
pub use error::{DocgenError, Result};
pub use extractor::{DocgenExtractor, ExtractOptions};
pub use handlers::{
    ComponentHandler, DisplayNameHandler, ScriptHandler, default_handlers, member_filter,
    setup::{ANONYMOUS_SETUP, SetupFunction, SetupHandler, set_setup_descriptor, setup_handler},
};
pub use model::{
    DocSet, Documentation, ModuleDoc, Param, ReturnDescriptor, SetupDescriptor, TypeDescriptor,
};
pub use type_annotation::type_from_annotation;

#[cfg(feature = "json")]
pub use generators::json::{render_json, render_json_compact};
