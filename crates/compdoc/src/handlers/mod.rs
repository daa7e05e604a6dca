//! Script handlers run against every exported component definition.
//!
//! Each handler reads one aspect of the definition and writes it into the
//! [`Documentation`] sink. Handlers never fail: shapes they do not recognize
//! are skipped.

use std::sync::Arc;

use oxc_ast::ast::{ObjectExpression, ObjectProperty, ObjectPropertyKind};

use crate::component::ComponentPath;
use crate::model::Documentation;

pub mod component;
pub mod display_name;
pub mod setup;

pub use component::ComponentHandler;
pub use display_name::DisplayNameHandler;
pub use setup::SetupHandler;

/// A documentation pass over one component definition.
///
/// Handlers must be `Send + Sync` because files are extracted in parallel.
pub trait ScriptHandler: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Read the definition and record what was found.
    fn handle(&self, documentation: &mut Documentation, component: &ComponentPath<'_, '_>);
}

/// The built-in handlers, in the order they run.
pub fn default_handlers() -> Vec<Arc<dyn ScriptHandler>> {
    vec![
        Arc::new(DisplayNameHandler),
        Arc::new(ComponentHandler),
        Arc::new(SetupHandler),
    ]
}

/// Predicate matching object properties whose static key is `name`.
pub fn member_filter(name: &str) -> impl Fn(&ObjectProperty<'_>) -> bool + '_ {
    move |property: &ObjectProperty<'_>| property.key.static_name().as_deref() == Some(name)
}

/// First direct property of `object` named `name`; spreads are ignored.
pub(crate) fn find_member<'s, 'a>(
    object: &'s ObjectExpression<'a>,
    name: &str,
) -> Option<&'s ObjectProperty<'a>> {
    let matches = member_filter(name);
    object
        .properties
        .iter()
        .filter_map(|member| match member {
            ObjectPropertyKind::ObjectProperty(property) => Some(&**property),
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .find(|&property| matches(property))
}
