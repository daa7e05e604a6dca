use oxc_ast::ast::Expression;
use tracing::trace;

use super::{ScriptHandler, find_member};
use crate::component::ComponentPath;
use crate::model::Documentation;

/// Reads the `name: '...'` option of a definition.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayNameHandler;

impl ScriptHandler for DisplayNameHandler {
    fn name(&self) -> &'static str {
        "display-name"
    }

    fn handle(&self, documentation: &mut Documentation, component: &ComponentPath<'_, '_>) {
        let Some(property) = component.object().and_then(|object| find_member(object, "name"))
        else {
            return;
        };
        match &property.value {
            Expression::StringLiteral(literal) => {
                documentation.display_name = Some(literal.value.to_string());
            }
            Expression::TemplateLiteral(template) if template.expressions.is_empty() => {
                documentation.display_name = template
                    .quasis
                    .first()
                    .map(|quasi| quasi.value.raw.to_string());
            }
            _ => trace!(export = component.export_name, "name option is not a static string"),
        }
    }
}
