//! Exported component definition lookup.

use oxc_ast::ast::{
    BindingPatternKind, Declaration, Expression, ObjectExpression, Program, Statement,
    VariableDeclarator,
};
use oxc_span::Span;

use crate::docblock::Docblocks;

/// Path-like view of one exported component definition.
///
/// Handlers receive the definition expression together with the docblock
/// index of the file, so they can look up comments for any node inside it.
#[derive(Debug, Clone, Copy)]
pub struct ComponentPath<'s, 'a> {
    /// `default` for default exports, the binding name otherwise.
    pub export_name: &'s str,
    /// The definition, with any wrapping call such as `defineComponent(...)` removed.
    pub node: &'s Expression<'a>,
    /// Span of the export statement carrying the component docblock.
    pub statement_span: Span,
    /// Docblocks of the enclosing file.
    pub docblocks: &'s Docblocks<'a>,
}

impl<'s, 'a> ComponentPath<'s, 'a> {
    /// The object literal of the definition, if it is one.
    pub fn object(&self) -> Option<&'s ObjectExpression<'a>> {
        match self.node {
            Expression::ObjectExpression(object) => Some(&**object),
            _ => None,
        }
    }

    /// Raw docblock attached to the export statement.
    pub fn docblock(&self) -> Option<&'a str> {
        self.docblocks.docblock(self.statement_span)
    }

    /// Raw docblock attached to a node inside the definition.
    pub fn docblock_at(&self, span: Span) -> Option<&'a str> {
        self.docblocks.docblock(span)
    }

    pub fn is_default_export(&self) -> bool {
        self.export_name == "default"
    }
}

/// Collect the component definitions a module exports.
///
/// Any default-exported expression is treated as a component; named exports
/// only count when they hold an object literal, directly or as the first
/// argument of a call.
pub fn resolve_exported_components<'s, 'a>(
    program: &'s Program<'a>,
    docblocks: &'s Docblocks<'a>,
) -> Vec<ComponentPath<'s, 'a>> {
    let mut components = Vec::new();

    for statement in &program.body {
        match statement {
            Statement::ExportDefaultDeclaration(export) => {
                let Some(expression) = export.declaration.as_expression() else {
                    continue;
                };
                components.push(ComponentPath {
                    export_name: "default",
                    node: unwrap_definition(expression),
                    statement_span: export.span,
                    docblocks,
                });
            }
            Statement::ExportNamedDeclaration(export) => {
                let Some(Declaration::VariableDeclaration(variable)) = &export.declaration else {
                    continue;
                };
                components.extend(
                    variable
                        .declarations
                        .iter()
                        .filter_map(named_definition)
                        .map(|(export_name, node)| ComponentPath {
                            export_name,
                            node,
                            statement_span: export.span,
                            docblocks,
                        }),
                );
            }
            _ => {}
        }
    }

    components
}

fn named_definition<'s, 'a>(
    declarator: &'s VariableDeclarator<'a>,
) -> Option<(&'s str, &'s Expression<'a>)> {
    let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind else {
        return None;
    };
    let node = unwrap_definition(declarator.init.as_ref()?);
    is_object(node).then_some((ident.name.as_str(), node))
}

/// Strips parentheses and a wrapping call whose first argument is an object.
fn unwrap_definition<'s, 'a>(expression: &'s Expression<'a>) -> &'s Expression<'a> {
    match without_parentheses(expression) {
        Expression::CallExpression(call) => {
            match call.arguments.first().and_then(|argument| argument.as_expression()) {
                Some(argument) if is_object(unwrap_definition(argument)) => {
                    unwrap_definition(argument)
                }
                _ => without_parentheses(expression),
            }
        }
        unwrapped => unwrapped,
    }
}

pub(crate) fn without_parentheses<'s, 'a>(expression: &'s Expression<'a>) -> &'s Expression<'a> {
    match expression {
        Expression::ParenthesizedExpression(inner) => without_parentheses(&inner.expression),
        _ => expression,
    }
}

fn is_object(expression: &Expression<'_>) -> bool {
    matches!(expression, Expression::ObjectExpression(_))
}
