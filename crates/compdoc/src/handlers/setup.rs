//! Setup block extraction.
//!
//! Documents the members of a definition's `setup: { ... }` object that carry
//! `@public` (or `@access public`). Each member's parameters and return value
//! are reconciled from two sources: its JSDoc tags and its signature.

use std::mem;

use oxc_ast::ast::{
    ArrowFunctionExpression, BindingPatternKind, CallExpression, Expression, FormalParameter,
    FormalParameters, Function, ObjectProperty, ObjectPropertyKind, TSTypeAnnotation,
};
use tracing::{debug, trace};

use super::{ScriptHandler, find_member};
use crate::component::{ComponentPath, without_parentheses};
use crate::doclets::{BlockTag, DocBlockTags, ParamTag, parse_doclets, transform_tags_into_object};
use crate::model::{Documentation, Param, ReturnDescriptor, SetupDescriptor};
use crate::type_annotation::type_from_annotation;

/// Name given to a setup whose name cannot be determined statically.
pub const ANONYMOUS_SETUP: &str = "<anonymous>";

const PARAM_TITLES: [&str; 3] = ["param", "arg", "argument"];

/// [`ScriptHandler`] wrapper around [`setup_handler`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SetupHandler;

impl ScriptHandler for SetupHandler {
    fn name(&self) -> &'static str {
        "setup"
    }

    fn handle(&self, documentation: &mut Documentation, component: &ComponentPath<'_, '_>) {
        setup_handler(documentation, component);
    }
}

/// Document the public members of the definition's setup block.
///
/// Does nothing when the definition is not an object literal, has no `setup`
/// property, or its `setup` value is not an object literal. Members without a
/// public access tag never reach `documentation`.
pub fn setup_handler(documentation: &mut Documentation, component: &ComponentPath<'_, '_>) {
    let Some(setup) = component
        .object()
        .and_then(|definition| find_member(definition, "setup"))
    else {
        return;
    };
    let Expression::ObjectExpression(container) = without_parentheses(&setup.value) else {
        trace!(export = component.export_name, "setup is not an object literal");
        return;
    };

    for member in &container.properties {
        match member {
            ObjectPropertyKind::ObjectProperty(property) => {
                document_member(documentation, component, property);
            }
            ObjectPropertyKind::SpreadProperty(_) => trace!("skipping spread in setup block"),
        }
    }
}

fn document_member(
    documentation: &mut Documentation,
    component: &ComponentPath<'_, '_>,
    property: &ObjectProperty<'_>,
) {
    let DocBlockTags { description, tags } = component
        .docblock_at(property.span)
        .map(parse_doclets)
        .unwrap_or_default();

    if !tags.iter().any(|tag| tag.is_access("public")) {
        trace!(member = ?property.key.static_name(), "setup member is not public");
        return;
    }

    let function = SetupMember::classify(property).function();
    let name = setup_name(property, function);
    debug!(setup = %name, export = component.export_name, "documenting setup");

    let descriptor = documentation.get_setup_descriptor(&name);
    if !description.is_empty() {
        descriptor.description = Some(description);
    }
    match function {
        Some(function) => {
            *descriptor = set_setup_descriptor(mem::take(descriptor), function, &tags);
        }
        None => {
            debug!(setup = %name, "public setup member is not a function");
            descriptor.tags = transform_tags_into_object(&tags);
        }
    }
}

/// Fill params, returns and tags of `descriptor` from a located setup function.
///
/// `tags` is the full tag list of the setup's docblock.
pub fn set_setup_descriptor(
    descriptor: SetupDescriptor,
    setup: SetupFunction<'_, '_>,
    tags: &[BlockTag],
) -> SetupDescriptor {
    let param_tags = tags_titled(tags, &PARAM_TITLES);
    let return_tags = tags_titled(tags, &["returns"]);

    let descriptor = describe_params(descriptor, setup.params(), &param_tags);
    let mut descriptor = describe_returns(descriptor, setup.return_type(), &return_tags);
    descriptor.tags = transform_tags_into_object(tags);
    descriptor
}

/// A function implementing a setup member.
#[derive(Debug, Clone, Copy)]
pub enum SetupFunction<'s, 'a> {
    /// Method shorthand or `function` expression.
    Function(&'s Function<'a>),
    Arrow(&'s ArrowFunctionExpression<'a>),
}

impl<'s, 'a> SetupFunction<'s, 'a> {
    pub fn from_expression(expression: &'s Expression<'a>) -> Option<Self> {
        match without_parentheses(expression) {
            Expression::FunctionExpression(function) => Some(Self::Function(function)),
            Expression::ArrowFunctionExpression(arrow) => Some(Self::Arrow(arrow)),
            _ => None,
        }
    }

    pub fn params(self) -> &'s FormalParameters<'a> {
        match self {
            Self::Function(function) => &function.params,
            Self::Arrow(arrow) => &arrow.params,
        }
    }

    pub fn return_type(self) -> Option<&'s TSTypeAnnotation<'a>> {
        match self {
            Self::Function(function) => function.return_type.as_deref(),
            Self::Arrow(arrow) => arrow.return_type.as_deref(),
        }
    }

    /// Identifier of a named function expression.
    pub fn id_name(self) -> Option<&'s str> {
        match self {
            Self::Function(function) => function.id.as_ref().map(|id| id.name.as_str()),
            Self::Arrow(_) => None,
        }
    }
}

/// Recognized shapes of a setup block member.
#[derive(Debug, Clone, Copy)]
enum SetupMember<'s, 'a> {
    /// `name() {}`
    Method(&'s Function<'a>),
    /// `name: function () {}`
    FunctionValue(&'s Function<'a>),
    /// `name: () => {}`
    ArrowValue(&'s ArrowFunctionExpression<'a>),
    /// `name: wrapper(..., () => {})`
    WrappedCall(&'s CallExpression<'a>),
    Unsupported,
}

impl<'s, 'a> SetupMember<'s, 'a> {
    fn classify(property: &'s ObjectProperty<'a>) -> Self {
        match (property.method, without_parentheses(&property.value)) {
            (true, Expression::FunctionExpression(function)) => Self::Method(function),
            (false, Expression::FunctionExpression(function)) => Self::FunctionValue(function),
            (_, Expression::ArrowFunctionExpression(arrow)) => Self::ArrowValue(arrow),
            (_, Expression::CallExpression(call)) => Self::WrappedCall(call),
            _ => Self::Unsupported,
        }
    }

    /// The function carrying the signature; for a wrapped call, its first
    /// function-valued argument.
    fn function(self) -> Option<SetupFunction<'s, 'a>> {
        match self {
            Self::Method(function) | Self::FunctionValue(function) => {
                Some(SetupFunction::Function(function))
            }
            Self::ArrowValue(arrow) => Some(SetupFunction::Arrow(arrow)),
            Self::WrappedCall(call) => call
                .arguments
                .iter()
                .filter_map(|argument| argument.as_expression())
                .find_map(SetupFunction::from_expression),
            Self::Unsupported => None,
        }
    }
}

fn setup_name(property: &ObjectProperty<'_>, function: Option<SetupFunction<'_, '_>>) -> String {
    property
        .key
        .static_name()
        .map(|name| name.into_owned())
        .or_else(|| function.and_then(SetupFunction::id_name).map(str::to_string))
        .unwrap_or_else(|| ANONYMOUS_SETUP.to_string())
}

fn tags_titled<'t>(tags: &'t [BlockTag], titles: &[&str]) -> Vec<&'t ParamTag> {
    tags.iter()
        .filter(|tag| titles.contains(&tag.title()))
        .filter_map(BlockTag::as_param)
        .collect()
}

fn describe_params(
    mut descriptor: SetupDescriptor,
    params: &FormalParameters<'_>,
    tags: &[&ParamTag],
) -> SetupDescriptor {
    if params.items.is_empty() && tags.is_empty() {
        return descriptor;
    }

    let names: Vec<Option<&str>> = params.items.iter().map(parameter_name).collect();
    let matches = match_param_tags(&names, tags);

    let mut described: Vec<Param> = params
        .items
        .iter()
        .zip(&names)
        .zip(matches)
        .filter_map(|((parameter, name), matched)| {
            let mut param = Param::named((*name)?);
            if let Some(tag) = matched.map(|index| tags[index]) {
                param.type_hint = tag.type_hint.clone();
                param.description = tag.description.clone();
            }
            if param.type_hint.is_none() {
                param.type_hint = parameter_annotation(parameter).and_then(type_from_annotation);
            }
            Some(param)
        })
        .collect();

    // parameters only reachable through `arguments`
    if described.is_empty() {
        described = tags.iter().map(|tag| Param::from(*tag)).collect();
    }

    if !described.is_empty() {
        descriptor.params = Some(described);
    }
    descriptor
}

/// Pair each syntactic parameter with the index of the tag documenting it.
///
/// A tag naming the parameter always wins. Otherwise the parameter takes the
/// tag at its own position, but only when that tag has no name. Parameters
/// without a name (`None`) never match.
pub(crate) fn match_param_tags(names: &[Option<&str>], tags: &[&ParamTag]) -> Vec<Option<usize>> {
    let mut matches: Vec<Option<usize>> = names
        .iter()
        .map(|name| {
            let name = (*name)?;
            tags.iter().position(|tag| tag.name.as_deref() == Some(name))
        })
        .collect();

    for (index, matched) in matches.iter_mut().enumerate() {
        let unnamed_at_index = tags.get(index).is_some_and(|tag| tag.name.is_none());
        if matched.is_none() && names[index].is_some() && unnamed_at_index {
            *matched = Some(index);
        }
    }

    matches
}

fn describe_returns(
    mut descriptor: SetupDescriptor,
    return_type: Option<&TSTypeAnnotation<'_>>,
    tags: &[&ParamTag],
) -> SetupDescriptor {
    if let Some(tag) = tags.first() {
        descriptor.returns = Some(ReturnDescriptor::from(*tag));
    }

    let needs_type = descriptor
        .returns
        .as_ref()
        .is_none_or(|returns| returns.type_hint.is_none());
    let annotated = needs_type
        .then(|| return_type.and_then(type_from_annotation))
        .flatten();
    if let Some(type_hint) = annotated {
        descriptor
            .returns
            .get_or_insert_with(ReturnDescriptor::default)
            .type_hint = Some(type_hint);
    }

    descriptor
}

/// Identifier of a plain or defaulted parameter; destructuring yields `None`.
fn parameter_name<'s>(parameter: &'s FormalParameter<'_>) -> Option<&'s str> {
    let pattern = match &parameter.pattern.kind {
        BindingPatternKind::AssignmentPattern(assignment) => &assignment.left.kind,
        kind => kind,
    };
    match pattern {
        BindingPatternKind::BindingIdentifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

fn parameter_annotation<'s, 'a>(
    parameter: &'s FormalParameter<'a>,
) -> Option<&'s TSTypeAnnotation<'a>> {
    let pattern = &parameter.pattern;
    pattern
        .type_annotation
        .as_deref()
        .or_else(|| match &pattern.kind {
            BindingPatternKind::AssignmentPattern(assignment) => {
                assignment.left.type_annotation.as_deref()
            }
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use oxc_allocator::Allocator;

    use super::*;
    use crate::docblock::Docblocks;
    use crate::model::TypeDescriptor;
    use crate::parser::{ParseOptions, parse};
    use crate::resolve_exported_components;

    fn tag(name: Option<&str>) -> ParamTag {
        ParamTag {
            title: "param".into(),
            name: name.map(str::to_string),
            ..ParamTag::default()
        }
    }

    #[test]
    fn named_match_beats_position() {
        let b = tag(Some("b"));
        let a = tag(Some("a"));
        let matches = match_param_tags(&[Some("a"), Some("b")], &[&b, &a]);
        assert_eq!(matches, [Some(1), Some(0)]);
    }

    #[test]
    fn positional_match_needs_an_unnamed_tag() {
        let unnamed = tag(None);
        let other = tag(Some("other"));
        let matches = match_param_tags(&[Some("x"), Some("y")], &[&unnamed, &other]);
        assert_eq!(matches, [Some(0), None]);
    }

    #[test]
    fn unrecognized_parameters_keep_their_position() {
        let first = tag(None);
        let second = tag(None);
        let matches = match_param_tags(&[None, Some("y")], &[&first, &second]);
        assert_eq!(matches, [None, Some(1)]);
    }

    #[test]
    fn positional_match_is_per_index() {
        let named = tag(Some("b"));
        let unnamed = tag(None);
        // `b` claims index 0 by name; `a` still falls back to the unnamed tag at its index.
        let matches = match_param_tags(&[Some("b"), Some("a")], &[&named, &unnamed]);
        assert_eq!(matches, [Some(0), Some(1)]);
    }

    fn with_member<R>(source: &str, check: impl FnOnce(&ObjectProperty<'_>) -> R) -> R {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, source, ParseOptions::typescript()).unwrap();
        let docblocks = Docblocks::new(parsed.source_text, parsed.program.comments.iter());
        let components = resolve_exported_components(&parsed.program, &docblocks);
        let setup = find_member(components[0].object().unwrap(), "setup").unwrap();
        let Expression::ObjectExpression(container) = &setup.value else {
            panic!("setup should be an object");
        };
        let ObjectPropertyKind::ObjectProperty(property) = &container.properties[0] else {
            panic!("expected a property");
        };
        check(property)
    }

    #[test]
    fn classifies_member_shapes() {
        let shape = |source: &str| {
            with_member(source, |property| match SetupMember::classify(property) {
                SetupMember::Method(_) => "method",
                SetupMember::FunctionValue(_) => "function",
                SetupMember::ArrowValue(_) => "arrow",
                SetupMember::WrappedCall(_) => "call",
                SetupMember::Unsupported => "unsupported",
            })
        };
        assert_eq!(shape("export default { setup: { a() {} } }"), "method");
        assert_eq!(shape("export default { setup: { a: function () {} } }"), "function");
        assert_eq!(shape("export default { setup: { a: (() => 1) } }"), "arrow");
        assert_eq!(shape("export default { setup: { a: wrap(() => 1) } }"), "call");
        assert_eq!(shape("export default { setup: { a: 1 } }"), "unsupported");
    }

    #[test]
    fn wrapped_call_uses_first_function_argument() {
        let params = with_member(
            "export default { setup: { a: debounce(300, (x: string) => x, () => 1) } }",
            |property| {
                let function = SetupMember::classify(property).function().unwrap();
                function.params().items.len()
            },
        );
        assert_eq!(params, 1);

        let none = with_member("export default { setup: { a: wrap('x') } }", |property| {
            SetupMember::classify(property).function().is_none()
        });
        assert!(none);
    }

    #[test]
    fn named_function_value_falls_back_to_its_id() {
        let name = with_member(
            "export default { setup: { [key]: function named() {} } }",
            |property| {
                setup_name(property, SetupMember::classify(property).function())
            },
        );
        assert_eq!(name, "named");
    }

    #[test]
    fn documented_return_type_wins_over_annotation() {
        let returns = tag(None);
        let returns = ParamTag {
            title: "returns".into(),
            type_hint: Some(TypeDescriptor::new("Promise")),
            ..returns
        };
        let tags = vec![BlockTag::Param(returns)];
        let descriptor = with_member(
            "export default { setup: { a(): number { return 1 } } }",
            |property| {
                let function = SetupMember::classify(property).function().unwrap();
                set_setup_descriptor(SetupDescriptor::new("a"), function, &tags)
            },
        );
        assert_eq!(
            descriptor.returns.and_then(|returns| returns.type_hint),
            Some(TypeDescriptor::new("Promise"))
        );
    }

    #[test]
    fn annotation_fills_missing_documented_return_type() {
        let tags = vec![BlockTag::Param(ParamTag {
            title: "returns".into(),
            description: Some("the count".into()),
            ..ParamTag::default()
        })];
        let descriptor = with_member(
            "export default { setup: { a(): number { return 1 } } }",
            |property| {
                let function = SetupMember::classify(property).function().unwrap();
                set_setup_descriptor(SetupDescriptor::new("a"), function, &tags)
            },
        );
        let returns = descriptor.returns.unwrap();
        assert_eq!(returns.description.as_deref(), Some("the count"));
        assert_eq!(returns.type_hint, Some(TypeDescriptor::new("number")));
    }

    #[test]
    fn only_the_first_return_tag_counts() {
        let first = BlockTag::Param(ParamTag {
            title: "returns".into(),
            description: Some("first".into()),
            ..ParamTag::default()
        });
        let second = BlockTag::Param(ParamTag {
            title: "returns".into(),
            description: Some("second".into()),
            ..ParamTag::default()
        });
        let tags = vec![first, second];
        let descriptor = with_member("export default { setup: { a() {} } }", |property| {
            let function = SetupMember::classify(property).function().unwrap();
            set_setup_descriptor(SetupDescriptor::new("a"), function, &tags)
        });
        assert_eq!(
            descriptor.returns.and_then(|returns| returns.description),
            Some("first".to_string())
        );
        assert_eq!(descriptor.tags["returns"].len(), 2);
    }

    #[test]
    fn defaulted_parameter_annotation() {
        let descriptor = with_member(
            "export default { setup: { a(count: number = 3, { x }: Point) {} } }",
            |property| {
                let function = SetupMember::classify(property).function().unwrap();
                set_setup_descriptor(SetupDescriptor::new("a"), function, &[])
            },
        );
        assert_eq!(
            descriptor.params,
            Some(vec![Param {
                type_hint: Some(TypeDescriptor::new("number")),
                ..Param::named("count")
            }])
        );
    }
}
