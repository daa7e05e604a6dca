//! TypeScript annotation to [`TypeDescriptor`] resolution.

use oxc_ast::ast::{TSLiteral, TSType, TSTypeAnnotation, TSTypeName};

use crate::model::TypeDescriptor;

/// Resolve a type annotation into a simplified descriptor.
///
/// Returns `None` for type shapes that have no simple name (mapped types,
/// conditional types, `typeof` queries, ...).
pub fn type_from_annotation(annotation: &TSTypeAnnotation<'_>) -> Option<TypeDescriptor> {
    resolve_type(&annotation.type_annotation)
}

fn resolve_type(ty: &TSType<'_>) -> Option<TypeDescriptor> {
    let descriptor = match ty {
        TSType::TSAnyKeyword(_) => TypeDescriptor::new("any"),
        TSType::TSBigIntKeyword(_) => TypeDescriptor::new("bigint"),
        TSType::TSBooleanKeyword(_) => TypeDescriptor::new("boolean"),
        TSType::TSNeverKeyword(_) => TypeDescriptor::new("never"),
        TSType::TSNullKeyword(_) => TypeDescriptor::new("null"),
        TSType::TSNumberKeyword(_) => TypeDescriptor::new("number"),
        TSType::TSObjectKeyword(_) => TypeDescriptor::new("object"),
        TSType::TSStringKeyword(_) => TypeDescriptor::new("string"),
        TSType::TSSymbolKeyword(_) => TypeDescriptor::new("symbol"),
        TSType::TSUndefinedKeyword(_) => TypeDescriptor::new("undefined"),
        TSType::TSUnknownKeyword(_) => TypeDescriptor::new("unknown"),
        TSType::TSVoidKeyword(_) => TypeDescriptor::new("void"),
        TSType::TSTypeReference(reference) => {
            let elements = reference
                .type_arguments
                .as_ref()
                .map(|arguments| resolve_all(&arguments.params))
                .unwrap_or_default();
            TypeDescriptor::with_elements(type_name(&reference.type_name)?, elements)
        }
        TSType::TSArrayType(array) => TypeDescriptor::with_elements(
            "Array",
            resolve_type(&array.element_type).into_iter().collect(),
        ),
        TSType::TSUnionType(union) => {
            TypeDescriptor::with_elements("union", resolve_all(&union.types))
        }
        TSType::TSIntersectionType(intersection) => {
            TypeDescriptor::with_elements("intersection", resolve_all(&intersection.types))
        }
        TSType::TSParenthesizedType(inner) => return resolve_type(&inner.type_annotation),
        TSType::TSLiteralType(literal) => TypeDescriptor::new(literal_text(&literal.literal)?),
        TSType::TSFunctionType(_) => TypeDescriptor::new("Function"),
        TSType::TSTypeLiteral(_) => TypeDescriptor::new("object"),
        _ => return None,
    };
    Some(descriptor)
}

fn resolve_all(types: &[TSType<'_>]) -> Vec<TypeDescriptor> {
    types.iter().filter_map(resolve_type).collect()
}

fn type_name(name: &TSTypeName<'_>) -> Option<String> {
    match name {
        TSTypeName::IdentifierReference(ident) => Some(ident.name.to_string()),
        TSTypeName::QualifiedName(qualified) => {
            Some(format!("{}.{}", type_name(&qualified.left)?, qualified.right.name))
        }
        _ => None,
    }
}

fn literal_text(literal: &TSLiteral<'_>) -> Option<String> {
    match literal {
        TSLiteral::BooleanLiteral(boolean) => Some(boolean.value.to_string()),
        TSLiteral::NumericLiteral(number) => Some(number.value.to_string()),
        TSLiteral::StringLiteral(string) => Some(format!("\"{}\"", string.value)),
        _ => None,
    }
}
