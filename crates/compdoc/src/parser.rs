//! Parser façade for reading component scripts.
//!
//! Wraps the OXC parser so callers only deal with a source string, a
//! [`ParseOptions`] value and the resulting [`ParsedProgram`].

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse options for reading source code
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs(),
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source_type: SourceType::from_path(path.as_ref()).unwrap_or(SourceType::mjs()),
        }
    }

    /// Create parse options from the `lang` attribute of an SFC script block
    pub fn for_lang(lang: &str) -> Self {
        match lang {
            "ts" => Self::typescript(),
            "tsx" => Self::tsx(),
            "jsx" => Self::jsx(),
            _ => Self::default(),
        }
    }

    /// Create parse options for TypeScript
    pub fn typescript() -> Self {
        Self {
            source_type: SourceType::ts(),
        }
    }

    /// Create parse options for JSX
    pub fn jsx() -> Self {
        Self {
            source_type: SourceType::jsx(),
        }
    }

    /// Create parse options for TSX
    pub fn tsx() -> Self {
        Self {
            source_type: SourceType::tsx(),
        }
    }
}

/// Parse diagnostic information
#[derive(Debug, Clone)]
pub struct ParseDiagnostic {
    /// Error message
    pub message: String,
}

/// Parsed program with AST and metadata
pub struct ParsedProgram<'a> {
    /// The parsed AST program
    pub program: oxc_ast::ast::Program<'a>,
    /// Original source text
    pub source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    /// Get the program AST
    pub fn ast(&self) -> &oxc_ast::ast::Program<'a> {
        &self.program
    }
}

/// Parse source code into an AST.
///
/// The allocator must outlive the returned program. Any parser diagnostic
/// turns into an `Err` carrying every message.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>, Vec<ParseDiagnostic>> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    if result.panicked || !result.errors.is_empty() {
        return Err(result
            .errors
            .iter()
            .map(|err| ParseDiagnostic {
                message: err.to_string(),
            })
            .collect());
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}
