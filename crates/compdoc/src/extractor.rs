use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use oxc_allocator::Allocator;
use tracing::{debug, trace};

use crate::component::resolve_exported_components;
use crate::docblock::Docblocks;
use crate::error::{DocgenError, Result};
use crate::handlers::{ScriptHandler, default_handlers};
use crate::model::{DocSet, Documentation, ModuleDoc};
use crate::parser::{ParseOptions, parse};
use crate::sfc;

/// Options controlling documentation extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Parse `.js` files with JSX enabled.
    pub jsx: bool,
}

/// Extracts component documentation from script and single-file component
/// sources by running a handler pipeline over every exported definition.
#[derive(Clone)]
pub struct DocgenExtractor {
    options: ExtractOptions,
    handlers: Vec<Arc<dyn ScriptHandler>>,
}

impl fmt::Debug for DocgenExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocgenExtractor")
            .field("options", &self.options)
            .field(
                "handlers",
                &self.handlers.iter().map(|handler| handler.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for DocgenExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}

impl DocgenExtractor {
    /// Create an extractor running the default handlers.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            handlers: default_handlers(),
        }
    }

    /// Append a handler to the pipeline; it runs after the existing ones.
    pub fn with_handler(mut self, handler: Arc<dyn ScriptHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Extract documentation from multiple files at once.
    ///
    /// Stops at the first file that fails.
    pub fn extract_many<I>(&self, inputs: I) -> Result<DocSet>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut docs = DocSet::default();
        for path in inputs {
            docs.add_module(self.extract_from_path(&path)?);
        }
        Ok(docs)
    }

    /// Extract documentation from a file on disk.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<ModuleDoc> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| DocgenError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        self.extract_from_source(path, &source)
    }

    /// Extract documentation from an in-memory source string.
    ///
    /// `path` selects the dialect (`.vue`, `.ts`, ...) and names the module.
    pub fn extract_from_source(&self, path: impl AsRef<Path>, source: &str) -> Result<ModuleDoc> {
        let path = path.as_ref();
        let mut module = ModuleDoc::new(path.to_string_lossy());

        let (script, parse_options) = if is_sfc(path) {
            let block = sfc::component_script(source).map_err(|error| DocgenError::Sfc {
                path: path.to_path_buf(),
                error,
            })?;
            let Some(block) = block else {
                debug!(path = %path.display(), "no regular script block");
                return Ok(module);
            };
            (block.source_text, ParseOptions::for_lang(block.lang))
        } else {
            (source, self.parse_options(path))
        };

        let allocator = Allocator::default();
        let parsed = parse(&allocator, script, parse_options).map_err(|diagnostics| {
            let messages: Vec<String> = diagnostics.into_iter().map(|d| d.message).collect();
            DocgenError::parse_error(path.to_path_buf(), &messages)
        })?;

        let program = parsed.ast();
        let docblocks = Docblocks::new(parsed.source_text, program.comments.iter());

        for component in resolve_exported_components(program, &docblocks) {
            let mut documentation = Documentation::new(component.export_name);
            for handler in &self.handlers {
                trace!(handler = handler.name(), export = component.export_name, "running handler");
                handler.handle(&mut documentation, &component);
            }
            if documentation.display_name.is_none() && component.is_default_export() {
                documentation.display_name = file_stem(path);
            }
            module.components.push(documentation);
        }

        debug!(
            path = %path.display(),
            components = module.components.len(),
            "extracted module"
        );
        Ok(module)
    }

    fn parse_options(&self, path: &Path) -> ParseOptions {
        let is_js = path.extension().is_some_and(|ext| ext == "js");
        if self.options.jsx && is_js {
            ParseOptions::jsx()
        } else {
            ParseOptions::from_path(path)
        }
    }
}

fn is_sfc(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "vue")
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
