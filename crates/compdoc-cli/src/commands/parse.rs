//! Parse command: extract component documentation and render it as JSON.

use crate::cli::ParseArgs;
use crate::commands::utils::{discover_files, get_cwd, resolve_path, write_output};
use crate::config::CompdocConfig;
use crate::error::{CliError, Result};
use crate::ui;
use compdoc::{DocSet, DocgenExtractor, ExtractOptions, ModuleDoc, render_json, render_json_compact};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Execute the parse command.
///
/// # Process
///
/// 1. Load and validate configuration
/// 2. Discover source files
/// 3. Extract documentation in parallel, skipping files that fail
/// 4. Render JSON to the output file or stdout
pub fn execute(args: ParseArgs) -> Result<()> {
    let cwd = get_cwd(args.cwd.as_deref())?;
    let config = CompdocConfig::load(&args, &cwd)?;
    config.validate()?;
    debug!(?config, "resolved configuration");

    let files = discover_files(&config, &cwd)?;
    if files.is_empty() {
        return Err(CliError::NoInputFiles);
    }
    info!(count = files.len(), "extracting documentation");

    let extractor = DocgenExtractor::new(ExtractOptions { jsx: config.jsx });
    let (docs, failed) = extract_all(&extractor, &files);

    let json = if config.compact {
        render_json_compact(&docs)?
    } else {
        render_json(&docs)?
    };

    match &config.out {
        Some(out) => {
            let out = resolve_path(out, &cwd);
            write_output(&out, &json)?;
            debug!(path = %out.display(), "documentation written");
            ui::info(&format!("Wrote {}", out.display()));
        }
        None => println!("{json}"),
    }

    print_summary(&docs, failed);
    Ok(())
}

/// Extract every file, keeping input order. Returns the set and the failure count.
fn extract_all(extractor: &DocgenExtractor, files: &[PathBuf]) -> (DocSet, usize) {
    let results: Vec<Option<ModuleDoc>> = files
        .par_iter()
        .map(|path| match extractor.extract_from_path(path) {
            Ok(module) => Some(module),
            Err(error) => {
                debug!(path = %path.display(), %error, "skipping file");
                ui::error(&format!("Skipped {}: {}", path.display(), error));
                None
            }
        })
        .collect();

    let failed = results.iter().filter(|result| result.is_none()).count();
    let mut docs = DocSet::default();
    for module in results.into_iter().flatten() {
        docs.add_module(module);
    }
    (docs, failed)
}

fn print_summary(docs: &DocSet, failed: usize) {
    let components: usize = docs.modules.iter().map(|module| module.components.len()).sum();
    let setups: usize = docs
        .modules
        .iter()
        .flat_map(|module| &module.components)
        .map(|component| component.setups.len())
        .sum();

    if failed > 0 {
        ui::warning(&format!("{} could not be parsed", ui::plural(failed, "file")));
    }
    ui::success(&format!(
        "Documented {} with {} across {}",
        ui::plural(components, "component"),
        ui::plural(setups, "setup function"),
        ui::plural(docs.modules.len(), "file"),
    ));
}
