//! Path resolution and input discovery shared by commands.

use crate::config::CompdocConfig;
use crate::error::{CliError, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the working directory for a run: `--cwd` when given, else the process one.
///
/// # Errors
///
/// Returns `FileNotFound` when an explicit directory does not exist.
pub fn get_cwd(explicit: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })?;

    match explicit {
        Some(dir) => {
            let dir = resolve_path(dir, &current);
            if !dir.is_dir() {
                return Err(CliError::FileNotFound(dir));
            }
            Ok(dir)
        }
        None => Ok(current),
    }
}

/// Expand configured inputs into a sorted, de-duplicated list of source files.
///
/// Files given explicitly are kept whatever their extension. Directories are
/// walked recursively, skipping `node_modules` and hidden directories, and
/// only files with a configured extension are collected.
///
/// # Errors
///
/// Returns `FileNotFound` for a missing input and walk errors for unreadable
/// directories.
pub fn discover_files(config: &CompdocConfig, cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in &config.inputs {
        let path = resolve_path(input, cwd);
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            for entry in WalkDir::new(&path).into_iter().filter_entry(|e| !is_skipped_dir(e)) {
                let entry = entry?;
                if entry.file_type().is_file() && has_accepted_extension(entry.path(), config) {
                    trace!(path = %entry.path().display(), "discovered source");
                    files.push(entry.into_path());
                }
            }
        } else {
            return Err(CliError::FileNotFound(path));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Write `contents` to `path`, creating parent directories first.
///
/// # Errors
///
/// Returns `FileNotFound` when the target location cannot be reached and
/// `Io` for any other write failure.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(path, contents).with_path(path)?;
    Ok(())
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}

fn has_accepted_extension(path: &Path, config: &CompdocConfig) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| config.accepts_extension(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(inputs: Vec<PathBuf>) -> CompdocConfig {
        CompdocConfig {
            inputs,
            ..CompdocConfig::default()
        }
    }

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "export default {}").unwrap();
        path
    }

    #[test]
    fn test_resolve_path_absolute() {
        let cwd = PathBuf::from("/home/user/project");
        let absolute = PathBuf::from("/tmp/Button.vue");
        assert_eq!(resolve_path(&absolute, &cwd), absolute);
    }

    #[test]
    fn test_resolve_path_relative() {
        let cwd = PathBuf::from("/home/user/project");
        assert_eq!(
            resolve_path(Path::new("src/Button.vue"), &cwd),
            PathBuf::from("/home/user/project/src/Button.vue")
        );
    }

    #[test]
    fn test_get_cwd_explicit_must_exist() {
        let temp = TempDir::new().unwrap();
        assert_eq!(get_cwd(Some(temp.path())).unwrap(), temp.path());
        assert!(matches!(
            get_cwd(Some(&temp.path().join("missing"))),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_discover_walks_directories() {
        let temp = TempDir::new().unwrap();
        let button = touch(temp.path(), "src/Button.vue");
        let card = touch(temp.path(), "src/nested/Card.ts");
        touch(temp.path(), "src/readme.md");
        touch(temp.path(), "src/node_modules/lib/Dep.vue");
        touch(temp.path(), "src/.cache/Hidden.vue");

        let files = discover_files(&config_for(vec!["src".into()]), temp.path()).unwrap();
        assert_eq!(files, [button, card]);
    }

    #[test]
    fn test_discover_keeps_explicit_files_and_dedups() {
        let temp = TempDir::new().unwrap();
        let button = touch(temp.path(), "src/Button.vue");
        let notes = touch(temp.path(), "notes.mjs");

        let files = discover_files(
            &config_for(vec!["src".into(), "src/Button.vue".into(), "notes.mjs".into()]),
            temp.path(),
        )
        .unwrap();
        assert_eq!(files, [notes, button]);
    }

    #[test]
    fn test_discover_missing_input() {
        let temp = TempDir::new().unwrap();
        let err = discover_files(&config_for(vec!["nope".into()]), temp.path()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(path) if path.ends_with("nope")));
    }

    #[test]
    fn test_write_output_creates_parents() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("docs/api/components.json");
        write_output(&out, "{}").unwrap();
        assert_eq!(fs::read_to_string(out).unwrap(), "{}");
    }
}
