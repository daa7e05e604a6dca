//! Single File Component script extraction.
//!
//! Component definitions in `.vue` files live inside `<script>` blocks. This
//! module locates those blocks with `memchr` so the script can be parsed on
//! its own.

use memchr::memmem;
use thiserror::Error;

/// Maximum file size in bytes (10 MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum number of script tags to process
pub const MAX_SCRIPT_TAGS: usize = 100;

/// A `<script>` block extracted from a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock<'a> {
    /// The script content between the opening and closing tags
    pub source_text: &'a str,
    /// Byte offset of the content from the start of the file
    pub source_offset: usize,
    /// Whether the opening tag carries the `setup` attribute
    pub setup: bool,
    /// Language identifier (js, ts, jsx, tsx)
    pub lang: &'a str,
}

/// Errors raised while splitting a component file into script blocks.
#[derive(Debug, Error)]
pub enum SfcError {
    /// File exceeds maximum allowed size
    #[error("file too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge {
        /// Actual file size in bytes
        size: usize,
        /// Maximum allowed size in bytes
        max: usize,
    },

    /// Too many script tags found in the file
    #[error("too many script tags: {count} found (max: {max} allowed)")]
    TooManyScriptTags {
        /// Number of script tags found
        count: usize,
        /// Maximum allowed script tags
        max: usize,
    },

    /// Script tag opened but never closed
    #[error("unclosed script tag starting at byte position {position}")]
    UnclosedScriptTag {
        /// Byte position where the unclosed tag begins
        position: usize,
    },
}

/// Extract every `<script>` block from a component file, in source order.
pub fn extract_scripts(source: &str) -> Result<Vec<ScriptBlock<'_>>, SfcError> {
    if source.len() > MAX_FILE_SIZE {
        return Err(SfcError::FileTooLarge {
            size: source.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let mut blocks = Vec::new();
    let mut pointer = 0;

    while let Some(block) = next_script(source, &mut pointer)? {
        blocks.push(block);
        if blocks.len() > MAX_SCRIPT_TAGS {
            return Err(SfcError::TooManyScriptTags {
                count: blocks.len(),
                max: MAX_SCRIPT_TAGS,
            });
        }
    }

    Ok(blocks)
}

/// The regular (non-`setup`) script block holding the component definition.
pub fn component_script(source: &str) -> Result<Option<ScriptBlock<'_>>, SfcError> {
    Ok(extract_scripts(source)?
        .into_iter()
        .find(|block| !block.setup))
}

fn next_script<'a>(
    source: &'a str,
    pointer: &mut usize,
) -> Result<Option<ScriptBlock<'a>>, SfcError> {
    let bytes = source.as_bytes();

    loop {
        let Some(script_start) = find(bytes, *pointer, b"<script") else {
            return Ok(None);
        };
        *pointer = script_start + "<script".len();

        // `<scripts>` or `<scripting>` are not script tags
        if *pointer < bytes.len()
            && !matches!(bytes[*pointer], b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/')
        {
            continue;
        }

        let Some(tag_end) = find_closing_angle(bytes, *pointer) else {
            return Err(SfcError::UnclosedScriptTag {
                position: script_start,
            });
        };

        let attributes = &source[*pointer..tag_end];
        let setup = has_setup_attribute(attributes);
        let lang = lang_attribute(attributes);

        if bytes[tag_end - 1] == b'/' {
            *pointer = tag_end + 1;
            return Ok(Some(ScriptBlock {
                source_text: "",
                source_offset: tag_end + 1,
                setup,
                lang,
            }));
        }

        let content_start = tag_end + 1;
        let Some(content_end) = find(bytes, content_start, b"</script>") else {
            return Err(SfcError::UnclosedScriptTag {
                position: script_start,
            });
        };

        *pointer = content_end + "</script>".len();
        return Ok(Some(ScriptBlock {
            source_text: &source[content_start..content_end],
            source_offset: content_start,
            setup,
            lang,
        }));
    }
}

fn find(bytes: &[u8], start: usize, needle: &[u8]) -> Option<usize> {
    memmem::find(&bytes[start..], needle).map(|pos| start + pos)
}

/// Finds the closing `>` of an opening tag, skipping quoted attribute values.
fn find_closing_angle(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        match (quote, byte) {
            (None, b'"' | b'\'') => quote = Some(byte),
            (Some(open), _) if open == byte => quote = None,
            (None, b'>') => return Some(start + offset),
            _ => {}
        }
    }

    None
}

fn has_setup_attribute(attributes: &str) -> bool {
    attributes
        .split(|c: char| c.is_whitespace() || c == '/')
        .any(|attribute| attribute == "setup" || attribute.starts_with("setup="))
}

fn lang_attribute(attributes: &str) -> &str {
    let Some(position) = attributes.find("lang=") else {
        return "js";
    };
    let value = attributes[position + "lang=".len()..].trim_start();

    match value.chars().next() {
        Some(quote @ ('"' | '\'')) => value[1..]
            .find(quote)
            .map(|end| &value[1..=end])
            .unwrap_or("js"),
        Some(_) => {
            let end = value
                .find(|c: char| c.is_whitespace() || c == '/')
                .unwrap_or(value.len());
            &value[..end]
        }
        None => "js",
    }
}
