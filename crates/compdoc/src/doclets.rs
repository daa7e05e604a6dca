use serde::{Deserialize, Serialize};

use crate::model::{TagMap, TypeDescriptor};

/// Description and tags parsed from one docblock.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocBlockTags {
    /// Free text before the first tag.
    pub description: String,
    /// Tags in source order.
    pub tags: Vec<BlockTag>,
}

/// A parsed `@tag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockTag {
    /// Plain tag with textual (or flag) content.
    Tag(Tag),
    /// Tag shaped like a parameter: `@param`, `@arg`, `@argument`, `@returns`.
    Param(ParamTag),
}

impl BlockTag {
    pub fn title(&self) -> &str {
        match self {
            Self::Tag(tag) => &tag.title,
            Self::Param(tag) => &tag.title,
        }
    }

    pub fn as_param(&self) -> Option<&ParamTag> {
        match self {
            Self::Param(tag) => Some(tag),
            Self::Tag(_) => None,
        }
    }

    /// Whether this is the `access` tag with the given level.
    pub fn is_access(&self, level: &str) -> bool {
        matches!(self, Self::Tag(tag) if tag.title == "access" && tag.content.as_text() == Some(level))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    pub content: TagContent,
}

impl Tag {
    pub fn new(title: impl Into<String>, content: TagContent) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}

/// Tag body: text, or `true` for a bare tag such as `@deprecated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagContent {
    Text(String),
    Flag(bool),
}

impl TagContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    fn from_payload(payload: &str) -> Self {
        if payload.is_empty() {
            Self::Flag(true)
        } else {
            Self::Text(payload.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamTag {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parse a docblock body (without comment delimiters) into a description and tags.
///
/// The grammar is deliberately small: one tag per line starting with `@`, with
/// following lines folded into the tag until the next one starts.
pub fn parse_doclets(raw: &str) -> DocBlockTags {
    let mut description_lines = Vec::new();
    let mut raw_tags: Vec<(String, Vec<String>)> = Vec::new();

    for line in normalize_lines(raw) {
        if let Some(rest) = line.strip_prefix('@') {
            let (title, payload) = split_tag_payload(rest);
            if !title.is_empty() {
                raw_tags.push((title.to_string(), vec![payload.to_string()]));
                continue;
            }
        }
        match raw_tags.last_mut() {
            Some((_, body)) => body.push(line),
            None => description_lines.push(line),
        }
    }

    let tags = raw_tags
        .into_iter()
        .map(|(title, body)| parse_tag(&title, body.join("\n").trim()))
        .collect();

    DocBlockTags {
        description: description_lines.join("\n").trim().to_string(),
        tags,
    }
}

/// Group tags by title, keeping the order in which titles first appear.
pub fn transform_tags_into_object(tags: &[BlockTag]) -> TagMap {
    let mut grouped = TagMap::default();
    for tag in tags {
        grouped
            .entry(tag.title().to_string())
            .or_default()
            .push(tag.clone());
    }
    grouped
}

fn parse_tag(title: &str, payload: &str) -> BlockTag {
    match title {
        "public" | "private" | "protected" => {
            BlockTag::Tag(Tag::new("access", TagContent::Text(title.to_string())))
        }
        "access" => BlockTag::Tag(Tag::new("access", TagContent::from_payload(payload))),
        "param" | "arg" | "argument" => BlockTag::Param(parse_param(title, payload)),
        "returns" | "return" => BlockTag::Param(parse_returns(payload)),
        "example" | "examples" => {
            BlockTag::Tag(Tag::new("example", TagContent::from_payload(payload)))
        }
        other => BlockTag::Tag(Tag::new(other, TagContent::from_payload(payload))),
    }
}

fn parse_param(title: &str, payload: &str) -> ParamTag {
    let (type_hint, rest) = parse_type_and_rest(payload);
    let mut tag = ParamTag {
        title: title.to_string(),
        type_hint,
        ..ParamTag::default()
    };

    let rest = match rest.split_once(char::is_whitespace) {
        _ if rest.starts_with('-') => rest,
        Some((name, rest)) => {
            tag.name = param_name(name);
            rest
        }
        None => {
            tag.name = param_name(rest);
            ""
        }
    };
    tag.description = description(rest);
    tag
}

fn parse_returns(payload: &str) -> ParamTag {
    let (type_hint, rest) = parse_type_and_rest(payload);
    let mut tag = ParamTag {
        title: "returns".to_string(),
        type_hint,
        ..ParamTag::default()
    };

    match rest.split_once(" - ") {
        Some((name, text)) if is_identifier(name.trim()) => {
            tag.name = Some(name.trim().to_string());
            tag.description = description(text);
        }
        _ => tag.description = description(rest),
    }
    tag
}

/// Unwraps `[name]` and `[name=default]` forms.
fn param_name(raw: &str) -> Option<String> {
    let name = raw
        .strip_prefix('[')
        .map(|inner| inner.trim_end_matches(']'))
        .map(|inner| inner.split('=').next().unwrap_or(inner))
        .unwrap_or(raw)
        .trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn is_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '$' | '.'))
}

fn description(rest: &str) -> Option<String> {
    let text = rest.trim_start();
    let text = text.strip_prefix('-').unwrap_or(text).trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn normalize_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.trim().to_string()
        })
        .collect()
}

fn split_tag_payload(input: &str) -> (&str, &str) {
    let mut parts = input.splitn(2, char::is_whitespace);
    let tag = parts.next().unwrap_or("");
    let payload = parts.next().unwrap_or("").trim();
    (tag, payload)
}

/// Splits a leading `{type}` off the payload; braces may nest.
fn parse_type_and_rest(payload: &str) -> (Option<TypeDescriptor>, &str) {
    let trimmed = payload.trim();
    let Some(stripped) = trimmed.strip_prefix('{') else {
        return (None, trimmed);
    };

    let mut depth = 1usize;
    for (index, c) in stripped.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let ty = stripped[..index].trim();
                    let rest = stripped[index + 1..].trim();
                    let ty = (!ty.is_empty()).then(|| TypeDescriptor::new(ty));
                    return (ty, rest);
                }
            }
            _ => {}
        }
    }

    (None, trimmed)
}
