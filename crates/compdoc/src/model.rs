use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::doclets::{BlockTag, ParamTag};

/// Tags grouped by title, in first-appearance order.
pub type TagMap = IndexMap<String, Vec<BlockTag>>;

/// Top-level artifact containing every module processed in a run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DocSet {
    /// Modules discovered during extraction.
    pub modules: Vec<ModuleDoc>,
}

impl DocSet {
    /// Returns `true` when no module exposes a component.
    pub fn is_empty(&self) -> bool {
        self.modules.iter().all(|module| module.components.is_empty())
    }

    /// Adds a module to the set.
    pub fn add_module(&mut self, module: ModuleDoc) {
        self.modules.push(module);
    }
}

/// Components documented in a single source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDoc {
    /// File-system path (or virtual path) for the module.
    pub path: String,
    /// One entry per exported component definition.
    pub components: Vec<Documentation>,
}

impl ModuleDoc {
    /// Creates an empty module documentation instance.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            components: Vec::new(),
        }
    }
}

/// Documentation accumulated for one component definition.
///
/// Handlers write into it; setup descriptors are created on first lookup and
/// never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentation {
    /// Name of the export holding the definition (`default` for default exports).
    pub export_name: String,
    /// Human readable component name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Component description from its leading docblock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Component-level tags.
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub tags: TagMap,
    /// Public setup descriptors.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub setups: Vec<SetupDescriptor>,
}

impl Documentation {
    /// Creates an empty documentation record for an export.
    pub fn new(export_name: impl Into<String>) -> Self {
        Self {
            export_name: export_name.into(),
            ..Self::default()
        }
    }

    /// Fetch the descriptor for `name`, creating it on first lookup.
    pub fn get_setup_descriptor(&mut self, name: &str) -> &mut SetupDescriptor {
        let index = match self.setups.iter().position(|setup| setup.name == name) {
            Some(index) => index,
            None => {
                self.setups.push(SetupDescriptor::new(name));
                self.setups.len() - 1
            }
        };
        &mut self.setups[index]
    }

    /// Look up an existing descriptor without creating one.
    pub fn setup(&self, name: &str) -> Option<&SetupDescriptor> {
        self.setups.iter().find(|setup| setup.name == name)
    }
}

/// Documentation for one public setup member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnDescriptor>,
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub tags: TagMap,
}

impl SetupDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A described parameter.
///
/// `name` is absent when the parameter only exists in the documentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Param {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<TypeDescriptor>,
}

impl Param {
    /// A parameter known only by its syntactic name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl From<&ParamTag> for Param {
    fn from(tag: &ParamTag) -> Self {
        Self {
            name: tag.name.clone(),
            description: tag.description.clone(),
            type_hint: tag.type_hint.clone(),
        }
    }
}

/// What a setup returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<TypeDescriptor>,
}

impl From<&ParamTag> for ReturnDescriptor {
    /// A named return tag folds its name into the description.
    fn from(tag: &ParamTag) -> Self {
        let description = match (&tag.name, &tag.description) {
            (Some(name), Some(description)) => Some(format!("{name} {description}")),
            (_, description) => description.clone(),
        };
        Self {
            name: tag.name.clone(),
            description,
            type_hint: tag.type_hint.clone(),
        }
    }
}

/// Simplified type: a name plus member types for unions, arrays and generics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub elements: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_elements(name: impl Into<String>, elements: Vec<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_descriptor_is_created_once() {
        let mut documentation = Documentation::new("default");
        documentation.get_setup_descriptor("load").description = Some("first".into());
        documentation.get_setup_descriptor("save");
        let again = documentation.get_setup_descriptor("load");

        assert_eq!(again.description.as_deref(), Some("first"));
        assert_eq!(documentation.setups.len(), 2);
        assert_eq!(documentation.setups[0].name, "load");
        assert_eq!(documentation.setups[1].name, "save");
    }

    #[test]
    fn named_return_tag_prefixes_description() {
        let tag = ParamTag {
            title: "returns".into(),
            name: Some("total".into()),
            type_hint: Some(TypeDescriptor::new("number")),
            description: Some("of all items".into()),
        };
        let returns = ReturnDescriptor::from(&tag);
        assert_eq!(returns.description.as_deref(), Some("total of all items"));
        assert_eq!(returns.type_hint, Some(TypeDescriptor::new("number")));
    }

    #[test]
    fn serializes_without_empty_fields() {
        let mut descriptor = SetupDescriptor::new("load");
        descriptor.params = Some(vec![Param {
            type_hint: Some(TypeDescriptor::new("string")),
            ..Param::named("id")
        }]);

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "load",
                "params": [{ "name": "id", "type": { "name": "string" } }]
            })
        );
    }
}
