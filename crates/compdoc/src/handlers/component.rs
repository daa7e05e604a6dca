use tracing::trace;

use super::ScriptHandler;
use crate::component::ComponentPath;
use crate::doclets::{BlockTag, TagContent, parse_doclets, transform_tags_into_object};
use crate::model::Documentation;

/// Reads the docblock above the export: description, tags and `@displayName`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentHandler;

impl ScriptHandler for ComponentHandler {
    fn name(&self) -> &'static str {
        "component"
    }

    fn handle(&self, documentation: &mut Documentation, component: &ComponentPath<'_, '_>) {
        let Some(docblock) = component.docblock() else {
            trace!(export = component.export_name, "component has no docblock");
            return;
        };
        let doclets = parse_doclets(docblock);

        if !doclets.description.is_empty() {
            documentation.description = Some(doclets.description);
        }

        let display_name = doclets.tags.iter().find_map(|tag| match tag {
            BlockTag::Tag(tag) if tag.title == "displayName" => match &tag.content {
                TagContent::Text(name) => Some(name.clone()),
                TagContent::Flag(_) => None,
            },
            _ => None,
        });
        if display_name.is_some() {
            documentation.display_name = display_name;
        }

        documentation.tags = transform_tags_into_object(&doclets.tags);
    }
}
