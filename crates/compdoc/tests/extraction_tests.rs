use std::fs;
use std::sync::Arc;

use compdoc::{
    ComponentPath, DocgenError, DocgenExtractor, Documentation, ExtractOptions, ScriptHandler,
    TypeDescriptor,
};

#[test]
fn extracts_component_from_vue_file() {
    let source = r#"
<template>
  <button @click="load">{{ label }}</button>
</template>

<script lang="ts">
/**
 * Loads things on demand.
 * @since 2.1
 */
export default defineComponent({
  name: 'LoaderButton',
  setup: {
    /**
     * Fetch one record.
     * @public
     * @returns the record
     */
    load(id: number): Promise<Record> {
      return fetch(id)
    }
  }
})
</script>
"#;

    let extractor = DocgenExtractor::new(ExtractOptions::default());
    let module = extractor
        .extract_from_source("src/LoaderButton.vue", source)
        .expect("extraction should succeed");

    assert_eq!(module.path, "src/LoaderButton.vue");
    assert_eq!(module.components.len(), 1);
    let component = &module.components[0];
    assert_eq!(component.export_name, "default");
    assert_eq!(component.display_name.as_deref(), Some("LoaderButton"));
    assert_eq!(component.description.as_deref(), Some("Loads things on demand."));
    assert!(component.tags.contains_key("since"));

    let load = component.setup("load").expect("load is public");
    assert_eq!(load.description.as_deref(), Some("Fetch one record."));
    let returns = load.returns.as_ref().expect("returns");
    assert_eq!(returns.description.as_deref(), Some("the record"));
    assert_eq!(
        returns.type_hint,
        Some(TypeDescriptor::with_elements(
            "Promise",
            vec![TypeDescriptor::new("Record")]
        ))
    );
}

#[test]
fn script_setup_blocks_are_not_component_definitions() {
    let source = r#"
<script setup>
const count = ref(0)
</script>
<template><p>{{ count }}</p></template>
"#;
    let module = DocgenExtractor::default()
        .extract_from_source("Counter.vue", source)
        .expect("extraction should succeed");
    assert!(module.components.is_empty());
}

#[test]
fn file_stem_names_unnamed_default_exports() {
    let module = DocgenExtractor::default()
        .extract_from_source("components/Badge.js", "export default { setup: {} }")
        .expect("extraction should succeed");
    assert_eq!(module.components[0].display_name.as_deref(), Some("Badge"));
}

#[test]
fn named_exports_are_documented_separately() {
    let source = r#"
        export const Card = { name: 'Card' }

        /** Panel component */
        export const Panel = {
          setup: {
            /** @public */
            toggle(open) {}
          }
        }
    "#;
    let module = DocgenExtractor::default()
        .extract_from_source("src/widgets.js", source)
        .expect("extraction should succeed");

    let names: Vec<&str> = module
        .components
        .iter()
        .map(|component| component.export_name.as_str())
        .collect();
    assert_eq!(names, ["Card", "Panel"]);
    assert_eq!(module.components[1].display_name, None);
    assert_eq!(module.components[1].description.as_deref(), Some("Panel component"));
    assert!(module.components[1].setup("toggle").is_some());
}

#[test]
fn jsx_option_enables_jsx_in_js_files() {
    let source = "export default { render() { return <div /> } }";
    let extractor = DocgenExtractor::new(ExtractOptions { jsx: true });
    let module = extractor
        .extract_from_source("View.js", source)
        .expect("jsx should parse");
    assert_eq!(module.components.len(), 1);
}

#[test]
fn syntax_errors_are_reported_with_the_path() {
    let error = DocgenExtractor::default()
        .extract_from_source("broken.ts", "export default {")
        .unwrap_err();
    match error {
        DocgenError::Parse { path, message } => {
            assert_eq!(path.to_string_lossy(), "broken.ts");
            assert!(!message.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unclosed_script_is_an_sfc_error() {
    let error = DocgenExtractor::default()
        .extract_from_source("Broken.vue", "<script>export default {}")
        .unwrap_err();
    assert!(matches!(error, DocgenError::Sfc { .. }));
}

#[test]
fn extract_many_reads_files_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = dir.path().join("First.vue");
    let second = dir.path().join("second.ts");
    fs::write(
        &first,
        "<script>\nexport default { name: 'First' }\n</script>",
    )
    .unwrap();
    fs::write(&second, "export const Second = { name: 'Second' }").unwrap();

    let docs = DocgenExtractor::default()
        .extract_many(vec![first, second])
        .expect("extraction should succeed");
    assert_eq!(docs.modules.len(), 2);
    assert!(!docs.is_empty());

    let missing = DocgenExtractor::default().extract_from_path(dir.path().join("missing.js"));
    assert!(matches!(missing, Err(DocgenError::Io { .. })));
}

/// Summarizes the setups the built-in handlers already recorded.
struct SetupSummary;

impl ScriptHandler for SetupSummary {
    fn name(&self) -> &'static str {
        "setup-summary"
    }

    fn handle(&self, documentation: &mut Documentation, _component: &ComponentPath<'_, '_>) {
        let names: Vec<&str> = documentation.setups.iter().map(|setup| setup.name.as_str()).collect();
        documentation.description = Some(format!("setups: {}", names.join(", ")));
    }
}

#[test]
fn custom_handlers_run_after_the_defaults() {
    let source = r#"
/** Overwritten by the summary. */
export default {
  name: 'Summary',
  setup: {
    /** @public */
    open() {},
    /** @public */
    close: () => {},
    internal() {},
  },
}
"#;

    let module = DocgenExtractor::default()
        .with_handler(Arc::new(SetupSummary))
        .extract_from_source("Summary.js", source)
        .expect("extraction should succeed");

    let component = &module.components[0];
    assert_eq!(component.display_name.as_deref(), Some("Summary"));
    assert_eq!(component.description.as_deref(), Some("setups: open, close"));
}
