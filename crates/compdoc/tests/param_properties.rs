use compdoc::model::Documentation;
use compdoc::parser::{ParseOptions, parse};
use compdoc::{Docblocks, resolve_exported_components, setup_handler};
use oxc_allocator::Allocator;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Shape {
    Plain,
    Defaulted,
    Destructured,
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Plain),
        Just(Shape::Defaulted),
        Just(Shape::Destructured)
    ]
}

fn render(index: usize, shape: Shape) -> String {
    match shape {
        Shape::Plain => format!("p{index}"),
        Shape::Defaulted => format!("p{index} = {index}"),
        Shape::Destructured => format!("{{ field{index} }}"),
    }
}

fn documented_params(signature: &str, tags: &str) -> Option<Vec<Option<String>>> {
    let source =
        format!("export default {{ setup: {{ /**\n * @public\n{tags} */\n member({signature}) {{}} }} }}");
    let allocator = Allocator::default();
    let parsed = parse(&allocator, &source, ParseOptions::default()).expect("valid source");
    let docblocks = Docblocks::new(parsed.source_text, parsed.program.comments.iter());
    let components = resolve_exported_components(&parsed.program, &docblocks);

    let mut documentation = Documentation::new("default");
    setup_handler(&mut documentation, &components[0]);
    let setup = documentation.setup("member").expect("member is public");
    setup
        .params
        .as_ref()
        .map(|params| params.iter().map(|param| param.name.clone()).collect())
}

proptest! {
    #[test]
    fn params_follow_recognized_parameters(shapes in prop::collection::vec(shape(), 0..6), tag_count in 0usize..4) {
        let signature = shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| render(index, *shape))
            .collect::<Vec<_>>()
            .join(", ");
        let tags: String = (0..tag_count)
            .map(|index| format!(" * @param {{string}} - doc {index}\n"))
            .collect();

        let expected: Vec<Option<String>> = shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| !matches!(shape, Shape::Destructured))
            .map(|(index, _)| Some(format!("p{index}")))
            .collect();

        let params = documented_params(&signature, &tags);

        if !expected.is_empty() {
            prop_assert_eq!(params, Some(expected));
        } else if tag_count > 0 {
            prop_assert_eq!(params, Some(vec![None; tag_count]));
        } else {
            prop_assert_eq!(params, None);
        }
    }
}
