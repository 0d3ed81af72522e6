use serde_json::json;

use crate::form::{FormGenerator, input, label};
use crate::markup::{MarkupNode, Tag};
use crate::schema::{FieldKind, FieldSchema};

// Mirror of a generated field: container div with the expected id and
// classes, wrapping the label and the control. `start` is the counter
// value the container id was allocated at.
fn assert_generated_field(
    field: &MarkupNode,
    name: &str,
    title: &str,
    start: u64,
    classes: &str,
    schema: &FieldSchema,
) {
    let div_id = format!("je-{name}-{start}");
    let input_id = format!("je-{name}-input-{}", start + 1);

    assert_eq!(
        field.to_value(),
        json!({
            "div": {
                "id": div_id,
                "class": classes,
                "$childs": [
                    label(title, &input_id).to_value(),
                    input(&input_id, schema).to_value(),
                ]
            }
        })
    );
}

fn child_node(node: &MarkupNode, index: usize) -> &MarkupNode {
    node.childs()[index].as_node().expect("node child")
}

#[test]
fn simple_string_field() {
    let schema = FieldSchema {
        kind: FieldKind::String,
        title: Some("Name".to_string()),
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let field = generator.field("name", &schema);
    assert_generated_field(&field, "name", "Name", 0, "je-field je-name je-string", &schema);
}

#[test]
fn required_field_gains_the_required_class() {
    let schema = FieldSchema {
        kind: FieldKind::Number,
        title: Some("Name".to_string()),
        required: true,
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let field = generator.field("name", &schema);
    assert_generated_field(
        &field,
        "name",
        "Name",
        0,
        "je-field je-name je-number je-required",
        &schema,
    );
}

#[test]
fn label_falls_back_to_a_prettified_name() {
    let mut generator = FormGenerator::new();
    let field = generator.field("first_name", &FieldSchema::of(FieldKind::String));

    let label = child_node(&field, 0);
    assert_eq!(label.tag(), Tag::Label);
    assert_eq!(label.childs()[0].as_text(), Some("First Name"));
}

#[test]
fn fields_are_generated_in_order_sharing_one_pass() {
    let name_schema = FieldSchema {
        kind: FieldKind::String,
        title: Some("Name".to_string()),
        ..FieldSchema::default()
    };
    let age_schema = FieldSchema {
        kind: FieldKind::Number,
        title: Some("Age".to_string()),
        ..FieldSchema::default()
    };

    let mut schemas = indexmap::IndexMap::new();
    schemas.insert("name".to_string(), name_schema.clone());
    schemas.insert("age".to_string(), age_schema.clone());

    let mut generator = FormGenerator::new();
    let fields = generator.fields(&schemas);

    assert_eq!(fields.len(), 2);
    assert_generated_field(
        &fields[0],
        "name",
        "Name",
        0,
        "je-field je-name je-string",
        &name_schema,
    );
    assert_generated_field(
        &fields[1],
        "age",
        "Age",
        2,
        "je-field je-age je-number",
        &age_schema,
    );
}

#[test]
fn reset_makes_passes_reproducible() {
    let schema = FieldSchema {
        kind: FieldKind::String,
        title: Some("Name".to_string()),
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let first = generator.field("name", &schema);
    generator.reset();
    let second = generator.field("name", &schema);

    assert_eq!(first, second);
    assert_eq!(second.id(), Some("je-name-0"));
}

#[test]
fn omitted_reset_keeps_the_counter_running() {
    let schema = FieldSchema::of(FieldKind::String);

    let mut generator = FormGenerator::new();
    let first = generator.field("name", &schema);
    let second = generator.field("name", &schema);

    assert_eq!(first.id(), Some("je-name-0"));
    assert_eq!(second.id(), Some("je-name-2"));
}

#[test]
fn array_fields_nest_items_and_actions() {
    let schema = FieldSchema {
        kind: FieldKind::Array,
        title: Some("Nums".to_string()),
        items: Some(Box::new(FieldSchema::of(FieldKind::Number))),
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let field = generator.field("numbers", &schema);

    assert_eq!(field.id(), Some("je-numbers-0"));
    assert_eq!(field.class(), Some("je-field je-numbers je-array"));
    assert_eq!(child_node(&field, 0).tag(), Tag::Label);

    let array = child_node(&field, 1);
    assert_eq!(array.class(), Some("je-array"));
    assert_eq!(array.childs().len(), 2);

    let items = child_node(array, 0);
    assert_eq!(items.class(), Some("je-array-items"));
    assert_eq!(items.childs().len(), 1);

    let item = child_node(items, 0);
    assert_eq!(item.class(), Some("je-array-item"));
    let seed = child_node(item, 0);
    assert_eq!(seed.tag(), Tag::Input);
    assert_eq!(seed.get("type"), Some(&json!("number")));
    assert_eq!(seed.id(), Some("je-numbers-input-1"));

    let actions = child_node(array, 1);
    assert_eq!(actions.class(), Some("je-array-actions"));
    assert!(actions.childs().is_empty());
}

#[test]
fn array_field_wire_shape() {
    let schema = FieldSchema {
        kind: FieldKind::Array,
        title: Some("Nums".to_string()),
        items: Some(Box::new(FieldSchema::of(FieldKind::Number))),
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let field = generator.field("numbers", &schema);

    assert_eq!(
        field.to_value(),
        json!({
            "div": {
                "id": "je-numbers-0",
                "class": "je-field je-numbers je-array",
                "$childs": [
                    {"label": {"for": "je-numbers-input-1", "$childs": "Nums"}},
                    {"div": {"class": "je-array", "$childs": [
                        {"div": {"class": "je-array-items", "$childs": [
                            {"div": {"class": "je-array-item", "$childs": [
                                {"input": {"id": "je-numbers-input-1", "type": "number"}}
                            ]}}
                        ]}},
                        {"div": {"class": "je-array-actions"}}
                    ]}}
                ]
            }
        })
    );
}

#[test]
fn arrays_of_arrays_recurse() {
    let schema = FieldSchema {
        kind: FieldKind::Array,
        items: Some(Box::new(FieldSchema {
            kind: FieldKind::Array,
            items: Some(Box::new(FieldSchema::of(FieldKind::String))),
            ..FieldSchema::default()
        })),
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let field = generator.field("matrix", &schema);

    let outer = child_node(&field, 1);
    assert_eq!(outer.class(), Some("je-array"));
    let outer_item = child_node(child_node(outer, 0), 0);
    assert_eq!(outer_item.class(), Some("je-array-item"));

    let inner = child_node(outer_item, 0);
    assert_eq!(inner.class(), Some("je-array"));
    let seed = child_node(child_node(child_node(inner, 0), 0), 0);
    assert_eq!(seed.tag(), Tag::Input);
    assert_eq!(seed.get("type"), Some(&json!("text")));
    assert_eq!(seed.id(), Some("je-matrix-input-1"));
}

#[test]
fn enum_fields_generate_selects() {
    let schema = FieldSchema {
        kind: FieldKind::String,
        options: Some(vec![json!("red"), json!("green"), json!("blue")]),
        ..FieldSchema::default()
    };

    let mut generator = FormGenerator::new();
    let field = generator.field("color", &schema);

    assert_eq!(field.class(), Some("je-field je-color je-string"));
    let control = child_node(&field, 1);
    assert_eq!(control.tag(), Tag::Select);
    assert_eq!(control.id(), Some("je-color-input-1"));
    assert_eq!(control.childs().len(), 3);
}
