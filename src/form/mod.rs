//! Field generation: maps typed schemas to markup-description nodes.

use indexmap::IndexMap;
use serde_json::Value;

use crate::markup::{MarkupNode, Namespace, Tag};
use crate::schema::{FieldKind, FieldSchema, FormDocument};

/// HTML input type for a (kind, format) pair.
///
/// Formats apply to string fields only; anything unrecognized falls
/// back to a plain text input. This mapping never fails.
pub fn input_type(kind: FieldKind, format: Option<&str>) -> &'static str {
    match kind {
        FieldKind::String => match format {
            Some("email") => "email",
            Some("date-time") => "datetime",
            Some("date") => "date",
            Some("time") => "time",
            Some("uri") => "url",
            Some("color") => "color",
            Some("phone") => "tel",
            _ => "text",
        },
        FieldKind::Number | FieldKind::Integer => "number",
        FieldKind::Boolean => "checkbox",
        FieldKind::Array | FieldKind::Any => "text",
    }
}

/// Label node pointing at the control with id `for_id`.
pub fn label(text: &str, for_id: &str) -> MarkupNode {
    MarkupNode::new(Tag::Label).attr("for", for_id).text(text)
}

/// Control node for one field: an input element with attributes derived
/// from the schema's constraints, or a select element when the schema
/// declares `enum` options.
pub fn input(id: &str, schema: &FieldSchema) -> MarkupNode {
    if let Some(options) = &schema.options {
        return select(id, schema, options);
    }

    let mut node = MarkupNode::new(Tag::Input)
        .attr("id", id)
        .attr("type", input_type(schema.kind, schema.format.as_deref()));
    if let Some(default) = &schema.default {
        node = node.attr("value", default.clone());
    }
    if schema.required {
        node = node.attr("required", true);
    }
    if let Some(max_length) = schema.max_length {
        node = node.attr("maxlength", max_length);
    }
    if let Some(description) = &schema.description {
        node = node.attr("title", description.as_str());
    }
    if let Some(maximum) = schema.maximum {
        node = node.attr("max", bound(maximum, schema.exclusive_maximum, -1.0));
    }
    if let Some(minimum) = schema.minimum {
        node = node.attr("min", bound(minimum, schema.exclusive_minimum, 1.0));
    }
    node
}

// Exclusive bounds tighten by one toward the allowed range.
fn bound(value: f64, exclusive: bool, step: f64) -> Value {
    let adjusted = if exclusive { value + step } else { value };
    if adjusted.fract() == 0.0 {
        Value::from(adjusted as i64)
    } else {
        Value::from(adjusted)
    }
}

fn select(id: &str, schema: &FieldSchema, options: &[Value]) -> MarkupNode {
    let mut node = MarkupNode::new(Tag::Select).attr("id", id);
    if schema.required {
        node = node.attr("required", true);
    }
    for option in options {
        let text = match option {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let mut item = MarkupNode::new(Tag::Option).attr("value", text.as_str());
        if schema.default.as_ref() == Some(option) {
            item = item.attr("selected", true);
        }
        node = node.child(item.text(&text));
    }
    node
}

/// Generates field markup, allocating element ids from a shared
/// [`Namespace`] so one pass never produces colliding identifiers.
/// Reset (or construct a fresh generator) between independent passes.
#[derive(Debug, Clone, Default)]
pub struct FormGenerator {
    ns: Namespace,
}

impl FormGenerator {
    pub fn new() -> Self {
        Self {
            ns: Namespace::new(),
        }
    }

    pub fn with_namespace(ns: Namespace) -> Self {
        Self { ns }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Restart the id sequence for a new independent pass.
    pub fn reset(&mut self) {
        self.ns.reset();
    }

    /// One labelled field wrapped in its container div.
    ///
    /// The container takes the next id for `name` and the class list
    /// `<prefix>-field <prefix>-<name> <prefix>-<kind>`, plus
    /// `<prefix>-required` when the field is required. The control id
    /// is allocated immediately after the container id.
    pub fn field(&mut self, name: &str, schema: &FieldSchema) -> MarkupNode {
        let div_id = self.ns.id(name);
        let input_id = self.ns.id(&format!("{name}-input"));

        let mut class_parts = vec!["field", name, schema.kind.as_str()];
        if schema.required {
            class_parts.push("required");
        }
        let classes = self.ns.classes(&class_parts);

        let title = schema.display_label(name);
        let control = match (schema.kind, &schema.items) {
            (FieldKind::Array, Some(items)) => self.array_group(&input_id, items),
            _ => input(&input_id, schema),
        };

        MarkupNode::new(Tag::Div)
            .attr("id", div_id)
            .attr("class", classes)
            .child(label(&title, &input_id))
            .child(control)
    }

    // Array group: an items list seeded with one item wrapping the
    // sub-field control, plus an actions container the renderer fills
    // with its add/remove controls. Arrays of arrays recurse, keeping
    // `input_id` for the innermost seed control.
    fn array_group(&mut self, input_id: &str, items: &FieldSchema) -> MarkupNode {
        let control = match (items.kind, &items.items) {
            (FieldKind::Array, Some(inner)) => self.array_group(input_id, inner),
            _ => input(input_id, items),
        };

        let item = MarkupNode::new(Tag::Div)
            .attr("class", self.ns.cls("array-item"))
            .child(control);
        let item_list = MarkupNode::new(Tag::Div)
            .attr("class", self.ns.cls("array-items"))
            .child(item);
        let actions = MarkupNode::new(Tag::Div).attr("class", self.ns.cls("array-actions"));

        MarkupNode::new(Tag::Div)
            .attr("class", self.ns.cls("array"))
            .child(item_list)
            .child(actions)
    }

    /// Fields in declaration order, sharing one counter pass.
    pub fn fields(&mut self, schemas: &IndexMap<String, FieldSchema>) -> Vec<MarkupNode> {
        schemas
            .iter()
            .map(|(name, schema)| self.field(name, schema))
            .collect()
    }

    /// Whole form: a container div wrapping every field in order.
    pub fn form(&mut self, document: &FormDocument) -> MarkupNode {
        let mut root = MarkupNode::new(Tag::Div).attr("class", self.ns.cls("form"));
        for (name, schema) in &document.fields {
            root.push_child(self.field(name, schema));
        }
        root
    }
}
