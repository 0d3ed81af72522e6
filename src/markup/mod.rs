//! Markup-description tree handed to an external renderer.
//!
//! Nodes serialize to the wire shape the renderer contract expects:
//! `{"<tag>": { ...attributes, "$childs": [...] }}`. A single text
//! child collapses to a bare string and an empty child list omits
//! `$childs` entirely, matching the shapes of label and input nodes.

mod namespace;

pub use namespace::Namespace;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Label,
    Input,
    Div,
    Select,
    Option,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::Div => "div",
            Tag::Select => "select",
            Tag::Option => "option",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MarkupChild {
    Text(String),
    Node(MarkupNode),
}

impl MarkupChild {
    pub fn as_node(&self) -> Option<&MarkupNode> {
        match self {
            MarkupChild::Node(node) => Some(node),
            MarkupChild::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MarkupChild::Text(text) => Some(text),
            MarkupChild::Node(_) => None,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            MarkupChild::Text(text) => Value::String(text.clone()),
            MarkupChild::Node(node) => node.to_value(),
        }
    }
}

/// One element of the markup tree: a tag, its attributes in insertion
/// order, and an ordered child list.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    tag: Tag,
    attrs: IndexMap<String, Value>,
    childs: Vec<MarkupChild>,
}

impl MarkupNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: IndexMap::new(),
            childs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn child(mut self, node: MarkupNode) -> Self {
        self.childs.push(MarkupChild::Node(node));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.childs.push(MarkupChild::Text(text.to_string()));
        self
    }

    pub fn push_child(&mut self, node: MarkupNode) {
        self.childs.push(MarkupChild::Node(node));
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    pub fn class(&self) -> Option<&str> {
        self.get("class").and_then(Value::as_str)
    }

    pub fn childs(&self) -> &[MarkupChild] {
        &self.childs
    }

    /// Wire-shape JSON value: `{"<tag>": { ...attrs, "$childs": [...] }}`.
    pub fn to_value(&self) -> Value {
        let mut body = Map::new();
        for (name, value) in &self.attrs {
            body.insert(name.clone(), value.clone());
        }
        match self.childs.as_slice() {
            [] => {}
            [MarkupChild::Text(text)] => {
                body.insert("$childs".to_string(), Value::String(text.clone()));
            }
            childs => {
                body.insert(
                    "$childs".to_string(),
                    Value::Array(childs.iter().map(MarkupChild::to_value).collect()),
                );
            }
        }

        let mut root = Map::new();
        root.insert(self.tag.as_str().to_string(), Value::Object(body));
        Value::Object(root)
    }
}

impl Serialize for MarkupNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}
