//! Typed field schemas parsed from JSON-Schema-like documents.

pub mod loader;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    /// Missing or unrecognized `type`. Renders as a plain text input.
    #[default]
    Any,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Any => "any",
        }
    }
}

/// One form field's type and constraints. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSchema {
    pub kind: FieldKind,
    pub title: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub required: bool,
    pub default: Option<Value>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: bool,
    pub exclusive_maximum: bool,
    pub max_length: Option<u64>,
    /// `enum` values; turns the field into a selection control.
    pub options: Option<Vec<Value>>,
    /// Item schema for array fields.
    pub items: Option<Box<FieldSchema>>,
}

impl FieldSchema {
    pub fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Build a typed field schema from a JSON Schema fragment.
    ///
    /// Missing or unrecognized `type` values degrade to
    /// [`FieldKind::Any`] rather than failing; the one structural
    /// requirement is that an `array` schema defines `items`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(obj) = value.as_object() else {
            bail!("field schema must be a JSON object");
        };

        let kind = match read_type(value).as_deref() {
            Some("string") => FieldKind::String,
            Some("number") => FieldKind::Number,
            Some("integer") => FieldKind::Integer,
            Some("boolean") => FieldKind::Boolean,
            Some("array") => FieldKind::Array,
            _ => FieldKind::Any,
        };

        let items = if kind == FieldKind::Array {
            let items = obj.get("items").context("array schema must define items")?;
            Some(Box::new(Self::from_value(items)?))
        } else {
            None
        };

        Ok(Self {
            kind,
            title: string_entry(obj, "title"),
            description: string_entry(obj, "description"),
            format: string_entry(obj, "format"),
            required: obj
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            default: obj.get("default").cloned(),
            minimum: obj.get("minimum").and_then(Value::as_f64),
            maximum: obj.get("maximum").and_then(Value::as_f64),
            exclusive_minimum: obj
                .get("exclusiveMinimum")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            exclusive_maximum: obj
                .get("exclusiveMaximum")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            max_length: obj.get("maxLength").and_then(Value::as_u64),
            options: obj.get("enum").and_then(Value::as_array).cloned(),
            items,
        })
    }

    /// Label text: the declared `title`, or one derived from the name.
    pub fn display_label(&self, name: &str) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| prettify_label(name))
    }
}

/// A whole form: the root object schema's properties in declaration
/// order, each parsed into a [`FieldSchema`].
#[derive(Debug, Clone, Default)]
pub struct FormDocument {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldSchema>,
}

impl FormDocument {
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(obj) = value.as_object() else {
            bail!("schema must be a JSON object");
        };
        if let Some(ty) = read_type(value)
            && ty != "object"
        {
            bail!("root schema must be an object, found {ty}");
        }

        let properties = obj
            .get("properties")
            .and_then(Value::as_object)
            .context("object schema must define properties")?;
        let required = required_set(value);

        let mut fields = IndexMap::new();
        for (name, prop) in properties {
            let mut field = FieldSchema::from_value(prop)
                .with_context(|| format!("unsupported schema for field '{name}'"))?;
            if required.contains(&name.as_str()) {
                field.required = true;
            }
            fields.insert(name.clone(), field);
        }

        Ok(Self {
            title: string_entry(obj, "title"),
            description: string_entry(obj, "description"),
            fields,
        })
    }
}

fn read_type(value: &Value) -> Option<String> {
    match value.get("type")? {
        Value::String(s) => Some(s.to_lowercase()),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.to_lowercase())
            .find(|s| s != "null"),
        _ => None,
    }
}

// Root-level `required` arrays (draft 4+); per-field boolean flags
// (draft 3) are handled in `FieldSchema::from_value`.
fn required_set(value: &Value) -> Vec<&str> {
    value
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn string_entry(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn prettify_label(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(raw.len());
    let mut capitalize = true;
    for ch in raw.chars() {
        if ch == '_' || ch == '-' {
            result.push(' ');
            capitalize = true;
            continue;
        }

        if capitalize {
            result.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else {
            result.push(ch);
        }
    }

    result.trim().to_string()
}
