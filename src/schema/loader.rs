use anyhow::{Context, Result};
use serde_json::Value;

use super::FormDocument;

/// Source format for a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    #[cfg(feature = "json")]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

/// Parse schema text into a JSON value.
pub fn load_schema_str(input: &str, format: SchemaFormat) -> Result<Value> {
    match format {
        #[cfg(feature = "json")]
        SchemaFormat::Json => serde_json::from_str(input).context("schema is not valid JSON"),
        #[cfg(feature = "yaml")]
        SchemaFormat::Yaml => serde_yaml::from_str(input).context("schema is not valid YAML"),
        #[cfg(feature = "toml")]
        SchemaFormat::Toml => {
            let table: toml::Value = toml::from_str(input).context("schema is not valid TOML")?;
            serde_json::to_value(table).context("TOML schema does not map to JSON")
        }
    }
}

/// Load and parse a whole form document in one step.
pub fn load_form_document(input: &str, format: SchemaFormat) -> Result<FormDocument> {
    let value = load_schema_str(input, format)?;
    FormDocument::from_value(&value)
}
