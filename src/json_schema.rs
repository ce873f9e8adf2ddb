//! JSON Schema generation for CLI output types.
//!
//! Covers every command that supports --json output. Schemas are exported
//! via the `schema` subcommand.

use schemars::{schema_for, Schema};
use std::collections::BTreeMap;

/// Returns all JSON schemas for commands that support --json output.
/// BTreeMap keeps the output order stable.
pub fn all_schemas() -> BTreeMap<&'static str, Schema> {
    let mut schemas = BTreeMap::new();
    schemas.insert("generate", schema_for!(crate::pipeline::GenerateStats));
    schemas.insert("verify", schema_for!(crate::verify::VerifySummary));
    schemas
}

/// Generate a single schema by command name.
pub fn get_schema(command: &str) -> Option<Schema> {
    all_schemas().remove(command)
}

/// List all available schema names.
pub fn schema_names() -> Vec<&'static str> {
    all_schemas().keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names() {
        assert_eq!(schema_names(), vec!["generate", "verify"]);
    }

    #[test]
    fn test_generate_schema_lists_fields() {
        let schema = get_schema("generate").unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        let props = json["properties"].as_object().unwrap();
        assert!(props.contains_key("seed"));
        assert!(props.contains_key("artifacts"));
        assert!(get_schema("split").is_none());
    }
}
