//! CLI handler for the schema command.

use media_fixtures::json_schema;

pub fn run(command: Option<String>) -> anyhow::Result<()> {
    match command {
        Some(name) => {
            let schema = json_schema::get_schema(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown command: {}. Available: {}",
                    name,
                    json_schema::schema_names().join(", ")
                )
            })?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        None => {
            let schemas = json_schema::all_schemas();
            println!("{}", serde_json::to_string_pretty(&schemas)?);
        }
    }
    Ok(())
}
