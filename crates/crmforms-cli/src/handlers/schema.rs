//! Schema command handler.

use anyhow::{Context, Result};
use crmforms_core::ObjectSchema;

use crate::commands::SchemaArgs;

/// Resolve the schema descriptor: a file when given, the preset otherwise.
///
/// The result is validated either way.
pub fn resolve(args: &SchemaArgs) -> Result<ObjectSchema> {
    let schema = match &args.schema_file {
        Some(path) => ObjectSchema::from_json_file(path)
            .with_context(|| format!("Cannot load schema from {}", path.display()))?,
        None => ObjectSchema::preset(&args.preset)?,
    };
    schema.validate()?;
    Ok(schema)
}

/// Execute the schema command.
///
/// Prints the resolved descriptor as pretty JSON, which is also the format
/// accepted by `--schema-file`.
pub fn execute(args: &SchemaArgs) -> Result<()> {
    let schema = resolve(args)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
