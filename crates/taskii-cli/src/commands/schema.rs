use anyhow::bail;
use taskii_core::entities::{CheckItem, Task};

use crate::cli::root_commands::SchemaArgs;

/// Handle `taskii schema`. Always prints JSON; the schema has no table form.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    let schema = match args.type_name.to_ascii_lowercase().replace('_', "-").as_str() {
        "task" => schemars::schema_for!(Task),
        "check-item" | "checkitem" => schemars::schema_for!(CheckItem),
        other => bail!("unknown schema type '{other}' (expected: task, check-item)"),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
