//! JSON Schema gate for palette catalogs.
//!
//! The schema ships inside the binary so a catalog can be checked without
//! the repository on disk. It covers shapes and scalar types only; the
//! cross-reference invariants live in `palette::validate`.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

const COMPONENTS_SCHEMA: &str = include_str!("../schema/device_tree_components.schema.json");

static COMPILED: OnceLock<JSONSchema> = OnceLock::new();

/// Raw text of the bundled schema.
pub fn components_schema() -> &'static str {
    COMPONENTS_SCHEMA
}

fn compiled_schema() -> Result<&'static JSONSchema> {
    if let Some(schema) = COMPILED.get() {
        return Ok(schema);
    }
    let value: Value =
        serde_json::from_str(COMPONENTS_SCHEMA).context("parsing bundled components schema")?;
    let compiled = JSONSchema::compile(&value)
        .map_err(|err| anyhow!("compiling bundled components schema: {err}"))?;
    Ok(COMPILED.get_or_init(|| compiled))
}

/// Validate a catalog document, listing every schema error on failure.
pub(crate) fn validate_components_value(value: &Value, origin: &str) -> Result<()> {
    let schema = compiled_schema()?;
    if let Err(errors) = schema.validate(value) {
        let details = errors
            .map(|err| format!("  - {}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{origin} failed schema validation:\n{details}");
    }
    Ok(())
}
