use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path of the compiled `dtpalette` binary.
pub fn dtpalette_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dtpalette"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn connection(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name })
}

pub fn item(component_type: &str, category: &str, icon: &str) -> Value {
    json!({
        "type": component_type,
        "label": component_type,
        "icon": icon,
        "category": category,
        "inputs": [connection("bus", "Bus")],
        "outputs": []
    })
}

pub fn category(key: &str, icon: &str, items: Vec<Value>) -> Value {
    json!({
        "key": key,
        "label": key,
        "icon": icon,
        "color": "#409eff",
        "items": items
    })
}

pub fn catalog(categories: Vec<Value>) -> Value {
    json!({ "categories": categories })
}

/// Catalog file living in its own temporary directory.
pub struct CatalogFile {
    _dir: TempDir,
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(value: &Value) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate catalog dir")?;
        let path = dir.path().join("components.json");
        let file = Self { _dir: dir, path };
        file.write(value)?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, value: &Value) -> Result<()> {
        self.write_raw(&serde_json::to_string_pretty(value)?)
    }

    pub fn write_raw(&self, text: &str) -> Result<()> {
        fs::write(&self.path, text)
            .with_context(|| format!("writing catalog {}", self.path.display()))
    }
}
